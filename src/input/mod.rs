//! Input handling: event types, pointer tracking, and the mouse/keyboard
//! binding tables that select navigation modes.

/// Mouse button → navigation mode tables.
pub mod bindings;
/// Platform-agnostic input events.
pub mod event;
/// Character → navigation action bindings.
pub mod keyboard;
/// Cursor position tracking and per-move samples.
pub mod pointer;

pub use bindings::{ButtonModes, Chord, MouseBindings};
pub use event::{InputEvent, Modifiers, MouseButton, WheelDirection};
pub use keyboard::{KeyAction, KeyBindings};
pub use pointer::MouseSample;
