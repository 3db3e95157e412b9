use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Platform-agnostic input events.
///
/// These are fed into a
/// [`NavigationController`](crate::camera::controller::NavigationController)
/// together with the host that owns the viewports. Positions are display
/// pixels with the origin at the lower-left corner and y pointing up;
/// window systems with a top-left origin flip y before forwarding.
///
/// # Example
///
/// ```ignore
/// let outcome = controller.handle_event(
///     &mut window,
///     InputEvent::CursorMoved { x: 100, y: 200 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Cursor moved to absolute display position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: i32,
        /// Vertical position in pixels, measured from the bottom edge.
        y: i32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// One notch of the scroll wheel.
    Wheel {
        /// Forward zooms in, backward zooms out.
        direction: WheelDirection,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
        /// Whether the control key is held.
        ctrl: bool,
    },
    /// A character key was typed.
    Char {
        /// The typed character.
        character: char,
    },
}

/// Mouse buttons that can drive a navigation mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
}

impl MouseButton {
    /// All bindable buttons, in table order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Middle, Self::Right];

    /// Lowercase name used in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MouseButton {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|button| button.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| NavError::UnknownButton(s.to_owned()))
    }
}

#[cfg(feature = "viewer")]
impl TryFrom<winit::event::MouseButton> for MouseButton {
    type Error = NavError;

    fn try_from(button: winit::event::MouseButton) -> Result<Self, Self::Error> {
        match button {
            winit::event::MouseButton::Left => Ok(Self::Left),
            winit::event::MouseButton::Middle => Ok(Self::Middle),
            winit::event::MouseButton::Right => Ok(Self::Right),
            other => Err(NavError::UnknownButton(format!("{other:?}"))),
        }
    }
}

/// Scroll wheel notch direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelDirection {
    /// Away from the user (zoom in).
    Forward,
    /// Toward the user (zoom out).
    Backward,
}

impl WheelDirection {
    /// `1.0` for forward, `-1.0` for backward.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Modifier keys relevant to navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift selects the alternate binding table.
    pub shift: bool,
    /// Control locks a drag to its dominant axis.
    pub ctrl: bool,
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
        }
    }
}
