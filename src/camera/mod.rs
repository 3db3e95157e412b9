//! Camera model and interactive navigation.
//!
//! Provides the camera pose value type, screen projection, the viewport
//! interface a host implements, and the controller that turns input events
//! into orbit, pan and dolly.

/// Interaction state machine driving navigation from input events.
pub mod controller;
/// Camera pose and derived view quantities.
pub mod core;
/// Window-event translation for winit hosts.
#[cfg(feature = "viewer")]
pub mod input;
/// World ↔ display transforms.
pub mod projection;
/// Viewport and host traits, plus an in-memory viewport.
pub mod viewport;

pub use controller::{NavigationController, Outcome};
pub use self::core::CameraPose;
pub use projection::ScreenProjection;
pub use viewport::{OffscreenViewport, Viewport, ViewportHost};
