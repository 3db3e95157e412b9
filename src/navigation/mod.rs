//! Navigation algorithms.
//!
//! Every function here is pure: it takes the current [`CameraPose`], the
//! cursor step and viewport size, and returns the pose to apply, or `None`
//! when the geometry is too degenerate to produce a finite result. Callers
//! skip the frame on `None`.
//!
//! [`CameraPose`]: crate::camera::core::CameraPose

/// Zoom by factor, about the focal point or a custom pivot.
pub mod dolly;
/// Orbit about a pivot with pole avoidance.
pub mod orbit;
/// Screen-space translation.
pub mod pan;
/// Pivot selection.
pub mod pivot;

pub use pan::world_units_per_pixel;
pub use pivot::Pivot;
