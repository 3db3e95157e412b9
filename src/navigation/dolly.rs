//! Dolly (zoom).
//!
//! Factors greater than one zoom in. Orthographic cameras shrink their
//! parallel scale; perspective cameras move toward the focal point, or
//! toward the custom pivot while keeping it fixed on screen.

use glam::DVec3;

use super::pivot::Pivot;
use crate::camera::core::{CameraPose, GEOMETRY_EPSILON};
use crate::input::event::WheelDirection;
use crate::input::pointer::MouseSample;

/// Base raised to the scaled cursor/wheel motion to get a dolly factor.
pub const DOLLY_BASE: f64 = 1.1;
/// Wheel notch size in the same units as a normalized vertical drag.
pub const WHEEL_STEP: f64 = 0.2;
/// Largest fraction of the camera-to-pivot distance one step may cover.
/// Without it a factor of 2 or more lands on or past the pivot.
pub const MAX_PIVOT_APPROACH: f64 = 0.95;

/// Dolly factor for a vertical drag: `1.1^(zoom_factor * 2 * dy / height)`.
/// Dragging up (display y increasing) zooms in.
#[must_use]
pub fn drag_factor(
    sample: &MouseSample,
    size: (u32, u32),
    zoom_factor: f64,
) -> Option<f64> {
    let height = size.1;
    if height == 0 {
        return None;
    }
    let dy = f64::from(sample.delta().y);
    Some(DOLLY_BASE.powf(zoom_factor * 2.0 * dy / f64::from(height)))
}

/// Dolly factor for one wheel notch.
#[must_use]
pub fn wheel_factor(
    direction: WheelDirection,
    zoom_factor: f64,
    wheel_motion_factor: f64,
) -> f64 {
    DOLLY_BASE.powf(
        zoom_factor * WHEEL_STEP * direction.sign() * wheel_motion_factor,
    )
}

/// Apply a dolly `factor` to `pose`.
///
/// Returns `None` for non-positive or non-finite factors and for results
/// that would collapse the view direction.
#[must_use]
pub fn dolly(
    pose: &CameraPose,
    factor: f64,
    pivot: &Pivot,
) -> Option<CameraPose> {
    if !(factor.is_finite() && factor > 0.0) {
        return None;
    }

    if pose.parallel_projection {
        let mut next = *pose;
        next.parallel_scale = pose.parallel_scale / factor;
        return (next.parallel_scale.is_finite()
            && next.parallel_scale > 0.0)
            .then_some(next);
    }

    let next = match pivot {
        Pivot::FocalPoint => pose.dolly(factor),
        Pivot::Custom(center) => dolly_toward(pose, *center, factor)?,
    };
    (next.is_finite() && next.distance() > GEOMETRY_EPSILON).then_some(next)
}

/// Move toward `center` by `(factor - 1)` of the camera-to-center vector,
/// then re-aim the focal point at `center`'s projection onto the view line.
fn dolly_toward(
    pose: &CameraPose,
    center: DVec3,
    factor: f64,
) -> Option<CameraPose> {
    let step = (factor - 1.0).min(MAX_PIVOT_APPROACH);
    let moved = pose.translated((center - pose.position) * step);

    let line = moved.focal_point - moved.position;
    let length_sq = line.length_squared();
    if length_sq <= GEOMETRY_EPSILON {
        return None;
    }
    let t = (center - moved.position).dot(line) / length_sq;

    let mut next = moved;
    if t > GEOMETRY_EPSILON {
        next.focal_point = moved.position + line * t;
    } else {
        log::debug!("dolly: pivot not in front of camera, focal point kept");
    }
    Some(next)
}
