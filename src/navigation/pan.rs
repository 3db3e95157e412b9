//! Pan: translate camera and focal point together so the world point under
//! the cursor follows the cursor.
//!
//! Two strategies are provided. Orbiting the focal point uses depth-plane
//! unprojection; a custom center of rotation uses a right/up basis scaled
//! to the visible extent at the pivot's depth.

use glam::DVec3;

use super::pivot::Pivot;
use crate::camera::core::{CameraPose, GEOMETRY_EPSILON};
use crate::camera::projection::ScreenProjection;
use crate::input::pointer::MouseSample;

/// World-space length covered by one pixel at `point`'s depth.
///
/// Parallel projections use the parallel scale; perspective projections use
/// the distance of `point` along the view direction. Returns `None` when
/// the viewport has no height or the point is not in front of the camera.
#[must_use]
pub fn world_units_per_pixel(
    pose: &CameraPose,
    point: DVec3,
    viewport_height: u32,
) -> Option<f64> {
    if viewport_height == 0 {
        return None;
    }
    let world_height = if pose.parallel_projection {
        2.0 * pose.parallel_scale
    } else {
        let depth = (point - pose.position).dot(pose.direction_of_projection());
        if depth <= GEOMETRY_EPSILON {
            return None;
        }
        2.0 * depth * (0.5 * pose.view_angle.to_radians()).tan()
    };
    let scale = world_height / f64::from(viewport_height);
    (scale.is_finite() && scale > 0.0).then_some(scale)
}

/// Pan by unprojecting both cursor positions at the focal point's depth.
#[must_use]
pub fn pan_in_focal_plane(
    pose: &CameraPose,
    sample: &MouseSample,
    size: (u32, u32),
) -> Option<CameraPose> {
    let projection = ScreenProjection::new(pose, size)?;
    let focal = projection.world_to_display(pose.focal_point)?;
    let current = sample.locked_current();
    let previous = sample.previous;

    let to = projection.display_to_world(
        f64::from(current.x),
        f64::from(current.y),
        focal.z,
    )?;
    let from = projection.display_to_world(
        f64::from(previous.x),
        f64::from(previous.y),
        focal.z,
    )?;

    let motion = from - to;
    motion.is_finite().then(|| pose.translated(motion))
}

/// Camera right and up vectors scaled to half the visible width and height
/// at the depth of `pivot`.
///
/// A pivot that is not in front of the camera falls back to the focal
/// point's depth.
#[must_use]
pub fn scaled_basis(
    pose: &CameraPose,
    pivot: DVec3,
    size: (u32, u32),
) -> Option<(DVec3, DVec3)> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return None;
    }
    let per_pixel = world_units_per_pixel(pose, pivot, height).or_else(|| {
        log::debug!("pan: pivot behind camera, using focal depth");
        world_units_per_pixel(pose, pose.focal_point, height)
    })?;
    let half_height = per_pixel * f64::from(height) * 0.5;
    let half_width = per_pixel * f64::from(width) * 0.5;

    let normal = pose.view_plane_normal();
    let right = pose.view_up.cross(normal).try_normalize()?;
    let up = normal.cross(right).try_normalize()?;
    Some((right * half_width, up * half_height))
}

/// Pan by moving along the scaled camera basis at the pivot's depth.
#[must_use]
pub fn pan_with_basis(
    pose: &CameraPose,
    sample: &MouseSample,
    size: (u32, u32),
    pivot: DVec3,
) -> Option<CameraPose> {
    let (right, up) = scaled_basis(pose, pivot, size)?;
    let delta = sample.locked_delta();
    let dx = 2.0 * f64::from(delta.x) / f64::from(size.0);
    let dy = 2.0 * f64::from(delta.y) / f64::from(size.1);
    let offset = -dx * right - dy * up;
    offset.is_finite().then(|| pose.translated(offset))
}

/// Pan for one cursor step, choosing the strategy from the pivot.
#[must_use]
pub fn pan(
    pose: &CameraPose,
    sample: &MouseSample,
    size: (u32, u32),
    pivot: &Pivot,
) -> Option<CameraPose> {
    match pivot {
        Pivot::FocalPoint => pan_in_focal_plane(pose, sample, size),
        Pivot::Custom(center) => pan_with_basis(pose, sample, size, *center),
    }
}
