//! Orbit (rotate) about a pivot.
//!
//! Yaw and pitch are derived from the camera's current basis on every call
//! rather than accumulated, so each step depends only on the pose it is
//! given. The view up is never rotated; instead the elevation is limited so
//! the view direction cannot become parallel to it.

use glam::{DAffine3, DQuat, DVec3};

use super::pivot::Pivot;
use crate::camera::core::CameraPose;
use crate::input::pointer::MouseSample;

/// Degrees of rotation per full-window drag at a rotation factor of 1.
pub const DEGREES_PER_WINDOW: f64 = 18.0;
/// Smallest allowed angle between view direction and view up, in degrees.
pub const MIN_VIEW_UP_ANGLE: f64 = 3.0;
/// Largest allowed angle between view direction and view up, in degrees.
pub const MAX_VIEW_UP_ANGLE: f64 = 177.0;

/// How elevation is limited near the poles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoleGuard {
    /// Shorten the elevation so the result lands on the nearer bound.
    Clamp,
    /// Drop the elevation for this step entirely.
    Suppress,
}

impl PoleGuard {
    /// Guard used for a pivot: clamping for a custom center, suppression
    /// when orbiting the focal point.
    #[must_use]
    pub fn for_pivot(pivot: &Pivot) -> Self {
        if pivot.is_custom() {
            Self::Clamp
        } else {
            Self::Suppress
        }
    }

    /// Limit `elevation` given the current view/up `angle` (degrees).
    #[must_use]
    pub fn limit(self, angle: f64, elevation: f64) -> f64 {
        let target = angle + elevation;
        if (MIN_VIEW_UP_ANGLE..=MAX_VIEW_UP_ANGLE).contains(&target) {
            return elevation;
        }
        match self {
            Self::Suppress => 0.0,
            Self::Clamp if target > MAX_VIEW_UP_ANGLE => {
                MAX_VIEW_UP_ANGLE - angle
            }
            Self::Clamp => MIN_VIEW_UP_ANGLE - angle,
        }
    }
}

/// Convert a cursor step into `(azimuth, elevation)` degrees.
///
/// Dragging right yields a negative azimuth, dragging down (display y
/// decreasing) a positive elevation. With control held only the dominant
/// axis contributes. Returns `None` for an empty viewport.
#[must_use]
pub fn drag_angles(
    sample: &MouseSample,
    size: (u32, u32),
    rotation_factor: f64,
) -> Option<(f64, f64)> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return None;
    }
    let delta = sample.locked_delta();
    let scale = rotation_factor * DEGREES_PER_WINDOW;
    let azimuth = scale * f64::from(-delta.x) / f64::from(width);
    let elevation = scale * f64::from(-delta.y) / f64::from(height);
    Some((azimuth, elevation))
}

/// Orbit `pose` about `pivot` by the given angles (degrees).
///
/// Azimuth turns about the view up, elevation about the camera's left axis;
/// both position and focal point are carried along so the distance to the
/// pivot is unchanged.
#[must_use]
pub fn orbit(
    pose: &CameraPose,
    pivot: DVec3,
    azimuth: f64,
    elevation: f64,
    guard: PoleGuard,
) -> Option<CameraPose> {
    let up = pose.view_up.try_normalize()?;

    let mut rotation = DQuat::from_axis_angle(up, azimuth.to_radians());
    if elevation != 0.0 {
        match (pose.right(), pose.view_up_angle()) {
            (Some(right), Some(angle)) => {
                let elevation = guard.limit(angle, elevation);
                rotation *=
                    DQuat::from_axis_angle(-right, elevation.to_radians());
            }
            _ => log::debug!("orbit: view direction parallel to view up"),
        }
    }

    let transform = DAffine3::from_translation(pivot)
        * DAffine3::from_quat(rotation)
        * DAffine3::from_translation(-pivot);

    let mut next = *pose;
    next.position = transform.transform_point3(pose.position);
    next.focal_point = transform.transform_point3(pose.focal_point);
    next.is_finite().then_some(next)
}

/// Orbit for one cursor step.
#[must_use]
pub fn rotate(
    pose: &CameraPose,
    sample: &MouseSample,
    size: (u32, u32),
    rotation_factor: f64,
    pivot: &Pivot,
) -> Option<CameraPose> {
    let (azimuth, elevation) = drag_angles(sample, size, rotation_factor)?;
    orbit(
        pose,
        pivot.resolve(pose),
        azimuth,
        elevation,
        PoleGuard::for_pivot(pivot),
    )
}
