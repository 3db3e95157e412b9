use glam::DVec3;

use crate::camera::core::CameraPose;

/// Point that orbit (and, for a custom point, dolly and pan scaling)
/// operate relative to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Pivot {
    /// Orbit the camera's own focal point.
    #[default]
    FocalPoint,
    /// Orbit and dolly about a picked world-space point.
    Custom(DVec3),
}

impl Pivot {
    /// World-space pivot for `pose`.
    #[must_use]
    pub fn resolve(&self, pose: &CameraPose) -> DVec3 {
        match self {
            Self::FocalPoint => pose.focal_point,
            Self::Custom(point) => *point,
        }
    }

    /// Whether a custom center of rotation is in use.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl From<Option<DVec3>> for Pivot {
    fn from(center: Option<DVec3>) -> Self {
        center.map_or(Self::FocalPoint, Self::Custom)
    }
}
