use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Lengths below this are treated as zero when building camera bases.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Complete camera state as seen by the navigation code.
///
/// The view up vector is not required to be orthogonal to the view
/// direction; every derived basis re-orthogonalizes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub position: DVec3,
    /// Look-at point in world space.
    pub focal_point: DVec3,
    /// Up direction hint.
    pub view_up: DVec3,
    /// Vertical field of view in degrees (perspective only).
    pub view_angle: f64,
    /// Whether the camera uses an orthographic projection.
    pub parallel_projection: bool,
    /// Half of the visible world height (orthographic only).
    pub parallel_scale: f64,
    /// Near and far clipping distances along the view direction.
    pub clipping_range: (f64, f64),
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 1.0),
            focal_point: DVec3::ZERO,
            view_up: DVec3::Y,
            view_angle: 30.0,
            parallel_projection: false,
            parallel_scale: 1.0,
            clipping_range: (0.01, 1000.01),
        }
    }
}

impl CameraPose {
    /// Perspective pose looking from `position` at `focal_point`.
    #[must_use]
    pub fn looking_at(
        position: DVec3,
        focal_point: DVec3,
        view_up: DVec3,
    ) -> Self {
        Self {
            position,
            focal_point,
            view_up,
            ..Self::default()
        }
    }

    /// Distance from the camera position to the focal point.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.position.distance(self.focal_point)
    }

    /// Unit vector from the position toward the focal point, or zero when
    /// the two coincide.
    #[must_use]
    pub fn direction_of_projection(&self) -> DVec3 {
        (self.focal_point - self.position).normalize_or_zero()
    }

    /// Unit vector pointing from the focal point back toward the camera.
    #[must_use]
    pub fn view_plane_normal(&self) -> DVec3 {
        -self.direction_of_projection()
    }

    /// Camera right axis (`dop × up`), or `None` when the view up is
    /// parallel to the view direction.
    #[must_use]
    pub fn right(&self) -> Option<DVec3> {
        let right = self.direction_of_projection().cross(self.view_up);
        (right.length() > GEOMETRY_EPSILON)
            .then(|| right.normalize())
    }

    /// View up re-orthogonalized against the view direction.
    #[must_use]
    pub fn orthogonal_up(&self) -> Option<DVec3> {
        let right = self.right()?;
        right.cross(self.direction_of_projection()).try_normalize()
    }

    /// Angle in degrees between the view direction and the view up.
    ///
    /// 90 means level, values near 0 or 180 mean the camera looks almost
    /// straight along the up axis.
    #[must_use]
    pub fn view_up_angle(&self) -> Option<f64> {
        let dop = self.direction_of_projection().try_normalize()?;
        let up = self.view_up.try_normalize()?;
        Some(dop.dot(up).clamp(-1.0, 1.0).acos().to_degrees())
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Option<DMat4> {
        let up = self.orthogonal_up()?;
        Some(DMat4::look_at_rh(self.position, self.focal_point, up))
    }

    /// Camera-to-clip transform for the given aspect ratio (OpenGL depth
    /// convention, NDC z in [-1, 1]).
    #[must_use]
    pub fn projection_matrix(&self, aspect: f64) -> DMat4 {
        let (near, far) = self.clipping_range;
        if self.parallel_projection {
            let half_h = self.parallel_scale;
            let half_w = half_h * aspect;
            DMat4::orthographic_rh_gl(
                -half_w, half_w, -half_h, half_h, near, far,
            )
        } else {
            DMat4::perspective_rh_gl(
                self.view_angle.to_radians(),
                aspect,
                near,
                far,
            )
        }
    }

    /// Whether every component of the pose is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.focal_point.is_finite()
            && self.view_up.is_finite()
            && self.view_angle.is_finite()
            && self.parallel_scale.is_finite()
            && self.clipping_range.0.is_finite()
            && self.clipping_range.1.is_finite()
    }

    /// Whether the pose can be handed to a renderer: finite, with a
    /// non-zero view direction and a positive scale.
    ///
    /// A view up parallel to the view direction is allowed; operations that
    /// need a right axis skip themselves for such poses.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.is_finite()
            && self.distance() > GEOMETRY_EPSILON
            && self.view_angle > 0.0
            && self.view_angle < 180.0
            && self.parallel_scale > 0.0
    }

    /// Move position and focal point together by `offset`.
    #[must_use]
    pub fn translated(mut self, offset: DVec3) -> Self {
        self.position += offset;
        self.focal_point += offset;
        self
    }

    /// Move the position along the view direction so the distance to the
    /// focal point is divided by `factor`. Non-positive factors are ignored.
    #[must_use]
    pub fn dolly(mut self, factor: f64) -> Self {
        if factor <= 0.0 || !factor.is_finite() {
            return self;
        }
        let distance = self.distance() / factor;
        self.position =
            self.focal_point - self.direction_of_projection() * distance;
        self
    }

    /// Rotate the position about the focal point around the view up.
    #[must_use]
    pub fn azimuth(mut self, degrees: f64) -> Self {
        let Some(axis) = self.view_up.try_normalize() else {
            return self;
        };
        let rotation = DQuat::from_axis_angle(axis, degrees.to_radians());
        self.position =
            self.focal_point + rotation * (self.position - self.focal_point);
        self
    }

    /// Rotate the position about the focal point around the camera's
    /// left axis. The view up is left untouched, so large elevations can
    /// reach the pole.
    #[must_use]
    pub fn elevation(mut self, degrees: f64) -> Self {
        let Some(right) = self.right() else {
            return self;
        };
        let rotation = DQuat::from_axis_angle(-right, degrees.to_radians());
        self.position =
            self.focal_point + rotation * (self.position - self.focal_point);
        self
    }
}
