//! Screen ↔ world transforms for a camera pose rendered into a viewport.
//!
//! Display coordinates are pixels with the origin at the lower-left corner
//! of the viewport and y pointing up. Display depth is the normalized
//! device depth remapped to [0, 1] (0 = near plane, 1 = far plane).

use glam::{DMat4, DVec2, DVec3, DVec4};

use super::core::CameraPose;

/// Pre-computed view-projection for one pose and viewport size.
#[derive(Debug, Clone, Copy)]
pub struct ScreenProjection {
    view_proj: DMat4,
    inverse: DMat4,
    size: DVec2,
}

impl ScreenProjection {
    /// Build the projection, or `None` when the pose has no valid basis,
    /// the viewport is empty, or the matrix cannot be inverted.
    #[must_use]
    pub fn new(pose: &CameraPose, size: (u32, u32)) -> Option<Self> {
        let (width, height) = size;
        if width == 0 || height == 0 {
            return None;
        }
        let size = DVec2::new(f64::from(width), f64::from(height));
        let view = pose.view_matrix()?;
        let view_proj = pose.projection_matrix(size.x / size.y) * view;
        // Singular matrices invert to non-finite entries.
        let inverse = view_proj.inverse();
        if !(view_proj.is_finite() && inverse.is_finite()) {
            return None;
        }
        Some(Self {
            view_proj,
            inverse,
            size,
        })
    }

    /// Project a world point to display `(x, y, depth)`.
    #[must_use]
    pub fn world_to_display(&self, world: DVec3) -> Option<DVec3> {
        let clip = self.view_proj * world.extend(1.0);
        if clip.w.abs() < f64::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let display = DVec3::new(
            (ndc.x + 1.0) * 0.5 * self.size.x,
            (ndc.y + 1.0) * 0.5 * self.size.y,
            (ndc.z + 1.0) * 0.5,
        );
        display.is_finite().then_some(display)
    }

    /// Unproject display `(x, y)` at `depth` back into world space.
    #[must_use]
    pub fn display_to_world(
        &self,
        x: f64,
        y: f64,
        depth: f64,
    ) -> Option<DVec3> {
        let ndc = DVec4::new(
            2.0 * x / self.size.x - 1.0,
            2.0 * y / self.size.y - 1.0,
            2.0 * depth - 1.0,
            1.0,
        );
        let world = self.inverse * ndc;
        if world.w.abs() < f64::EPSILON {
            return None;
        }
        let world = world.truncate() / world.w;
        world.is_finite().then_some(world)
    }
}
