//! Host-side collaborators: the viewport that owns a camera and the window
//! that resolves which viewport sits under the cursor.

use glam::DVec3;

use super::core::CameraPose;
use super::projection::ScreenProjection;

/// A rendered region that owns a camera.
///
/// The navigation controller never mutates the camera in place; it computes
/// a new [`CameraPose`] and hands it to [`apply_pose`](Self::apply_pose).
pub trait Viewport {
    /// Size in pixels (width, height).
    fn size(&self) -> (u32, u32);

    /// Current camera pose.
    fn camera(&self) -> &CameraPose;

    /// Replace the camera pose.
    fn apply_pose(&mut self, pose: CameraPose);

    /// Recompute near/far planes from the visible scene bounds.
    fn reset_clipping_range(&mut self) {}

    /// Move lights that follow the camera.
    fn update_lights(&mut self) {}

    /// Ask the host to redraw this viewport.
    fn request_redraw(&mut self);

    /// Project a world point to display `(x, y, depth)`.
    fn world_to_display(&self, world: DVec3) -> Option<DVec3> {
        ScreenProjection::new(self.camera(), self.size())?
            .world_to_display(world)
    }

    /// Unproject display `(x, y)` at `depth` into world space.
    fn display_to_world(&self, x: f64, y: f64, depth: f64) -> Option<DVec3> {
        ScreenProjection::new(self.camera(), self.size())?
            .display_to_world(x, y, depth)
    }
}

/// Resolves pixel coordinates to the viewport beneath them.
pub trait ViewportHost {
    /// The viewport containing display position `(x, y)`, if any.
    fn viewport_at(&mut self, x: i32, y: i32) -> Option<&mut dyn Viewport>;
}

/// In-memory viewport that records the side effects requested of it.
///
/// It also acts as a host with exactly one viewport covering the whole
/// window, which is enough to drive the controller without a window
/// system.
#[derive(Debug, Clone, PartialEq)]
pub struct OffscreenViewport {
    pose: CameraPose,
    size: (u32, u32),
    bounds: Option<(DVec3, DVec3)>,
    /// Number of redraw requests received.
    pub redraws: usize,
    /// Number of light updates received.
    pub light_updates: usize,
    /// Number of clipping range resets received.
    pub clipping_resets: usize,
}

impl OffscreenViewport {
    /// Viewport of `size` pixels showing `pose`.
    #[must_use]
    pub fn new(pose: CameraPose, size: (u32, u32)) -> Self {
        Self {
            pose,
            size,
            bounds: None,
            redraws: 0,
            light_updates: 0,
            clipping_resets: 0,
        }
    }

    /// Scene bounds (min corner, max corner) used to reset the clipping
    /// range. Without bounds the clipping range is left alone.
    #[must_use]
    pub fn with_bounds(mut self, min: DVec3, max: DVec3) -> Self {
        self.bounds = Some((min.min(max), min.max(max)));
        self
    }

    /// Change the viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    /// Whether display position `(x, y)` lies inside the viewport.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let inside = |v: i32, extent: u32| {
            u32::try_from(v).is_ok_and(|v| v < extent)
        };
        inside(x, self.size.0) && inside(y, self.size.1)
    }
}

impl Viewport for OffscreenViewport {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn camera(&self) -> &CameraPose {
        &self.pose
    }

    fn apply_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
    }

    fn reset_clipping_range(&mut self) {
        self.clipping_resets += 1;
        let Some((min, max)) = self.bounds else {
            return;
        };
        let dop = self.pose.direction_of_projection();
        let mut near = f64::INFINITY;
        let mut far = f64::NEG_INFINITY;
        for i in 0..8 {
            let corner = DVec3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            );
            let depth = (corner - self.pose.position).dot(dop);
            near = near.min(depth);
            far = far.max(depth);
        }
        if !(far > 0.0 && far.is_finite()) {
            log::debug!("clipping range: scene is behind the camera");
            return;
        }
        // Pad by 1% and keep the near plane in front of the camera.
        let pad = 0.01 * (far - near).max(far * 0.01);
        let far = far + pad;
        let near = (near - pad).max(far * 0.001);
        self.pose.clipping_range = (near, far);
    }

    fn update_lights(&mut self) {
        self.light_updates += 1;
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

impl ViewportHost for OffscreenViewport {
    fn viewport_at(&mut self, x: i32, y: i32) -> Option<&mut dyn Viewport> {
        if self.contains(x, y) {
            Some(self)
        } else {
            None
        }
    }
}
