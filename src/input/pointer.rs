use glam::IVec2;

use super::event::Modifiers;

/// One cursor step as seen by a navigation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseSample {
    /// Cursor position after the move, in display pixels.
    pub current: IVec2,
    /// Cursor position before the move.
    pub previous: IVec2,
    /// Whether shift was held.
    pub shift: bool,
    /// Whether control was held (axis lock).
    pub ctrl: bool,
}

impl MouseSample {
    /// Sample without modifiers.
    #[must_use]
    pub fn new(previous: IVec2, current: IVec2) -> Self {
        Self {
            current,
            previous,
            shift: false,
            ctrl: false,
        }
    }

    /// Same sample with the control modifier set.
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Raw pixel delta `current - previous`.
    #[must_use]
    pub fn delta(&self) -> IVec2 {
        self.current - self.previous
    }

    /// Pixel delta with the minor axis zeroed when control is held.
    /// Ties keep the horizontal component.
    #[must_use]
    pub fn locked_delta(&self) -> IVec2 {
        let delta = self.delta();
        if !self.ctrl {
            return delta;
        }
        if delta.x.abs() >= delta.y.abs() {
            IVec2::new(delta.x, 0)
        } else {
            IVec2::new(0, delta.y)
        }
    }

    /// Current position moved back onto the dominant axis when control is
    /// held, so `previous → locked_current()` has delta `locked_delta()`.
    #[must_use]
    pub fn locked_current(&self) -> IVec2 {
        self.previous + self.locked_delta()
    }
}

/// Tracks cursor position and modifier keys across events.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PointerState {
    position: IVec2,
    last_position: IVec2,
    modifiers: Modifiers,
}

impl PointerState {
    /// Record a cursor move; the old position becomes the last position.
    pub(crate) fn move_to(&mut self, x: i32, y: i32) {
        self.last_position = self.position;
        self.position = IVec2::new(x, y);
    }

    /// Update modifier keys.
    pub(crate) fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Current modifier keys.
    pub(crate) fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Current cursor position.
    pub(crate) fn position(&self) -> IVec2 {
        self.position
    }

    /// Snapshot of the latest cursor step.
    pub(crate) fn sample(&self) -> MouseSample {
        MouseSample {
            current: self.position,
            previous: self.last_position,
            shift: self.modifiers.shift,
            ctrl: self.modifiers.ctrl,
        }
    }
}
