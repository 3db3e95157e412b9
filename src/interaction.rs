//! Interaction modes and the start/stop state machine they move through.

use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Which navigation gesture, if any, is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
    /// No drag in progress.
    #[default]
    None,
    /// Orbiting about the pivot.
    Rotate,
    /// Translating camera and focal point together.
    Pan,
    /// Changing viewing distance or parallel scale.
    Dolly,
}

impl InteractionMode {
    /// Lowercase name used in logs and configuration.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rotate => "rotate",
            Self::Pan => "pan",
            Self::Dolly => "dolly",
        }
    }

    /// Whether this is an active drag mode.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InteractionMode {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }
        s.parse::<DragMode>().map(Self::from)
    }
}

/// The subset of [`InteractionMode`] a mouse button can be bound to.
///
/// Binding tables store this type, so a button can never resolve to
/// [`InteractionMode::None`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    /// Orbit about the pivot.
    Rotate,
    /// Translate the view.
    Pan,
    /// Zoom.
    Dolly,
}

impl From<DragMode> for InteractionMode {
    fn from(mode: DragMode) -> Self {
        match mode {
            DragMode::Rotate => Self::Rotate,
            DragMode::Pan => Self::Pan,
            DragMode::Dolly => Self::Dolly,
        }
    }
}

impl TryFrom<InteractionMode> for DragMode {
    type Error = NavError;

    fn try_from(mode: InteractionMode) -> Result<Self, Self::Error> {
        match mode {
            InteractionMode::Rotate => Ok(Self::Rotate),
            InteractionMode::Pan => Ok(Self::Pan),
            InteractionMode::Dolly => Ok(Self::Dolly),
            InteractionMode::None => {
                Err(NavError::UnknownMode(mode.name().to_owned()))
            }
        }
    }
}

impl FromStr for DragMode {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rotate" => Ok(Self::Rotate),
            "pan" => Ok(Self::Pan),
            "dolly" => Ok(Self::Dolly),
            _ => Err(NavError::UnknownMode(s.to_owned())),
        }
    }
}

/// Current mode plus the exclusive-focus flag.
///
/// At most one mode is active at a time. Starting a mode while another is
/// active is refused rather than switching mid-drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    mode: InteractionMode,
    focus: bool,
}

impl InteractionState {
    /// The active mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Whether the controller currently holds exclusive input focus.
    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.focus
    }

    /// Whether no drag is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.mode.is_active()
    }

    /// Enter `mode` from idle and grab focus. Returns `false` (and changes
    /// nothing) when another mode is already active.
    pub fn start(&mut self, mode: DragMode) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.mode = mode.into();
        self.focus = true;
        true
    }

    /// Return to idle and release focus, yielding the mode that ended.
    pub fn stop(&mut self) -> Option<DragMode> {
        let ended = DragMode::try_from(self.mode).ok();
        self.mode = InteractionMode::None;
        self.focus = false;
        ended
    }

    /// Grab focus for a one-shot operation without changing the mode.
    pub fn grab_focus(&mut self) {
        self.focus = true;
    }

    /// Release focus unless a drag still needs it.
    pub fn release_focus(&mut self) {
        if self.is_idle() {
            self.focus = false;
        }
    }
}
