use serde::{Deserialize, Serialize};

use super::event::MouseButton;
use crate::error::NavError;
use crate::interaction::{DragMode, InteractionMode};

/// Modifier chord selecting one of the two binding tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chord {
    /// No shift held.
    Plain,
    /// Shift held.
    Shift,
}

impl Chord {
    /// Chord for the given shift state.
    #[must_use]
    pub fn from_shift(shift: bool) -> Self {
        if shift {
            Self::Shift
        } else {
            Self::Plain
        }
    }
}

/// Mode per button for one chord. Every button always has a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonModes {
    /// Mode for the left button.
    pub left: DragMode,
    /// Mode for the middle button.
    pub middle: DragMode,
    /// Mode for the right button.
    pub right: DragMode,
}

impl ButtonModes {
    /// Left rotates, middle pans, right dollies.
    #[must_use]
    pub fn plain_defaults() -> Self {
        Self {
            left: DragMode::Rotate,
            middle: DragMode::Pan,
            right: DragMode::Dolly,
        }
    }

    /// Left and middle pan, right dollies.
    #[must_use]
    pub fn shift_defaults() -> Self {
        Self {
            left: DragMode::Pan,
            middle: DragMode::Pan,
            right: DragMode::Dolly,
        }
    }

    /// Mode bound to `button`.
    #[must_use]
    pub fn get(&self, button: MouseButton) -> DragMode {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
        }
    }

    fn slot_mut(&mut self, button: MouseButton) -> &mut DragMode {
        match button {
            MouseButton::Left => &mut self.left,
            MouseButton::Middle => &mut self.middle,
            MouseButton::Right => &mut self.right,
        }
    }
}

/// Button → mode tables for plain and shifted drags.
///
/// Serializes as two small TOML tables:
/// ```toml
/// [bindings.plain]
/// left = "rotate"
/// middle = "pan"
/// right = "dolly"
///
/// [bindings.shift]
/// left = "pan"
/// middle = "pan"
/// right = "dolly"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseBindings {
    /// Modes used when shift is not held.
    #[serde(default = "ButtonModes::plain_defaults")]
    pub plain: ButtonModes,
    /// Modes used when shift is held.
    #[serde(default = "ButtonModes::shift_defaults")]
    pub shift: ButtonModes,
}

impl Default for MouseBindings {
    fn default() -> Self {
        Self {
            plain: ButtonModes::plain_defaults(),
            shift: ButtonModes::shift_defaults(),
        }
    }
}

impl MouseBindings {
    /// Bind `button` (no shift) to `mode`.
    ///
    /// Fails with [`NavError::UnknownMode`] for [`InteractionMode::None`];
    /// the table is left unchanged on failure.
    pub fn bind(
        &mut self,
        button: MouseButton,
        mode: InteractionMode,
    ) -> Result<(), NavError> {
        self.bind_chord(Chord::Plain, button, mode)
    }

    /// Bind `button` with shift held to `mode`.
    pub fn bind_with_shift(
        &mut self,
        button: MouseButton,
        mode: InteractionMode,
    ) -> Result<(), NavError> {
        self.bind_chord(Chord::Shift, button, mode)
    }

    /// Bind using configuration names (`"left"`, `"rotate"`, ...).
    ///
    /// Both names are validated before anything is written.
    pub fn bind_named(
        &mut self,
        chord: Chord,
        button: &str,
        mode: &str,
    ) -> Result<(), NavError> {
        let button: MouseButton = button.parse()?;
        let mode: DragMode = mode.parse()?;
        *self.table_mut(chord).slot_mut(button) = mode;
        Ok(())
    }

    /// Restore the default mode for `button` under `chord`.
    pub fn unbind(&mut self, chord: Chord, button: MouseButton) {
        let default = match chord {
            Chord::Plain => ButtonModes::plain_defaults(),
            Chord::Shift => ButtonModes::shift_defaults(),
        };
        *self.table_mut(chord).slot_mut(button) = default.get(button);
    }

    /// Mode a press of `button` starts.
    #[must_use]
    pub fn mode_for(&self, button: MouseButton, chord: Chord) -> DragMode {
        self.table(chord).get(button)
    }

    /// Whether releasing `button` ends `mode`: true when either table
    /// binds the button to it, so a shift change mid-drag still releases.
    #[must_use]
    pub fn releases(&self, button: MouseButton, mode: InteractionMode) -> bool {
        mode.is_active()
            && (InteractionMode::from(self.plain.get(button)) == mode
                || InteractionMode::from(self.shift.get(button)) == mode)
    }

    fn bind_chord(
        &mut self,
        chord: Chord,
        button: MouseButton,
        mode: InteractionMode,
    ) -> Result<(), NavError> {
        let mode = DragMode::try_from(mode).inspect_err(|e| {
            log::warn!("rejected binding for {button} button: {e}");
        })?;
        *self.table_mut(chord).slot_mut(button) = mode;
        Ok(())
    }

    fn table(&self, chord: Chord) -> &ButtonModes {
        match chord {
            Chord::Plain => &self.plain,
            Chord::Shift => &self.shift,
        }
    }

    fn table_mut(&mut self, chord: Chord) -> &mut ButtonModes {
        match chord {
            Chord::Plain => &mut self.plain,
            Chord::Shift => &mut self.shift,
        }
    }
}
