use std::collections::HashMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Navigation actions that can be bound to typed characters.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// j = "orbit_left"
/// l = "orbit_right"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Orbit by one key step toward the left.
    OrbitLeft,
    /// Orbit by one key step toward the right.
    OrbitRight,
    /// Raise the camera by one key step.
    OrbitUp,
    /// Lower the camera by one key step.
    OrbitDown,
    /// One wheel-forward dolly pulse.
    DollyIn,
    /// One wheel-backward dolly pulse.
    DollyOut,
    /// Drop the custom center of rotation and orbit the focal point again.
    ClearCenterOfRotation,
}

/// Maps typed characters to [`KeyAction`]s.
///
/// Empty by default: every character is delegated to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Character (as a one-character string) → action.
    #[serde(deserialize_with = "single_char_keys")]
    bindings: HashMap<String, KeyAction>,
}

fn single_char_keys<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, KeyAction>, D::Error>
where
    D: Deserializer<'de>,
{
    let bindings = HashMap::<String, KeyAction>::deserialize(deserializer)?;
    if let Some(key) = bindings.keys().find(|key| key.chars().count() != 1) {
        return Err(D::Error::custom(format!(
            "key binding `{key}` is not a single character"
        )));
    }
    Ok(bindings)
}

impl KeyBindings {
    /// Bind `character` to `action`, replacing any previous binding.
    pub fn bind(&mut self, character: char, action: KeyAction) {
        let _ = self.bindings.insert(character.to_string(), action);
    }

    /// Remove the binding for `character`, returning the old action.
    pub fn unbind(&mut self, character: char) -> Option<KeyAction> {
        self.bindings.remove(character.to_string().as_str())
    }

    /// Look up the action for a typed character.
    #[must_use]
    pub fn lookup(&self, character: char) -> Option<KeyAction> {
        let mut buf = [0u8; 4];
        self.bindings
            .get(&*character.encode_utf8(&mut buf))
            .copied()
    }

    /// Whether no characters are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
