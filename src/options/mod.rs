//! Navigation options with TOML preset support.
//!
//! Sensitivities, side-effect toggles and both binding tables are
//! consolidated here. Options serialize to/from TOML so a host can ship
//! presets alongside its own settings.

mod navigation;

use std::path::Path;

pub use navigation::NavigationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::input::{KeyBindings, MouseBindings};

/// Top-level options container. All sections use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[navigation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Sensitivities and side-effect toggles.
    pub navigation: NavigationOptions,
    /// Mouse button → mode tables.
    #[schemars(skip)]
    pub bindings: MouseBindings,
    /// Character → action bindings.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        toml::from_str(content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded navigation options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)?;
        log::info!("Saved navigation options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Chord, KeyAction, MouseButton};
    use crate::interaction::DragMode;

    #[test]
    fn default_round_trips_through_toml() {
        let mut opts = Options::default();
        opts.keybindings.bind('j', KeyAction::OrbitLeft);
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[navigation]
zoom_factor = 4.0

[bindings.shift]
left = "rotate"
middle = "pan"
right = "dolly"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.navigation.zoom_factor, 4.0);
        // Everything else should be default
        assert_eq!(opts.navigation.rotation_factor, 10.0);
        assert!(opts.navigation.auto_adjust_clipping_range);
        assert_eq!(
            opts.bindings.mode_for(MouseButton::Left, Chord::Shift),
            DragMode::Rotate
        );
        assert_eq!(
            opts.bindings.mode_for(MouseButton::Left, Chord::Plain),
            DragMode::Rotate
        );
        assert!(opts.keybindings.is_empty());
    }

    #[test]
    fn unknown_mode_name_fails_to_parse() {
        let toml_str = r#"
[bindings.plain]
left = "none"
middle = "pan"
right = "dolly"
"#;
        assert!(matches!(
            Options::from_toml(toml_str),
            Err(NavError::OptionsParse(_))
        ));
    }

    #[test]
    fn multi_character_key_fails_to_parse() {
        let toml_str = r#"
[keybindings.bindings]
ab = "dolly_in"
"#;
        assert!(matches!(
            Options::from_toml(toml_str),
            Err(NavError::OptionsParse(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("navcam-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.navigation.rotation_factor = 3.5;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["preset".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("navigation"));
        // Skipped sections should be absent
        assert!(!props.contains_key("bindings"));
        assert!(!props.contains_key("keybindings"));

        let navigation = &props["navigation"]["properties"];
        assert!(navigation.get("rotation_factor").is_some());
        assert!(navigation.get("zoom_factor").is_some());
        assert!(navigation.get("key_orbit_step").is_none());
    }
}
