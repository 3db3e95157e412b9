use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Sensitivity and side-effect settings for camera navigation.
pub struct NavigationOptions {
    /// Orbit sensitivity; a full-window drag turns `18°` times this.
    #[schemars(title = "Rotation Factor", range(min = 1.0, max = 40.0), extend("step" = 0.5))]
    pub rotation_factor: f64,
    /// Dolly sensitivity for drags and wheel pulses.
    #[schemars(title = "Zoom Factor", range(min = 1.0, max = 40.0), extend("step" = 0.5))]
    pub zoom_factor: f64,
    /// Platform wheel-notch scale applied to every wheel pulse.
    #[schemars(title = "Wheel Motion", range(min = 0.1, max = 4.0), extend("step" = 0.1))]
    pub mouse_wheel_motion_factor: f64,
    /// Reset the clipping range after every camera change.
    #[schemars(title = "Auto Clipping Range")]
    pub auto_adjust_clipping_range: bool,
    /// Move camera-attached lights after every camera change.
    #[schemars(title = "Lights Follow Camera")]
    pub light_follow_camera: bool,
    /// Degrees turned by one orbit key press.
    #[schemars(skip)]
    pub key_orbit_step: f64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            rotation_factor: 10.0,
            zoom_factor: 10.0,
            mouse_wheel_motion_factor: 1.0,
            auto_adjust_clipping_range: true,
            light_follow_camera: true,
            key_orbit_step: 5.0,
        }
    }
}
