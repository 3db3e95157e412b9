use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

use crate::input::{InputEvent, Modifiers, MouseButton, WheelDirection};

/// Trackpad pixels that add up to one wheel notch.
const PIXELS_PER_NOTCH: f64 = 50.0;

/// Translates winit window events into navigation [`InputEvent`]s.
///
/// Tracks the window height to flip winit's top-left origin into display
/// coordinates, and accumulates fractional scroll deltas until they add up
/// to whole wheel notches.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowInput {
    height: u32,
    scroll: f64,
}

impl WindowInput {
    /// Adapter for a window `height` pixels tall.
    #[must_use]
    pub fn new(height: u32) -> Self {
        Self { height, scroll: 0.0 }
    }

    /// Events produced by one window event. Most produce zero or one;
    /// a large scroll or a multi-character text input produces several.
    pub fn translate(&mut self, event: &WindowEvent) -> Vec<InputEvent> {
        match event {
            WindowEvent::Resized(size) => {
                self.height = size.height;
                Vec::new()
            }
            WindowEvent::CursorMoved { position, .. } => {
                let y = f64::from(self.height) - 1.0 - position.y;
                vec![InputEvent::CursorMoved {
                    x: position.x.round() as i32,
                    y: y.round() as i32,
                }]
            }
            WindowEvent::MouseInput { state, button, .. } => {
                MouseButton::try_from(*button).map_or_else(
                    |e| {
                        log::debug!("ignoring button: {e}");
                        Vec::new()
                    },
                    |button| {
                        vec![InputEvent::MouseButton {
                            button,
                            pressed: *state == ElementState::Pressed,
                        }]
                    },
                )
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll += match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y / PIXELS_PER_NOTCH
                    }
                };
                self.drain_notches()
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                let Modifiers { shift, ctrl } = modifiers.state().into();
                vec![InputEvent::ModifiersChanged { shift, ctrl }]
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed =>
            {
                event.text.as_deref().map_or_else(Vec::new, text_events)
            }
            _ => Vec::new(),
        }
    }

    fn drain_notches(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while self.scroll.abs() >= 1.0 {
            let direction = if self.scroll > 0.0 {
                self.scroll -= 1.0;
                WheelDirection::Forward
            } else {
                self.scroll += 1.0;
                WheelDirection::Backward
            };
            events.push(InputEvent::Wheel { direction });
        }
        events
    }
}

/// One `Char` event per character of typed text.
fn text_events(text: &str) -> Vec<InputEvent> {
    text.chars()
        .map(|character| InputEvent::Char { character })
        .collect()
}
