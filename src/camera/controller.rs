use glam::{DVec3, IVec2};

use super::core::CameraPose;
use super::viewport::{Viewport, ViewportHost};
use crate::error::NavError;
use crate::input::keyboard::{KeyAction, KeyBindings};
use crate::input::pointer::PointerState;
use crate::input::{
    Chord, InputEvent, Modifiers, MouseBindings, MouseButton, WheelDirection,
};
use crate::interaction::{DragMode, InteractionMode, InteractionState};
use crate::navigation::orbit::{self, PoleGuard};
use crate::navigation::{dolly, pan, Pivot};
use crate::options::{NavigationOptions, Options};

/// What the controller did with one input event.
///
/// Hosts use this to drive observers (UI sync, status text). Redraws are
/// already requested from the viewport whenever the camera changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// Nothing happened: no viewport, re-entrant press, unrelated release,
    /// or a cursor move while idle.
    Ignored,
    /// A drag mode began.
    Started(InteractionMode),
    /// A drag step ran for the active mode.
    Interaction(InteractionMode),
    /// The active drag ended.
    Ended(InteractionMode),
    /// A one-shot wheel dolly ran.
    Pulse,
    /// A bound key action ran.
    Action(KeyAction),
    /// The character is not bound; the host may handle it.
    Delegated(char),
}

/// Interactive camera navigation for a set of viewports.
///
/// Owns the binding tables, the optional custom center of rotation and the
/// interaction state. Cameras live in the viewports; every change is
/// computed as a fresh [`CameraPose`] and written back only when it is
/// well-formed.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: InteractionState,
    pointer: PointerState,
    /// Cursor position of the press that started the current drag; the
    /// drag keeps operating on the viewport found there.
    anchor: Option<IVec2>,
    bindings: MouseBindings,
    keybindings: KeyBindings,
    center_of_rotation: Option<DVec3>,
    options: NavigationOptions,
}

impl NavigationController {
    /// Controller with default bindings and sensitivities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller configured from loaded options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            bindings: options.bindings,
            keybindings: options.keybindings,
            options: options.navigation,
            ..Self::default()
        }
    }

    // -- state --

    /// The active interaction mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.state.mode()
    }

    /// Whether the controller holds exclusive input focus.
    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.state.has_focus()
    }

    // -- configuration --

    /// Orbit sensitivity.
    #[must_use]
    pub fn rotation_factor(&self) -> f64 {
        self.options.rotation_factor
    }

    /// Set the orbit sensitivity.
    pub fn set_rotation_factor(&mut self, factor: f64) {
        self.options.rotation_factor = factor;
    }

    /// Dolly sensitivity.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.options.zoom_factor
    }

    /// Set the dolly sensitivity.
    pub fn set_zoom_factor(&mut self, factor: f64) {
        self.options.zoom_factor = factor;
    }

    /// Navigation settings.
    #[must_use]
    pub fn options(&self) -> &NavigationOptions {
        &self.options
    }

    /// Mutable navigation settings.
    pub fn options_mut(&mut self) -> &mut NavigationOptions {
        &mut self.options
    }

    /// Custom center of rotation, if one is set.
    #[must_use]
    pub fn center_of_rotation(&self) -> Option<DVec3> {
        self.center_of_rotation
    }

    /// Orbit and dolly about `center`, or about the focal point for `None`.
    pub fn set_center_of_rotation(&mut self, center: Option<DVec3>) {
        self.center_of_rotation = center;
    }

    /// Set the center of rotation to the world point under display
    /// position `(x, y)` at `depth` in `viewport`. Returns the new center,
    /// or `None` (leaving the center unchanged) when it cannot be
    /// unprojected.
    pub fn pick_center_of_rotation(
        &mut self,
        viewport: &dyn Viewport,
        x: f64,
        y: f64,
        depth: f64,
    ) -> Option<DVec3> {
        let center = viewport.display_to_world(x, y, depth)?;
        self.center_of_rotation = Some(center);
        Some(center)
    }

    /// The current pivot strategy.
    #[must_use]
    pub fn pivot(&self) -> Pivot {
        Pivot::from(self.center_of_rotation)
    }

    /// Mouse binding tables.
    #[must_use]
    pub fn bindings(&self) -> &MouseBindings {
        &self.bindings
    }

    /// Mutable mouse binding tables.
    pub fn bindings_mut(&mut self) -> &mut MouseBindings {
        &mut self.bindings
    }

    /// Bind `button` (no shift) to `mode`.
    pub fn bind(
        &mut self,
        button: MouseButton,
        mode: InteractionMode,
    ) -> Result<(), NavError> {
        self.bindings.bind(button, mode)
    }

    /// Bind `button` with shift held to `mode`.
    pub fn bind_with_shift(
        &mut self,
        button: MouseButton,
        mode: InteractionMode,
    ) -> Result<(), NavError> {
        self.bindings.bind_with_shift(button, mode)
    }

    /// Character bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    /// Mutable character bindings.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.keybindings
    }

    // -- events --

    /// Process one input event against the viewports owned by `host`.
    pub fn handle_event(
        &mut self,
        host: &mut dyn ViewportHost,
        event: InputEvent,
    ) -> Outcome {
        match event {
            InputEvent::CursorMoved { x, y } => self.mouse_move(host, x, y),
            InputEvent::MouseButton { button, pressed: true } => {
                self.button_down(host, button)
            }
            InputEvent::MouseButton {
                button,
                pressed: false,
            } => self.button_up(button),
            InputEvent::Wheel { direction } => self.wheel(host, direction),
            InputEvent::ModifiersChanged { shift, ctrl } => {
                self.pointer.set_modifiers(Modifiers { shift, ctrl });
                Outcome::Ignored
            }
            InputEvent::Char { character } => self.on_char(host, character),
        }
    }

    /// Start the mode bound to `button` if the cursor is over a viewport
    /// and no other mode is active.
    pub fn button_down(
        &mut self,
        host: &mut dyn ViewportHost,
        button: MouseButton,
    ) -> Outcome {
        let at = self.pointer.position();
        if host.viewport_at(at.x, at.y).is_none() {
            log::debug!("{button} press outside any viewport ignored");
            return Outcome::Ignored;
        }
        let chord = Chord::from_shift(self.pointer.modifiers().shift);
        let mode = self.bindings.mode_for(button, chord);
        if !self.state.start(mode) {
            log::debug!(
                "{button} press ignored while {} is active",
                self.state.mode()
            );
            return Outcome::Ignored;
        }
        self.anchor = Some(at);
        Outcome::Started(mode.into())
    }

    /// End the active mode if `button` is bound to it in either table.
    pub fn button_up(&mut self, button: MouseButton) -> Outcome {
        if !self.bindings.releases(button, self.state.mode()) {
            return Outcome::Ignored;
        }
        self.anchor = None;
        self.state
            .stop()
            .map_or(Outcome::Ignored, |ended| Outcome::Ended(ended.into()))
    }

    /// Track the cursor and run one step of the active mode.
    pub fn mouse_move(
        &mut self,
        host: &mut dyn ViewportHost,
        x: i32,
        y: i32,
    ) -> Outcome {
        self.pointer.move_to(x, y);
        let Ok(mode) = DragMode::try_from(self.state.mode()) else {
            return Outcome::Ignored;
        };
        let anchor = self.anchor.unwrap_or_else(|| self.pointer.position());
        let Some(viewport) = host.viewport_at(anchor.x, anchor.y) else {
            log::debug!("{mode:?} step skipped: viewport no longer resolves");
            return Outcome::Interaction(mode.into());
        };

        let sample = self.pointer.sample();
        let size = viewport.size();
        let pose = *viewport.camera();
        let pivot = self.pivot();
        let next = match mode {
            DragMode::Rotate => orbit::rotate(
                &pose,
                &sample,
                size,
                self.options.rotation_factor,
                &pivot,
            ),
            DragMode::Pan => pan::pan(&pose, &sample, size, &pivot),
            DragMode::Dolly => {
                dolly::drag_factor(&sample, size, self.options.zoom_factor)
                    .and_then(|factor| dolly::dolly(&pose, factor, &pivot))
            }
        };
        self.commit(viewport, next);
        Outcome::Interaction(mode.into())
    }

    /// One wheel notch: an atomic dolly that leaves the drag state alone.
    pub fn wheel(
        &mut self,
        host: &mut dyn ViewportHost,
        direction: WheelDirection,
    ) -> Outcome {
        let at = self.pointer.position();
        let Some(viewport) = host.viewport_at(at.x, at.y) else {
            return Outcome::Ignored;
        };
        self.state.grab_focus();
        self.pulse(viewport, direction);
        self.state.release_focus();
        Outcome::Pulse
    }

    /// Run the action bound to `character`, or delegate it to the host.
    pub fn on_char(
        &mut self,
        host: &mut dyn ViewportHost,
        character: char,
    ) -> Outcome {
        let Some(action) = self.keybindings.lookup(character) else {
            return Outcome::Delegated(character);
        };
        if action == KeyAction::ClearCenterOfRotation {
            self.center_of_rotation = None;
            return Outcome::Action(action);
        }

        let at = self.pointer.position();
        let Some(viewport) = host.viewport_at(at.x, at.y) else {
            return Outcome::Ignored;
        };
        let step = self.options.key_orbit_step;
        match action {
            KeyAction::OrbitLeft => self.key_orbit(viewport, step, 0.0),
            KeyAction::OrbitRight => self.key_orbit(viewport, -step, 0.0),
            KeyAction::OrbitUp => self.key_orbit(viewport, 0.0, step),
            KeyAction::OrbitDown => self.key_orbit(viewport, 0.0, -step),
            KeyAction::DollyIn => {
                self.pulse(viewport, WheelDirection::Forward);
            }
            KeyAction::DollyOut => {
                self.pulse(viewport, WheelDirection::Backward);
            }
            KeyAction::ClearCenterOfRotation => {}
        }
        Outcome::Action(action)
    }

    fn pulse(&self, viewport: &mut dyn Viewport, direction: WheelDirection) {
        let factor = dolly::wheel_factor(
            direction,
            self.options.zoom_factor,
            self.options.mouse_wheel_motion_factor,
        );
        let next = dolly::dolly(viewport.camera(), factor, &self.pivot());
        self.commit(viewport, next);
    }

    fn key_orbit(
        &self,
        viewport: &mut dyn Viewport,
        azimuth: f64,
        elevation: f64,
    ) {
        let pose = *viewport.camera();
        let pivot = self.pivot();
        let next = orbit::orbit(
            &pose,
            pivot.resolve(&pose),
            azimuth,
            elevation,
            PoleGuard::for_pivot(&pivot),
        );
        self.commit(viewport, next);
    }

    /// Write `next` to the viewport if it is usable, then run the enabled
    /// follow-ups and request a redraw.
    fn commit(&self, viewport: &mut dyn Viewport, next: Option<CameraPose>) {
        let Some(pose) = next.filter(CameraPose::is_well_formed) else {
            log::debug!("degenerate camera step skipped");
            return;
        };
        viewport.apply_pose(pose);
        if self.options.auto_adjust_clipping_range {
            viewport.reset_clipping_range();
        }
        if self.options.light_follow_camera {
            viewport.update_lights();
        }
        viewport.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::viewport::OffscreenViewport;

    const SIZE: (u32, u32) = (400, 300);

    fn viewport() -> OffscreenViewport {
        OffscreenViewport::new(
            CameraPose::looking_at(
                DVec3::new(0.0, -30.0, 5.0),
                DVec3::ZERO,
                DVec3::Z,
            ),
            SIZE,
        )
    }

    fn send(
        ctrl: &mut NavigationController,
        vp: &mut OffscreenViewport,
        event: InputEvent,
    ) -> Outcome {
        ctrl.handle_event(vp, event)
    }

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    fn to(x: i32, y: i32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn modifiers(shift: bool, ctrl: bool) -> InputEvent {
        InputEvent::ModifiersChanged { shift, ctrl }
    }

    fn wheel(direction: WheelDirection) -> InputEvent {
        InputEvent::Wheel { direction }
    }

    #[test]
    fn left_drag_orbits_about_focal_point() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let start = *vp.camera();
        let _ = send(&mut ctrl, &mut vp, to(200, 150));

        assert_eq!(
            send(&mut ctrl, &mut vp, press(MouseButton::Left)),
            Outcome::Started(InteractionMode::Rotate)
        );
        assert_eq!(ctrl.mode(), InteractionMode::Rotate);
        assert!(ctrl.has_focus());

        // 10 px right: azimuth negative, camera swings toward -x seen from
        // behind, i.e. the scene turns with the cursor.
        assert_eq!(
            send(&mut ctrl, &mut vp, to(210, 150)),
            Outcome::Interaction(InteractionMode::Rotate)
        );
        let after_right = *vp.camera();
        let expected = start.azimuth(-10.0 * 18.0 * 10.0 / 400.0);
        assert!(after_right.position.distance(expected.position) < 1e-9);
        assert!((after_right.distance() - start.distance()).abs() < 1e-9);

        // 10 px down: positive elevation raises the camera.
        let _ = send(&mut ctrl, &mut vp, to(210, 140));
        let after_down = *vp.camera();
        assert!(
            after_down.view_up_angle().unwrap()
                > after_right.view_up_angle().unwrap()
        );
        assert!((after_down.distance() - start.distance()).abs() < 1e-9);
        assert_eq!(after_down.focal_point, start.focal_point);

        assert_eq!(
            send(&mut ctrl, &mut vp, release(MouseButton::Left)),
            Outcome::Ended(InteractionMode::Rotate)
        );
        assert_eq!(ctrl.mode(), InteractionMode::None);
        assert!(!ctrl.has_focus());
        assert_eq!(vp.redraws, 2);
    }

    #[test]
    fn custom_center_orbit_keeps_pivot_distance() {
        let mut ctrl = NavigationController::new();
        let center = DVec3::new(3.0, 2.0, -1.0);
        ctrl.set_center_of_rotation(Some(center));
        let mut vp = viewport();
        let before = vp.camera().position.distance(center);

        let _ = send(&mut ctrl, &mut vp, to(100, 100));
        let _ = send(&mut ctrl, &mut vp, press(MouseButton::Left));
        for (x, y) in [(130, 100), (130, 60), (90, 140)] {
            let _ = send(&mut ctrl, &mut vp, to(x, y));
            let after = vp.camera().position.distance(center);
            assert!((after - before).abs() < 1e-9);
        }
    }

    #[test]
    fn ctrl_middle_drag_pans_horizontally_only() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let start = *vp.camera();
        let center_before = vp.world_to_display(start.focal_point).unwrap();

        let _ = send(&mut ctrl, &mut vp, to(200, 150));
        let _ = send(&mut ctrl, &mut vp, modifiers(false, true));
        assert_eq!(
            send(&mut ctrl, &mut vp, press(MouseButton::Middle)),
            Outcome::Started(InteractionMode::Pan)
        );
        let _ = send(&mut ctrl, &mut vp, to(230, 160));

        let moved = vp.world_to_display(start.focal_point).unwrap();
        assert!((moved.y - center_before.y).abs() < 1e-6);
        assert!((moved.x - center_before.x - 30.0).abs() < 1e-6);
        assert!(
            (vp.camera().direction_of_projection()
                - start.direction_of_projection())
            .length()
                < 1e-12
        );
    }

    #[test]
    fn shift_left_drag_pans() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let _ = send(&mut ctrl, &mut vp, to(50, 50));
        let _ = send(&mut ctrl, &mut vp, modifiers(true, false));
        assert_eq!(
            send(&mut ctrl, &mut vp, press(MouseButton::Left)),
            Outcome::Started(InteractionMode::Pan)
        );
    }

    #[test]
    fn wheel_forward_zooms_in_and_backward_out() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let _ = send(&mut ctrl, &mut vp, to(200, 150));
        let d0 = vp.camera().distance();

        assert_eq!(
            send(&mut ctrl, &mut vp, wheel(WheelDirection::Forward)),
            Outcome::Pulse
        );
        let d1 = vp.camera().distance();
        let _ = send(&mut ctrl, &mut vp, wheel(WheelDirection::Forward));
        let d2 = vp.camera().distance();
        assert!(d1 < d0 && d2 < d1);
        assert!((d0 / d1 - 1.21).abs() < 1e-9);

        let _ = send(&mut ctrl, &mut vp, wheel(WheelDirection::Backward));
        assert!(vp.camera().distance() > d2);

        // Pulses never enter a mode or keep focus.
        assert_eq!(ctrl.mode(), InteractionMode::None);
        assert!(!ctrl.has_focus());
    }

    #[test]
    fn wheel_during_drag_keeps_mode() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let _ = send(&mut ctrl, &mut vp, to(200, 150));
        let _ = send(&mut ctrl, &mut vp, press(MouseButton::Left));
        assert_eq!(
            send(&mut ctrl, &mut vp, wheel(WheelDirection::Forward)),
            Outcome::Pulse
        );
        assert_eq!(ctrl.mode(), InteractionMode::Rotate);
        assert!(ctrl.has_focus());
    }

    #[test]
    fn orthographic_wheel_scales_parallel_scale() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let mut pose = *vp.camera();
        pose.parallel_projection = true;
        pose.parallel_scale = 8.0;
        vp.apply_pose(pose);
        let _ = send(&mut ctrl, &mut vp, to(10, 10));
        let _ = send(&mut ctrl, &mut vp, wheel(WheelDirection::Forward));
        assert!((vp.camera().parallel_scale - 8.0 / 1.21).abs() < 1e-9);
        assert_eq!(vp.camera().position, pose.position);
    }

    #[test]
    fn right_drag_up_dollies_in() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let d0 = vp.camera().distance();
        let _ = send(&mut ctrl, &mut vp, to(200, 100));
        assert_eq!(
            send(&mut ctrl, &mut vp, press(MouseButton::Right)),
            Outcome::Started(InteractionMode::Dolly)
        );
        let _ = send(&mut ctrl, &mut vp, to(200, 130));
        assert!(vp.camera().distance() < d0);
    }

    #[test]
    fn release_while_idle_is_ignored() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let before = *vp.camera();
        assert_eq!(
            send(&mut ctrl, &mut vp, release(MouseButton::Left)),
            Outcome::Ignored
        );
        assert_eq!(ctrl.mode(), InteractionMode::None);
        assert_eq!(*vp.camera(), before);
    }

    #[test]
    fn press_while_active_is_ignored() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let _ = send(&mut ctrl, &mut vp, to(200, 150));
        let _ = send(&mut ctrl, &mut vp, press(MouseButton::Left));
        assert_eq!(
            send(&mut ctrl, &mut vp, press(MouseButton::Right)),
            Outcome::Ignored
        );
        assert_eq!(ctrl.mode(), InteractionMode::Rotate);

        // Releasing the other button does not end the rotation.
        assert_eq!(
            send(&mut ctrl, &mut vp, release(MouseButton::Right)),
            Outcome::Ignored
        );
        assert_eq!(ctrl.mode(), InteractionMode::Rotate);
    }

    #[test]
    fn press_outside_viewport_is_ignored() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let before = *vp.camera();
        let _ = send(&mut ctrl, &mut vp, to(-5, 500));
        assert_eq!(
            send(&mut ctrl, &mut vp, press(MouseButton::Left)),
            Outcome::Ignored
        );
        assert_eq!(
            send(&mut ctrl, &mut vp, wheel(WheelDirection::Forward)),
            Outcome::Ignored
        );
        assert_eq!(ctrl.mode(), InteractionMode::None);
        assert!(!ctrl.has_focus());
        assert_eq!(*vp.camera(), before);
    }

    #[test]
    fn shift_change_mid_drag_still_releases() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let _ = send(&mut ctrl, &mut vp, to(200, 150));
        let _ = send(&mut ctrl, &mut vp, modifiers(true, false));
        assert_eq!(
            send(&mut ctrl, &mut vp, press(MouseButton::Left)),
            Outcome::Started(InteractionMode::Pan)
        );
        let _ = send(&mut ctrl, &mut vp, modifiers(false, false));
        assert_eq!(
            send(&mut ctrl, &mut vp, release(MouseButton::Left)),
            Outcome::Ended(InteractionMode::Pan)
        );
        assert_eq!(ctrl.mode(), InteractionMode::None);
    }

    #[test]
    fn drag_continues_outside_viewport() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let start = *vp.camera();
        let _ = send(&mut ctrl, &mut vp, to(390, 150));
        let _ = send(&mut ctrl, &mut vp, press(MouseButton::Left));
        let _ = send(&mut ctrl, &mut vp, to(420, 150));
        assert!(vp.camera().position.distance(start.position) > 1e-6);
    }

    #[test]
    fn idle_moves_do_not_touch_camera() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let before = *vp.camera();
        for x in 0..5 {
            assert_eq!(
                send(&mut ctrl, &mut vp, to(x * 20, 40)),
                Outcome::Ignored
            );
        }
        assert_eq!(*vp.camera(), before);
        assert_eq!(vp.redraws, 0);
    }

    #[test]
    fn rebinding_changes_started_mode() {
        let mut ctrl = NavigationController::new();
        ctrl.bind(MouseButton::Left, InteractionMode::Dolly).unwrap();
        assert!(ctrl.bind(MouseButton::Right, InteractionMode::None).is_err());

        let mut vp = viewport();
        let _ = send(&mut ctrl, &mut vp, to(200, 150));
        assert_eq!(
            send(&mut ctrl, &mut vp, press(MouseButton::Left)),
            Outcome::Started(InteractionMode::Dolly)
        );
        assert_eq!(
            send(&mut ctrl, &mut vp, release(MouseButton::Right)),
            Outcome::Ended(InteractionMode::Dolly)
        );
    }

    #[test]
    fn side_effects_follow_options() {
        let mut ctrl = NavigationController::new();
        ctrl.options_mut().auto_adjust_clipping_range = false;
        ctrl.options_mut().light_follow_camera = false;
        let mut vp = viewport();
        let _ = send(&mut ctrl, &mut vp, to(200, 150));
        let _ = send(&mut ctrl, &mut vp, wheel(WheelDirection::Forward));
        assert_eq!(vp.clipping_resets, 0);
        assert_eq!(vp.light_updates, 0);
        assert_eq!(vp.redraws, 1);

        ctrl.options_mut().auto_adjust_clipping_range = true;
        ctrl.options_mut().light_follow_camera = true;
        let _ = send(&mut ctrl, &mut vp, wheel(WheelDirection::Forward));
        assert_eq!(vp.clipping_resets, 1);
        assert_eq!(vp.light_updates, 1);
    }

    #[test]
    fn pan_without_basis_skips_frame() {
        let mut ctrl = NavigationController::new();
        let mut vp = viewport();
        let mut pose = *vp.camera();
        pose.view_up = pose.direction_of_projection();
        vp.apply_pose(pose);

        let _ = send(&mut ctrl, &mut vp, to(200, 150));
        let _ = send(&mut ctrl, &mut vp, press(MouseButton::Middle));
        assert_eq!(
            send(&mut ctrl, &mut vp, to(240, 190)),
            Outcome::Interaction(InteractionMode::Pan)
        );
        assert_eq!(*vp.camera(), pose);
        assert_eq!(vp.redraws, 0);
    }

    #[test]
    fn top_down_camera_still_zooms() {
        let mut ctrl = NavigationController::new();
        let mut vp = OffscreenViewport::new(
            CameraPose::looking_at(
                DVec3::new(0.0, 0.0, 10.0),
                DVec3::ZERO,
                DVec3::Z,
            ),
            SIZE,
        );
        let _ = send(&mut ctrl, &mut vp, to(200, 150));
        assert_eq!(
            send(&mut ctrl, &mut vp, wheel(WheelDirection::Forward)),
            Outcome::Pulse
        );
        assert!((vp.camera().distance() - 10.0 / 1.21).abs() < 1e-9);
        assert_eq!(vp.redraws, 1);

        let _ = send(&mut ctrl, &mut vp, press(MouseButton::Right));
        let _ = send(&mut ctrl, &mut vp, to(200, 180));
        assert!(vp.camera().distance() < 10.0 / 1.21);

        let mut ortho = *vp.camera();
        ortho.parallel_projection = true;
        ortho.parallel_scale = 4.0;
        vp.apply_pose(ortho);
        let _ = send(&mut ctrl, &mut vp, wheel(WheelDirection::Backward));
        assert!((vp.camera().parallel_scale - 4.0 * 1.21).abs() < 1e-9);
    }

    #[test]
    fn key_bindings_run_actions_or_delegate() {
        let mut ctrl = NavigationController::new();
        ctrl.key_bindings_mut().bind('j', KeyAction::OrbitLeft);
        ctrl.key_bindings_mut().bind('+', KeyAction::DollyIn);
        ctrl.key_bindings_mut()
            .bind('c', KeyAction::ClearCenterOfRotation);
        ctrl.set_center_of_rotation(Some(DVec3::ONE));

        let mut vp = viewport();
        let start = *vp.camera();
        let _ = send(&mut ctrl, &mut vp, to(200, 150));

        assert_eq!(
            send(&mut ctrl, &mut vp, InputEvent::Char { character: 'x' }),
            Outcome::Delegated('x')
        );
        assert_eq!(
            send(&mut ctrl, &mut vp, InputEvent::Char { character: 'c' }),
            Outcome::Action(KeyAction::ClearCenterOfRotation)
        );
        assert_eq!(ctrl.center_of_rotation(), None);

        assert_eq!(
            send(&mut ctrl, &mut vp, InputEvent::Char { character: 'j' }),
            Outcome::Action(KeyAction::OrbitLeft)
        );
        let expected = start.azimuth(5.0);
        assert!(vp.camera().position.distance(expected.position) < 1e-9);

        let before = vp.camera().distance();
        let _ = send(&mut ctrl, &mut vp, InputEvent::Char { character: '+' });
        assert!((before / vp.camera().distance() - 1.21).abs() < 1e-9);
        assert_eq!(ctrl.mode(), InteractionMode::None);
    }

    #[test]
    fn picked_center_lies_on_cursor_ray() {
        let mut ctrl = NavigationController::new();
        let vp = viewport();
        let focal = vp.world_to_display(DVec3::ZERO).unwrap();
        let center = ctrl
            .pick_center_of_rotation(&vp, focal.x, focal.y, focal.z)
            .unwrap();
        assert!(center.length() < 1e-6);
        assert!(ctrl.pivot().is_custom());
    }

    #[test]
    fn with_options_uses_loaded_settings() {
        let mut options = Options::default();
        options.navigation.rotation_factor = 2.0;
        options.keybindings.bind('z', KeyAction::DollyOut);
        let ctrl = NavigationController::with_options(options);
        assert_eq!(ctrl.rotation_factor(), 2.0);
        assert_eq!(ctrl.zoom_factor(), 10.0);
        assert_eq!(ctrl.key_bindings().lookup('z'), Some(KeyAction::DollyOut));
    }
}
