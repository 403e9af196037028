//! An interactive slider component for selecting a value in a range.
//!
//! ## Usage
//!
//! The host mounts a [`Slider`] against its markup (track, fill, handle,
//! labels), then forwards input:
//!
//! - pointer events captured document-wide go to
//!   [`Slider::handle_cursor_events`];
//! - key events from the focused handle go to [`Slider::handle_key_events`];
//! - the host clock drives [`Slider::tick`] for the deferred initial render
//!   and the label fade;
//! - unmounting calls [`Slider::teardown`].
//!
//! The slider never touches the view except through the [`HostSurface`]
//! passed into each call, and it never fails: malformed configuration
//! degrades to documented defaults and every stored value is re-clamped into
//! `[min, max]`.
//!
//! ```
//! use std::time::Instant;
//!
//! use liner_components::config::SliderConfig;
//! use liner_components::slider::{Slider, SliderArgs};
//! use liner_ui::{CursorState, DragArena, PxPosition, Px};
//! # use liner_components::host::HostSurface;
//! # use liner_ui::AccessibilityProps;
//! # #[derive(Default)]
//! # struct Surface;
//! # impl HostSurface for Surface {
//! #     fn track_origin(&self) -> Px { Px(0) }
//! #     fn set_fill_width(&mut self, _: Px) {}
//! #     fn set_handle_left(&mut self, _: Px) {}
//! #     fn set_value_label(&mut self, _: &str) {}
//! #     fn set_min_label(&mut self, _: &str) {}
//! #     fn set_max_label(&mut self, _: &str) {}
//! #     fn set_label_opacity(&mut self, _: f32) {}
//! #     fn set_active(&mut self, _: bool) {}
//! #     fn apply_accessibility(&mut self, _: AccessibilityProps) {}
//! # }
//!
//! let arena = DragArena::new();
//! let mut surface = Surface::default();
//! let mut cursor = CursorState::new();
//!
//! let args = SliderArgs::default()
//!     .config(SliderConfig::default().value(25.0))
//!     .on_change(|value| println!("slider value changed to {value}"));
//! let mut slider = Slider::new(args, &arena, Instant::now(), &mut surface);
//!
//! cursor.handle_move(PxPosition::new(Px(150), Px(0)));
//! cursor.handle_press();
//! cursor.handle_release();
//! let events = cursor.take_events();
//! slider.handle_cursor_events(&events, &mut surface);
//! assert_eq!(slider.value(), 50.0);
//! ```

use std::time::{Duration, Instant};

use derive_setters::Setters;
use liner_ui::{CallbackWith, CursorEvent, DragArena, Key, Px, Timer};

use crate::config::{AttributeSource, SliderConfig};
use crate::host::HostSurface;

pub use interaction::SliderController;
pub use scale::{StepDirection, ValueScale};

mod interaction;
mod render;
mod scale;

/// Width of the handle element in pixels; the handle is positioned by its
/// center, so half of this offsets every handle placement.
const HANDLE_WIDTH: Px = Px(20);

/// Delay before the first position render after mount, giving the host
/// layout a beat to settle.
const INITIAL_POSITION_DELAY: Duration = Duration::from_millis(20);

/// How long the value label stays opaque after a keyboard-driven change.
const LABEL_FADE_DELAY: Duration = Duration::from_secs(1);

/// Arguments for constructing a [`Slider`].
#[derive(Clone, PartialEq, Setters)]
pub struct SliderArgs {
    /// Bounds, step, track width and initial value.
    #[setters(into)]
    pub config: SliderConfig,
    /// Callback invoked whenever the committed value changes.
    #[setters(skip)]
    pub on_change: CallbackWith<f64>,
}

impl SliderArgs {
    /// Sets the value-changed handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the value-changed handler from a shared callback handle.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<f64>>) -> Self {
        self.on_change = on_change.into();
        self
    }

    /// Builds arguments from host attributes; see
    /// [`SliderConfig::from_attributes`].
    pub fn from_attributes(attrs: &dyn AttributeSource) -> Self {
        Self::default().config(SliderConfig::from_attributes(attrs))
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            config: SliderConfig::default(),
            on_change: CallbackWith::default(),
        }
    }
}

/// A mounted slider instance.
///
/// Owns the value model and the interaction state machine; everything else
/// (markup, styling, event capture, the clock) belongs to the host.
pub struct Slider {
    config: SliderConfig,
    scale: ValueScale,
    value: f64,
    controller: SliderController,
    on_change: CallbackWith<f64>,
    initial_position: Timer,
    label_fade: Timer,
}

impl Slider {
    /// Mounts a slider.
    ///
    /// Normalizes the configured bounds, resolves the initial value (clamped;
    /// the minimum when unset), bootstraps the labels and accessibility
    /// attributes, and schedules the deferred initial position render.
    pub fn new(
        args: SliderArgs,
        arena: &DragArena,
        now: Instant,
        surface: &mut dyn HostSurface,
    ) -> Self {
        let config = args.config;
        let scale = ValueScale::new(config.min, config.max);
        let value = match config.value {
            Some(v) => scale.clamp_value(v),
            None => scale.min(),
        };

        let mut slider = Self {
            config,
            scale,
            value,
            controller: SliderController::new(arena),
            on_change: args.on_change,
            initial_position: Timer::new(),
            label_fade: Timer::new(),
        };
        tracing::debug!(
            min = slider.scale.min(),
            max = slider.scale.max(),
            value = slider.value,
            "slider mounted"
        );

        render::bootstrap(&slider, surface);
        slider.initial_position.schedule(now, INITIAL_POSITION_DELAY);
        slider
    }

    /// The current value; always within `[min, max]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether a drag session owned by this instance is in progress.
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// The normalized configuration this instance was mounted with.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Applies document-wide pointer events in delivery order.
    pub fn handle_cursor_events(&mut self, events: &[CursorEvent], surface: &mut dyn HostSurface) {
        interaction::handle_cursor_events(self, events, surface);
    }

    /// Applies key events from the focused handle in delivery order.
    pub fn handle_key_events(&mut self, keys: &[Key], now: Instant, surface: &mut dyn HostSurface) {
        interaction::handle_key_events(self, keys, now, surface);
    }

    /// Fires any due timers: the deferred initial position render and the
    /// label fade.
    pub fn tick(&mut self, now: Instant, surface: &mut dyn HostSurface) {
        if self.initial_position.fire(now) {
            render::render_frame(self, surface);
        }
        if self.label_fade.fire(now) {
            surface.set_label_opacity(0.0);
        }
    }

    /// Unmounts the slider: cancels pending timers, releases the drag
    /// session, and clears the active affordance. No state survives.
    pub fn teardown(&mut self, surface: &mut dyn HostSurface) {
        self.initial_position.cancel();
        self.label_fade.cancel();
        self.controller.end_drag();
        surface.set_active(false);
        tracing::debug!("slider torn down");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use liner_ui::{AccessibilityProps, CursorEventContent, PxPosition};

    use super::*;
    use crate::host::test_support::{RecordingSurface, SurfaceOp};

    const ORIGIN: Px = Px(40);

    fn mounted(config: SliderConfig) -> (Slider, RecordingSurface, DragArena, Instant) {
        let arena = DragArena::new();
        let mut surface = RecordingSurface::with_origin(ORIGIN);
        let t0 = Instant::now();
        let slider = Slider::new(
            SliderArgs::default().config(config),
            &arena,
            t0,
            &mut surface,
        );
        (slider, surface, arena, t0)
    }

    fn event_at(x: i32, content: CursorEventContent) -> CursorEvent {
        CursorEvent {
            position: Some(PxPosition::new(Px(x), Px(0))),
            content,
        }
    }

    fn press(slider: &mut Slider, surface: &mut RecordingSurface, x: i32) {
        slider.handle_cursor_events(&[event_at(x, CursorEventContent::Pressed)], surface);
    }

    fn drag_to(slider: &mut Slider, surface: &mut RecordingSurface, x: i32) {
        slider.handle_cursor_events(&[event_at(x, CursorEventContent::Moved)], surface);
    }

    fn release(slider: &mut Slider, surface: &mut RecordingSurface, x: i32) {
        slider.handle_cursor_events(&[event_at(x, CursorEventContent::Released)], surface);
    }

    #[test]
    fn test_mount_bootstraps_labels_and_accessibility() {
        let (slider, surface, _arena, _t0) = mounted(SliderConfig::default());

        assert_eq!(slider.value(), 0.0);
        assert!(surface.ops.contains(&SurfaceOp::MinLabel("0".into())));
        assert!(surface.ops.contains(&SurfaceOp::MaxLabel("100".into())));
        assert_eq!(surface.last_value_label(), Some("0"));
        assert_eq!(
            surface.last_accessibility(),
            Some(AccessibilityProps::new(0.0, 100.0, 0.0))
        );
        // Position rendering is deferred until the first tick.
        assert_eq!(surface.last_fill_width(), None);
    }

    #[test]
    fn test_initial_position_renders_on_tick() {
        let (mut slider, mut surface, _arena, t0) = mounted(SliderConfig::default().value(50.0));

        slider.tick(t0 + Duration::from_millis(10), &mut surface);
        assert_eq!(surface.last_fill_width(), None);

        slider.tick(t0 + Duration::from_millis(25), &mut surface);
        assert_eq!(surface.last_fill_width(), Some(Px(150)));
        // Handle sits at position + origin - half the handle width.
        assert_eq!(surface.last_handle_left(), Some(Px(150 + 40 - 10)));

        // One-shot: a later tick does not render again.
        let rendered = surface.ops.len();
        slider.tick(t0 + Duration::from_secs(5), &mut surface);
        assert_eq!(surface.ops.len(), rendered);
    }

    #[test]
    fn test_unset_value_defaults_to_min() {
        let (slider, _surface, _arena, _t0) =
            mounted(SliderConfig::default().min(20.0).max(80.0));
        assert_eq!(slider.value(), 20.0);
        assert!(!slider.value().is_nan());
    }

    #[test]
    fn test_inverted_bounds_are_normalized() {
        let (slider, surface, _arena, _t0) = mounted(
            SliderConfig::default().min(100.0).max(0.0).value(150.0),
        );
        assert_eq!(slider.value(), 100.0);
        assert!(surface.ops.contains(&SurfaceOp::MinLabel("0".into())));
        assert!(surface.ops.contains(&SurfaceOp::MaxLabel("100".into())));
    }

    #[test]
    fn test_pointer_press_at_track_edges_and_midpoint() {
        let (mut slider, mut surface, _arena, _t0) = mounted(SliderConfig::default());

        press(&mut slider, &mut surface, ORIGIN.raw());
        assert_eq!(slider.value(), 0.0);
        release(&mut slider, &mut surface, ORIGIN.raw());

        press(&mut slider, &mut surface, ORIGIN.raw() + 300);
        assert_eq!(slider.value(), 100.0);
        release(&mut slider, &mut surface, ORIGIN.raw() + 300);

        press(&mut slider, &mut surface, ORIGIN.raw() + 150);
        assert!((45.0..=55.0).contains(&slider.value()));
    }

    #[test]
    fn test_drag_lifecycle() {
        let changes: Arc<Mutex<Vec<f64>>> = Arc::default();
        let sink = Arc::clone(&changes);

        let arena = DragArena::new();
        let mut surface = RecordingSurface::with_origin(ORIGIN);
        let mut slider = Slider::new(
            SliderArgs::default().on_change(move |v| sink.lock().expect("poisoned").push(v)),
            &arena,
            Instant::now(),
            &mut surface,
        );

        press(&mut slider, &mut surface, ORIGIN.raw() + 150);
        assert!(slider.is_dragging());
        assert_eq!(surface.last_active(), Some(true));

        drag_to(&mut slider, &mut surface, ORIGIN.raw() + 300);
        assert_eq!(slider.value(), 100.0);

        release(&mut slider, &mut surface, ORIGIN.raw() + 300);
        assert!(!slider.is_dragging());
        assert_eq!(surface.last_active(), Some(false));
        // Finalize refreshed the assistive value.
        assert_eq!(
            surface.last_accessibility(),
            Some(AccessibilityProps::new(0.0, 100.0, 100.0))
        );
        assert_eq!(*changes.lock().expect("poisoned"), vec![50.0, 100.0]);
    }

    #[test]
    fn test_context_menu_finalizes_drag() {
        let (mut slider, mut surface, arena, _t0) = mounted(SliderConfig::default());

        press(&mut slider, &mut surface, ORIGIN.raw() + 150);
        assert!(slider.is_dragging());

        slider.handle_cursor_events(
            &[event_at(ORIGIN.raw() + 150, CursorEventContent::ContextMenu)],
            &mut surface,
        );
        assert!(!slider.is_dragging());
        assert!(!arena.has_active_session());
        assert_eq!(
            surface.last_accessibility(),
            Some(AccessibilityProps::new(0.0, 100.0, 50.0))
        );
        // Finalize runs first, then the affordance clears.
        assert_eq!(surface.ops.last(), Some(&SurfaceOp::Active(false)));
    }

    #[test]
    fn test_moves_while_idle_are_ignored() {
        let (mut slider, mut surface, _arena, _t0) = mounted(SliderConfig::default().value(30.0));
        drag_to(&mut slider, &mut surface, ORIGIN.raw() + 300);
        assert_eq!(slider.value(), 30.0);
    }

    #[test]
    fn test_out_of_track_positions_freeze_the_value() {
        let (mut slider, mut surface, _arena, _t0) = mounted(SliderConfig::default());

        press(&mut slider, &mut surface, ORIGIN.raw() + 150);
        let held = slider.value();

        // Past the right edge and left of the origin: no update either way.
        drag_to(&mut slider, &mut surface, ORIGIN.raw() + 301);
        assert_eq!(slider.value(), held);
        drag_to(&mut slider, &mut surface, ORIGIN.raw() - 1);
        assert_eq!(slider.value(), held);

        // Re-entering the track resumes tracking.
        drag_to(&mut slider, &mut surface, ORIGIN.raw() + 30);
        assert_eq!(slider.value(), 10.0);
    }

    #[test]
    fn test_press_outside_track_starts_drag_without_jump() {
        let (mut slider, mut surface, _arena, _t0) = mounted(SliderConfig::default().value(30.0));
        press(&mut slider, &mut surface, ORIGIN.raw() - 25);
        assert!(slider.is_dragging());
        assert_eq!(slider.value(), 30.0);
    }

    #[test]
    fn test_keyboard_step_round_trip() {
        let (mut slider, mut surface, _arena, t0) = mounted(SliderConfig::default().value(50.0));

        slider.handle_key_events(&[Key::ArrowRight], t0, &mut surface);
        assert_eq!(slider.value(), 60.0);
        slider.handle_key_events(&[Key::ArrowLeft], t0, &mut surface);
        assert_eq!(slider.value(), 50.0);

        slider.handle_key_events(&[Key::ArrowUp, Key::ArrowDown], t0, &mut surface);
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn test_keyboard_home_and_end() {
        let (mut slider, mut surface, _arena, t0) = mounted(SliderConfig::default().value(50.0));

        slider.handle_key_events(&[Key::Home], t0, &mut surface);
        assert_eq!(slider.value(), 100.0);
        slider.handle_key_events(&[Key::End], t0, &mut surface);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_keyboard_never_overshoots_bounds() {
        let (mut slider, mut surface, _arena, t0) = mounted(SliderConfig::default().value(95.0));

        for _ in 0..5 {
            slider.handle_key_events(&[Key::ArrowRight], t0, &mut surface);
            assert!(slider.value() <= 100.0);
        }
        assert_eq!(slider.value(), 100.0);
    }

    #[test]
    fn test_label_flash_fades_after_delay() {
        let (mut slider, mut surface, _arena, t0) = mounted(SliderConfig::default().value(50.0));

        slider.handle_key_events(&[Key::ArrowRight], t0, &mut surface);
        assert_eq!(surface.last_label_opacity(), Some(1.0));

        // Not yet due.
        slider.tick(t0 + Duration::from_millis(900), &mut surface);
        assert_eq!(surface.last_label_opacity(), Some(1.0));

        slider.tick(t0 + Duration::from_millis(1000), &mut surface);
        assert_eq!(surface.last_label_opacity(), Some(0.0));
    }

    #[test]
    fn test_overlapping_flashes_restart_the_fade() {
        let (mut slider, mut surface, _arena, t0) = mounted(SliderConfig::default().value(50.0));

        slider.handle_key_events(&[Key::ArrowRight], t0, &mut surface);
        let retrigger = t0 + Duration::from_millis(800);
        slider.handle_key_events(&[Key::ArrowRight], retrigger, &mut surface);

        // The original deadline passes without a fade.
        slider.tick(t0 + Duration::from_millis(1100), &mut surface);
        assert_eq!(surface.last_label_opacity(), Some(1.0));

        slider.tick(retrigger + Duration::from_secs(1), &mut surface);
        assert_eq!(surface.last_label_opacity(), Some(0.0));
    }

    #[test]
    fn test_change_callback_fires_only_on_change() {
        let changes: Arc<Mutex<Vec<f64>>> = Arc::default();
        let sink = Arc::clone(&changes);

        let arena = DragArena::new();
        let mut surface = RecordingSurface::with_origin(ORIGIN);
        let mut slider = Slider::new(
            SliderArgs::default()
                .config(SliderConfig::default().value(50.0))
                .on_change(move |v| sink.lock().expect("poisoned").push(v)),
            &arena,
            Instant::now(),
            &mut surface,
        );

        press(&mut slider, &mut surface, ORIGIN.raw() + 150);
        release(&mut slider, &mut surface, ORIGIN.raw() + 150);
        press(&mut slider, &mut surface, ORIGIN.raw() + 150);
        release(&mut slider, &mut surface, ORIGIN.raw() + 150);

        // The pointer landed on the value the slider already held.
        assert!(changes.lock().expect("poisoned").is_empty());
    }

    #[test]
    fn test_second_slider_displaces_the_drag_session() {
        let arena = DragArena::new();
        let t0 = Instant::now();
        let mut surface_a = RecordingSurface::with_origin(ORIGIN);
        let mut surface_b = RecordingSurface::with_origin(ORIGIN);
        let mut a = Slider::new(SliderArgs::default(), &arena, t0, &mut surface_a);
        let mut b = Slider::new(SliderArgs::default(), &arena, t0, &mut surface_b);

        press(&mut a, &mut surface_a, ORIGIN.raw() + 30);
        assert!(a.is_dragging());

        press(&mut b, &mut surface_b, ORIGIN.raw() + 60);
        assert!(!a.is_dragging());
        assert!(b.is_dragging());

        // Document-wide moves now update only the session owner.
        let held = a.value();
        drag_to(&mut a, &mut surface_a, ORIGIN.raw() + 300);
        drag_to(&mut b, &mut surface_b, ORIGIN.raw() + 300);
        assert_eq!(a.value(), held);
        assert_eq!(b.value(), 100.0);
    }

    #[test]
    fn test_teardown_cancels_deferred_work() {
        let (mut slider, mut surface, arena, t0) = mounted(SliderConfig::default().value(50.0));

        slider.handle_key_events(&[Key::ArrowRight], t0, &mut surface);
        press(&mut slider, &mut surface, ORIGIN.raw() + 150);
        slider.teardown(&mut surface);

        assert!(!arena.has_active_session());
        assert_eq!(surface.last_active(), Some(false));

        // Neither the initial render nor the fade fires after teardown.
        let ops = surface.ops.len();
        slider.tick(t0 + Duration::from_secs(10), &mut surface);
        assert_eq!(surface.ops.len(), ops);
    }

    #[test]
    fn test_degenerate_range_never_divides_by_zero() {
        let (mut slider, mut surface, _arena, t0) =
            mounted(SliderConfig::default().min(5.0).max(5.0));

        press(&mut slider, &mut surface, ORIGIN.raw() + 150);
        assert_eq!(slider.value(), 5.0);

        slider.tick(t0 + Duration::from_millis(25), &mut surface);
        assert_eq!(surface.last_fill_width(), Some(Px(0)));

        slider.handle_key_events(&[Key::ArrowRight], t0, &mut surface);
        assert_eq!(slider.value(), 5.0);
    }
}
