//! The interaction state machine: pointer drags and keyboard steps.
//!
//! The machine has two states, idle and dragging, keyed off drag-session
//! ownership. A press anywhere on the slider's surface starts a drag and
//! jumps the value to the pointer; moves update the value while the session
//! is owned; a release or context-menu anywhere in the document finalizes.
//! Pointer positions outside the track are ignored during a drag: the value
//! freezes until the pointer re-enters the valid range.

use std::time::Instant;

use liner_ui::{CursorEvent, CursorEventContent, DragArena, DragSession, Key, Px};

use crate::host::HostSurface;
use crate::slider::scale::StepDirection;

use super::{LABEL_FADE_DELAY, Slider, render};

/// Drag-lifecycle holder for one slider instance.
///
/// Wraps the instance's [`DragSession`]: the slider is dragging exactly while
/// its session owns the arena's active drag. A press on another slider in the
/// same arena displaces the session, which reads back as "not dragging" here.
pub struct SliderController {
    session: DragSession,
}

impl SliderController {
    /// Creates a controller registered in the given arena.
    pub fn new(arena: &DragArena) -> Self {
        Self {
            session: DragSession::new(arena),
        }
    }

    /// Returns whether this slider owns the active drag.
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    pub(super) fn begin_drag(&self) {
        self.session.begin();
    }

    pub(super) fn end_drag(&self) {
        self.session.end();
    }
}

/// Whether a pointer x coordinate falls on the track, endpoints included.
pub(super) fn within_track(x: Px, track_start: Px, track_width: Px) -> bool {
    x >= track_start && x <= track_start + track_width
}

pub(super) fn handle_cursor_events(
    slider: &mut Slider,
    events: &[CursorEvent],
    surface: &mut dyn HostSurface,
) {
    for event in events {
        match event.content {
            CursorEventContent::Pressed => {
                slider.controller.begin_drag();
                surface.set_active(true);
                if let Some(position) = event.position {
                    apply_pointer_position(slider, position.x, surface);
                }
            }
            CursorEventContent::Moved => {
                if slider.controller.is_dragging()
                    && let Some(position) = event.position
                {
                    apply_pointer_position(slider, position.x, surface);
                }
            }
            CursorEventContent::Released | CursorEventContent::ContextMenu => {
                if slider.controller.is_dragging() {
                    slider.controller.end_drag();
                    render::finalize_frame(slider, surface);
                }
                // The affordance clears last, on any document-wide release,
                // even for an instance whose session was displaced mid-drag.
                surface.set_active(false);
            }
        }
    }
}

/// Converts an in-track pointer position into a value update. Out-of-track
/// positions leave the value frozen.
fn apply_pointer_position(slider: &mut Slider, x: Px, surface: &mut dyn HostSurface) {
    let origin = surface.track_origin();
    if !within_track(x, origin, slider.config.track_width) {
        return;
    }
    let value = slider
        .scale
        .position_to_value(x, origin, slider.config.track_width);
    commit_value(slider, value, surface);
}

pub(super) fn handle_key_events(
    slider: &mut Slider,
    keys: &[Key],
    now: Instant,
    surface: &mut dyn HostSurface,
) {
    for key in keys {
        let value = match key {
            Key::ArrowLeft | Key::ArrowDown => {
                slider
                    .scale
                    .step_by(slider.value, slider.config.step, StepDirection::Decrement)
            }
            Key::ArrowRight | Key::ArrowUp => {
                slider
                    .scale
                    .step_by(slider.value, slider.config.step, StepDirection::Increment)
            }
            Key::Home => slider.scale.max(),
            Key::End => slider.scale.min(),
        };
        tracing::trace!(?key, value, "keyboard value change");
        commit_value(slider, value, surface);
        flash_label(slider, now, surface);
    }
}

/// Stores a new value (re-clamped, so no code path can leave the range) and
/// renders. The change callback fires only when the value actually moved.
fn commit_value(slider: &mut Slider, value: f64, surface: &mut dyn HostSurface) {
    let value = slider.scale.clamp_value(value);
    if value != slider.value {
        slider.value = value;
        slider.on_change.call(value);
    }
    render::render_frame(slider, surface);
}

/// Makes the value label fully opaque and restarts the fade countdown.
/// Overlapping flashes reschedule; last write wins.
fn flash_label(slider: &mut Slider, now: Instant, surface: &mut dyn HostSurface) {
    surface.set_label_opacity(1.0);
    slider.label_fade.schedule(now, LABEL_FADE_DELAY);
}
