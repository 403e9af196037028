//! Render requests: projecting the current value onto the host surface.
//!
//! A frame is always written in the same order (fill width, handle offset,
//! value label) so the host never observes a handle detached from its fill.
//! Accessibility refresh happens only on drag finalize and at mount.

use crate::host::HostSurface;
use liner_ui::AccessibilityProps;

use super::{HANDLE_WIDTH, Slider};

/// Writes one consistent frame: fill, handle, label.
pub(super) fn render_frame(slider: &Slider, surface: &mut dyn HostSurface) {
    let position = slider
        .scale
        .value_to_position(slider.value, slider.config.track_width);
    surface.set_fill_width(position);

    let origin = surface.track_origin();
    surface.set_handle_left(position + origin - HANDLE_WIDTH / 2);

    surface.set_value_label(&format_value(slider.value));
}

/// Render plus accessibility refresh; used when a drag finalizes.
pub(super) fn finalize_frame(slider: &Slider, surface: &mut dyn HostSurface) {
    render_frame(slider, surface);
    surface.apply_accessibility(accessibility_props(slider));
}

/// One-time mount work: all three labels and the accessibility triple.
pub(super) fn bootstrap(slider: &Slider, surface: &mut dyn HostSurface) {
    surface.set_value_label(&format_value(slider.value));
    surface.set_min_label(&format_value(slider.scale.min()));
    surface.set_max_label(&format_value(slider.scale.max()));
    surface.apply_accessibility(accessibility_props(slider));
}

pub(super) fn accessibility_props(slider: &Slider) -> AccessibilityProps {
    AccessibilityProps::new(slider.scale.min(), slider.scale.max(), slider.value)
}

/// Formats a value for the labels: integral values print without a decimal
/// point, everything else uses the shortest float form.
pub(super) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
