//! The host surface the slider renders through.
//!
//! The slider owns no markup and no styling. The host provides a track, a
//! fill indicator, a handle, and three labels, positioned however it likes,
//! and implements [`HostSurface`] so the slider can keep them consistent with
//! the current value. Every mutation the slider ever performs on the view
//! goes through this trait.

use liner_ui::{AccessibilityProps, Px};

/// Render target and geometry oracle for one slider instance.
///
/// A render request calls, in order: [`set_fill_width`], [`set_handle_left`],
/// [`set_value_label`]; a drag finalize additionally calls
/// [`apply_accessibility`]. None of these are allowed to fail; the host
/// applies them best-effort to whatever view it still has.
///
/// [`set_fill_width`]: HostSurface::set_fill_width
/// [`set_handle_left`]: HostSurface::set_handle_left
/// [`set_value_label`]: HostSurface::set_value_label
/// [`apply_accessibility`]: HostSurface::apply_accessibility
pub trait HostSurface {
    /// The document-space x coordinate of the track's left edge. Pointer
    /// coordinates are compared against this origin.
    fn track_origin(&self) -> Px;

    /// Resizes the fill indicator to `width` pixels.
    fn set_fill_width(&mut self, width: Px);

    /// Moves the handle so its left edge sits at `left` (document space).
    fn set_handle_left(&mut self, left: Px);

    /// Replaces the current-value label text.
    fn set_value_label(&mut self, text: &str);

    /// Replaces the minimum-value label text. Called once at mount.
    fn set_min_label(&mut self, text: &str);

    /// Replaces the maximum-value label text. Called once at mount.
    fn set_max_label(&mut self, text: &str);

    /// Sets the current-value label opacity; the host's stylesheet owns the
    /// fade transition.
    fn set_label_opacity(&mut self, opacity: f32);

    /// Toggles the active-drag affordance on the handle.
    fn set_active(&mut self, active: bool);

    /// Applies the numeric range and value to the handle for assistive
    /// technology.
    fn apply_accessibility(&mut self, props: AccessibilityProps);
}
