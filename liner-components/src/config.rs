//! Slider configuration and total attribute parsing.
//!
//! Hosts hand the slider string-valued attributes (`width`, `min`, `max`,
//! `step`, `value`). Parsing is total: an absent or non-numeric attribute is
//! substituted with its documented default instead of ever producing a NaN or
//! an undefined field. Inverted bounds are not repaired here; the value
//! model normalizes them once at construction.

use std::collections::HashMap;

use derive_setters::Setters;
use liner_ui::Px;

/// Default track width in pixels.
pub const DEFAULT_TRACK_WIDTH: Px = Px(300);
/// Default minimum value.
pub const DEFAULT_MIN: f64 = 0.0;
/// Default maximum value.
pub const DEFAULT_MAX: f64 = 100.0;
/// Default keyboard step increment.
pub const DEFAULT_STEP: f64 = 10.0;

/// Source of construction-time attributes.
///
/// Implemented by whatever the host uses to carry markup attributes; a
/// `HashMap<String, String>` works out of the box.
pub trait AttributeSource {
    /// Returns the raw attribute value, if the attribute is present.
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl AttributeSource for &[(&str, &str)] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}

/// Immutable slider configuration, fixed at construction.
///
/// `min`/`max` are stored as given; the value model swaps them when inverted.
/// `value` is the requested initial value; `None` means "use the minimum".
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct SliderConfig {
    /// Width of the draggable track in pixels.
    pub track_width: Px,
    /// Lower bound of the selectable range.
    pub min: f64,
    /// Upper bound of the selectable range.
    pub max: f64,
    /// Keyboard step increment; always positive.
    pub step: f64,
    /// Requested initial value, clamped into range at construction.
    #[setters(strip_option)]
    pub value: Option<f64>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            track_width: DEFAULT_TRACK_WIDTH,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            value: None,
        }
    }
}

impl SliderConfig {
    /// Builds a configuration from host attributes.
    ///
    /// Defaults: `width` 300, `min` 0, `max` 100, `step` 10. A `step` or
    /// `width` that parses to a non-positive number counts as invalid and
    /// falls back. A missing or non-numeric `value` stays `None` and resolves
    /// to the minimum at construction.
    pub fn from_attributes(attrs: &dyn AttributeSource) -> Self {
        let track_width = Px::saturating_from_f64(parse_or(
            attrs.attribute("width"),
            "width",
            DEFAULT_TRACK_WIDTH.to_f64(),
        ));
        // Positivity is checked after the pixel conversion: a fractional
        // width like "0.5" truncates to zero and must also fall back.
        let track_width = if track_width.raw() > 0 {
            track_width
        } else {
            tracing::debug!("non-positive width attribute, substituting default");
            DEFAULT_TRACK_WIDTH
        };

        let step = parse_or(attrs.attribute("step"), "step", DEFAULT_STEP);
        let step = if step > 0.0 {
            step
        } else {
            tracing::debug!(step, "non-positive step attribute, substituting default");
            DEFAULT_STEP
        };

        Self {
            track_width,
            min: parse_or(attrs.attribute("min"), "min", DEFAULT_MIN),
            max: parse_or(attrs.attribute("max"), "max", DEFAULT_MAX),
            step,
            value: parse_numeric(attrs.attribute("value")),
        }
    }
}

/// Parses an attribute into a finite number, or `None`.
fn parse_numeric(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parses an attribute into a finite number, substituting `default` when the
/// attribute is absent or malformed.
fn parse_or(raw: Option<&str>, name: &str, default: f64) -> f64 {
    match parse_numeric(raw) {
        Some(v) => v,
        None => {
            if raw.is_some() {
                tracing::debug!(attribute = name, raw, default, "non-numeric attribute, substituting default");
            }
            default
        }
    }
}
