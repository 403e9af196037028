//! Accessibility values exposed on the slider handle.
//!
//! The slider does not own its markup, so it cannot set ARIA attributes
//! itself. Instead it hands the host an [`AccessibilityProps`] snapshot of
//! the numeric minimum, maximum and current value, and the host applies it
//! to the handle element (`aria-valuemin`/`aria-valuemax`/`aria-valuenow` on
//! the web, a slider role node elsewhere).
//!
//! The snapshot is produced at construction and refreshed on every drag
//! finalize.

/// Numeric range and current value for assistive technology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessibilityProps {
    /// The lower bound of the slider's range.
    pub numeric_min: f64,
    /// The upper bound of the slider's range.
    pub numeric_max: f64,
    /// The current value.
    pub numeric_value: f64,
}

impl AccessibilityProps {
    /// Creates a snapshot for a slider with the given bounds and value.
    pub fn new(numeric_min: f64, numeric_max: f64, numeric_value: f64) -> Self {
        Self {
            numeric_min,
            numeric_max,
            numeric_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_fields() {
        let props = AccessibilityProps::new(0.0, 100.0, 50.0);
        assert_eq!(props.numeric_min, 0.0);
        assert_eq!(props.numeric_max, 100.0);
        assert_eq!(props.numeric_value, 50.0);
    }
}
