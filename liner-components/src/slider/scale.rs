//! The value model: bounds, clamping, and value ↔ position mapping.
//!
//! A [`ValueScale`] owns the `[min, max]` interval and converts between
//! values and track positions. The mapping rounds to whole percents and whole
//! pixels at each hop, so a round trip is lossy, but
//! [`ValueScale::value_to_position`] is monotonic: a larger value never lands
//! left of a smaller one.

use liner_ui::Px;

/// Direction of a keyboard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Toward the maximum.
    Increment,
    /// Toward the minimum.
    Decrement,
}

impl StepDirection {
    fn signum(self) -> f64 {
        match self {
            Self::Increment => 1.0,
            Self::Decrement => -1.0,
        }
    }
}

/// Normalized value bounds with position mapping.
///
/// Construction swaps inverted bounds, so `min() <= max()` always holds and
/// `range() >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    min: f64,
    max: f64,
}

impl ValueScale {
    /// Creates a scale from possibly-inverted bounds.
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = Self::clamp_range(min, max);
        Self { min, max }
    }

    /// Returns the bounds ordered so that `min <= max`.
    pub fn clamp_range(min: f64, max: f64) -> (f64, f64) {
        if min > max { (max, min) } else { (min, max) }
    }

    /// The lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The span of the selectable interval; never negative.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Clamps a value into `[min, max]`. Idempotent; a non-finite input
    /// degrades to the minimum.
    pub fn clamp_value(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a pointer x coordinate into a clamped value.
    ///
    /// `track_start` is the track's left edge in the same coordinate space as
    /// `position`. The caller is responsible for rejecting positions outside
    /// the track; this function only clamps the resulting value. A degenerate
    /// scale (`range == 0`) or track (`track_width <= 0`) yields the minimum.
    pub fn position_to_value(&self, position: Px, track_start: Px, track_width: Px) -> f64 {
        if self.range() == 0.0 || track_width.raw() <= 0 {
            return self.min;
        }
        let percent = ((position - track_start).to_f64() * 100.0 / track_width.to_f64()).ceil();
        let value = (self.min + percent * self.range() / 100.0).ceil();
        self.clamp_value(value)
    }

    /// Converts a value into a fill width / handle offset on the track.
    ///
    /// Monotonic non-decreasing in `value` over `[min, max]`. A degenerate
    /// scale yields `0px`.
    pub fn value_to_position(&self, value: f64, track_width: Px) -> Px {
        if self.range() == 0.0 {
            return Px::ZERO;
        }
        let percent = ((value - self.min) * 100.0 / self.range()).round();
        Px::saturating_from_f64((percent * track_width.to_f64() / 100.0).round())
    }

    /// Applies one keyboard step and clamps the result.
    pub fn step_by(&self, value: f64, step: f64, direction: StepDirection) -> f64 {
        self.clamp_value(value + direction.signum() * step)
    }
}
