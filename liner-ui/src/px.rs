//! Physical pixel coordinate types.
//!
//! The slider core works entirely in physical pixels: pointer coordinates
//! arrive in pixels, and every render request (fill width, handle offset) is
//! expressed in pixels. This module provides the two types that carry those
//! values:
//!
//! - [`Px`]: a single pixel coordinate. Negative values are legal; a pointer
//!   may sit left of the track's origin.
//! - [`PxPosition`]: a 2D pixel position (x, y), origin at the top-left,
//!   y growing downward.
//!
//! Float conversions saturate instead of wrapping so that a degenerate host
//! coordinate can never corrupt downstream arithmetic.

use std::{
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// A physical pixel coordinate value.
///
/// `Px` wraps an `i32` and supports the arithmetic the slider geometry needs:
/// offsets, differences, scaling, and saturating conversions from floats.
///
/// # Examples
///
/// ```
/// use liner_ui::Px;
///
/// let origin = Px(40);
/// let pointer = Px(190);
/// assert_eq!(pointer - origin, Px(150));
/// assert_eq!(Px::saturating_from_f32(150.7), Px(150));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// The maximum representable pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Creates a new `Px` from an `i32`.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw `i32` value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Converts to `f32` for fractional geometry.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Converts to `f64` for value-space arithmetic.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Converts a float to `Px`, truncating toward zero and saturating at the
    /// `i32` bounds. NaN maps to zero.
    pub fn saturating_from_f32(value: f32) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        if value >= i32::MAX as f32 {
            return Self::MAX;
        }
        if value <= i32::MIN as f32 {
            return Self(i32::MIN);
        }
        Self(value as i32)
    }

    /// Converts a double to `Px` with the same saturation rules as
    /// [`Px::saturating_from_f32`].
    pub fn saturating_from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        if value >= f64::from(i32::MAX) {
            return Self::MAX;
        }
        if value <= f64::from(i32::MIN) {
            return Self(i32::MIN);
        }
        Self(value as i32)
    }

    /// Addition that clamps at the `i32` bounds instead of overflowing.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtraction that clamps at the `i32` bounds instead of overflowing.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Absolute value, as a plain `i32`.
    pub fn abs(self) -> i32 {
        self.0.saturating_abs()
    }

    /// The smaller of two pixel values.
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// The larger of two pixel values.
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self {
        Self(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Px {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Px> for i32 {
    fn from(value: Px) -> Self {
        value.0
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// Horizontal coordinate, increasing to the right.
    pub x: Px,
    /// Vertical coordinate, increasing downward.
    pub y: Px,
}

impl PxPosition {
    /// The origin position (0, 0).
    pub const ORIGIN: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
    };

    /// Creates a new position.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by the given deltas.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for PxPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for PxPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<[i32; 2]> for PxPosition {
    fn from(pos: [i32; 2]) -> Self {
        Self {
            x: Px(pos[0]),
            y: Px(pos[1]),
        }
    }
}

impl From<PxPosition> for [i32; 2] {
    fn from(pos: PxPosition) -> Self {
        [pos.x.0, pos.y.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10);
        let b = Px(4);

        assert_eq!(a + b, Px(14));
        assert_eq!(a - b, Px(6));
        assert_eq!(a * 3, Px(30));
        assert_eq!(a / 2, Px(5));
        assert_eq!(-a, Px(-10));
    }

    #[test]
    fn test_px_saturating_arithmetic() {
        let max = Px(i32::MAX);
        let min = Px(i32::MIN);
        assert_eq!(max.saturating_add(Px(1)), max);
        assert_eq!(min.saturating_sub(Px(1)), min);
    }

    #[test]
    fn test_saturating_float_conversion() {
        assert_eq!(Px::saturating_from_f32(150.7), Px(150));
        assert_eq!(Px::saturating_from_f32(-3.2), Px(-3));
        assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f32(f32::NAN), Px::ZERO);

        assert_eq!(Px::saturating_from_f64(1e12), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f64(-1e12), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f64(f64::NAN), Px::ZERO);
    }

    #[test]
    fn test_px_position() {
        let pos = PxPosition::new(Px(10), Px(-5));
        assert_eq!(pos.offset(Px(2), Px(3)), PxPosition::new(Px(12), Px(-2)));

        let sum = pos + PxPosition::new(Px(1), Px(1));
        assert_eq!(sum, PxPosition::new(Px(11), Px(-4)));

        let arr: [i32; 2] = pos.into();
        assert_eq!(arr, [10, -5]);
        assert_eq!(PxPosition::from(arr), pos);
    }
}
