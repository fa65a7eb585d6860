//! Closed intervals used as validator arguments.

use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

/// Tolerance applied to floating-point bounds.
pub const EPS: f64 = 1e-12;

/// A scalar that can bound a [`Range`].
///
/// Integral bounds compare exactly; floating-point bounds tolerate an
/// [`EPS`]-sized error at both ends.
pub trait Bound: Copy + PartialOrd + Display {
    fn is_ordered(left: Self, right: Self) -> bool;

    fn within(left: Self, right: Self, value: Self) -> bool;
}

macro_rules! integral_bound {
    ($($t:ty),* $(,)?) => {
        $(
            impl Bound for $t {
                fn is_ordered(left: Self, right: Self) -> bool {
                    left <= right
                }

                fn within(left: Self, right: Self, value: Self) -> bool {
                    left <= value && value <= right
                }
            }
        )*
    };
}

macro_rules! float_bound {
    ($($t:ty),* $(,)?) => {
        $(
            impl Bound for $t {
                fn is_ordered(left: Self, right: Self) -> bool {
                    f64::from(right) - f64::from(left) > -EPS
                }

                fn within(left: Self, right: Self, value: Self) -> bool {
                    let (left, right, value) = (f64::from(left), f64::from(right), f64::from(value));
                    (left - value).abs() < EPS
                        || (right - value).abs() < EPS
                        || (left < value && value < right)
                }
            }
        )*
    };
}

integral_bound!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_bound!(f32, f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    left: T,
    right: T,
}

impl<T: Bound> Range<T> {
    /// Builds a range, rejecting reversed bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when `left` lies above `right`.
    pub fn new(left: T, right: T) -> Result<Self> {
        if !T::is_ordered(left, right) {
            return Err(Error::invalid_range(left, right));
        }

        Ok(Self { left, right })
    }

    pub fn left(&self) -> T {
        self.left
    }

    pub fn right(&self) -> T {
        self.right
    }

    pub fn contains(&self, value: T) -> bool {
        T::within(self.left, self.right, value)
    }
}

/// Shorthand for [`Range::new`].
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] when `left` lies above `right`.
pub fn range<T: Bound>(left: T, right: T) -> Result<Range<T>> {
    Range::new(left, right)
}

impl<T: Display> Display for Range<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "[{}; {}]", self.left, self.right)
    }
}
