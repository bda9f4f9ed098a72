// FIXME: `Number` could be split into a required core and optional capability traits once there's a
// non-primitive element type in-tree that needs it

use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support the trigonometric functions needed for angles and spherical interpolation.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    fn acos(self) -> Self;
}

/// The element type of [`Vector`], [`Matrix`] and [`Quaternion`].
///
/// This trait describes the capability set every algorithm in this crate is written against:
/// the arithmetic operators, comparison, negation, and conversion from small integer literals.
/// Capabilities that not every type has (square roots, exact division) are described by
/// [`Number::sqrt`] and [`Number::INTEGRAL`], and operations that need them fail with
/// [`Error::UnsupportedOperationForType`] at runtime.
///
/// The trait is implemented for the signed integer types, [`f32`] and [`f64`]. Custom fixed-point
/// or decimal types can implement it to use the rest of the crate.
///
/// [`Vector`]: crate::Vector
/// [`Matrix`]: crate::Matrix
/// [`Quaternion`]: crate::Quaternion
/// [`Error::UnsupportedOperationForType`]: crate::Error::UnsupportedOperationForType
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + PartialOrd
    + Copy
    + fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Whether division on this type truncates.
    ///
    /// Elimination-based algorithms (echelon forms, inverse, LU decomposition) need exact
    /// division and refuse to run on integral types.
    const INTEGRAL: bool;

    /// Converts a small integer literal into this type, or returns [`None`] if it can't be
    /// represented.
    fn from_i32(value: i32) -> Option<Self>;

    /// Computes the square root of `self`, or returns [`None`] if the type does not support it.
    fn sqrt(self) -> Option<Self> {
        None
    }

    /// Returns the absolute value of `self`.
    fn abs(self) -> Self {
        if self < Self::ZERO {
            -self
        } else {
            self
        }
    }

    /// Adds `rhs` to `self`, returning [`None`] on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    /// Subtracts `rhs` from `self`, returning [`None`] on overflow.
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    /// Multiplies `self` with `rhs`, returning [`None`] on overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }
}

macro_rules! integer_number {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl Number for $types {
                const INTEGRAL: bool = true;

                fn from_i32(value: i32) -> Option<Self> {
                    Self::try_from(value).ok()
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$types>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$types>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$types>::checked_mul(self, rhs)
                }
            }
        )+
    };
}
integer_number!(i8, i16, i32, i64, i128, isize);

macro_rules! float_number {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Number for $types {
                const INTEGRAL: bool = false;

                fn from_i32(value: i32) -> Option<Self> {
                    Some(value as $types)
                }

                fn sqrt(self) -> Option<Self> {
                    Some(<$types>::sqrt(self))
                }

                fn abs(self) -> Self {
                    <$types>::abs(self)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    <$types>::sin(self)
                }

                fn cos(self) -> Self {
                    <$types>::cos(self)
                }

                fn acos(self) -> Self {
                    <$types>::acos(self)
                }
            }
        )+
    };
}
float_number!(f32, f64);

/// Returns the name of `T`, for error messages.
pub(crate) fn type_name<T>() -> &'static str {
    std::any::type_name::<T>()
}

/// Returns `T::ONE / 2`.
pub(crate) fn one_half<T: Number>() -> T {
    T::ONE / (T::ONE + T::ONE)
}

/// Clamps a cosine to `[-1, 1]` to absorb rounding errors before `acos`.
pub(crate) fn clamp_unit<T: Number>(cos: T) -> T {
    if cos > T::ONE {
        T::ONE
    } else if cos < -T::ONE {
        -T::ONE
    } else {
        cos
    }
}
