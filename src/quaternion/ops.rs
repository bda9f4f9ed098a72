use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{error::or_panic, Number, Vector};

use super::Quaternion;

impl<T: Number> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(rhs)
    }
}

impl<T: Number> AddAssign for Quaternion<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.sum(rhs);
    }
}

impl<T: Number> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Number> SubAssign for Quaternion<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(rhs);
    }
}

impl<T: Number> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Hamilton product.
impl<T: Number> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.product(rhs)
    }
}

impl<T: Number> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.product(rhs);
    }
}

/// Pre-multiplies a 3-component vector, see [`Quaternion::product_vector`].
///
/// # Panics
///
/// Panics if the vector does not have exactly 3 components.
impl<T: Number> Mul<&Vector<T>> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: &Vector<T>) -> Self::Output {
        or_panic(self.product_vector(rhs))
    }
}

/// Component-wise scaling.
impl<T: Number> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}
