//! Implementations of `std::ops`.
//!
//! Binary operators panic when the operands have different dimensions. Use the `try_*` methods on
//! [`Vector`] to handle that case.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{error::or_panic, Number};

use super::Vector;

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.0 == other
    }
}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.0 == other
    }
}

/// Element-wise negation.
impl<T: Number> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Element-wise negation.
impl<T: Number> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

macro_rules! binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $try:ident) => {
        impl<T: Number> $trait<&Vector<T>> for &Vector<T> {
            type Output = Vector<T>;

            #[track_caller]
            fn $method(self, rhs: &Vector<T>) -> Self::Output {
                or_panic(self.$try(rhs))
            }
        }

        impl<T: Number> $trait<Vector<T>> for Vector<T> {
            type Output = Vector<T>;

            #[track_caller]
            fn $method(self, rhs: Vector<T>) -> Self::Output {
                or_panic(self.$try(&rhs))
            }
        }

        impl<T: Number> $trait<&Vector<T>> for Vector<T> {
            type Output = Vector<T>;

            #[track_caller]
            fn $method(self, rhs: &Vector<T>) -> Self::Output {
                or_panic(self.$try(rhs))
            }
        }

        impl<T: Number> $assign_trait<&Vector<T>> for Vector<T> {
            #[track_caller]
            fn $assign_method(&mut self, rhs: &Vector<T>) {
                *self = or_panic(self.$try(rhs));
            }
        }
    };
}

binop!(Add, add, AddAssign, add_assign, try_add);
binop!(Sub, sub, SubAssign, sub_assign, try_sub);

/// Vector-Scalar multiplication (scaling).
impl<T: Number> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Number> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Number> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = self.scale(rhs);
    }
}

/// Vector-Scalar division.
impl<T: Number> Div<T> for Vector<T> {
    type Output = Vector<T>;

    fn div(self, rhs: T) -> Self::Output {
        self.divide(rhs)
    }
}

/// Vector-Scalar division.
impl<T: Number> Div<T> for &Vector<T> {
    type Output = Vector<T>;

    fn div(self, rhs: T) -> Self::Output {
        self.divide(rhs)
    }
}

impl<T: Number> DivAssign<T> for Vector<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = self.divide(rhs);
    }
}
