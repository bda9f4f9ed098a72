//! Implementations of `std::ops`.
//!
//! Binary operators panic when the operand shapes are incompatible. Use the `try_*` methods and
//! [`Matrix::multiply_vector`] to handle that case.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{error::or_panic, Number, Vector};

use super::Matrix;

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of range for {}x{} matrix",
            self.rows,
            self.columns,
        );
        &self.elements[row * self.columns + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of range for {}x{} matrix",
            self.rows,
            self.columns,
        );
        &mut self.elements[row * self.columns + column]
    }
}

impl<T: Number> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: Number> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

macro_rules! binop {
    ($trait:ident, $method:ident, $try:ident) => {
        impl<T: Number> $trait<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $method(self, rhs: &Matrix<T>) -> Self::Output {
                or_panic(self.$try(rhs))
            }
        }

        impl<T: Number> $trait<Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $method(self, rhs: Matrix<T>) -> Self::Output {
                or_panic(self.$try(&rhs))
            }
        }

        impl<T: Number> $trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $method(self, rhs: &Matrix<T>) -> Self::Output {
                or_panic(self.$try(rhs))
            }
        }
    };
}

binop!(Add, add, try_add);
binop!(Sub, sub, try_sub);
binop!(Mul, mul, try_mul);

impl<T: Number> AddAssign<&Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        *self = or_panic(self.try_add(rhs));
    }
}

impl<T: Number> SubAssign<&Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        *self = or_panic(self.try_sub(rhs));
    }
}

impl<T: Number> MulAssign<&Matrix<T>> for Matrix<T> {
    #[track_caller]
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = or_panic(self.try_mul(rhs));
    }
}

/// Matrix-Vector multiplication.
///
/// The vector is treated as a column matrix, so the result has as many components as the matrix
/// has rows.
impl<T: Number> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn mul(self, rhs: &Vector<T>) -> Self::Output {
        or_panic(self.multiply_vector(rhs))
    }
}

/// Matrix-Vector multiplication.
impl<T: Number> Mul<Vector<T>> for Matrix<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn mul(self, rhs: Vector<T>) -> Self::Output {
        or_panic(self.multiply_vector(&rhs))
    }
}

/// Matrix-Scalar multiplication.
impl<T: Number> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

/// Matrix-Scalar multiplication.
impl<T: Number> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Number> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = self.scale(rhs);
    }
}

impl<T: Number> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Self::Output {
        self.divide(rhs)
    }
}

impl<T: Number> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Self::Output {
        self.divide(rhs)
    }
}

impl<T: Number> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = self.divide(rhs);
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, Matrix};

    fn m<const C: usize>(rows: &[[i32; C]]) -> Matrix<i32> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn operators() {
        let a = m(&[[1, 2], [3, 4]]);
        let b = m(&[[0, 1], [1, 0]]);
        assert_eq!(&a + &b, m(&[[1, 3], [4, 4]]));
        assert_eq!(a.clone() - b.clone(), m(&[[1, 1], [2, 4]]));
        assert_eq!(&a * &b, m(&[[2, 1], [4, 3]]));
        assert_eq!(-&a, m(&[[-1, -2], [-3, -4]]));
        assert_eq!(&a * 3, m(&[[3, 6], [9, 12]]));
        assert_eq!(a.clone() / 2, m(&[[0, 1], [1, 2]]));
        assert_eq!(&a * &vec2(1, 1), vec2(3, 7));

        let mut c = a.clone();
        c += &b;
        c -= &b;
        assert_eq!(c, a);
        c *= &b;
        assert_eq!(c, &a * &b);
        c *= 2;
        c /= 2;
        assert_eq!(c, &a * &b);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch in matrix addition: 2x2 vs 1x2")]
    fn mismatched_add_panics() {
        let _ = m(&[[1, 2], [3, 4]]) + m(&[[1, 2]]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let a = m(&[[1, 2], [3, 4]]);
        let _ = a[(0, 2)];
    }
}
