//! Registry-backed numeric kernels.
//!
//! Kernels operate on flat element slices. Output slices are always provided by the caller and
//! must have the right length; kernels never allocate.

use itertools::izip;

use crate::{
    registry::{Op, Registry},
    traits::Number,
};

pub(crate) type MapKernel<T> = fn(&[T], &mut [T]);
pub(crate) type ZipKernel<T> = fn(&[T], &[T], &mut [T]);
pub(crate) type ScalarKernel<T> = fn(&[T], T, &mut [T]);
pub(crate) type DotKernel<T> = fn(&[T], &[T]) -> T;

/// `(left, right, inner, right_columns, out)`
///
/// `left` holds `out.len() / right_columns` rows of `inner` elements; `right` holds `inner` rows
/// of `right_columns` elements. Both are row-major.
pub(crate) type ProductKernel<T> = fn(&[T], &[T], usize, usize, &mut [T]);

pub(crate) fn negate<T: Number>() -> MapKernel<T> {
    Registry::global().resolve::<T, MapKernel<T>>(Op::Negate, bootstrap::negate, || {
        specialized::negate
    })
}

pub(crate) fn add<T: Number>() -> ZipKernel<T> {
    Registry::global().resolve::<T, ZipKernel<T>>(Op::Add, bootstrap::add, || specialized::add)
}

pub(crate) fn subtract<T: Number>() -> ZipKernel<T> {
    Registry::global().resolve::<T, ZipKernel<T>>(Op::Subtract, bootstrap::subtract, || {
        specialized::subtract
    })
}

pub(crate) fn scale<T: Number>() -> ScalarKernel<T> {
    Registry::global().resolve::<T, ScalarKernel<T>>(Op::Scale, bootstrap::scale, || {
        specialized::scale
    })
}

pub(crate) fn divide<T: Number>() -> ScalarKernel<T> {
    Registry::global().resolve::<T, ScalarKernel<T>>(Op::Divide, bootstrap::divide, || {
        specialized::divide
    })
}

pub(crate) fn dot<T: Number>() -> DotKernel<T> {
    Registry::global().resolve::<T, DotKernel<T>>(Op::Dot, bootstrap::dot, || specialized::dot)
}

pub(crate) fn matrix_multiply<T: Number>() -> ProductKernel<T> {
    Registry::global().resolve::<T, ProductKernel<T>>(
        Op::MatrixMultiply,
        bootstrap::matrix_multiply,
        || specialized::matrix_multiply,
    )
}

/// Index-based kernels, written only against the `Number` capabilities.
#[allow(clippy::needless_range_loop)]
mod bootstrap {
    use super::*;

    pub(super) fn negate<T: Number>(src: &[T], out: &mut [T]) {
        for i in 0..out.len() {
            out[i] = -src[i];
        }
    }

    pub(super) fn add<T: Number>(left: &[T], right: &[T], out: &mut [T]) {
        for i in 0..out.len() {
            out[i] = left[i] + right[i];
        }
    }

    pub(super) fn subtract<T: Number>(left: &[T], right: &[T], out: &mut [T]) {
        for i in 0..out.len() {
            out[i] = left[i] - right[i];
        }
    }

    pub(super) fn scale<T: Number>(src: &[T], scalar: T, out: &mut [T]) {
        for i in 0..out.len() {
            out[i] = src[i] * scalar;
        }
    }

    pub(super) fn divide<T: Number>(src: &[T], scalar: T, out: &mut [T]) {
        for i in 0..out.len() {
            out[i] = src[i] / scalar;
        }
    }

    pub(super) fn dot<T: Number>(left: &[T], right: &[T]) -> T {
        let mut acc = T::ZERO;
        for i in 0..left.len() {
            acc = acc + left[i] * right[i];
        }
        acc
    }

    pub(super) fn matrix_multiply<T: Number>(
        left: &[T],
        right: &[T],
        inner: usize,
        columns: usize,
        out: &mut [T],
    ) {
        let rows = out.len() / columns;
        for i in 0..rows {
            for j in 0..columns {
                let mut acc = T::ZERO;
                for k in 0..inner {
                    acc = acc + left[i * inner + k] * right[k * columns + j];
                }
                out[i * columns + j] = acc;
            }
        }
    }
}

/// Iterator-based kernels. These must accumulate in the same order as their bootstrap
/// counterparts.
mod specialized {
    use super::*;

    pub(super) fn negate<T: Number>(src: &[T], out: &mut [T]) {
        for (o, &s) in out.iter_mut().zip(src) {
            *o = -s;
        }
    }

    pub(super) fn add<T: Number>(left: &[T], right: &[T], out: &mut [T]) {
        for (o, &l, &r) in izip!(out, left, right) {
            *o = l + r;
        }
    }

    pub(super) fn subtract<T: Number>(left: &[T], right: &[T], out: &mut [T]) {
        for (o, &l, &r) in izip!(out, left, right) {
            *o = l - r;
        }
    }

    pub(super) fn scale<T: Number>(src: &[T], scalar: T, out: &mut [T]) {
        for (o, &s) in out.iter_mut().zip(src) {
            *o = s * scalar;
        }
    }

    pub(super) fn divide<T: Number>(src: &[T], scalar: T, out: &mut [T]) {
        for (o, &s) in out.iter_mut().zip(src) {
            *o = s / scalar;
        }
    }

    pub(super) fn dot<T: Number>(left: &[T], right: &[T]) -> T {
        left.iter()
            .zip(right)
            .fold(T::ZERO, |acc, (&l, &r)| acc + l * r)
    }

    /// i-k-j loop order, streaming through rows of `right`.
    ///
    /// Every output element still sums its products in increasing `k`, starting from zero.
    pub(super) fn matrix_multiply<T: Number>(
        left: &[T],
        right: &[T],
        inner: usize,
        columns: usize,
        out: &mut [T],
    ) {
        out.fill(T::ZERO);
        for (out_row, left_row) in out.chunks_exact_mut(columns).zip(left.chunks_exact(inner)) {
            for (&l, right_row) in left_row.iter().zip(right.chunks_exact(columns)) {
                for (o, &r) in out_row.iter_mut().zip(right_row) {
                    *o = *o + l * r;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_f64(len: usize) -> Vec<f64> {
        (0..len).map(|_| fastrand::f64() * 20.0 - 10.0).collect()
    }

    #[test]
    fn elementwise_kernels_agree() {
        let left = random_f64(37);
        let right = random_f64(37);
        let mut a = vec![0.0; 37];
        let mut b = vec![0.0; 37];

        bootstrap::add(&left, &right, &mut a);
        specialized::add(&left, &right, &mut b);
        assert_eq!(a, b);

        bootstrap::subtract(&left, &right, &mut a);
        specialized::subtract(&left, &right, &mut b);
        assert_eq!(a, b);

        bootstrap::negate(&left, &mut a);
        specialized::negate(&left, &mut b);
        assert_eq!(a, b);

        bootstrap::scale(&left, 0.3, &mut a);
        specialized::scale(&left, 0.3, &mut b);
        assert_eq!(a, b);

        bootstrap::divide(&left, 7.0, &mut a);
        specialized::divide(&left, 7.0, &mut b);
        assert_eq!(a, b);

        assert_eq!(
            bootstrap::dot(&left, &right).to_bits(),
            specialized::dot(&left, &right).to_bits()
        );
    }

    #[test]
    fn matrix_multiply_is_bit_identical() {
        // 5x7 * 7x3
        let left = random_f64(35);
        let right = random_f64(21);
        let mut a = vec![0.0; 15];
        let mut b = vec![f64::NAN; 15];
        bootstrap::matrix_multiply(&left, &right, 7, 3, &mut a);
        specialized::matrix_multiply(&left, &right, 7, 3, &mut b);
        let bits = |v: &[f64]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn matrix_multiply_small() {
        // [[1, 2], [3, 4]] * [[5], [6]]
        let mut out = [0; 2];
        bootstrap::matrix_multiply(&[1, 2, 3, 4], &[5, 6], 2, 1, &mut out);
        assert_eq!(out, [17, 39]);
        let mut out = [9; 2];
        specialized::matrix_multiply(&[1, 2, 3, 4], &[5, 6], 2, 1, &mut out);
        assert_eq!(out, [17, 39]);
    }

    #[test]
    fn entry_points_are_consistent() {
        let left = [1i16, -2, 3];
        let right = [4i16, 5, -6];
        let first = dot::<i16>()(&left, &right);
        let second = dot::<i16>()(&left, &right);
        assert_eq!(first, -24);
        assert_eq!(first, second);
        assert!(Registry::global().is_specialized::<i16>(Op::Dot));

        let mut a = [0i16; 3];
        let mut b = [0i16; 3];
        add::<i16>()(&left, &right, &mut a);
        add::<i16>()(&left, &right, &mut b);
        assert_eq!(a, [5, 3, -3]);
        assert_eq!(a, b);
    }
}
