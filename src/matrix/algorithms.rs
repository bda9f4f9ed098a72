//! Structural algorithms and Gaussian elimination.
//!
//! Elimination needs exact division, so [`Matrix::echelon`], [`Matrix::reduced_echelon`],
//! [`Matrix::inverse`] and [`Matrix::decompose_lu`] refuse to run on integral element types.
//! [`Matrix::determinant`] and [`Matrix::adjoint`] work for every element type: integral
//! determinants are computed with fraction-free elimination.

use crate::{
    error::{Error, Result},
    traits::Number,
};

use super::Matrix;

/// Sign of the row permutation found by [`Matrix::decompose_lu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// An even number of row swaps was performed.
    Even,
    /// An odd number of row swaps was performed.
    Odd,
}

impl Parity {
    fn flip(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }

    /// Returns `1` for [`Parity::Even`] and `-1` for [`Parity::Odd`].
    pub fn sign<T: Number>(self) -> T {
        match self {
            Parity::Even => T::ONE,
            Parity::Odd => -T::ONE,
        }
    }
}

/// Result of [`Matrix::decompose_lu`].
///
/// The decomposition satisfies `P * A == L * U`, where `A` is the decomposed matrix and `P` is the
/// [`permutation_matrix`][Self::permutation_matrix].
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition<T> {
    /// Lower triangular factor with a unit diagonal.
    pub lower: Matrix<T>,
    /// Upper triangular factor.
    pub upper: Matrix<T>,
    /// Row `i` of `P * A` is row `permutation[i]` of `A`.
    pub permutation: Vec<usize>,
    pub parity: Parity,
}

impl<T: Number> LuDecomposition<T> {
    /// Returns the permutation matrix `P`.
    pub fn permutation_matrix(&self) -> Matrix<T> {
        let n = self.permutation.len();
        let mut p = Matrix {
            rows: n,
            columns: n,
            elements: vec![T::ZERO; n * n],
        };
        for (row, &source) in self.permutation.iter().enumerate() {
            p[(row, source)] = T::ONE;
        }
        p
    }

    /// Computes the determinant of the decomposed matrix from the factors.
    pub fn determinant(&self) -> T {
        let n = self.upper.rows;
        (0..n).fold(self.parity.sign(), |acc, i| acc * self.upper[(i, i)])
    }
}

impl<T: Copy> Matrix<T> {
    /// Returns the transpose of this matrix, swapping rows and columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]])?;
    /// assert_eq!(m.transpose(), Matrix::from_rows(&[[1, 4], [2, 5], [3, 6]])?);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn transpose(&self) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len());
        for c in 0..self.columns {
            for r in 0..self.rows {
                elements.push(self[(r, c)]);
            }
        }
        Self {
            rows: self.columns,
            columns: self.rows,
            elements,
        }
    }

    /// Returns a copy of this matrix with row `row` and column `column` removed.
    ///
    /// The matrix needs at least 2 rows and 2 columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]])?;
    /// assert_eq!(m.minor(1, 1)?, Matrix::from_rows(&[[1, 3], [7, 9]])?);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn minor(&self, row: usize, column: usize) -> Result<Self> {
        if self.rows < 2 || self.columns < 2 {
            return Err(Error::InvalidDimensions {
                rows: self.rows - 1,
                columns: self.columns - 1,
            });
        }
        self.check_index(row, column)?;

        let elements = self
            .elements
            .chunks_exact(self.columns)
            .enumerate()
            .filter(|&(r, _)| r != row)
            .flat_map(|(_, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(|&(c, _)| c != column)
                    .map(|(_, &v)| v)
            })
            .collect();
        Ok(Self {
            rows: self.rows - 1,
            columns: self.columns - 1,
            elements,
        })
    }

    /// Joins `self` and `right` side by side.
    ///
    /// Both matrices need the same number of rows. The result has as many columns as both inputs
    /// combined.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let a = Matrix::from_rows(&[[1], [2]])?;
    /// let b = Matrix::from_rows(&[[3, 4], [5, 6]])?;
    /// assert_eq!(a.concatenate_row_wise(&b)?, Matrix::from_rows(&[[1, 3, 4], [2, 5, 6]])?);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn concatenate_row_wise(&self, right: &Self) -> Result<Self> {
        if self.rows != right.rows {
            return Err(Error::mismatch(
                "row-wise concatenation",
                self.shape(),
                right.shape(),
            ));
        }

        let columns = self.columns + right.columns;
        let mut elements = Vec::with_capacity(self.rows * columns);
        for (l, r) in self
            .elements
            .chunks_exact(self.columns)
            .zip(right.elements.chunks_exact(right.columns))
        {
            elements.extend_from_slice(l);
            elements.extend_from_slice(r);
        }
        Ok(Self {
            rows: self.rows,
            columns,
            elements,
        })
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        Ok(())
    }

    /// Swaps rows `a` and `b` in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_row(a)?;
        self.check_row(b)?;
        self.swap_rows_unchecked(a, b);
        Ok(())
    }

    /// Row swap for callers that have already validated both indices.
    fn swap_rows_unchecked(&mut self, a: usize, b: usize) {
        if a != b {
            for c in 0..self.columns {
                self.elements
                    .swap(a * self.columns + c, b * self.columns + c);
            }
        }
    }
}

impl<T: Number> Matrix<T> {
    /// Multiplies every element of `row` with `scalar`, in place.
    pub fn row_multiplication(&mut self, row: usize, scalar: T) -> Result<()> {
        self.check_row(row)?;
        let start = row * self.columns;
        for elem in &mut self.elements[start..start + self.columns] {
            *elem = *elem * scalar;
        }
        Ok(())
    }

    /// Adds `scalar` times row `source` to row `target`, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let mut m = Matrix::from_rows(&[[1, 2], [3, 4]])?;
    /// m.row_addition(1, 0, -3)?;
    /// assert_eq!(m, Matrix::from_rows(&[[1, 2], [0, -2]])?);
    /// assert!(m.row_addition(2, 0, 1).is_err());
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn row_addition(&mut self, target: usize, source: usize, scalar: T) -> Result<()> {
        self.check_row(target)?;
        self.check_row(source)?;
        for c in 0..self.columns {
            let add = self[(source, c)] * scalar;
            self[(target, c)] = self[(target, c)] + add;
        }
        Ok(())
    }

    /// Divides every element of `row` by `divisor`.
    ///
    /// Used instead of multiplying with the reciprocal so that the pivot itself becomes exactly 1.
    fn row_division(&mut self, row: usize, divisor: T) {
        let start = row * self.columns;
        for elem in &mut self.elements[start..start + self.columns] {
            *elem = *elem / divisor;
        }
    }

    fn check_exact_division(&self, operation: &'static str) -> Result<()> {
        if T::INTEGRAL {
            return Err(Error::unsupported::<T>(operation));
        }
        Ok(())
    }

    /// Returns the row in `from..rows` whose entry in `column` has the largest magnitude.
    fn largest_in_column(&self, column: usize, from: usize) -> usize {
        let mut best = from;
        for row in from + 1..self.rows {
            if self[(row, column)].abs() > self[(best, column)].abs() {
                best = row;
            }
        }
        best
    }

    /// Forward elimination pass shared by [`Matrix::echelon`] and [`Matrix::reduced_echelon`].
    ///
    /// Returns the `(row, column)` position of every pivot, in order.
    fn eliminate_forward(&mut self) -> Vec<(usize, usize)> {
        let mut pivots = Vec::new();
        let mut row = 0;
        for column in 0..self.columns {
            if row == self.rows {
                break;
            }

            if self[(row, column)] == T::ZERO {
                match (row + 1..self.rows).find(|&r| self[(r, column)] != T::ZERO) {
                    Some(other) => self.swap_rows_unchecked(row, other),
                    None => {
                        log::trace!("column {column} has no pivot");
                        continue;
                    }
                }
            }
            if self[(row, column)] != T::ONE {
                if let Some(other) = (row + 1..self.rows).find(|&r| self[(r, column)] == T::ONE) {
                    self.swap_rows_unchecked(row, other);
                }
            }

            let pivot = self[(row, column)];
            log::trace!("pivot {pivot:?} at ({row}, {column})");
            self.row_division(row, pivot);
            for below in row + 1..self.rows {
                let factor = self[(below, column)];
                if factor != T::ZERO {
                    self.eliminate(below, row, factor);
                }
            }

            pivots.push((row, column));
            row += 1;
        }
        pivots
    }

    /// Subtracts `factor` times row `source` from row `target`.
    fn eliminate(&mut self, target: usize, source: usize, factor: T) {
        for c in 0..self.columns {
            let sub = self[(source, c)] * factor;
            self[(target, c)] = self[(target, c)] - sub;
        }
    }

    /// Computes the row echelon form of this matrix.
    ///
    /// Each pivot is scaled to 1 and all entries below it are eliminated. Columns without a
    /// non-zero entry at or below the current row are skipped. No back-substitution is performed.
    ///
    /// Fails with [`Error::UnsupportedOperationForType`] for integral element types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let m = Matrix::from_rows(&[[2.0, 4.0], [1.0, 3.0]])?;
    /// assert_eq!(m.echelon()?, Matrix::from_rows(&[[1.0, 3.0], [0.0, 1.0]])?);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn echelon(&self) -> Result<Self> {
        self.check_exact_division("echelon")?;
        let mut m = self.clone();
        m.eliminate_forward();
        Ok(m)
    }

    /// Computes the reduced row echelon form of this matrix.
    ///
    /// This is [`Matrix::echelon`] followed by back-substitution, which leaves every pivot as the
    /// only non-zero entry of its column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let m = Matrix::from_rows(&[[2.0, 4.0, 6.0], [1.0, 3.0, 5.0]])?;
    /// assert_eq!(m.reduced_echelon()?, Matrix::from_rows(&[[1.0, 0.0, -1.0], [0.0, 1.0, 2.0]])?);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn reduced_echelon(&self) -> Result<Self> {
        self.check_exact_division("reduced echelon")?;
        let mut m = self.clone();
        let pivots = m.eliminate_forward();
        for &(row, column) in pivots.iter().rev() {
            for above in 0..row {
                let factor = m[(above, column)];
                if factor != T::ZERO {
                    m.eliminate(above, row, factor);
                }
            }
        }
        Ok(m)
    }

    /// Computes the determinant of a square matrix.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the matrix is not square.
    ///
    /// Integral element types use fraction-free elimination, which fails with
    /// [`Error::Overflow`] if an intermediate value does not fit in `T`. Intermediate products
    /// grow up to `pivot * element`, so narrow types can fail even when the determinant itself is
    /// representable: `[[100, 100], [1, 2]]` has a determinant of 100 but overflows as `i8`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let m = Matrix::from_rows(&[[4.0, 3.0], [6.0, 3.0]])?;
    /// assert_eq!(m.determinant()?, -6.0);
    ///
    /// let m = Matrix::from_rows(&[[2, 0, 1], [1, 3, 2], [1, 1, 1]])?;
    /// assert_eq!(m.determinant()?, 1);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn determinant(&self) -> Result<T> {
        self.check_square("determinant")?;
        if T::INTEGRAL {
            self.determinant_fraction_free()
        } else {
            Ok(self.determinant_by_elimination())
        }
    }

    fn determinant_by_elimination(&self) -> T {
        let n = self.rows;
        let mut m = self.clone();
        let mut det = T::ONE;
        for k in 0..n {
            let pivot_row = m.largest_in_column(k, k);
            if m[(pivot_row, k)] == T::ZERO {
                return T::ZERO;
            }
            if pivot_row != k {
                m.swap_rows_unchecked(k, pivot_row);
                det = -det;
            }

            let pivot = m[(k, k)];
            det = det * pivot;
            for i in k + 1..n {
                let factor = m[(i, k)] / pivot;
                for j in k..n {
                    let sub = factor * m[(k, j)];
                    m[(i, j)] = m[(i, j)] - sub;
                }
            }
        }
        det
    }

    /// Bareiss elimination: every intermediate value is itself a minor of the input, so all
    /// divisions are exact.
    ///
    /// The product `m[i][j] * pivot` is formed before the division, so it can overflow `T` even
    /// when every minor, and the determinant, fits.
    fn determinant_fraction_free(&self) -> Result<T> {
        const OPERATION: &str = "determinant";
        let overflow = || Error::Overflow {
            operation: OPERATION,
        };

        let n = self.rows;
        let mut m = self.clone();
        let mut negative = false;
        let mut previous = T::ONE;
        for k in 0..n - 1 {
            if m[(k, k)] == T::ZERO {
                match (k + 1..n).find(|&r| m[(r, k)] != T::ZERO) {
                    Some(other) => {
                        m.swap_rows_unchecked(k, other);
                        negative = !negative;
                    }
                    None => return Ok(T::ZERO),
                }
            }

            let pivot = m[(k, k)];
            for i in k + 1..n {
                for j in k + 1..n {
                    let a = m[(i, j)].checked_mul(pivot).ok_or_else(overflow)?;
                    let b = m[(i, k)].checked_mul(m[(k, j)]).ok_or_else(overflow)?;
                    m[(i, j)] = a.checked_sub(b).ok_or_else(overflow)? / previous;
                }
            }
            previous = pivot;
        }

        let det = m[(n - 1, n - 1)];
        if negative {
            T::ZERO.checked_sub(det).ok_or_else(overflow)
        } else {
            Ok(det)
        }
    }

    /// Computes the adjoint (adjugate) of a square matrix: the transpose of its cofactor matrix.
    ///
    /// The adjoint of a 1x1 matrix is `[[1]]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]])?;
    /// assert_eq!(m.adjoint()?, Matrix::from_rows(&[[4, -2], [-3, 1]])?);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn adjoint(&self) -> Result<Self> {
        self.check_square("adjoint")?;
        let n = self.rows;
        if n == 1 {
            return Self::one(1, 1);
        }

        let mut adjoint = Self::new(n, n)?;
        for i in 0..n {
            for j in 0..n {
                let minor = self.minor(i, j)?.determinant()?;
                let cofactor = if (i + j) % 2 == 0 { minor } else { -minor };
                adjoint[(j, i)] = cofactor;
            }
        }
        Ok(adjoint)
    }

    /// Computes the inverse of a square matrix with Gauss-Jordan elimination.
    ///
    /// Fails with [`Error::SingularMatrix`] if the determinant is zero, with
    /// [`Error::DimensionMismatch`] if the matrix is not square and with
    /// [`Error::UnsupportedOperationForType`] for integral element types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]])?;
    /// let inv = m.inverse()?;
    /// assert!(inv.approx_eq(&Matrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]])?, 1e-12));
    ///
    /// let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
    /// assert_eq!(singular.inverse(), Err(Error::SingularMatrix));
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        self.check_exact_division("inverse")?;
        self.check_square("inverse")?;
        if self.determinant()? == T::ZERO {
            return Err(Error::SingularMatrix);
        }

        let n = self.rows;
        let mut m = self.clone();
        let mut inverse = Self::identity(n, n)?;
        for k in 0..n {
            let pivot_row = m.largest_in_column(k, k);
            if m[(pivot_row, k)] == T::ZERO {
                return Err(Error::SingularMatrix);
            }
            if pivot_row != k {
                m.swap_rows_unchecked(k, pivot_row);
                inverse.swap_rows_unchecked(k, pivot_row);
            }

            let pivot = m[(k, k)];
            m.row_division(k, pivot);
            inverse.row_division(k, pivot);
            for i in (0..n).filter(|&i| i != k) {
                let factor = m[(i, k)];
                if factor != T::ZERO {
                    m.eliminate(i, k, factor);
                    inverse.eliminate(i, k, factor);
                }
            }
        }
        Ok(inverse)
    }

    /// Computes the LU decomposition of a square matrix with partial pivoting.
    ///
    /// At every step, the row with the largest-magnitude entry in the pivot column is moved into
    /// place. Fails with [`Error::SingularMatrix`] if a pivot column is zero at and below the
    /// diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    /// let lu = a.decompose_lu()?;
    /// assert_eq!(lu.permutation, [1, 0]);
    /// assert_eq!(lu.parity, Parity::Odd);
    /// let pa = lu.permutation_matrix().try_mul(&a)?;
    /// assert!(lu.lower.try_mul(&lu.upper)?.approx_eq(&pa, 1e-12));
    /// assert_abs_diff_eq!(lu.determinant(), -2.0, epsilon = 1e-12);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn decompose_lu(&self) -> Result<LuDecomposition<T>> {
        self.check_exact_division("LU decomposition")?;
        self.check_square("LU decomposition")?;

        let n = self.rows;
        let mut lower = Self::identity(n, n)?;
        let mut upper = self.clone();
        let mut permutation = (0..n).collect::<Vec<_>>();
        let mut parity = Parity::Even;

        for k in 0..n {
            let pivot_row = upper.largest_in_column(k, k);
            if upper[(pivot_row, k)] == T::ZERO {
                return Err(Error::SingularMatrix);
            }
            if pivot_row != k {
                upper.swap_rows_unchecked(k, pivot_row);
                for j in 0..k {
                    lower.elements.swap(k * n + j, pivot_row * n + j);
                }
                permutation.swap(k, pivot_row);
                parity = parity.flip();
            }

            let pivot = upper[(k, k)];
            for i in k + 1..n {
                let factor = upper[(i, k)] / pivot;
                lower[(i, k)] = factor;
                upper[(i, k)] = T::ZERO;
                for j in k + 1..n {
                    let sub = factor * upper[(k, j)];
                    upper[(i, j)] = upper[(i, j)] - sub;
                }
            }
        }

        Ok(LuDecomposition {
            lower,
            upper,
            permutation,
            parity,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn m<const C: usize>(rows: &[[f64; C]]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn transpose_twice() {
        let a = m(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(a.transpose().shape(), crate::Shape::new(3, 2));
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn minor() {
        let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        assert_eq!(a.minor(0, 2).unwrap(), Matrix::from_rows(&[[4, 5], [7, 8]]).unwrap());
        assert_eq!(
            a.minor(3, 0),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            Matrix::from_rows(&[[1, 2, 3]]).unwrap().minor(0, 0),
            Err(Error::InvalidDimensions {
                rows: 0,
                columns: 2
            })
        );
    }

    #[test]
    fn concatenate() {
        let a = Matrix::from_rows(&[[1, 2]]).unwrap();
        let b = Matrix::from_rows(&[[3], [4]]).unwrap();
        assert!(matches!(
            a.concatenate_row_wise(&b),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn row_primitives() {
        let mut a = Matrix::from_rows(&[[1, 2], [3, 4], [5, 6]]).unwrap();
        a.swap_rows(0, 2).unwrap();
        assert_eq!(a.as_slice(), &[5, 6, 3, 4, 1, 2]);
        a.row_multiplication(1, -2).unwrap();
        assert_eq!(a.as_slice(), &[5, 6, -6, -8, 1, 2]);
        a.row_addition(0, 2, -5).unwrap();
        assert_eq!(a.as_slice(), &[0, -4, -6, -8, 1, 2]);
        a.swap_rows(1, 1).unwrap();
        assert_eq!(a.as_slice(), &[0, -4, -6, -8, 1, 2]);

        assert_eq!(
            a.swap_rows(0, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(a.row_multiplication(5, 1).is_err());
        assert!(a.row_addition(0, 9, 1).is_err());
    }

    #[test]
    fn echelon_skips_rank_deficient_columns() {
        let a = m(&[[0.0, 2.0, 4.0], [0.0, 1.0, 1.0], [0.0, 3.0, 3.0]]);
        let e = a.echelon().unwrap();
        assert_eq!(e.row(0).unwrap(), &[0.0, 1.0, 1.0]);
        assert_eq!(e.row(1).unwrap(), &[0.0, 0.0, 1.0]);
        assert_eq!(e.row(2).unwrap(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn echelon_prefers_unit_pivot() {
        let a = m(&[[3.0, 6.0], [1.0, 5.0]]);
        let e = a.echelon().unwrap();
        assert_eq!(e, m(&[[1.0, 5.0], [0.0, 1.0]]));
    }

    #[test]
    fn elimination_rejects_integers() {
        let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
        let unsupported = |r: Result<_>| {
            matches!(
                r,
                Err(Error::UnsupportedOperationForType {
                    type_name: "i32",
                    ..
                })
            )
        };
        assert!(unsupported(a.echelon().map(drop)));
        assert!(unsupported(a.reduced_echelon().map(drop)));
        assert!(unsupported(a.inverse().map(drop)));
        assert!(unsupported(a.decompose_lu().map(drop)));
        assert_eq!(a.determinant(), Ok(-2));
    }

    #[test]
    fn reduced_echelon_of_augmented_is_inverse() {
        let a = m(&[[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
        let id = Matrix::identity(3, 3).unwrap();
        let rref = a.concatenate_row_wise(&id).unwrap().reduced_echelon().unwrap();
        let right = Matrix::from_fn(3, 3, |r, c| rref[(r, c + 3)]).unwrap();
        let left = Matrix::from_fn(3, 3, |r, c| rref[(r, c)]).unwrap();
        assert_abs_diff_eq!(left, id, epsilon = 1e-12);
        assert_abs_diff_eq!(right, a.inverse().unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn determinant_properties() {
        let a = m(&[[2.0, -3.0, 1.0], [2.0, 0.0, -1.0], [1.0, 4.0, 5.0]]);
        assert_abs_diff_eq!(a.determinant().unwrap(), 49.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.transpose().determinant().unwrap(), 49.0, epsilon = 1e-12);

        let mut swapped = a.clone();
        swapped.swap_rows(0, 2).unwrap();
        assert_abs_diff_eq!(swapped.determinant().unwrap(), -49.0, epsilon = 1e-12);

        for n in 1..6 {
            assert_eq!(Matrix::<f64>::identity(n, n).unwrap().determinant(), Ok(1.0));
            assert_eq!(Matrix::<i64>::identity(n, n).unwrap().determinant(), Ok(1));
        }
        assert_eq!(m(&[[1.0, 2.0], [2.0, 4.0]]).determinant(), Ok(0.0));
        assert!(matches!(
            Matrix::<f64>::new(2, 3).unwrap().determinant(),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn fraction_free_determinant() {
        let a = Matrix::from_rows(&[[2, -3, 1], [2, 0, -1], [1, 4, 5]]).unwrap();
        assert_eq!(a.determinant(), Ok(49));

        let swapped = Matrix::from_rows(&[[0, 1, 2], [1, 0, 3], [4, -3, 8]]).unwrap();
        assert_eq!(swapped.determinant(), Ok(-2));

        let singular = Matrix::from_rows(&[[0, 1], [0, 2]]).unwrap();
        assert_eq!(singular.determinant(), Ok(0));

        let big = Matrix::<i8>::from_rows(&[[100, 100], [-100, 100]]).unwrap();
        assert_eq!(
            big.determinant(),
            Err(Error::Overflow {
                operation: "determinant"
            })
        );

        // the determinant fits in `i8`, but `2 * 100` does not
        let narrow = Matrix::<i8>::from_rows(&[[100, 100], [1, 2]]).unwrap();
        assert_eq!(
            narrow.determinant(),
            Err(Error::Overflow {
                operation: "determinant"
            })
        );
        assert_eq!(narrow.map(i16::from).determinant(), Ok(100));
    }

    #[test]
    fn adjoint() {
        assert_eq!(
            Matrix::from_rows(&[[7]]).unwrap().adjoint().unwrap(),
            Matrix::from_rows(&[[1]]).unwrap()
        );

        // A * adj(A) == det(A) * I
        let a = Matrix::from_rows(&[[2, -3, 1], [2, 0, -1], [1, 4, 5]]).unwrap();
        let product = a.try_mul(&a.adjoint().unwrap()).unwrap();
        assert_eq!(product, Matrix::identity(3, 3).unwrap().scale(49));
        assert!(Matrix::<i32>::new(2, 1).unwrap().adjoint().is_err());
    }

    #[test]
    fn inverse() {
        let a = m(&[[4.0, 3.0], [6.0, 3.0]]);
        let inv = a.inverse().unwrap();
        assert_abs_diff_eq!(inv, m(&[[-0.5, 0.5], [1.0, -2.0 / 3.0]]), epsilon = 1e-12);
        let id = Matrix::identity(2, 2).unwrap();
        assert_abs_diff_eq!(a.try_mul(&inv).unwrap(), id, epsilon = 1e-12);

        assert_eq!(
            m(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]).inverse(),
            Err(Error::SingularMatrix)
        );
        assert!(matches!(
            Matrix::<f32>::new(1, 2).unwrap().inverse(),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn lu() {
        let a = m(&[[0.0, 2.0, 1.0], [4.0, -1.0, 3.0], [2.0, 5.0, -2.0]]);
        let lu = a.decompose_lu().unwrap();
        let n = 3;
        for i in 0..n {
            assert_eq!(lu.lower[(i, i)], 1.0);
            for j in i + 1..n {
                assert_eq!(lu.lower[(i, j)], 0.0);
                assert_eq!(lu.upper[(j, i)], 0.0);
            }
        }
        let pa = lu.permutation_matrix().try_mul(&a).unwrap();
        assert_abs_diff_eq!(lu.lower.try_mul(&lu.upper).unwrap(), pa, epsilon = 1e-12);
        assert_abs_diff_eq!(lu.determinant(), a.determinant().unwrap(), epsilon = 1e-12);

        assert_eq!(
            m(&[[1.0, 2.0], [0.0, 0.0]]).decompose_lu(),
            Err(Error::SingularMatrix)
        );
    }
}
