use std::fmt;

use crate::{
    config::parallel_threshold,
    error::{Error, Result, Shape},
    kernel::{self, MapKernel, ScalarKernel, ZipKernel},
    parallel,
    traits::Number,
    Vector,
};

mod algorithms;
mod ops;

pub use algorithms::{LuDecomposition, Parity};

/// A dense `rows x columns` matrix storing elements of type `T` in row-major order.
///
/// Both dimensions are at least 1 and fixed at construction. Elements can be modified in place,
/// but the shape can not.
///
/// # Construction
///
/// - [`Matrix::new`] (also available as [`Matrix::zero`]), [`Matrix::one`],
///   [`Matrix::identity`] and [`Matrix::uniform`] create matrices from a single value.
/// - [`Matrix::from_fn`] invokes a closure with the `(row, column)` of each element.
/// - [`Matrix::from_row_slice`] and [`Matrix::from_rows`] copy existing elements.
/// - [`Matrix::from_vector`] creates a single-column matrix from a [`Vector`].
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(row, column)`. The
/// checked alternatives are [`Matrix::get`], [`Matrix::get_mut`] and [`Matrix::element`].
///
/// ```
/// # use seven_algebra::*;
/// let mut m = Matrix::from_rows(&[
///     [1, 2, 3],
///     [4, 5, 6],
/// ])?;
/// assert_eq!(m[(1, 0)], 4);
/// m[(0, 2)] = 0;
/// assert_eq!(m.row(0), Some(&[1, 2, 0][..]));
/// assert_eq!(m.get(2, 0), None);
/// # Ok::<(), seven_algebra::Error>(())
/// ```
///
/// # Parallelism
///
/// Element-wise arithmetic and matrix products split their result across the [`parallel`] runner
/// once the result has more elements than [`config::parallel_threshold`]. Both paths produce
/// bit-identical results.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`config::parallel_threshold`]: crate::config::parallel_threshold
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: usize,
    columns: usize,
    elements: Vec<T>,
}

fn check_shape(rows: usize, columns: usize) -> Result<()> {
    if rows == 0 || columns == 0 {
        return Err(Error::InvalidDimensions { rows, columns });
    }
    Ok(())
}

impl<T> Matrix<T> {
    /// Creates a matrix where each element is initialized by invoking a closure with its
    /// `(row, column)` position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let m = Matrix::from_fn(2, 3, |r, c| r * 10 + c)?;
    /// assert_eq!(m, Matrix::from_rows(&[
    ///     [0, 1, 2],
    ///     [10, 11, 12],
    /// ])?);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn from_fn<F>(rows: usize, columns: usize, mut cb: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        check_shape(rows, columns)?;
        let elements = (0..rows * columns)
            .map(|i| cb(i / columns, i % columns))
            .collect();
        Ok(Self {
            rows,
            columns,
            elements,
        })
    }

    /// Creates a matrix that takes ownership of `elements`, which are given in row-major order.
    pub fn from_row_vec(rows: usize, columns: usize, elements: Vec<T>) -> Result<Self> {
        check_shape(rows, columns)?;
        if elements.len() != rows * columns {
            return Err(Error::mismatch(
                "matrix construction",
                Shape::new(rows, columns),
                Shape::column(elements.len()),
            ));
        }
        Ok(Self {
            rows,
            columns,
            elements,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.columns)
    }

    /// Returns whether this matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Returns the elements of this matrix in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    /// Converts this matrix into its row-major element storage.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns a reference to the element at the given position, or [`None`] if it is out of
    /// bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.elements.get(row * self.columns + column)
    }

    /// Returns a mutable reference to the element at the given position, or [`None`] if it is out
    /// of bounds.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.elements.get_mut(row * self.columns + column)
    }

    /// Returns the elements of row `row`, or [`None`] if it is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.elements[start..start + self.columns])
    }

    /// Applies a closure to each element, returning a new matrix of the same shape.
    pub fn map<F, U>(self, f: F) -> Matrix<U>
    where
        F: FnMut(T) -> U,
    {
        Matrix {
            rows: self.rows,
            columns: self.columns,
            elements: self.elements.into_iter().map(f).collect(),
        }
    }

    fn check_index(&self, row: usize, column: usize) -> Result<()> {
        if row >= self.rows {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        if column >= self.columns {
            return Err(Error::IndexOutOfRange {
                index: column,
                len: self.columns,
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::mismatch(operation, self.shape(), other.shape()));
        }
        Ok(())
    }

    /// Fails with [`Error::DimensionMismatch`] unless `self` is square.
    fn check_square(&self, operation: &'static str) -> Result<()> {
        if !self.is_square() {
            return Err(Error::mismatch(
                operation,
                self.shape(),
                Shape::new(self.columns, self.columns),
            ));
        }
        Ok(())
    }

    /// Returns the elements of `rows` consecutive rows, starting at `first_row`.
    fn band(&self, first_row: usize, rows: usize) -> &[T] {
        let start = first_row * self.columns;
        &self.elements[start..start + rows * self.columns]
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a matrix by copying `elements`, which are given in row-major order.
    ///
    /// Fails with [`Error::DimensionMismatch`] if `elements` doesn't hold exactly
    /// `rows * columns` values.
    pub fn from_row_slice(rows: usize, columns: usize, elements: &[T]) -> Result<Self> {
        Self::from_row_vec(rows, columns, elements.to_vec())
    }

    /// Creates a matrix by copying each of `rows`.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the rows don't all have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])?;
    /// assert_eq!((m.rows(), m.columns()), (3, 2));
    ///
    /// let ragged: &[&[i32]] = &[&[1, 2], &[3]];
    /// assert!(Matrix::from_rows(ragged).is_err());
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        check_shape(rows.len(), columns)?;

        let mut elements = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(Error::mismatch(
                    "matrix construction",
                    Shape::new(1, columns),
                    Shape::new(1, row.len()),
                ));
            }
            elements.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            elements,
        })
    }

    /// Creates a matrix with every element set to `value`.
    pub fn uniform(rows: usize, columns: usize, value: T) -> Result<Self> {
        check_shape(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            elements: vec![value; rows * columns],
        })
    }

    /// Creates a single-column matrix holding a copy of `vector`.
    pub fn from_vector(vector: &Vector<T>) -> Self {
        Self {
            rows: vector.dimensions(),
            columns: 1,
            elements: vector.as_slice().to_vec(),
        }
    }
}

impl<T: Number> Matrix<T> {
    /// Creates a matrix with every element set to zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::uniform(rows, columns, T::ZERO)
    }

    /// Creates a matrix with every element set to zero.
    ///
    /// This is the same as [`Matrix::new`].
    pub fn zero(rows: usize, columns: usize) -> Result<Self> {
        Self::new(rows, columns)
    }

    /// Creates a matrix with every element set to one.
    pub fn one(rows: usize, columns: usize) -> Result<Self> {
        Self::uniform(rows, columns, T::ONE)
    }

    /// Creates a matrix with ones on its main diagonal and zeroes everywhere else.
    ///
    /// The matrix does not have to be square.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// assert_eq!(Matrix::identity(2, 3)?, Matrix::from_rows(&[
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ])?);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn identity(rows: usize, columns: usize) -> Result<Self> {
        Self::from_fn(rows, columns, |r, c| if r == c { T::ONE } else { T::ZERO })
    }

    /// Returns the element at the given position.
    pub fn element(&self, row: usize, column: usize) -> Result<T> {
        self.check_index(row, column)?;
        Ok(self[(row, column)])
    }

    /// Returns the sum of the elements on the main diagonal.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the matrix is not square.
    pub fn trace(&self) -> Result<T> {
        self.check_square("trace")?;
        Ok((0..self.rows).fold(T::ZERO, |acc, i| acc + self[(i, i)]))
    }

    /// Compares `self` and `other` element-wise, allowing each pair to differ by up to
    /// `leniency`.
    ///
    /// Matrices of different shape are never equal.
    pub fn approx_eq(&self, other: &Self, leniency: T) -> bool {
        self.shape() == other.shape()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(&a, &b)| (a - b).abs() <= leniency)
    }

    /// Allocates a `rows x columns` result and fills it by calling `work` with row bands of the
    /// output, in parallel if requested.
    fn build<W>(rows: usize, columns: usize, in_parallel: bool, work: W) -> Self
    where
        W: Fn(usize, &mut [T]) + Sync,
    {
        let mut elements = vec![T::ZERO; rows * columns];
        if in_parallel {
            parallel::for_each_row_band(&mut elements, columns, work);
        } else {
            work(0, &mut elements);
        }
        Self {
            rows,
            columns,
            elements,
        }
    }

    fn should_parallelize(rows: usize, columns: usize) -> bool {
        rows * columns > parallel_threshold()
    }

    fn map_kernel(&self, kernel: MapKernel<T>) -> Self {
        let in_parallel = Self::should_parallelize(self.rows, self.columns);
        Self::build(self.rows, self.columns, in_parallel, |first_row, out| {
            let rows = out.len() / self.columns;
            kernel(self.band(first_row, rows), out);
        })
    }

    fn scalar_kernel(&self, scalar: T, kernel: ScalarKernel<T>) -> Self {
        let in_parallel = Self::should_parallelize(self.rows, self.columns);
        Self::build(self.rows, self.columns, in_parallel, |first_row, out| {
            let rows = out.len() / self.columns;
            kernel(self.band(first_row, rows), scalar, out);
        })
    }

    fn zip_kernel(&self, other: &Self, operation: &'static str, kernel: ZipKernel<T>) -> Result<Self> {
        self.check_same_shape(other, operation)?;
        let in_parallel = Self::should_parallelize(self.rows, self.columns);
        Ok(Self::build(self.rows, self.columns, in_parallel, |first_row, out| {
            let rows = out.len() / self.columns;
            kernel(self.band(first_row, rows), other.band(first_row, rows), out);
        }))
    }

    /// Negates every element.
    pub fn negate(&self) -> Self {
        self.map_kernel(kernel::negate())
    }

    /// Element-wise addition.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the matrices have different shapes.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_kernel(other, "matrix addition", kernel::add())
    }

    /// Element-wise subtraction.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the matrices have different shapes.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_kernel(other, "matrix subtraction", kernel::subtract())
    }

    /// Multiplies every element with `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        self.scalar_kernel(scalar, kernel::scale())
    }

    /// Divides every element by `scalar`.
    pub fn divide(&self, scalar: T) -> Self {
        self.scalar_kernel(scalar, kernel::divide())
    }

    fn check_product(&self, other: &Self) -> Result<()> {
        if self.columns != other.rows {
            return Err(Error::mismatch(
                "matrix multiplication",
                self.shape(),
                other.shape(),
            ));
        }
        Ok(())
    }

    fn product(&self, other: &Self, in_parallel: bool) -> Self {
        let multiply = kernel::matrix_multiply();
        let (inner, columns) = (self.columns, other.columns);
        Self::build(self.rows, columns, in_parallel, |first_row, out| {
            let rows = out.len() / columns;
            multiply(self.band(first_row, rows), &other.elements, inner, columns, out);
        })
    }

    /// Computes the matrix product `self * other`.
    ///
    /// Requires `self.columns() == other.rows()`. The result has `self.rows()` rows and
    /// `other.columns()` columns. Large products are computed in parallel.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let a = Matrix::from_rows(&[[1, 2], [3, 4]])?;
    /// let b = Matrix::from_rows(&[[5, 6, 7], [8, 9, 10]])?;
    /// assert_eq!(a.try_mul(&b)?, Matrix::from_rows(&[
    ///     [21, 24, 27],
    ///     [47, 54, 61],
    /// ])?);
    /// assert!(b.try_mul(&a).is_err());
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_product(other)?;
        let in_parallel = Self::should_parallelize(self.rows, other.columns);
        Ok(self.product(other, in_parallel))
    }

    /// Computes the matrix product `self * other` on the calling thread.
    pub fn multiply_sequential(&self, other: &Self) -> Result<Self> {
        self.check_product(other)?;
        Ok(self.product(other, false))
    }

    /// Computes the matrix product `self * other` using the [`parallel`] runner, regardless of
    /// its size.
    pub fn multiply_parallel(&self, other: &Self) -> Result<Self> {
        self.check_product(other)?;
        Ok(self.product(other, true))
    }

    /// Multiplies this matrix with a column vector.
    ///
    /// Requires `self.columns() == vector.dimensions()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]])?;
    /// assert_eq!(m.multiply_vector(&vec3(1, 0, -1))?, vec2(-2, -2));
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn multiply_vector(&self, vector: &Vector<T>) -> Result<Vector<T>> {
        if self.columns != vector.dimensions() {
            return Err(Error::mismatch(
                "matrix-vector multiplication",
                self.shape(),
                vector.shape(),
            ));
        }
        let mut out = vec![T::ZERO; self.rows];
        kernel::matrix_multiply()(&self.elements, vector.as_slice(), self.columns, 1, &mut out);
        Vector::from_vec(out)
    }

    /// Raises a square matrix to a non-negative integer power.
    ///
    /// A power of 0 results in the identity matrix. Otherwise, the matrix is multiplied with
    /// itself `power - 1` times.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let m = Matrix::from_rows(&[[1, 1], [0, 1]])?;
    /// assert_eq!(m.power(0)?, Matrix::identity(2, 2)?);
    /// assert_eq!(m.power(3)?, Matrix::from_rows(&[[1, 3], [0, 1]])?);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn power(&self, power: u32) -> Result<Self> {
        self.check_square("matrix power")?;
        if power == 0 {
            return Self::identity(self.rows, self.columns);
        }
        let mut result = self.clone();
        for _ in 1..power {
            result = result.try_mul(self)?;
        }
        Ok(result)
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in self.elements.chunks_exact(self.columns) {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.elements.chunks_exact(self.columns).enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (col, elem) in row.iter().enumerate() {
                if col != 0 {
                    write!(f, ", ")?;
                }
                elem.fmt(f)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<T: Clone> From<&Vector<T>> for Matrix<T> {
    fn from(vector: &Vector<T>) -> Self {
        Self::from_vector(vector)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3};

    use super::*;

    fn numbered(rows: usize, columns: usize) -> Matrix<f64> {
        Matrix::from_fn(rows, columns, |r, c| (r * columns + c) as f64 * 0.37 - 3.0).unwrap()
    }

    #[test]
    fn construction() {
        assert_eq!(
            Matrix::<i32>::new(0, 3),
            Err(Error::InvalidDimensions {
                rows: 0,
                columns: 3
            })
        );
        assert!(Matrix::<f32>::identity(3, 0).is_err());
        let empty: &[[i32; 2]] = &[];
        assert!(Matrix::from_rows(empty).is_err());
        assert!(Matrix::<i32>::from_rows::<[i32; 0]>(&[[]]).is_err());
        assert_eq!(Matrix::<i32>::one(1, 2).unwrap().as_slice(), &[1, 1]);
        assert_eq!(Matrix::uniform(2, 1, 7).unwrap().as_slice(), &[7, 7]);
        assert!(matches!(
            Matrix::from_row_slice(2, 2, &[1, 2, 3]),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn constructors_copy() {
        let mut data = vec![1, 2, 3, 4];
        let m = Matrix::from_row_slice(2, 2, &data).unwrap();
        data[0] = 100;
        assert_eq!(m[(0, 0)], 1);

        let mut v = vec3(1.0, 2.0, 3.0);
        let m = Matrix::from_vector(&v);
        v[1] = -1.0;
        assert_eq!((m.rows(), m.columns()), (3, 1));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn element_access() {
        let m = Matrix::from_rows(&[[1, 2], [3, 4], [5, 6]]).unwrap();
        assert_eq!(m.element(2, 1), Ok(6));
        assert_eq!(
            m.element(3, 0),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            m.element(0, 2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.row(1), Some(&[3, 4][..]));
        assert_eq!(m.row(3), None);
        assert!(!m.is_square());
    }

    #[test]
    fn trace() {
        let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!(m.trace(), Ok(5));
        assert!(Matrix::<i32>::new(2, 3).unwrap().trace().is_err());
    }

    #[test]
    fn elementwise() {
        let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
        let b = Matrix::from_rows(&[[4, 3], [2, 1]]).unwrap();
        assert_eq!(a.try_add(&b).unwrap(), Matrix::uniform(2, 2, 5).unwrap());
        assert_eq!(a.try_sub(&b).unwrap().as_slice(), &[-3, -1, 1, 3]);
        assert_eq!(a.scale(2).as_slice(), &[2, 4, 6, 8]);
        assert_eq!(a.divide(2).as_slice(), &[0, 1, 1, 2]);
        assert_eq!(a.negate().negate(), a);
        assert!(matches!(
            a.try_add(&Matrix::new(2, 3).unwrap()),
            Err(Error::DimensionMismatch {
                operation: "matrix addition",
                ..
            })
        ));
    }

    #[test]
    fn large_elementwise_matches_small_path() {
        // 10x10 exceeds the default threshold
        let a = numbered(10, 10);
        let b = numbered(10, 10).scale(-0.5);
        let sum = a.try_add(&b).unwrap();
        for (i, (&s, (&x, &y))) in sum
            .as_slice()
            .iter()
            .zip(a.as_slice().iter().zip(b.as_slice()))
            .enumerate()
        {
            assert_eq!(s.to_bits(), (x + y).to_bits(), "element {i}");
        }
    }

    #[test]
    fn multiply() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0], [2.0], [3.0]]).unwrap();
        assert_eq!(a.try_mul(&b).unwrap().as_slice(), &[14.0]);
        assert_eq!(b.try_mul(&a).unwrap().shape(), Shape::new(3, 3));
        assert!(a.try_mul(&a).is_err());
        assert!(a.multiply_sequential(&a).is_err());
        assert!(a.multiply_parallel(&a).is_err());
    }

    #[test]
    fn parallel_product_is_bit_identical() {
        let a = numbered(13, 9);
        let b = numbered(9, 11);
        let sequential = a.multiply_sequential(&b).unwrap();
        let parallel = a.multiply_parallel(&b).unwrap();
        assert_eq!(sequential.shape(), Shape::new(13, 11));
        let bits = |m: &Matrix<f64>| m.as_slice().iter().map(|f| f.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&sequential), bits(&parallel));
        assert_eq!(bits(&sequential), bits(&a.try_mul(&b).unwrap()));
    }

    #[test]
    fn multiply_vector() {
        let m = Matrix::from_rows(&[[0, -1], [1, 0]]).unwrap();
        assert_eq!(m.multiply_vector(&vec2(1, 0)).unwrap(), vec2(0, 1));
        assert!(m.multiply_vector(&vec3(1, 0, 0)).is_err());
    }

    #[test]
    fn power() {
        let id = Matrix::<f64>::identity(3, 3).unwrap();
        assert_eq!(id.power(5).unwrap(), id);

        let m = Matrix::from_rows(&[[2, 0], [0, 3]]).unwrap();
        assert_eq!(m.power(1).unwrap(), m);
        assert_eq!(m.power(4).unwrap().as_slice(), &[16, 0, 0, 81]);
        assert!(Matrix::<i32>::new(2, 3).unwrap().power(2).is_err());
    }

    #[test]
    fn leniency() {
        let a = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.01, 1.99]]).unwrap();
        assert!(a.approx_eq(&b, 0.05));
        assert!(!a.approx_eq(&b, 0.001));
        assert!(!a.approx_eq(&Matrix::from_rows(&[[1.0], [2.0]]).unwrap(), 1.0));
    }

    #[test]
    fn format() {
        let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!(format!("{m:?}"), "[[1, 2], [3, 4]]");
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");
    }
}
