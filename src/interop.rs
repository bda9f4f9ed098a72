//! Conversions to and from [`nalgebra`] types.
//!
//! Requires the `nalgebra` feature. Conversions copy the elements; the dynamically sized
//! `nalgebra` types are used since shapes in this crate are only known at runtime.

use nalgebra::{DMatrix, DVector};

use crate::{error::Error, Matrix, Number, Quaternion, Vector};

impl<T: Number> From<&Matrix<T>> for DMatrix<T> {
    fn from(matrix: &Matrix<T>) -> Self {
        DMatrix::from_row_slice(matrix.rows(), matrix.columns(), matrix.as_slice())
    }
}

/// Fails with [`Error::InvalidDimensions`] if the `nalgebra` matrix is empty.
impl<T: Number> TryFrom<&DMatrix<T>> for Matrix<T> {
    type Error = Error;

    fn try_from(matrix: &DMatrix<T>) -> Result<Self, Self::Error> {
        Matrix::from_fn(matrix.nrows(), matrix.ncols(), |r, c| matrix[(r, c)])
    }
}

impl<T: Number> From<&Vector<T>> for DVector<T> {
    fn from(vector: &Vector<T>) -> Self {
        DVector::from_column_slice(vector.as_slice())
    }
}

/// Fails with [`Error::InvalidDimensions`] if the `nalgebra` vector is empty.
impl<T: Number> TryFrom<&DVector<T>> for Vector<T> {
    type Error = Error;

    fn try_from(vector: &DVector<T>) -> Result<Self, Self::Error> {
        Vector::from_slice(vector.as_slice())
    }
}

impl<T: Number> From<Quaternion<T>> for nalgebra::Quaternion<T> {
    fn from(q: Quaternion<T>) -> Self {
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl<T: Number> From<nalgebra::Quaternion<T>> for Quaternion<T> {
    fn from(q: nalgebra::Quaternion<T>) -> Self {
        // `coords` is stored as `[i, j, k, w]`
        Quaternion::new(q.coords[0], q.coords[1], q.coords[2], q.coords[3])
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{DMatrix, DVector};

    use crate::{vec3, Matrix, Quaternion, Vector};

    #[test]
    fn matrix_round_trip() {
        let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        let n = DMatrix::from(&m);
        assert_eq!((n.nrows(), n.ncols()), (2, 3));
        assert_eq!(n[(1, 0)], 4);
        assert_eq!(Matrix::try_from(&n).unwrap(), m);

        let empty = DMatrix::<i32>::zeros(0, 3);
        assert!(Matrix::try_from(&empty).is_err());
    }

    #[test]
    fn vector_round_trip() {
        let v = vec3(1.0, 2.0, 3.0);
        let n = DVector::from(&v);
        assert_eq!(n.len(), 3);
        assert_eq!(Vector::try_from(&n).unwrap(), v);
        assert!(Vector::try_from(&DVector::<f64>::zeros(0)).is_err());
    }

    #[test]
    fn quaternion_layout() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let n = nalgebra::Quaternion::from(q);
        assert_eq!((n.w, n.i, n.j, n.k), (4.0, 1.0, 2.0, 3.0));
        assert_eq!(Quaternion::from(n), q);
    }
}
