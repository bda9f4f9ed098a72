//! Error type shared by every fallible operation.

use std::fmt;

/// The shape of a [`Matrix`] or [`Vector`], used in error messages.
///
/// Vectors are reported as column matrices (`dimensions x 1`).
///
/// [`Matrix`]: crate::Matrix
/// [`Vector`]: crate::Vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// The shape of a vector with `dimensions` components.
    pub const fn column(dimensions: usize) -> Self {
        Self::new(dimensions, 1)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Errors returned by vector, matrix and quaternion operations.
///
/// Every error is raised synchronously at the point of detection. All operations are pure, so
/// retrying with the same inputs will fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A vector or matrix was constructed with zero rows, columns or components.
    #[error("invalid dimensions {rows}x{columns}; every dimension must be at least 1")]
    InvalidDimensions { rows: usize, columns: usize },

    /// The operands of an operation have incompatible shapes.
    #[error("dimension mismatch in {operation}: {left} vs {right}")]
    DimensionMismatch {
        operation: &'static str,
        left: Shape,
        right: Shape,
    },

    /// A positional or named accessor was used with an index that is out of bounds.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The element type lacks a capability the operation needs.
    #[error("operation `{operation}` is not supported for element type `{type_name}`")]
    UnsupportedOperationForType {
        operation: &'static str,
        type_name: &'static str,
    },

    /// The matrix has a zero determinant, so it can't be inverted or decomposed.
    #[error("matrix is singular")]
    SingularMatrix,

    /// An argument is outside of its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Checked integral arithmetic overflowed.
    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

/// Result type alias with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn mismatch(operation: &'static str, left: Shape, right: Shape) -> Self {
        Self::DimensionMismatch {
            operation,
            left,
            right,
        }
    }

    pub(crate) fn unsupported<T>(operation: &'static str) -> Self {
        Self::UnsupportedOperationForType {
            operation,
            type_name: crate::traits::type_name::<T>(),
        }
    }
}

/// Unwraps the result of an operator impl, panicking with the error's message.
#[track_caller]
pub(crate) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

/// Checks that `blend` lies in `[0, 1]`.
pub(crate) fn check_blend<T: crate::Number>(blend: T) -> Result<()> {
    // also rejects NaN
    if !(T::ZERO <= blend && blend <= T::ONE) {
        return Err(Error::InvalidArgument(format!(
            "blend ratio {blend:?} is outside of [0, 1]"
        )));
    }
    Ok(())
}
