//! Vectors, matrices and quaternions over a generic numeric element type.
//!
//! Every type in this crate is generic over an element type implementing [`Number`]: the signed
//! integer types, [`f32`], [`f64`], or a custom fixed-point or decimal type. On top of the basic
//! arithmetic, [`Matrix`] offers the dense linear algebra operations: determinant, (reduced) row
//! echelon form, inverse, adjoint and LU decomposition. [`Quaternion`] rotates 3D vectors.
//!
//! # Element Type Capabilities
//!
//! Not every element type can do everything. Operations that need a capability the element type
//! lacks fail with [`Error::UnsupportedOperationForType`]:
//!
//! - [`Vector::magnitude`], [`Vector::normalize`] and [`Quaternion::normalize`] need a square
//!   root ([`Number::sqrt`]). Normalizing an all-zero value succeeds without one.
//! - [`Matrix::echelon`], [`Matrix::reduced_echelon`], [`Matrix::inverse`] and
//!   [`Matrix::decompose_lu`] need exact division, which integral types lack
//!   ([`Number::INTEGRAL`]).
//!
//! [`Matrix::determinant`] works for integral types too, and fails with [`Error::Overflow`]
//! instead of silently wrapping.
//!
//! # Kernels
//!
//! The element-wise arithmetic, dot products and matrix products are dispatched through a
//! process-wide table of kernels, keyed by operation and element type. The first use of an
//! operation with a new element type runs a straightforward indexed kernel and installs an
//! iterator-based one for all later calls. Both produce identical results.
//!
//! # Parallelism
//!
//! Matrix operations whose result has more elements than [`config::parallel_threshold`] split
//! their output into row bands that are computed on the [`rayon`] thread pool by the
//! [`parallel`] runner.
//!
//! # Features
//!
//! - `approx` (default): implements the `AbsDiffEq`, `RelativeEq` and `UlpsEq` traits of the
//!   `approx` crate for [`Vector`], [`Matrix`] and [`Quaternion`].
//! - `nalgebra`: conversions to and from the `nalgebra` types, in the `interop` module.
//!
//! # Environment Variables
//!
//! - `SEVEN_PARALLEL_THRESHOLD`: element count above which matrix operations run in parallel
//!   (default: 49).
//! - `SEVEN_WORKERS`: number of units of work a parallel operation is split into (default: the
//!   number of rayon threads).
//! - `RUST_LOG`: log filter used by [`init_logger!`].
//!
//! # Examples
//!
//! ```
//! use approx::assert_abs_diff_eq;
//! use seven_algebra::*;
//!
//! let a = Matrix::from_rows(&[
//!     [2.0, -3.0, 1.0],
//!     [2.0, 0.0, -1.0],
//!     [1.0, 4.0, 5.0],
//! ])?;
//! assert_abs_diff_eq!(a.determinant()?, 49.0, epsilon = 1e-12);
//!
//! let product = a.try_mul(&a.inverse()?)?;
//! assert!(product.approx_eq(&Matrix::identity(3, 3)?, 1e-12));
//!
//! let cross = vec3(1, 0, 0).cross(&vec3(0, 1, 0))?;
//! assert_eq!(cross, vec3(0, 0, 1));
//! # Ok::<(), Error>(())
//! ```

use log::LevelFilter;

#[cfg(any(test, feature = "approx"))]
mod comparison;
pub mod config;
mod error;
#[cfg(feature = "nalgebra")]
pub mod interop;
mod kernel;
mod matrix;
pub mod parallel;
mod quaternion;
mod registry;
mod traits;
mod vector;

pub use error::*;
pub use matrix::*;
pub use quaternion::*;
pub use traits::*;
pub use vector::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate will log at *trace* level, otherwise
/// at *debug* level. This crate always logs at *debug* level, which includes a message whenever a
/// kernel is specialized for a new element type. `RUST_LOG` overrides both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_logger_twice() {
        crate::init_logger!();
        crate::init_logger!();
        log::debug!("logger initialized");
    }
}
