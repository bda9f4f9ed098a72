//! Algebraic identities checked on random matrices, and cross-checked against `nalgebra`.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::DMatrix;
use seven_algebra::*;

const ITERATIONS: usize = 50;

/// A random `n x n` matrix with a dominant diagonal, so that it is well-conditioned.
fn well_conditioned(rng: &mut fastrand::Rng, n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |r, c| {
        let noise = rng.f64() * 2.0 - 1.0;
        if r == c {
            noise + n as f64 + 1.0
        } else {
            noise
        }
    })
    .unwrap()
}

fn random_ints(rng: &mut fastrand::Rng, rows: usize, columns: usize) -> Matrix<i64> {
    Matrix::from_fn(rows, columns, |_, _| rng.i64(-9..=9)).unwrap()
}

fn to_nalgebra(m: &Matrix<f64>) -> DMatrix<f64> {
    DMatrix::from_row_slice(m.rows(), m.columns(), m.as_slice())
}

#[test]
fn inverse_times_matrix_is_identity() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..=6);
        let a = well_conditioned(&mut rng, n);
        let inverse = a.inverse()?;
        let id = Matrix::identity(n, n)?;
        assert_abs_diff_eq!(a.try_mul(&inverse)?, id, epsilon = 1e-9);
        assert_abs_diff_eq!(inverse.try_mul(&a)?, id, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn determinant_is_multiplicative() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..=5);
        let a = well_conditioned(&mut rng, n);
        let b = well_conditioned(&mut rng, n);
        let product = a.try_mul(&b)?.determinant()?;
        assert_relative_eq!(product, a.determinant()? * b.determinant()?, max_relative = 1e-9);
        assert_relative_eq!(a.transpose().determinant()?, a.determinant()?, max_relative = 1e-9);
    }
    Ok(())
}

#[test]
fn fraction_free_determinant_matches_float_determinant() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..=5);
        let ints = random_ints(&mut rng, n, n);
        let floats = ints.clone().map(|v| v as f64);
        let exact = ints.determinant()? as f64;
        assert_relative_eq!(floats.determinant()?, exact, epsilon = 1e-6, max_relative = 1e-9);
    }
    Ok(())
}

#[test]
fn adjoint_scales_to_determinant() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..ITERATIONS {
        let n = rng.usize(2..=4);
        let a = random_ints(&mut rng, n, n);
        let det = a.determinant()?;
        let expected = Matrix::identity(n, n)?.scale(det);
        assert_eq!(a.try_mul(&a.adjoint()?)?, expected);
        assert_eq!(a.adjoint()?.try_mul(&a)?, expected);
    }
    Ok(())
}

#[test]
fn lu_reconstructs_permuted_matrix() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..=6);
        // no diagonal dominance, so that pivoting actually happens
        let a = Matrix::from_fn(n, n, |_, _| rng.f64() * 2.0 - 1.0)?;
        let lu = a.decompose_lu()?;
        for r in 0..n {
            assert_eq!(lu.lower[(r, r)], 1.0);
            for c in r + 1..n {
                assert_eq!(lu.lower[(r, c)], 0.0);
                assert_eq!(lu.upper[(c, r)], 0.0);
            }
        }
        let lhs = lu.permutation_matrix().try_mul(&a)?;
        let rhs = lu.lower.try_mul(&lu.upper)?;
        assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-12);
        assert_relative_eq!(lu.determinant(), a.determinant()?, max_relative = 1e-9);
    }
    Ok(())
}

#[test]
fn reduced_echelon_of_augmented_matrix_contains_inverse() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..=5);
        let a = well_conditioned(&mut rng, n);
        let rref = a.concatenate_row_wise(&Matrix::identity(n, n)?)?.reduced_echelon()?;
        let right = Matrix::from_fn(n, n, |r, c| rref[(r, n + c)])?;
        assert_abs_diff_eq!(right, a.inverse()?, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn echelon_form_is_upper_triangular_with_unit_pivots() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(9);
    for _ in 0..ITERATIONS {
        let (rows, columns) = (rng.usize(1..=5), rng.usize(1..=5));
        let a = random_ints(&mut rng, rows, columns).map(|v| v as f64);
        let e = a.echelon()?;

        let mut last_pivot = None;
        for r in 0..rows {
            let row = e.row(r).unwrap();
            match row.iter().position(|&v| v != 0.0) {
                Some(c) => {
                    assert_eq!(row[c], 1.0, "pivot of row {r} in {e:?}");
                    assert!(last_pivot.map_or(true, |last| c > last), "{e:?}");
                    last_pivot = Some(c);
                }
                // zero rows are at the bottom
                None => last_pivot = Some(usize::MAX - 1),
            }
        }
    }
    Ok(())
}

#[test]
fn matches_nalgebra() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(1234);
    for _ in 0..ITERATIONS {
        let n = rng.usize(1..=6);
        let a = well_conditioned(&mut rng, n);
        let b = well_conditioned(&mut rng, n);
        let (na, nb) = (to_nalgebra(&a), to_nalgebra(&b));

        assert_relative_eq!(a.determinant()?, na.determinant(), max_relative = 1e-9);
        let inverse = na.clone().try_inverse().expect("well-conditioned matrix");
        assert_relative_eq!(to_nalgebra(&a.inverse()?), inverse, epsilon = 1e-9);
        assert_relative_eq!(to_nalgebra(&a.try_mul(&b)?), &na * &nb, epsilon = 1e-9);
        assert_relative_eq!(to_nalgebra(&a.transpose()), na.transpose());
    }
    Ok(())
}

#[test]
fn parallel_and_sequential_products_are_bit_identical() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..10 {
        let (rows, inner, columns) = (rng.usize(1..=40), rng.usize(1..=40), rng.usize(1..=40));
        let a = Matrix::from_fn(rows, inner, |_, _| rng.f64() - 0.5)?;
        let b = Matrix::from_fn(inner, columns, |_, _| rng.f64() - 0.5)?;
        let sequential = a.multiply_sequential(&b)?;
        let parallel = a.multiply_parallel(&b)?;
        let bits = |m: &Matrix<f64>| m.as_slice().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&sequential), bits(&parallel));
        assert_eq!(bits(&sequential), bits(&a.try_mul(&b)?));
    }
    Ok(())
}
