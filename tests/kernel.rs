/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Properties that cut across the kernel crates.

#[macro_use]
extern crate mathkern_assert_close;

use ::mathkern::algebra::{self, DEFAULT_EPSILON as EPS};
use ::mathkern::linalg::{self, spectral};
use ::mathkern::matrix::{arith, matrices_equal, NO_ROUNDING};
use ::mathkern::Matrix;
use ::rand::{Rng, SeedableRng, rngs::StdRng};

fn well_conditioned(n: usize, rng: &mut StdRng) -> Matrix {
    let mut m = Matrix::random_nonzero(n, n, rng);
    for i in 0..n {
        m[(i, i)] += n as f64;
    }
    m
}

fn poly_from_roots(roots: &[f64]) -> Vec<f64> {
    let mut c = vec![1.0];
    for &r in roots {
        let mut next = c.clone();
        next.push(0.0);
        for (i, &x) in c.iter().enumerate() {
            next[i + 1] -= r * x;
        }
        c = next;
    }
    c
}

fn sorted(mut xs: Vec<f64>) -> Vec<f64> {
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    xs
}

#[test]
fn low_degree_roots_match_their_factors() {
    let mut rng = StdRng::seed_from_u64(1);
    for deg in 1..=4 {
        for _ in 0..20 {
            // well separated, so that the comparison is meaningful
            let mut expected: Vec<f64> = (0..deg)
                .map(|i| 3.0 * i as f64 + rng.gen_range(-1.0..1.0))
                .collect();
            expected = sorted(expected);
            let scale = rng.gen_range(0.5..4.0);
            let coeffs: Vec<f64> = poly_from_roots(&expected).iter().map(|c| scale * c).collect();

            let actual = sorted(algebra::roots(&coeffs, EPS));
            assert_close!(abs=1e-9, actual, expected, "degree {}: {:?}", deg, coeffs);
        }
    }
}

#[test]
fn quintic_roots_have_small_residuals() {
    let _ = ::env_logger::try_init();
    let expected = [-2.5, -1.0, 0.5, 2.0, 4.0];
    let coeffs: Vec<f64> = poly_from_roots(&expected).iter().map(|c| 3.0 * c).collect();

    let found = algebra::roots(&coeffs, EPS);
    assert_eq!(found.len(), 5);
    for &x in &found {
        assert!(algebra::evaluate(&coeffs, x).abs() < 1e-8, "p({}) too large", x);
    }
    assert_close!(abs=1e-9, sorted(found), expected.to_vec());
}

#[test]
fn degree_falls_through_leading_zeros() {
    assert_eq!(algebra::roots(&[0.0, 0.0, 1.0], EPS), Vec::<f64>::new());
    assert_eq!(algebra::roots(&[0.0, 2.0, -4.0], EPS), vec![2.0]);
    assert_eq!(algebra::quadratic_roots(1.0, -3.0, 2.0, EPS), vec![2.0, 1.0]);
    assert_eq!(algebra::linear_roots(2.0, -4.0, EPS), vec![2.0]);
}

#[test]
fn quintic_with_triple_root() {
    // (x - 2)³ (x + 1) (x - 0.5)
    let p = poly_from_roots(&[2.0, 2.0, 2.0, -1.0, 0.5]);
    assert_close!(abs=1e-6, sorted(algebra::roots(&p, EPS)), vec![-1.0, 0.5, 2.0, 2.0, 2.0]);
}

#[test]
fn known_lu() {
    let a = Matrix::from(&[[4.0, 3.0], [6.0, 3.0]][..]);
    let lu = linalg::decompose_lu(&a).unwrap();
    assert_eq!(lu.lower, Matrix::from(&[[1.0, 0.0], [1.5, 1.0]][..]));
    assert_eq!(lu.upper, Matrix::from(&[[4.0, 3.0], [0.0, -1.5]][..]));
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(2);
    for &(r, c) in &[(1, 1), (1, 4), (3, 2), (5, 5)] {
        let a = Matrix::random_nonzero(r, c, &mut rng);
        assert_eq!(a.to_transpose().to_transpose(), a);
    }
}

#[test]
fn adjoint_determinant_identity() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 2..=4 {
        let a = well_conditioned(n, &mut rng);
        let det = linalg::determinant(&a).unwrap();
        let adj_det = linalg::determinant(&linalg::adjoint(&a).unwrap()).unwrap();
        assert_close!(rel=1e-9, adj_det, det.powi(n as i32 - 1));
    }
}

#[test]
fn determinant_paths_agree() {
    let mut rng = StdRng::seed_from_u64(4);
    for n in 1..=4 {
        let a = Matrix::random_nonzero(n, n, &mut rng);
        let by_cofactors = linalg::determinant_by_cofactors(&a).unwrap();
        let by_plu = linalg::decompose_plu(&a).unwrap().determinant();
        assert_close!(abs=1e-12, rel=1e-9, by_cofactors, by_plu);
    }
}

#[test]
fn inverses_are_inverses() {
    let mut rng = StdRng::seed_from_u64(5);
    for n in 1..=6 {
        let a = well_conditioned(n, &mut rng);
        let inv = linalg::inverse(&a).unwrap();
        assert!(arith::mul(&inv, &a).unwrap().is_identity(9), "n = {}", n);
        assert!(arith::mul(&a, &inv).unwrap().is_identity(9), "n = {}", n);

        if n <= linalg::COFACTOR_MAX_DIM {
            let by_adjoint = linalg::inverse_by_adjoint(&a).unwrap();
            assert!(matrices_equal(&inv, &by_adjoint, 9));
        }
    }
}

#[test]
fn pivoted_lu_solves_systems() {
    let mut rng = StdRng::seed_from_u64(6);
    let a = Matrix::random_nonzero(4, 4, &mut rng);
    let x: Vec<f64> = (0..4).map(|i| i as f64 - 1.5).collect();
    let b = arith::mul_vec(&a, &x).unwrap();

    // P·A·x = P·b = L·U·x
    let plu = linalg::decompose_plu(&a).unwrap();
    let pb: Vec<f64> = plu.perm.iter().map(|&i| b[i]).collect();
    let y = linalg::solve_lower(&plu.lower, &pb).unwrap();
    let solved = linalg::solve_upper(&plu.upper, &y).unwrap();
    assert_close!(abs=1e-9, solved, x);
}

#[test]
fn cholesky_of_a_gram_matrix() {
    let mut rng = StdRng::seed_from_u64(7);
    for &(r, c) in &[(3, 3), (4, 3), (5, 2)] {
        let a = Matrix::random_nonzero(r, c, &mut rng);
        let gram = arith::mul(&a.to_transpose(), &a).unwrap();
        let chol = linalg::cholesky(&gram, 8).unwrap();
        assert!(chol.positive_definite, "{}x{}", r, c);
        assert!(chol.verified, "{}x{}", r, c);
        assert!(chol.lower.is_lower(NO_ROUNDING));
        assert_eq!(chol.upper, chol.lower.to_transpose());
    }
}

#[test]
fn symmetric_eigenvalues() {
    let a = Matrix::from(&[[2.0, 1.0], [1.0, 2.0]][..]);
    let mut rng = StdRng::seed_from_u64(8);
    let values = spectral::eigenvalues(&a, EPS, &mut rng, &Default::default()).unwrap();
    assert_close!(abs=1e-12, sorted(values), vec![1.0, 3.0]);
}

#[test]
fn svd_round_trip_on_a_diagonal_matrix() {
    let acc = 10;
    let a = Matrix::from(&[[3.0, 0.0], [0.0, -2.0]][..]);
    let ata = arith::mul(&a.to_transpose(), &a).unwrap();

    let mut rng = StdRng::seed_from_u64(9);
    let values = spectral::eigenvalues(&ata, EPS, &mut rng, &Default::default()).unwrap();
    let singular = spectral::singular_values(&values, acc);
    assert_eq!(singular, vec![3.0, 2.0]);

    // AᵗA is already diagonal and sorted, so V = I
    let v = Matrix::identity(2, 2);
    let sigma = spectral::sigma_matrix(&singular, 2, 2).unwrap();
    let u = spectral::left_singular_vectors(&a, &v, &singular, acc).unwrap();

    assert_eq!(u, Matrix::from(&[[1.0, 0.0], [0.0, -1.0]][..]));
    assert!(spectral::is_orthogonal(&u, acc));
    assert!(spectral::verify_svd(&a, &u, &sigma, &v, acc));
    assert_eq!(spectral::reconstruct_svd(&u, &sigma, &v).unwrap(), a);
}
