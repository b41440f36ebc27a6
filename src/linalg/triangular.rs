/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Triangular solves, and the inverses built from them.

use crate::{decompose_lu, unit_vector, LinalgError, Result, Triangle};
use ::mathkern_matrix::{arith, Matrix, MatrixError, NO_ROUNDING};

fn require_triangular(m: &Matrix, triangle: Triangle, op: &'static str) -> Result<usize> {
    let n = m.require_square(op)?;
    let ok = match triangle {
        Triangle::Lower => m.is_lower(NO_ROUNDING),
        Triangle::Upper => m.is_upper(NO_ROUNDING),
    };
    match ok {
        true => Ok(n),
        false => Err(LinalgError::NotTriangular { op, triangle }),
    }
}

fn require_rhs(m: &Matrix, b: &[f64], op: &'static str) -> Result<()> {
    if m.num_rows() != b.len() {
        return Err(MatrixError::ShapeMismatch { op, left: m.dims(), right: (b.len(), 1) }.into());
    }
    Ok(())
}

/// Solve `L x = b` by forward substitution.
///
/// The diagonal of `L` need not be unit, but must not contain zeros.
pub fn solve_lower(l: &Matrix, b: &[f64]) -> Result<Vec<f64>> {
    let op = "solve_lower";
    let n = require_triangular(l, Triangle::Lower, op)?;
    require_rhs(l, b, op)?;

    let mut x = vec![0.0; n];
    for (i, row) in l.rows().enumerate() {
        if row[i] == 0.0 {
            return Err(LinalgError::Singular { op });
        }
        let sum: f64 = row[..i].iter().zip(&x).map(|(a, x)| a * x).sum();
        x[i] = (b[i] - sum) / row[i];
    }
    Ok(x)
}

/// Solve `U x = b` by back substitution.
pub fn solve_upper(u: &Matrix, b: &[f64]) -> Result<Vec<f64>> {
    let op = "solve_upper";
    let n = require_triangular(u, Triangle::Upper, op)?;
    require_rhs(u, b, op)?;

    let mut x = vec![0.0; n];
    for (i, row) in u.rows().enumerate().rev() {
        if row[i] == 0.0 {
            return Err(LinalgError::Singular { op });
        }
        let sum: f64 = row[i + 1..].iter().zip(&x[i + 1..]).map(|(a, x)| a * x).sum();
        x[i] = (b[i] - sum) / row[i];
    }
    Ok(x)
}

fn inverse_by_columns(
    m: &Matrix,
    solve: impl Fn(&Matrix, &[f64]) -> Result<Vec<f64>>,
) -> Result<Matrix> {
    let n = m.num_rows();
    let columns = (0..n)
        .map(|i| solve(m, &unit_vector(i, n)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Matrix::from_columns(&columns)?)
}

pub fn inverse_lower(l: &Matrix) -> Result<Matrix> { inverse_by_columns(l, solve_lower) }
pub fn inverse_upper(u: &Matrix) -> Result<Matrix> { inverse_by_columns(u, solve_upper) }

/// Inverse through `A⁻¹ = U⁻¹ L⁻¹`, using [`decompose_lu`].
///
/// Inherits the limitations of LU without pivoting: a matrix like
/// `[[0, 1], [1, 0]]` is invertible, but fails here with `ZeroPivot`.
pub fn inverse(a: &Matrix) -> Result<Matrix> {
    let lu = decompose_lu(a)?;
    let upper_inv = inverse_upper(&lu.upper).map_err(|e| match e {
        LinalgError::Singular { .. } => LinalgError::Singular { op: "inverse" },
        e => e,
    })?;
    let lower_inv = inverse_lower(&lu.lower)?;
    Ok(arith::mul(&upper_inv, &lower_inv)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::mathkern_matrix::arith::{mul, mul_vec};

    fn lower() -> Matrix { Matrix::from(&[[2.0, 0.0, 0.0], [1.0, 4.0, 0.0], [-3.0, 2.0, 0.5]][..]) }

    #[test]
    fn substitution() {
        let l = lower();
        let x = solve_lower(&l, &[2.0, 9.0, 1.0]).unwrap();
        assert_close!(x.clone(), vec![1.0, 2.0, 0.0]);
        assert_close!(mul_vec(&l, &x).unwrap(), vec![2.0, 9.0, 1.0]);

        let u = l.to_transpose();
        let b = [1.0, -2.0, 3.0];
        let x = solve_upper(&u, &b).unwrap();
        assert_close!(abs=1e-12, mul_vec(&u, &x).unwrap(), b.to_vec());
    }

    #[test]
    fn substitution_errors() {
        let l = lower();
        assert_eq!(
            solve_lower(&l.to_transpose(), &[1.0; 3]),
            Err(LinalgError::NotTriangular { op: "solve_lower", triangle: Triangle::Lower }),
        );
        assert!(matches!(
            solve_upper(&l.to_transpose(), &[1.0; 2]),
            Err(LinalgError::Matrix(MatrixError::ShapeMismatch { .. })),
        ));

        let mut singular = l.clone();
        singular[(1, 1)] = 0.0;
        assert_eq!(solve_lower(&singular, &[1.0; 3]), Err(LinalgError::Singular { op: "solve_lower" }));
        assert!(inverse_lower(&singular).is_err());
    }

    #[test]
    fn triangular_inverses() {
        let l = lower();
        let l_inv = inverse_lower(&l).unwrap();
        assert!(l_inv.is_lower(NO_ROUNDING));
        assert_close!(abs=1e-12, mul(&l_inv, &l).unwrap(), Matrix::identity(3, 3));

        let u = l.to_transpose();
        let u_inv = inverse_upper(&u).unwrap();
        assert!(u_inv.is_upper(NO_ROUNDING));
        assert_close!(abs=1e-12, mul(&u, &u_inv).unwrap(), Matrix::identity(3, 3));
    }

    #[test]
    fn full_inverse() {
        let a = Matrix::from(&[[4.0, 7.0], [2.0, 6.0]][..]);
        let expected = Matrix::from(&[[0.6, -0.7], [-0.2, 0.4]][..]);
        assert_close!(abs=1e-12, inverse(&a).unwrap(), expected);

        for seed in 0..5 {
            let a = crate::random_well_conditioned(4, seed);
            let a_inv = inverse(&a).unwrap();
            assert!(mul(&a_inv, &a).unwrap().is_identity(9));
        }
    }

    #[test]
    fn inverse_failures() {
        let a = Matrix::from(&[[1.0, 2.0], [2.0, 4.0]][..]);
        assert_eq!(inverse(&a), Err(LinalgError::Singular { op: "inverse" }));

        let a = Matrix::from(&[[0.0, 1.0], [1.0, 0.0]][..]);
        assert_eq!(inverse(&a), Err(LinalgError::ZeroPivot { index: 0 }));
    }
}
