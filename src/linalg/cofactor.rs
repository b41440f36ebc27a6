/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Determinants, adjoints and inverses by cofactor expansion.
//!
//! Cofactor expansion costs `O(n!)`, so the functions here that would expand
//! a large matrix either switch to pivoted LU or refuse.

use crate::{decompose_plu, LinalgError, Result};
use ::mathkern_matrix::{arith, Axis, Matrix, MatrixError};

/// Largest matrix whose determinant is computed by cofactor expansion, and
/// the largest that [`inverse_by_adjoint`] accepts.
pub const COFACTOR_MAX_DIM: usize = 4;

/// The minor of a square matrix with row `p` and column `q` removed.
pub fn cofactor(m: &Matrix, p: usize, q: usize) -> Result<Matrix> {
    let op = "cofactor";
    let n = m.require_square(op)?;
    if n < 2 {
        return Err(MatrixError::EmptyDims { rows: 0, cols: 0 }.into());
    }
    for &(index, axis) in &[(p, Axis::Rows), (q, Axis::Cols)] {
        if index >= n {
            return Err(MatrixError::OutOfRange { op, axis, index, len: n }.into());
        }
    }
    Ok(minor(m, p, q))
}

fn minor(m: &Matrix, p: usize, q: usize) -> Matrix {
    let n = m.num_rows();
    Matrix::from_fn((n - 1, n - 1), |r, c| {
        let r = if r < p { r } else { r + 1 };
        let c = if c < q { c } else { c + 1 };
        m[(r, c)]
    })
}

fn alternating(i: usize) -> f64 {
    if i % 2 == 0 { 1.0 } else { -1.0 }
}

/// Determinant by recursive expansion along the first row.
///
/// No size limit is enforced; prefer [`determinant`].
pub fn determinant_by_cofactors(m: &Matrix) -> Result<f64> {
    m.require_square("determinant_by_cofactors")?;
    Ok(expand(m))
}

fn expand(m: &Matrix) -> f64 {
    match m.num_rows() {
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        n => (0..n)
            .filter(|&q| m[(0, q)] != 0.0)
            .map(|q| alternating(q) * m[(0, q)] * expand(&minor(m, 0, q)))
            .sum(),
    }
}

/// Determinant by cofactor expansion up to [`COFACTOR_MAX_DIM`], and by
/// pivoted LU beyond that.
pub fn determinant(m: &Matrix) -> Result<f64> {
    let n = m.require_square("determinant")?;
    if n <= COFACTOR_MAX_DIM {
        Ok(expand(m))
    } else {
        Ok(decompose_plu(m)?.determinant())
    }
}

/// Transpose of the matrix of signed minors.
///
/// The adjoint of a `1x1` matrix is `[[1]]`.
pub fn adjoint(m: &Matrix) -> Result<Matrix> {
    let n = m.require_square("adjoint")?;
    if n == 1 {
        return Ok(Matrix::identity(1, 1));
    }

    let mut data = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            data.push(alternating(r + c) * determinant(&minor(m, c, r))?);
        }
    }
    Ok(Matrix::from_row_major_data((n, n), data))
}

/// `adj(A) / det(A)`.
///
/// Only accepts matrices up to [`COFACTOR_MAX_DIM`]; use
/// [`inverse`](crate::inverse) for anything else.
pub fn inverse_by_adjoint(m: &Matrix) -> Result<Matrix> {
    let op = "inverse_by_adjoint";
    let n = m.require_square(op)?;
    if n > COFACTOR_MAX_DIM {
        return Err(LinalgError::TooLargeForCofactors { op, dim: n, max: COFACTOR_MAX_DIM });
    }
    let det = expand(m);
    if det == 0.0 {
        return Err(LinalgError::Singular { op });
    }
    Ok(arith::scale(det.recip(), &adjoint(m)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::mathkern_matrix::arith::mul;

    fn a3() -> Matrix {
        Matrix::from(&[[2.0, -1.0, 0.0], [1.0, 3.0, 2.0], [0.0, 1.0, 4.0]][..])
    }

    #[test]
    fn minors() {
        assert_eq!(cofactor(&a3(), 1, 2), Ok(Matrix::from(&[[2.0, -1.0], [0.0, 1.0]][..])));
        assert_eq!(cofactor(&a3(), 0, 0), Ok(Matrix::from(&[[3.0, 2.0], [1.0, 4.0]][..])));
        assert!(cofactor(&a3(), 3, 0).is_err());
        assert!(cofactor(&a3(), 0, 3).is_err());
        assert!(cofactor(&Matrix::identity(1, 1), 0, 0).is_err());
        assert!(cofactor(&Matrix::identity(2, 3), 0, 0).is_err());
    }

    #[test]
    fn small_determinants() {
        assert_eq!(determinant(&Matrix::from(&[[7.0]][..])), Ok(7.0));
        assert_eq!(determinant(&Matrix::from(&[[4.0, 3.0], [6.0, 3.0]][..])), Ok(-6.0));
        // 2(12 - 2) + 1(4 - 0) + 0 = 24
        assert_eq!(determinant(&a3()), Ok(24.0));
        assert_eq!(determinant_by_cofactors(&a3()), Ok(24.0));
        assert!(determinant(&Matrix::identity(2, 3)).is_err());
    }

    #[test]
    fn large_determinant_uses_lu() {
        let n = 6;
        let m = Matrix::from_fn((n, n), |r, c| {
            if r == c { 2.0 } else if c == r + 1 { 1.0 } else { 0.0 }
        });
        assert_close!(determinant(&m).unwrap(), 64.0);
        assert_close!(determinant_by_cofactors(&m).unwrap(), 64.0);

        let a = crate::random_well_conditioned(6, 3);
        assert_close!(rel=1e-10, determinant(&a).unwrap(), determinant_by_cofactors(&a).unwrap());
    }

    #[test]
    fn adjoint_and_inverse() {
        let adj = adjoint(&a3()).unwrap();
        assert_close!(abs=1e-12, mul(&adj, &a3()).unwrap(), arith::scale(24.0, &Matrix::identity(3, 3)));

        let inv = inverse_by_adjoint(&a3()).unwrap();
        assert_close!(abs=1e-12, mul(&inv, &a3()).unwrap(), Matrix::identity(3, 3));

        assert_eq!(adjoint(&Matrix::from(&[[5.0]][..])), Ok(Matrix::identity(1, 1)));
        assert_eq!(
            adjoint(&Matrix::from(&[[1.0, 2.0], [3.0, 4.0]][..])),
            Ok(Matrix::from(&[[4.0, -2.0], [-3.0, 1.0]][..])),
        );
    }

    #[test]
    fn adjoint_inverse_refusals() {
        assert_eq!(
            inverse_by_adjoint(&Matrix::identity(5, 5)),
            Err(LinalgError::TooLargeForCofactors { op: "inverse_by_adjoint", dim: 5, max: 4 }),
        );
        assert_eq!(
            inverse_by_adjoint(&Matrix::from(&[[1.0, 2.0], [2.0, 4.0]][..])),
            Err(LinalgError::Singular { op: "inverse_by_adjoint" }),
        );
    }
}
