/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{LinalgError, Result};
use ::mathkern_matrix::Matrix;

/// `A = L·U` with a unit diagonal on `L`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lu {
    pub lower: Matrix,
    pub upper: Matrix,
}

/// `P·A = L·U` with a unit diagonal on `L`.
///
/// Row `i` of `P·A` is row `perm[i]` of `A`.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotedLu {
    pub perm: Vec<usize>,
    pub lower: Matrix,
    pub upper: Matrix,
    /// Number of row exchanges performed.
    pub swaps: usize,
}

/// Doolittle LU decomposition, without pivoting.
///
/// Fails with `ZeroPivot` if a zero pivot would need to be divided by.  The
/// last pivot is never divided by, so a matrix that is singular only through
/// its last pivot still decomposes.
///
/// Without pivoting this is numerically poor for matrices that are not
/// diagonally dominant; see [`decompose_plu`].
pub fn decompose_lu(a: &Matrix) -> Result<Lu> {
    let n = a.require_square("decompose_lu")?;
    let mut lower = Matrix::identity(n, n);
    let mut upper = Matrix::zeros((n, n));

    for k in 0..n {
        for j in k..n {
            let sum: f64 = (0..k).map(|p| lower[(k, p)] * upper[(p, j)]).sum();
            upper[(k, j)] = a[(k, j)] - sum;
        }

        if k + 1 == n {
            break;
        }
        let pivot = upper[(k, k)];
        if pivot == 0.0 {
            return Err(LinalgError::ZeroPivot { index: k });
        }
        for i in k + 1..n {
            let sum: f64 = (0..k).map(|p| lower[(i, p)] * upper[(p, k)]).sum();
            lower[(i, k)] = (a[(i, k)] - sum) / pivot;
        }
    }
    Ok(Lu { lower, upper })
}

/// LU decomposition with partial (row) pivoting.
///
/// Singular input is fine; it simply produces a zero on the diagonal of `U`.
pub fn decompose_plu(a: &Matrix) -> Result<PivotedLu> {
    let n = a.require_square("decompose_plu")?;
    let mut upper = a.clone();
    let mut lower = Matrix::zeros((n, n));
    let mut perm: Vec<usize> = (0..n).collect();
    let mut swaps = 0;

    for k in 0..n {
        let best = (k..n).fold(k, |best, i| {
            match upper[(i, k)].abs() > upper[(best, k)].abs() {
                true => i,
                false => best,
            }
        });
        if best != k {
            upper.swap_rows(k, best)?;
            lower.swap_rows(k, best)?;
            perm.swap(k, best);
            swaps += 1;
        }

        let pivot = upper[(k, k)];
        if pivot == 0.0 {
            trace!("decompose_plu: column {} is already eliminated", k);
            continue;
        }
        for i in k + 1..n {
            let factor = upper[(i, k)] / pivot;
            lower[(i, k)] = factor;
            upper[(i, k)] = 0.0;
            for j in k + 1..n {
                let above = upper[(k, j)];
                upper[(i, j)] -= factor * above;
            }
        }
    }
    for i in 0..n {
        lower[(i, i)] = 1.0;
    }
    Ok(PivotedLu { perm, lower, upper, swaps })
}

impl PivotedLu {
    /// `+1` or `-1`, the determinant of `P`.
    pub fn sign(&self) -> f64 {
        match self.swaps % 2 {
            0 => 1.0,
            _ => -1.0,
        }
    }

    pub fn determinant(&self) -> f64 {
        self.sign() * self.upper.diagonal().iter().product::<f64>()
    }

    pub fn permutation_matrix(&self) -> Matrix {
        let n = self.perm.len();
        Matrix::from_fn((n, n), |r, c| if self.perm[r] == c { 1.0 } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::mathkern_matrix::{arith::mul, MatrixError, NO_ROUNDING};

    #[test]
    fn doolittle_known() {
        let a = Matrix::from(&[[4.0, 3.0], [6.0, 3.0]][..]);
        let Lu { lower, upper } = decompose_lu(&a).unwrap();
        assert_eq!(lower, Matrix::from(&[[1.0, 0.0], [1.5, 1.0]][..]));
        assert_eq!(upper, Matrix::from(&[[4.0, 3.0], [0.0, -1.5]][..]));
    }

    #[test]
    fn doolittle_reconstructs() {
        for seed in 0..5 {
            let a = crate::random_well_conditioned(5, seed);
            let Lu { lower, upper } = decompose_lu(&a).unwrap();
            assert!(lower.is_lower(NO_ROUNDING));
            assert!(upper.is_upper(NO_ROUNDING));
            assert_eq!(lower.diagonal(), vec![1.0; 5]);
            assert_close!(abs=1e-12, mul(&lower, &upper).unwrap(), a);
        }
    }

    #[test]
    fn doolittle_zero_pivot() {
        let a = Matrix::from(&[[0.0, 1.0], [1.0, 0.0]][..]);
        assert_eq!(decompose_lu(&a), Err(LinalgError::ZeroPivot { index: 0 }));

        // singular, but only the last pivot is zero
        let a = Matrix::from(&[[1.0, 2.0], [2.0, 4.0]][..]);
        let lu = decompose_lu(&a).unwrap();
        assert_eq!(lu.upper[(1, 1)], 0.0);
    }

    #[test]
    fn doolittle_not_square() {
        assert_eq!(
            decompose_lu(&Matrix::identity(2, 3)),
            Err(LinalgError::Matrix(MatrixError::NotSquare { op: "decompose_lu", dims: (2, 3) })),
        );
    }

    #[test]
    fn pivoted() {
        let a = Matrix::from(&[
            [0.0, 1.0, 2.0],
            [1.0, 0.0, 3.0],
            [4.0, -3.0, 8.0],
        ][..]);
        let plu = decompose_plu(&a).unwrap();
        assert_eq!(plu.perm[0], 2);
        assert!(plu.lower.is_lower(NO_ROUNDING));
        assert!(plu.upper.is_upper(NO_ROUNDING));
        let pa = mul(&plu.permutation_matrix(), &a).unwrap();
        assert_close!(abs=1e-12, mul(&plu.lower, &plu.upper).unwrap(), pa);
        // det = 0·(0 - -9) - 1·(8 - 12) + 2·(-3 - 0) = -2
        assert_close!(plu.determinant(), -2.0);
    }

    #[test]
    fn pivoted_singular() {
        let a = Matrix::from(&[[1.0, 2.0], [2.0, 4.0]][..]);
        let plu = decompose_plu(&a).unwrap();
        assert_eq!(plu.determinant(), 0.0);

        let plu = decompose_plu(&Matrix::zeros((3, 3))).unwrap();
        assert_eq!(plu.swaps, 0);
        assert_eq!(plu.lower, Matrix::identity(3, 3));
    }
}
