/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Result;
use ::mathkern_matrix::{arith, matrices_equal, Matrix};

/// Outcome of [`cholesky`].
///
/// A matrix that is not positive definite is not an error; the
/// factorization simply stops, leaving the remaining rows of `lower` zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Cholesky {
    pub positive_definite: bool,
    /// Whether `L·Lᵗ` reproduces the input at the requested accuracy.
    pub verified: bool,
    pub lower: Matrix,
    /// Always the transpose of `lower`.
    pub upper: Matrix,
}

/// `A = L·Lᵗ`, computed row by row.
///
/// Only the lower triangle of `A` is read while factoring; an asymmetric
/// input shows up as `verified == false`.
pub fn cholesky(a: &Matrix, accuracy: u32) -> Result<Cholesky> {
    let n = a.require_square("cholesky")?;
    let mut lower = Matrix::zeros((n, n));
    let mut positive_definite = true;

    for k in 0..n {
        for j in 0..k {
            let sum: f64 = (0..j).map(|p| lower[(k, p)] * lower[(j, p)]).sum();
            lower[(k, j)] = (a[(k, j)] - sum) / lower[(j, j)];
        }
        let sum: f64 = (0..k).map(|p| lower[(k, p)].powi(2)).sum();
        let radicand = a[(k, k)] - sum;
        if !(radicand > 0.0) {
            debug!("cholesky: radicand {} at row {}; not positive definite", radicand, k);
            positive_definite = false;
            break;
        }
        lower[(k, k)] = radicand.sqrt();
    }

    let upper = lower.to_transpose();
    let verified = matrices_equal(&arith::mul(&lower, &upper)?, a, accuracy);
    Ok(Cholesky { positive_definite, verified, lower, upper })
}
