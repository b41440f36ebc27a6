/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Bookkeeping for eigenvalue and singular value decompositions.
//!
//! Eigenvalues come from the roots of the characteristic polynomial, so they
//! are limited to matrices small enough for [`mathkern_algebra::roots`].

use crate::{LinalgError, Result};
use ::itertools::Itertools;
use ::mathkern_algebra::{roots_with_rng, BairstowSettings};
use ::mathkern_matrix::{arith, matrices_equal, round_to, Matrix, MatrixError};
use ::ordered_float::OrderedFloat;
use ::rand::Rng;
use ::std::cmp::Reverse;

/// Largest matrix accepted by [`eigenvalues`].
pub const MAX_EIGENVALUE_DIM: usize = 5;

/// Distinct eigenvalues, largest first, and how many times each occurs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EigenInfo {
    pub values: Vec<f64>,
    pub multiplicities: Vec<usize>,
}

impl EigenInfo {
    pub fn count(&self) -> usize { self.values.len() }
}

/// Coefficients of `det(λI - A)`, leading coefficient (always 1) first.
///
/// Computed by the Faddeev–LeVerrier recurrence.
pub fn characteristic_polynomial(a: &Matrix) -> Result<Vec<f64>> {
    let n = a.require_square("characteristic_polynomial")?;
    let identity = Matrix::identity(n, n);

    let mut coeffs = vec![1.0];
    let mut m = Matrix::zeros((n, n));
    for k in 1..=n {
        let prev = coeffs[k - 1];
        m = arith::add(&arith::mul(a, &m)?, &arith::scale(prev, &identity))?;
        let c = -arith::trace(&arith::mul(a, &m)?)? / k as f64;
        coeffs.push(c);
    }
    Ok(coeffs)
}

/// Real eigenvalues, as the real roots of the characteristic polynomial.
///
/// Complex eigenvalues are omitted.  Repeated eigenvalues appear once per
/// multiplicity (see [`eigen_info`] to group them).
pub fn eigenvalues<R: Rng + ?Sized>(
    a: &Matrix,
    epsilon: f64,
    rng: &mut R,
    settings: &BairstowSettings,
) -> Result<Vec<f64>> {
    let n = a.require_square("eigenvalues")?;
    if n > MAX_EIGENVALUE_DIM {
        return Err(LinalgError::TooLargeForRoots { dim: n, max: MAX_EIGENVALUE_DIM });
    }
    let poly = characteristic_polynomial(a)?;
    Ok(roots_with_rng(&poly, epsilon, rng, settings))
}

/// Group values that are equal at `accuracy` decimal places.
///
/// The reported values are the rounded ones.
pub fn eigen_info(values: &[f64], accuracy: u32) -> EigenInfo {
    let mut rounded: Vec<f64> = values.iter().map(|&x| round_to(x, accuracy)).collect();
    rounded.sort_by_key(|&x| Reverse(OrderedFloat(x)));

    let mut info = EigenInfo::default();
    let groups = rounded.iter().group_by(|&&x| OrderedFloat(x));
    for (OrderedFloat(value), group) in &groups {
        info.values.push(value);
        info.multiplicities.push(group.count());
    }
    info
}

/// Singular values from the eigenvalues of `AᵗA`, largest first.
///
/// Eigenvalues are rounded to `accuracy` first.  `AᵗA` is positive
/// semidefinite, so anything still negative after that is noise and is
/// clamped to zero.
pub fn singular_values(eigenvalues_of_ata: &[f64], accuracy: u32) -> Vec<f64> {
    let mut out: Vec<f64> = eigenvalues_of_ata.iter().map(|&x| {
        match round_to(x, accuracy) {
            r if r < 0.0 => {
                debug!("clamping negative eigenvalue {} of AᵗA to zero", x);
                0.0
            },
            r => r.sqrt(),
        }
    }).collect();
    out.sort_by_key(|&x| Reverse(OrderedFloat(x)));
    out
}

/// `rows x cols` zeros with `values` down the main diagonal.
pub fn sigma_matrix(values: &[f64], rows: usize, cols: usize) -> Result<Matrix> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::EmptyDims { rows, cols }.into());
    }
    if values.len() > usize::min(rows, cols) {
        return Err(MatrixError::ShapeMismatch {
            op: "sigma_matrix",
            left: (rows, cols),
            right: (values.len(), values.len()),
        }.into());
    }
    let mut sigma = Matrix::zeros((rows, cols));
    for (i, &s) in values.iter().enumerate() {
        sigma[(i, i)] = s;
    }
    Ok(sigma)
}

/// Columns of `U` in `A = U Σ Vᵗ`, given `A`, `V` and the singular values.
///
/// Column `i` is `A vᵢ / σᵢ`, rounded to `accuracy`.  Columns for singular
/// values that round to zero, and any columns beyond the number of singular
/// values, are left as zero; completing them to an orthogonal basis needs
/// a null space, which is not computed here.
pub fn left_singular_vectors(
    a: &Matrix,
    v: &Matrix,
    singular_values: &[f64],
    accuracy: u32,
) -> Result<Matrix> {
    let op = "left_singular_vectors";
    let (rows, cols) = a.dims();
    if v.dims() != (cols, cols) {
        return Err(MatrixError::ShapeMismatch { op, left: a.dims(), right: v.dims() }.into());
    }
    if singular_values.len() > usize::min(rows, cols) {
        return Err(MatrixError::ShapeMismatch {
            op,
            left: a.dims(),
            right: (singular_values.len(), singular_values.len()),
        }.into());
    }

    let mut columns = vec![vec![0.0; rows]; rows];
    for (i, &sigma) in singular_values.iter().enumerate() {
        if round_to(sigma, accuracy) == 0.0 {
            continue;
        }
        let av = arith::mul_vec_rounded(&arith::scale(sigma.recip(), a), &v.col(i)?, accuracy)?;
        columns[i] = av;
    }
    Ok(Matrix::from_columns(&columns)?)
}

/// `U Σ Vᵗ`.
pub fn reconstruct_svd(u: &Matrix, sigma: &Matrix, v: &Matrix) -> Result<Matrix> {
    Ok(arith::mul(&arith::mul(u, sigma)?, &v.to_transpose())?)
}

/// Whether `U Σ Vᵗ` reproduces `a` at `accuracy` decimal places.
///
/// Mismatched shapes simply fail the check.
pub fn verify_svd(a: &Matrix, u: &Matrix, sigma: &Matrix, v: &Matrix, accuracy: u32) -> bool {
    match reconstruct_svd(u, sigma, v) {
        Ok(usv) => matrices_equal(&usv, a, accuracy),
        Err(e) => {
            debug!("verify_svd: {}", e);
            false
        },
    }
}

/// `QᵗQ = I` at `accuracy` decimal places.
pub fn is_orthogonal(q: &Matrix, accuracy: u32) -> bool {
    q.is_square() && match arith::mul(&q.to_transpose(), q) {
        Ok(qtq) => qtq.is_identity(accuracy),
        Err(_) => false,
    }
}
