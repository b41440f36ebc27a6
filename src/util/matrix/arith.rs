/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Elementwise and matrix arithmetic.
//!
//! Each operation has a plain form and a `_rounded` form which rounds every
//! element of the result to `accuracy` decimal places.
//!
//! The `std::ops` impls on `&Matrix` are conveniences for code that has
//! already checked shapes; they panic on a mismatch.

use crate::{Matrix, MatrixError, Result};
use ::mathkern_slice_math::vdot;
use ::std::ops::{Add, Mul, Neg, Sub};

fn zip_with(
    op: &'static str,
    a: &Matrix,
    b: &Matrix,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Matrix> {
    if a.dims() != b.dims() {
        return Err(MatrixError::ShapeMismatch { op, left: a.dims(), right: b.dims() });
    }
    let data = a.row_major_data().iter()
        .zip(b.row_major_data())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Ok(Matrix::from_row_major_data(a.dims(), data))
}

pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> { zip_with("add", a, b, |x, y| x + y) }
pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix> { zip_with("sub", a, b, |x, y| x - y) }
pub fn neg(a: &Matrix) -> Matrix { a.map(|&x| -x) }
pub fn scale(s: f64, a: &Matrix) -> Matrix { a.map(|&x| s * x) }

pub fn add_rounded(a: &Matrix, b: &Matrix, accuracy: u32) -> Result<Matrix>
{ add(a, b).map(|m| m.round(accuracy)) }

pub fn sub_rounded(a: &Matrix, b: &Matrix, accuracy: u32) -> Result<Matrix>
{ sub(a, b).map(|m| m.round(accuracy)) }

pub fn neg_rounded(a: &Matrix, accuracy: u32) -> Matrix
{ neg(a).round(accuracy) }

pub fn scale_rounded(s: f64, a: &Matrix, accuracy: u32) -> Matrix
{ scale(s, a).round(accuracy) }

/// Matrix product.
///
/// A `1x1` operand on either side is treated as a scalar, so that a quantity
/// like `vᵀ·v` can be used directly as a coefficient.
pub fn mul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.is_scalar() {
        return Ok(scale(a[(0, 0)], b));
    }
    if b.is_scalar() {
        return Ok(scale(b[(0, 0)], a));
    }
    if a.num_cols() != b.num_rows() {
        return Err(MatrixError::ShapeMismatch { op: "mul", left: a.dims(), right: b.dims() });
    }

    let mut out = Matrix::zeros((a.num_rows(), b.num_cols()));
    for (a_row, out_row) in a.rows().zip(out.rows_mut()) {
        // i-k-j order so the inner loop runs along contiguous rows
        for (&a_ik, b_row) in a_row.iter().zip(b.rows()) {
            if a_ik == 0.0 {
                continue;
            }
            for (o, &b_kj) in out_row.iter_mut().zip(b_row) {
                *o += a_ik * b_kj;
            }
        }
    }
    Ok(out)
}

pub fn mul_rounded(a: &Matrix, b: &Matrix, accuracy: u32) -> Result<Matrix>
{ mul(a, b).map(|m| m.round(accuracy)) }

/// Matrix-vector product `a·v`.
pub fn mul_vec(a: &Matrix, v: &[f64]) -> Result<Vec<f64>> {
    if a.num_cols() != v.len() {
        return Err(MatrixError::ShapeMismatch { op: "mul_vec", left: a.dims(), right: (v.len(), 1) });
    }
    Ok(a.rows().map(|row| vdot(row, v)).collect())
}

pub fn mul_vec_rounded(a: &Matrix, v: &[f64], accuracy: u32) -> Result<Vec<f64>>
{ mul_vec(a, v).map(|v| ::mathkern_slice_math::vround(&v, accuracy)) }

/// Sum of the diagonal of a square matrix.
pub fn trace(a: &Matrix) -> Result<f64> {
    a.require_square("trace")?;
    Ok(a.diagonal().iter().sum())
}

/// Outer product `u·wᵀ`.
pub fn outer(u: &[f64], w: &[f64]) -> Result<Matrix> {
    crate::matrix::check_dims((u.len(), w.len()))?;
    Ok(Matrix::from_fn((u.len(), w.len()), |r, c| u[r] * w[c]))
}

macro_rules! impl_panicking_binop {
    ($Op:ident::$op:ident => $func:path) => {
        impl<'a, 'b> $Op<&'b Matrix> for &'a Matrix {
            type Output = Matrix;

            fn $op(self, other: &'b Matrix) -> Matrix {
                $func(self, other).unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

impl_panicking_binop!(Add::add => add);
impl_panicking_binop!(Sub::sub => sub);
impl_panicking_binop!(Mul::mul => mul);

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, m: &'a Matrix) -> Matrix { scale(self, m) }
}

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix { neg(self) }
}
