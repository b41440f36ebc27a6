/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Shape and value predicates.
//!
//! Every predicate that looks at values takes an `accuracy` (decimal places)
//! and compares after rounding; pass `NO_ROUNDING` for exact comparison.

use crate::Matrix;
use ::mathkern_slice_math::{round_to, vectors_equal};

#[inline]
fn is_zero_at(x: f64, accuracy: u32) -> bool { round_to(x, accuracy) == 0.0 }

impl Matrix<f64> {
    fn all_indexed(&self, mut pred: impl FnMut(usize, usize, f64) -> bool) -> bool {
        self.rows().enumerate().all(|(r, row)| {
            row.iter().enumerate().all(|(c, &x)| pred(r, c, x))
        })
    }

    /// Everything strictly above the main diagonal rounds to zero.
    pub fn is_lower(&self, accuracy: u32) -> bool {
        self.all_indexed(|r, c, x| c <= r || is_zero_at(x, accuracy))
    }

    /// Everything strictly below the main diagonal rounds to zero.
    pub fn is_upper(&self, accuracy: u32) -> bool {
        self.all_indexed(|r, c, x| c >= r || is_zero_at(x, accuracy))
    }

    pub fn is_diagonal(&self, accuracy: u32) -> bool {
        self.is_lower(accuracy) && self.is_upper(accuracy)
    }

    /// Square, and equal to its transpose after rounding.
    pub fn is_symmetric(&self, accuracy: u32) -> bool {
        self.is_square() && self.all_indexed(|r, c, x| {
            c <= r || round_to(x, accuracy) == round_to(self[(c, r)], accuracy)
        })
    }

    pub fn is_zero(&self, accuracy: u32) -> bool {
        self.row_major_data().iter().all(|&x| is_zero_at(x, accuracy))
    }

    /// Ones on the main diagonal, zeros elsewhere.
    ///
    /// Like `Matrix::identity`, this does not require the matrix to be square.
    pub fn is_identity(&self, accuracy: u32) -> bool {
        self.all_indexed(|r, c, x| {
            let expected = if r == c { 1.0 } else { 0.0 };
            round_to(x, accuracy) == expected
        })
    }
}

/// Same shape, and every element equal after rounding.
pub fn matrices_equal(a: &Matrix, b: &Matrix, accuracy: u32) -> bool {
    a.dims() == b.dims() && vectors_equal(a.row_major_data(), b.row_major_data(), accuracy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NO_ROUNDING;

    #[test]
    fn shapes() {
        assert!(Matrix::identity(3, 3).is_square());
        assert!(!Matrix::identity(2, 3).is_square());
        assert!(Matrix::identity(1, 4).is_vector());
        assert!(Matrix::identity(4, 1).is_vector());
        assert!(!Matrix::identity(2, 2).is_vector());
        assert!(Matrix::identity(1, 1).is_scalar());
        assert!(!Matrix::identity(1, 2).is_scalar());
    }

    #[test]
    fn triangularity() {
        let lower = Matrix::from(&[[1.0, 0.0], [2.0, 3.0]][..]);
        let upper = lower.to_transpose();
        assert!(lower.is_lower(NO_ROUNDING));
        assert!(!lower.is_upper(NO_ROUNDING));
        assert!(upper.is_upper(NO_ROUNDING));
        assert!(!upper.is_lower(NO_ROUNDING));
        assert!(!lower.is_diagonal(NO_ROUNDING));
        assert!(Matrix::identity(3, 3).is_diagonal(NO_ROUNDING));

        // rounding noise above the diagonal
        let noisy = Matrix::from(&[[1.0, 1e-13], [2.0, 3.0]][..]);
        assert!(!noisy.is_lower(NO_ROUNDING));
        assert!(noisy.is_lower(10));
    }

    #[test]
    fn symmetry() {
        let sym = Matrix::from(&[[2.0, 1.0], [1.0 + 1e-12, 5.0]][..]);
        assert!(sym.is_symmetric(8));
        assert!(!sym.is_symmetric(NO_ROUNDING));
        assert!(!Matrix::identity(2, 3).is_symmetric(8));
    }

    #[test]
    fn zero_and_identity() {
        assert!(Matrix::zeros((2, 3)).is_zero(NO_ROUNDING));
        assert!(Matrix::from(&[[1e-9, -1e-9]][..]).is_zero(6));
        assert!(!Matrix::from(&[[1e-9, -1e-9]][..]).is_zero(12));

        assert!(Matrix::identity(3, 3).is_identity(NO_ROUNDING));
        assert!(Matrix::identity(2, 3).is_identity(NO_ROUNDING));
        let almost = Matrix::from(&[[1.0 - 1e-11, 1e-12], [0.0, 1.0]][..]);
        assert!(almost.is_identity(9));
        assert!(!almost.is_identity(NO_ROUNDING));
        assert!(!Matrix::zeros((2, 2)).is_identity(NO_ROUNDING));
    }

    #[test]
    fn equality() {
        let a = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]][..]);
        let b = Matrix::from(&[[1.0, 2.0 + 1e-10], [3.0, 4.0]][..]);
        assert!(matrices_equal(&a, &a, NO_ROUNDING));
        assert!(!matrices_equal(&a, &b, NO_ROUNDING));
        assert!(matrices_equal(&a, &b, 6));
        assert!(!matrices_equal(&a, &a.to_transpose(), 6));
        assert!(!matrices_equal(&Matrix::identity(2, 3), &Matrix::identity(3, 2), 6));
    }
}
