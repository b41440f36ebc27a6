/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Decompositions and inverses of small dense matrices.
//!
//! Everything is implemented directly on [`Matrix`] in plain Rust; these are
//! the textbook algorithms, meant for the handful-of-rows matrices that
//! show up in polynomial and SVD bookkeeping.

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate mathkern_assert_close;

use ::mathkern_matrix::{Matrix, MatrixError};
use ::std::fmt;

pub use crate::lu::{decompose_lu, decompose_plu, Lu, PivotedLu};
mod lu;

pub use crate::triangular::{solve_lower, solve_upper, inverse_lower, inverse_upper, inverse};
mod triangular;

pub use crate::cofactor::{
    cofactor, determinant_by_cofactors, determinant,
    adjoint, inverse_by_adjoint, COFACTOR_MAX_DIM,
};
mod cofactor;

pub use crate::cholesky::{cholesky, Cholesky};
mod cholesky;

pub mod spectral;
pub use crate::spectral::{EigenInfo, MAX_EIGENVALUE_DIM};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Triangle { Lower, Upper }

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Triangle::Lower => write!(f, "lower"),
            Triangle::Upper => write!(f, "upper"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinalgError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("zero pivot at index {index}; LU without pivoting does not exist")]
    ZeroPivot { index: usize },

    #[error("{op}: matrix is singular")]
    Singular { op: &'static str },

    #[error("{op}: matrix is not {triangle} triangular")]
    NotTriangular { op: &'static str, triangle: Triangle },

    #[error("{op}: {dim}x{dim} is too large for cofactor expansion (max {max})")]
    TooLargeForCofactors { op: &'static str, dim: usize, max: usize },

    #[error("cannot find eigenvalues of a {dim}x{dim} matrix; roots are only solved up to degree {max}")]
    TooLargeForRoots { dim: usize, max: usize },
}

pub type Result<T> = ::std::result::Result<T, LinalgError>;

fn unit_vector(i: usize, n: usize) -> Vec<f64> {
    let mut e = vec![0.0; n];
    e[i] = 1.0;
    e
}

#[cfg(test)]
pub(crate) fn random_well_conditioned(n: usize, seed: u64) -> Matrix {
    use ::rand::{SeedableRng, rngs::StdRng};

    // diagonally dominant, so LU without pivoting is safe
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::random_nonzero(n, n, &mut rng);
    for i in 0..n {
        m[(i, i)] += n as f64;
    }
    m
}
