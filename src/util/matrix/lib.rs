/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense, owned, row-major matrices.
//!
//! Everything here allocates and returns a new matrix, with the exception of
//! [`Matrix::swap_rows`], [`Matrix::swap_cols`] and the `_mut` accessors.
//!
//! Equality and zero-ness are always judged after rounding every element to
//! a caller-supplied number of decimal places (see [`round_to`]), because the
//! decompositions built on top of this crate accumulate floating point noise.

#[macro_use]
extern crate log;

pub use crate::matrix::Matrix;
mod matrix;

pub mod arrange;
pub mod predicates;
pub mod arith;

pub use crate::predicates::matrices_equal;
pub use ::mathkern_slice_math::{round_to, NO_ROUNDING};

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis { Rows, Cols }

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => write!(f, "rows"),
            Axis::Cols => write!(f, "columns"),
        }
    }
}

/// Misuse of a matrix operation: bad shapes or bad indices.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("matrix dimensions must be nonzero (got {rows}x{cols})")]
    EmptyDims { rows: usize, cols: usize },

    #[error("row {row} has {len} elements, but row 0 has {expected}")]
    JaggedRows { row: usize, len: usize, expected: usize },

    #[error("{op}: incompatible shapes {left:?} and {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("{op}: expected a square matrix, got shape {dims:?}")]
    NotSquare { op: &'static str, dims: (usize, usize) },

    #[error("{op}: expected a row or column vector, got shape {dims:?}")]
    NotVector { op: &'static str, dims: (usize, usize) },

    #[error("{op}: index {index} is out of range for {axis} (len {len})")]
    OutOfRange {
        op: &'static str,
        axis: Axis,
        index: usize,
        len: usize,
    },

    #[error("{op}: range along {axis} is inverted ({start} > {end})")]
    InvertedRange {
        op: &'static str,
        axis: Axis,
        start: usize,
        end: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
