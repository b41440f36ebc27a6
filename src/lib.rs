/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Closed-form polynomial roots and small dense linear algebra.
//!
//! This crate only re-exports the workspace members; see each of them for
//! documentation.

pub use mathkern_slice_math as slice_math;
pub use mathkern_matrix as matrix;
pub use mathkern_algebra as algebra;
pub use mathkern_linalg as linalg;
pub use mathkern_tasks_config as config;

pub use mathkern_matrix::{Matrix, MatrixError};
pub use mathkern_linalg::LinalgError;
