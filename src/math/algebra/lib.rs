/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Scalar helpers and real root finding for univariate polynomials.
//!
//! Polynomials are given as coefficient slices with the **leading**
//! coefficient first, so `[1.0, -3.0, 2.0]` is `x² - 3x + 2`.
//!
//! Only real roots are ever reported.  Repeated roots are reported once per
//! multiplicity, complex roots are silently dropped.

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate mathkern_assert_close;

mod scalar;
mod newton;
mod poly;
mod bairstow;

pub use crate::scalar::{signed_pow, real_root, signed_cbrt};
pub use crate::newton::{newton_secant_bisection, RootFindError};
pub use crate::poly::{
    degree, evaluate, derivative,
    roots, roots_with_rng, polish_roots,
    linear_roots, quadratic_roots, cubic_roots, quartic_roots,
    DEFAULT_QUINTIC_SEED,
};
pub use crate::bairstow::{quintic_roots, BairstowSettings, NoConvergence};

/// Default cutoff below which a coefficient or discriminant is treated as zero.
pub const DEFAULT_EPSILON: f64 = 1e-12;
