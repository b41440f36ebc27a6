/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Math utils for variable length contiguous vectors.
//!
//! Also home to the decimal rounding step that every equality
//! and zero-ness test in mathkern goes through.

// Restricted to 'f64', same as the rest of the kernel.

#[cfg(test)]
#[macro_use]
extern crate mathkern_assert_close;

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, thiserror::Error)]
#[error("cannot normalize a vector of norm {0}")]
pub struct BadNorm(pub f64);

/// Accuracies at or above this leave values untouched.
///
/// (an f64 only carries ~15.9 significant decimal digits, so rounding to
///  more places than this can only make things worse)
pub const NO_ROUNDING: u32 = 15;

/// Round to `accuracy` decimal places, half away from zero.
///
/// Returns `x` unchanged when `accuracy >= NO_ROUNDING`, or when `x`
/// is large enough that the scaled value would not be finite.
#[inline]
pub fn round_to(x: f64, accuracy: u32) -> f64 {
    if accuracy >= NO_ROUNDING {
        return x;
    }
    let scale = 10f64.powi(accuracy as i32);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    // normalize -0.0 so that rounded values compare and print consistently
    match scaled.round() / scale {
        r if r == 0.0 => 0.0,
        r => r,
    }
}

/// Elementwise `round_to`.
pub fn vround(u: &[f64], accuracy: u32) -> Vec<f64> {
    u.iter().map(|&x| round_to(x, accuracy)).collect()
}

/// Elementwise equality after rounding.  Vectors of different length are never equal.
pub fn vectors_equal(u: &[f64], w: &[f64], accuracy: u32) -> bool {
    u.len() == w.len()
        && u.iter().zip(w).all(|(&a, &b)| round_to(a, accuracy) == round_to(b, accuracy))
}

//------------------------
// Math

/// Inner product.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn vdot(u: &[f64], w: &[f64]) -> f64 {
    assert_eq!(u.len(), w.len(), "vdot: length mismatch");
    u.iter().zip(w).map(|(a, b)| a * b).sum()
}

pub fn vsqnorm(u: &[f64]) -> f64 { vdot(u, u) }
pub fn vnorm(u: &[f64]) -> f64 { vdot(u, u).sqrt() }

pub fn vnormalize(u: &[f64]) -> Result<Vec<f64>, BadNorm> {
    let norm = vnorm(u);
    let recip = norm.recip();
    if !recip.is_normal() {
        return Err(BadNorm(norm));
    }

    Ok(vscale(recip, u))
}

pub fn vscale(s: f64, u: &[f64]) -> Vec<f64> {
    u.iter().map(|&x| s * x).collect()
}

pub fn vsub(u: &[f64], w: &[f64]) -> Vec<f64> {
    assert_eq!(u.len(), w.len(), "vsub: length mismatch");
    u.iter().zip(w).map(|(a, b)| a - b).collect()
}

//---------------------------
