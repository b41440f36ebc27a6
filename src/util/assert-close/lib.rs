/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality assertions for floating point data.
//!
//! ```
//! # #[macro_use] extern crate mathkern_assert_close;
//! # fn main() {
//! assert_close!(abs=1e-12, 0.1 + 0.2, 0.3);
//! assert_close!(rel=1e-9, vec![1.0, 2.0], vec![1.0, 2.0 + 1e-12]);
//! # }
//! ```

use std::fmt;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::assert_close_impl!{@parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]]);
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut abs: f64;
            let mut rel: f64;
            $(
                $crate::assert_close_impl!{@stmt::assign [abs, rel] $assignment}
            )*

            let tol = $crate::Tolerances { abs, rel };
            if let Err(e) = $crate::CheckClose::check_close(&a, &b, tol) {
                panic!(
                    "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                    format!($($fmt)*), rel, abs, a, b, e,
                );
            }
        }
    };
    (@stmt::assign [$abs:ident, $rel:ident] [@abs $tol:expr]) => { $abs = $tol; };
    (@stmt::assign [$abs:ident, $rel:ident] [@rel $tol:expr]) => { $rel = $tol; };
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    pub fn abs(abs: f64) -> Self { Tolerances { abs, rel: 0.0 } }
    pub fn rel(rel: f64) -> Self { Tolerances { abs: 0.0, rel } }
}

impl Default for Tolerances {
    fn default() -> Self { Tolerances { abs: 0.0, rel: DEFAULT_NONZERO_TOL } }
}

/// The comparison used by every `CheckClose` impl for scalars.
///
/// Follows the semantics of Python's `math.isclose`, except that
/// the absolute tolerance is also applied to infinities of the same sign.
#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // also catches infinities of the same sign
    if a == b { return true; }

    if a.is_infinite() || b.is_infinite() { return false; }

    // NaN fails this comparison
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckCloseError {
    #[error("failed at index {index:?}:\n  left: {left:?}\n right: {right:?}\n   tol: {tol:?}")]
    Values {
        index: Option<usize>,
        left: f64,
        right: f64,
        tol: Tolerances,
    },
    #[error("length mismatch: {left} vs {right}")]
    Length { left: usize, right: usize },
}

impl CheckCloseError {
    fn at_index(self, i: usize) -> Self {
        match self {
            CheckCloseError::Values { index: None, left, right, tol } => {
                CheckCloseError::Values { index: Some(i), left, right, tol }
            },
            e => e,
        }
    }
}

/// Types whose values can be compared elementwise with tolerances.
pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    #[inline]
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError> {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError::Values {
                index: None,
                left: *self,
                right: *other,
                tol,
            }),
        }
    }
}

impl<'a, A, B> CheckClose<&'a B> for &'a A
where
    A: ?Sized + CheckClose<B>,
    B: ?Sized,
{
    fn check_close(&self, other: &&'a B, tol: Tolerances) -> Result<(), CheckCloseError>
    { (**self).check_close(*other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError> {
        if self.len() != other.len() {
            return Err(CheckCloseError::Length { left: self.len(), right: other.len() });
        }
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.at_index(i))?;
        }
        Ok(())
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(other, tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose<[T; N]> for Vec<T> {
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl fmt::Display for Tolerances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rel={}, abs={}", self.rel, self.abs)
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0,);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0, "{}", "with message");
    }

    #[test]
    fn containers() {
        assert_close!(abs=1e-12, vec![1.0, 2.0], vec![1.0, 2.0]);
        assert_close!(abs=1e-12, [1.0, 2.0, 3.0], [1.0, 2.0, 3.0 + 1e-13]);
        assert_close!(abs=1e-12, vec![0.5], [0.5]);
    }

    #[test]
    fn reports_index() {
        let err = [1.0, 2.0, 3.0].check_close(&[1.0, 2.5, 3.0], Tolerances::abs(1e-3));
        match err {
            Err(CheckCloseError::Values { index: Some(1), .. }) => {},
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let err = vec![1.0].check_close(&vec![1.0, 2.0], Tolerances::default());
        assert_eq!(err, Err(CheckCloseError::Length { left: 1, right: 2 }));
    }

    #[test]
    fn nan_is_never_close() {
        assert!(!is_close(f64::NAN, f64::NAN, Tolerances::abs(1.0)));
        assert!(is_close(f64::INFINITY, f64::INFINITY, Tolerances::abs(0.0)));
        assert!(!is_close(f64::INFINITY, f64::NEG_INFINITY, Tolerances::abs(1.0)));
    }

    #[test]
    #[should_panic]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
