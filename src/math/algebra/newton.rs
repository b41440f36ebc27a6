/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Safeguarded Newton iteration for a single scalar root.

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum RootFindError {
    #[error("lower bound {min} is above upper bound {max}")]
    InvertedBounds { min: f64, max: f64 },

    #[error("function has the same sign at both bounds: f({min}) = {f_min}, f({max}) = {f_max}")]
    SameSignBounds { min: f64, max: f64, f_min: f64, f_max: f64 },

    #[error("derivative vanished at x = {x} before any usable slope was seen")]
    ZeroDerivative { x: f64 },

    #[error("iteration produced a non-finite value near x = {x}")]
    NonFinite { x: f64 },
}

/// A point where the function has been evaluated.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Sample { x: f64, value: f64 }

/// Points where the function is known to be `<= 0` and `>= 0`.
///
/// `neg.x` may lie on either side of `pos.x`.
#[derive(Debug, Copy, Clone)]
struct Bracket { neg: Sample, pos: Sample }

impl Bracket {
    fn lo(&self) -> f64 { f64::min(self.neg.x, self.pos.x) }
    fn hi(&self) -> f64 { f64::max(self.neg.x, self.pos.x) }

    fn contains_strictly(&self, x: f64) -> bool { self.lo() < x && x < self.hi() }

    fn tighten(&mut self, sample: Sample) {
        if !self.contains_strictly(sample.x) {
            return;
        }
        match sample.value < 0.0 {
            true => self.neg = sample,
            false => self.pos = sample,
        }
    }

    /// Take the Newton step if it stays inside, else a regula falsi step,
    /// else bisect.
    fn choose(&self, newton: f64) -> f64 {
        if self.contains_strictly(newton) {
            return newton;
        }
        let Bracket { neg, pos } = *self;
        let secant = neg.x - neg.value * (pos.x - neg.x) / (pos.value - neg.value);
        if self.contains_strictly(secant) {
            trace!("newton step {} left the bracket; using secant {}", newton, secant);
            return secant;
        }
        let mid = 0.5 * (self.lo() + self.hi());
        trace!("newton step {} left the bracket; bisecting to {}", newton, mid);
        mid
    }
}

/// Find a root of `f` by Newton's method, starting at `x0`.
///
/// When `bounds` is given, `f` must change sign across them.  The iteration
/// then keeps a sign bracket, and any Newton step that would leave it is
/// replaced by a secant step (or failing that, by bisection).
///
/// Where `df` evaluates to exactly zero, the last nonzero slope is reused.
///
/// Iteration stops when `f(x)` is exactly zero, when a step is smaller than
/// a few ulps of `x`, or after `max_iterations` steps.  In the last case the
/// latest iterate is returned; the caller decides whether it is good enough.
pub fn newton_secant_bisection<F, D>(
    x0: f64,
    mut f: F,
    mut df: D,
    max_iterations: u32,
    bounds: Option<(f64, f64)>,
) -> Result<f64, RootFindError>
where
    F: FnMut(f64) -> f64,
    D: FnMut(f64) -> f64,
{
    let mut x = x0;
    let mut bracket = match bounds {
        None => None,
        Some((min, max)) => {
            if min > max {
                return Err(RootFindError::InvertedBounds { min, max });
            }
            let (f_min, f_max) = (f(min), f(max));
            if f_min == 0.0 {
                return Ok(min);
            }
            if f_max == 0.0 {
                return Ok(max);
            }
            if f_min.signum() == f_max.signum() {
                return Err(RootFindError::SameSignBounds { min, max, f_min, f_max });
            }

            let lo = Sample { x: min, value: f_min };
            let hi = Sample { x: max, value: f_max };
            let bracket = match f_min < 0.0 {
                true => Bracket { neg: lo, pos: hi },
                false => Bracket { neg: hi, pos: lo },
            };
            if !(min <= x && x <= max) {
                x = 0.5 * (min + max);
            }
            Some(bracket)
        },
    };

    let mut last_slope = None;
    for iteration in 0..max_iterations {
        let value = f(x);
        if !value.is_finite() {
            return Err(RootFindError::NonFinite { x });
        }
        if value == 0.0 {
            return Ok(x);
        }
        if let Some(bracket) = bracket.as_mut() {
            bracket.tighten(Sample { x, value });
        }

        let slope = match df(x) {
            s if s == 0.0 => last_slope.ok_or(RootFindError::ZeroDerivative { x })?,
            s => {
                last_slope = Some(s);
                s
            },
        };

        let newton = x - value / slope;
        let next = match &bracket {
            Some(bracket) => bracket.choose(newton),
            None => newton,
        };
        trace!("NSB-iter {:>3}:  x: {:<23e}  f: {:<23e}", iteration, next, value);
        if !next.is_finite() {
            return Err(RootFindError::NonFinite { x });
        }

        let step = (next - x).abs();
        x = next;
        if step <= 4.0 * ::std::f64::EPSILON * x.abs() {
            return Ok(x);
        }
    }
    debug!("newton_secant_bisection: stopped at iteration limit ({}), x = {}", max_iterations, x);
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(x: f64) -> f64 { x * x * x - 2.0 * x - 5.0 }
    fn cubic_slope(x: f64) -> f64 { 3.0 * x * x - 2.0 }

    #[test]
    fn bracket_step_choice() {
        let bracket = Bracket {
            neg: Sample { x: 0.0, value: -1.0 },
            pos: Sample { x: 1.0, value: 3.0 },
        };
        assert_eq!(bracket.choose(0.75), 0.75);
        assert_eq!(bracket.choose(5.0), 0.25);

        // the secant point rounds onto the positive end
        let bracket = Bracket {
            neg: Sample { x: 0.0, value: -1e300 },
            pos: Sample { x: 1.0, value: 1e-300 },
        };
        assert_eq!(bracket.choose(5.0), 0.5);
        assert_eq!(bracket.choose(-5.0), 0.5);

        // same with the bracket reversed
        let bracket = Bracket {
            neg: Sample { x: 1.0, value: -1e-300 },
            pos: Sample { x: 0.0, value: 1e300 },
        };
        assert_eq!(bracket.choose(f64::NAN), 0.5);
    }

    #[test]
    fn unbounded_newton() {
        let root = newton_secant_bisection(2.0, cubic, cubic_slope, 50, None).unwrap();
        assert_close!(abs=1e-12, root, 2.0945514815423265);

        let root = newton_secant_bisection(1.0, |x| x * x - 2.0, |x| 2.0 * x, 50, None).unwrap();
        assert_close!(root, ::std::f64::consts::SQRT_2);
    }

    #[test]
    fn bounded_stays_in_bracket() {
        let _ = ::env_logger::try_init();
        // the first Newton step from x0 = 0 would land at -2.5
        let root = newton_secant_bisection(0.0, cubic, cubic_slope, 100, Some((-2.0, 3.0))).unwrap();
        assert_close!(abs=1e-12, root, 2.0945514815423265);

        // an x0 outside the bounds is replaced by the midpoint
        let root = newton_secant_bisection(
            100.0, |x| x.sin(), |x| x.cos(), 100, Some((3.0, 4.0)),
        ).unwrap();
        assert_close!(root, ::std::f64::consts::PI);
    }

    #[test]
    fn bounds_at_a_root() {
        let f = |x: f64| x - 1.0;
        assert_eq!(newton_secant_bisection(0.5, f, |_| 1.0, 10, Some((1.0, 2.0))), Ok(1.0));
        assert_eq!(newton_secant_bisection(0.5, f, |_| 1.0, 10, Some((0.0, 1.0))), Ok(1.0));
    }

    #[test]
    fn bad_bounds() {
        assert_eq!(
            newton_secant_bisection(0.0, cubic, cubic_slope, 10, Some((3.0, 2.0))),
            Err(RootFindError::InvertedBounds { min: 3.0, max: 2.0 }),
        );
        match newton_secant_bisection(0.0, |x| x * x + 1.0, |x| 2.0 * x, 10, Some((-1.0, 1.0))) {
            Err(RootFindError::SameSignBounds { f_min, f_max, .. }) => {
                assert_eq!((f_min, f_max), (2.0, 2.0));
            },
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn zero_derivative() {
        // flat at the start, with nothing to fall back on
        assert_eq!(
            newton_secant_bisection(0.0, |x| x * x - 1.0, |x| 2.0 * x, 10, None),
            Err(RootFindError::ZeroDerivative { x: 0.0 }),
        );

        // after the first step the slope keeps reporting zero; the first
        // slope is reused, turning this into a chord iteration
        let mut calls = 0;
        let df = |x: f64| {
            calls += 1;
            if calls == 1 { 2.0 * x } else { 0.0 }
        };
        let root = newton_secant_bisection(1.0, |x| x * x - 2.0, df, 200, None).unwrap();
        assert_close!(root, ::std::f64::consts::SQRT_2);
    }

    #[test]
    fn iteration_limit_returns_last_iterate() {
        assert_eq!(newton_secant_bisection(3.0, cubic, cubic_slope, 0, None), Ok(3.0));

        let x = newton_secant_bisection(3.0, cubic, cubic_slope, 1, None).unwrap();
        assert_close!(x, 3.0 - cubic(3.0) / cubic_slope(3.0));
    }

    #[test]
    fn non_finite() {
        let err = newton_secant_bisection(1.0, |x| 1.0 / (x - 1.0), |_| 1.0, 10, None);
        assert_eq!(err, Err(RootFindError::NonFinite { x: 1.0 }));
    }
}
