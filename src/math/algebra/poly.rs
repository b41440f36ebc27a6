/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Closed form real roots up to degree four, and dispatch by degree.
//!
//! Every solver takes an `epsilon`.  A leading coefficient with magnitude
//! at most `epsilon` is dropped and the next lower degree solver is used;
//! a discriminant within `epsilon` of zero is treated as exactly zero, so
//! that nearly repeated roots come out as repeated roots.

use crate::bairstow::{quintic_roots, BairstowSettings};
use crate::newton::newton_secant_bisection;
use crate::scalar::signed_cbrt;
use ::ordered_float::NotNan;
use ::rand::{Rng, SeedableRng, rngs::StdRng};
use ::std::f64::consts::PI;

/// Seed used by [`roots`] for the random restarts of the quintic solver.
pub const DEFAULT_QUINTIC_SEED: u64 = 0x5EED;

/// Degree after discarding negligible leading coefficients.
///
/// An empty slice and an all-negligible slice both have degree 0.
pub fn degree(coefficients: &[f64], epsilon: f64) -> usize {
    let leading_negligible = coefficients.iter()
        .take_while(|c| c.abs() <= epsilon)
        .count();
    coefficients.len().saturating_sub(leading_negligible + 1)
}

/// Horner evaluation.
pub fn evaluate(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Coefficients of the derivative.  A constant differentiates to `[]`.
pub fn derivative(coefficients: &[f64]) -> Vec<f64> {
    let n = coefficients.len().saturating_sub(1);
    coefficients[..n].iter().enumerate()
        .map(|(i, &c)| c * (n - i) as f64)
        .collect()
}

/// Real roots of any polynomial of degree at most five.
///
/// Leading coefficients within `epsilon` of zero are stripped before the
/// degree is decided, so `[0.0, 2.0, -4.0]` is the line `2x - 4` and
/// `[0.0, 0.0, 1.0]` is the constant `1`.  Polynomials of degree zero
/// (including the zero polynomial) and of degree above five have no
/// reported roots.
///
/// Degree five uses random restarts, seeded with [`DEFAULT_QUINTIC_SEED`] so
/// that the result is reproducible; see [`roots_with_rng`] to supply your own
/// generator.
pub fn roots(coefficients: &[f64], epsilon: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(DEFAULT_QUINTIC_SEED);
    roots_with_rng(coefficients, epsilon, &mut rng, &BairstowSettings::default())
}

pub fn roots_with_rng<R: Rng + ?Sized>(
    coefficients: &[f64],
    epsilon: f64,
    rng: &mut R,
    settings: &BairstowSettings,
) -> Vec<f64> {
    let deg = degree(coefficients, epsilon);
    let c = &coefficients[coefficients.len().saturating_sub(deg + 1)..];
    match deg {
        0 => vec![],
        1 => linear_roots(c[0], c[1], epsilon),
        2 => quadratic_roots(c[0], c[1], c[2], epsilon),
        3 => cubic_roots(c[0], c[1], c[2], c[3], epsilon),
        4 => quartic_roots(c[0], c[1], c[2], c[3], c[4], epsilon),
        5 => {
            let c = [c[0], c[1], c[2], c[3], c[4], c[5]];
            quintic_roots(c, epsilon, rng, settings).unwrap_or_else(|e| {
                warn!("{}; reporting no roots for {:?}", e, coefficients);
                vec![]
            })
        },
        _ => {
            debug!("no solver for degree {}; reporting no roots", deg);
            vec![]
        },
    }
}

/// Root of `a x + b`.  Empty if `a` is negligible.
pub fn linear_roots(a: f64, b: f64, epsilon: f64) -> Vec<f64> {
    if a.abs() <= epsilon {
        return vec![];
    }
    vec![-b / a]
}

/// Real roots of `a x² + b x + c`.
///
/// Two distinct roots come out in the order `(-b + √Δ)/2a`, `(-b - √Δ)/2a`.
/// A double root is reported twice.
pub fn quadratic_roots(a: f64, b: f64, c: f64, epsilon: f64) -> Vec<f64> {
    if a.abs() <= epsilon {
        return linear_roots(b, c, epsilon);
    }
    let disc = snap(b * b - 4.0 * a * c, epsilon);
    if disc < 0.0 {
        return vec![];
    }
    if disc == 0.0 {
        let x = -b / (2.0 * a);
        return vec![x, x];
    }

    // avoid cancellation between -b and √Δ by never subtracting them
    let sqrt_disc = disc.sqrt();
    if b < 0.0 {
        let q = 0.5 * (-b + sqrt_disc);
        vec![q / a, c / q]
    } else {
        let q = -0.5 * (b + sqrt_disc);
        vec![c / q, q / a]
    }
}

/// Real roots of `a x³ + b x² + c x + d`, with multiplicity.
pub fn cubic_roots(a: f64, b: f64, c: f64, d: f64, epsilon: f64) -> Vec<f64> {
    if a.abs() <= epsilon {
        return quadratic_roots(b, c, d, epsilon);
    }
    let (b, c, d) = (b / a, c / a, d / a);

    // x = t - b/3 gives the depressed cubic t³ + p t + q
    let shift = -b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    let disc = snap((q / 2.0).powi(2) + (p / 3.0).powi(3), epsilon);

    if disc > 0.0 {
        let sqrt_disc = disc.sqrt();
        let u = signed_cbrt(-q / 2.0 + sqrt_disc);
        let v = signed_cbrt(-q / 2.0 - sqrt_disc);
        vec![u + v + shift]
    } else if disc == 0.0 {
        if p.abs() <= epsilon {
            vec![shift; 3]
        } else {
            let single = 3.0 * q / p;
            let double = -3.0 * q / (2.0 * p);
            vec![single + shift, double + shift, double + shift]
        }
    } else {
        // three distinct real roots; p < 0 is implied
        let r = 2.0 * (-p / 3.0).sqrt();
        let cos_arg = (3.0 * q / (2.0 * p) * (-3.0 / p).sqrt()).max(-1.0).min(1.0);
        let phi = cos_arg.acos() / 3.0;
        (0..3)
            .map(|k| r * (phi - 2.0 * PI * k as f64 / 3.0).cos() + shift)
            .collect()
    }
}

/// Real roots of `a x⁴ + b x³ + c x² + d x + e`, with multiplicity.
pub fn quartic_roots(a: f64, b: f64, c: f64, d: f64, e: f64, epsilon: f64) -> Vec<f64> {
    if a.abs() <= epsilon {
        return cubic_roots(b, c, d, e, epsilon);
    }
    let (b, c, d, e) = (b / a, c / a, d / a, e / a);

    // x = y - b/4 gives the depressed quartic y⁴ + p y² + q y + r
    let shift = -b / 4.0;
    let b2 = b * b;
    let p = c - 3.0 * b2 / 8.0;
    let q = d - b * c / 2.0 + b2 * b / 8.0;
    let r = e - b * d / 4.0 + b2 * c / 16.0 - 3.0 * b2 * b2 / 256.0;

    let mut ys = match biquadratic_split(p, q, r, epsilon) {
        Some(m) => {
            let s = (2.0 * m).sqrt();
            let mut ys = quadratic_roots(1.0, -s, p / 2.0 + m + q / (2.0 * s), epsilon);
            ys.extend(quadratic_roots(1.0, s, p / 2.0 + m - q / (2.0 * s), epsilon));
            ys
        },
        None => {
            let mut ys = vec![];
            for z in quadratic_roots(1.0, p, r, epsilon) {
                if z.abs() <= epsilon {
                    ys.extend(&[0.0, 0.0]);
                } else if z > 0.0 {
                    ys.extend(&[z.sqrt(), -z.sqrt()]);
                }
            }
            ys
        },
    };
    for y in &mut ys {
        *y += shift;
    }
    ys
}

/// Ferrari's `m`, such that the depressed quartic factors into two real
/// quadratics in `y` with `y² ± √(2m) y`.
///
/// `None` means the quartic is biquadratic (or close enough that `m` cannot
/// be told apart from zero), and should be solved as a quadratic in `y²`.
fn biquadratic_split(p: f64, q: f64, r: f64, epsilon: f64) -> Option<f64> {
    if q.abs() <= epsilon {
        return None;
    }
    let resolvent = cubic_roots(1.0, p, p * p / 4.0 - r, -q * q / 8.0, epsilon);
    let m = resolvent.into_iter()
        .filter_map(|m| NotNan::new(m).ok())
        .max()?
        .into_inner();
    if m <= epsilon {
        debug!("quartic resolvent has no positive root (max {}); treating as biquadratic", m);
        return None;
    }
    Some(m)
}

/// Refine approximate roots with a few Newton steps each.
///
/// A root that fails to refine (flat derivative, non-finite value) is
/// returned unchanged.
pub fn polish_roots(coefficients: &[f64], roots: &[f64], max_iterations: u32) -> Vec<f64> {
    let slope = derivative(coefficients);
    roots.iter().map(|&x0| {
        let polished = newton_secant_bisection(
            x0,
            |x| evaluate(coefficients, x),
            |x| evaluate(&slope, x),
            max_iterations,
            None,
        );
        match polished {
            Ok(x) if x.is_finite() && (x - x0).abs() <= 1e-3 * (1.0 + x0.abs()) => x,
            Ok(x) => {
                debug!("discarding polished root {} that strayed from {}", x, x0);
                x0
            },
            Err(e) => {
                trace!("could not polish root {}: {}", x0, e);
                x0
            },
        }
    }).collect()
}

#[inline]
fn snap(x: f64, epsilon: f64) -> f64 {
    if x.abs() <= epsilon { 0.0 } else { x }
}
