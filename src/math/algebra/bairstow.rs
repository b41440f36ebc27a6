/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Lin–Bairstow iteration: peel real quadratic factors off a polynomial
//! until what remains can be solved in closed form.

use crate::poly::{derivative, linear_roots, quadratic_roots, quartic_roots, roots_with_rng};
use ::rand::Rng;

/// Iterations without convergence after which a factor search starts over
/// from a fresh random guess.
const RESEED_INTERVAL: u32 = 100;

/// Remainder coefficients at most this large relative to the dividend are
/// zero when taking the gcd of a polynomial with its derivative.
const GCD_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BairstowSettings {
    /// Iteration cap for each quadratic factor.
    pub max_iterations: u32,
    /// Relative size of the last update below which a factor is accepted.
    pub tolerance: f64,
}

impl Default for BairstowSettings {
    fn default() -> Self {
        BairstowSettings { max_iterations: 1000, tolerance: 1e-12 }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
#[error("no quadratic factor of a degree {degree} polynomial found in {iterations} iterations")]
pub struct NoConvergence {
    pub degree: usize,
    pub iterations: u32,
}

/// Real roots of `a x⁵ + b x⁴ + c x³ + d x² + e x + f`, with multiplicity.
///
/// `coefficients` is `[a, b, c, d, e, f]`.  If `a` is negligible this is
/// just the quartic solver.  Otherwise the roots are found numerically, and
/// the initial guesses come from `rng`.
///
/// A root of multiplicity two or more is split off first through the gcd
/// with the derivative, leaving two factors that are solved in closed form.
pub fn quintic_roots<R: Rng + ?Sized>(
    coefficients: [f64; 6],
    epsilon: f64,
    rng: &mut R,
    settings: &BairstowSettings,
) -> Result<Vec<f64>, NoConvergence> {
    let [a, b, c, d, e, f] = coefficients;
    if a.abs() <= epsilon {
        return Ok(quartic_roots(b, c, d, e, f, epsilon));
    }
    if let Some((square_free, repeated)) = repeated_factor(&coefficients) {
        debug!("quintic has a repeated factor {:?}", repeated);
        let mut roots = roots_with_rng(&square_free, epsilon, rng, settings);
        roots.extend(roots_with_rng(&repeated, epsilon, rng, settings));
        return Ok(roots);
    }
    bairstow_roots(&coefficients, epsilon, rng, settings)
}

/// Splits `p` into `p / g` and `g`, where `g` is the monic gcd of `p` and `p'`.
///
/// `None` when `g` is constant, i.e. when `p` has no repeated roots.
fn repeated_factor(p: &[f64]) -> Option<(Vec<f64>, Vec<f64>)> {
    let p = monic(p);
    let mut a = p.clone();
    let mut b = monic(&derivative(&p));
    loop {
        if b.len() < 2 {
            return None;
        }
        let (_, remainder) = long_divide(&a, &b);
        let scale = a.iter().fold(0.0, |acc: f64, c| acc.max(c.abs()));
        let remainder: Vec<f64> = remainder.into_iter()
            .skip_while(|c| c.abs() <= GCD_TOLERANCE * scale)
            .collect();
        if remainder.is_empty() {
            break;
        }
        a = b;
        b = monic(&remainder);
    }
    let (square_free, _) = long_divide(&p, &b);
    Some((square_free, b))
}

fn monic(p: &[f64]) -> Vec<f64> {
    p.iter().map(|c| c / p[0]).collect()
}

/// Quotient and remainder of `a / b`.  `b[0]` must be nonzero.
fn long_divide(a: &[f64], b: &[f64]) -> (Vec<f64>, Vec<f64>) {
    if a.len() < b.len() {
        return (vec![], a.to_vec());
    }
    let n = a.len() - b.len() + 1;
    let mut rem = a.to_vec();
    let mut quot = vec![0.0; n];
    for i in 0..n {
        let q = rem[i] / b[0];
        quot[i] = q;
        for (j, &bj) in b.iter().enumerate() {
            rem[i + j] -= q * bj;
        }
    }
    (quot, rem.split_off(n))
}

pub(crate) fn bairstow_roots<R: Rng + ?Sized>(
    coefficients: &[f64],
    epsilon: f64,
    rng: &mut R,
    settings: &BairstowSettings,
) -> Result<Vec<f64>, NoConvergence> {
    let lead = coefficients[0];
    let mut poly: Vec<f64> = coefficients.iter().map(|c| c / lead).collect();

    let mut roots = vec![];
    while poly.len() > 3 {
        let factor = find_quadratic_factor(&poly, rng, settings)?;
        trace!("quadratic factor x² + {:e} x + {:e}", factor.alpha, factor.beta);
        roots.extend(factor_roots(factor.alpha, factor.beta, epsilon, settings.tolerance));
        poly = factor.quotient;
    }
    match poly[..] {
        [a, b, c] => roots.extend(factor_roots(b / a, c / a, epsilon, settings.tolerance)),
        [a, b] => roots.extend(linear_roots(a, b, epsilon)),
        _ => {},
    }
    Ok(roots)
}

/// Roots of `x² + alpha x + beta`.
///
/// A discriminant that is small next to the coefficients is taken as a
/// double root that iteration error pushed off zero.
fn factor_roots(alpha: f64, beta: f64, epsilon: f64, tolerance: f64) -> Vec<f64> {
    let discriminant = alpha * alpha - 4.0 * beta;
    if discriminant.abs() <= tolerance.sqrt() * (alpha * alpha + beta.abs()) {
        return vec![-alpha / 2.0; 2];
    }
    quadratic_roots(1.0, alpha, beta, epsilon)
}

/// `x² + alpha x + beta`, along with what is left after dividing it out.
#[derive(Debug, Clone)]
struct QuadraticFactor {
    alpha: f64,
    beta: f64,
    quotient: Vec<f64>,
}

fn random_guess<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    (rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
}

/// Newton's method on the two-term remainder of dividing `a` by `x² - r x - s`.
///
/// `a` must be monic-ish (any nonzero leading coefficient) of degree at least 3.
fn find_quadratic_factor<R: Rng + ?Sized>(
    a: &[f64],
    rng: &mut R,
    settings: &BairstowSettings,
) -> Result<QuadraticFactor, NoConvergence> {
    let n = a.len() - 1;
    debug_assert!(n >= 3);

    // b: synthetic division of a; c: synthetic division of b.
    // c supplies the partial derivatives of the remainder b[n-1], b[n].
    let mut b = vec![0.0; n + 1];
    let mut c = vec![0.0; n];

    let (mut r, mut s) = random_guess(rng);
    for iteration in 0..settings.max_iterations {
        if iteration > 0 && iteration % RESEED_INTERVAL == 0 {
            trace!("Bairstow: restarting after {} iterations", iteration);
            let guess = random_guess(rng);
            r = guess.0;
            s = guess.1;
        }

        divide_quadratic(a, r, s, &mut b);
        divide_quadratic(&b[..n], r, s, &mut c);

        let det = c[n - 2] * c[n - 2] - c[n - 1] * c[n - 3];
        if det == 0.0 || !det.is_finite() {
            let guess = random_guess(rng);
            r = guess.0;
            s = guess.1;
            continue;
        }
        let dr = (-b[n - 1] * c[n - 2] + b[n] * c[n - 3]) / det;
        let ds = (-b[n] * c[n - 2] + b[n - 1] * c[n - 1]) / det;
        r += dr;
        s += ds;
        if !(r.is_finite() && s.is_finite()) {
            let guess = random_guess(rng);
            r = guess.0;
            s = guess.1;
            continue;
        }

        if dr.abs() + ds.abs() <= settings.tolerance * (1.0 + r.abs() + s.abs()) {
            trace!("Bairstow: converged in {} iterations", iteration + 1);
            divide_quadratic(a, r, s, &mut b);
            return Ok(QuadraticFactor {
                alpha: -r,
                beta: -s,
                quotient: b[..n - 1].to_vec(),
            });
        }
    }
    Err(NoConvergence { degree: n, iterations: settings.max_iterations })
}

/// Synthetic division by `x² - r x - s`.
///
/// `out[..len-2]` receives the quotient and the last two entries the
/// remainder terms.
fn divide_quadratic(a: &[f64], r: f64, s: f64, out: &mut [f64]) {
    assert_eq!(a.len(), out.len());
    for i in 0..a.len() {
        let prev1 = if i >= 1 { out[i - 1] } else { 0.0 };
        let prev2 = if i >= 2 { out[i - 2] } else { 0.0 };
        out[i] = a[i] + r * prev1 + s * prev2;
    }
}
