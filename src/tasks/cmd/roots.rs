/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::ui::color::{NullPainter, PaintAs};
use ::mathkern_algebra::{degree, evaluate, polish_roots, roots_with_rng};
use ::mathkern_tasks_config::Settings;
use ::rand::{SeedableRng, rngs::StdRng};
use ::std::fmt;

/// Highest degree with a solver.
const MAX_DEGREE: usize = 5;

#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct RootsReport {
    pub coefficients: Vec<f64>,
    pub degree: usize,
    pub roots: Vec<RootEntry>,
}

#[derive(Serialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootEntry {
    pub root: f64,
    /// `p(root)`
    pub residual: f64,
}

pub fn run_roots(coefficients: &[f64], settings: &Settings) -> FailResult<RootsReport> {
    ensure!(!coefficients.is_empty(), "no coefficients given");
    ensure!(
        coefficients.iter().all(|c| c.is_finite()),
        "coefficients must be finite (got {:?})", coefficients,
    );

    let deg = degree(coefficients, settings.epsilon);
    if deg > MAX_DEGREE {
        bail!("degree {} is above {}, the highest degree with a solver", deg, MAX_DEGREE);
    }

    let mut rng = StdRng::seed_from_u64(settings.quintic.seed);
    let bairstow = settings.quintic.bairstow_settings();
    let mut roots = roots_with_rng(coefficients, settings.epsilon, &mut rng, &bairstow);
    if settings.polish && settings.newton.max_iterations > 0 {
        roots = polish_roots(coefficients, &roots, settings.newton.max_iterations);
    }
    info!("degree {} polynomial has {} real root(s)", deg, roots.len());

    let roots = roots.into_iter()
        .map(|root| RootEntry { root, residual: evaluate(coefficients, root) })
        .collect();
    Ok(RootsReport { coefficients: coefficients.to_vec(), degree: deg, roots })
}

impl RootsReport {
    /// Text form, with residuals styled by `painter`.
    pub fn render(&self, painter: &dyn PaintAs<String, f64>) -> String {
        let mut out = format!("degree: {}\n", self.degree);
        if self.roots.is_empty() {
            out.push_str("no real roots\n");
        }
        for entry in &self.roots {
            let residual = painter.paint_as(&entry.residual, format!("{:.3e}", entry.residual));
            out.push_str(&format!("x = {:<24}  p(x) = {}\n", entry.root, residual));
        }
        out
    }
}

impl fmt::Display for RootsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { f.write_str(&self.render(&NullPainter)) }
}
