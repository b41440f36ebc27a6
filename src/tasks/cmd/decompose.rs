/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use super::{outcome, write_outcome, Outcome, Rows};
use crate::FailResult;
use ::mathkern_linalg::{
    adjoint, cholesky, decompose_lu, decompose_plu, determinant, inverse,
    COFACTOR_MAX_DIM,
};
use ::mathkern_matrix::Matrix;
use ::mathkern_tasks_config::Settings;
use ::std::fmt;

/// Every factorization of a square matrix that applies to it.
///
/// A factorization that fails for numerical reasons (a zero pivot, a
/// singular factor) is recorded in place instead of aborting the report.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct DecomposeReport {
    pub matrix: Rows,
    pub lu: Outcome<LuFactors>,
    pub plu: Outcome<PluFactors>,
    pub cholesky: CholeskyFactors,
    pub determinant: Outcome<f64>,
    pub inverse: Outcome<Rows>,
    /// Only computed up to the cofactor size limit.
    pub adjoint: Outcome<Rows>,
}

#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors {
    pub lower: Rows,
    pub upper: Rows,
}

#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct PluFactors {
    pub perm: Vec<usize>,
    pub lower: Rows,
    pub upper: Rows,
}

#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct CholeskyFactors {
    pub positive_definite: bool,
    pub verified: bool,
    pub lower: Rows,
}

pub fn run_decompose(a: &Matrix, settings: &Settings) -> FailResult<DecomposeReport> {
    let n = a.require_square("decompose")?;
    let acc = settings.accuracy;
    let rows = |m: &Matrix| Rows(m.round(acc));

    let lu = outcome(decompose_lu(a)).map(|lu| LuFactors {
        lower: rows(&lu.lower),
        upper: rows(&lu.upper),
    });
    if let Err(e) = &lu {
        debug!("LU without pivoting failed: {}", e);
    }

    let plu = outcome(decompose_plu(a)).map(|plu| PluFactors {
        perm: plu.perm,
        lower: rows(&plu.lower),
        upper: rows(&plu.upper),
    });

    let chol = cholesky(a, acc)?;
    if !chol.positive_definite {
        info!("matrix is not positive definite");
    }
    let cholesky = CholeskyFactors {
        positive_definite: chol.positive_definite,
        verified: chol.verified,
        lower: rows(&chol.lower),
    };

    let determinant = outcome(determinant(a)).map(|d| ::mathkern_matrix::round_to(d, acc));
    let inverse = outcome(inverse(a)).map(|m| rows(&m));
    let adjoint = match n {
        n if n <= COFACTOR_MAX_DIM => outcome(adjoint(a)).map(|m| rows(&m)),
        n => Err(format!("skipped for {}x{} (limit is {})", n, n, COFACTOR_MAX_DIM)),
    };

    Ok(DecomposeReport {
        matrix: rows(a),
        lu, plu, cholesky, determinant, inverse, adjoint,
    })
}

impl fmt::Display for LuFactors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "  L =\n{}  U =\n{}", self.lower, self.upper) }
}

impl fmt::Display for PluFactors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "  perm = {:?}\n  L =\n{}  U =\n{}", self.perm, self.lower, self.upper) }
}

impl fmt::Display for DecomposeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix:\n{}", self.matrix)?;
        write_outcome(f, "lu", &self.lu)?;
        write_outcome(f, "plu", &self.plu)?;
        writeln!(f, "cholesky: positive definite = {}, verified = {}",
            self.cholesky.positive_definite, self.cholesky.verified)?;
        write!(f, "  L =\n{}", self.cholesky.lower)?;
        match &self.determinant {
            Ok(d) => writeln!(f, "determinant: {}", d)?,
            Err(e) => writeln!(f, "determinant: unavailable ({})", e)?,
        }
        write_outcome(f, "inverse", &self.inverse)?;
        write_outcome(f, "adjoint", &self.adjoint)
    }
}
