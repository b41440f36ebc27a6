/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use super::Rows;
use crate::FailResult;
use ::mathkern_linalg::spectral::{
    characteristic_polynomial, eigen_info, eigenvalues, sigma_matrix, singular_values,
};
use ::mathkern_linalg::MAX_EIGENVALUE_DIM;
use ::mathkern_matrix::{arith, Matrix};
use ::mathkern_slice_math::vround;
use ::mathkern_tasks_config::Settings;
use ::rand::{SeedableRng, rngs::StdRng};
use ::std::fmt;

/// Singular value data for `A`, derived from the eigenvalues of `AᵗA`.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumReport {
    pub gram: Rows,
    pub characteristic_polynomial: Vec<f64>,
    pub eigenvalues: Vec<f64>,
    pub multiplicities: Vec<usize>,
    pub singular_values: Vec<f64>,
    pub sigma: Rows,
}

pub fn run_spectrum(a: &Matrix, settings: &Settings) -> FailResult<SpectrumReport> {
    let (rows, cols) = a.dims();
    if cols > MAX_EIGENVALUE_DIM {
        bail!(
            "matrix has {} columns, but at most {} are supported \
             (eigenvalues come from a polynomial of that degree)",
            cols, MAX_EIGENVALUE_DIM,
        );
    }
    let acc = settings.accuracy;

    let gram = arith::mul(&a.to_transpose(), a)?;
    let charpoly = characteristic_polynomial(&gram)?;

    let mut rng = StdRng::seed_from_u64(settings.quintic.seed);
    let bairstow = settings.quintic.bairstow_settings();
    let values = eigenvalues(&gram, settings.epsilon, &mut rng, &bairstow)?;
    if values.len() < cols {
        warn!(
            "found {} of {} eigenvalues of the symmetric matrix AᵗA; \
             try a larger epsilon or quintic tolerance",
            values.len(), cols,
        );
    }

    let info = eigen_info(&values, acc);
    let mut singular = singular_values(&values, acc);
    // AᵗA has at least cols - rows zero eigenvalues that are not singular values of A
    singular.truncate(usize::min(rows, cols));
    let sigma = sigma_matrix(&singular, rows, cols)?;

    Ok(SpectrumReport {
        gram: Rows(gram.round(acc)),
        characteristic_polynomial: vround(&charpoly, acc),
        eigenvalues: info.values,
        multiplicities: info.multiplicities,
        singular_values: singular,
        sigma: Rows(sigma),
    })
}

impl fmt::Display for SpectrumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AᵗA:\n{}", self.gram)?;
        writeln!(f, "characteristic polynomial: {:?}", self.characteristic_polynomial)?;
        write!(f, "eigenvalues:")?;
        for (value, count) in self.eigenvalues.iter().zip(&self.multiplicities) {
            write!(f, " {} (x{})", value, count)?;
        }
        writeln!(f)?;
        writeln!(f, "singular values: {:?}", self.singular_values)?;
        write!(f, "sigma:\n{}", self.sigma)
    }
}
