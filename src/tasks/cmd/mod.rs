/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The computations behind each binary, returning serializable reports.
//!
//! Nothing here prints; `entry_points` decides between text and JSON.

use ::mathkern_matrix::Matrix;
use ::serde::{Serialize, Serializer};
use ::std::fmt;

pub use self::roots::{run_roots, RootsReport, RootEntry};
pub mod roots;

pub use self::decompose::{run_decompose, DecomposeReport};
pub mod decompose;

pub use self::spectrum::{run_spectrum, SpectrumReport};
pub mod spectrum;

/// A result that failed for a reason worth reporting rather than aborting.
pub type Outcome<T> = Result<T, String>;

fn outcome<T, E: fmt::Display>(r: Result<T, E>) -> Outcome<T>
{ r.map_err(|e| e.to_string()) }

/// A matrix that serializes as a list of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Rows(pub Matrix);

impl Serialize for Rows {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    { self.0.to_rows().serialize(serializer) }
}

impl fmt::Display for Rows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.0.to_string().lines() {
            writeln!(f, "    {}", line)?;
        }
        Ok(())
    }
}

fn write_outcome<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &Outcome<T>,
) -> fmt::Result {
    match value {
        Ok(x) => write!(f, "{}:\n{}", label, x),
        Err(e) => writeln!(f, "{}: unavailable ({})", label, e),
    }
}
