/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Types that make up the config file.
//!
//! Every field has a default, so an empty document is a valid config.

#![allow(non_snake_case)]

use ::mathkern_algebra::{BairstowSettings, DEFAULT_EPSILON, DEFAULT_QUINTIC_SEED};

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Coefficients and discriminants at most this large are treated as zero.
    #[serde(default = "settings__epsilon")]
    pub epsilon: f64,

    /// Decimal places kept when comparing or printing results.
    #[serde(default = "settings__accuracy")]
    pub accuracy: u32,

    #[serde(default)]
    pub quintic: Quintic,

    #[serde(default)]
    pub newton: Newton,

    /// Refine closed form roots with a few Newton steps.
    #[serde(default = "settings__polish")]
    pub polish: bool,
}
fn settings__epsilon() -> f64 { DEFAULT_EPSILON }
fn settings__accuracy() -> u32 { 10 }
fn settings__polish() -> bool { true }

impl Default for Settings {
    fn default() -> Self {
        Settings {
            epsilon: settings__epsilon(),
            accuracy: settings__accuracy(),
            quintic: Default::default(),
            newton: Default::default(),
            polish: settings__polish(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Quintic {
    /// Iteration cap for each quadratic factor.
    #[serde(default = "quintic__max_iterations")]
    pub max_iterations: u32,

    #[serde(default = "quintic__tolerance")]
    pub tolerance: f64,

    /// Seed for the random initial guesses.
    #[serde(default = "quintic__seed")]
    pub seed: u64,
}
fn quintic__max_iterations() -> u32 { BairstowSettings::default().max_iterations }
fn quintic__tolerance() -> f64 { BairstowSettings::default().tolerance }
fn quintic__seed() -> u64 { DEFAULT_QUINTIC_SEED }

impl Default for Quintic {
    fn default() -> Self {
        Quintic {
            max_iterations: quintic__max_iterations(),
            tolerance: quintic__tolerance(),
            seed: quintic__seed(),
        }
    }
}

impl Quintic {
    pub fn bairstow_settings(&self) -> BairstowSettings {
        BairstowSettings {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Newton {
    #[serde(default = "newton__max_iterations")]
    pub max_iterations: u32,
}
fn newton__max_iterations() -> u32 { 50 }

impl Default for Newton {
    fn default() -> Self { Newton { max_iterations: newton__max_iterations() } }
}

/// A dense matrix as written in a file: `{ rows: [[1, 2], [3, 4]] }`.
///
/// Shape checking happens when this is turned into a matrix, not here.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MatrixFile {
    pub rows: Vec<Vec<f64>>,
}
