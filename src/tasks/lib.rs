/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The command line front ends.
//!
//! Each binary in the root crate is a one-line shim that calls a function in
//! [`entry_points`].  Everything those functions print is computed by the
//! kernel crates; this crate only reads input, configures logging, and
//! formats reports.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;

#[cfg(test)]
#[macro_use]
extern crate mathkern_assert_close;

pub type FailResult<T> = Result<T, ::failure::Error>;

mod ui {
    pub mod cli_deserialize;
    pub mod color;
    pub mod logging;
}

pub mod filetypes;
pub mod cmd;
pub mod entry_points;

pub use crate::ui::logging::GlobalLogger;
