/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Bodies of the binaries in the root crate.

use crate::FailResult;
use crate::cmd;
use crate::filetypes::load_matrix;
use crate::ui::cli_deserialize::{CliDeserialize, CommonArgs, CoefficientArgs, MatrixArgs};
use crate::ui::color::{ColorByRange, NullPainter, PaintAs};
use crate::ui::logging::GlobalLogger;

use ::mathkern_tasks_config::{Settings, ValidatedSettings, YamlRead};
use ::failure::ResultExt;
use ::serde::Serialize;
use ::std::ffi::OsStr;
use ::std::fmt::Display;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if ::std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        } else {
            error!("(for a backtrace, try again with RUST_BACKTRACE=1)");
        }
        ::std::process::exit(1);
    });
}

impl CommonArgs {
    fn init_logger(&self) -> FailResult<()> {
        let mut logger = GlobalLogger::default();
        logger.verbosity(self.verbosity);
        if let Some(path) = &self.log_file {
            logger.path(path);
        }
        logger.apply()
    }

    fn read_settings(&self) -> FailResult<ValidatedSettings> {
        let settings = match &self.config {
            None => Settings::default(),
            Some(path) => {
                let file = ::std::fs::File::open(path)
                    .with_context(|e| format!("{}: could not open: {}", path.display(), e))?;
                Settings::from_reader(file)
                    .with_context(|e| format!("{}: {}", path.display(), e))?
            },
        };
        settings.validate()
    }

    fn print_report<R: Serialize + Display>(&self, report: &R) -> FailResult<()> {
        if self.json {
            println!("{}", ::serde_json::to_string_pretty(report)?);
        } else {
            print!("{}", report);
        }
        Ok(())
    }
}

fn new_app(name: &'static str, about: &'static str) -> ::clap::App<'static, 'static> {
    ::clap::App::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
}

// %% CRATES: binary: mathkern-roots %%
pub fn roots() {
    wrap_result_main(|| {
        let (app, de) = CliDeserialize::augment_clap_app({
            new_app("mathkern-roots", "Real roots of a polynomial of degree at most five.")
        });
        let matches = app.get_matches();
        let (common, CoefficientArgs { coefficients }): (CommonArgs, _) = de.resolve_args(&matches)?;
        common.init_logger()?;

        let settings = common.read_settings()?;
        let report = cmd::run_roots(&coefficients, &settings)?;
        if common.json {
            common.print_report(&report)
        } else {
            let colors = ColorByRange::residuals();
            let painter: &dyn PaintAs<String, f64> = match ::std::env::var_os("NO_COLOR") {
                Some(_) => &NullPainter,
                None => &colors,
            };
            print!("{}", report.render(painter));
            Ok(())
        }
    });
}

// %% CRATES: binary: mathkern-decompose %%
pub fn decompose() {
    wrap_result_main(|| {
        let (app, de) = CliDeserialize::augment_clap_app({
            new_app("mathkern-decompose", "LU, Cholesky, determinant and inverse of a square matrix.")
        });
        let matches = app.get_matches();
        let (common, MatrixArgs { input }): (CommonArgs, _) = de.resolve_args(&matches)?;
        common.init_logger()?;

        let settings = common.read_settings()?;
        let matrix = load_matrix(&input)?;
        let report = cmd::run_decompose(&matrix, &settings)?;
        common.print_report(&report)
    });
}

// %% CRATES: binary: mathkern-spectrum %%
pub fn spectrum() {
    wrap_result_main(|| {
        let (app, de) = CliDeserialize::augment_clap_app({
            new_app("mathkern-spectrum", "Eigenvalues of AᵗA and the singular values of A.")
        });
        let matches = app.get_matches();
        let (common, MatrixArgs { input }): (CommonArgs, _) = de.resolve_args(&matches)?;
        common.init_logger()?;

        let settings = common.read_settings()?;
        let matrix = load_matrix(&input)?;
        let report = cmd::run_spectrum(&matrix, &settings)?;
        common.print_report(&report)
    });
}
