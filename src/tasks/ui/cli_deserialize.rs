/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use ::clap::{self, Arg};
use ::std::path::PathBuf;

/// Trait used to factor out code for adding arguments to a binary and parsing them,
/// leveraging type inference to help reduce boilerplate.
pub trait CliDeserialize: Sized {
    fn augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> (clap::App<'a, 'b>, ClapDeserializer<Self>)
    {
        let app = Self::_augment_clap_app(app);
        let token = ClapDeserializer(Default::default());
        (app, token)
    }

    /// Don't use this. Call 'augment_clap_app' instead.
    fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b>;
    /// Don't use this. Call 'resolve_args' on the ClapDeserializer instead.
    fn _resolve_args(matches: &clap::ArgMatches<'_>) -> FailResult<Self>;
}

/// Token of "proof" that a clap app was augmented to be capable of deserializing A.
pub struct ClapDeserializer<A>(::std::marker::PhantomData<A>);

impl<A> ClapDeserializer<A>
where A: CliDeserialize,
{
    pub fn resolve_args(self, matches: &clap::ArgMatches<'_>) -> FailResult<A>
    { A::_resolve_args(matches) }
}

impl CliDeserialize for () {
    fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b>
    { app }

    fn _resolve_args(_: &clap::ArgMatches<'_>) -> FailResult<Self>
    { Ok(()) }
}

// Tuple as product combinator
impl<A, B> CliDeserialize for (A, B)
where
    A: CliDeserialize,
    B: CliDeserialize,
{
    fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b>
    {
        let app = A::_augment_clap_app(app);
        B::_augment_clap_app(app)
    }

    fn _resolve_args(matches: &clap::ArgMatches<'_>) -> FailResult<Self>
    { Ok((A::_resolve_args(matches)?, B::_resolve_args(matches)?)) }
}

//------------------------------------------------------------------

/// Flags shared by every binary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonArgs {
    pub config: Option<PathBuf>,
    pub verbosity: i32,
    pub log_file: Option<PathBuf>,
    pub json: bool,
}

impl CliDeserialize for CommonArgs {
    fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
        app.args(&[
            Arg::with_name("config")
                .short("c").long("config")
                .takes_value(true).value_name("CONFIG")
                .help("settings yaml; every field is optional"),
            Arg::with_name("verbose")
                .short("v").long("verbose")
                .multiple(true)
                .help("log solver iterations (repeat for more)"),
            Arg::with_name("log_file")
                .long("log")
                .takes_value(true).value_name("LOGFILE")
                .help("also write the log to this file"),
            Arg::with_name("json")
                .long("json")
                .help("print the report as JSON"),
        ])
    }

    fn _resolve_args(m: &clap::ArgMatches<'_>) -> FailResult<Self>
    { Ok(CommonArgs {
        config: m.value_of_os("config").map(PathBuf::from),
        verbosity: m.occurrences_of("verbose") as i32,
        log_file: m.value_of_os("log_file").map(PathBuf::from),
        json: m.is_present("json"),
    })}
}

/// Polynomial coefficients, leading coefficient first.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientArgs {
    pub coefficients: Vec<f64>,
}

impl CliDeserialize for CoefficientArgs {
    fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
        app.setting(clap::AppSettings::AllowNegativeNumbers)
            .arg(Arg::with_name("coefficients")
                .required(true)
                .multiple(true)
                .value_name("COEFF")
                .help("coefficients, highest power first (at most six)"))
    }

    fn _resolve_args(m: &clap::ArgMatches<'_>) -> FailResult<Self>
    {
        let coefficients = m.values_of("coefficients").into_iter()
            .flatten()
            .map(|s| s.parse::<f64>().map_err(|e| format_err!("bad coefficient {:?}: {}", s, e)))
            .collect::<FailResult<Vec<_>>>()?;
        Ok(CoefficientArgs { coefficients })
    }
}

/// A matrix file given as the positional argument.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixArgs {
    pub input: PathBuf,
}

impl CliDeserialize for MatrixArgs {
    fn _augment_clap_app<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
        app.arg(Arg::with_name("input")
            .required(true)
            .value_name("MATRIX_FILE")
            .help("matrix as YAML or JSON (.json), e.g. {rows: [[1, 2], [3, 4]]}"))
    }

    fn _resolve_args(m: &clap::ArgMatches<'_>) -> FailResult<Self>
    {
        let input = m.value_of_os("input")
            .map(PathBuf::from)
            .ok_or_else(|| format_err!("missing MATRIX_FILE"))?;
        Ok(MatrixArgs { input })
    }
}
