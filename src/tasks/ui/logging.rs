/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::ui::color::paint;

use ::log::{Level, LevelFilter};
use ::std::fmt;
use ::std::path::{Path, PathBuf};

/// Crates whose `trace!`/`debug!` output is interesting when asked for.
const KERNEL_CRATES: &[&str] = &[
    "mathkern_algebra",
    "mathkern_linalg",
    "mathkern_matrix",
];

/// Builder-style setup for logging
#[derive(Debug, Clone, Default)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Default, Loud, Deafening }

impl Default for Verbosity {
    fn default() -> Self { Verbosity::Default }
}

impl GlobalLogger {
    /// Also write the log to a file.
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    /// Any integer will be accepted; the level will be truncated
    /// to the most extreme value supported.
    pub fn verbosity(&mut self, level: i32) -> &mut Self
    {
        self.verbosity = match level {
            i32::MIN..=0 => Verbosity::Default,
            1 => Verbosity::Loud,
            _ => Verbosity::Deafening,
        };
        self
    }

    fn kernel_level(&self) -> LevelFilter {
        match self.verbosity {
            Verbosity::Default => LevelFilter::Info,
            Verbosity::Loud => LevelFilter::Debug,
            Verbosity::Deafening => LevelFilter::Trace,
        }
    }

    /// Install the logger.  Only the first call in a process can succeed.
    pub fn apply(&mut self) -> FailResult<()>
    {
        use ::std::time::Instant;

        let start = Instant::now();
        let mut fern = ::fern::Dispatch::new()
            .format(move |out, message, record| {
                let t = start.elapsed();
                out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                    t.as_secs(),
                    t.subsec_millis(),
                    record.target(),
                    ColorizedLevel(record.level()),
                    message))
            })
            .level(LevelFilter::Warn)
            .level_for("mathkern_tasks", LevelFilter::Debug)
            .level_for("mathkern_tasks_config", LevelFilter::Debug);

        for &krate in KERNEL_CRATES {
            fern = fern.level_for(krate, self.kernel_level());
        }

        // stdout is reserved for the report
        fern = fern.chain(::std::io::stderr());
        if let Some(path) = self.path.as_ref() {
            fern = fern.chain(::fern::log_file(path)?);
        }

        fern.apply()?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ::ansi_term::Colour::Red.bold(),
            Level::Warn  => ::ansi_term::Colour::Red.normal(),
            Level::Info  => ::ansi_term::Colour::Cyan.bold(),
            Level::Debug => ::ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ::ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", paint(style, self.0))
    }
}
