//! Line-oriented command interpreter.
//!
//! Each input line is parsed by [`helm_syntax`] into a chain of named
//! commands, matched against a tree of [`Route`]s, and handled by the deepest
//! matching route. Output goes through an [`OutputSink`]; errors are written
//! inline with the [`output::ERROR_PREFIX`] and the session keeps reading.
//!
//! ```no_run
//! use std::io::{self, BufReader};
//!
//! use helm::{LineWriter, ReaderSource, Route, RouteTable, Router, Session};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut routes = RouteTable::new();
//! routes.register("ping", Route::new(|context| context.write_line("pong")))?;
//!
//! let source = ReaderSource::new(BufReader::new(io::stdin()), 4096);
//! let sink = LineWriter::new(io::stdout());
//! Session::new(source, sink, Router::new(routes)).run()?;
//! # Ok(())
//! # }
//! ```

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use helm_config::{Config, OrthoConfig};
use helm_syntax::Parser;

pub mod demo;
pub mod dispatch;
mod errors;
pub mod input;
pub mod output;
pub mod session;
pub mod telemetry;

pub use dispatch::{
    CommandContext, DispatchError, DispatchOutcome, HandlerError, RegistrationError, Route,
    RouteTable, Router,
};
pub use errors::AppError;
pub use input::{LineRead, LineSource, ReaderSource};
pub use output::{Formatter, JsonFormatter, LineWriter, OutputSink};
pub use session::{LineOutcome, Session, SessionError, SessionOptions, SessionSummary};

/// Runs the interpreter with the demo routes over the given streams.
///
/// `args` feed the configuration loader, so `--max-line-bytes` and the other
/// configuration flags apply. Failures that end the run are written to
/// `stderr`.
#[must_use]
pub fn run<I, R, W, E>(args: I, input: R, output: W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
    E: Write,
{
    match run_session(args, input, output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "helm: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run_session<I, R, W>(args: I, input: R, output: W) -> Result<SessionSummary, AppError>
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
{
    let config = Config::load_from_iter(args).map_err(AppError::LoadConfiguration)?;
    config.validate()?;
    telemetry::initialise(&config)?;

    let router = Router::new(demo::routes()?);
    let source = ReaderSource::new(input, config.max_line_bytes());
    let mut session = Session::new(source, LineWriter::new(output), router)
        .with_parser(Parser::new(config.format_policy()))
        .with_options(SessionOptions::from_config(&config));
    Ok(session.run()?)
}

#[cfg(test)]
mod tests;
