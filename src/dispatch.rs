// Wed Oct 14 2026 - Alex

use crate::config::Config;
use crate::layout::LayoutError;
use crate::report::Reporter;
use crate::runtime::RuntimeServices;
use crate::samples::{arrays, builtin, collections, custom, misc, strings, Routine};
use crate::utils::scoped_timer;
use colored::Colorize;
use std::io::Write;
use thiserror::Error;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_MISSING_OPERATION: i32 = 1;
pub const EXIT_FAILED: i32 = 2;

/// Keyword to routine, in check order.
pub const ROUTINES: [(&str, Routine); 6] = [
    ("builtin", builtin::print_builtin),
    ("arrays", arrays::print_arrays),
    ("strings", strings::print_strings),
    ("custom", custom::print_custom),
    ("collections", collections::print_collections),
    ("misc", misc::print_misc),
];

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Operation '{operation}' failed")]
    Routine {
        operation: &'static str,
        #[source]
        source: LayoutError,
    },
    #[error("Failed to write output")]
    Io(#[from] std::io::Error),
}

pub struct Dispatcher<'a> {
    reporter: Reporter<'a>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(reporter: Reporter<'a>) -> Self {
        Self { reporter }
    }

    /// Runs every routine whose keyword equals `operation` and returns how
    /// many ran. A routine's lines are written only once it has finished.
    pub fn dispatch<W: Write>(&self, operation: &str, out: &mut W) -> Result<usize, DispatchError> {
        let mut ran = 0;

        for (keyword, routine) in ROUTINES {
            if operation != keyword {
                continue;
            }

            let _timer = scoped_timer(keyword);
            let lines = routine(&self.reporter).map_err(|source| DispatchError::Routine {
                operation: keyword,
                source,
            })?;
            log::info!("{} produced {} lines", keyword, lines.len());

            for line in &lines {
                writeln!(out, "{}", line)?;
            }
            ran += 1;
        }

        if ran == 0 {
            log::debug!("No routine registered for {:?}", operation);
        }
        out.flush()?;
        Ok(ran)
    }
}

/// Top-level entry: returns the process exit code.
pub fn run<W: Write, E: Write>(
    operation: Option<&str>,
    config: &Config,
    runtime: &dyn RuntimeServices,
    out: &mut W,
    err: &mut E,
) -> i32 {
    let Some(operation) = operation else {
        let _ = writeln!(err, "{} No operation specified", "[!]".red());
        return EXIT_MISSING_OPERATION;
    };

    let reporter = Reporter::new(runtime).with_compaction_hint(config.compaction_hint);
    match Dispatcher::new(reporter).dispatch(operation, out) {
        Ok(_) => EXIT_SUCCESS,
        Err(error) => {
            log::debug!("{:?}", error);
            let _ = writeln!(err, "{} {}", "[!]".red(), error);
            let mut source = std::error::Error::source(&error);
            while let Some(cause) = source {
                let _ = writeln!(err, "    caused by: {}", cause);
                source = cause.source();
            }

            if config.fail_on_error {
                EXIT_FAILED
            } else {
                EXIT_SUCCESS
            }
        }
    }
}
