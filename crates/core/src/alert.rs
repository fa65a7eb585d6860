//! Diagnostic reporting.
//!
//! Every diagnostic is a single `"<Severity>: <text>"` line on the diagnostic
//! sink. Notes and warnings are printed as they happen; errors travel back to
//! the entry point as [`Error`] values and are printed there with [`report`].

use std::fmt::{Display, Formatter};
use std::io::{self, Write};

use log::warn;

use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Display for Severity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Note => "Note",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: Severity,
    pub text: String,
}

impl Display for Alert {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.severity, self.text)
    }
}

pub struct Alerts {
    config: Config,
    sink: Box<dyn Write>,
    had_error: bool,
    history: Vec<Alert>,
}

impl Alerts {
    /// Reporter writing to stderr.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, io::stderr())
    }

    pub fn with_sink(config: Config, sink: impl Write + 'static) -> Self {
        Self {
            config,
            sink: Box::new(sink),
            had_error: false,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> Config {
        self.config
    }

    /// True once any fatal alert was raised through this reporter.
    #[must_use]
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Every alert printed so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Alert] {
        &self.history
    }

    pub fn note(&mut self, text: impl Into<String>) {
        self.emit(Severity::Note, text.into());
    }

    /// Prints a warning, or fails with [`Error::StrictWarning`] in strict mode.
    ///
    /// # Errors
    ///
    /// Returns an error only when strict mode is enabled.
    pub fn warning(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if self.config.strict {
            return Err(self.fail(Error::StrictWarning(text)));
        }

        self.emit(Severity::Warning, text);
        Ok(())
    }

    /// Marks the reporter as failed and hands the error back for propagation.
    pub fn fail(&mut self, err: Error) -> Error {
        self.had_error = true;
        err
    }

    fn emit(&mut self, severity: Severity, text: String) {
        let alert = Alert { severity, text };
        if let Err(e) = writeln!(self.sink, "{alert}") {
            warn!("Could not write diagnostic `{alert}`: {e}");
        }
        self.history.push(alert);
    }
}

/// Formats the terminating line for an error that reached the entry point.
#[must_use]
pub fn format_fatal(err: &Error) -> String {
    Alert {
        severity: err.severity(),
        text: err.to_string(),
    }
    .to_string()
}

/// Prints the terminating line for `err` to stderr.
pub fn report(err: &Error) {
    eprintln!("{}", format_fatal(err));
}
