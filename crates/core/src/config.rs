//! Runtime configuration for the parameter parser.
//!
//! The only knob is strict mode, which turns warnings (type drift, unused
//! parameters) into fatal errors.

use std::env;

/// Environment variable that enables strict mode when set to a truthy value.
pub const STRICT_ENV_VAR: &str = "PARMPARS_EXIT_ON_WARNING";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub strict: bool,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use parm_pars_core::config::Config;
    ///
    /// let config = Config::from_env().with_strict(true);
    /// assert!(config.strict);
    /// ```
    #[must_use]
    pub fn from_env() -> Self {
        let strict = env::var(STRICT_ENV_VAR)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        Self { strict }
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
