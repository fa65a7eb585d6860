//! Command-line argument parsing for the demo binary.
//!
//! Only the demo selection and strict mode are options; everything after the
//! demo name is handed to the parameter parser untouched.

use clap::{Parser, Subcommand};
use parm_pars_core::config::Config;

/// Command-line arguments for the `parmpars` demo binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use parm_pars_cli::cli_args::Args;
///
/// let args = Args::parse_from(["parmpars", "macros", "s1=@var1"]);
/// assert_eq!(args.demo.parameters(), ["s1=@var1"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Treat warnings (unused parameters, type drift) as fatal errors.
    ///
    /// Also enabled by setting `PARMPARS_EXIT_ON_WARNING=1`.
    #[arg(long, short = 's', action)]
    pub strict: bool,

    /// The demo program to run.
    #[command(subcommand)]
    pub demo: Demo,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Demo {
    /// Read one parameter of every supported type, with checks and defaults.
    ///
    /// # Examples
    /// ```bash
    /// parmpars basic i=1 l=2000111222 c=a b=true s=hello 'ra=[1;5]' unused=45 seed
    /// ```
    Basic {
        /// Parameters in `name=value` form, optionally followed by a seed token.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        parameters: Vec<String>,
    },

    /// Expand macros inside string parameters.
    ///
    /// # Examples
    /// ```bash
    /// parmpars macros s1='@var1, world!' s2='@var1@var2' s4='@@@' s5='@!var1'
    /// ```
    Macros {
        /// Parameters in `name=value` form, optionally followed by a seed token.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        parameters: Vec<String>,
    },
}

impl Demo {
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        match self {
            Demo::Basic { parameters } | Demo::Macros { parameters } => parameters,
        }
    }
}

impl Args {
    /// Environment configuration, with `--strict` taking precedence.
    #[must_use]
    pub fn config(&self) -> Config {
        let config = Config::from_env();
        if self.strict {
            config.with_strict(true)
        } else {
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_basic_demo() {
        let args = Args::parse_from(["parmpars", "basic", "i=1", "s=hello", "seed42"]);

        assert!(!args.strict);
        assert!(matches!(args.demo, Demo::Basic { .. }));
        assert_eq!(args.demo.parameters(), ["i=1", "s=hello", "seed42"]);
    }

    #[test]
    fn test_args_strict_flags() {
        let args = Args::parse_from(["parmpars", "-s", "macros"]);
        assert!(args.strict);
        assert!(args.config().strict);

        let args = Args::parse_from(["parmpars", "--strict", "basic", "x=1"]);
        assert!(args.strict);
        assert_eq!(args.demo.parameters(), ["x=1"]);
    }

    #[test]
    fn test_args_keep_hyphenated_values() {
        let args = Args::parse_from(["parmpars", "basic", "ll=-31513975719571", "--d=1"]);
        assert_eq!(args.demo.parameters(), ["ll=-31513975719571", "--d=1"]);
    }

    #[test]
    fn test_args_empty_parameters() {
        let args = Args::parse_from(["parmpars", "macros"]);
        assert!(args.demo.parameters().is_empty());
    }

    #[test]
    fn test_args_require_demo() {
        assert!(Args::try_parse_from(["parmpars"]).is_err());
        assert!(Args::try_parse_from(["parmpars", "other"]).is_err());
    }
}
