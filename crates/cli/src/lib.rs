//! Parm Pars CLI Library
//!
//! This crate provides the `parmpars` demo binary: small programs that take
//! all of their settings as `name=value` arguments and read them through
//! [`parm_pars_core::parser::ParamParser`].
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line parsing for the demo selection and strict mode
//! - [`demo`]: The demo programs themselves
//!
//! # Examples
//!
//! ```bash
//! # Typed reads, checks and defaults; warns that `unused` is never read
//! parmpars basic i=1 l=2000111222 ll=-31513975719571 f=3.931 d=-13841.313 \
//!     c=a b=true s=hello ichk=20 schk=gepardo-debian 'ra=[1;5]' \
//!     'rachk=[1;100]' 're=lin[a-z]{1,2}' unused=45 wuovnowvwim
//!
//! # Macro expansion
//! parmpars macros s1='@var1, world!' s2='@var1@var2' s3='@var1!1' s4='@@@' s5='@!var1'
//!
//! # Make warnings fatal
//! parmpars --strict macros s1=x unused=1
//! ```

use log::debug;
use parm_pars_core::alert::Alerts;
use parm_pars_core::error::Result;
use parm_pars_core::parser::ParamParser;

use crate::cli_args::Args;

pub mod cli_args;
pub mod demo;

/// Runs the selected demo against a fresh parser, printing its output
/// before the unused-parameter audit.
///
/// # Errors
///
/// Returns the first fatal parameter error, including strict-mode warnings.
pub fn run(args: &Args, alerts: Alerts) -> Result<()> {
    debug!("Running {:?} with {:?}", args.demo, alerts.config());

    ParamParser::scope(alerts, |params| {
        params.load(args.demo.parameters())?;
        for line in demo::run_demo(&args.demo, params)? {
            println!("{line}");
        }
        Ok(())
    })
}
