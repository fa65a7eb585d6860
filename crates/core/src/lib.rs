//! Parm Pars Core Library
//!
//! This crate turns a program's `name=value` command-line arguments into
//! typed, validated values. It is meant for small generator-style programs
//! that take all of their settings as parameters.
//!
//! # Key Features
//!
//! - **Typed Access**: Read parameters as integers, floats, booleans, chars,
//!   strings or spans through the [`convert::ParamValue`] trait
//! - **Validation**: Attach range and regex checks to a read
//! - **Defaults**: Fall back to a trusted default when a parameter is absent
//! - **Macros**: Expand `@name` references inside values before conversion
//! - **Usage Tracking**: Warn about parameters that were never read, or read
//!   as different types
//!
//! # Examples
//!
//! ```
//! use parm_pars_core::alert::Alerts;
//! use parm_pars_core::config::Config;
//! use parm_pars_core::parser::ParamParser;
//! use parm_pars_core::range::range;
//!
//! let alerts = Alerts::with_sink(Config::default(), std::io::sink());
//! let (n, name) = ParamParser::scope(alerts, |params| {
//!     params.load(["n=20", "name=@who", "12345"])?;
//!     params.define("who", "world")?;
//!     let n = params.get::<i32>("n", &[&range(1, 100)?])?;
//!     let name = params.get_default("name", String::new(), &[])?;
//!     Ok((n, name))
//! })?;
//!
//! assert_eq!(n, 20);
//! assert_eq!(name, "world");
//! # Ok::<(), parm_pars_core::error::Error>(())
//! ```

pub mod alert;
pub mod config;
pub mod convert;
pub mod error;
pub mod identifier;
pub mod parser;
pub mod preprocess;
pub mod range;
pub mod validate;
