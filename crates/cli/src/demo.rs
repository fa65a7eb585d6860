//! Demo programs reading their settings through [`ParamParser`].
//!
//! Each demo returns the `name = value` lines it would print, so the caller
//! decides where they go.

use parm_pars_core::convert::Span;
use parm_pars_core::error::Result;
use parm_pars_core::parser::ParamParser;
use parm_pars_core::range::range;
use parm_pars_core::validate::Pattern;

use crate::cli_args::Demo;

/// Dispatches to the demo selected on the command line.
///
/// # Errors
///
/// Returns the first parameter error the demo runs into.
pub fn run_demo(demo: &Demo, params: &mut ParamParser) -> Result<Vec<String>> {
    match demo {
        Demo::Basic { .. } => basic(params),
        Demo::Macros { .. } => macros(params),
    }
}

/// Reads one parameter of each supported kind.
///
/// # Errors
///
/// Returns the first parameter error.
pub fn basic(params: &mut ParamParser) -> Result<Vec<String>> {
    let percent = range(1, 100)?;
    let host = Pattern::new("gepardo.[a-zA-Z]{1,10}")?;
    let greeting = Pattern::new("h.l.{1,5}")?;

    let i = params.get::<i32>("i", &[])?;
    let l = params.get::<i64>("l", &[])?;
    let ll = params.get::<i128>("ll", &[])?;
    let f = params.get::<f32>("f", &[])?;
    let d = params.get::<f64>("d", &[])?;
    let c = params.get::<char>("c", &[])?;
    let b = params.get::<bool>("b", &[])?;
    let s = params.get::<String>("s", &[])?;
    let ichk = params.get::<i32>("ichk", &[&percent])?;
    let schk = params.get::<String>("schk", &[&host])?;
    let ra = params.get::<Span<i32>>("ra", &[])?;
    let rachk = params.get::<Span<i32>>("rachk", &[&percent])?;
    let re = params.get::<Pattern>("re", &[])?;
    let id = params.get_default::<i32>("id", 10, &[])?;
    let idchk = params.get_default::<i32>("idchk", 10, &[&percent])?;
    let sd = params.get_default("sd", "hello".to_string(), &[])?;
    let sdchk = params.get_default("sdchk", "hello".to_string(), &[&greeting])?;

    Ok(vec![
        format!("i = {i}"),
        format!("l = {l}"),
        format!("ll = {ll}"),
        format!("f = {f}"),
        format!("d = {d}"),
        format!("c = {c}"),
        format!("b = {b}"),
        format!("s = {s}"),
        format!("ichk = {ichk}"),
        format!("schk = {schk}"),
        format!("ra = {ra}"),
        format!("rachk = {rachk}"),
        format!("re = {re}"),
        format!("id = {id}"),
        format!("idchk = {idchk}"),
        format!("sd = {sd}"),
        format!("sdchk = {sdchk}"),
    ])
}

/// Reads five optional strings after defining two macros.
///
/// # Errors
///
/// Returns the first parameter error.
pub fn macros(params: &mut ParamParser) -> Result<Vec<String>> {
    params.define("var1", "hello")?;
    params.define("var2", 42)?;

    ["s1", "s2", "s3", "s4", "s5"]
        .into_iter()
        .map(|name| -> Result<String> {
            let value = params.get_default(name, String::new(), &[])?;
            Ok(format!("{name} = {value}"))
        })
        .collect()
}
