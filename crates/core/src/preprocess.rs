//! Macro expansion for parameter values.
//!
//! `@name` is replaced by the text defined for `name`. The name is the
//! longest run of identifier characters after the `@`, and one `!` directly
//! after it is swallowed, so `@var!1` expands `var` and keeps the `1`. An `@`
//! not followed by identifier characters has the empty name, which is
//! predefined as `@`: every such `@` stays literal (`@@` is `@@`, and `@!var`
//! is `@var`). Replacement text is inserted as is, never expanded again.

use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::identifier::{is_middle_char, is_valid_identifier};

#[derive(Debug, Clone)]
pub struct Preprocessor {
    macros: HashMap<String, String>,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor {
    #[must_use]
    pub fn new() -> Self {
        let mut macros = HashMap::new();
        macros.insert(String::new(), "@".to_string());
        Self { macros }
    }

    /// Defines or redefines a macro.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMacroName`] if `name` is not an identifier.
    pub fn define(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if !is_valid_identifier(name) {
            return Err(Error::InvalidMacroName(name.to_string()));
        }

        let value = value.into();
        debug!("Defining macro `{name}` as `{value}`");
        self.macros.insert(name.to_string(), value);
        Ok(())
    }

    /// Expands every macro reference in `text` in a single pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedMacro`] for a reference with no definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use parm_pars_core::preprocess::Preprocessor;
    ///
    /// let mut preprocessor = Preprocessor::new();
    /// preprocessor.define("var1", "hello")?;
    /// assert_eq!(preprocessor.expand("@var1, world!")?, "hello, world!");
    /// assert_eq!(preprocessor.expand("@!var1")?, "@var1");
    /// # Ok::<(), parm_pars_core::error::Error>(())
    /// ```
    pub fn expand(&self, text: &str) -> Result<String> {
        let mut expanded = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '@' {
                expanded.push(c);
                continue;
            }

            let mut name = String::new();
            while let Some(next) = chars.next_if(|&next| is_middle_char(next)) {
                name.push(next);
            }
            let _ = chars.next_if_eq(&'!');

            let value = self
                .macros
                .get(&name)
                .ok_or_else(|| Error::UndefinedMacro(name.clone()))?;
            expanded.push_str(value);
        }

        Ok(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preprocessor() -> Preprocessor {
        let mut preprocessor = Preprocessor::new();
        preprocessor.define("var1", "hello").unwrap();
        preprocessor.define("var2", "42").unwrap();
        preprocessor
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(preprocessor().expand("no macros, here!").unwrap(), "no macros, here!");
        assert_eq!(preprocessor().expand("").unwrap(), "");
    }

    #[test]
    fn test_macro_references() {
        let p = preprocessor();
        assert_eq!(p.expand("@var1, world!").unwrap(), "hello, world!");
        assert_eq!(p.expand("@var1@var2").unwrap(), "hello42");
        assert_eq!(p.expand("@var1!1").unwrap(), "hello1");
    }

    #[test]
    fn test_escapes() {
        let p = preprocessor();
        assert_eq!(p.expand("@@@").unwrap(), "@@@");
        assert_eq!(p.expand("@@").unwrap(), "@@");
        assert_eq!(p.expand("@!var1").unwrap(), "@var1");
        assert_eq!(p.expand("a@").unwrap(), "a@");
    }

    #[test]
    fn test_replacement_is_not_expanded_again() {
        let mut p = preprocessor();
        p.define("indirect", "@var1").unwrap();
        assert_eq!(p.expand("@indirect").unwrap(), "@var1");
    }

    #[test]
    fn test_undefined_macro() {
        let err = preprocessor().expand("x@nope!y").unwrap_err();
        assert_eq!(err, Error::UndefinedMacro("nope".to_string()));
        assert_eq!(err.to_string(), "Macro \"nope\" not found");
    }

    #[test]
    fn test_invalid_macro_name() {
        let mut p = Preprocessor::new();
        assert_eq!(
            p.define("9lives", "x"),
            Err(Error::InvalidMacroName("9lives".to_string()))
        );
        assert!(p.define("", "x").is_err());
    }

    #[test]
    fn test_redefinition_overwrites() {
        let mut p = preprocessor();
        p.define("var1", "bye").unwrap();
        assert_eq!(p.expand("@var1").unwrap(), "bye");
    }
}
