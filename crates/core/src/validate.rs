//! Post-conversion checks attached to a typed read.
//!
//! A read takes a list of validators which run in order; the first failure
//! ends the read with an error.

use std::fmt::Display;

use crate::convert::Span;
use crate::error::{Error, Result};
use crate::range::{Bound, Range};

pub trait Validator<T> {
    /// # Errors
    ///
    /// Returns an error describing the variable and the failed check.
    fn validate(&self, name: &str, value: &T) -> Result<()>;
}

fn out_of_range<T: Bound>(name: &str, value: impl Display, range: &Range<T>) -> Error {
    Error::OutOfRange {
        name: name.to_string(),
        value: value.to_string(),
        left: range.left().to_string(),
        right: range.right().to_string(),
    }
}

impl<T: Bound> Validator<T> for Range<T> {
    fn validate(&self, name: &str, value: &T) -> Result<()> {
        if self.contains(*value) {
            Ok(())
        } else {
            Err(out_of_range(name, value, self))
        }
    }
}

/// A span is in range when both of its ends are.
impl<T: Bound> Validator<Span<T>> for Range<T> {
    fn validate(&self, name: &str, value: &Span<T>) -> Result<()> {
        if self.contains(value.left()) && self.contains(value.right()) {
            Ok(())
        } else {
            Err(out_of_range(name, value, self))
        }
    }
}

/// Runs `validators` in order and stops at the first failure.
///
/// # Errors
///
/// Returns the first validator error.
pub fn validate_all<T>(name: &str, value: &T, validators: &[&dyn Validator<T>]) -> Result<()> {
    validators
        .iter()
        .try_for_each(|validator| validator.validate(name, value))
}

#[cfg(feature = "regex")]
pub use pattern::Pattern;

#[cfg(feature = "regex")]
mod pattern {
    use std::fmt::{Display, Formatter};

    use regex::Regex;

    use super::Validator;
    use crate::error::{Error, Result};

    /// A regular expression the whole string value must match.
    #[derive(Debug, Clone)]
    pub struct Pattern {
        source: String,
        anchored: Regex,
    }

    impl Pattern {
        /// # Errors
        ///
        /// Returns [`Error::InvalidPattern`] if `source` does not compile.
        pub fn new(source: &str) -> Result<Self> {
            let anchored =
                Regex::new(&format!("^(?:{source})$")).map_err(|e| Error::InvalidPattern {
                    pattern: source.to_string(),
                    reason: e.to_string(),
                })?;

            Ok(Self {
                source: source.to_string(),
                anchored,
            })
        }

        #[must_use]
        pub fn matches(&self, value: &str) -> bool {
            self.anchored.is_match(value)
        }
    }

    impl Display for Pattern {
        fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
            formatter.write_str(&self.source)
        }
    }

    impl Validator<String> for Pattern {
        fn validate(&self, name: &str, value: &String) -> Result<()> {
            if self.matches(value) {
                return Ok(());
            }

            Err(Error::PatternMismatch {
                name: name.to_string(),
                value: value.clone(),
                pattern: self.source.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::range;

    #[test]
    fn test_range_validator() {
        let r = range(1, 100).unwrap();
        assert!(r.validate("ichk", &20).is_ok());
        let err = r.validate("ichk", &150).unwrap_err();
        assert_eq!(err.to_string(), "ichk = 150 is not in the range [1; 100]");
    }

    #[test]
    fn test_range_validates_span_ends() {
        let r = range(1, 100).unwrap();
        assert!(r.validate("rachk", &Span::new(1, 100).unwrap()).is_ok());
        let err = r.validate("rachk", &Span::new(0, 5).unwrap()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "rachk = [0; 5] is not in the range [1; 100]"
        );
    }

    #[test]
    fn test_float_span_uses_tolerance() {
        let r = range(0.0, 1.0).unwrap();
        let span = Span::new(-1e-13, 1.0 + 1e-13).unwrap();
        assert!(r.validate("f", &span).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let wide = range(0, 10).unwrap();
        let narrow = range(0, 3).unwrap();
        let narrower = range(0, 1).unwrap();
        let err = validate_all::<i32>("x", &5, &[&wide, &narrow, &narrower]).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { right, .. } if right == "3"));
    }

    #[test]
    fn test_no_validators_accepts_anything() {
        assert!(validate_all::<i32>("x", &i32::MIN, &[]).is_ok());
    }

    #[cfg(feature = "regex")]
    #[test]
    fn test_pattern_requires_full_match() {
        let pattern = Pattern::new("gepardo.[a-zA-Z]{1,10}").unwrap();
        assert!(pattern
            .validate("schk", &"gepardo-debian".to_string())
            .is_ok());
        let err = pattern
            .validate("schk", &"xgepardo-debian".to_string())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "schk = \"xgepardo-debian\" doesn't match regex \"gepardo.[a-zA-Z]{1,10}\""
        );
        assert!(!pattern.matches("gepardo-debian1"));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            Pattern::new("a(b"),
            Err(Error::InvalidPattern { .. })
        ));
    }
}
