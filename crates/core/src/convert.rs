//! String-to-value conversion.
//!
//! [`ParamValue`] is the per-type strategy the parser dispatches on: it names
//! the type for diagnostics and parses a raw (already macro-expanded) string
//! into a value. Parsing is all-or-nothing; a partial parse is a failure.
//! New value types plug in by implementing the trait.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::range::Bound;

pub trait ParamValue: Sized {
    /// Name used in conversion errors and type drift warnings.
    fn type_name() -> String;

    /// Returns `None` when `raw` is not entirely a valid `Self`.
    fn parse_param(raw: &str) -> Option<Self>;
}

fn parse_number<T: FromStr>(raw: &str) -> Option<T> {
    match raw.chars().next() {
        Some(first) if first > ' ' => raw.parse().ok(),
        _ => None,
    }
}

macro_rules! numeric_param {
    ($($t:ty),* $(,)?) => {
        $(
            impl ParamValue for $t {
                fn type_name() -> String {
                    stringify!($t).to_string()
                }

                fn parse_param(raw: &str) -> Option<Self> {
                    parse_number(raw)
                }
            }
        )*
    };
}

numeric_param!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl ParamValue for String {
    fn type_name() -> String {
        "string".to_string()
    }

    fn parse_param(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl ParamValue for char {
    fn type_name() -> String {
        "char".to_string()
    }

    fn parse_param(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl ParamValue for bool {
    fn type_name() -> String {
        "bool".to_string()
    }

    fn parse_param(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

/// An interval given as a parameter value: `7`, `[1;5]`, `(1, 5)` and so on.
///
/// A single number stands for the one-point span `[v; v]`. The brackets must
/// match, the separator is `;` or `,`, and nothing may follow the closing
/// bracket. Reversed spans are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<T> {
    left: T,
    right: T,
}

impl<T: Bound> Span<T> {
    /// Returns `None` for a reversed span.
    pub fn new(left: T, right: T) -> Option<Self> {
        T::is_ordered(left, right).then_some(Self { left, right })
    }

    pub fn single(value: T) -> Self {
        Self {
            left: value,
            right: value,
        }
    }

    pub fn left(&self) -> T {
        self.left
    }

    pub fn right(&self) -> T {
        self.right
    }
}

impl<T: Display> Display for Span<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "[{}; {}]", self.left, self.right)
    }
}

impl<T: Bound + ParamValue> ParamValue for Span<T> {
    fn type_name() -> String {
        format!("Span<{}>", T::type_name())
    }

    fn parse_param(raw: &str) -> Option<Self> {
        if let Some(value) = T::parse_param(raw) {
            return Some(Self::single(value));
        }

        let close = match raw.chars().next()? {
            '[' => ']',
            '(' => ')',
            _ => return None,
        };
        let inner = raw[1..].strip_suffix(close)?;
        let (left, right) = inner.split_once([';', ','])?;
        let left = T::parse_param(left.trim())?;
        let right = T::parse_param(right.trim())?;

        Self::new(left, right)
    }
}

#[cfg(feature = "regex")]
impl ParamValue for crate::validate::Pattern {
    fn type_name() -> String {
        "Pattern".to_string()
    }

    fn parse_param(raw: &str) -> Option<Self> {
        Self::new(raw).ok()
    }
}
