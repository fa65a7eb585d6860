use thiserror::Error;

use crate::alert::Severity;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Error while parsing parameter #{} : \"{}\" is not a valid variable!", .index, .argument)]
    MalformedArgument { index: usize, argument: String },

    #[error("Error while parsing parameter #{} : \"{}\" is invalid variable name!", .index, .name)]
    InvalidName { index: usize, name: String },

    #[error(
        "Error while parsing parameter #{} : variable {} declared twice (first declared in parameter #{})",
        .index,
        .name,
        .first
    )]
    DuplicateParameter {
        index: usize,
        name: String,
        first: usize,
    },

    #[error("Variable {} not found", .0)]
    UnknownParameter(String),

    #[error("ParamParser is not loaded!")]
    NotLoaded,

    #[error("ParamParser is already loaded!")]
    AlreadyLoaded,

    #[error("ParamParser is already finalized!")]
    Finalized,

    #[error("Could not convert {} = \"{}\" to type {}", .name, .value, .type_name)]
    Conversion {
        name: String,
        value: String,
        type_name: String,
    },

    #[error("{} = {} is not in the range [{}; {}]", .name, .value, .left, .right)]
    OutOfRange {
        name: String,
        value: String,
        left: String,
        right: String,
    },

    #[error("{} = \"{}\" doesn't match regex \"{}\"", .name, .value, .pattern)]
    PatternMismatch {
        name: String,
        value: String,
        pattern: String,
    },

    #[error("Regex \"{}\" is invalid: {}", .pattern, .reason)]
    InvalidPattern { pattern: String, reason: String },

    #[error("Macro \"{}\" not found", .0)]
    UndefinedMacro(String),

    #[error("Macro \"{}\" has invalid name", .0)]
    InvalidMacroName(String),

    #[error("Range [{}; {}] is invalid!", .left, .right)]
    InvalidRange { left: String, right: String },

    /// A warning raised while strict mode is on.
    #[error("{}", .0)]
    StrictWarning(String),
}

impl Error {
    pub fn conversion(name: &str, value: &str, type_name: String) -> Self {
        Self::Conversion {
            name: name.to_string(),
            value: value.to_string(),
            type_name,
        }
    }

    pub fn invalid_range(left: impl ToString, right: impl ToString) -> Self {
        Self::InvalidRange {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Severity the error is reported with when it terminates the program.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::StrictWarning(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }
}
