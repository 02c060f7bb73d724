use std::fmt;
use thiserror::Error;

/// Which flavor of "nothing" was supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Null,
    Undefined,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Null => write!(f, "null"),
            Missing::Undefined => write!(f, "undefined"),
        }
    }
}

/// Category of a non-string input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Array,
    Object,
    Number,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Array => write!(f, "an array"),
            ValueKind::Object => write!(f, "an object"),
            ValueKind::Number => write!(f, "a number"),
            ValueKind::Boolean => write!(f, "a boolean"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("input must not be {0}")]
    NullOrUndefined(Missing),

    #[error("input must be a string, received {0}")]
    TypeMismatch(ValueKind),

    #[error("input must not be empty or whitespace only")]
    EmptyInput,

    #[error("input contains no alphanumeric characters")]
    NoAlphanumericContent,
}

impl CaseError {
    /// Stable machine-readable name, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            CaseError::NullOrUndefined(_) => "null_or_undefined",
            CaseError::TypeMismatch(_) => "type_mismatch",
            CaseError::EmptyInput => "empty_input",
            CaseError::NoAlphanumericContent => "no_alphanumeric_content",
        }
    }
}

/// Failure of one input in a batch; `CaseError` plus what can go wrong before validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Case(#[from] CaseError),

    #[error("input is not a valid JSON literal: {0}")]
    InvalidJson(String),
}

impl ConversionError {
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::Case(e) => e.kind(),
            ConversionError::InvalidJson(_) => "invalid_json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_kind() {
        assert_eq!(
            CaseError::TypeMismatch(ValueKind::Array).to_string(),
            "input must be a string, received an array"
        );
        assert_eq!(
            CaseError::NullOrUndefined(Missing::Undefined).to_string(),
            "input must not be undefined"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(CaseError::EmptyInput.kind(), "empty_input");
        assert_eq!(
            CaseError::TypeMismatch(ValueKind::Object).kind(),
            "type_mismatch"
        );
    }

    #[test]
    fn test_conversion_error_passes_through() {
        let err = ConversionError::from(CaseError::EmptyInput);
        assert_eq!(err.kind(), "empty_input");
        assert_eq!(err.to_string(), CaseError::EmptyInput.to_string());
        assert_eq!(
            ConversionError::InvalidJson("eof".to_string()).kind(),
            "invalid_json"
        );
    }
}
