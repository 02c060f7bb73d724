use crate::error::{CaseError, Missing, ValueKind};
use serde_json::Value;

/// What a raw input turned out to be once inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    Missing(Missing),
    Text(&'a str),
    Other(ValueKind),
}

/// Anything a caller may hand to a converter before it is known to be a string.
///
/// `None` stands in for "undefined", `Value::Null` for null.
pub trait RawInput {
    fn classify(&self) -> Classified<'_>;
}

impl RawInput for str {
    fn classify(&self) -> Classified<'_> {
        Classified::Text(self)
    }
}

impl RawInput for String {
    fn classify(&self) -> Classified<'_> {
        Classified::Text(self.as_str())
    }
}

impl RawInput for Value {
    fn classify(&self) -> Classified<'_> {
        match self {
            Value::Null => Classified::Missing(Missing::Null),
            Value::String(s) => Classified::Text(s.as_str()),
            Value::Array(_) => Classified::Other(ValueKind::Array),
            Value::Object(_) => Classified::Other(ValueKind::Object),
            Value::Number(_) => Classified::Other(ValueKind::Number),
            Value::Bool(_) => Classified::Other(ValueKind::Boolean),
        }
    }
}

impl<T: RawInput> RawInput for Option<T> {
    fn classify(&self) -> Classified<'_> {
        match self {
            Some(inner) => inner.classify(),
            None => Classified::Missing(Missing::Undefined),
        }
    }
}

impl<T: RawInput + ?Sized> RawInput for &T {
    fn classify(&self) -> Classified<'_> {
        (**self).classify()
    }
}

/// A trimmed, non-empty string. Only `validate` hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedString<'a>(&'a str);

impl<'a> ValidatedString<'a> {
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

pub fn validate<I: RawInput + ?Sized>(input: &I) -> Result<ValidatedString<'_>, CaseError> {
    let text = match input.classify() {
        Classified::Missing(missing) => return Err(CaseError::NullOrUndefined(missing)),
        Classified::Other(kind) => return Err(CaseError::TypeMismatch(kind)),
        Classified::Text(text) => text,
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CaseError::EmptyInput);
    }

    Ok(ValidatedString(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trims_whitespace() {
        let validated = validate("  hello world \n").unwrap();
        assert_eq!(validated.as_str(), "hello world");
    }

    #[test]
    fn test_null_and_undefined() {
        assert_eq!(
            validate(&Value::Null),
            Err(CaseError::NullOrUndefined(Missing::Null))
        );
        assert_eq!(
            validate(&None::<&str>),
            Err(CaseError::NullOrUndefined(Missing::Undefined))
        );
        assert_eq!(
            validate(&Some(Value::Null)),
            Err(CaseError::NullOrUndefined(Missing::Null))
        );
    }

    #[test]
    fn test_non_string_kinds() {
        assert_eq!(
            validate(&json!(["a", "b"])),
            Err(CaseError::TypeMismatch(ValueKind::Array))
        );
        assert_eq!(
            validate(&json!({"name": "x"})),
            Err(CaseError::TypeMismatch(ValueKind::Object))
        );
        assert_eq!(
            validate(&json!(42)),
            Err(CaseError::TypeMismatch(ValueKind::Number))
        );
        assert_eq!(
            validate(&json!(true)),
            Err(CaseError::TypeMismatch(ValueKind::Boolean))
        );
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(validate(""), Err(CaseError::EmptyInput));
        assert_eq!(validate(" \t\n "), Err(CaseError::EmptyInput));
        assert_eq!(validate(&json!("   ")), Err(CaseError::EmptyInput));
    }

    #[test]
    fn test_json_string_passes() {
        let value = json!("  userId ");
        assert_eq!(validate(&value).unwrap().as_str(), "userId");
        assert_eq!(validate(&Some("x".to_string())).unwrap().as_str(), "x");
    }
}
