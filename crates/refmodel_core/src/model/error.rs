//! Construction-time validation errors shared by every entity.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelValidationError>;

/// Validation failure raised while building an entity.
///
/// Entities are never handed out partially initialized: every constructor
/// (and every `Deserialize` impl for value records) returns this error instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelValidationError {
    /// A required field was not provided at all.
    MissingField(&'static str),
    /// A required text field was provided but is blank.
    EmptyField(&'static str),
    /// Grade letter is not `A`..`F` with an optional `+`/`-`.
    InvalidGradeLetter(String),
    /// Numeric field is not finite or outside its allowed range.
    InvalidNumber { field: &'static str, value: f64 },
    /// Coordinate is out of range or could not be parsed.
    InvalidCoordinate(String),
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::EmptyField(field) => write!(f, "field `{field}` cannot be empty"),
            Self::InvalidGradeLetter(letter) => write!(
                f,
                "invalid grade letter `{letter}`; expected A-F with optional +/-"
            ),
            Self::InvalidNumber { field, value } => {
                write!(f, "field `{field}` has invalid value {value}")
            }
            Self::InvalidCoordinate(raw) => write!(f, "invalid coordinate `{raw}`"),
        }
    }
}

impl Error for ModelValidationError {}

/// Rejects blank text for a required field and returns the trimmed value.
pub(crate) fn require_text(value: &str, field: &'static str) -> ModelResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Rejects NaN, infinities and negative values.
pub(crate) fn require_non_negative(value: f64, field: &'static str) -> ModelResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelValidationError::InvalidNumber { field, value });
    }
    Ok(value)
}

pub(crate) fn require_present<T>(value: Option<T>, field: &'static str) -> ModelResult<T> {
    value.ok_or(ModelValidationError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::{require_non_negative, require_present, require_text, ModelValidationError};

    #[test]
    fn require_text_trims_and_rejects_blank() {
        assert_eq!(require_text("  Jane ", "first_name").unwrap(), "Jane");
        assert_eq!(
            require_text(" \t", "first_name").unwrap_err(),
            ModelValidationError::EmptyField("first_name")
        );
    }

    #[test]
    fn require_non_negative_rejects_nan_and_negative() {
        assert!(require_non_negative(0.0, "credits").is_ok());
        assert!(require_non_negative(-1.0, "credits").is_err());
        assert!(require_non_negative(f64::NAN, "credits").is_err());
        assert!(require_non_negative(f64::INFINITY, "credits").is_err());
    }

    #[test]
    fn require_present_reports_field_name() {
        let err = require_present::<u8>(None, "letter").unwrap_err();
        assert_eq!(err.to_string(), "missing required field `letter`");
    }
}
