//! Validated text fields shared by the catalog entities.
//!
//! # Responsibility
//! - Own the single validation rule for each constrained attribute.
//! - Map dynamically typed input (`serde_json::Value`) onto the same rules.
//!
//! # Invariants
//! - A constructed field value always satisfies its length bounds.
//! - Lengths are counted in Unicode scalar values, not bytes.
//! - Deserialization goes through the same checks as `parse`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum author name length (non-empty).
pub const AUTHOR_NAME_MIN_CHARS: usize = 1;
/// Minimum magazine name length.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Minimum category length (non-empty).
pub const CATEGORY_MIN_CHARS: usize = 1;
/// Minimum article title length.
pub const TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length.
pub const TITLE_MAX_CHARS: usize = 50;

/// Attribute a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AuthorName,
    MagazineName,
    Category,
    Title,
}

impl Field {
    /// Stable snake_case name used in messages and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AuthorName => "author_name",
            Self::MagazineName => "magazine_name",
            Self::Category => "category",
            Self::Title => "title",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when assigning an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is not a string. `found` names the JSON type received.
    TypeMismatch { field: Field, found: &'static str },
    /// String length is outside the allowed bounds. `max = None` means unbounded.
    ValueOutOfRange {
        field: Field,
        min: usize,
        max: Option<usize>,
        actual: usize,
    },
    /// Write-once attribute was assigned again.
    ImmutableFieldReassignment { field: Field },
}

impl ValidationError {
    /// Attribute the error refers to.
    pub fn field(&self) -> Field {
        match self {
            Self::TypeMismatch { field, .. }
            | Self::ValueOutOfRange { field, .. }
            | Self::ImmutableFieldReassignment { field } => *field,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { field, found } => {
                write!(f, "{field} must be a string, got {found}")
            }
            Self::ValueOutOfRange {
                field,
                min: 1,
                max: None,
                ..
            } => write!(f, "{field} must not be empty"),
            Self::ValueOutOfRange {
                field,
                min,
                max: None,
                actual,
            } => write!(
                f,
                "{field} must be at least {min} characters, got {actual}"
            ),
            Self::ValueOutOfRange {
                field,
                min,
                max: Some(max),
                actual,
            } => write!(
                f,
                "{field} must be between {min} and {max} characters, got {actual}"
            ),
            Self::ImmutableFieldReassignment { field } => {
                write!(f, "{field} cannot be changed after it is set")
            }
        }
    }
}

impl Error for ValidationError {}

fn check_length(
    field: Field,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    let too_long = max.is_some_and(|max| actual > max);
    if actual < min || too_long {
        return Err(ValidationError::ValueOutOfRange {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}

fn expect_string(field: Field, value: Value) -> Result<String, ValidationError> {
    match value {
        Value::String(text) => Ok(text),
        other => Err(ValidationError::TypeMismatch {
            field,
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Declares one validated string newtype.
///
/// Generated API: `parse`, `from_value`, `as_str`, `into_inner`, plus
/// `Display`, `AsRef<str>`, `TryFrom<&str>`, `TryFrom<String>`,
/// `TryFrom<Value>` and serde support routed through the validation rule.
/// Entity constructors take `TryInto<_, Error = ValidationError>`, so typed
/// strings and untyped JSON values share one entry point.
macro_rules! validated_text {
    ($(#[$meta:meta])* $name:ident, $field:expr, $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "serde_json::Value", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validates `value` and wraps it.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                check_length($field, &value, $min, $max)?;
                Ok(Self(value))
            }

            /// Validates an untyped value; non-strings fail with `TypeMismatch`.
            pub fn from_value(value: Value) -> Result<Self, ValidationError> {
                Self::parse(expect_string($field, value)?)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl TryFrom<Value> for $name {
            type Error = ValidationError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                Self::from_value(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

validated_text!(
    /// Author display name. Non-empty.
    AuthorName,
    Field::AuthorName,
    AUTHOR_NAME_MIN_CHARS,
    None
);

validated_text!(
    /// Magazine name, 2..=16 characters.
    MagazineName,
    Field::MagazineName,
    MAGAZINE_NAME_MIN_CHARS,
    Some(MAGAZINE_NAME_MAX_CHARS)
);

validated_text!(
    /// Magazine category. Non-empty.
    Category,
    Field::Category,
    CATEGORY_MIN_CHARS,
    None
);

validated_text!(
    /// Article title, 5..=50 characters.
    Title,
    Field::Title,
    TITLE_MIN_CHARS,
    Some(TITLE_MAX_CHARS)
);
