//! Strongly-typed value objects used by the filter and result models.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, well-formed
//! query parameter names) so that once a value reaches the domain layer it can
//! be treated as trusted.
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Query parameter names are lower-case ASCII words joined by underscores.
    #[error("invalid field key: {0}")]
    InvalidFieldKey(String),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(BookingId, "Backend identifier of a booking request.");
non_empty_string_newtype!(ClientId, "Backend identifier of a client.");
non_empty_string_newtype!(InvoiceId, "Backend identifier of an invoice.");
non_empty_string_newtype!(ToggleName, "Name of a filter toggle shown to the user.");

/// Name of a server-side query parameter, e.g. `first_name`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldKey(String);

impl FieldKey {
    /// Accepts lower-case ASCII letters, digits and underscores, starting with a letter.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let key = NonEmptyString::new(value)?.into_inner();
        let mut chars = key.chars();
        let well_formed = chars.next().is_some_and(|c| c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !well_formed {
            return Err(TypeConstraintError::InvalidFieldKey(key));
        }
        Ok(Self(key))
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for FieldKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for FieldKey {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_string_trims_and_rejects_blank() {
        assert_eq!(NonEmptyString::new("  abc ").unwrap().as_str(), "abc");
        assert_eq!(
            NonEmptyString::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn identifiers_deserialize_through_validation() {
        let id: ClientId = serde_json::from_str("\" abc123 \"").unwrap();
        assert_eq!(id.as_str(), "abc123");

        let blank = serde_json::from_str::<ClientId>("\"  \"");
        assert!(blank.is_err());
    }

    #[test]
    fn field_key_accepts_snake_case_only() {
        assert!(FieldKey::new("client_first_name").is_ok());
        assert!(FieldKey::new("year2").is_ok());
        assert_eq!(
            FieldKey::new("First Name"),
            Err(TypeConstraintError::InvalidFieldKey("First Name".to_string()))
        );
        assert!(FieldKey::new("_id").is_err());
        assert_eq!(FieldKey::new(""), Err(TypeConstraintError::EmptyString));
    }
}
