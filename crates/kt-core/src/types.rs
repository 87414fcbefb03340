//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// A validated practice identifier.
///
/// Practice IDs must be non-empty strings and stay stable across sessions,
/// since learned marks refer to practices by ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PracticeId(String);

impl PracticeId {
    /// Creates a new ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty {
                field: "practice ID",
            });
        }
        Ok(Self(id))
    }

    /// Wraps a literal that is known to be non-empty.
    pub(crate) fn from_static(id: &'static str) -> Self {
        debug_assert!(!id.is_empty(), "built-in practice IDs are non-empty");
        Self(id.to_string())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies the practice by the prefix of its ID.
    pub fn origin(&self) -> PracticeOrigin {
        PracticeOrigin::of(self.as_str())
    }
}

impl TryFrom<String> for PracticeId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PracticeId> for String {
    fn from(id: PracticeId) -> Self {
        id.0
    }
}

impl fmt::Display for PracticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PracticeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Where a practice in the catalogue came from.
///
/// User-added practices carry a recognizable ID prefix; everything else is
/// part of the built-in catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeOrigin {
    /// Shipped with the application.
    Builtin,
    /// Created by hand in the catalogue editor.
    Custom,
    /// Brought in from a CSV import.
    Imported,
    /// Entered through the manual add form.
    Manual,
}

impl PracticeOrigin {
    /// Classifies a raw practice ID.
    pub fn of(id: &str) -> Self {
        if id.starts_with("custom_") {
            Self::Custom
        } else if id.starts_with("imported_") {
            Self::Imported
        } else if id.starts_with("manual_") {
            Self::Manual
        } else {
            Self::Builtin
        }
    }

    /// Whether the practice was added by the user rather than shipped.
    #[must_use]
    pub const fn is_user_added(self) -> bool {
        !matches!(self, Self::Builtin)
    }

    /// String representation for display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Custom => "custom",
            Self::Imported => "imported",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for PracticeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
