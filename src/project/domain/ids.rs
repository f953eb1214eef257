//! Identifier and validated scalar types for the project domain.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validates a key-bearing string field.
///
/// Key fields feed composite index keys, so they may not contain the
/// `U+0000` delimiter.
fn validate_key_field(field: &'static str, raw: String) -> Result<String, ProjectDomainError> {
    if raw.is_empty() {
        return Err(ProjectDomainError::EmptyField { field });
    }
    if raw.contains('\u{0}') {
        return Err(ProjectDomainError::ReservedCharacter { field, value: raw });
    }
    Ok(raw)
}

/// Parses a non-negative integer field from caller input.
fn parse_number(field: &'static str, raw: &str) -> Result<u64, ProjectDomainError> {
    if raw.is_empty() {
        return Err(ProjectDomainError::EmptyField { field });
    }
    raw.parse::<u64>()
        .map_err(|_| ProjectDomainError::InvalidNumber {
            field,
            value: raw.to_owned(),
        })
}

/// Unique project name, also the primary ledger key of the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a validated project name.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyField`] for an empty value or
    /// [`ProjectDomainError::ReservedCharacter`] when it contains `U+0000`.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        validate_key_field("project name", value.into()).map(Self)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Location the project is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Creates a validated location.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyField`] for an empty value or
    /// [`ProjectDomainError::ReservedCharacter`] when it contains `U+0000`.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        validate_key_field("location", value.into()).map(Self)
    }

    /// Returns the location as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-assigned numeric project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    /// Wraps an already-validated identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses an identifier from caller input.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidNumber`] when the input is not a
    /// non-negative integer.
    pub fn parse(raw: &str) -> Result<Self, ProjectDomainError> {
        parse_number("project id", raw).map(Self)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Land survey number of the project site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyNumber(u64);

impl SurveyNumber {
    /// Wraps an already-validated survey number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses a survey number from caller input.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidNumber`] when the input is not a
    /// non-negative integer.
    pub fn parse(raw: &str) -> Result<Self, ProjectDomainError> {
        parse_number("survey number", raw).map(Self)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurveyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
