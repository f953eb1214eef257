//! Approval flags and the authorities that grant them.

use super::ParseApprovalError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean-like approval value, persisted as `"Yes"` or `"No"`.
///
/// Only the exact spellings `Yes` and `No` parse, so a stored value always
/// reads back as it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Approval {
    /// The approval has been granted.
    Yes,
    /// The approval has not been granted.
    #[default]
    No,
}

impl Approval {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// Returns `true` when the approval has been granted.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Approval {
    type Error = ParseApprovalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            _ => Err(ParseApprovalError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for Approval {
    type Error = ParseApprovalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Approval> for String {
    fn from(value: Approval) -> Self {
        value.as_str().to_owned()
    }
}

/// Authority whose sign-off is required before city clearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authority {
    /// Lake protection authority.
    Lake,
    /// Forest department.
    Forest,
}

impl Authority {
    /// Returns a lowercase label for messages and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lake => "lake",
            Self::Forest => "forest",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
