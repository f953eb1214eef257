//! Versioned history entries for a project record.

use super::{Project, ProjectCodecError};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::value::{RawValue, to_raw_value};

/// One committed mutation of a project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    tx_id: String,
    value: Option<Vec<u8>>,
    timestamp: DateTime<Utc>,
    is_delete: bool,
}

impl HistoryEntry {
    /// Creates a history entry. The value of a delete entry is discarded.
    #[must_use]
    pub fn new(
        tx_id: impl Into<String>,
        value: Option<Vec<u8>>,
        timestamp: DateTime<Utc>,
        is_delete: bool,
    ) -> Self {
        Self {
            tx_id: tx_id.into(),
            value: if is_delete { None } else { value },
            timestamp,
            is_delete,
        }
    }

    /// Returns the identifier of the transaction that wrote this version.
    #[must_use]
    pub fn tx_id(&self) -> &str {
        &self.tx_id
    }

    /// Returns the raw stored bytes, or `None` for a delete.
    #[must_use]
    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    /// Returns the commit timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns `true` when this entry records a deletion.
    #[must_use]
    pub const fn is_delete(&self) -> bool {
        self.is_delete
    }

    /// Decodes the stored value as a project.
    ///
    /// Returns `None` for delete entries.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCodecError`] when the stored bytes do not decode.
    pub fn project(&self) -> Option<Result<Project, ProjectCodecError>> {
        self.value.as_deref().map(Project::decode)
    }

    /// Converts the entry into its JSON report form.
    ///
    /// A stored JSON document is embedded byte for byte. Any other value is
    /// embedded as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCodecError::Encode`] if the fallback string cannot
    /// be encoded.
    pub fn to_record(&self) -> Result<HistoryRecord, ProjectCodecError> {
        let value = self.value.as_deref().map(embed_value).transpose()?;
        Ok(HistoryRecord {
            tx_id: self.tx_id.clone(),
            value,
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            is_delete: self.is_delete.to_string(),
        })
    }
}

fn embed_value(bytes: &[u8]) -> Result<Box<RawValue>, ProjectCodecError> {
    if let Ok(text) = std::str::from_utf8(bytes)
        && let Ok(raw) = RawValue::from_string(text.to_owned())
    {
        return Ok(raw);
    }
    to_raw_value(&String::from_utf8_lossy(bytes))
        .map_err(|err| ProjectCodecError::Encode(err.to_string()))
}

/// JSON report form of a [`HistoryEntry`].
///
/// `IsDelete` is rendered as the string `"true"` or `"false"`.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    /// Transaction identifier.
    #[serde(rename = "TxId")]
    pub tx_id: String,
    /// Stored document at this version, `null` for deletes.
    #[serde(rename = "Value")]
    pub value: Option<Box<RawValue>>,
    /// Commit timestamp in RFC 3339 form.
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    /// `"true"` when the entry records a deletion.
    #[serde(rename = "IsDelete")]
    pub is_delete: String,
}
