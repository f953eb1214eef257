//! Response envelope returned to the host.

/// Outcome of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    /// The invocation succeeded.
    Ok,
    /// The invocation failed; see the message.
    Error,
}

impl ResponseStatus {
    /// Returns the numeric status code understood by the host.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Error => 500,
        }
    }
}

/// Status, message and payload of a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractResponse {
    status: ResponseStatus,
    message: String,
    payload: Vec<u8>,
}

impl ContractResponse {
    /// Creates a successful response carrying a payload.
    #[must_use]
    pub const fn success(payload: Vec<u8>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: String::new(),
            payload,
        }
    }

    /// Creates a failed response with a human-readable message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Returns `true` for a successful response.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.status, ResponseStatus::Ok)
    }

    /// Returns the failure message; empty on success.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the success payload; empty on failure.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}
