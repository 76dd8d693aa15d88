use thiserror::Error;

/// Failures of the fetch layer. Caught at the view boundary, never raised into derivations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Non-success HTTP status, or the request never produced a response
    #[error("{message}")]
    Network { status: Option<u16>, message: String },

    /// Response body is not valid structured data
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl FetchError {
    /// Error for a response whose status is outside 2xx.
    pub fn status(status: u16) -> Self {
        Self::Network {
            status: Some(status),
            message: format!("API request failed: {}", status),
        }
    }

    /// Error for a request that failed before a status was received.
    pub fn transport(reason: impl std::fmt::Display) -> Self {
        Self::Network {
            status: None,
            message: format!("Request failed: {}", reason),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

/// Type alias for Result with FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
