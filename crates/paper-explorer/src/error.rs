//! Error types for the paper explorer.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by Semantic Scholar API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// HTTP status code behind this error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::NotFound { .. } => Some(404),
            Self::BadRequest { .. } => Some(400),
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }
}

/// Why a paper lookup produced no record.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The argument did not contain anything that looks like a DOI.
    #[error("No DOI found in '{input}'")]
    InvalidIdentifier {
        /// The raw argument as given
        input: String,
    },

    /// The API call failed.
    #[error("API error: {0}")]
    Client(#[from] ClientError),
}

impl FetchError {
    /// Create an invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(input: impl Into<String>) -> Self {
        Self::InvalidIdentifier { input: input.into() }
    }

    /// Convert to a user-friendly message for console output.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::RateLimited { retry_after }) => {
                format!(
                    "Rate limited by Semantic Scholar API. Please wait {:?} before retrying.",
                    retry_after
                )
            }
            Self::Client(ClientError::NotFound { .. }) => {
                "Paper not found. Please check the DOI is correct.".to_string()
            }
            Self::InvalidIdentifier { input } => {
                format!("'{input}' is not a DOI or a URL containing one.")
            }
            _ => self.to_string(),
        }
    }
}

/// Errors writing or reading the persisted record.
#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    /// Filesystem failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PersistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Errors drawing the citation graph.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// Output directory could not be created
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Directory involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// PNG encoding or file write failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Result type alias for rendering.
pub type RenderResult<T> = Result<T, RenderError>;
