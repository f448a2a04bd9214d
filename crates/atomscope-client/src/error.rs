use std::fmt;

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures talking to the backend or validating a request before sending it
#[derive(Debug)]
pub enum Error {
    /// Transport failure: connection refused, timeout, TLS, ...
    Http(reqwest::Error),

    /// The server answered with a non-2xx status
    Status { status: u16, body: String },

    /// The body was not the expected JSON shape
    Decode(serde_json::Error),

    /// Rejected locally before any request was made
    Validation(atomscope_types::ValidationError),

    /// The mock has no canned response for this call
    NotFound(String),

    /// The configured API URL cannot be used as a base
    InvalidUrl(String),
}

impl Error {
    /// Short text suitable for an inline error banner
    pub fn user_message(&self) -> String {
        match self {
            Error::Status { status, body } if body.trim().is_empty() => {
                format!("server returned {}", status)
            }
            Error::Status { status, body } => {
                let detail = serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|v| v["error"].as_str().map(str::to_string))
                    .unwrap_or_else(|| body.trim().to_string());
                format!("server returned {}: {}", status, detail)
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "Request failed: {}", err),
            Error::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            Error::Decode(err) => write!(f, "Unexpected response: {}", err),
            Error::Validation(err) => write!(f, "{}", err),
            Error::NotFound(what) => write!(f, "Not found: {}", what),
            Error::InvalidUrl(url) => write!(f, "Invalid API URL: {}", url),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Validation(err) => Some(err),
            Error::Status { .. } | Error::NotFound(_) | Error::InvalidUrl(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<atomscope_types::ValidationError> for Error {
    fn from(err: atomscope_types::ValidationError) -> Self {
        Error::Validation(err)
    }
}
