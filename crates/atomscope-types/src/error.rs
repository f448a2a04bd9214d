use std::fmt;

/// Rejected user input, reported inline before any network call is made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing was entered
    Empty,

    /// Input is not a `0x`-prefixed 40 hex digit address
    Malformed(String),

    /// Page size outside the allowed set
    UnsupportedLimit(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "No address entered"),
            ValidationError::Malformed(input) => write!(f, "Invalid wallet address: {}", input),
            ValidationError::UnsupportedLimit(limit) => {
                write!(f, "Unsupported limit {} (expected 10, 25, 50, 100 or 200)", limit)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure to parse one of the enumerated query values (period, sort key, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}
