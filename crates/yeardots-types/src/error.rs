use std::fmt;

/// Result type for yeardots-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date or timestamp could not be parsed into a calendar instant
    InvalidInstant(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInstant(input) => write!(
                f,
                "Invalid instant '{}': expected YYYY-MM-DD, YYYY-MM-DDTHH:MM or YYYY-MM-DDTHH:MM:SS",
                input
            ),
        }
    }
}

impl std::error::Error for Error {}
