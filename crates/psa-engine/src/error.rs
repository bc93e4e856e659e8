use std::fmt;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// The filter pattern is not a valid regular expression
    InvalidFilterPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFilterPattern { pattern, source } => {
                write!(f, "invalid filter pattern '{}': {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidFilterPattern { source, .. } => Some(source),
        }
    }
}
