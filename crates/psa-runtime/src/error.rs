use std::fmt;

/// Result type for psa-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Could not set up a client for the container daemon
    Connect(bollard::errors::Error),

    /// The daemon did not return a container listing
    ListingUnavailable(bollard::errors::Error),

    /// The async runtime backing the daemon client could not start
    Runtime(std::io::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connect(err) => write!(f, "could not connect to Docker daemon: {}", err),
            Error::ListingUnavailable(err) => write!(f, "could not list containers: {}", err),
            Error::Runtime(err) => write!(f, "could not start async runtime: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Connect(err) | Error::ListingUnavailable(err) => Some(err),
            Error::Runtime(err) | Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
