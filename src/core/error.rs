use std::fmt;

/// Comprehensive error types for urlsift operations
#[derive(Debug)]
pub enum UrlSiftError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// URL validation error
    Validation(String),

    /// URL parsing error
    UrlParsing(url::ParseError),

    /// File walking/ignore error
    FileWalking(ignore::Error),

    /// Hostname could not be extracted from a URL that passed validation
    Hostname { url: String, reason: String },
}

impl fmt::Display for UrlSiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlSiftError::Io(err) => write!(f, "IO error: {err}"),
            UrlSiftError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlSiftError::Validation(msg) => write!(f, "Validation error: {msg}"),
            UrlSiftError::UrlParsing(err) => write!(f, "URL parsing error: {err}"),
            UrlSiftError::FileWalking(err) => write!(f, "File walking error: {err}"),
            UrlSiftError::Hostname { url, reason } => {
                write!(f, "Hostname error: {url}: {reason}")
            }
        }
    }
}

impl std::error::Error for UrlSiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlSiftError::Io(err) => Some(err),
            UrlSiftError::UrlParsing(err) => Some(err),
            UrlSiftError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlSiftError {
    fn from(err: std::io::Error) -> Self {
        UrlSiftError::Io(err)
    }
}

impl From<url::ParseError> for UrlSiftError {
    fn from(err: url::ParseError) -> Self {
        UrlSiftError::UrlParsing(err)
    }
}

impl From<ignore::Error> for UrlSiftError {
    fn from(err: ignore::Error) -> Self {
        UrlSiftError::FileWalking(err)
    }
}

/// Type alias for Results using UrlSiftError
pub type Result<T> = std::result::Result<T, UrlSiftError>;
