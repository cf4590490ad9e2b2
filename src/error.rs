use std::fmt;

/// Custom error type for tag dumping operations
#[derive(Debug)]
pub enum TaguError {
    /// Input file missing, unreadable, unparseable, or in an unknown shape
    ConfigFormat(String),
    /// STS AssumeRole call failed
    AssumeRole(String),
    /// A GetResources page request failed
    PageFetch(String),
    /// Resource ARN did not have the expected segment count
    MalformedArn(String),
    /// Default credential chain produced no credentials
    Credentials(String),
    /// Neither an explicit nor a default region is available
    MissingRegion(String),
    /// JSON serialization error
    Json(String),
}

impl fmt::Display for TaguError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaguError::ConfigFormat(msg) => write!(f, "Configuration error: {}", msg),
            TaguError::AssumeRole(msg) => write!(f, "AssumeRole failed: {}", msg),
            TaguError::PageFetch(msg) => write!(f, "Failed to fetch resources page: {}", msg),
            TaguError::MalformedArn(arn) => write!(f, "Malformed resource ARN '{}'", arn),
            TaguError::Credentials(msg) => write!(f, "{}", msg),
            TaguError::MissingRegion(msg) => write!(f, "{}", msg),
            TaguError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for TaguError {}

impl From<serde_json::Error> for TaguError {
    fn from(err: serde_json::Error) -> Self {
        TaguError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for TaguError {
    fn from(err: serde_yml::Error) -> Self {
        TaguError::ConfigFormat(err.to_string())
    }
}

impl From<std::io::Error> for TaguError {
    fn from(err: std::io::Error) -> Self {
        TaguError::ConfigFormat(err.to_string())
    }
}

/// Result type alias for tag dumping operations
pub type Result<T> = std::result::Result<T, TaguError>;
