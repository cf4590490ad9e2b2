/// Constants for AWS API calls
pub mod aws {
    /// Resources requested per GetResources page
    pub const PAGE_SIZE: i32 = 50;

    /// Prefix of the IAM role ARN built for cross-account access
    pub const ROLE_ARN_PREFIX: &str = "arn:aws:iam::";

    /// Prefix of the STS session name (followed by the account ID)
    pub const SESSION_NAME_PREFIX: &str = "session-";

    /// Provider name attached to static credentials handed to the SDK
    pub const CREDENTIALS_PROVIDER_NAME: &str = "tagu";
}

/// Configuration constants for the input file
pub mod input {
    /// Environment variable names for the input file path (checked in order)
    pub const FILE_ENV_VARS: &[&str] = &["TAGU_AWS_CONFIG", "AWS_CONFIG"];

    /// Default input file name (relative to HOME)
    pub const DEFAULT_FILE_NAME: &str = "input-tags.yaml";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Environment variable overriding the log level
    pub const LOG_LEVEL_ENV: &str = "TAGU_LOG_LEVEL";
}
