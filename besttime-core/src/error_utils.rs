use crate::error::*;
use tracing::{error, info};

/// Process exit codes the binary maps errors onto.
pub mod exit_codes {
    pub const USAGE: i32 = 1;
    pub const CONFIG: i32 = 2;
    pub const NETWORK: i32 = 3;
    pub const INVALID_RESPONSE: i32 = 4;
    pub const IO: i32 = 5;
}

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
    fn exit_code(&self) -> i32;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::RedditApi(e) => {
                e.log_error();
            }
            CoreError::Config(e) => {
                e.log_error();
            }
            CoreError::Network(e) => {
                error!("Network error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::RedditApi(e) => e.user_friendly_message(),
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Network(e) if e.is_timeout() => {
                "The request to Reddit timed out. Please try again.".to_string()
            }
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            CoreError::Io(e) => format!("I/O error: {}", e),
            CoreError::Usage { message } => message.clone(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::RedditApi(_) => "REDDIT_API".to_string(),
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
            CoreError::Usage { .. } => "USAGE".to_string(),
        }
    }

    fn exit_code(&self) -> i32 {
        match self {
            CoreError::RedditApi(e) => e.exit_code(),
            CoreError::Config(e) => e.exit_code(),
            CoreError::Network(_) => exit_codes::NETWORK,
            CoreError::Io(_) => exit_codes::IO,
            CoreError::Usage { .. } => exit_codes::USAGE,
        }
    }
}

impl ErrorExt for RedditApiError {
    fn log_error(&self) -> &Self {
        error!("RedditApiError [{}]: {:?}", self.error_code(), self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            RedditApiError::Forbidden { resource } => format!(
                "Access denied to {}. The subreddit may be private or quarantined.",
                resource
            ),
            RedditApiError::SubredditNotFound { subreddit } => {
                format!("Subreddit '{}' not found or is private.", subreddit)
            }
            RedditApiError::RequestTimeout => {
                "Request to Reddit timed out. Please try again.".to_string()
            }
            RedditApiError::InvalidResponse { details } => {
                format!("Reddit returned an unreadable listing: {}", details)
            }
            RedditApiError::ServerError { status_code } => format!(
                "Reddit is having trouble right now (HTTP {}). Please try again later.",
                status_code
            ),
            RedditApiError::UnexpectedStatus { status_code } => {
                format!("Reddit answered with unexpected HTTP status {}.", status_code)
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            RedditApiError::Forbidden { .. } => "REDDIT_FORBIDDEN".to_string(),
            RedditApiError::SubredditNotFound { .. } => "REDDIT_SUBREDDIT_NOT_FOUND".to_string(),
            RedditApiError::RequestTimeout => "REDDIT_TIMEOUT".to_string(),
            RedditApiError::InvalidResponse { .. } => "REDDIT_INVALID_RESPONSE".to_string(),
            RedditApiError::ServerError { .. } => "REDDIT_SERVER_ERROR".to_string(),
            RedditApiError::UnexpectedStatus { .. } => "REDDIT_UNEXPECTED_STATUS".to_string(),
        }
    }

    fn exit_code(&self) -> i32 {
        match self {
            RedditApiError::InvalidResponse { .. } => exit_codes::INVALID_RESPONSE,
            _ => exit_codes::NETWORK,
        }
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError [{}]: {:?}", self.error_code(), self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::FileNotFound { path } => {
                format!("Configuration file '{}' not found.", path)
            }
            ConfigError::InvalidValue { field, value } => {
                format!("Invalid value '{}' for configuration field '{}'.", value, field)
            }
            ConfigError::UnknownTimezone { name } => format!(
                "Unknown timezone '{}'. Use 'local' or an IANA name such as 'Europe/Berlin'.",
                name
            ),
            ConfigError::Parse(e) => format!("Configuration file is invalid: {}", e),
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
            ConfigError::UnknownTimezone { .. } => "CONFIG_UNKNOWN_TIMEZONE".to_string(),
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR".to_string(),
        }
    }

    fn exit_code(&self) -> i32 {
        exit_codes::CONFIG
    }
}

pub struct ErrorReporter;

impl ErrorReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report_error(&self, error: &CoreError) {
        error.log_error();
        info!("Error code: {}", error.error_code());
        info!("User message: {}", error.user_friendly_message());
        info!("Exit code: {}", error.exit_code());
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}
