use thiserror::Error;

/// Errors that can occur while talking to the meal API
#[derive(Error, Debug)]
pub enum FinderError {
    /// Search term was empty after trimming
    #[error("Empty search term")]
    EmptyQuery,

    /// Request failed in transit or came back with a non-success status
    #[error("Failed to fetch from API: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Response body was not the JSON shape the endpoint promises
    #[error("Failed to decode API response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
