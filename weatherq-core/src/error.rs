use thiserror::Error;

/// Failure to assemble the runtime configuration.
///
/// Fatal for the run: the caller must report it and stop without issuing
/// any network request.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set (export it or add it to a local .env file)")]
    Missing(&'static str),

    #[error("environment variable {0} is empty")]
    Empty(&'static str),
}

/// Failure of a single weather lookup, one variant per failure class so
/// callers can branch without matching on message strings.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response: transport failure,
    /// timeout, or a non-2xx HTTP status.
    #[error("network request failed: {0}")]
    Network(String),

    /// The body arrived with a 2xx status but is not valid JSON.
    #[error("response is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),

    /// The envelope parsed but its status code signals rejection.
    #[error("weather service rejected the request: {0}")]
    Api(String),
}
