//! Narrative composer error types.

/// Errors from the text-generation service.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    /// HTTP request failed. The request URL is stripped, it carries the key.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The service is overloaded, rate limiting or not configured
    #[error("narrative service unavailable: {0}")]
    Unavailable(String),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The service answered without any text
    #[error("narrative service returned no text")]
    Empty,
}

impl From<reqwest::Error> for NarrativeError {
    fn from(err: reqwest::Error) -> Self {
        NarrativeError::Http(err.without_url())
    }
}
