//! Upstream client error types.

/// Errors from the upstream transit REST API.
///
/// Every non-success response is classified once into one of these; no
/// request is retried.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Nothing matched the request (HTTP 404)
    #[error("not found")]
    NotFound,

    /// The API rejected the request parameters (HTTP 400)
    #[error("bad parameter: {0}")]
    BadParameter(String),

    /// The API answered successfully but with an empty body
    #[error("empty response")]
    EmptyBody,

    /// The API is overloaded or rate limiting (HTTP 429/503)
    #[error("upstream service is busy")]
    Busy,

    /// Any other error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl UpstreamError {
    /// Whether the request itself was at fault: bad parameters or an
    /// empty answer.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, UpstreamError::BadParameter(_) | UpstreamError::EmptyBody)
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Http(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(UpstreamError::NotFound.to_string(), "not found");
        assert_eq!(UpstreamError::Busy.to_string(), "upstream service is busy");

        let err = UpstreamError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = UpstreamError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn bad_request_classes() {
        assert!(UpstreamError::BadParameter("from".into()).is_bad_request());
        assert!(UpstreamError::EmptyBody.is_bad_request());
        assert!(!UpstreamError::NotFound.is_bad_request());
        assert!(!UpstreamError::Busy.is_bad_request());
    }
}
