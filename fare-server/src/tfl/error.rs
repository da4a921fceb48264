//! Journey planner client error types.

/// Errors from the journey planner HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Could not build a request URL
    #[error("invalid URL: {0}")]
    Url(String),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by journey planner")]
    RateLimited,

    /// Invalid app key or unauthorized
    #[error("unauthorized (check TFL_APP_KEY)")]
    Unauthorized,

    /// Mock fixture could not be loaded
    #[error("mock data error: {0}")]
    Mock(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TflError::RateLimited;
        assert_eq!(err.to_string(), "rate limited by journey planner");

        let err = TflError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = TflError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }
}
