//! API error types for the OpenSea REST API client.

use thiserror::Error;

/// API-specific error type for the OpenSea REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure from reqwest (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request rejected as invalid by the service (400, or another 4xx
    /// with a JSON error body)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or rejected API key (401/403)
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Too many requests (429)
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Server-side error (5xx)
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// JSON body did not match the expected shape
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unexpected HTTP status code
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}

impl ApiError {
    /// Whether the failure is transient and the request may be repeated.
    pub fn is_retryable(&self) -> bool {
        match self {
            // A request that could not even be built fails the same way every time
            ApiError::Http(e) => !e.is_builder(),
            ApiError::ServerError { .. } | ApiError::RateLimited(_) => true,
            _ => false,
        }
    }

    /// HTTP status carried by the error, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Validation(_) => Some(400),
            ApiError::Unauthorized { status, .. } => Some(*status),
            ApiError::NotFound(_) => Some(404),
            ApiError::RateLimited(_) => Some(429),
            ApiError::ServerError { status, .. } => Some(*status),
            ApiError::UnexpectedStatus(status, _) => Some(*status),
            ApiError::Deserialize(_)
            | ApiError::InvalidParameter(_) => None,
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body format returned by the API.
///
/// The service is not consistent: validation failures usually carry an
/// `errors` list, other failures a `message`, `detail` or `error` string.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ErrorResponse {
    /// `false` on failed order posts
    #[serde(default)]
    pub success: Option<bool>,
    /// Human-readable error message
    #[serde(default, alias = "error")]
    pub message: Option<String>,
    /// Django REST framework style detail string
    #[serde(default)]
    pub detail: Option<String>,
    /// List of validation errors
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    /// Raw response body
    #[serde(skip)]
    pub raw: Option<String>,
    /// Whether the body parsed as a JSON error object
    #[serde(skip)]
    pub structured: bool,
}

impl ErrorResponse {
    /// Wrap a plain-text (non-JSON) body.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            raw: Some(text.into()),
            ..Default::default()
        }
    }

    /// Parse a response body, falling back to the raw text.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(mut parsed) => {
                parsed.raw = Some(body.to_string());
                parsed.structured = true;
                parsed
            }
            Err(_) => Self::from_text(body),
        }
    }

    /// Get the error message, preferring `errors` over `message`, `detail`,
    /// and finally the raw body.
    pub fn get_message(&self) -> String {
        if let Some(errors) = self.errors.as_ref().filter(|e| !e.is_empty()) {
            return errors.join(", ");
        }
        self.message
            .clone()
            .or_else(|| self.detail.clone())
            .or_else(|| self.raw.clone().filter(|r| !r.trim().is_empty()))
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_message_field() {
        let resp = ErrorResponse::from_body(r#"{"success": false, "message": "bad order"}"#);
        assert_eq!(resp.success, Some(false));
        assert!(resp.structured);
        assert_eq!(resp.get_message(), "bad order");
    }

    #[test]
    fn test_message_from_errors_list() {
        let resp = ErrorResponse::from_body(r#"{"errors": ["bad salt", "expired"]}"#);
        assert_eq!(resp.get_message(), "bad salt, expired");
    }

    #[test]
    fn test_message_from_error_alias_and_detail() {
        assert_eq!(ErrorResponse::from_body(r#"{"error": "boom"}"#).get_message(), "boom");
        assert_eq!(
            ErrorResponse::from_body(r#"{"detail": "Not found."}"#).get_message(),
            "Not found."
        );
    }

    #[test]
    fn test_message_from_plain_text() {
        let resp = ErrorResponse::from_body("upstream connect error");
        assert!(!resp.structured);
        assert_eq!(resp.get_message(), "upstream connect error");
        assert_eq!(ErrorResponse::from_body("").get_message(), "Unknown error");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(ApiError::ServerError { status: 503, message: String::new() }.is_retryable());
        assert!(ApiError::RateLimited(String::new()).is_retryable());
        assert!(!ApiError::Validation("bad".into()).is_retryable());
        assert!(!ApiError::NotFound("gone".into()).is_retryable());
        assert!(!ApiError::Deserialize("shape".into()).is_retryable());
    }

    #[test]
    fn test_display_includes_message() {
        let err = ApiError::Validation("bad order".to_string());
        assert_eq!(err.to_string(), "Validation error: bad order");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_unauthorized_carries_status() {
        let err = ApiError::Unauthorized {
            status: 403,
            message: "no key".to_string(),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "Unauthorized (403): no key");
        assert!(!err.is_retryable());
    }
}
