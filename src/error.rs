//! Error types for the SDK
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! The pagination engine never retries: transport and decode failures
//! terminate iteration and bubble to the caller unchanged.

use thiserror::Error;

/// The main error type for the SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Page not available: {message}")]
    PageNotAvailable { message: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Missing required auth field: {field}")]
    MissingAuthField { field: String },

    #[error("No endpoint found for service '{service_type}' in region '{region}'")]
    EndpointNotFound { service_type: String, region: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a page-not-available error
    pub fn page_not_available(message: impl Into<String>) -> Self {
        Self::PageNotAvailable {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a missing auth field error
    pub fn missing_auth_field(field: impl Into<String>) -> Self {
        Self::MissingAuthField {
            field: field.into(),
        }
    }

    /// Create an endpoint-not-found error
    pub fn endpoint_not_found(
        service_type: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::EndpointNotFound {
            service_type: service_type.into(),
            region: region.into(),
        }
    }

    /// Check if this error is the exhausted-pager sentinel
    pub fn is_page_not_available(&self) -> bool {
        matches!(self, Self::PageNotAvailable { .. })
    }
}

/// Result type alias for the SDK
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::decode("unexpected shape for links.next");
        assert_eq!(
            err.to_string(),
            "Failed to decode response: unexpected shape for links.next"
        );

        let err = Error::endpoint_not_found("compute", "RegionOne");
        assert_eq!(
            err.to_string(),
            "No endpoint found for service 'compute' in region 'RegionOne'"
        );
    }

    #[test]
    fn test_is_page_not_available() {
        assert!(Error::page_not_available("pager is exhausted").is_page_not_available());
        assert!(!Error::decode("bad body").is_page_not_available());
        assert!(!Error::http_status(500, "").is_page_not_available());
    }
}
