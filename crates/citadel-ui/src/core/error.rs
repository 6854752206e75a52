//! Failure taxonomy for calls against the catalog API.
//!
//! # Design
//! - A 404 is its own variant: the list view treats it as a valid empty
//!   result, not a failure.
//! - Other HTTP statuses stay numeric so the UI can surface them verbatim.
//! - Transport and decode problems collapse to coarse variants; the detail
//!   lives in the console log, not in user-facing state.

use thiserror::Error;

/// Failure modes for catalog API calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The query matched nothing (HTTP 404).
    #[error("no results matched the request")]
    NotFound,
    /// Any other non-success HTTP status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// Transport-level failure (network unreachable, CORS, aborted).
    #[error("network request failed")]
    Network,
    /// The response body could not be decoded.
    #[error("response decoding failed")]
    Decode,
}

impl ApiError {
    /// Classify a non-success HTTP status code.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            other => Self::Status(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn not_found_is_distinguished_from_other_statuses() {
        assert_eq!(ApiError::from_status(404), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500), ApiError::Status(500));
        assert_eq!(ApiError::from_status(429), ApiError::Status(429));
    }

    #[test]
    fn status_display_carries_the_code() {
        assert_eq!(
            ApiError::Status(503).to_string(),
            "request failed with status 503"
        );
    }
}
