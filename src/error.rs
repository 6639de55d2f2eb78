use crate::screen::state::{FailureKind, RequestStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendzError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Unexpected HTTP status {status} for product {id}")]
    UnexpectedStatus { id: String, status: u16 },

    #[error("No auth token configured. Pass --token or set TRENDZ_JWT_TOKEN")]
    MissingToken,

    #[error("Invalid product identifier: {0}")]
    InvalidProductId(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Screen cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrendzError {
    /// Classify a loader error into the kind recorded on a failed screen.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            TrendzError::ProductNotFound(_) => FailureKind::NotFound,
            TrendzError::UnexpectedStatus { status, .. } if matches!(status, 401 | 403) => {
                FailureKind::Unauthorized
            }
            TrendzError::UnexpectedStatus { status, .. } => FailureKind::HttpStatus(*status),
            TrendzError::MissingToken => FailureKind::MissingToken,
            TrendzError::Json(_) => FailureKind::MalformedBody,
            _ => FailureKind::Network,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_failure_kinds() {
        let not_found = TrendzError::ProductNotFound("999".into());
        assert_eq!(not_found.failure_kind(), FailureKind::NotFound);

        let unauthorized = TrendzError::UnexpectedStatus {
            id: "1".into(),
            status: 401,
        };
        assert_eq!(unauthorized.failure_kind(), FailureKind::Unauthorized);

        let server = TrendzError::UnexpectedStatus {
            id: "1".into(),
            status: 500,
        };
        assert_eq!(server.failure_kind(), FailureKind::HttpStatus(500));
    }

    #[test]
    fn bad_json_is_a_malformed_body() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert_eq!(
            TrendzError::from(err).failure_kind(),
            FailureKind::MalformedBody
        );
        assert_eq!(
            TrendzError::MissingToken.failure_kind(),
            FailureKind::MissingToken
        );
    }

    #[test]
    fn io_errors_convert_and_count_as_network() {
        let err = TrendzError::from(std::io::Error::other("stdin closed"));
        assert!(matches!(err, TrendzError::Io(_)));
        assert_eq!(err.failure_kind(), FailureKind::Network);
    }
}
