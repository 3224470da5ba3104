//! Error types for the signaling exchange

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for signaling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while connecting to an active conference
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (DNS, connect, TLS, stalled stream),
    /// propagated unmodified from the HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The conference endpoint refused the connect request with a JSON
    /// error body, re-surfaced verbatim (pretty-printed)
    #[error("connect request rejected (HTTP {status}):\n{}", pretty(.body))]
    Rejected {
        /// HTTP status of the rejection
        status: StatusCode,

        /// Parsed JSON error payload
        body: serde_json::Value,
    },

    /// The conference endpoint refused the connect request with a body
    /// that is not valid JSON
    #[error("connect request rejected (HTTP {status}) with a non-JSON body: {body}")]
    MalformedRejection {
        /// HTTP status of the rejection
        status: StatusCode,

        /// Raw body text accumulated from the response stream
        body: String,

        /// The JSON parse failure
        #[source]
        source: serde_json::Error,
    },
}

fn pretty(body: &serde_json::Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

impl Error {
    /// HTTP status observed on the exchange, when the failure carries one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http(e) => e.status(),
            Error::Rejected { status, .. } | Error::MalformedRejection { status, .. } => {
                Some(*status)
            }
        }
    }

    /// The `error.status` string of a Google-style rejection payload
    /// (e.g. `"PERMISSION_DENIED"`), when the body carries one
    pub fn remote_status(&self) -> Option<&str> {
        match self {
            Error::Rejected { body, .. } => body.get("error")?.get("status")?.as_str(),
            _ => None,
        }
    }

    /// Check whether the server answered and refused, as opposed to the
    /// transport failing before a status line was read
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::Rejected { .. } | Error::MalformedRejection { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejected_display_contains_pretty_body() {
        let body = json!({"code": 7, "message": "denied"});
        let err = Error::Rejected {
            status: StatusCode::FORBIDDEN,
            body: body.clone(),
        };
        let expected = serde_json::to_string_pretty(&body).unwrap();
        assert!(err.to_string().contains(&expected));
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn test_malformed_rejection_display_keeps_raw_body() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::MalformedRejection {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "not json".to_string(),
            source,
        };
        assert!(err.to_string().contains("not json"));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_malformed_rejection_source_is_parse_error() {
        use std::error::Error as _;

        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::MalformedRejection {
            status: StatusCode::BAD_GATEWAY,
            body: "not json".to_string(),
            source,
        };
        let source = err.source().expect("parse failure should be chained");
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn test_status_reports_rejection_status() {
        let err = Error::Rejected {
            status: StatusCode::NOT_FOUND,
            body: json!({}),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_remote_status_extraction() {
        let err = Error::Rejected {
            status: StatusCode::FORBIDDEN,
            body: json!({"error": {"status": "PERMISSION_DENIED", "message": "nope"}}),
        };
        assert_eq!(err.remote_status(), Some("PERMISSION_DENIED"));

        let err = Error::Rejected {
            status: StatusCode::FORBIDDEN,
            body: json!({"message": "no error envelope"}),
        };
        assert_eq!(err.remote_status(), None);
    }

    #[test]
    fn test_is_rejection() {
        let err = Error::Rejected {
            status: StatusCode::FORBIDDEN,
            body: json!({}),
        };
        assert!(err.is_rejection());

        let source = serde_json::from_str::<serde_json::Value>("x").unwrap_err();
        let err = Error::MalformedRejection {
            status: StatusCode::BAD_GATEWAY,
            body: "x".to_string(),
            source,
        };
        assert!(err.is_rejection());
    }
}
