//! Mapping from workflow outcomes to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::access::AccessError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Wrong identifier or password; the client should prompt again.
    #[error("invalid credentials")]
    Rejected,
    /// Missing, malformed or stale session token.
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),
    /// Student or payment data missing; not fixable by the client.
    #[error("student or payment information not found")]
    NotFound,
    /// Payment outstanding.
    #[error("classroom is locked until payment is complete")]
    ClassroomLocked,
    /// No verdict could be reached; a lookup failure is safe to retry.
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error(transparent)]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Rejected | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ClassroomLocked => StatusCode::FORBIDDEN,
            Self::Access(AccessError::LookupFailed(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Access(AccessError::CheckAborted(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::Rejected => "Wrong student number or password",
            Self::Unauthorized(msg) => *msg,
            Self::NotFound => "Student or payment information not found",
            Self::ClassroomLocked => "Classroom is locked until payment is complete",
            Self::Access(AccessError::LookupFailed(_)) => {
                "Could not check student records, please try again"
            }
            Self::Access(AccessError::CheckAborted(_)) => "Internal server error",
            Self::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Access(e @ AccessError::LookupFailed(_)) => {
                warn!(error = ?e, "student lookup failed")
            }
            Self::Access(e @ AccessError::CheckAborted(_)) => {
                error!(error = ?e, "password check aborted")
            }
            Self::Internal(e) => error!(error = ?e, "internal error"),
            _ => {}
        }
        let status = self.status_code();
        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn outcomes_map_to_distinct_statuses() {
        let lookup = ApiError::from(AccessError::from(StoreError::Unavailable(
            "down".into(),
        )));
        assert_eq!(ApiError::Rejected.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::ClassroomLocked.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(lookup.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_ne!(lookup.status_code(), ApiError::Rejected.status_code());
        assert_eq!(
            ApiError::Unauthorized("Invalid or expired token").status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn aborted_check_is_internal_error() {
        let join_err = tokio::spawn(async { panic!("hasher crashed") })
            .await
            .unwrap_err();
        let resp = ApiError::from(AccessError::from(join_err)).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("hasher"));
    }

    #[tokio::test]
    async fn unauthorized_body_is_json_with_given_message() {
        let resp = ApiError::Unauthorized("Missing Authorization header").into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["error"], "Missing Authorization header");
    }

    #[tokio::test]
    async fn responses_do_not_leak_details() {
        let resp = ApiError::Internal(anyhow::anyhow!("secret database error")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("secret"));
    }
}
