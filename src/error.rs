use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every failure a handler can surface. Each variant maps to a fixed
/// status and a static message; internal causes are logged, never echoed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Access denied. please login.")]
    Unauthenticated,
    /// Same message for unknown username (400) and wrong password (401)
    /// so the response does not reveal which one failed.
    #[error("Invalid login credentials")]
    InvalidCredentials(StatusCode),
    #[error("Password is too weak try a better one")]
    WeakPassword,
    #[error("Email already in use try another email")]
    EmailTaken,
    #[error("Username already in use")]
    UsernameTaken,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Something went wrong")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::InvalidCredentials(status) => *status,
            ApiError::WeakPassword | ApiError::EmailTaken | ApiError::UsernameTaken => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            error!(error = %cause, "request failed");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_taxonomy() {
        assert_eq!(ApiError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidCredentials(StatusCode::BAD_REQUEST).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials(StatusCode::UNAUTHORIZED).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::WeakPassword.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::EmailTaken.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UsernameTaken.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::NotFound("Blog not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn credentials_errors_share_one_message() {
        let unknown = ApiError::InvalidCredentials(StatusCode::BAD_REQUEST);
        let mismatch = ApiError::InvalidCredentials(StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.to_string(), mismatch.to_string());
    }

    #[test]
    fn internal_error_hides_its_cause() {
        let err = ApiError::Internal(anyhow::anyhow!("db connection refused"));
        assert_eq!(err.to_string(), "Something went wrong");
    }
}
