use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::product::errors::ProductError;
use crate::domain::product::errors::ProductValidationError;
use crate::domain::user::errors::UserError;
use crate::inbound::http::middleware::RequestId;
use crate::inbound::http::router::AppState;

/// Classified request-processing failure.
///
/// Every failure raised during request handling collapses into exactly one
/// of these variants; [`handle_errors`] renders the external body. Variant
/// order mirrors classification precedence: validation-shaped failures
/// before authorization-shaped, before storage conflicts, before malformed
/// requests and size limits, with `Internal` as the unconditional fallback.
/// Several domain error shapes could satisfy more than one bucket (a
/// conflict surfaced through a generic store error, say); the `From` impls
/// below pin each one to a single variant so classification stays
/// deterministic regardless of which subsystem raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Validation(String),
    AuthenticationRejected(String),
    TokenExpired,
    TokenInvalid(String),
    NotFound(String),
    Conflict(String),
    MalformedBody(String),
    PayloadTooLarge,
    Internal(String),
}

impl ApiError {
    /// Map to the external `(status, message, details)` triple.
    pub fn classify(&self) -> (StatusCode, String, Option<String>) {
        match self {
            ApiError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(detail.clone()),
            ),
            ApiError::AuthenticationRejected(message) => {
                (StatusCode::UNAUTHORIZED, message.clone(), None)
            }
            ApiError::TokenExpired => {
                (StatusCode::UNAUTHORIZED, "Token expired".to_string(), None)
            }
            ApiError::TokenInvalid(message) => (StatusCode::FORBIDDEN, message.clone(), None),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone(), None),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message.clone(), None),
            ApiError::MalformedBody(detail) => (
                StatusCode::BAD_REQUEST,
                "Invalid JSON in request body".to_string(),
                Some(detail.clone()),
            ),
            ApiError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Request payload too large".to_string(),
                None,
            ),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone(), None)
            }
        }
    }
}

impl IntoResponse for ApiError {
    /// Produce a placeholder response carrying the error; [`handle_errors`]
    /// owns the body that actually reaches the client.
    fn into_response(self) -> Response {
        let (status, ..) = self.classify();
        let mut response = status.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            // Unknown email and wrong password arrive here as one variant
            // and leave as one message.
            AuthError::InvalidCredentials => {
                ApiError::AuthenticationRejected("Invalid credentials".to_string())
            }
            AuthError::EmailAlreadyExists(_) => {
                ApiError::Conflict("Email is already registered".to_string())
            }
            AuthError::Hashing(e) => ApiError::Internal(e.to_string()),
            AuthError::Token(e) => ApiError::Internal(e.to_string()),
            AuthError::Storage(e) => ApiError::Internal(e),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict("Email is already registered".to_string())
            }
            UserError::Storage(e) => ApiError::Internal(e),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProductError::Storage(e) => ApiError::Internal(e),
        }
    }
}

impl From<ProductValidationError> for ApiError {
    fn from(err: ProductValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

/// Standard error body shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    pub timestamp: DateTime<Utc>,
    pub path: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Terminal failure handler.
///
/// Handlers and middleware record an [`ApiError`] in response extensions;
/// everything the client sees goes out in the single external shape built
/// here. Responses without a recorded error pass through untouched.
pub async fn handle_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.to_string());

    let response = next.run(request).await;

    let Some(error) = response.extensions().get::<ApiError>().cloned() else {
        return response;
    };

    let (status, body) = render_error(&error, method, path, request_id, state.verbose_errors);

    (status, Json(body)).into_response()
}

fn render_error(
    error: &ApiError,
    method: String,
    path: String,
    request_id: Option<String>,
    verbose_errors: bool,
) -> (StatusCode, ErrorBody) {
    let (status, mut message, mut details) = error.classify();

    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), error = %message, "Request failed");
    } else {
        tracing::warn!(%method, %path, status = status.as_u16(), error = %message, "Request rejected");
    }

    // Raw internal errors stay in the logs unless explicitly exposed.
    if status == StatusCode::INTERNAL_SERVER_ERROR && !verbose_errors {
        message = "Something went wrong".to_string();
        details = None;
    }

    let body = ErrorBody {
        error: message,
        timestamp: Utc::now(),
        path,
        method,
        details,
        request_id,
    };

    (status, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_taxonomy() {
        let cases = [
            (
                ApiError::Validation("detail".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::AuthenticationRejected("Invalid credentials".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (ApiError::TokenExpired, StatusCode::UNAUTHORIZED),
            (
                ApiError::TokenInvalid("Invalid token".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::NotFound("missing".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Conflict("duplicate".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::MalformedBody("syntax".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE),
            (
                ApiError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let (status, ..) = error.classify();
            assert_eq!(status, expected, "{:?}", error);
        }
    }

    #[test]
    fn test_validation_detail_is_carried() {
        let (_, message, details) =
            ApiError::Validation("Password must contain a digit".to_string()).classify();
        assert_eq!(message, "Validation failed");
        assert_eq!(details.as_deref(), Some("Password must contain a digit"));
    }

    #[test]
    fn test_auth_error_routing() {
        assert_eq!(
            ApiError::from(AuthError::InvalidCredentials),
            ApiError::AuthenticationRejected("Invalid credentials".to_string())
        );
        assert_eq!(
            ApiError::from(AuthError::EmailAlreadyExists("a@b.com".to_string())),
            ApiError::Conflict("Email is already registered".to_string())
        );
        assert!(matches!(
            ApiError::from(AuthError::Storage("lock poisoned".to_string())),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_conflict_wins_over_generic_store_error() {
        // A duplicate key surfaced through the store error type still
        // classifies as a conflict, not as internal.
        assert!(matches!(
            ApiError::from(UserError::EmailAlreadyExists("a@b.com".to_string())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::Storage("io".to_string())),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_internal_redacted_by_default() {
        let error = ApiError::Internal("connection refused".to_string());

        let (status, body) = render_error(
            &error,
            "GET".to_string(),
            "/api/users".to_string(),
            Some("req-1".to_string()),
            false,
        );

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Something went wrong");
        assert!(body.details.is_none());
        assert_eq!(body.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn test_internal_exposed_when_verbose() {
        let error = ApiError::Internal("connection refused".to_string());

        let (_, body) = render_error(
            &error,
            "GET".to_string(),
            "/api/users".to_string(),
            None,
            true,
        );

        assert_eq!(body.error, "connection refused");
    }

    #[test]
    fn test_non_internal_never_redacted() {
        let error = ApiError::NotFound("Route not found".to_string());

        let (_, body) = render_error(
            &error,
            "GET".to_string(),
            "/nope".to_string(),
            None,
            false,
        );

        assert_eq!(body.error, "Route not found");
        assert_eq!(body.path, "/nope");
        assert_eq!(body.method, "GET");
    }
}
