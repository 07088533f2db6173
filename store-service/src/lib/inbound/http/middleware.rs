use std::fmt;

use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use auth::TokenError;

use crate::inbound::http::errors::ApiError;
use crate::inbound::http::router::AppState;

/// Authenticated request context, attached after successful verification.
///
/// Lives for one request; never persisted.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
}

/// Per-request correlation identifier.
#[derive(Debug, Clone)]
pub struct RequestId(String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Middleware tagging every request with a correlation id, echoed back in
/// the `x-request-id` response header.
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let id = Uuid::new_v4().to_string();
    request.extensions_mut().insert(RequestId(id.clone()));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}

/// Middleware guarding routes that require an authenticated caller.
///
/// A missing credential and an expired one both ask the caller to
/// re-authenticate (401); a token failing structural or signature checks is
/// rejected outright (403). Verification completes exactly once per
/// request, either attaching an [`AuthenticatedUser`] or rejecting.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(token) = bearer_token(&request) else {
        return Err(ApiError::AuthenticationRejected(
            "Access token required".to_string(),
        ));
    };

    let claims = state.tokens.verify(token).map_err(|e| match e {
        TokenError::Expired => ApiError::TokenExpired,
        TokenError::Malformed(reason) => {
            tracing::warn!(%reason, "Token verification failed");
            ApiError::TokenInvalid("Invalid token".to_string())
        }
        TokenError::EncodingFailed(reason) => ApiError::Internal(reason),
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Extract the bearer token from the `Authorization` header.
///
/// The header value must be exactly two whitespace-delimited segments with
/// a `Bearer` scheme label; any other shape counts as no token at all.
fn bearer_token(request: &Request) -> Option<&str> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    let mut segments = value.split_whitespace();
    let (scheme, token) = (segments.next()?, segments.next()?);
    if scheme != "Bearer" || segments.next().is_some() {
        return None;
    }
    Some(token)
}
