use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::auth::models::LoginCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::extract::AppJson;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequestBody>,
) -> Result<(StatusCode, Json<LoginResponseBody>), ApiError> {
    let email = EmailAddress::new(body.email)
        .map_err(|e| ApiError::Validation(format!("Invalid email: {}", e)))?;
    if body.password.is_empty() {
        return Err(ApiError::Validation("Password is required".to_string()));
    }

    let session = state
        .auth_service
        .login(LoginCommand {
            email,
            password: body.password,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseBody {
            message: "Login successful".to_string(),
            token: session.token,
            user: (&session.user).into(),
        }),
    ))
}

/// HTTP request body for login (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponseBody {
    pub message: String,
    pub token: String,
    pub user: UserData,
}

/// Sanitized identity view; the credential hash never leaves the domain.
#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.value(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}
