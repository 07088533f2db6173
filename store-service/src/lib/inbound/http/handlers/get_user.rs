use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::router::AppState;

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<GetUserResponseBody>), ApiError> {
    let user_id: i64 = user_id
        .parse()
        .map_err(|_| ApiError::Validation("User ID must be a number".to_string()))?;

    let user = state.user_service.get_user(UserId::new(user_id)).await?;

    Ok((
        StatusCode::OK,
        Json(GetUserResponseBody {
            user: (&user).into(),
        }),
    ))
}

#[derive(Debug, Clone, Serialize)]
pub struct GetUserResponseBody {
    pub user: UserData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.value(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
