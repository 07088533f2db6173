use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ListUsersResponseBody>), ApiError> {
    let users = state.user_service.list_users().await?;
    let users: Vec<UserData> = users.iter().map(UserData::from).collect();

    Ok((
        StatusCode::OK,
        Json(ListUsersResponseBody {
            count: users.len(),
            users,
        }),
    ))
}

#[derive(Debug, Clone, Serialize)]
pub struct ListUsersResponseBody {
    pub users: Vec<UserData>,
    pub count: usize,
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
