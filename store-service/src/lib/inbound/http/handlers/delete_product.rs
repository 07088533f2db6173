use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::get_product::parse_product_id;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<(StatusCode, Json<DeleteProductResponseBody>), ApiError> {
    let product_id = parse_product_id(&product_id)?;

    state.product_service.delete_product(product_id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteProductResponseBody {
            message: "Product deleted successfully".to_string(),
        }),
    ))
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteProductResponseBody {
    pub message: String,
}
