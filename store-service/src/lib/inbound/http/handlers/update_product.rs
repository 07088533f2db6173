use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::get_product::parse_product_id;
use crate::domain::product::models::UpdateProductCommand;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::extract::AppJson;
use crate::inbound::http::router::AppState;

pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    AppJson(body): AppJson<UpdateProductRequestBody>,
) -> Result<(StatusCode, Json<UpdateProductResponseBody>), ApiError> {
    let product_id = parse_product_id(&product_id)?;

    let changes = UpdateProductCommand::new(
        body.name,
        body.description,
        body.price,
        body.category,
        body.stock,
    )?;

    state
        .product_service
        .update_product(product_id, changes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UpdateProductResponseBody {
            message: "Product updated successfully".to_string(),
        }),
    ))
}

/// HTTP request body for product update; all fields optional
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductRequestBody {
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    category: Option<String>,
    stock: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProductResponseBody {
    pub message: String,
}
