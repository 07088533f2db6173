use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::product::models::CreateProductCommand;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::extract::AppJson;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateProductRequestBody>,
) -> Result<(StatusCode, Json<CreateProductResponseBody>), ApiError> {
    let command = CreateProductCommand::new(
        body.name,
        body.description,
        body.price,
        body.category,
        body.stock,
    )?;

    let product = state.product_service.create_product(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponseBody {
            message: "Product created successfully".to_string(),
            product_id: product.id.value(),
        }),
    ))
}

/// HTTP request body for product creation (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequestBody {
    name: String,
    description: Option<String>,
    price: f64,
    category: String,
    stock: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponseBody {
    pub message: String,
    pub product_id: i64,
}
