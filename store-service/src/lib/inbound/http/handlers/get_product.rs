use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::router::AppState;

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<(StatusCode, Json<GetProductResponseBody>), ApiError> {
    let product_id = parse_product_id(&product_id)?;

    let product = state.product_service.get_product(product_id).await?;

    Ok((
        StatusCode::OK,
        Json(GetProductResponseBody {
            product: (&product).into(),
        }),
    ))
}

pub(crate) fn parse_product_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse()
        .map(ProductId::new)
        .map_err(|_| ApiError::Validation("Product ID must be a number".to_string()))
}

#[derive(Debug, Clone, Serialize)]
pub struct GetProductResponseBody {
    pub product: ProductData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category.clone(),
            stock: product.stock,
            created_at: product.created_at,
        }
    }
}
