use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::product::models::Product;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::router::AppState;

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<(StatusCode, Json<ListProductsResponseBody>), ApiError> {
    let products = state.product_service.list_products(query.category).await?;
    let products: Vec<ProductData> = products.iter().map(ProductData::from).collect();

    Ok((
        StatusCode::OK,
        Json(ListProductsResponseBody {
            count: products.len(),
            products,
        }),
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListProductsResponseBody {
    pub products: Vec<ProductData>,
    pub count: usize,
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
