use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::product::ports::ProductRepository;

/// In-memory product store.
///
/// Stands in for an external catalog store behind the same contract.
pub struct InMemoryProductStore {
    inner: RwLock<ProductTable>,
}

struct ProductTable {
    products: Vec<Product>,
    next_id: i64,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ProductTable {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductStore {
    async fn create(&self, command: CreateProductCommand) -> Result<Product, ProductError> {
        let mut table = self.inner.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let product = Product {
            id: ProductId::new(id),
            name: command.name,
            description: command.description,
            price: command.price,
            category: command.category,
            stock: command.stock,
            created_at: Utc::now(),
        };
        table.products.push(product.clone());

        Ok(product)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        let table = self.inner.read().await;
        Ok(table
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned())
    }

    async fn list(&self, category: Option<String>) -> Result<Vec<Product>, ProductError> {
        let table = self.inner.read().await;
        Ok(table
            .products
            .iter()
            .filter(|product| {
                category
                    .as_deref()
                    .map_or(true, |category| product.category == category)
            })
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: ProductId,
        changes: UpdateProductCommand,
    ) -> Result<Option<Product>, ProductError> {
        let mut table = self.inner.write().await;

        let Some(product) = table.products.iter_mut().find(|product| product.id == id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(description) = changes.description {
            product.description = Some(description);
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(category) = changes.category {
            product.category = category;
        }
        if let Some(stock) = changes.stock {
            product.stock = stock;
        }

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, ProductError> {
        let mut table = self.inner.write().await;

        let before = table.products.len();
        table.products.retain(|product| product.id != id);

        Ok(table.products.len() < before)
    }
}
