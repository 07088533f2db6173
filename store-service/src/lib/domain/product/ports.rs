use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;

/// Persistence operations for the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product, assigning its identifier.
    ///
    /// # Errors
    /// * `Storage` - store operation failed
    async fn create(&self, command: CreateProductCommand) -> Result<Product, ProductError>;

    /// Retrieve product by identifier.
    ///
    /// # Returns
    /// Optional product entity (None if not found)
    ///
    /// # Errors
    /// * `Storage` - store operation failed
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError>;

    /// Retrieve products, optionally filtered by exact category.
    ///
    /// # Errors
    /// * `Storage` - store operation failed
    async fn list(&self, category: Option<String>) -> Result<Vec<Product>, ProductError>;

    /// Apply the provided fields to an existing product.
    ///
    /// # Returns
    /// Updated product, or None if the id is unknown
    ///
    /// # Errors
    /// * `Storage` - store operation failed
    async fn update(
        &self,
        id: ProductId,
        changes: UpdateProductCommand,
    ) -> Result<Option<Product>, ProductError>;

    /// Remove a product.
    ///
    /// # Returns
    /// Whether a product with that id existed
    ///
    /// # Errors
    /// * `Storage` - store operation failed
    async fn delete(&self, id: ProductId) -> Result<bool, ProductError>;
}
