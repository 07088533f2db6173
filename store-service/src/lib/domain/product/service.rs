use std::sync::Arc;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::product::ports::ProductRepository;

/// Domain service for product catalog operations.
pub struct ProductService<R>
where
    R: ProductRepository,
{
    repository: Arc<R>,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new product.
    ///
    /// # Errors
    /// * `Storage` - store operation failed
    pub async fn create_product(
        &self,
        command: CreateProductCommand,
    ) -> Result<Product, ProductError> {
        let product = self.repository.create(command).await?;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Retrieve product by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - product does not exist
    /// * `Storage` - store operation failed
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id.value()))
    }

    /// Retrieve products, optionally filtered by category.
    ///
    /// # Errors
    /// * `Storage` - store operation failed
    pub async fn list_products(
        &self,
        category: Option<String>,
    ) -> Result<Vec<Product>, ProductError> {
        self.repository.list(category).await
    }

    /// Update an existing product.
    ///
    /// # Errors
    /// * `NotFound` - product does not exist
    /// * `Storage` - store operation failed
    pub async fn update_product(
        &self,
        id: ProductId,
        changes: UpdateProductCommand,
    ) -> Result<Product, ProductError> {
        self.repository
            .update(id, changes)
            .await?
            .ok_or(ProductError::NotFound(id.value()))
    }

    /// Delete an existing product.
    ///
    /// # Errors
    /// * `NotFound` - product does not exist
    /// * `Storage` - store operation failed
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id.value()));
        }
        Ok(())
    }
}
