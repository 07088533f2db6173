use thiserror::Error;

/// Error for product field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductValidationError {
    #[error("Product name must be 1-100 characters")]
    Name,

    #[error("Product description must be at most 500 characters")]
    Description,

    #[error("Product price must be a positive number")]
    Price,

    #[error("Product category must be 1-50 characters")]
    Category,

    #[error("At least one field must be provided")]
    Empty,
}

/// Top-level error for product store and lookup operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Product with ID {0} does not exist")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(String),
}
