use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::product::errors::ProductValidationError;

/// Product catalog entity.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
}

/// Product unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

const NAME_MAX: usize = 100;
const DESCRIPTION_MAX: usize = 500;
const CATEGORY_MAX: usize = 50;

/// Command to create a product, validated on construction.
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub stock: u32,
}

impl CreateProductCommand {
    /// Build a validated creation command.
    ///
    /// # Errors
    /// * `Name` / `Description` / `Price` / `Category` - field out of bounds
    pub fn new(
        name: String,
        description: Option<String>,
        price: f64,
        category: String,
        stock: u32,
    ) -> Result<Self, ProductValidationError> {
        validate_name(&name)?;
        if let Some(description) = &description {
            validate_description(description)?;
        }
        validate_price(price)?;
        validate_category(&category)?;

        Ok(Self {
            name,
            description,
            price,
            category,
            stock,
        })
    }
}

/// Command to update an existing product with optional validated fields.
///
/// Only provided fields will be updated; at least one must be present.
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
}

impl UpdateProductCommand {
    /// Build a validated update command.
    ///
    /// # Errors
    /// * `Empty` - no field provided
    /// * `Name` / `Description` / `Price` / `Category` - field out of bounds
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
        category: Option<String>,
        stock: Option<u32>,
    ) -> Result<Self, ProductValidationError> {
        if name.is_none()
            && description.is_none()
            && price.is_none()
            && category.is_none()
            && stock.is_none()
        {
            return Err(ProductValidationError::Empty);
        }

        if let Some(name) = &name {
            validate_name(name)?;
        }
        if let Some(description) = &description {
            validate_description(description)?;
        }
        if let Some(price) = price {
            validate_price(price)?;
        }
        if let Some(category) = &category {
            validate_category(category)?;
        }

        Ok(Self {
            name,
            description,
            price,
            category,
            stock,
        })
    }
}

fn validate_name(name: &str) -> Result<(), ProductValidationError> {
    if name.is_empty() || name.chars().count() > NAME_MAX {
        return Err(ProductValidationError::Name);
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ProductValidationError> {
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(ProductValidationError::Description);
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ProductValidationError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ProductValidationError::Price);
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), ProductValidationError> {
    if category.is_empty() || category.chars().count() > CATEGORY_MAX {
        return Err(ProductValidationError::Category);
    }
    Ok(())
}
