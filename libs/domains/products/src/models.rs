use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Smallest price accepted on the wire (one cent).
const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Custom validator for monetary amounts
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < MIN_PRICE {
        let mut err = ValidationError::new("price_min");
        err.message = Some("must be greater than or equal to 0.01".into());
        return Err(err);
    }
    Ok(())
}

/// Custom validator rejecting empty or whitespace-only text
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Product entity - the sole resource managed by this domain
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier, assigned by storage on first save
    pub id: Option<Uuid>,
    /// Product name
    pub name: String,
    /// Monetary amount; exact decimal, strictly positive when persisted
    pub price: Decimal,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp; absent until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Create a not-yet-persisted product (no id, no update timestamp)
    pub fn new(name: String, price: Decimal) -> Self {
        Self {
            id: None,
            name,
            price,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Attributes accepted when creating a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductAttrs {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    /// Decimal string or number, at least 0.01
    #[validate(required(message = "is required"), custom(function = "validate_price"))]
    pub price: Option<Decimal>,
}

/// Attributes accepted when updating a product; absent fields are left
/// unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductAttrs {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

/// Wire-facing attributes of a product resource
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductAttrs {
    pub name: String,
    pub price: Decimal,
}

impl From<&Product> for ProductAttrs {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// Pagination query parameters (1-based page)
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PageParams {
    /// Page number, defaults to 1; values below 1 are treated as 1
    pub page: Option<i64>,
    /// Page size, defaults to 10; clamped into [1, 100]
    pub size: Option<i64>,
}

/// One page of products plus the counts needed for response metadata
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub items: Vec<Product>,
    /// Total number of products in storage
    pub total: u64,
    /// Effective (normalized) page number
    pub page: u64,
    /// Effective (normalized) page size
    pub size: u64,
}

impl ProductPage {
    pub fn total_pages(&self) -> u64 {
        // size is normalized to >= 1 before a page is built
        self.total.div_ceil(self.size)
    }
}
