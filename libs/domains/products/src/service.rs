//! Product Service - Business logic layer

use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductPage, UpdateProductAttrs};
use crate::repository::ProductRepository;

/// Default page size when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Largest page size a caller may request
pub const MAX_PAGE_SIZE: i64 = 100;

/// Product service providing business logic operations
///
/// The only place where semantic validation decisions are made. Every
/// mutating operation writes through to the repository synchronously;
/// no state is held across requests.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    ///
    /// Fails with InvalidArgument when the price is absent or not
    /// strictly positive; nothing is persisted in that case.
    #[instrument(skip(self), fields(product_name = %name))]
    pub async fn create(&self, name: String, price: Option<Decimal>) -> ProductResult<Product> {
        let price = price
            .filter(|p| *p > Decimal::ZERO)
            .ok_or_else(|| ProductError::InvalidArgument("price must be > 0".to_string()))?;

        self.repository.save(Product::new(name, price)).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Update an existing product
    ///
    /// Partial semantics: `name` is applied only when supplied and
    /// non-blank, `price` only when supplied and strictly positive.
    /// The update timestamp is refreshed and the product re-persisted
    /// even when no field value changed.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateProductAttrs) -> ProductResult<Product> {
        let mut product = self.get(id).await?;

        if let Some(name) = input.name {
            if !name.trim().is_empty() {
                product.name = name;
            }
        }
        if let Some(price) = input.price {
            if price <= Decimal::ZERO {
                return Err(ProductError::InvalidArgument(
                    "price must be > 0".to_string(),
                ));
            }
            product.price = price;
        }
        product.updated_at = Some(Utc::now());

        self.repository.save(product).await
    }

    /// Delete a product by ID
    ///
    /// Delegates straight to the repository without an existence check;
    /// deleting an unknown id succeeds (idempotent from the caller's
    /// perspective).
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ProductResult<()> {
        self.repository.delete_by_id(id).await
    }

    /// List all products in storage order
    #[instrument(skip(self))]
    pub async fn list(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Fetch one page of products
    ///
    /// Normalizes the page number to at least 1 and the page size into
    /// [1, 100] before converting to a zero-based offset.
    #[instrument(skip(self))]
    pub async fn paginated_list(&self, page: i64, size: i64) -> ProductResult<ProductPage> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, MAX_PAGE_SIZE) as u64;
        // Saturate for absurdly large page numbers; a past-the-end
        // offset yields an empty page
        let offset = (page - 1).saturating_mul(size);

        let (items, total) = self.repository.find_page(offset, size).await?;
        Ok(ProductPage {
            items,
            total,
            page,
            size,
        })
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
