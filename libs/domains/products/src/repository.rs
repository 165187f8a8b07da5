use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (PostgreSQL,
/// in-memory, etc.); the service depends only on this contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a product: insert when the id is absent (assigning one),
    /// update otherwise. Returns the stored representation.
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Get a product by ID
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Delete a product by ID; deleting an unknown id is not an error
    async fn delete_by_id(&self, id: Uuid) -> ProductResult<()>;

    /// All products in storage-defined order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// One page of products plus the total count
    async fn find_page(&self, offset: u64, limit: u64) -> ProductResult<(Vec<Product>, u64)>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Snapshot in insertion order (ascending creation time)
    async fn sorted(&self) -> Vec<Product> {
        let products = self.products.read().await;
        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        result
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = match product.id {
            Some(id) => id,
            None => {
                let id = Uuid::now_v7();
                product.id = Some(id);
                id
            }
        };
        products.insert(id, product.clone());

        tracing::info!(product_id = %id, "Saved product");
        Ok(product)
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: Uuid) -> ProductResult<()> {
        let mut products = self.products.write().await;
        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.sorted().await)
    }

    async fn find_page(&self, offset: u64, limit: u64) -> ProductResult<(Vec<Product>, u64)> {
        let all = self.sorted().await;
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((items, total))
    }
}
