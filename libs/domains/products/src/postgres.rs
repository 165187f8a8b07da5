use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    entity,
    error::ProductResult,
    models::Product,
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository backed by Sea-ORM
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn save(&self, product: Product) -> ProductResult<Product> {
        let is_insert = product.id.is_none();
        let row = entity::to_active_model(&product);

        let model = if is_insert {
            row.insert(&self.db).await?
        } else {
            row.update(&self.db).await?
        };

        tracing::info!(product_id = %model.id, "Saved product");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn delete_by_id(&self, id: Uuid) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_page(&self, offset: u64, limit: u64) -> ProductResult<(Vec<Product>, u64)> {
        let total = entity::Entity::find().count(&self.db).await?;

        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }
}
