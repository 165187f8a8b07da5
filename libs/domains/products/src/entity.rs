//! Sea-ORM entity for the `products` table and the conversion pair
//! decoupling the storage schema from the domain type.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

use crate::models::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub price: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from storage row to domain Product
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            price: model.price,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.map(Into::into),
        }
    }
}

/// Build the row representation of a product, assigning an id when the
/// product has not been persisted yet
pub(crate) fn to_active_model(product: &Product) -> ActiveModel {
    ActiveModel {
        id: Set(product.id.unwrap_or_else(Uuid::now_v7)),
        name: Set(product.name.clone()),
        price: Set(product.price),
        created_at: Set(product.created_at.into()),
        updated_at: Set(product.updated_at.map(Into::into)),
    }
}
