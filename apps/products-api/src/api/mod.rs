//! API routes module

pub mod health;

use axum::Router;
use domain_products::{handlers, ProductRepository, ProductService};

/// Create all API routes
pub fn routes<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .nest("/api/products", handlers::router(service))
        .merge(health::router())
}
