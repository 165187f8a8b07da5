//! HTTP handlers for the Products API

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use jsonapi::{
    Document, ErrorDocument, Links, ListDocument, Meta, QueryParams, RequestDocument, Resource,
    UuidPath, ValidatedDocument,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProductAttrs, PageParams, Product, ProductAttrs, UpdateProductAttrs};
use crate::repository::ProductRepository;
use crate::service::{ProductService, DEFAULT_PAGE_SIZE};

/// JSON:API resource type for products
pub const RESOURCE_TYPE: &str = "products";

const BASE_PATH: &str = "/api/products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        paginated_list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(schemas(
        CreateProductAttrs,
        UpdateProductAttrs,
        ProductAttrs,
        Document<ProductAttrs>,
        ListDocument<ProductAttrs>,
        RequestDocument<CreateProductAttrs>,
        RequestDocument<UpdateProductAttrs>,
        ErrorDocument,
    )),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/paginated", get(paginated_list_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

// The id is always present once a product has been persisted
fn resource(product: &Product) -> Resource<ProductAttrs> {
    Resource {
        kind: RESOURCE_TYPE.to_string(),
        id: product
            .id
            .map_or_else(String::new, |id| id.to_string()),
        attributes: ProductAttrs::from(product),
    }
}

fn single_document(product: &Product) -> Document<ProductAttrs> {
    let self_link = product
        .id
        .map_or_else(|| BASE_PATH.to_string(), |id| format!("{}/{}", BASE_PATH, id));
    Document {
        data: resource(product),
        links: Some(Links::self_href(self_link)),
    }
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = ListDocument<ProductAttrs>),
        (status = 500, description = "Internal server error", body = ErrorDocument)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ListDocument<ProductAttrs>>> {
    let products = service.list().await?;
    let data = products.iter().map(resource).collect();

    Ok(Json(ListDocument::new(
        data,
        Links::self_href(BASE_PATH),
        Meta::total(products.len() as u64),
    )))
}

/// List one page of products
#[utoipa::path(
    get,
    path = "/paginated",
    tag = "Products",
    params(PageParams),
    responses(
        (status = 200, description = "One page of products", body = ListDocument<ProductAttrs>),
        (status = 400, description = "Malformed pagination parameters", body = ErrorDocument),
        (status = 500, description = "Internal server error", body = ErrorDocument)
    )
)]
async fn paginated_list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(params): QueryParams<PageParams>,
) -> ProductResult<Json<ListDocument<ProductAttrs>>> {
    let page = service
        .paginated_list(
            params.page.unwrap_or(1),
            params.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .await?;

    let data = page.items.iter().map(resource).collect();
    let self_link = format!(
        "{}/paginated?page={}&size={}",
        BASE_PATH, page.page, page.size
    );

    Ok(Json(ListDocument::new(
        data,
        Links::self_href(self_link),
        Meta::paged(page.total, page.page, page.size, page.total_pages()),
    )))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = RequestDocument<CreateProductAttrs>,
    responses(
        (status = 201, description = "Product created successfully", body = Document<ProductAttrs>),
        (status = 400, description = "Validation or semantic failure", body = ErrorDocument),
        (status = 500, description = "Internal server error", body = ErrorDocument)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedDocument(input): ValidatedDocument<CreateProductAttrs>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create(input.name, input.price).await?;
    Ok((StatusCode::CREATED, Json(single_document(&product))))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Document<ProductAttrs>),
        (status = 400, description = "Malformed product ID", body = ErrorDocument),
        (status = 404, description = "Product not found", body = ErrorDocument),
        (status = 500, description = "Internal server error", body = ErrorDocument)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Document<ProductAttrs>>> {
    let product = service.get(id).await?;
    Ok(Json(single_document(&product)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = RequestDocument<UpdateProductAttrs>,
    responses(
        (status = 200, description = "Product updated successfully", body = Document<ProductAttrs>),
        (status = 400, description = "Validation or semantic failure", body = ErrorDocument),
        (status = 404, description = "Product not found", body = ErrorDocument),
        (status = 500, description = "Internal server error", body = ErrorDocument)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedDocument(input): ValidatedDocument<UpdateProductAttrs>,
) -> ProductResult<Json<Document<ProductAttrs>>> {
    let product = service.update(id, input).await?;
    Ok(Json(single_document(&product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted (idempotent)"),
        (status = 400, description = "Malformed product ID", body = ErrorDocument),
        (status = 500, description = "Internal server error", body = ErrorDocument)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
