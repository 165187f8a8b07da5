//! Handler tests for the Products domain
//!
//! These tests drive the axum router end to end over the in-memory
//! repository and verify:
//! - JSON:API request/response envelopes
//! - HTTP status codes
//! - the error envelope on every failure path

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = ProductService::new(InMemoryProductRepository::new());
    handlers::router(service)
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn create_body(name: &str, price: &str) -> Value {
    json!({"data": {"attributes": {"name": name, "price": price}}})
}

/// Create a product and return its id
async fn create_product(app: &Router, name: &str, price: &str) -> String {
    let response = app
        .clone()
        .oneshot(post("/", create_body(name, price)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_returns_201_with_jsonapi_envelope() {
    let app = app();

    let response = app
        .oneshot(post("/", create_body("Widget", "9.99")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response.into_body()).await;

    assert_eq!(body["data"]["type"], "products");
    assert_eq!(body["data"]["attributes"]["name"], "Widget");
    assert_eq!(body["data"]["attributes"]["price"], "9.99");

    let id = body["data"]["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(
        body["links"]["self"].as_str().unwrap(),
        format!("/api/products/{}", id)
    );
}

#[tokio::test]
async fn create_accepts_a_numeric_price() {
    let app = app();

    let response = app
        .oneshot(post(
            "/",
            json!({"data": {"attributes": {"name": "Gadget", "price": 19.99}}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["attributes"]["price"], "19.99");
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = app();
    let id = create_product(&app, "Widget", "9.99").await;

    let response = app
        .oneshot(get(&format!("/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["attributes"]["name"], "Widget");
    assert_eq!(body["data"]["attributes"]["price"], "9.99");
}

#[tokio::test]
async fn create_with_blank_name_is_a_validation_error() {
    let app = app();

    let response = app
        .oneshot(post("/", create_body("   ", "9.99")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    let errors = body["errors"].as_array().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["status"], "400");
    assert_eq!(errors[0]["title"], "Validation Error");
    assert!(errors[0]["detail"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn create_with_missing_price_is_a_validation_error() {
    let app = app();

    let response = app
        .oneshot(post("/", json!({"data": {"attributes": {"name": "Widget"}}})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["errors"][0]["title"], "Validation Error");
    assert!(body["errors"][0]["detail"].as_str().unwrap().contains("price"));
}

#[tokio::test]
async fn create_with_zero_price_is_rejected() {
    let app = app();

    let response = app
        .oneshot(post("/", create_body("Widget", "0")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
    assert_eq!(body["errors"][0]["status"], "400");
}

#[tokio::test]
async fn malformed_body_is_a_bad_request_envelope() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["errors"][0]["title"], "Bad Request");
}

#[tokio::test]
async fn get_unknown_id_returns_404_envelope() {
    let app = app();

    let response = app
        .oneshot(get("/0198c5e8-0000-7000-8000-000000000000"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["status"], "404");
    assert_eq!(errors[0]["title"], "Not Found");
}

#[tokio::test]
async fn get_with_malformed_id_returns_400() {
    let app = app();

    let response = app.oneshot(get("/not-a-uuid")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["errors"][0]["title"], "Bad Request");
}

#[tokio::test]
async fn update_with_price_only_keeps_the_name() {
    let app = app();
    let id = create_product(&app, "Old", "9.99").await;

    let response = app
        .oneshot(put(
            &format!("/{}", id),
            json!({"data": {"attributes": {"price": "15.00"}}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["attributes"]["name"], "Old");
    assert_eq!(body["data"]["attributes"]["price"], "15.00");
}

#[tokio::test]
async fn update_with_zero_price_is_a_bad_request() {
    let app = app();
    let id = create_product(&app, "Widget", "9.99").await;

    let response = app
        .oneshot(put(
            &format!("/{}", id),
            json!({"data": {"attributes": {"price": "0"}}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["errors"][0]["title"], "Bad Request");
    assert!(body["errors"][0]["detail"].as_str().unwrap().contains("price"));
}

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let app = app();

    let response = app
        .oneshot(put(
            "/0198c5e8-0000-7000-8000-000000000000",
            json!({"data": {"attributes": {"price": "15.00"}}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_204_and_is_idempotent() {
    let app = app();
    let id = create_product(&app, "Widget", "9.99").await;

    let response = app.clone().oneshot(delete(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting the same id again still succeeds
    let response = app.clone().oneshot(delete(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_all_products_with_total_count() {
    let app = app();
    create_product(&app, "Widget", "9.99").await;
    create_product(&app, "Gadget", "19.99").await;

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["meta"]["totalCount"], 2);
    assert_eq!(body["links"]["self"], "/api/products");
}

#[tokio::test]
async fn paginated_list_clamps_page_and_size() {
    let app = app();
    for i in 1..=3 {
        create_product(&app, &format!("P{}", i), "1.00").await;
    }

    // page=0 clamps to 1, size=2 is honored
    let response = app
        .clone()
        .oneshot(get("/paginated?page=0&size=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["meta"]["totalCount"], 3);
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["size"], 2);
    assert_eq!(body["meta"]["totalPages"], 2);

    // size above the maximum clamps to 100
    let response = app
        .oneshot(get("/paginated?page=1&size=500"))
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["meta"]["size"], 100);
}

#[tokio::test]
async fn paginated_list_with_a_huge_page_number_is_an_empty_page() {
    let app = app();
    create_product(&app, "Widget", "9.99").await;

    let response = app
        .oneshot(get(&format!("/paginated?page={}&size=100", i64::MAX)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["meta"]["totalCount"], 1);
}

#[tokio::test]
async fn paginated_list_with_a_non_numeric_page_is_a_bad_request_envelope() {
    let app = app();

    let response = app.oneshot(get("/paginated?page=abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["status"], "400");
    assert_eq!(errors[0]["title"], "Bad Request");
}

#[tokio::test]
async fn paginated_list_second_page_holds_the_remainder() {
    let app = app();
    for i in 1..=3 {
        create_product(&app, &format!("P{}", i), "1.00").await;
    }

    let response = app.oneshot(get("/paginated?page=2&size=2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["attributes"]["name"], "P3");
    assert_eq!(body["meta"]["page"], 2);
}
