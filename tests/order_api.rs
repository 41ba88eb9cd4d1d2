use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use minishop::handlers::{self, health::ServiceName};
use minishop::metrics::{metrics_handler, Metrics};
use minishop::models::{Order, OrderStatus};
use minishop::store::OrderStore;

// ============================================================================
// Order Service API Tests
// ============================================================================
//
// Each test builds the same app the order-service binary runs, via the
// shared route configuration.
//
// ============================================================================

macro_rules! order_app {
    () => {{
        let store = web::Data::new(OrderStore::new());
        let metrics = web::Data::new(Metrics::new().unwrap());
        test::init_service(
            App::new()
                .app_data(store)
                .app_data(metrics)
                .app_data(web::Data::new(ServiceName("order-service")))
                .configure(handlers::orders::configure)
                .route("/health", web::get().to(handlers::health::health_handler))
                .route("/metrics", web::get().to(metrics_handler)),
        )
        .await
    }};
}

fn sample_items() -> Value {
    json!([
        { "id": 1, "name": "Laptop", "price": 999.99 },
        { "id": 2, "name": "Phone", "price": 499.99 }
    ])
}

#[actix_web::test]
async fn create_order_returns_201_with_order() {
    let app = order_app!();

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(sample_items())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let order: Order = test::read_body_json(resp).await;
    assert!(order.id.starts_with("ORD-"));
    assert_eq!(order.status, OrderStatus::Pending);
    assert!((order.total_amount - 1499.98).abs() < 1e-9);
    assert_eq!(order.items.len(), 2);
}

#[actix_web::test]
async fn create_order_rejects_empty_cart_with_400() {
    let app = order_app!();

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(json!([]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("error").is_some());
}

#[actix_web::test]
async fn create_order_rejects_malformed_body_with_400() {
    let app = order_app!();

    let req = test::TestRequest::post()
        .uri("/orders")
        .insert_header(("content-type", "application/json"))
        .set_payload("not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn order_json_uses_exact_wire_field_names() {
    let app = order_app!();

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(sample_items())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let obj = body.as_object().unwrap();
    for key in ["id", "items", "totalAmount", "status", "createdAt", "updatedAt"] {
        assert!(obj.contains_key(key), "missing wire field {key}");
    }
    assert_eq!(body["status"], "pending");

    // Optional item fields stay off the wire when absent.
    let item = body["items"][0].as_object().unwrap();
    assert!(item.contains_key("id"));
    assert!(item.contains_key("name"));
    assert!(item.contains_key("price"));
    assert!(!item.contains_key("quantity"));
    assert!(!item.contains_key("category"));
    assert!(!item.contains_key("description"));
}

#[actix_web::test]
async fn list_orders_returns_all_created_orders() {
    let app = order_app!();

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(sample_items())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/orders").to_request();
    let orders: Vec<Order> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(orders.len(), 3);
}

#[actix_web::test]
async fn get_order_by_id_round_trip() {
    let app = order_app!();

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(sample_items())
        .to_request();
    let created: Order = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/orders/{}", created.id))
        .to_request();
    let fetched: Order = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.id, created.id);
}

#[actix_web::test]
async fn get_unknown_order_returns_404() {
    let app = order_app!();

    let req = test::TestRequest::get()
        .uri("/orders/ORD-does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn patch_status_returns_updated_order() {
    let app = order_app!();

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(sample_items())
        .to_request();
    let created: Order = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/orders/{}", created.id))
        .set_json(json!({ "status": "completed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Order = test::read_body_json(resp).await;
    assert_eq!(updated.status, OrderStatus::Completed);
}

#[actix_web::test]
async fn patch_invalid_status_returns_400() {
    let app = order_app!();

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(sample_items())
        .to_request();
    let created: Order = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/orders/{}", created.id))
        .set_json(json!({ "status": "shipped" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Record is untouched.
    let req = test::TestRequest::get()
        .uri(&format!("/orders/{}", created.id))
        .to_request();
    let fetched: Order = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.status, OrderStatus::Pending);
}

#[actix_web::test]
async fn patch_unknown_order_returns_404() {
    let app = order_app!();

    let req = test::TestRequest::patch()
        .uri("/orders/ORD-does-not-exist")
        .set_json(json!({ "status": "completed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn health_and_metrics_endpoints_respond() {
    let app = order_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "order-service");

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
