use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::metrics::Metrics;
use crate::models::CartItem;
use crate::store::{OrderStore, OrderStoreError};

// ============================================================================
// Order Routes
// ============================================================================

/// Register the order routes on an actix app. Shared between the binary
/// and the integration tests so both exercise the same routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/orders")
            .route(web::post().to(create_order))
            .route(web::get().to(get_orders)),
    )
    .service(
        web::resource("/orders/{id}")
            .route(web::get().to(get_order))
            .route(web::patch().to(update_order_status)),
    );
}

// ============================================================================
// Error Translation
// ============================================================================

impl ResponseError for OrderStoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            OrderStoreError::EmptyCart | OrderStoreError::InvalidStatus(_) => {
                StatusCode::BAD_REQUEST
            }
            OrderStoreError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

fn rejection_reason(err: &OrderStoreError) -> &'static str {
    match err {
        OrderStoreError::EmptyCart => "empty_cart",
        OrderStoreError::NotFound(_) => "not_found",
        OrderStoreError::InvalidStatus(_) => "invalid_status",
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /orders — create an order from a cart snapshot.
async fn create_order(
    store: web::Data<OrderStore>,
    metrics: web::Data<Metrics>,
    items: web::Json<Vec<CartItem>>,
) -> Result<HttpResponse, OrderStoreError> {
    match store.create(items.into_inner()).await {
        Ok(order) => {
            metrics.record_order_created();
            tracing::info!(
                order_id = %order.id,
                total_amount = order.total_amount,
                item_count = order.items.len(),
                "Order created"
            );
            Ok(HttpResponse::Created().json(order))
        }
        Err(err) => {
            metrics.record_rejection(rejection_reason(&err));
            tracing::warn!(error = %err, "Order creation rejected");
            Err(err)
        }
    }
}

/// GET /orders — list every order. Result order is unspecified.
async fn get_orders(store: web::Data<OrderStore>) -> HttpResponse {
    let orders = store.get_all().await;
    tracing::debug!(count = orders.len(), "Listing orders");
    HttpResponse::Ok().json(orders)
}

/// GET /orders/{id} — fetch one order.
async fn get_order(
    store: web::Data<OrderStore>,
    metrics: web::Data<Metrics>,
    path: web::Path<String>,
) -> Result<HttpResponse, OrderStoreError> {
    let id = path.into_inner();
    match store.get_by_id(&id).await {
        Ok(order) => Ok(HttpResponse::Ok().json(order)),
        Err(err) => {
            metrics.record_rejection(rejection_reason(&err));
            tracing::debug!(order_id = %id, "Order lookup missed");
            Err(err)
        }
    }
}

#[derive(Deserialize)]
struct UpdateStatusRequest {
    status: String,
}

/// PATCH /orders/{id} — set the order's status, echoing the updated order.
async fn update_order_status(
    store: web::Data<OrderStore>,
    metrics: web::Data<Metrics>,
    path: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, OrderStoreError> {
    let id = path.into_inner();
    match store.update_status(&id, &body.status).await {
        Ok(order) => {
            metrics.record_status_update(order.status.as_str());
            tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");
            Ok(HttpResponse::Ok().json(order))
        }
        Err(err) => {
            metrics.record_rejection(rejection_reason(&err));
            tracing::warn!(order_id = %id, error = %err, "Status update rejected");
            Err(err)
        }
    }
}
