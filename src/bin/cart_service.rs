use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use tokio::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use minishop::config::ServiceConfig;
use minishop::handlers::health::{health_handler, ServiceName};
use minishop::models::CartItem;

// ============================================================================
// Cart Service - Non-Persistent Append List
// ============================================================================
//
// A single shared cart: GET reads it, POST appends one item, DELETE clears
// it. State lives for the process lifetime only.
//
// ============================================================================

type Cart = Mutex<Vec<CartItem>>;

async fn get_cart(cart: web::Data<Cart>) -> impl Responder {
    let items = cart.lock().await;
    HttpResponse::Ok().json(&*items)
}

async fn add_to_cart(cart: web::Data<Cart>, item: web::Json<CartItem>) -> impl Responder {
    let item = item.into_inner();
    tracing::debug!(product_id = item.id, name = %item.name, "Adding item to cart");
    cart.lock().await.push(item);
    HttpResponse::Created().finish()
}

async fn clear_cart(cart: web::Data<Cart>) -> impl Responder {
    cart.lock().await.clear();
    HttpResponse::Ok().finish()
}

/// Route table shared by the binary and its tests.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cart")
            .route(web::get().to(get_cart))
            .route(web::post().to(add_to_cart))
            .route(web::delete().to(clear_cart)),
    )
    .route("/health", web::get().to(health_handler));
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,minishop=debug")),
        )
        .init();

    let config = ServiceConfig::from_env("CART_SERVICE_PORT", 3002);
    let cart = web::Data::new(Cart::default());
    let service_name = web::Data::new(ServiceName("cart-service"));

    tracing::info!(host = %config.host, port = config.port, "🚀 Starting cart service");

    HttpServer::new(move || {
        App::new()
            .app_data(cart.clone())
            .app_data(service_name.clone())
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
