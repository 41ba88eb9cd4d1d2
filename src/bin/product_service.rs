use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use minishop::config::ServiceConfig;
use minishop::handlers::health::{health_handler, ServiceName};
use minishop::models::Product;

// ============================================================================
// Product Service - Static Read-Only Catalog
// ============================================================================

fn catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: 999.99,
        },
        Product {
            id: 2,
            name: "Phone".to_string(),
            price: 499.99,
        },
    ]
}

async fn get_products() -> impl Responder {
    HttpResponse::Ok().json(catalog())
}

/// Route table shared by the binary and its tests.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/products", web::get().to(get_products))
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

    let config = ServiceConfig::from_env("PRODUCT_SERVICE_PORT", 3001);
    let service_name = web::Data::new(ServiceName("product-service"));

    tracing::info!(host = %config.host, port = config.port, "🚀 Starting product service");

    HttpServer::new(move || {
        App::new()
            .app_data(service_name.clone())
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
