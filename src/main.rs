use actix_web::{web, App, HttpServer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use minishop::config::ServiceConfig;
use minishop::handlers::{self, health::ServiceName};
use minishop::metrics::{metrics_handler, Metrics};
use minishop::store::OrderStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run --bin order-service
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,minishop=debug")),
        )
        .init();

    let config = ServiceConfig::from_env("ORDER_SERVICE_PORT", 3003);

    // One store and one metrics registry per process, shared across workers.
    let store = web::Data::new(OrderStore::new());
    let metrics = web::Data::new(Metrics::new()?);
    let service_name = web::Data::new(ServiceName("order-service"));

    tracing::info!(
        host = %config.host,
        port = config.port,
        "🚀 Starting order service"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(metrics.clone())
            .app_data(service_name.clone())
            .configure(handlers::orders::configure)
            .route("/health", web::get().to(handlers::health::health_handler))
            .route("/metrics", web::get().to(metrics_handler))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
