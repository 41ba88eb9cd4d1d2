use std::env;

// ============================================================================
// Service Configuration
// ============================================================================

/// Listener configuration shared by all three services.
///
/// `BIND_HOST` applies to every service; the port variable is per-service
/// (`ORDER_SERVICE_PORT`, `PRODUCT_SERVICE_PORT`, `CART_SERVICE_PORT`).
/// Unset or unparsable values fall back to the defaults.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}

impl ServiceConfig {
    pub fn from_env(port_var: &str, default_port: u16) -> Self {
        let host = env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var(port_var)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(default_port);

        Self { host, port }
    }
}
