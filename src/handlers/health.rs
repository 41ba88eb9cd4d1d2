use actix_web::{web, HttpResponse, Responder};

/// Name under which a service reports itself at /health. Registered as
/// app data by each binary.
#[derive(Clone, Debug)]
pub struct ServiceName(pub &'static str);

pub async fn health_handler(service: web::Data<ServiceName>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": service.0
    }))
}
