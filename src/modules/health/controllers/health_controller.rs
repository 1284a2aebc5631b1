use actix_web::HttpResponse;

/// Liveness endpoint
/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "rentkaro"
    }))
}
