use actix_web::{web, HttpResponse};
use serde_json::json;

/// Reachable only through `AuthGate`; answers once the caller's token checks out.
async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ping", web::get().to(ping));
}
