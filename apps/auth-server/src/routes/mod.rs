use actix_web::web;

use crate::middleware::AuthGate;

pub mod auth;
pub mod health;
pub mod private;

/// Register every route. Protected routes live under `/api/private` behind `AuthGate`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .service(
            web::scope("/api/private")
                .wrap(AuthGate)
                .configure(private::configure_routes),
        );
}
