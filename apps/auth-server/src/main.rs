use actix_web::{web, App, HttpServer};
use auth_server::config::ServerConfig;
use auth_server::middleware::{RequestTrace, StructuredLogger};
use auth_server::routes;
use auth_server::state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // The signing secret is read here, once, and injected from then on.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(host = %config.host, port = config.port, "starting auth server");

    let data = web::Data::new(AppState::new(config.security));

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
