use actix_web::{web, App, HttpServer};
use restaurant_api::config::app::ServerConfig;
use restaurant_api::infra::state::build_state;
use restaurant_api::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use restaurant_api::{routes, telemetry};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(config.db_kind)
        .with_security(config.security.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, db = %config.db_kind, "Starting restaurant API");

    let data = web::Data::new(app_state);
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
