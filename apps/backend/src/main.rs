use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::{web, App, HttpServer};
use beqst::config::AppConfig;
use beqst::extractors::JsonBodyLimit;
use beqst::infra::state::build_state;
use beqst::middleware::cors::cors_middleware;
use beqst::middleware::rate_limit::{api_rate_limit_config, auth_rate_limit_config};
use beqst::middleware::request_trace::RequestTrace;
use beqst::middleware::security_headers::SecurityHeaders;
use beqst::middleware::structured_logger::StructuredLogger;
use beqst::middleware::trace_span::TraceSpan;
use beqst::routes;
use beqst::state::security_config::SecurityConfig;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(config.runtime_env)
        .with_db(config.db_kind)
        .with_security(SecurityConfig::new(config.jwt_secret.as_bytes()))
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "starting beqst backend");

    let data = web::Data::new(app_state);
    let json_limit = config.max_json_payload_size;
    let auth_backend = InMemoryBackend::builder().build();
    let api_backend = InMemoryBackend::builder().build();

    HttpServer::new(move || {
        let auth_limiter =
            RateLimiter::builder(auth_backend.clone(), auth_rate_limit_config().build())
                .add_headers()
                .build();
        let api_limiter =
            RateLimiter::builder(api_backend.clone(), api_rate_limit_config().build())
                .add_headers()
                .build();

        App::new()
            .wrap(cors_middleware())
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .app_data(JsonBodyLimit(json_limit))
            .configure(routes::health::configure_routes)
            .service(
                web::scope("/api/auth")
                    .wrap(auth_limiter)
                    .configure(routes::auth::configure_routes),
            )
            .service(
                web::scope("/api")
                    .wrap(api_limiter)
                    .configure(routes::configure_api),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
