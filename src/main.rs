use actix_cors::Cors;
use actix_web::{http::header, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use uppetit_burden::config::{Config, LogFormat};
use uppetit_burden::middleware::{RateLimiter, RequestId};
use uppetit_burden::modules;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "uppetit_burden={},actix_web=info",
            config.app.log_level
        ))
    });
    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting UPPETIT tax burden calculator");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute)
        .context("Failed to create rate limiter")?;
    let allowed_origins = config.security.cors_allowed_origins.clone();

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .wrap(rate_limiter.clone())
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!(
        "Server started at http://{} ({} workers)",
        bind_address,
        config.server.workers
    );

    server.await.context("Server terminated with an error")
}
