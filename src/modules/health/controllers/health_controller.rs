use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::burden::models::Inputs;
use crate::modules::burden::services::calculate;

pub const SERVICE_NAME: &str = "uppetit-burden";

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub application: bool,
    pub calculator: bool,
}

/// GET /health - Liveness probe
/// Returns 200 if the application is alive (can respond to requests)
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Runs a zero-turnover calculation and checks the ratio guards hold
pub async fn readiness_check() -> impl Responder {
    let probe = calculate(&Inputs::new(Default::default(), Default::default()));
    let calculator = probe.margin.is_none() && probe.total_tax == probe.derived.fixed_insurance;

    if !calculator {
        tracing::error!("Calculator readiness check failed");
    }

    let response = ReadinessResponse {
        ready: calculator,
        checks: ReadinessChecks {
            application: true,
            calculator,
        },
    };

    if calculator {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
