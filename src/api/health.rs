//! Health check endpoint.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, web};
use chrono::Utc;
use sea_orm::DbErr;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbPool;

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    initialized: bool,
    timestamp: String,
}

/// Map a ping outcome to the reported service state.
///
/// Connection-class failures mean the database is unreachable (503);
/// any other driver error means it answered but something is wrong
/// with it (500).
fn classify_ping(result: &Result<(), DbErr>) -> (StatusCode, &'static str, &'static str) {
    match result {
        Ok(()) => (StatusCode::OK, "ok", "connected"),
        Err(DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) => {
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable", "disconnected")
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "error", "error"),
    }
}

/// Health check endpoint.
///
/// Returns 200 when the database answers a ping, 503 when it is
/// unreachable, 500 when the ping fails for any other reason.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Database error", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health(pool: web::Data<DbPool>) -> HttpResponse {
    let initialized = pool.is_initialized();
    let timestamp = Utc::now().to_rfc3339();

    let result = pool.ping().await;
    if let Err(e) = &result {
        error!("Database ping failed: {}", e);
    }

    let (code, status, database) = classify_ping(&result);
    HttpResponse::build(code).json(HealthResponse {
        status,
        database,
        initialized,
        timestamp,
    })
}

/// Configure health routes.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use sea_orm::RuntimeErr;

    use super::*;

    #[test]
    fn test_healthy_ping_is_connected() {
        let (code, status, database) = classify_ping(&Ok(()));
        assert_eq!(code, StatusCode::OK);
        assert_eq!(status, "ok");
        assert_eq!(database, "connected");
    }

    #[test]
    fn test_connection_failure_is_disconnected() {
        let err = DbErr::Conn(RuntimeErr::Internal("connection refused".to_string()));
        let (code, status, database) = classify_ping(&Err(err));
        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status, "unavailable");
        assert_eq!(database, "disconnected");
    }

    #[test]
    fn test_query_failure_is_error_state() {
        let err = DbErr::Query(RuntimeErr::Internal("relation is gone".to_string()));
        let (code, status, database) = classify_ping(&Err(err));
        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status, "error");
        assert_eq!(database, "error");
    }
}
