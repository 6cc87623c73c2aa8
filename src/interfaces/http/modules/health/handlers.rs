//! Health check handler

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::RepositoryProvider;

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub started_at: Arc<Instant>,
}

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub database: ComponentHealth,
}

/// Component health status
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: String,
    pub latency_ms: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is degraded", body = HealthResponse)
    )
)]
pub async fn health_check(
    State(state): State<HealthState>,
) -> (StatusCode, Json<HealthResponse>) {
    let uptime = state.started_at.elapsed().as_secs();

    let db_start = Instant::now();
    let database = match state.repos.ping().await {
        Ok(()) => ComponentHealth {
            status: "ok".to_string(),
            latency_ms: Some(db_start.elapsed().as_millis() as u64),
        },
        Err(e) => {
            warn!("Health check: store ping failed: {}", e);
            ComponentHealth {
                status: "error".to_string(),
                latency_ms: None,
            }
        }
    };

    let (status, http_status) = if database.status == "ok" {
        ("ok", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: uptime,
            database,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::domain::{
        AppointmentRepository, ContactRepository, DomainError, DomainResult, ServiceRepository,
    };
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    /// Delegates to the in-memory store but fails every ping.
    struct Unreachable(InMemoryRepositoryProvider);

    #[async_trait]
    impl RepositoryProvider for Unreachable {
        fn services(&self) -> &dyn ServiceRepository {
            self.0.services()
        }
        fn appointments(&self) -> &dyn AppointmentRepository {
            self.0.appointments()
        }
        fn contacts(&self) -> &dyn ContactRepository {
            self.0.contacts()
        }
        async fn ping(&self) -> DomainResult<()> {
            Err(DomainError::Storage("connection refused".into()))
        }
    }

    fn state(repos: Arc<dyn RepositoryProvider>) -> State<HealthState> {
        State(HealthState {
            repos,
            started_at: Arc::new(Instant::now()),
        })
    }

    #[tokio::test]
    async fn healthy_store_reports_ok() {
        let (status, Json(body)) =
            health_check(state(Arc::new(InMemoryRepositoryProvider::new()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.database.status, "ok");
        assert!(body.database.latency_ms.is_some());
    }

    #[tokio::test]
    async fn failed_ping_is_503() {
        let (status, Json(body)) =
            health_check(state(Arc::new(Unreachable(InMemoryRepositoryProvider::new())))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.database.latency_ms, None);
    }
}
