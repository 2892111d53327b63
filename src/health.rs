use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use sqlx::{Pool, Postgres};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    database: String,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Service and article store reachable", body = HealthResponse),
        (status = 503, description = "Article store unavailable")
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    match check_database_health(&state.db_pool).await {
        Ok(_) => {
            debug!("Health check passed");
            Ok(Json(HealthResponse {
                status: "OK".to_string(),
                database: "healthy".to_string(),
            }))
        }
        Err(err) => {
            error!(error = %err, "Database health check failed");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

async fn check_database_health(pool: &Pool<Postgres>) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, repositories::article::MockArticleRepositoryTrait};
    use sqlx::postgres::PgPoolOptions;
    use std::{sync::Arc, time::Duration};

    #[tokio::test]
    async fn test_unreachable_database_is_unavailable() {
        // Nothing listens on port 1; the lazy pool fails on first use.
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgresql://postgres@127.0.0.1:1/none")
            .unwrap();
        let state = AppState::with_repository(
            Arc::new(MockArticleRepositoryTrait::new()),
            pool,
            &Config::default(),
        );

        let result = health_check(State(state)).await;
        assert_eq!(result.err(), Some(StatusCode::SERVICE_UNAVAILABLE));
    }
}
