use anyhow::Result;
use bantupilih::{
    app_state::AppState,
    config::{Config, LogFormat},
    router::router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    match config.log_format() {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }

    // Create database connection pool
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(config.database_url())
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app = router(AppState::new(pool, &config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(
        addr = %config.bind_addr(),
        site = %config.site_url(),
        "BantuPilih content service listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
