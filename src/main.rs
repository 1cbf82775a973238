use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use garage_management::config::database::DatabaseConfig;
use garage_management::config::environment::EnvironmentConfig;
use garage_management::database;
use garage_management::routes::create_router;
use garage_management::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("garage_management=debug,tower_http=info")),
        )
        .init();

    info!("🔧 Garage Management API");
    info!("========================");

    let config = EnvironmentConfig::default();

    let pool = match DatabaseConfig::new(&config.database_url).create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error connecting to the database: {}", e);
            return Err(anyhow::anyhow!("Database error: {}", e));
        }
    };

    database::init_schema(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Schema initialization failed: {}", e))?;
    database::seed_defaults(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Seeding defaults failed: {}", e))?;

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = create_router(AppState::new(pool, config));

    info!("🌐 Server listening on http://{}", addr);
    info!("🔍 Resource endpoints under /api:");
    info!("   /api/customers  /api/vehicles  /api/brands  /api/repairs");
    info!("   /api/parts  /api/services  /api/payments  /api/imports");
    info!("   /api/settings  /api/limits  /api/reports  /api/accounts");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Server error: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Server stopped");
    Ok(())
}

/// Graceful shutdown on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
