use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use clientes_api::{router, AppState};
use clientes_infrastructure::database::{connection, PgCustomerRepository};
use clientes_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize telemetry
    clientes_shared::telemetry::init_telemetry(&config.app.log_filter)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(&config.database).await?;
    connection::ensure_schema(&pool).await?;
    info!("Database connection established.");

    // Create App State
    let repo = Arc::new(PgCustomerRepository::new(pool.clone()));
    let state = AppState::new(repo, config.clone());

    // Build router
    let app = router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Release pooled connections whether or not serving failed
    pool.close().await;
    info!("Database pool closed.");

    served?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal");
}
