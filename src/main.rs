//! Putka results service - Application Entry Point

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use putka::{config::Config, db, handlers, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Putka results service...");
    tracing::info!(
        personality = %config.putka.personality,
        jailrun_details = config.putka.masking.jailrun_details,
        presentation_errors = config.putka.masking.presentation_errors,
        "Deployment personality"
    );

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database).await?;
    db::test_connection(&db_pool).await?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    // Create application state
    let state = AppState::new(db_pool, config);
    let app = handlers::create_router(state);

    // Start the server
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
