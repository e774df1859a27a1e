//! Serve command - Starts the HTTP server.

use crate::api::{cors_layer, create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!(password_storage = %config.password_storage, "Starting server...");

    // Fresh in-memory credential store; accounts do not survive a restart
    let app_state = AppState::from_config(&config)?;

    let mut app = create_router(app_state);
    if let Some(origin) = config.cors_allowed_origin.as_deref() {
        app = app.layer(cors_layer(origin)?);
        tracing::info!(origin, "CORS enabled");
    }

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
