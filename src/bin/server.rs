//! TeamAI HTTP server binary.
//!
//! Starts an axum HTTP server exposing the chat and team-management
//! endpoints backed by the in-memory core.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8080)
//! - `RUST_LOG` — Tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use teamai::server::{app_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,teamai=debug".into()),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{}", port);

    let state = AppState::new();
    let app = app_router(state);

    tracing::info!("teamai server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health         — liveness probe");
    tracing::info!("  POST /api/chat       — compose character responses");
    tracing::info!("  GET  /api/teams      — list teams for a user");
    tracing::info!("  POST /api/teams      — create a team");
    tracing::info!("  GET  /api/characters — character catalog");
    tracing::info!("  GET  /api/plans      — subscription plans");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
