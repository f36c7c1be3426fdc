//! User API Library
//!
//! This crate provides the HTTP REST API for the user resource: list, get,
//! create and delete, answered in a uniform `{ success, data }` envelope.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use domain::User;
use user_service_lib::{UserRepository, UserStore};

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Users loaded when the server starts with seeding enabled.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new(1, "Naruto", 10),
        User::new(2, "Sasuke", 18),
        User::new(3, "Kakashi", 50),
    ]
}

/// Run the HTTP server until Ctrl+C.
///
/// The in-memory store lives exactly as long as this call.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let repo: Arc<dyn UserRepository> = if config.seed {
        info!("Seeding repository with demo users");
        Arc::new(UserStore::with_users(demo_users()))
    } else {
        Arc::new(UserStore::new())
    };

    // Create app state
    let state = AppState::from_repository(repo);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = config.bind_address().parse()?;
    info!("User API listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("User API stopped, in-memory users discarded");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Received shutdown signal, stopping server...");
}
