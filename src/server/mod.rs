//! Development HTTP server.
//!
//! A minimal static responder over the site root: `GET /health` for
//! liveness, everything else resolved as a file. Port conflicts are fatal at
//! startup with a printed diagnostic.

use std::io::ErrorKind;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::constants::APP_BINARY_NAME;

mod static_files;

pub use static_files::serve_static;

/// Shared state for the request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Site root directory files are served from.
    pub root: PathBuf,
    /// `Cache-Control` header value applied to every served file.
    pub cache_control: String,
}

impl AppState {
    /// Creates the server state.
    #[must_use]
    pub fn new(root: PathBuf, cache_control: String) -> Self {
        Self {
            root,
            cache_control,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g. "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Creates the router: health endpoint plus static fallback.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .fallback(serve_static)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Prints the startup banner.
fn print_banner(root: &std::path::Path, addr: SocketAddr) {
    println!();
    println!("🚀 Portfolio site server started!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Serving from: {}", root.display());
    println!("🌐 Server running at: http://localhost:{}", addr.port());
    println!();
    println!("💡 Tips:");
    println!("   • Press Ctrl+C to stop the server");
    println!("   • Change port: {APP_BINARY_NAME} serve --port <port>");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();
}

/// Runs the server until interrupted.
///
/// A port already in use is reported and terminates the process with a
/// non-zero status; retrying is pointless without operator action.
pub async fn run_server(
    root: PathBuf,
    cache_control: String,
    addr: SocketAddr,
) -> anyhow::Result<()> {
    let state = AppState::new(root.clone(), cache_control);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) if err.kind() == ErrorKind::AddrInUse => {
            eprintln!("❌ Port {} is already in use.", addr.port());
            eprintln!(
                "💡 Try a different port: {} serve --port {}",
                APP_BINARY_NAME,
                addr.port().saturating_add(1)
            );
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    print_banner(&root, addr);
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
