//! # HTTP Server for the Label Composer
//!
//! Provides the web interface: QR upload, layout sliders, first-page
//! preview, and the PDF download.
//!
//! ## Usage
//!
//! ```bash
//! mesita serve --listen 0.0.0.0:8080 --assets assets
//! ```
//!
//! Then open http://localhost:8080 in a browser.

mod handlers;
mod state;
mod static_files;

pub use state::ServerConfig;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

use crate::assets::LabelAssets;
use crate::error::MesitaError;
use state::AppState;

/// Upload size limit: plenty for a batch of QR scans.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Start the HTTP server.
///
/// Loads assets up front so a missing font fails here, before the socket
/// is bound, rather than on the first request.
///
/// ## Example
///
/// ```no_run
/// use mesita::server::{ServerConfig, serve};
///
/// # async fn example() -> Result<(), mesita::error::MesitaError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     assets_dir: "assets".into(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), MesitaError> {
    let assets = LabelAssets::load(&config.assets_dir)?;
    let app_state = Arc::new(AppState::new(config.clone(), assets));

    let app = Router::new()
        // Frontend
        .route("/", get(static_files::index_handler))
        .route("/assets/*path", get(static_files::asset_handler))
        // Label API
        .route("/api/status", get(handlers::status))
        .route(
            "/api/tags/preview",
            post(handlers::preview).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/api/tags/pdf",
            post(handlers::pdf).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .with_state(app_state);

    println!("Mesita HTTP server starting...");
    println!("Listening on: {}", config.listen_addr);
    println!("Asset directory: {}", config.assets_dir.display());
    println!();
    println!(
        "Open http://{}/ in your browser to compose labels",
        config.listen_addr
    );
    println!();

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            MesitaError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| MesitaError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
