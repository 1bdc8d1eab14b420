//! Server state and configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::assets::LabelAssets;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Directory holding the label font and optional logo
    pub assets_dir: PathBuf,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Font and logo, loaded once at startup.
    pub assets: LabelAssets,
    /// Unix timestamp of server boot for cache busting.
    pub boot_time: u64,
}

impl AppState {
    pub fn new(config: ServerConfig, assets: LabelAssets) -> Self {
        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        Self {
            config,
            assets,
            boot_time,
        }
    }
}
