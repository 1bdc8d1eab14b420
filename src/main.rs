//! # Mesita CLI
//!
//! Command-line entry point for the label composer.
//!
//! ## Usage
//!
//! ```bash
//! # Serve the web UI on the default port
//! mesita serve
//!
//! # Custom listen address and asset directory
//! mesita serve --listen 0.0.0.0:9000 --assets /srv/mesita/assets
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mesita::{MesitaError, server::ServerConfig};

/// Mesita - table-tent QR label composer
#[derive(Parser, Debug)]
#[command(name = "mesita")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the web UI
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Directory holding the label font and optional logo
        #[arg(long, default_value = "assets")]
        assets: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), MesitaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen, assets } => {
            let config = ServerConfig {
                listen_addr: listen,
                assets_dir: assets,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(mesita::server::serve(config))
        }
    }
}
