//! # FashionOS - Atelier Server
//!
//! The main binary for the FashionOS collection site.
//!
//! This application provides:
//! - HTTP JSON API server (axum-based)
//! - CLI interface for the catalog and draft checks
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  apps/fashionos (THE BINARY)                 │
//! │                                                              │
//! │  ┌─────────────┐   ┌─────────────┐   ┌──────────────────┐    │
//! │  │    CLI      │   │  HTTP API   │   │ Submission       │    │
//! │  │   (clap)    │   │   (axum)    │   │ Gateway (tokio)  │    │
//! │  └──────┬──────┘   └──────┬──────┘   └────────┬─────────┘    │
//! │         │                 │                   │              │
//! │         └─────────────────┼───────────────────┘              │
//! │                           ▼                                  │
//! │                  ┌─────────────────┐                         │
//! │                  │ fashionos-core  │                         │
//! │                  │  (THE LOGIC)    │                         │
//! │                  └─────────────────┘                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! fashionos server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! fashionos collections
//! fashionos designers
//! fashionos designer d1
//! fashionos check -f draft.toml -t toml
//! ```

use clap::Parser;
use fashionos::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // FASHIONOS_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("FASHIONOS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fashionos=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the FashionOS startup banner.
fn print_banner() {
    println!(
        r#"
  ███████╗ █████╗ ███████╗██╗  ██╗██╗ ██████╗ ███╗   ██╗ ██████╗ ███████╗
  ██╔════╝██╔══██╗██╔════╝██║  ██║██║██╔═══██╗████╗  ██║██╔═══██╗██╔════╝
  █████╗  ███████║███████╗███████║██║██║   ██║██╔██╗ ██║██║   ██║███████╗
  ██╔══╝  ██╔══██║╚════██║██╔══██║██║██║   ██║██║╚██╗██║██║   ██║╚════██║
  ██║     ██║  ██║███████║██║  ██║██║╚██████╔╝██║ ╚████║╚██████╔╝███████║
  ╚═╝     ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝╚═╝ ╚═════╝ ╚═╝  ╚═══╝ ╚═════╝ ╚══════╝

  Atelier Server v{}

  Defining the future of aesthetic intelligence.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
