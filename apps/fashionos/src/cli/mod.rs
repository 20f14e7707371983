//! # FashionOS CLI Module
//!
//! This module implements the CLI interface for FashionOS.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `site` - Show the brand copy
//! - `collections` - List catalog collections
//! - `designers` - List catalog designers
//! - `designer` - Show a designer profile
//! - `check` - Run a draft file through the submission wizard

mod commands;

use clap::{Parser, Subcommand};
use fashionos_core::FashionError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// FashionOS - the atelier server
///
/// Serves the collection catalog and drives designer submission wizards.
#[derive(Parser, Debug)]
#[command(name = "fashionos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file (default: ./fashionos.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show the brand copy
    Site,

    /// List catalog collections
    Collections {
        /// Only collections by this designer
        #[arg(short, long)]
        designer: Option<String>,
    },

    /// List catalog designers
    Designers,

    /// Show a designer profile (featured designer if no id)
    Designer {
        /// Designer id
        id: Option<String>,
    },

    /// Walk a draft file through the wizard and report where it stops
    Check {
        /// Path to the draft file
        #[arg(short, long)]
        file: PathBuf,

        /// Draft format (json, toml)
        #[arg(short = 't', long, default_value = "json")]
        format: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), FashionError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => {
            cmd_server(cli.config.as_deref(), host, port, cli.verbose).await
        }
        Some(Commands::Site) | None => cmd_site(json_mode),
        Some(Commands::Collections { designer }) => {
            cmd_collections(json_mode, designer.as_deref())
        }
        Some(Commands::Designers) => cmd_designers(json_mode),
        Some(Commands::Designer { id }) => cmd_designer(json_mode, id.as_deref()),
        Some(Commands::Check { file, format }) => cmd_check(json_mode, &file, &format),
    }
}
