//! # Configuration
//!
//! Settings come from three layers, later layers winning:
//! 1. Built-in defaults
//! 2. A TOML file (`--config <path>`, or `fashionos.toml` in the working
//!    directory when present)
//! 3. Environment variables
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! rate_limit = 100                      # requests/second, 0 disables
//! cors_origins = ["https://atelier.example"]   # or ["*"]
//! body_limit_bytes = 16777216
//!
//! [wizard]
//! submit_delay_ms = 1000
//! max_sessions = 1000                   # 0 disables the cap
//! ```
//!
//! ## Environment Variables
//!
//! - `FASHIONOS_HOST`, `FASHIONOS_PORT`
//! - `FASHIONOS_RATE_LIMIT`
//! - `FASHIONOS_CORS_ORIGINS`: comma-separated origins, or `*`
//! - `FASHIONOS_SUBMIT_DELAY_MS`, `FASHIONOS_MAX_SESSIONS`
//! - `FASHIONOS_API_KEY`: if set, every endpoint except `/health` requires it
//!   (never read from the file)

use fashionos_core::FashionError;
use fashionos_core::primitives::DEFAULT_SUBMIT_DELAY_MS;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// File picked up when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "fashionos.toml";

/// Upper bound on a config file (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Live wizard sessions held at once.
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

// =============================================================================
// SETTINGS
// =============================================================================

/// All runtime settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub wizard: WizardSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Requests per second; 0 disables rate limiting.
    pub rate_limit: u32,
    /// Allowed CORS origins. `None` means localhost only; `["*"]` allows all.
    pub cors_origins: Option<Vec<String>>,
    /// Maximum request body. Image uploads arrive base64-encoded.
    pub body_limit_bytes: usize,
    /// Operator API key. Environment only.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rate_limit: 100,
            cors_origins: None,
            body_limit_bytes: 16 * 1024 * 1024,
            api_key: None,
        }
    }
}

/// Submission wizard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSettings {
    /// Delay of the simulated submission.
    pub submit_delay_ms: u64,
    /// Live sessions held at once; 0 disables the cap.
    pub max_sessions: usize,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl Settings {
    /// Load settings: defaults, then the file, then the process environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, FashionError> {
        let mut settings = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        settings.apply_overrides(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Read a TOML settings file.
    pub fn from_file(path: &Path) -> Result<Self, FashionError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            FashionError::Config(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(FashionError::Config(format!(
                "Config file {} bytes exceeds maximum {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| FashionError::IoError(format!("Read config: {}", e)))?;
        Self::from_toml_str(&raw)
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, FashionError> {
        toml::from_str(raw).map_err(|e| FashionError::Config(e.to_string()))
    }

    /// Apply `FASHIONOS_*` overrides from `lookup`.
    ///
    /// Unparseable numbers are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("FASHIONOS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_override(&lookup, "FASHIONOS_PORT") {
            self.server.port = port;
        }
        if let Some(limit) = parse_override(&lookup, "FASHIONOS_RATE_LIMIT") {
            self.server.rate_limit = limit;
        }
        if let Some(origins) = lookup("FASHIONOS_CORS_ORIGINS") {
            self.server.cors_origins = Some(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }
        if let Some(delay) = parse_override(&lookup, "FASHIONOS_SUBMIT_DELAY_MS") {
            self.wizard.submit_delay_ms = delay;
        }
        if let Some(max) = parse_override(&lookup, "FASHIONOS_MAX_SESSIONS") {
            self.wizard.max_sessions = max;
        }
        if let Some(key) = lookup("FASHIONOS_API_KEY").filter(|k| !k.is_empty()) {
            self.server.api_key = Some(key);
        }
    }

    /// `host:port` to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Delay of the simulated submission.
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.wizard.submit_delay_ms)
    }
}

fn parse_override<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring {}: '{}' is not a valid number", key, raw);
            None
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
