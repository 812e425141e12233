// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! pagewarm configuration.
//!
//! Configuration is loaded from `pagewarm.toml` in the working directory.
//! Every field is optional; command-line flags override file values.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! base_url = "http://localhost:3000"
//! timeout_ms = 15000
//! delay_ms = 1000
//!
//! [routing]
//! app_dirs = ["app", "src/app"]
//! extensions = ["js", "jsx", "ts", "tsx"]
//! ```

use clap::Args;
use pagewarm::routes::{PageFileConfig, DEFAULT_APP_DIRS};
use pagewarm::warmer::{WarmupConfig, DEFAULT_BASE_URL, DEFAULT_DELAY, DEFAULT_TIMEOUT};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "pagewarm.toml";

/// Main configuration structure loaded from `pagewarm.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Target dev server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Route discovery settings.
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Target dev server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Base URL routes are appended to (default: "http://localhost:3000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in milliseconds (default: 15000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Cooldown between requests in milliseconds (default: 1000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

/// Route discovery configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct RoutingConfig {
    /// App directory candidates, checked in order (default: "app", "src/app").
    #[serde(default = "default_app_dirs")]
    pub app_dirs: Vec<String>,

    /// Explicit app directory; skips the candidate search when set.
    #[serde(default)]
    pub app_dir: Option<String>,

    /// Page file extensions (default: js, jsx, ts, tsx).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

fn default_app_dirs() -> Vec<String> {
    DEFAULT_APP_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    PageFileConfig::default().extensions
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            app_dirs: default_app_dirs(),
            app_dir: None,
            extensions: default_extensions(),
        }
    }
}

/// Command-line overrides for configuration values.
#[derive(Debug, Default, Clone, Args)]
pub struct Overrides {
    /// Base URL of the dev server (e.g. http://localhost:3000)
    #[arg(long, global = true, conflicts_with = "port")]
    pub base_url: Option<String>,

    /// Port of the dev server on localhost
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Cooldown between requests in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub delay: Option<u64>,

    /// App directory to scan instead of searching app/ and src/app/
    #[arg(long, global = true, value_name = "DIR")]
    pub app_dir: Option<String>,
}

impl Config {
    /// Loads configuration from `pagewarm.toml` in the current directory.
    ///
    /// If no configuration file exists, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads configuration from the given file, falling back to defaults if it is missing.
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", config_path.display(), e))?;
        tracing::debug!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    /// Applies command-line overrides on top of file values.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(base_url) = &overrides.base_url {
            self.server.base_url = base_url.clone();
        }
        if let Some(port) = overrides.port {
            self.server.base_url = WarmupConfig::for_port(port).base_url;
        }
        if let Some(timeout) = overrides.timeout {
            self.server.timeout_ms = timeout;
        }
        if let Some(delay) = overrides.delay {
            self.server.delay_ms = delay;
        }
        if let Some(app_dir) = &overrides.app_dir {
            self.routing.app_dir = Some(app_dir.clone());
        }
    }

    /// Warm-up settings derived from `[server]`.
    pub fn warmup_config(&self) -> WarmupConfig {
        WarmupConfig {
            base_url: self.server.base_url.clone(),
            timeout: Duration::from_millis(self.server.timeout_ms),
            delay: Duration::from_millis(self.server.delay_ms),
        }
    }

    /// Page file convention derived from `[routing]`.
    pub fn page_files(&self) -> PageFileConfig {
        PageFileConfig::with_extensions(self.routing.extensions.iter().cloned())
    }
}
