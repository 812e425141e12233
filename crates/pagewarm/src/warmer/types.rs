// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Type definitions for the warm-up driver.

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Default dev server address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout. First compiles of large pages are slow.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default cooldown between two requests.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Settings for a warm-up run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmupConfig {
    /// Base URL every route is appended to (default: "http://localhost:3000")
    pub base_url: String,

    /// Per-request timeout (default: 15s)
    pub timeout: Duration,

    /// Cooldown between requests (default: 1s)
    pub delay: Duration,
}

impl WarmupConfig {
    /// Config targeting `http://localhost:<port>` with default timings.
    pub fn for_port(port: u16) -> Self {
        Self {
            base_url: format!("http://localhost:{}", port),
            ..Self::default()
        }
    }

    /// Absolute URL for a route.
    pub fn url_for(&self, route: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), route)
    }
}

impl Default for WarmupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            delay: DEFAULT_DELAY,
        }
    }
}

/// Error types for a single warm-up request.
#[derive(Debug, Error)]
pub enum WarmupError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// The server did not answer within the timeout.
    #[error("Request to {url} timed out after {}s", .timeout.as_secs_f64())]
    Timeout {
        /// Requested URL.
        url: String,
        /// Timeout that elapsed.
        timeout: Duration,
    },

    /// Connection refused, reset, or any other transport failure.
    #[error("Request to {url} failed: {message}")]
    Request {
        /// Requested URL.
        url: String,
        /// Underlying error message.
        message: String,
    },
}

/// How a single route fared
#[derive(Debug)]
pub enum WarmupOutcome {
    /// The server answered; any status counts.
    Success {
        /// Response status.
        status: StatusCode,
        /// Wall-clock time until the response headers arrived.
        elapsed: Duration,
    },

    /// No response.
    Failed {
        /// What went wrong.
        error: WarmupError,
        /// Wall-clock time spent before giving up.
        elapsed: Duration,
    },
}

/// Outcome of warming up one route
#[derive(Debug)]
pub struct WarmupResult {
    /// Route path (e.g., "/blog")
    pub route: String,

    /// Absolute URL requested
    pub url: String,

    /// Success or failure details
    pub outcome: WarmupOutcome,
}

impl WarmupResult {
    /// Returns true if the server answered.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, WarmupOutcome::Success { .. })
    }
}

/// Results of a whole run, in visiting order
#[derive(Debug, Default)]
pub struct WarmupSummary {
    /// One entry per visited route.
    pub results: Vec<WarmupResult>,
}

impl WarmupSummary {
    /// Number of visited routes.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of routes the server answered.
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Number of routes that failed.
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }
}
