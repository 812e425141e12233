// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # pagewarm
//!
//! Discovers the statically-routable pages of an app-router project and
//! warms them up against a running development server, so first-compile
//! costs are paid before anyone opens the page in a browser.
//!
//! ## Features
//!
//! - File-based route discovery from the `app/` (or `src/app/`) directory
//! - Route groups dropped from URLs; private folders, parallel slots,
//!   intercepting and dynamic routes skipped
//! - Sequential warm-up, shallowest routes first, with a fixed cooldown
//! - Per-request failures reported without aborting the run
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pagewarm::routes::{find_app_dir, RouteResolver, DEFAULT_APP_DIRS};
//! use pagewarm::warmer::{SilentReporter, Warmer, WarmupConfig};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app_dir = find_app_dir(Path::new("."), &DEFAULT_APP_DIRS)?;
//! let routes = RouteResolver::default().discover(&app_dir)?.into_routes();
//!
//! let warmer = Warmer::new(WarmupConfig::default())?;
//! let summary = warmer.run(routes, &mut SilentReporter).await;
//! println!("{} of {} routes answered", summary.succeeded(), summary.total());
//! # Ok(())
//! # }
//! ```

/// Static route discovery from the app directory.
pub mod routes;
/// Sequential warm-up requests against the dev server.
pub mod warmer;

pub use routes::{Discovery, RouteResolver, RoutingError};
pub use warmer::{Warmer, WarmupConfig, WarmupError, WarmupSummary};
