// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! pagewarm CLI library.
//!
//! This crate provides the command-line interface for pagewarm. It finds
//! the `app/` directory of an app-router project, discovers its static
//! routes and warms them up on a running development server.
//!
//! # Usage
//!
//! This crate is primarily used through the `pagewarm` binary:
//!
//! ```bash
//! pagewarm               # Warm up every static route on localhost:3000
//! pagewarm --port 4000   # Target another port
//! pagewarm routes        # List routes without sending requests
//! ```
//!
//! # Configuration
//!
//! Projects may add a `pagewarm.toml` at the project root.

/// CLI commands (run, routes).
pub mod commands;
/// Project configuration from `pagewarm.toml`.
pub mod config;
/// Terminal output for discovery and warm-up progress.
pub mod output;
