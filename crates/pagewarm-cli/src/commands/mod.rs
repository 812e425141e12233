// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI command implementations.
//!
//! - `run`: Discover static routes and warm them up (default)
//! - `routes`: List discovered routes in warm-up order without sending requests

/// Route listing command.
pub mod routes;
/// Warm-up command.
pub mod run;

use anyhow::Context;
use console::style;
use pagewarm::routes::{find_app_dir, Discovery, RouteResolver};
use std::path::Path;

use crate::config::Config;
use crate::output::print_skipped;

/// Locates the app directory under `project_root` and discovers its routes.
///
/// Any failure here is fatal: no partial route list is returned.
pub fn discover_routes(
    config: &Config,
    project_root: &Path,
    quiet: bool,
) -> anyhow::Result<Discovery> {
    let app_dir = match &config.routing.app_dir {
        Some(dir) => project_root.join(dir),
        None => find_app_dir(project_root, config.routing.app_dirs.as_slice())?,
    };

    if !quiet {
        let shown = app_dir.strip_prefix(project_root).unwrap_or(&app_dir);
        println!(
            "{} {}",
            style("App directory:").cyan(),
            style(format!("./{}", shown.display())).dim()
        );
        println!("Discovering routes...");
    }

    let discovery = RouteResolver::new(config.page_files())
        .discover(&app_dir)
        .context("Error discovering routes")?;

    if !quiet {
        print_skipped(discovery.skipped());
    }

    Ok(discovery)
}
