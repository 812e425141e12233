// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Route listing command (dry run).

use console::style;
use pagewarm::warmer::order_routes;

use crate::config::Config;

/// Prints the routes `run` would visit, in the order it would visit them.
pub fn run(config: &Config, quiet: bool) -> anyhow::Result<()> {
    let project_root = std::env::current_dir()?;
    let discovery = super::discover_routes(config, &project_root, quiet)?;

    if discovery.is_empty() {
        println!("{}", style("No static routes found.").yellow());
        return Ok(());
    }

    let mut routes = discovery.into_routes();
    order_routes(&mut routes);

    if !quiet {
        println!();
        println!("Found {} static routes:", style(routes.len()).cyan().bold());
    }
    for route in &routes {
        println!("{}", route);
    }

    Ok(())
}
