// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Warm-up command: discover static routes and request each one once.

use console::style;
use pagewarm::warmer::Warmer;

use crate::config::Config;
use crate::output::ConsoleReporter;

/// Runs discovery in the current directory, then warms up every route.
///
/// Per-route failures are reported but never fail the command.
pub async fn run(config: &Config, quiet: bool) -> anyhow::Result<()> {
    let project_root = std::env::current_dir()?;
    let discovery = super::discover_routes(config, &project_root, quiet)?;

    let warmup = config.warmup_config();
    if !quiet && !discovery.is_empty() {
        println!(
            "{} {}",
            style("Server:").cyan(),
            style(&warmup.base_url).green().bold()
        );
    }

    let warmer = Warmer::new(warmup)?;
    let mut reporter = ConsoleReporter::new(quiet);
    warmer.run(discovery.into_routes(), &mut reporter).await;

    Ok(())
}
