// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Console output for discovery and warm-up progress.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use pagewarm::routes::SkippedPath;
use pagewarm::warmer::{Reporter, WarmupOutcome, WarmupResult, WarmupSummary};
use std::time::{Duration, Instant};

/// Prints one skip notice per disqualified page directory.
pub fn print_skipped(skipped: &[SkippedPath]) {
    for skip in skipped {
        println!("  {}", format_skipped(skip));
    }
}

/// Formats a skip notice, e.g. "skip /blog/[slug] (dynamic route `[slug]`)".
pub fn format_skipped(skip: &SkippedPath) -> String {
    format!(
        "{} {} {}",
        style("skip").yellow(),
        skip.path,
        style(format!("({})", skip.reason)).dim()
    )
}

/// Formats a duration the way request timings are shown.
pub fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_secs(1) {
        format!("{}ms", duration.as_millis())
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Formats the line printed once a route has been visited.
pub fn format_result(result: &WarmupResult) -> String {
    match &result.outcome {
        WarmupOutcome::Success { status, elapsed } => {
            let status_text = format!("[{}]", status);
            let status_text = if status.is_success() {
                style(status_text).green()
            } else if status.is_redirection() {
                style(status_text).cyan()
            } else {
                style(status_text).yellow()
            };

            format!(
                "{} GET {} {} in {}",
                style("✓").green(),
                result.url,
                status_text,
                style(format_duration(*elapsed)).dim()
            )
        }
        WarmupOutcome::Failed { error, .. } => format!(
            "{} GET {} {}",
            style("✗").red(),
            result.url,
            style(format!("Error: {}", error)).red()
        ),
    }
}

/// Reports warm-up progress on the terminal.
///
/// A spinner runs while each request is in flight. In quiet mode only
/// failures and the final summary are printed.
pub struct ConsoleReporter {
    quiet: bool,
    spinner: Option<ProgressBar>,
    started: Option<Instant>,
}

impl ConsoleReporter {
    /// Creates a reporter; `quiet` suppresses per-route success lines.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            spinner: None,
            started: None,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn on_empty(&mut self) {
        println!("{}", style("No static routes found to warm up.").yellow());
    }

    fn on_start(&mut self, total: usize) {
        self.started = Some(Instant::now());
        if !self.quiet {
            println!(
                "Found {} static routes. Warming them up...",
                style(total).cyan().bold()
            );
            println!();
        }
    }

    fn on_request(&mut self, url: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} GET {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(url.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(pb);
    }

    fn on_result(&mut self, result: &WarmupResult) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }

        let line = format_result(result);
        if !result.is_success() {
            eprintln!("  {}", line);
        } else if !self.quiet {
            println!("  {}", line);
        }
    }

    fn on_finish(&mut self, summary: &WarmupSummary) {
        let total_time = self
            .started
            .map(|s| format_duration(s.elapsed()))
            .unwrap_or_default();

        println!();
        if summary.failed() == 0 {
            println!(
                "{} {} {}",
                style("Warm-up complete.").green().bold(),
                style(format!("{} routes", summary.total())).dim(),
                style(total_time).dim()
            );
        } else {
            println!(
                "{} {} {}",
                style("Warm-up complete.").yellow().bold(),
                style(format!(
                    "{} ok, {} failed",
                    summary.succeeded(),
                    summary.failed()
                ))
                .dim(),
                style(total_time).dim()
            );
        }
    }
}
