// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Sequential warm-up of discovered routes.
//!
//! [`Warmer`] visits every route exactly once, shallowest first, with one
//! request in flight at a time and a fixed cooldown between requests. A failed
//! request is reported and the run moves on; a run never fails as a whole.
//!
//! The HTTP client ([`Fetcher`]), the cooldown ([`WaitStrategy`]) and the
//! progress output ([`Reporter`]) are pluggable so runs can be driven against
//! fake servers without real delays.

pub mod http;
pub mod types;

use std::future::Future;
use std::time::{Duration, Instant};

pub use reqwest::StatusCode;

pub use self::http::HttpFetcher;
pub use self::types::{
    WarmupConfig, WarmupError, WarmupOutcome, WarmupResult, WarmupSummary, DEFAULT_BASE_URL,
    DEFAULT_DELAY, DEFAULT_TIMEOUT,
};

/// Issues a single GET request and reports the response status.
pub trait Fetcher {
    /// Fetch `url`, returning the status of the response.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<StatusCode, WarmupError>>;
}

/// Cooldown applied between two consecutive requests.
pub trait WaitStrategy {
    /// Wait for `delay`.
    fn wait(&self, delay: Duration) -> impl Future<Output = ()>;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleep;

impl WaitStrategy for TokioSleep {
    async fn wait(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWait;

impl WaitStrategy for NoWait {
    async fn wait(&self, _delay: Duration) {}
}

/// Progress hooks invoked during a run. All hooks default to doing nothing.
pub trait Reporter {
    /// There is nothing to warm up.
    fn on_empty(&mut self) {}

    /// A run over `total` routes is starting.
    fn on_start(&mut self, _total: usize) {}

    /// A request to `url` is about to be sent.
    fn on_request(&mut self, _url: &str) {}

    /// A route has been visited.
    fn on_result(&mut self, _result: &WarmupResult) {}

    /// Every route has been visited.
    fn on_finish(&mut self, _summary: &WarmupSummary) {}
}

/// Reporter that prints nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// Order routes shallowest first.
///
/// Stable ascending sort by length: routes of equal length keep their
/// relative input order.
pub fn order_routes(routes: &mut [String]) {
    routes.sort_by_key(|r| r.len());
}

/// Drives a warm-up run
pub struct Warmer<F = HttpFetcher, W = TokioSleep> {
    config: WarmupConfig,
    fetcher: F,
    waiter: W,
}

impl Warmer {
    /// Creates a warmer issuing real HTTP requests with real cooldowns.
    pub fn new(config: WarmupConfig) -> Result<Self, WarmupError> {
        let fetcher = HttpFetcher::new(config.timeout)?;
        Ok(Self::with_parts(config, fetcher, TokioSleep))
    }
}

impl<F: Fetcher, W: WaitStrategy> Warmer<F, W> {
    /// Creates a warmer from explicit parts.
    pub fn with_parts(config: WarmupConfig, fetcher: F, waiter: W) -> Self {
        Self {
            config,
            fetcher,
            waiter,
        }
    }

    /// Visit every route once, in [`order_routes`] order.
    pub async fn run<R: Reporter>(
        &self,
        mut routes: Vec<String>,
        reporter: &mut R,
    ) -> WarmupSummary {
        if routes.is_empty() {
            reporter.on_empty();
            return WarmupSummary::default();
        }

        order_routes(&mut routes);
        reporter.on_start(routes.len());

        let mut summary = WarmupSummary {
            results: Vec::with_capacity(routes.len()),
        };

        for (index, route) in routes.into_iter().enumerate() {
            if index > 0 {
                self.waiter.wait(self.config.delay).await;
            }

            let result = self.visit(route, reporter).await;
            reporter.on_result(&result);
            summary.results.push(result);
        }

        tracing::debug!(
            "Warm-up finished: {} ok, {} failed",
            summary.succeeded(),
            summary.failed()
        );
        reporter.on_finish(&summary);
        summary
    }

    async fn visit<R: Reporter>(&self, route: String, reporter: &mut R) -> WarmupResult {
        let url = self.config.url_for(&route);
        reporter.on_request(&url);

        let start = Instant::now();
        let outcome = match self.fetcher.fetch(&url).await {
            Ok(status) => WarmupOutcome::Success {
                status,
                elapsed: start.elapsed(),
            },
            Err(error) => {
                // Never stop the loop for a single failed request; the
                // reporter owns the user-facing line
                tracing::debug!("{}", error);
                WarmupOutcome::Failed {
                    error,
                    elapsed: start.elapsed(),
                }
            }
        };

        WarmupResult {
            route,
            url,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Answers from a fixed table; unknown URLs are refused.
    #[derive(Default)]
    struct FakeFetcher {
        statuses: HashMap<String, u16>,
        timeouts: Vec<String>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeFetcher {
        fn answering(urls: &[(&str, u16)]) -> Self {
            Self {
                statuses: urls.iter().map(|(u, s)| (u.to_string(), *s)).collect(),
                ..Self::default()
            }
        }

        fn timing_out(mut self, url: &str) -> Self {
            self.timeouts.push(url.to_string());
            self
        }
    }

    impl Fetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> Result<StatusCode, WarmupError> {
            self.calls.borrow_mut().push(url.to_string());

            if self.timeouts.iter().any(|t| t == url) {
                return Err(WarmupError::Timeout {
                    url: url.to_string(),
                    timeout: DEFAULT_TIMEOUT,
                });
            }

            match self.statuses.get(url) {
                Some(code) => Ok(StatusCode::from_u16(*code).unwrap()),
                None => Err(WarmupError::Request {
                    url: url.to_string(),
                    message: "connection refused".to_string(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct RecordingWait {
        waits: RefCell<Vec<Duration>>,
    }

    impl WaitStrategy for RecordingWait {
        async fn wait(&self, delay: Duration) {
            self.waits.borrow_mut().push(delay);
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        events: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        fn on_empty(&mut self) {
            self.events.push("empty".to_string());
        }

        fn on_start(&mut self, total: usize) {
            self.events.push(format!("start {}", total));
        }

        fn on_request(&mut self, url: &str) {
            self.events.push(format!("request {}", url));
        }

        fn on_result(&mut self, result: &WarmupResult) {
            let status = if result.is_success() { "ok" } else { "err" };
            self.events.push(format!("result {} {}", result.route, status));
        }

        fn on_finish(&mut self, summary: &WarmupSummary) {
            self.events.push(format!("finish {}/{}", summary.succeeded(), summary.total()));
        }
    }

    /// Shared sink for formatted log output.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn routes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_order_routes_by_length() {
        let mut list = routes(&["/blog/post", "/", "/about"]);
        order_routes(&mut list);
        assert_eq!(list, vec!["/", "/about", "/blog/post"]);
    }

    #[test]
    fn test_order_routes_keeps_ties_stable() {
        let mut list = routes(&["/xyz", "/a/b/c", "/abc", "/"]);
        order_routes(&mut list);
        assert_eq!(list, vec!["/", "/xyz", "/abc", "/a/b/c"]);
    }

    #[tokio::test]
    async fn test_visits_shallowest_first() {
        let fetcher = FakeFetcher::answering(&[
            ("http://localhost:3000/", 200),
            ("http://localhost:3000/about", 200),
            ("http://localhost:3000/blog/post", 200),
        ]);
        let warmer = Warmer::with_parts(WarmupConfig::default(), fetcher, NoWait);

        let summary = warmer
            .run(routes(&["/blog/post", "/about", "/"]), &mut SilentReporter)
            .await;

        assert_eq!(
            *warmer.fetcher.calls.borrow(),
            vec![
                "http://localhost:3000/",
                "http://localhost:3000/about",
                "http://localhost:3000/blog/post",
            ]
        );
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.failed(), 0);
    }

    #[tokio::test]
    async fn test_empty_route_list_issues_no_requests() {
        let warmer = Warmer::with_parts(
            WarmupConfig::default(),
            FakeFetcher::default(),
            RecordingWait::default(),
        );
        let mut reporter = RecordingReporter::default();

        let summary = warmer.run(Vec::new(), &mut reporter).await;

        assert_eq!(summary.total(), 0);
        assert!(warmer.fetcher.calls.borrow().is_empty());
        assert!(warmer.waiter.waits.borrow().is_empty());
        assert_eq!(reporter.events, vec!["empty"]);
    }

    #[tokio::test]
    async fn test_timeout_does_not_stop_the_run() {
        let fetcher = FakeFetcher::answering(&[
            ("http://localhost:3000/", 200),
            ("http://localhost:3000/docs", 200),
            ("http://localhost:3000/blog/archive", 200),
        ])
        .timing_out("http://localhost:3000/slow");
        let warmer = Warmer::with_parts(WarmupConfig::default(), fetcher, NoWait);
        let mut reporter = RecordingReporter::default();

        let summary = warmer
            .run(routes(&["/", "/slow", "/docs", "/blog/archive"]), &mut reporter)
            .await;

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.succeeded(), 3);
        assert_eq!(summary.failed(), 1);

        let failed = summary.results.iter().find(|r| !r.is_success()).unwrap();
        assert_eq!(failed.route, "/slow");
        assert!(matches!(
            failed.outcome,
            WarmupOutcome::Failed {
                error: WarmupError::Timeout { .. },
                ..
            }
        ));

        assert_eq!(
            reporter.events,
            vec![
                "start 4",
                "request http://localhost:3000/",
                "result / ok",
                "request http://localhost:3000/slow",
                "result /slow err",
                "request http://localhost:3000/docs",
                "result /docs ok",
                "request http://localhost:3000/blog/archive",
                "result /blog/archive ok",
                "finish 3/4",
            ]
        );
    }

    #[tokio::test]
    async fn test_every_request_failing_still_completes() {
        let warmer = Warmer::with_parts(WarmupConfig::default(), FakeFetcher::default(), NoWait);

        let summary = warmer
            .run(routes(&["/", "/a", "/b"]), &mut SilentReporter)
            .await;

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.failed(), 3);
        assert_eq!(warmer.fetcher.calls.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_failures_are_left_to_the_reporter() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let warmer = Warmer::with_parts(WarmupConfig::default(), FakeFetcher::default(), NoWait);
        let mut reporter = RecordingReporter::default();
        let summary = warmer.run(routes(&["/", "/a"]), &mut reporter).await;

        assert_eq!(summary.failed(), 2);
        assert_eq!(reporter.events.iter().filter(|e| e.ends_with(" err")).count(), 2);
        // One line per failure: nothing extra at the default log level
        assert!(logs.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cooldown_between_requests() {
        let config = WarmupConfig {
            delay: Duration::from_millis(250),
            ..WarmupConfig::default()
        };
        let fetcher = FakeFetcher::answering(&[("http://localhost:3000/", 200)]);
        let warmer = Warmer::with_parts(config, fetcher, RecordingWait::default());

        // "/missing" fails; the cooldown applies after failures too
        warmer
            .run(routes(&["/", "/missing", "/other"]), &mut SilentReporter)
            .await;

        assert_eq!(
            *warmer.waiter.waits.borrow(),
            vec![Duration::from_millis(250), Duration::from_millis(250)]
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_not_a_failure() {
        let fetcher = FakeFetcher::answering(&[("http://localhost:3000/broken", 500)]);
        let warmer = Warmer::with_parts(WarmupConfig::default(), fetcher, NoWait);

        let summary = warmer.run(routes(&["/broken"]), &mut SilentReporter).await;

        assert_eq!(summary.succeeded(), 1);
        match &summary.results[0].outcome {
            WarmupOutcome::Success { status, .. } => {
                assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_custom_base_url() {
        let config = WarmupConfig {
            base_url: "http://127.0.0.1:4000/".to_string(),
            ..WarmupConfig::default()
        };
        let fetcher = FakeFetcher::answering(&[("http://127.0.0.1:4000/about", 200)]);
        let warmer = Warmer::with_parts(config, fetcher, NoWait);

        let summary = warmer.run(routes(&["/about"]), &mut SilentReporter).await;

        assert_eq!(summary.results[0].url, "http://127.0.0.1:4000/about");
        assert_eq!(summary.failed(), 0);
    }
}
