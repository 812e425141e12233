// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! HTTP client used to hit the dev server.

use super::types::WarmupError;
use super::Fetcher;
use reqwest::{Client, StatusCode};
use std::error::Error;
use std::time::Duration;

/// Plain GET requests with a fixed timeout.
///
/// No headers, body, or authentication are sent. Only the status is read;
/// the response body is dropped unread.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, WarmupError> {
        // The target is a local dev server; proxy settings from the
        // environment must not reroute it
        let client = Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(|e| WarmupError::Client(e.to_string()))?;

        Ok(Self { client, timeout })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<StatusCode, WarmupError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                WarmupError::Timeout {
                    url: url.to_string(),
                    timeout: self.timeout,
                }
            } else {
                WarmupError::Request {
                    url: url.to_string(),
                    message: error_chain(&e),
                }
            }
        })?;

        Ok(response.status())
    }
}

/// Error message followed by every underlying cause, colon-separated.
///
/// reqwest's own message stops at "error sending request"; the cause
/// (e.g. "Connection refused") lives further down the source chain.
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
