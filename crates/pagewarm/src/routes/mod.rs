// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Static route discovery for app-router projects.
//!
//! This module provides:
//! - Page file recognition (`page.js`, `page.jsx`, `page.ts`, `page.tsx`)
//! - Segment classification (groups, private folders, parallel slots,
//!   intercepting and dynamic routes)
//! - Mapping page directories onto canonical, parameter-free URL paths
//! - Locating the `app` directory of a project

pub mod types;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use types::{
    PageFileConfig, PathDecision, RoutingError, RoutingResult, SegmentType, SkipReason,
    SkippedPath,
};

/// Default locations of the app directory, relative to the project root.
pub const DEFAULT_APP_DIRS: [&str; 2] = ["app", "src/app"];

/// Classify a slash-split directory path.
///
/// Empty segments are ignored. The first disqualifying segment decides the
/// skip reason; route groups are dropped and everything else is kept in order.
pub fn classify_path(segments: &[&str]) -> PathDecision {
    let mut kept = Vec::with_capacity(segments.len());

    for segment in segments.iter().filter(|s| !s.is_empty()) {
        let kind = SegmentType::parse(segment);
        if let Some(reason) = SkipReason::for_segment(kind, segment) {
            return PathDecision::Skip(reason);
        }
        if kind.contributes() {
            kept.push(*segment);
        }
    }

    PathDecision::Keep(format!("/{}", kept.join("/")))
}

/// Result of walking a route tree
#[derive(Debug, Default, Clone)]
pub struct Discovery {
    routes: BTreeSet<String>,
    skipped: Vec<SkippedPath>,
}

impl Discovery {
    /// Unique routes, sorted lexicographically.
    pub fn routes(&self) -> Vec<String> {
        self.routes.iter().cloned().collect()
    }

    /// Consume the discovery, returning its unique routes.
    pub fn into_routes(self) -> Vec<String> {
        self.routes.into_iter().collect()
    }

    /// Page directories that were recognized but produced no route.
    pub fn skipped(&self) -> &[SkippedPath] {
        &self.skipped
    }

    /// Returns true if no route was found.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Number of unique routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    fn record(&mut self, path: String, decision: PathDecision) {
        match decision {
            PathDecision::Keep(route) => {
                self.routes.insert(route);
            }
            PathDecision::Skip(reason) => {
                tracing::debug!("Skipping path with {}: {}", reason, path);
                self.skipped.push(SkippedPath { path, reason });
            }
        }
    }
}

/// Walks a route tree and turns page files into canonical routes
#[derive(Debug, Clone, Default)]
pub struct RouteResolver {
    page_files: PageFileConfig,
}

impl RouteResolver {
    /// Create a resolver recognizing the given page files.
    pub fn new(page_files: PageFileConfig) -> Self {
        Self { page_files }
    }

    /// Discover every static route under `root`.
    ///
    /// Any traversal error aborts discovery; no partial result is returned.
    pub fn discover(&self, root: &Path) -> RoutingResult<Discovery> {
        if !root.is_dir() {
            return Err(RoutingError::RootNotFound(root.to_path_buf()));
        }

        let mut discovery = Discovery::default();

        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| RoutingError::Traversal {
                path: e.path().unwrap_or(root).to_path_buf(),
                source: e,
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if !self.page_files.matches(file_name) {
                continue;
            }

            // The directory holding the page file defines the route
            let Some(page_dir) = entry.path().parent() else {
                continue;
            };

            let path = relative_route_path(root, page_dir);
            let segments: Vec<&str> = path.split('/').collect();
            let decision = classify_path(&segments);
            discovery.record(path, decision);
        }

        tracing::debug!(
            "Discovered {} routes ({} skipped) under {}",
            discovery.len(),
            discovery.skipped.len(),
            root.display()
        );

        Ok(discovery)
    }
}

/// Slash-normalized path of `dir` relative to `root`, with a leading `/`.
///
/// The root itself maps to `/`.
fn relative_route_path(root: &Path, dir: &Path) -> String {
    let relative = dir.strip_prefix(root).unwrap_or(dir);

    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    format!("/{}", parts.join("/"))
}

/// Find the app directory of the project at `project_root`.
///
/// Candidates are checked in order and the first existing directory wins.
pub fn find_app_dir<S: AsRef<str>>(
    project_root: &Path,
    candidates: &[S],
) -> RoutingResult<PathBuf> {
    for candidate in candidates {
        let dir = project_root.join(candidate.as_ref());
        if dir.is_dir() {
            tracing::info!("Found app directory at: ./{}", candidate.as_ref());
            return Ok(dir);
        }
    }

    let candidates = candidates
        .iter()
        .map(|c| format!("'{}'", c.as_ref()))
        .collect::<Vec<_>>()
        .join(" or ");

    Err(RoutingError::AppDirNotFound {
        root: project_root.to_path_buf(),
        candidates,
    })
}
