// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Types for static route discovery.

use std::fmt;
use std::path::PathBuf;

/// Segments that mark an intercepting route.
pub const INTERCEPT_MARKERS: [&str; 3] = ["(.)", "(..)", "(...)"];

/// Segment type in an app-router directory path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    /// Ordinary path component (e.g., "blog")
    Plain,

    /// Private folder (e.g., "_components")
    Private,

    /// Route group (e.g., "(marketing)"), dropped from the URL
    Group,

    /// Intercepting route marker: exactly "(.)", "(..)" or "(...)"
    Interceptor,

    /// Parallel route slot (e.g., "@modal")
    ParallelSlot,

    /// Dynamic parameter (e.g., "[id]", "[...slug]", "[[...tab]]")
    Dynamic,
}

impl SegmentType {
    /// Classify a single directory name.
    ///
    /// Classification depends only on the segment itself, never on its
    /// neighbours.
    pub fn parse(segment: &str) -> Self {
        if segment.starts_with('_') {
            SegmentType::Private
        } else if INTERCEPT_MARKERS.contains(&segment) {
            SegmentType::Interceptor
        } else if segment.starts_with('@') {
            SegmentType::ParallelSlot
        } else if segment.starts_with('[') && segment.ends_with(']') {
            SegmentType::Dynamic
        } else if segment.starts_with('(') && segment.ends_with(')') {
            SegmentType::Group
        } else {
            SegmentType::Plain
        }
    }

    /// Returns true if the segment is kept in the final URL
    pub fn contributes(&self) -> bool {
        matches!(self, SegmentType::Plain)
    }
}

/// Why a page directory produced no route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Path contains a private folder.
    Private(String),
    /// Path contains an intercepting route segment.
    Intercepting(String),
    /// Path contains a parallel route slot.
    ParallelSlot(String),
    /// Path contains a dynamic segment.
    Dynamic(String),
}

impl SkipReason {
    /// Build the skip reason for a disqualifying segment.
    ///
    /// Returns `None` for segment types that never disqualify a path.
    pub fn for_segment(kind: SegmentType, segment: &str) -> Option<Self> {
        let segment = segment.to_string();
        match kind {
            SegmentType::Private => Some(SkipReason::Private(segment)),
            SegmentType::Interceptor => Some(SkipReason::Intercepting(segment)),
            SegmentType::ParallelSlot => Some(SkipReason::ParallelSlot(segment)),
            SegmentType::Dynamic => Some(SkipReason::Dynamic(segment)),
            SegmentType::Plain | SegmentType::Group => None,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Private(s) => write!(f, "private segment `{}`", s),
            SkipReason::Intercepting(s) => write!(f, "intercepting route `{}`", s),
            SkipReason::ParallelSlot(s) => write!(f, "parallel route slot `{}`", s),
            SkipReason::Dynamic(s) => write!(f, "dynamic route `{}`", s),
        }
    }
}

/// Outcome of classifying one candidate path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathDecision {
    /// Canonical route to warm up (e.g., "/blog")
    Keep(String),
    /// Path has no public, parameter-free URL
    Skip(SkipReason),
}

/// A page directory that was recognized but produced no route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
    /// Slash-normalized directory path relative to the root (e.g., "/blog/[slug]")
    pub path: String,

    /// Why the path was skipped
    pub reason: SkipReason,
}

/// Which files define a page
#[derive(Debug, Clone)]
pub struct PageFileConfig {
    /// Required file stem (default: "page")
    pub stem: String,

    /// Recognized source extensions, without the dot (default: js, jsx, ts, tsx)
    pub extensions: Vec<String>,
}

impl PageFileConfig {
    /// Create a config recognizing `page.<ext>` for the given extensions.
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.into().trim_start_matches('.').to_string())
                .collect(),
            ..Self::default()
        }
    }

    /// Returns true if the file name defines a page.
    pub fn matches(&self, file_name: &str) -> bool {
        let Some(rest) = file_name
            .strip_prefix(self.stem.as_str())
            .and_then(|r| r.strip_prefix('.'))
        else {
            return false;
        };

        // "page.tsx" and "page.client.tsx" both count
        self.extensions
            .iter()
            .any(|ext| rest == ext || rest.ends_with(&format!(".{}", ext)))
    }
}

impl Default for PageFileConfig {
    fn default() -> Self {
        Self {
            stem: "page".to_string(),
            extensions: ["js", "jsx", "ts", "tsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Error types for route discovery.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// None of the candidate app directories exist.
    #[error(
        "Could not find {candidates} under {}. This tool must be run from the root of an app-router project.",
        .root.display()
    )]
    AppDirNotFound {
        /// Project root that was searched.
        root: PathBuf,
        /// Candidates tried, e.g. "'app' or 'src/app'".
        candidates: String,
    },

    /// The discovery root is missing or not a directory.
    #[error("Route root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// A directory entry could not be read while walking the tree.
    #[error("Failed to traverse {}: {source}", .path.display())]
    Traversal {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying walk error.
        #[source]
        source: walkdir::Error,
    },
}

/// Result type for routing operations.
pub type RoutingResult<T> = Result<T, RoutingError>;
