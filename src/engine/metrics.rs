//! Filter run metrics.
//!
//! Every filter run records a handful of counters. They are cheap to collect
//! (no per-entry allocation beyond the result itself) so the engine always
//! fills them in; callers that don't care simply drop them:
//!
//! - `FilterEngine::filter` for normal operation (metrics discarded).
//! - `FilterEngine::run` when the caller wants to see what a scan did.

use super::trigger::PatternTraits;
use std::time::Duration;

/// Counters and timing for a single filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanMetrics {
    /// Result of the pattern pre-scan.
    pub traits: PatternTraits,
    /// Entries the matcher was evaluated against. Zero for a match-all run.
    pub scanned: usize,
    /// Entries in the result.
    pub matched: usize,
    /// Whether the empty/absent pattern rule answered the call.
    pub match_all: bool,
    /// Wall time from pre-scan to materialized result.
    pub elapsed: Duration,
}

/// Engine output bundled with its metrics.
#[derive(Debug, Clone)]
pub struct FilterRun {
    /// Snapshot of the selected entries.
    pub matches: Vec<Option<String>>,
    pub metrics: ScanMetrics,
}
