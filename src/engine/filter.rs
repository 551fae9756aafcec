//! The filter loop.
//!
//! `FilterEngine` is where the four public filter operations converge. A run
//! looks like this:
//!
//! ```text
//! PatternSpec ── PatternTraits::scan ──┬── EMPTY ──▶ snapshot of the store
//!                (trigger.rs)          │              (absent sentinel kept
//!                                      │               for contains/prefix only)
//!                                      └── else ───▶ Matcher::prepare (matchers.rs)
//!                                                     │
//!                                                     v
//!                                           one pass over the store,
//!                                           test() each present entry once
//!                                                     │
//!                                                     v
//!                                            Vec<Option<String>> (+ ScanMetrics)
//! ```
//!
//! The empty/absent pattern rule lives here and nowhere else, so the matchers
//! only ever see real patterns. The absent sentinel has no characters and is
//! never handed to a matcher.
//!
//! Results are materialized before the run returns. The engine borrows the
//! store immutably, so a caller can only mutate the store after the result
//! exists, and the result never observes that mutation.

use super::matchers::Matcher;
use super::metrics::{FilterRun, ScanMetrics};
use super::trigger::PatternTraits;
use crate::{MatchKind, Matches, NormalizedStore, Options, PatternSpec};
use std::time::Instant;

const LOG_TARGET: &str = "strsieve::engine";

/// Runs one [`PatternSpec`] against a borrowed store.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine<'a> {
    store: &'a NormalizedStore,
    options: &'a Options,
}

impl<'a> FilterEngine<'a> {
    pub fn new(store: &'a NormalizedStore, options: &'a Options) -> Self {
        FilterEngine { store, options }
    }

    /// Filter and hand back the matches only.
    pub fn filter(&self, spec: &PatternSpec) -> Matches {
        Matches::new(self.run(spec).matches)
    }

    /// Filter and keep the run's metrics.
    pub fn run(&self, spec: &PatternSpec) -> FilterRun {
        let started = Instant::now();
        let kind = spec.kind();
        let traits = PatternTraits::scan(spec.pattern());

        log::debug!(
            target: LOG_TARGET,
            "[pattern_scan] kind={} pattern={:?} traits={:?}",
            kind,
            spec.pattern(),
            traits
        );
        let folds_pattern = matches!(kind, MatchKind::Contains | MatchKind::Prefix);
        if traits.contains(PatternTraits::HAS_UPPERCASE) && !folds_pattern {
            log::debug!(
                target: LOG_TARGET,
                "[pattern_scan] {} patterns are not case-folded; upper-case characters never match stored entries",
                kind
            );
        }
        if kind == MatchKind::WildcardGlob && traits.contains(PatternTraits::MANY_WILDCARDS) {
            log::debug!(
                target: LOG_TARGET,
                "[pattern_scan] more than two wildcards; inner segments matched in order"
            );
        }

        let (mut matches, scanned) = match spec.pattern() {
            Some(pattern) if !traits.matches_all() => self.scan(Matcher::prepare(kind, pattern)),
            _ => (self.everything(kind), 0),
        };

        if self.options.sorted {
            // `None < Some(_)`: the absent sentinel sorts first.
            matches.sort_unstable();
        }

        let metrics = ScanMetrics {
            traits,
            scanned,
            matched: matches.len(),
            match_all: traits.matches_all(),
            elapsed: started.elapsed(),
        };

        log::trace!(
            target: LOG_TARGET,
            "[filter] kind={} store={} scanned={} matched={} match_all={} elapsed={:?}",
            kind,
            self.store.len(),
            metrics.scanned,
            metrics.matched,
            metrics.match_all,
            metrics.elapsed
        );

        FilterRun { matches, metrics }
    }

    /// Evaluate `matcher` once per present entry.
    fn scan(&self, matcher: Matcher<'_>) -> (Vec<Option<String>>, usize) {
        let mut scanned = 0;
        let mut matches = Vec::new();

        for entry in self.store.iter().flatten() {
            scanned += 1;
            if matcher.test(entry) {
                matches.push(Some(entry.to_string()));
            }
        }

        (matches, scanned)
    }

    /// Snapshot for the empty/absent pattern rule.
    fn everything(&self, kind: MatchKind) -> Vec<Option<String>> {
        let mut entries = self.store.snapshot();
        if !kind.admits_absent() {
            entries.retain(Option::is_some);
        }
        entries
    }
}
