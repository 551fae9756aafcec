//! Filter engine.
//!
//! This module owns everything between a [`PatternSpec`](crate::PatternSpec)
//! and the entries it selects. The public facade in `src/api.rs` only builds a
//! `PatternSpec` and hands it here.
//!
//! ## How the parts work together
//!
//! ```text
//! PatternSpec ──┐
//!               │  PatternTraits::scan            (trigger.rs)
//!               └──────────────┬───────────────
//!                              │
//!            empty/absent ◀────┴────▶ real pattern
//!                 │                        │
//!                 │                Matcher::prepare   (matchers.rs)
//!                 │                        │
//!                 v                        v
//!          store snapshot        FilterEngine::scan   (filter.rs)
//!                 │                        │
//!                 └──────────┬─────────────┘
//!                            v
//!                  FilterRun { matches, ScanMetrics }  (metrics.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: one cheap pass over the pattern producing `PatternTraits`.
//! - `matchers.rs`: the four matchers (contains, prefix, number format,
//!   wildcard); pure functions of `(entry, pattern)`.
//! - `filter.rs`: the match-all rule, the single scan over the store, optional
//!   result ordering.
//! - `metrics.rs`: per-run counters and timing.
//!
//! ## Adding a matcher
//!
//! - Add a `MatchKind` and `PatternSpec` variant in `src/lib.rs`.
//! - Add a `Matcher` variant and its `prepare`/`test` arms in `matchers.rs`.
//! - Decide in `MatchKind::admits_absent` whether a match-all run keeps the
//!   absent sentinel.
//!
//! ## Debugging
//!
//! The engine logs through the `log` facade under the `strsieve::engine`
//! target: pattern pre-scans at `debug`, run summaries at `trace`. The CLI reads
//! its filter from `STRSIEVE_LOG`, e.g. `STRSIEVE_LOG=strsieve::engine=trace`.

#[path = "engine/filter.rs"]
mod filter;
#[path = "engine/matchers.rs"]
mod matchers;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/trigger.rs"]
mod trigger;


pub use filter::FilterEngine;
pub use trigger::PatternTraits;
