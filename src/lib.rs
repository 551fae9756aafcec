//! A case-folded string set with four hand-rolled filters.
//!
//! ```
//! use strsieve::StringFilter;
//!
//! let mut filter = StringFilter::new();
//! filter.add(Some("(555)123-4567"));
//! filter.add(Some("Distribute"));
//!
//! let phones: Vec<String> = filter.find_by_number_format(Some("(###)###-####")).present().collect();
//! assert_eq!(phones, vec!["(555)123-4567".to_string()]);
//!
//! let words: Vec<String> = filter.find_by_wildcard(Some("di*bute*")).present().collect();
//! assert_eq!(words, vec!["distribute".to_string()]);
//! ```

mod api;
mod engine;
mod store;

pub use api::{FilterDetails, FilterResultVerbose, Options, StringFilter, filter, filter_with};
pub use engine::PatternTraits;
pub use store::NormalizedStore;

use std::fmt;
use std::str::FromStr;

// --- Pattern types ----------------------------------------------------------

/// Which matcher a filter call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Contains,
    Prefix,
    NumberFormat,
    WildcardGlob,
}

impl MatchKind {
    pub const ALL: [MatchKind; 4] =
        [MatchKind::Contains, MatchKind::Prefix, MatchKind::NumberFormat, MatchKind::WildcardGlob];

    /// Stable lowercase name, also accepted by [`MatchKind::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            MatchKind::Contains => "contains",
            MatchKind::Prefix => "prefix",
            MatchKind::NumberFormat => "number-format",
            MatchKind::WildcardGlob => "wildcard",
        }
    }

    /// Guess a matcher from the pattern text.
    ///
    /// `*` selects the wildcard matcher, `#` the number-format matcher, and
    /// anything else falls back to substring search.
    pub fn infer(pattern: Option<&str>) -> MatchKind {
        let traits = PatternTraits::scan(pattern);
        if traits.contains(PatternTraits::HAS_WILDCARD) {
            MatchKind::WildcardGlob
        } else if traits.contains(PatternTraits::HAS_PLACEHOLDER) {
            MatchKind::NumberFormat
        } else {
            MatchKind::Contains
        }
    }

    /// Character-based matchers (substring, prefix) let the absent sentinel
    /// through a match-all; positional ones never do.
    pub(crate) fn admits_absent(self) -> bool {
        matches!(self, MatchKind::Contains | MatchKind::Prefix)
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known [`MatchKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match kind '{0}' (expected contains, prefix, number-format or wildcard)")]
pub struct UnknownKind(pub String);

impl FromStr for MatchKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contains" | "containing" => Ok(MatchKind::Contains),
            "prefix" | "starts-with" | "starting-with" => Ok(MatchKind::Prefix),
            "number-format" | "number" | "format" => Ok(MatchKind::NumberFormat),
            "wildcard" | "glob" | "pattern" => Ok(MatchKind::WildcardGlob),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// A matcher together with its raw, not yet normalized pattern.
///
/// `None` is the absent pattern; like the empty string it matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternSpec {
    /// Entries containing the (case-folded) pattern.
    Contains(Option<String>),
    /// Entries starting with the (case-folded) pattern.
    Prefix(Option<String>),
    /// Fixed-width template; `#` stands for exactly one decimal digit.
    NumberFormat(Option<String>),
    /// `*` stands for zero or more arbitrary characters.
    WildcardGlob(Option<String>),
}

impl PatternSpec {
    pub fn new(kind: MatchKind, pattern: Option<&str>) -> Self {
        let pattern = pattern.map(str::to_string);
        match kind {
            MatchKind::Contains => PatternSpec::Contains(pattern),
            MatchKind::Prefix => PatternSpec::Prefix(pattern),
            MatchKind::NumberFormat => PatternSpec::NumberFormat(pattern),
            MatchKind::WildcardGlob => PatternSpec::WildcardGlob(pattern),
        }
    }

    pub fn kind(&self) -> MatchKind {
        match self {
            PatternSpec::Contains(_) => MatchKind::Contains,
            PatternSpec::Prefix(_) => MatchKind::Prefix,
            PatternSpec::NumberFormat(_) => MatchKind::NumberFormat,
            PatternSpec::WildcardGlob(_) => MatchKind::WildcardGlob,
        }
    }

    pub fn pattern(&self) -> Option<&str> {
        match self {
            PatternSpec::Contains(p)
            | PatternSpec::Prefix(p)
            | PatternSpec::NumberFormat(p)
            | PatternSpec::WildcardGlob(p) => p.as_deref(),
        }
    }
}

// --- Results ----------------------------------------------------------------

/// Entries selected by a filter call.
///
/// Holds a snapshot taken when the filter ran, so later changes to the store
/// never show up here. Single pass: once consumed it is gone.
#[derive(Debug, Clone)]
pub struct Matches {
    inner: std::vec::IntoIter<Option<String>>,
}

impl Matches {
    pub(crate) fn new(entries: Vec<Option<String>>) -> Self {
        Matches { inner: entries.into_iter() }
    }

    /// Skip the absent sentinel and yield plain strings.
    pub fn present(self) -> impl Iterator<Item = String> {
        self.flatten()
    }
}

impl Iterator for Matches {
    type Item = Option<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Matches {}
