//! The four matchers.
//!
//! Each matcher is prepared once per filter call (`Matcher::prepare`) and then
//! tested against every stored entry. Preparation does the per-pattern work
//! (case folding, splitting a glob into segments) so that the per-entry test is
//! a plain scan over the entry.
//!
//! ```text
//! (MatchKind, pattern) ──prepare──▶ Matcher ──test(entry)──▶ bool
//!   Contains              ─▶ Contains(folded)
//!   Prefix                ─▶ Prefix(folded)
//!   NumberFormat          ─▶ NumberFormat(raw)
//!   WildcardGlob          ─▶ Exact(raw) | Glob { prefix, inner.., suffix }
//! ```
//!
//! All comparisons are ordinal. Stored entries are already lower-case; the
//! number-format and wildcard patterns are compared as given.
//!
//! Preparation must not be handed an empty pattern: the engine answers those
//! with the match-all rule before a matcher exists.

use crate::MatchKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Matcher<'p> {
    Contains(String),
    Prefix(String),
    NumberFormat(&'p str),
    Exact(&'p str),
    Glob(Glob<'p>),
}

/// A wildcard pattern split on `*`.
///
/// ```text
/// "di*bu*te"  ─▶ prefix "di", inner ["bu"], suffix "te"
/// "*str*"     ─▶ prefix "",   inner ["str"], suffix ""
/// "distr*"    ─▶ prefix "distr", inner [], suffix ""
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Glob<'p> {
    prefix: &'p str,
    inner: Vec<&'p str>,
    suffix: &'p str,
    /// Byte length of all literal (non-`*`) characters.
    literal_len: usize,
}

impl<'p> Matcher<'p> {
    /// Prepare a matcher for a non-empty pattern.
    pub(crate) fn prepare(kind: MatchKind, pattern: &'p str) -> Self {
        match kind {
            MatchKind::Contains => Matcher::Contains(pattern.to_lowercase()),
            MatchKind::Prefix => Matcher::Prefix(pattern.to_lowercase()),
            MatchKind::NumberFormat => Matcher::NumberFormat(pattern),
            MatchKind::WildcardGlob => match Glob::parse(pattern) {
                Some(glob) => Matcher::Glob(glob),
                None => Matcher::Exact(pattern),
            },
        }
    }

    pub(crate) fn test(&self, entry: &str) -> bool {
        match self {
            Matcher::Contains(needle) => entry.contains(needle.as_str()),
            Matcher::Prefix(begin) => entry.starts_with(begin.as_str()),
            Matcher::NumberFormat(format) => matches_number_format(entry, format),
            Matcher::Exact(pattern) => entry == *pattern,
            Matcher::Glob(glob) => glob.matches(entry),
        }
    }
}

/// `#` matches one ASCII decimal digit; every other format char, digits
/// included, matches only itself. Lengths (in chars) must be equal.
pub(crate) fn matches_number_format(entry: &str, format: &str) -> bool {
    let mut chars = entry.chars();
    for slot in format.chars() {
        let Some(c) = chars.next() else {
            return false;
        };
        let ok = match slot {
            '#' => c.is_ascii_digit(),
            _ => c == slot,
        };
        if !ok {
            return false;
        }
    }
    chars.next().is_none()
}

impl<'p> Glob<'p> {
    /// Split `pattern` on `*`; `None` when it has no wildcard at all.
    fn parse(pattern: &'p str) -> Option<Self> {
        let mut parts = pattern.split('*');
        let prefix = parts.next()?;
        let mut inner: Vec<&str> = parts.collect();
        // `split` yields n + 1 parts for n stars, so a lone part means no star.
        let suffix = inner.pop()?;
        let literal_len = prefix.len() + suffix.len() + inner.iter().map(|s| s.len()).sum::<usize>();

        Some(Glob { prefix, inner, suffix, literal_len })
    }

    /// Anchored prefix and suffix, then each inner segment found leftmost-first
    /// in what remains of the middle span.
    fn matches(&self, entry: &str) -> bool {
        if entry.len() < self.literal_len {
            return false;
        }
        if !entry.starts_with(self.prefix) || !entry.ends_with(self.suffix) {
            return false;
        }

        // literal_len >= prefix + suffix, so the two anchors cannot overlap and
        // both ends are char boundaries.
        let mut middle = &entry[self.prefix.len()..entry.len() - self.suffix.len()];
        for segment in &self.inner {
            match middle.find(*segment) {
                Some(at) => middle = &middle[at + segment.len()..],
                None => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glob(pattern: &str) -> Glob<'_> {
        Glob::parse(pattern).unwrap()
    }

    #[test]
    fn glob_parse_splits_segments() {
        let g = glob("di*bu*te");
        assert_eq!((g.prefix, g.inner.clone(), g.suffix, g.literal_len), ("di", vec!["bu"], "te", 6));

        let g = glob("*");
        assert_eq!((g.prefix, g.inner.len(), g.suffix, g.literal_len), ("", 0, "", 0));

        let g = glob("**");
        assert_eq!((g.prefix, g.inner.clone(), g.suffix), ("", vec![""], ""));

        assert!(Glob::parse("plain").is_none());
    }

    #[test]
    fn contains_and_prefix_fold_the_pattern() {
        assert!(Matcher::prepare(MatchKind::Contains, "STR").test("distribute"));

        let m = Matcher::prepare(MatchKind::Prefix, "AB");
        assert!(m.test("abcdef"));
        assert!(!m.test("cab"));
    }

    #[test]
    fn wildcard_is_not_folded() {
        assert!(!Matcher::prepare(MatchKind::WildcardGlob, "DIST*").test("distribute"));
    }

    #[test]
    fn number_format_counts_chars_not_bytes() {
        assert!(matches_number_format("№12", "№##"));
        assert!(!matches_number_format("№12", "###"));
    }

    #[test]
    fn glob_handles_multibyte_boundaries() {
        assert!(glob("ä*ö").matches("äxyzö"));
        assert!(glob("*ü*").matches("grüße"));
        assert!(!glob("ä*ä").matches("ä"));
    }
}
