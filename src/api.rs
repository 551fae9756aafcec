use crate::engine::{FilterEngine, PatternTraits};
use crate::{MatchKind, Matches, NormalizedStore, PatternSpec};
use std::collections::HashSet;
use std::time::Duration;

/// Options that affect filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Return matches in ascending order (absent sentinel first) instead of
    /// set order.
    pub sorted: bool,
}

/// Additional details returned by [`StringFilter::find_verbose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDetails {
    /// Pattern pre-scan flags.
    pub traits: PatternTraits,
    /// Store size when the filter ran.
    pub store_len: usize,
    /// Entries the matcher was evaluated against.
    pub scanned: usize,
    /// Whether the empty/absent pattern rule answered the call.
    pub match_all: bool,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Result from [`StringFilter::find_verbose`].
#[derive(Debug, Clone)]
pub struct FilterResultVerbose {
    pub kind: MatchKind,
    pub pattern: Option<String>,
    pub results: Vec<Option<String>>,
    pub details: FilterDetails,
}

/// A case-folded string set with substring, prefix, number-format and
/// wildcard filters.
///
/// Every filter returns a [`Matches`] snapshot; an empty or absent pattern
/// selects every entry.
///
/// # Example
/// ```
/// use strsieve::StringFilter;
///
/// let mut filter = StringFilter::new();
/// filter.add(Some("ABCdef"));
/// filter.add(Some("xyz"));
///
/// let hits: Vec<String> = filter.find_starting_with(Some("AB")).present().collect();
/// assert_eq!(hits, vec!["abcdef".to_string()]);
/// assert_eq!(filter.find_containing(None).count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringFilter {
    store: NormalizedStore,
    options: Options,
}

impl StringFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        StringFilter { store: NormalizedStore::new(), options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &NormalizedStore {
        &self.store
    }

    /// Add `value` lower-cased; `None` adds the absent sentinel.
    pub fn add(&mut self, value: Option<&str>) {
        self.store.add(value);
    }

    /// Remove `value` lower-cased; returns whether it was present.
    pub fn remove(&mut self, value: Option<&str>) -> bool {
        self.store.remove(value)
    }

    pub fn remove_all(&mut self) {
        self.store.remove_all();
    }

    /// Every stored entry. Iteration order is unspecified.
    pub fn all(&self) -> &HashSet<Option<String>> {
        self.store.all()
    }

    /// Entries containing `chars`, compared case-insensitively.
    pub fn find_containing(&self, chars: Option<&str>) -> Matches {
        self.find(&PatternSpec::new(MatchKind::Contains, chars))
    }

    /// Entries starting with `begin`, compared case-insensitively.
    pub fn find_starting_with(&self, begin: Option<&str>) -> Matches {
        self.find(&PatternSpec::new(MatchKind::Prefix, begin))
    }

    /// Entries shaped like `format`, where `#` is one decimal digit.
    ///
    /// The entry must have exactly as many characters as the format, e.g.
    /// `"(###)###-####"` selects `"(555)123-4567"`.
    pub fn find_by_number_format(&self, format: Option<&str>) -> Matches {
        self.find(&PatternSpec::new(MatchKind::NumberFormat, format))
    }

    /// Entries matching `pattern`, where `*` is zero or more characters.
    ///
    /// The pattern is not case-folded; write it in lower case.
    pub fn find_by_wildcard(&self, pattern: Option<&str>) -> Matches {
        self.find(&PatternSpec::new(MatchKind::WildcardGlob, pattern))
    }

    /// Pick the matcher from the pattern text (see [`MatchKind::infer`]).
    pub fn find_auto(&self, pattern: Option<&str>) -> Matches {
        self.find(&PatternSpec::new(MatchKind::infer(pattern), pattern))
    }

    pub fn find(&self, spec: &PatternSpec) -> Matches {
        filter_with(&self.store, spec, &self.options)
    }

    /// Filter and return extra details about the run.
    pub fn find_verbose(&self, spec: &PatternSpec) -> FilterResultVerbose {
        let run = FilterEngine::new(&self.store, &self.options).run(spec);

        FilterResultVerbose {
            kind: spec.kind(),
            pattern: spec.pattern().map(str::to_string),
            results: run.matches,
            details: FilterDetails {
                traits: run.metrics.traits,
                store_len: self.store.len(),
                scanned: run.metrics.scanned,
                match_all: run.metrics.match_all,
                elapsed: run.metrics.elapsed,
            },
        }
    }
}

impl<'s> Extend<&'s str> for StringFilter {
    fn extend<I: IntoIterator<Item = &'s str>>(&mut self, iter: I) {
        self.store.extend(iter);
    }
}

impl<'s> FromIterator<&'s str> for StringFilter {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        StringFilter { store: iter.into_iter().collect(), options: Options::default() }
    }
}

/// Filter `store` with default [`Options`].
pub fn filter(store: &NormalizedStore, spec: &PatternSpec) -> Matches {
    filter_with(store, spec, &Options::default())
}

/// Filter `store` with the provided `options`.
pub fn filter_with(store: &NormalizedStore, spec: &PatternSpec, options: &Options) -> Matches {
    FilterEngine::new(store, options).filter(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(m: Matches) -> Vec<Option<String>> {
        let mut v: Vec<_> = m.collect();
        v.sort();
        v
    }

    fn some(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[test]
    fn add_twice_keeps_size() {
        let mut f = StringFilter::new();
        f.add(Some("abc"));
        f.add(Some("abc"));
        f.add(Some("ABC"));
        assert_eq!(f.all().len(), 1);
    }

    #[test]
    fn starting_with_is_case_insensitive() {
        let f: StringFilter = ["abcdef", "bcdef"].into_iter().collect();
        assert_eq!(sorted(f.find_starting_with(Some("AB"))), some(&["abcdef"]));
    }

    #[test]
    fn match_all_returns_full_store() {
        let f: StringFilter = ["alpha", "beta", "gamma"].into_iter().collect();
        let all = some(&["alpha", "beta", "gamma"]);

        assert_eq!(sorted(f.find_containing(Some(""))), all);
        assert_eq!(sorted(f.find_containing(None)), all);
        assert_eq!(sorted(f.find_by_wildcard(Some(""))), all);
        assert_eq!(sorted(f.find_by_number_format(None)), all);
        assert_eq!(sorted(f.find_starting_with(None)), all);
    }

    #[test]
    fn number_format_exact_width() {
        let f: StringFilter = ["123-4567", "12-34567"].into_iter().collect();
        assert_eq!(sorted(f.find_by_number_format(Some("###-####"))), some(&["123-4567"]));
    }

    #[test]
    fn wildcard_examples() {
        let f: StringFilter = ["distribute", "distribute_extra", "distrib", "tribute"].into_iter().collect();

        assert_eq!(sorted(f.find_by_wildcard(Some("di*bute*"))), some(&["distribute", "distribute_extra"]));
        assert_eq!(sorted(f.find_by_wildcard(Some("*str*"))), some(&["distrib", "distribute", "distribute_extra"]));
        assert_eq!(sorted(f.find_by_wildcard(Some("distr*"))), some(&["distrib", "distribute", "distribute_extra"]));
        assert_eq!(sorted(f.find_by_wildcard(Some("tribute"))), some(&["tribute"]));
    }

    #[test]
    fn exact_match_without_wildcard() {
        let f: StringFilter = ["abc", "abcd", "xabc"].into_iter().collect();
        assert_eq!(sorted(f.find_by_wildcard(Some("abc"))), some(&["abc"]));
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut f = StringFilter::new();
        f.add(Some("abc"));
        assert!(f.remove(Some("ABC")));
        assert!(f.all().is_empty());

        let mut empty = StringFilter::new();
        assert!(!empty.remove(Some("xyz")));
    }

    #[test]
    fn remove_all_then_filter_is_empty() {
        let mut f: StringFilter = ["one", "two"].into_iter().collect();
        f.add(None);
        f.remove_all();

        for pattern in [None, Some(""), Some("o"), Some("*"), Some("###")] {
            assert_eq!(f.find_containing(pattern).count(), 0);
            assert_eq!(f.find_starting_with(pattern).count(), 0);
            assert_eq!(f.find_by_number_format(pattern).count(), 0);
            assert_eq!(f.find_by_wildcard(pattern).count(), 0);
        }
    }

    #[test]
    fn absent_value_round_trip() {
        let mut f = StringFilter::new();
        f.add(None);
        assert!(f.all().contains(&None));
        assert_eq!(f.find_containing(None).collect::<Vec<_>>(), vec![None]);
        assert!(f.remove(None));
        assert!(!f.remove(None));
    }

    #[test]
    fn result_survives_later_mutation() {
        let mut f: StringFilter = ["one", "two"].into_iter().collect();
        let before = f.find_containing(Some("o"));
        f.remove_all();
        assert_eq!(sorted(before), some(&["one", "two"]));
    }

    #[test]
    fn sorted_option_orders_results() {
        let mut f = StringFilter::with_options(Options { sorted: true });
        f.extend(["delta", "alpha", "charlie", "bravo"]);
        f.add(None);

        let got: Vec<_> = f.find_containing(None).collect();
        assert_eq!(got[0], None);
        assert_eq!(got[1..].to_vec(), some(&["alpha", "bravo", "charlie", "delta"]));
    }

    #[test]
    fn find_auto_infers_kind() {
        let f: StringFilter = ["123-4567", "distribute", "tribune"].into_iter().collect();
        assert_eq!(sorted(f.find_auto(Some("###-####"))), some(&["123-4567"]));
        assert_eq!(sorted(f.find_auto(Some("*bu*"))), some(&["distribute", "tribune"]));
        assert_eq!(sorted(f.find_auto(Some("TRIB"))), some(&["distribute", "tribune"]));
    }

    #[test]
    fn find_verbose_includes_details() {
        let mut f: StringFilter = ["123-4567", "12-34567"].into_iter().collect();
        f.add(None);

        let res = f.find_verbose(&PatternSpec::NumberFormat(Some("###-####".to_string())));
        assert_eq!(res.kind, MatchKind::NumberFormat);
        assert_eq!(res.pattern.as_deref(), Some("###-####"));
        assert_eq!(res.results, some(&["123-4567"]));
        assert_eq!(res.details.store_len, 3);
        assert_eq!(res.details.scanned, 2);
        assert!(!res.details.match_all);
        assert!(res.details.traits.contains(PatternTraits::HAS_PLACEHOLDER));
    }

    #[test]
    fn free_functions_filter_a_store() {
        let store: NormalizedStore = ["Alpha", "beta"].into_iter().collect();
        let spec = PatternSpec::Prefix(Some("AL".to_string()));
        assert_eq!(sorted(filter(&store, &spec)), some(&["alpha"]));
        assert_eq!(filter_with(&store, &spec, &Options { sorted: true }).len(), 1);
    }
}
