//! Case-folded string set.
//!
//! `NormalizedStore` is the container every filter scans. Strings are
//! lower-cased once, on the way in, so matchers never fold at query time.
//! `None` stands for "no value" and may be stored at most once, next to (and
//! distinct from) the empty string.

use std::collections::HashSet;
use std::collections::hash_set;

/// A deduplicated set of lower-cased strings, plus an optional absent member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedStore {
    entries: HashSet<Option<String>>,
}

impl NormalizedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` lower-cased, or the absent sentinel for `None`.
    ///
    /// Inserting an already-present value is a no-op.
    pub fn add(&mut self, value: Option<&str>) {
        self.entries.insert(normalize(value));
    }

    /// Remove `value` (lower-cased) or the absent sentinel.
    ///
    /// Returns `true` if something was removed.
    pub fn remove(&mut self, value: Option<&str>) -> bool {
        self.entries.remove(&normalize(value))
    }

    /// Drop every entry.
    pub fn remove_all(&mut self) {
        self.entries.clear();
    }

    /// Borrow the backing set. Iteration order is unspecified.
    pub fn all(&self) -> &HashSet<Option<String>> {
        &self.entries
    }

    /// Lookup with the same normalization as [`NormalizedStore::add`].
    pub fn contains(&self, value: Option<&str>) -> bool {
        self.entries.contains(&normalize(value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate stored entries as borrowed `Option<&str>`.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.entries.iter().map(|e| e.as_deref())
    }

    /// Take a snapshot of every entry.
    pub(crate) fn snapshot(&self) -> Vec<Option<String>> {
        self.entries.iter().cloned().collect()
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value.map(str::to_lowercase)
}

impl<'s> Extend<Option<&'s str>> for NormalizedStore {
    fn extend<I: IntoIterator<Item = Option<&'s str>>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'s> Extend<&'s str> for NormalizedStore {
    fn extend<I: IntoIterator<Item = &'s str>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(Some));
    }
}

impl<'s> FromIterator<&'s str> for NormalizedStore {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        let mut store = NormalizedStore::new();
        store.extend(iter);
        store
    }
}

impl<'s> FromIterator<Option<&'s str>> for NormalizedStore {
    fn from_iter<I: IntoIterator<Item = Option<&'s str>>>(iter: I) -> Self {
        let mut store = NormalizedStore::new();
        store.extend(iter);
        store
    }
}

impl<'a> IntoIterator for &'a NormalizedStore {
    type Item = &'a Option<String>;
    type IntoIter = hash_set::Iter<'a, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut store = NormalizedStore::new();
        store.add(Some("Hello"));
        store.add(Some("hello"));
        store.add(Some("HELLO"));
        assert_eq!(store.len(), 1);
        assert!(store.all().contains(&Some("hello".to_string())));
    }

    #[test]
    fn absent_sentinel_is_distinct_from_empty() {
        let mut store = NormalizedStore::new();
        store.add(None);
        store.add(None);
        store.add(Some(""));
        assert_eq!(store.len(), 2);
        assert!(store.contains(None));
        assert!(store.contains(Some("")));
    }

    #[test]
    fn remove_normalizes_lookup() {
        let mut store = NormalizedStore::new();
        store.add(Some("abc"));
        assert!(store.remove(Some("ABC")));
        assert!(store.is_empty());
        assert!(!store.remove(Some("abc")));
    }

    #[test]
    fn remove_on_empty_store_returns_false() {
        let mut store = NormalizedStore::new();
        assert!(!store.remove(Some("xyz")));
        assert!(!store.remove(None));
    }

    #[test]
    fn remove_absent_sentinel() {
        let mut store: NormalizedStore = [Some("a"), None].into_iter().collect();
        assert!(store.remove(None));
        assert_eq!(store.iter().collect::<Vec<_>>(), vec![Some("a")]);
    }

    #[test]
    fn remove_all_empties_store() {
        let mut store: NormalizedStore = ["one", "Two", "THREE"].into_iter().collect();
        assert_eq!(store.len(), 3);
        store.remove_all();
        assert!(store.is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_store() {
        let mut store: NormalizedStore = [Some("A"), None].into_iter().collect();
        let mut snap = store.snapshot();
        store.remove_all();

        snap.sort();
        assert_eq!(snap, vec![None, Some("a".to_string())]);
    }

    #[test]
    fn unicode_is_folded() {
        let store: NormalizedStore = ["ÄÖÜ", "Straße"].into_iter().collect();
        assert!(store.contains(Some("äöü")));
        assert!(store.contains(Some("STRAßE")));
        assert!(!store.contains(Some("strasse")));
    }
}
