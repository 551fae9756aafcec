//! Pattern pre-scan.
//!
//! Before a filter touches the store, the pattern is scanned once into a small
//! set of flags. The engine uses them to:
//!
//! - Take the match-all shortcut (`EMPTY`) without consulting any matcher.
//! - Pick a matcher when the caller asked for inference (`HAS_WILDCARD`,
//!   `HAS_PLACEHOLDER`).
//! - Emit debug traces for patterns that cannot match anything stored, e.g. an
//!   upper-case letter in a wildcard pattern (entries are always lower-case and
//!   wildcard patterns are not folded).
//!
//! The scan is a single pass over the pattern's chars and never allocates.

bitflags::bitflags! {
    /// Coarse features of a filter pattern.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PatternTraits: u8 {
        /// Absent or empty pattern.
        const EMPTY           = 1 << 0;
        /// Contains at least one `*`.
        const HAS_WILDCARD    = 1 << 1;
        /// Contains at least one `#`.
        const HAS_PLACEHOLDER = 1 << 2;
        /// Contains an ASCII decimal digit.
        const HAS_DIGITS      = 1 << 3;
        /// Contains a character that changes under lower-casing.
        const HAS_UPPERCASE   = 1 << 4;
        /// More than two `*`.
        const MANY_WILDCARDS  = 1 << 5;
    }
}

impl PatternTraits {
    /// Scan `pattern` for coarse features.
    pub fn scan(pattern: Option<&str>) -> Self {
        let mut traits = PatternTraits::empty();
        let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
            return PatternTraits::EMPTY;
        };

        let mut stars = 0usize;
        for c in pattern.chars() {
            match c {
                '*' => stars += 1,
                '#' => traits |= PatternTraits::HAS_PLACEHOLDER,
                '0'..='9' => traits |= PatternTraits::HAS_DIGITS,
                c if c.to_lowercase().ne(std::iter::once(c)) => traits |= PatternTraits::HAS_UPPERCASE,
                _ => {}
            }
        }

        if stars > 0 {
            traits |= PatternTraits::HAS_WILDCARD;
        }
        if stars > 2 {
            traits |= PatternTraits::MANY_WILDCARDS;
        }

        traits
    }

    /// Whether the shared "empty or absent pattern" rule applies.
    pub fn matches_all(self) -> bool {
        self.contains(PatternTraits::EMPTY)
    }
}
