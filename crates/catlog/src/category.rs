//! crates/catlog/src/category.rs
//! Log categories and the membership test used to filter calls.

use std::fmt;
use std::str::FromStr;

use crate::error::{FlagKind, ParseFlagsError};
use crate::tokens::{parse_flag_list, write_flag_list};

bitflags::bitflags! {
    /// Set of log categories.
    ///
    /// A call declares the category it belongs to; the process-wide enabled
    /// set decides whether it is printed. Sets combine with `|` and `&`.
    ///
    /// ```
    /// use catlog::Category;
    ///
    /// let enabled = Category::GENERAL | Category::NETWORK;
    /// assert!(Category::NETWORK.is_enabled_in(enabled));
    /// assert!(!Category::OPERATIONS.is_enabled_in(enabled));
    /// ```
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Category: u8 {
        /// General application events.
        const GENERAL    = 1 << 0;
        /// Network requests and responses.
        const NETWORK    = 1 << 1;
        /// Long-running operations and their progress.
        const OPERATIONS = 1 << 2;
    }
}

const CATEGORY_NAMES: [(&str, Category); 3] = [
    ("general", Category::GENERAL),
    ("network", Category::NETWORK),
    ("operations", Category::OPERATIONS),
];

impl Category {
    /// The empty set. Calls declaring it never print; as an enabled set it
    /// silences everything.
    pub const NONE: Self = Self::empty();

    /// Enabled set used until the process configures its own.
    pub const DEFAULT_ENABLED: Self = Self::GENERAL
        .union(Self::NETWORK)
        .union(Self::OPERATIONS);

    /// Reports whether every bit of `self` is present in `enabled`.
    ///
    /// This is `(self & enabled) == self`, except that the empty set is never
    /// considered enabled: a call must name at least one category to print.
    #[must_use]
    pub const fn is_enabled_in(self, enabled: Self) -> bool {
        !self.is_empty() && self.intersection(enabled).bits() == self.bits()
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::DEFAULT_ENABLED
    }
}

impl FromStr for Category {
    type Err = ParseFlagsError;

    /// Parses a comma-separated list such as `"general,network"`.
    ///
    /// `all` and `none` are accepted as keywords.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag_list(s, FlagKind::Category, &CATEGORY_NAMES)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flag_list(f, *self, &CATEGORY_NAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_occupy_distinct_bits() {
        assert_eq!(Category::GENERAL.bits(), 0b001);
        assert_eq!(Category::NETWORK.bits(), 0b010);
        assert_eq!(Category::OPERATIONS.bits(), 0b100);
        assert_eq!(Category::DEFAULT_ENABLED, Category::all());
    }

    #[test]
    fn single_category_enabled_iff_bit_set() {
        let all = [Category::GENERAL, Category::NETWORK, Category::OPERATIONS];
        for bits in 0..=Category::all().bits() {
            let enabled = Category::from_bits_truncate(bits);
            for category in all {
                assert_eq!(
                    category.is_enabled_in(enabled),
                    enabled.bits() & category.bits() == category.bits(),
                    "{category:?} in {enabled:?}"
                );
            }
        }
    }

    #[test]
    fn combined_candidate_needs_every_bit() {
        let candidate = Category::GENERAL | Category::NETWORK;
        assert!(candidate.is_enabled_in(Category::all()));
        assert!(!candidate.is_enabled_in(Category::GENERAL));
    }

    #[test]
    fn none_is_never_enabled() {
        assert!(!Category::NONE.is_enabled_in(Category::all()));
        assert!(!Category::NONE.is_enabled_in(Category::NONE));
    }

    #[test]
    fn empty_enabled_set_silences_everything() {
        assert!(!Category::GENERAL.is_enabled_in(Category::NONE));
        assert!(!Category::OPERATIONS.is_enabled_in(Category::NONE));
    }

    #[test]
    fn unnamed_bits_are_never_enabled_by_named_sets() {
        let unknown = Category::from_bits_retain(0b1000_0000);
        assert!(!unknown.is_enabled_in(Category::all()));
    }

    #[test]
    fn parses_token_lists() {
        assert_eq!("general".parse::<Category>(), Ok(Category::GENERAL));
        assert_eq!(
            " Network , OPERATIONS ".parse::<Category>(),
            Ok(Category::NETWORK | Category::OPERATIONS)
        );
        assert_eq!("all".parse::<Category>(), Ok(Category::all()));
        assert_eq!("none".parse::<Category>(), Ok(Category::NONE));
        assert_eq!("".parse::<Category>(), Ok(Category::NONE));
    }

    #[test]
    fn rejects_unknown_tokens() {
        let error = "general,disk".parse::<Category>().unwrap_err();
        assert_eq!(error.kind(), FlagKind::Category);
        assert_eq!(error.token(), "disk");
    }

    #[test]
    fn display_lists_names() {
        assert_eq!(Category::NONE.to_string(), "none");
        assert_eq!(Category::GENERAL.to_string(), "general");
        assert_eq!(
            (Category::OPERATIONS | Category::GENERAL).to_string(),
            "general,operations"
        );
        let shown = Category::DEFAULT_ENABLED.to_string();
        assert_eq!(shown.parse::<Category>(), Ok(Category::DEFAULT_ENABLED));
    }
}
