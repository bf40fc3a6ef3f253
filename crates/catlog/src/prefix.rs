//! crates/catlog/src/prefix.rs
//! Prefix fields and the bracketed prefix rendered before each statement.

use std::fmt;
use std::str::FromStr;

use time::OffsetDateTime;

use crate::call_site::CallSite;
use crate::error::{FlagKind, ParseFlagsError};
use crate::timestamp::{format_timestamp, now};
use crate::tokens::{parse_flag_list, write_flag_list};

/// Separator placed between prefix fragments.
pub const PREFIX_FIELD_SEPARATOR: &str = " | ";

bitflags::bitflags! {
    /// Set of metadata fields rendered in the prefix of each log line.
    ///
    /// Fragments always appear in declaration order: date, file name,
    /// method name, line.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PrefixMode: u8 {
        /// Local wall-clock time as `yyyy.MM.dd HH:mm`.
        const DATE        = 1 << 0;
        /// Source file of the call site.
        const FILE_NAME   = 1 << 1;
        /// Enclosing function of the call site.
        const METHOD_NAME = 1 << 2;
        /// Source line of the call site.
        const LINE        = 1 << 3;
    }
}

const PREFIX_NAMES: [(&str, PrefixMode); 7] = [
    ("date", PrefixMode::DATE),
    ("file", PrefixMode::FILE_NAME),
    ("method", PrefixMode::METHOD_NAME),
    ("line", PrefixMode::LINE),
    ("filename", PrefixMode::FILE_NAME),
    ("function", PrefixMode::METHOD_NAME),
    ("methodname", PrefixMode::METHOD_NAME),
];

impl PrefixMode {
    /// No prefix at all.
    pub const NONE: Self = Self::empty();

    /// Prefix configuration used until the process configures its own.
    pub const DEFAULT: Self = Self::DATE.union(Self::METHOD_NAME).union(Self::LINE);

    /// Renders the prefix for `site` using the current wall-clock time.
    ///
    /// Returns `None` for [`PrefixMode::NONE`]; otherwise the enabled
    /// fragments joined by `" | "` and wrapped in square brackets.
    ///
    /// ```
    /// use catlog::{CallSite, PrefixMode};
    ///
    /// let site = CallSite::new("src/main.rs", "app::run", 17);
    /// assert_eq!(PrefixMode::LINE.generate_prefix(&site).as_deref(), Some("[17]"));
    /// assert_eq!(PrefixMode::NONE.generate_prefix(&site), None);
    /// ```
    #[must_use]
    pub fn generate_prefix(self, site: &CallSite) -> Option<String> {
        self.generate_prefix_with_separator(site, PREFIX_FIELD_SEPARATOR)
    }

    /// Same as [`generate_prefix`](Self::generate_prefix) with a custom fragment separator.
    #[must_use]
    pub fn generate_prefix_with_separator(self, site: &CallSite, separator: &str) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let timestamp = self.contains(Self::DATE).then(now);
        self.assemble(site, timestamp, separator)
    }

    /// Renders the prefix for `site` as if the current time were `timestamp`.
    #[must_use]
    pub fn generate_prefix_at(self, site: &CallSite, timestamp: OffsetDateTime) -> Option<String> {
        self.assemble(site, Some(timestamp), PREFIX_FIELD_SEPARATOR)
    }

    fn assemble(
        self,
        site: &CallSite,
        timestamp: Option<OffsetDateTime>,
        separator: &str,
    ) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut fragments: Vec<String> = Vec::with_capacity(4);

        if self.contains(Self::DATE) {
            if let Some(date) = timestamp.and_then(format_timestamp) {
                fragments.push(date);
            }
        }
        if self.contains(Self::FILE_NAME) {
            fragments.push(site.file().to_owned());
        }
        if self.contains(Self::METHOD_NAME) {
            fragments.push(site.function().to_owned());
        }
        if self.contains(Self::LINE) {
            fragments.push(site.line().to_string());
        }

        let joined = fragments.join(separator);
        if joined.is_empty() {
            None
        } else {
            Some(format!("[{joined}]"))
        }
    }
}

impl Default for PrefixMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for PrefixMode {
    type Err = ParseFlagsError;

    /// Parses a comma-separated list such as `"date,line"`.
    ///
    /// `file`/`filename` and `method`/`function`/`methodname` are
    /// interchangeable; `all` and `none` are accepted as keywords.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag_list(s, FlagKind::PrefixField, &PREFIX_NAMES)
    }
}

impl fmt::Display for PrefixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flag_list(f, *self, &PREFIX_NAMES)
    }
}
