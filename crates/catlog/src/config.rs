//! crates/catlog/src/config.rs
//! Snapshot of the facade configuration: enabled categories, prefix fields, debug gate.

use crate::category::Category;
use crate::error::ParseFlagsError;
use crate::prefix::PrefixMode;

/// Complete facade configuration.
///
/// The process-wide copy is installed with [`init`](crate::init) and read back
/// with [`config`](crate::config). Values of this type can also be passed
/// explicitly to [`Category::render_line`] and [`Category::print_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Categories whose calls are printed.
    pub enabled: Category,
    /// Metadata fields rendered in front of each statement.
    pub prefix: PrefixMode,
    /// Gate checked before anything else; nothing prints while it is closed.
    pub debug_output: bool,
}

impl LogConfig {
    /// Default configuration: every category, `date | method | line` prefix,
    /// debug gate open only in builds with debug assertions.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: Category::DEFAULT_ENABLED,
            prefix: PrefixMode::DEFAULT,
            debug_output: cfg!(debug_assertions),
        }
    }

    /// Replaces the enabled category set.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: Category) -> Self {
        self.enabled = enabled;
        self
    }

    /// Replaces the prefix fields.
    #[must_use]
    pub const fn with_prefix(mut self, prefix: PrefixMode) -> Self {
        self.prefix = prefix;
        self
    }

    /// Opens or closes the debug gate.
    #[must_use]
    pub const fn with_debug_output(mut self, debug_output: bool) -> Self {
        self.debug_output = debug_output;
        self
    }

    /// Reports whether a call declaring `category` prints under this configuration.
    #[must_use]
    pub const fn admits(&self, category: Category) -> bool {
        self.debug_output && category.is_enabled_in(self.enabled)
    }

    /// Replaces the enabled set with the categories named in `tokens` (e.g. `"general,network"`).
    ///
    /// On error the configuration is left unchanged.
    pub fn apply_category_tokens(&mut self, tokens: &str) -> Result<(), ParseFlagsError> {
        self.enabled = tokens.parse()?;
        Ok(())
    }

    /// Replaces the prefix fields with those named in `tokens` (e.g. `"date,line"`).
    ///
    /// On error the configuration is left unchanged.
    pub fn apply_prefix_tokens(&mut self, tokens: &str) -> Result<(), ParseFlagsError> {
        self.prefix = tokens.parse()?;
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}
