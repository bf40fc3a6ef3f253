//! crates/catlog/src/global.rs
//! Process-wide facade configuration.
//!
//! Each setting lives in its own atomic, so reads on the print path never
//! block and reconfiguring from another thread is sound. A reader racing with
//! [`init`] may observe a mix of the old and new settings for that one call.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::category::Category;
use crate::config::LogConfig;
use crate::error::ParseFlagsError;
use crate::prefix::PrefixMode;

static ENABLED: AtomicU8 = AtomicU8::new(Category::DEFAULT_ENABLED.bits());
static PREFIX: AtomicU8 = AtomicU8::new(PrefixMode::DEFAULT.bits());
static DEBUG_OUTPUT: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

/// Installs `config` as the process-wide configuration.
///
/// Intended to be called once during startup, before the first print.
pub fn init(config: LogConfig) {
    ENABLED.store(config.enabled.bits(), Ordering::Relaxed);
    PREFIX.store(config.prefix.bits(), Ordering::Relaxed);
    DEBUG_OUTPUT.store(config.debug_output, Ordering::Relaxed);
    tracing::debug!(
        target: "catlog::config",
        enabled = %config.enabled,
        prefix = %config.prefix,
        debug_output = config.debug_output,
        "logging facade configured"
    );
}

/// Returns a snapshot of the process-wide configuration.
pub fn config() -> LogConfig {
    LogConfig {
        enabled: enabled_categories(),
        prefix: prefix_mode(),
        debug_output: debug_output(),
    }
}

/// Returns the process-wide enabled category set.
pub fn enabled_categories() -> Category {
    Category::from_bits_retain(ENABLED.load(Ordering::Relaxed))
}

/// Replaces the process-wide enabled category set.
pub fn set_enabled_categories(enabled: Category) {
    ENABLED.store(enabled.bits(), Ordering::Relaxed);
}

/// Returns the process-wide prefix fields.
pub fn prefix_mode() -> PrefixMode {
    PrefixMode::from_bits_retain(PREFIX.load(Ordering::Relaxed))
}

/// Replaces the process-wide prefix fields.
pub fn set_prefix_mode(prefix: PrefixMode) {
    PREFIX.store(prefix.bits(), Ordering::Relaxed);
}

/// Returns whether the process-wide debug gate is open.
pub fn debug_output() -> bool {
    DEBUG_OUTPUT.load(Ordering::Relaxed)
}

/// Opens or closes the process-wide debug gate.
pub fn set_debug_output(enabled: bool) {
    DEBUG_OUTPUT.store(enabled, Ordering::Relaxed);
}

/// Check if a call declaring `category` would print right now.
pub fn is_enabled(category: Category) -> bool {
    config().admits(category)
}

/// Replaces the process-wide enabled set from a token list such as `"general,network"`.
pub fn apply_category_tokens(tokens: &str) -> Result<(), ParseFlagsError> {
    set_enabled_categories(tokens.parse()?);
    Ok(())
}

/// Replaces the process-wide prefix fields from a token list such as `"date,line"`.
pub fn apply_prefix_tokens(tokens: &str) -> Result<(), ParseFlagsError> {
    set_prefix_mode(tokens.parse()?);
    Ok(())
}

/// Serializes unit tests that touch the process-wide configuration.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, PoisonError};

    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
