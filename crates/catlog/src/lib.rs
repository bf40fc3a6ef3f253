#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `catlog` is a debug-time logging facade. Every print call declares one
//! [`Category`]; the call produces a line on stdout only while the debug gate
//! is open and the category is contained in the process-wide enabled set.
//! Each line starts with an optional bracketed prefix built from the
//! [`PrefixMode`] fields (date, file, function, line) followed by the call's
//! items.
//!
//! # Design
//!
//! - [`Category`] and [`PrefixMode`] are `u8` bit sets.
//! - The process-wide configuration is held in atomics and installed with
//!   [`init`]; [`config`] returns a [`LogConfig`] snapshot. The debug gate
//!   defaults to `cfg!(debug_assertions)`.
//! - [`log_print!`] captures the [`CallSite`] (file, enclosing function,
//!   line) and forwards to [`Category::print`]. Callers without macros build
//!   the [`CallSite`] themselves.
//! - Items are [`Loggable`] values; `None` items are dropped before joining.
//! - Line assembly and writing are delegated to [`catlog_sink`].
//!
//! # Invariants
//!
//! - A filtered call produces no output at all, not even a terminator.
//! - The prefix is absent (not empty) when no prefix field is enabled.
//! - Prefix fragments always appear in the order date, file, function, line,
//!   separated by `" | "`.
//! - Printing never panics and never returns an error; failed stdout writes
//!   are reported through `tracing` on target `catlog::sink`.
//!
//! # Examples
//!
//! ```
//! use catlog::{log_print, Category, LogConfig, PrefixMode};
//!
//! catlog::init(
//!     LogConfig::new()
//!         .with_enabled(Category::GENERAL | Category::NETWORK)
//!         .with_prefix(PrefixMode::FILE_NAME | PrefixMode::LINE),
//! );
//!
//! let retries: Option<u32> = None;
//! log_print!(Category::NETWORK, "request failed", retries);
//! log_print!(Category::OPERATIONS, "not printed");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Category`], [`PrefixMode`] and [`LogConfig`].
//! - `tracing`: `CategoryLayer`, a `tracing-subscriber` layer routing events
//!   through the category filter.

mod call_site;
mod category;
mod config;
mod error;
mod global;
mod item;
mod macros;
mod prefix;
mod print;
mod timestamp;
mod tokens;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use call_site::CallSite;
pub use catlog_sink::{LineLayout, LineSink};
pub use category::Category;
pub use config::LogConfig;
pub use error::{FlagKind, ParseFlagsError};
pub use global::{
    apply_category_tokens, apply_prefix_tokens, config, debug_output, enabled_categories, init,
    is_enabled, prefix_mode, set_debug_output, set_enabled_categories, set_prefix_mode,
};
pub use item::{debug, display, render_statement, Debugged, Loggable, Shown};
pub use prefix::{PrefixMode, PREFIX_FIELD_SEPARATOR};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{init_tracing, init_tracing_with_filter, CategoryLayer};

#[doc(hidden)]
pub mod __private {
    pub use crate::call_site::trim_probe_name;
}
