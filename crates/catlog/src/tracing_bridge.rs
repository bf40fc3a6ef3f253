//! crates/catlog/src/tracing_bridge.rs
//! Bridge between the tracing crate and the category filter.
//!
//! [`CategoryLayer`] is a `tracing-subscriber` layer that maps each event's
//! target to a [`Category`] and prints the event through
//! [`Category::print_to`], so code instrumented with the standard tracing
//! macros honours the same enabled set, prefix fields and debug gate as
//! [`log_print!`](crate::log_print).
//!
//! # Usage
//!
//! ```rust,ignore
//! use catlog::{Category, LogConfig, init_tracing};
//!
//! init_tracing(LogConfig::new().with_enabled(Category::NETWORK))?;
//!
//! tracing::info!(target: "app::network", peer = "10.0.0.2", "connected");
//! tracing::info!(target: "app::general", "ignored, category disabled");
//! ```

use std::fmt;
use std::io;

use catlog_sink::{LineLayout, LineSink};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::util::TryInitError;

use crate::call_site::CallSite;
use crate::category::Category;
use crate::config::LogConfig;
use crate::global;
use crate::item::Loggable;

/// A tracing layer that prints events whose target names a category.
///
/// Targets are split on `::` and scanned from the last segment backwards;
/// the first segment naming a category wins. Events whose target names no
/// category are ignored by this layer.
///
/// Each admitted event becomes one line: the prefix for the event's file,
/// module path and line, then the message, then one `name=value` item per
/// remaining field. Lines go to stdout unless another writer is installed
/// with [`with_writer`](Self::with_writer).
#[derive(Clone)]
pub struct CategoryLayer<M = fn() -> io::Stdout> {
    make_writer: M,
}

impl CategoryLayer {
    /// Create a layer writing to stdout. Filtering uses the process-wide
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            make_writer: io::stdout,
        }
    }
}

impl Default for CategoryLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> CategoryLayer<M> {
    /// Replace the destination of printed lines.
    ///
    /// `make_writer` is asked for a fresh writer per event, and each line is
    /// handed to it in a single write.
    #[must_use]
    pub fn with_writer<W>(self, make_writer: W) -> CategoryLayer<W>
    where
        W: for<'w> MakeWriter<'w> + 'static,
    {
        CategoryLayer { make_writer }
    }
}

impl<M> fmt::Debug for CategoryLayer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryLayer").finish_non_exhaustive()
    }
}

/// Map a tracing target to a category.
fn target_to_category(target: &str) -> Option<Category> {
    target.rsplit("::").find_map(|segment| match segment {
        "general" => Some(Category::GENERAL),
        "network" | "net" => Some(Category::NETWORK),
        "operations" | "ops" => Some(Category::OPERATIONS),
        _ => None,
    })
}

impl<S, M> Layer<S> for CategoryLayer<M>
where
    S: Subscriber,
    M: for<'w> MakeWriter<'w> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let Some(category) = target_to_category(metadata.target()) else {
            return;
        };
        let config = global::config();
        if !config.admits(category) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let site = CallSite::new(
            metadata.file().unwrap_or(""),
            metadata.module_path().unwrap_or_else(|| metadata.target()),
            metadata.line().unwrap_or(0),
        );
        let items: Vec<&dyn Loggable> = visitor.items().map(|item| item as &dyn Loggable).collect();

        let mut sink = LineSink::new(self.make_writer.make_writer_for(metadata));
        let written = category
            .print_to(&mut sink, &items, LineLayout::DEFAULT, &site, &config)
            .and_then(|_| sink.flush());
        if let Err(error) = written {
            tracing::warn!(
                target: "catlog::sink",
                %error,
                category = %category,
                "failed to write bridged event"
            );
        }
    }
}

/// Collects the event message followed by `name=value` pairs for other fields.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl EventVisitor {
    fn items(&self) -> impl Iterator<Item = &String> {
        self.message.iter().chain(self.fields.iter())
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Installs `config` and a global subscriber carrying [`CategoryLayer`].
///
/// Fails when another global subscriber is already installed; the
/// configuration is applied either way.
pub fn init_tracing(config: LogConfig) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    global::init(config);

    tracing_subscriber::registry()
        .with(CategoryLayer::new())
        .try_init()
}

/// Like [`init_tracing`], with an additional layer (typically a filter) in front.
///
/// ```rust,ignore
/// use catlog::{LogConfig, init_tracing_with_filter};
/// use tracing_subscriber::filter::LevelFilter;
///
/// init_tracing_with_filter(LogConfig::default(), LevelFilter::INFO)?;
/// ```
pub fn init_tracing_with_filter<F>(config: LogConfig, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    global::init(config);

    tracing_subscriber::registry()
        .with(filter)
        .with(CategoryLayer::new())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_to_category() {
        assert_eq!(
            target_to_category("app::network"),
            Some(Category::NETWORK)
        );
        assert_eq!(
            target_to_category("app::net::pool"),
            Some(Category::NETWORK)
        );
        assert_eq!(
            target_to_category("ops"),
            Some(Category::OPERATIONS)
        );
        assert_eq!(
            target_to_category("general"),
            Some(Category::GENERAL)
        );
        assert_eq!(target_to_category("app::storage"), None);
    }

    #[test]
    fn later_segments_take_precedence() {
        assert_eq!(
            target_to_category("general::network"),
            Some(Category::NETWORK)
        );
    }

    #[test]
    fn segments_must_match_exactly() {
        assert_eq!(target_to_category("app::networking"), None);
        assert_eq!(target_to_category("app::generals"), None);
    }

    #[test]
    fn visitor_orders_message_before_fields() {
        let mut visitor = EventVisitor::default();
        visitor.fields.push("peer=\"10.0.0.2\"".to_owned());
        visitor.message = Some("connected".to_owned());
        let items: Vec<&String> = visitor.items().collect();
        assert_eq!(items, ["connected", "peer=\"10.0.0.2\""]);
    }

    #[test]
    fn visitor_without_message_keeps_fields() {
        let visitor = EventVisitor {
            message: None,
            fields: vec!["retries=3".to_owned()],
        };
        assert_eq!(visitor.items().count(), 1);
    }
}
