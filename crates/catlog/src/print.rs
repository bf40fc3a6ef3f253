//! crates/catlog/src/print.rs
//! The print entry point: gate, filter, prefix, join, write.

use std::io::{self, Write};

use catlog_sink::{LineLayout, LineSink};

use crate::call_site::CallSite;
use crate::category::Category;
use crate::config::LogConfig;
use crate::global;
use crate::item::{render_statement, Loggable};

impl Category {
    /// Prints one line to stdout if this category is enabled.
    ///
    /// Nothing happens while the debug gate is closed or when `self` is not
    /// contained in the enabled set. Otherwise the prefix for `site` (if any)
    /// and the rendered items are joined with the layout's separator and
    /// written with its terminator. Absent items are skipped. A failed write
    /// is reported through `tracing` and otherwise ignored.
    ///
    /// Most code reaches this through [`log_print!`](crate::log_print), which
    /// fills in `site` automatically.
    pub fn print(self, items: &[&dyn Loggable], layout: LineLayout<'_>, site: CallSite) {
        let config = global::config();
        if !config.admits(self) {
            return;
        }

        let mut sink = LineSink::stdout();
        let written = self
            .write_line(&mut sink, items, layout, &site, &config)
            .and_then(|()| sink.flush());
        if let Err(error) = written {
            tracing::warn!(
                target: "catlog::sink",
                %error,
                category = %self,
                file = site.file(),
                line = site.line(),
                "failed to write log line to stdout"
            );
        }
    }

    /// Writes the line to `sink` under an explicit configuration.
    ///
    /// Returns `Ok(false)` when `config` filters the call out, `Ok(true)` once
    /// the line has been written.
    pub fn print_to<W>(
        self,
        sink: &mut LineSink<W>,
        items: &[&dyn Loggable],
        layout: LineLayout<'_>,
        site: &CallSite,
        config: &LogConfig,
    ) -> io::Result<bool>
    where
        W: Write,
    {
        if !config.admits(self) {
            return Ok(false);
        }
        self.write_line(sink, items, layout, site, config)?;
        Ok(true)
    }

    /// Renders the complete line, terminator included, without writing it.
    ///
    /// Returns `None` whenever [`print`](Self::print) would stay silent under
    /// `config`.
    ///
    /// ```
    /// use catlog::{CallSite, Category, LineLayout, LogConfig, PrefixMode};
    ///
    /// let config = LogConfig::new()
    ///     .with_enabled(Category::GENERAL)
    ///     .with_prefix(PrefixMode::LINE)
    ///     .with_debug_output(true);
    /// let site = CallSite::new("src/main.rs", "app::main", 17);
    ///
    /// let line = Category::GENERAL.render_line(&[&"hello"], LineLayout::DEFAULT, &site, &config);
    /// assert_eq!(line.as_deref(), Some("[17] hello\n"));
    ///
    /// let silent = Category::NETWORK.render_line(&[&"hello"], LineLayout::DEFAULT, &site, &config);
    /// assert_eq!(silent, None);
    /// ```
    #[must_use]
    pub fn render_line(
        self,
        items: &[&dyn Loggable],
        layout: LineLayout<'_>,
        site: &CallSite,
        config: &LogConfig,
    ) -> Option<String> {
        if !config.admits(self) {
            return None;
        }
        Some(layout.render(line_parts(items, layout, site, config)))
    }

    fn write_line<W>(
        self,
        sink: &mut LineSink<W>,
        items: &[&dyn Loggable],
        layout: LineLayout<'_>,
        site: &CallSite,
        config: &LogConfig,
    ) -> io::Result<()>
    where
        W: Write,
    {
        sink.write_parts_with_layout(line_parts(items, layout, site, config), layout)
    }
}

/// The prefix, when there is one, followed by the statement.
///
/// The statement is always present, even when every item was dropped.
fn line_parts(
    items: &[&dyn Loggable],
    layout: LineLayout<'_>,
    site: &CallSite,
    config: &LogConfig,
) -> impl Iterator<Item = String> {
    let prefix = config.prefix.generate_prefix(site);
    let statement = render_statement(items, layout);
    prefix.into_iter().chain(std::iter::once(statement))
}
