use std::fmt;
use std::io;

mod writing;

/// Streaming sink that writes assembled log lines into an [`io::Write`] target.
///
/// The sink owns the underlying writer and a scratch [`String`] reused across
/// writes. Each line is assembled in the scratch buffer first and then handed
/// to the writer with a single `write_all`, so a locked stdout never observes
/// a partially written line.
///
/// # Examples
///
/// ```
/// use catlog_sink::{LineLayout, LineSink};
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_parts_with_layout(["[12:00]", "connected"], LineLayout::DEFAULT)?;
/// sink.write_parts_with_layout(["closed"], LineLayout::DEFAULT)?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "[12:00] connected\nclosed\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct LineSink<W> {
    writer: W,
    scratch: String,
}

impl<W> LineSink<W> {
    /// Wraps `writer` with an empty scratch buffer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: String::new(),
        }
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LineSink<io::StdoutLock<'static>> {
    /// Creates a sink over the locked process stdout.
    ///
    /// The lock is held for the lifetime of the sink, so keep it short-lived
    /// when other threads also print.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W> fmt::Debug for LineSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}
