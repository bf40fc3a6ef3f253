#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/catlog-sink/src/lib.rs
//!
//! # Overview
//!
//! `catlog-sink` owns the last step of the catlog pipeline: joining the
//! rendered pieces of a log line and streaming them into an
//! [`std::io::Write`] implementor. The crate knows nothing about categories
//! or prefixes; it only deals with separators, terminators, and writers.
//!
//! # Design
//!
//! [`LineLayout`] describes how pieces are joined (the separator) and how a
//! line ends (the terminator). [`LineSink`] wraps a writer together with a
//! reusable scratch buffer so every line is assembled in memory and handed to
//! the writer in a single `write_all` call. Every write names its own layout,
//! so one sink can serve calls with different separators and terminators.
//!
//! # Invariants
//!
//! - A line is written with exactly one `write_all` call on the underlying
//!   writer, so a locked stdout never sees a half-written line from this sink.
//! - The separator is only placed between pieces, never before the first or
//!   after the last one.
//! - The terminator is appended verbatim; an empty terminator leaves the line
//!   open.
//!
//! # Errors
//!
//! All write operations surface [`std::io::Error`] values originating from the
//! underlying writer unchanged.
//!
//! # Examples
//!
//! ```
//! use catlog_sink::{LineLayout, LineSink};
//!
//! let mut sink = LineSink::new(Vec::new());
//! sink.write_parts_with_layout(["[17]", "hello"], LineLayout::DEFAULT).unwrap();
//! sink.write_parts_with_layout(["a", "b"], LineLayout::new(", ", "")).unwrap();
//!
//! assert_eq!(sink.into_inner(), b"[17] hello\na, b".to_vec());
//! ```

mod layout;
mod sink;

pub use layout::LineLayout;
pub use sink::LineSink;
