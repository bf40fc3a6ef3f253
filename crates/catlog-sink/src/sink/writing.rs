use super::LineSink;
use crate::layout::LineLayout;
use std::io::{self, Write};

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes one line built from `parts` using `layout`.
    ///
    /// The pieces are joined with the layout's separator, the terminator is
    /// appended, and the result reaches the writer in a single `write_all`.
    pub fn write_parts_with_layout<I, S>(
        &mut self,
        parts: I,
        layout: LineLayout<'_>,
    ) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.scratch.clear();
        layout.join_into(&mut self.scratch, parts);
        self.scratch.push_str(layout.terminator());
        self.writer.write_all(self.scratch.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Counts `write` calls so a line can be checked to arrive in one piece.
    #[derive(Default)]
    struct CountingWriter {
        bytes: Vec<u8>,
        writes: usize,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_layout_appends_newlines() {
        let mut sink = LineSink::new(Vec::new());
        sink.write_parts_with_layout(["[17]", "hello"], LineLayout::DEFAULT)
            .expect("write succeeds");
        sink.write_parts_with_layout(["second"], LineLayout::DEFAULT)
            .expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("[17] hello"));
        assert_eq!(lines.next(), Some("second"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn each_call_uses_its_own_layout() {
        let mut sink = LineSink::new(Vec::new());
        sink.write_parts_with_layout(["a", "b"], LineLayout::new("-", ""))
            .expect("write succeeds");
        sink.write_parts_with_layout(["c", "d"], LineLayout::new(", ", "\r\n"))
            .expect("write succeeds");

        assert_eq!(sink.into_inner(), b"a-bc, d\r\n".to_vec());
    }

    #[test]
    fn empty_parts_still_emit_terminator() {
        let mut sink = LineSink::new(Vec::new());
        sink.write_parts_with_layout(Vec::<&str>::new(), LineLayout::DEFAULT)
            .expect("write succeeds");
        assert_eq!(sink.into_inner(), b"\n".to_vec());
    }

    #[test]
    fn scratch_is_reset_between_lines() {
        let mut sink = LineSink::new(Vec::new());
        sink.write_parts_with_layout(["a long first line"], LineLayout::DEFAULT)
            .expect("write succeeds");
        sink.write_parts_with_layout(["b"], LineLayout::DEFAULT)
            .expect("write succeeds");
        assert_eq!(sink.into_inner(), b"a long first line\nb\n".to_vec());
    }

    #[test]
    fn line_reaches_writer_in_one_write() {
        let mut sink = LineSink::new(CountingWriter::default());
        sink.write_parts_with_layout(["[3]", "one", "two", "three"], LineLayout::DEFAULT)
            .expect("write succeeds");

        let writer = sink.into_inner();
        assert_eq!(writer.writes, 1);
        assert_eq!(writer.bytes, b"[3] one two three\n".to_vec());
    }

    #[test]
    fn writer_errors_surface_unchanged() {
        let mut sink = LineSink::new(FailingWriter);
        let error = sink
            .write_parts_with_layout(["lost"], LineLayout::DEFAULT)
            .expect_err("write fails");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
