//! Output emission with line terminators preserved

use std::io::{self, Write};

/// Counters collected while emitting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitStats {
    /// Template lines consumed
    pub template_lines: usize,
    /// Output lines written
    pub lines_written: usize,
    /// Template lines that produced no output
    pub empty_expansions: usize,
}

/// Writes expanded lines in order to any `Write` sink
pub struct Emitter<W: Write> {
    writer: W,
    stats: EmitStats,
}

impl<W: Write> Emitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            stats: EmitStats::default(),
        }
    }

    /// Write one produced line followed by its template line's terminator
    pub fn emit(&mut self, body: &str, terminator: &str) -> io::Result<()> {
        self.writer.write_all(body.as_bytes())?;
        self.writer.write_all(terminator.as_bytes())?;
        self.stats.lines_written += 1;
        Ok(())
    }

    /// Record that a template line has been fully processed
    pub fn end_template_line(&mut self, produced: usize) {
        self.stats.template_lines += 1;
        if produced == 0 {
            self.stats.empty_expansions += 1;
        }
    }

    /// Flush the sink and hand it back with the final counters
    pub fn finish(mut self) -> io::Result<(W, EmitStats)> {
        self.writer.flush()?;
        Ok((self.writer, self.stats))
    }
}

/// Split a template into `(body, terminator)` pairs.
///
/// The terminator is `"\r\n"`, `"\n"`, or empty for a final line without one.
pub fn split_lines(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.split_inclusive('\n').map(|line| {
        if let Some(body) = line.strip_suffix("\r\n") {
            (body, "\r\n")
        } else if let Some(body) = line.strip_suffix('\n') {
            (body, "\n")
        } else {
            (line, "")
        }
    })
}
