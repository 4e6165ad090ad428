use std::io::{self, Write};

use super::RecordSink;
use crate::line_mode::LineMode;
use crate::record::Record;

impl<W> RecordSink<W>
where
    W: Write,
{
    /// Writes a single record using the sink's current modes.
    pub fn write(&mut self, record: &Record<'_>) -> io::Result<()> {
        self.write_with_mode(record, self.line_mode)
    }

    /// Writes `record` using an explicit [`LineMode`] without mutating the sink.
    ///
    /// The record is rendered into the scratch buffer first and then passed to
    /// the writer in one `write_all` call.
    pub fn write_with_mode(&mut self, record: &Record<'_>, line_mode: LineMode) -> io::Result<()> {
        self.scratch.clear();
        record.render_into(&mut self.scratch, self.color_mode, line_mode);
        self.writer.write_all(self.scratch.as_bytes())
    }

    /// Writes each record from the iterator to the underlying writer.
    pub fn write_all<'r, 'a: 'r, I>(&mut self, records: I) -> io::Result<()>
    where
        I: IntoIterator<Item = &'r Record<'a>>,
    {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
