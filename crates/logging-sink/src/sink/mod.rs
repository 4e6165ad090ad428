use std::fmt;

use crate::color::ColorMode;
use crate::line_mode::LineMode;

mod writing;

/// Streaming sink that renders [`Record`](crate::Record) values into an
/// [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with a reusable `String`
/// scratch buffer. Each call to [`write`](Self::write) renders the whole
/// record into the scratch buffer and then hands it to the writer with a single
/// `write_all`, so the fragments of one record are never split across
/// separate writes issued by this sink.
///
/// # Examples
///
/// Collect records into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use logging_sink::{Prefix, Record, RecordSink, Severity, Value};
///
/// let mut sink = RecordSink::new(Vec::new());
/// let prefix = Prefix::now(Severity::Normal);
/// sink.write(&Record::new(&prefix, &[Value::from("ready")]))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.ends_with(" [ INFO ] ready\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Wrap records in ANSI colors:
///
/// ```
/// use logging_sink::{ColorMode, Prefix, Record, RecordSink, Severity, Value};
///
/// let mut sink = RecordSink::new(Vec::new()).with_color_mode(ColorMode::Ansi);
/// let prefix = Prefix::now(Severity::Warning);
/// sink.write(&Record::new(&prefix, &[Value::from("careful")]))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.starts_with("\x1b[33;1m"));
/// assert!(output.ends_with("careful\x1b[0;0m\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct RecordSink<W> {
    writer: W,
    scratch: String,
    line_mode: LineMode,
    color_mode: ColorMode,
}

impl<W> RecordSink<W> {
    /// Creates a plain-text sink that appends a newline after each record.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_parts(writer, LineMode::WithNewline, ColorMode::Plain)
    }

    /// Creates a sink with explicit line and color modes.
    #[must_use]
    pub fn with_parts(writer: W, line_mode: LineMode, color_mode: ColorMode) -> Self {
        Self {
            writer,
            scratch: String::new(),
            line_mode,
            color_mode,
        }
    }

    /// Returns the sink with its [`LineMode`] replaced.
    #[must_use]
    pub fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Returns the sink with its [`ColorMode`] replaced.
    #[must_use]
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Returns the current [`ColorMode`].
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Updates the [`ColorMode`] used for subsequent writes.
    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.color_mode = color_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for RecordSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for RecordSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .field("color_mode", &self.color_mode)
            .finish_non_exhaustive()
    }
}
