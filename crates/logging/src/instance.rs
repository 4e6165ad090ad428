//! crates/logging/src/instance.rs
//! The log instance: an open file handle plus the terminal, and the emission pipeline.

use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::process;

use logging_sink::{FATAL_EXIT_CODE, Fields, Prefix, Record, RecordSink, Severity, Value};

use crate::config::OutputConfig;
use crate::error::{LogError, LogResult, SinkKind};

/// An open log destination bound to a file and to standard output.
///
/// The file is created or truncated by [`initialize`](Self::initialize) and
/// stays open for the lifetime of the instance; there is no explicit close.
/// Every emission captures the current time once, builds a [`Prefix`] and
/// writes the same record to each selected sink.
///
/// # Concurrency
///
/// Emission takes `&mut self` and the instance performs no locking of its own.
/// Callers that log from several threads must serialize access themselves,
/// typically by wrapping the instance in a [`Mutex`](std::sync::Mutex). Each
/// record reaches each sink in a single write, but nothing orders records
/// across sinks or across independent instances writing the same file.
///
/// # Fatal records
///
/// Emitting [`Severity::Fatal`] writes the record, flushes both sinks and then
/// terminates the process with status 1. This happens even when no sink is
/// selected. [`fatal`](Self::fatal) exposes that as a `-> !` signature.
///
/// # Examples
///
/// ```no_run
/// use logging::{LogInstance, OutputConfig};
/// use logging_sink::{Fields, Value};
///
/// let mut log = LogInstance::initialize("service.log")?;
/// let fields = Fields::new().with("port", 8080);
/// log.info(OutputConfig::both().with_color(true), Some(&fields), &[Value::from("listening")]);
/// # Ok::<(), logging::LogError>(())
/// ```
pub struct LogInstance<F = File, T = Stdout> {
    file: RecordSink<F>,
    terminal: RecordSink<T>,
}

impl LogInstance {
    /// Creates (or truncates) the file at `path` and binds a new instance to it.
    ///
    /// Terminal output goes to the process's standard output.
    pub fn initialize(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        match File::create(path) {
            Ok(file) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(path = %path.display(), "opened log file");
                Ok(Self::with_writers(file, io::stdout()))
            }
            Err(source) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(path = %path.display(), error = %source, "cannot open log file");
                Err(LogError::Open {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

impl<F, T> LogInstance<F, T>
where
    F: Write,
    T: Write,
{
    /// Binds an instance to arbitrary writers standing in for the file and the terminal.
    #[must_use]
    pub fn with_writers(file: F, terminal: T) -> Self {
        Self {
            file: RecordSink::new(file),
            terminal: RecordSink::new(terminal),
        }
    }

    /// Writes a record to the sinks selected by `config`, ignoring write failures.
    ///
    /// Message `parts` are concatenated without separators and `fields`, when
    /// present, follow them on the same line.
    ///
    /// # Process exit
    ///
    /// With [`Severity::Fatal`] this call does not return: both sinks are
    /// flushed and the process exits with status 1, even when `config`
    /// selects no sink. The signature still returns `()`. Use
    /// [`fatal`](Self::fatal) or `emit_fatal!` where the caller needs the
    /// divergence in the type (`-> !`).
    pub fn emit(
        &mut self,
        config: OutputConfig,
        severity: Severity,
        fields: Option<&Fields>,
        parts: &[Value],
    ) {
        let prefix = Prefix::now(severity);
        let record = Record::new(&prefix, parts).with_optional_fields(fields);
        let _ = self.write_record(config, &record);
        self.finish(severity);
    }

    /// Like [`emit`](Self::emit) but reports the first sink that failed.
    ///
    /// Every selected sink is still attempted after a failure. A fatal record
    /// terminates the process regardless of the outcome.
    pub fn try_emit(
        &mut self,
        config: OutputConfig,
        severity: Severity,
        fields: Option<&Fields>,
        parts: &[Value],
    ) -> LogResult<()> {
        let prefix = Prefix::now(severity);
        let record = Record::new(&prefix, parts).with_optional_fields(fields);
        let outcome = self.write_record(config, &record);
        self.finish(severity);
        outcome
    }

    /// Emits an informational record.
    pub fn info(&mut self, config: OutputConfig, fields: Option<&Fields>, parts: &[Value]) {
        self.emit(config, Severity::Normal, fields, parts);
    }

    /// Emits a warning record.
    pub fn warning(&mut self, config: OutputConfig, fields: Option<&Fields>, parts: &[Value]) {
        self.emit(config, Severity::Warning, fields, parts);
    }

    /// Emits a fatal record and terminates the process with status 1.
    pub fn fatal(&mut self, config: OutputConfig, fields: Option<&Fields>, parts: &[Value]) -> ! {
        let prefix = Prefix::now(Severity::Fatal);
        let record = Record::new(&prefix, parts).with_optional_fields(fields);
        let _ = self.write_record(config, &record);
        self.terminate()
    }

    /// Borrows the file sink.
    #[must_use]
    pub const fn file_sink(&self) -> &RecordSink<F> {
        &self.file
    }

    /// Borrows the terminal sink.
    #[must_use]
    pub const fn terminal_sink(&self) -> &RecordSink<T> {
        &self.terminal
    }

    /// Consumes the instance and returns the file and terminal writers.
    #[must_use]
    pub fn into_writers(self) -> (F, T) {
        (self.file.into_inner(), self.terminal.into_inner())
    }

    fn write_record(&mut self, config: OutputConfig, record: &Record<'_>) -> LogResult<()> {
        let mut first_failure = None;

        if config.to_file
            && let Err(source) = self.file.write(record)
        {
            first_failure.get_or_insert(LogError::Write {
                sink: SinkKind::File,
                source,
            });
        }

        if config.to_terminal {
            self.terminal.set_color_mode(config.color_mode());
            if let Err(source) = self.terminal.write(record) {
                first_failure.get_or_insert(LogError::Write {
                    sink: SinkKind::Terminal,
                    source,
                });
            }
        }

        first_failure.map_or(Ok(()), Err)
    }

    fn finish(&mut self, severity: Severity) {
        if severity.is_fatal() {
            self.terminate();
        }
    }

    fn terminate(&mut self) -> ! {
        // process::exit skips destructors, so buffered writers are drained here.
        let _ = self.file.flush();
        let _ = self.terminal.flush();
        process::exit(FATAL_EXIT_CODE)
    }
}

/// Creates (or truncates) the file at `path` and binds a new [`LogInstance`] to it.
///
/// Shorthand for [`LogInstance::initialize`].
pub fn initialize(path: impl AsRef<Path>) -> LogResult<LogInstance> {
    LogInstance::initialize(path)
}
