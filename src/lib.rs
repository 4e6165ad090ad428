#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `duolog` is a small logging utility that writes every record to a log
//! file, to the terminal, or to both. It re-exports the public surface of the
//! workspace crates so applications depend on a single package:
//!
//! - [`logging`] owns the [`LogInstance`], its [`OutputConfig`] and the
//!   emission macros.
//! - [`logging_sink`] owns the record layout: [`Prefix`], [`Record`],
//!   [`Fields`] and the ANSI [`AnsiColor`] table.
//!
//! # Examples
//!
//! ```no_run
//! use duolog::{Fields, OutputConfig, emit_info, emit_warning};
//!
//! let mut log = duolog::initialize("app.log")?;
//! emit_info!(log, OutputConfig::both().with_auto_color(), "started with ", 4, " workers");
//!
//! let fields = Fields::new().with("pending", 17);
//! emit_warning!(log, OutputConfig::file_only(), fields = &fields; "queue growing");
//! # Ok::<(), duolog::LogError>(())
//! ```

pub use logging::{
    FATAL_EXIT_CODE, Fields, LogError, LogInstance, LogResult, OutputConfig, Severity, SinkKind,
    Value, emit_fatal, emit_info, emit_warning, initialize,
};
#[cfg(feature = "tracing")]
pub use logging::{LogInstanceLayer, init_tracing, init_tracing_with_filter};
pub use logging_sink::{
    AnsiColor, ColorMode, LineMode, ParseSeverityError, Prefix, Record, RecordSink, Timestamp,
    contains_escape,
};

/// Re-export of the `logging` crate.
pub use logging;
/// Re-export of the `logging-sink` crate.
pub use logging_sink;
