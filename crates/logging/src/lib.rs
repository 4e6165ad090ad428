#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` writes timestamped, leveled records to a log file, to the
//! terminal, or to both. A [`LogInstance`] is created once with
//! [`initialize`], which creates or truncates the destination file, and then
//! lives for the rest of the process. Each emission names the sinks it wants
//! through an [`OutputConfig`], a [`Severity`], optional structured
//! [`Fields`] and a sequence of message parts.
//!
//! # Design
//!
//! Formatting lives in the `logging-sink` crate; this crate owns the open file,
//! the standard output handle and the process-level behaviour around them.
//! Every emission captures the wall clock once and renders the same
//! [`Prefix`](logging_sink::Prefix) into each sink, so the file and the
//! terminal never disagree on a record's timestamp.
//!
//! # Invariants
//!
//! - One emission produces at most one line per sink, terminated by `\n`.
//! - Terminal coloring never affects the file sink.
//! - A [`Severity::Fatal`] emission terminates the process with status 1 after
//!   its writes, even when no sink is selected.
//! - Write failures are ignored by [`LogInstance::emit`] and its shorthands;
//!   [`LogInstance::try_emit`] reports them.
//!
//! # Errors
//!
//! [`initialize`] fails with [`LogError::Open`] when the destination cannot be
//! created. [`LogInstance::try_emit`] reports [`LogError::Write`]. No other
//! operation returns an error.
//!
//! # Concurrency
//!
//! A log instance has no internal locking. Records written through separate
//! `&mut` borrows are whole per sink, but callers that share an instance
//! across threads must wrap it in a mutex themselves.
//!
//! # Examples
//!
//! ```no_run
//! use logging::{Fields, OutputConfig, emit_info, emit_warning};
//!
//! let mut log = logging::initialize("worker.log")?;
//! let config = OutputConfig::both().with_auto_color();
//!
//! emit_info!(log, config, "worker ", 3, " ready");
//! let fields = Fields::new().with("queue", "jobs").with("depth", 512);
//! emit_warning!(log, config, fields = &fields; "queue is backing up");
//! # Ok::<(), logging::LogError>(())
//! ```
//!
//! # See also
//!
//! - `logging-sink` for the record layout and writer sinks.

mod config;
mod error;
mod instance;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::OutputConfig;
pub use error::{LogError, LogResult, SinkKind};
pub use instance::{LogInstance, initialize};
pub use logging_sink::{FATAL_EXIT_CODE, Fields, Severity, Value};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LogInstanceLayer, init_tracing, init_tracing_with_filter};
