#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` owns everything about how a log record looks on the wire:
//! the timestamp and severity [`Prefix`], the message parts, the optional
//! structured [`Fields`] suffix, ANSI coloring and the trailing newline. It
//! also provides [`RecordSink`], a lightweight wrapper around an
//! [`std::io::Write`] implementor that renders a [`Record`] and hands it to the
//! writer in a single call.
//!
//! # Design
//!
//! A record is composed of borrowed pieces so that the same [`Prefix`] and
//! message parts can be rendered into several sinks without cloning. Each
//! [`RecordSink`] keeps a reusable `String` scratch buffer; rendering happens
//! into that buffer first and the bytes are then written with one
//! [`write_all`](std::io::Write::write_all). Callers choose whether records
//! end with a newline through [`LineMode`] and whether they are wrapped in
//! ANSI escapes through [`ColorMode`].
//!
//! # Invariants
//!
//! - The severity tag is always one of `" [ INFO ] "`, `" [ WARN ] "` or
//!   `" [ ERRO ] "`, spaces included.
//! - Message parts are concatenated without separators.
//! - A colored record always ends with [`AnsiColor::RESET`] before the newline.
//! - [`Fields`] iterate in unspecified order; nothing in this crate sorts them.
//!
//! # Errors
//!
//! Sink operations surface [`std::io::Error`] values originating from the
//! underlying writer. Formatting itself cannot fail.
//!
//! # Examples
//!
//! Render a warning with one structured field into an in-memory buffer:
//!
//! ```
//! use logging_sink::{Fields, Prefix, Record, RecordSink, Severity, Timestamp, Value};
//!
//! let prefix = Prefix::new(Timestamp::now(), Severity::Warning);
//! let parts = [Value::from("disk at "), Value::from(91), Value::from("%")];
//! let fields = Fields::new().with("mount", "/var");
//!
//! let mut sink = RecordSink::new(Vec::new());
//! sink.write(&Record::new(&prefix, &parts).with_fields(&fields)).unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(output.ends_with(" [ WARN ] disk at 91% [ (mount: /var) ]\n"));
//! ```

mod color;
mod fields;
mod line_mode;
mod record;
mod severity;
mod sink;
mod timestamp;
mod value;

pub use color::{AnsiColor, ColorMode, contains_escape};
pub use fields::Fields;
pub use line_mode::LineMode;
pub use record::Record;
pub use severity::{FATAL_EXIT_CODE, ParseSeverityError, Severity};
pub use sink::RecordSink;
pub use timestamp::{Prefix, Timestamp};
pub use value::Value;
