//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and a [`LogInstance`].
//!
//! [`LogInstanceLayer`] is a tracing-subscriber layer that turns every event
//! into a record on a shared log instance. The event's `message` becomes the
//! record text and every other field becomes a structured field.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::{Arc, Mutex};
//! use logging::{OutputConfig, init_tracing};
//!
//! let log = Arc::new(Mutex::new(logging::initialize("app.log")?));
//! init_tracing(Arc::clone(&log), OutputConfig::both().with_auto_color())?;
//!
//! tracing::info!(port = 8080, "listening");
//! ```
//!
//! Tracing levels map onto severities as `ERROR`/`WARN` → Warning and
//! everything else → Normal. The bridge never produces a fatal record, so a
//! tracing event cannot terminate the process.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use logging_sink::{Fields, Severity, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::config::OutputConfig;
use crate::instance::LogInstance;

/// A tracing layer that writes events to a shared [`LogInstance`].
///
/// The instance sits behind a [`Mutex`], which serializes emissions coming
/// from different threads.
///
/// # Re-entrancy
///
/// [`on_event`](Layer::on_event) locks that mutex for the duration of the
/// write, and `std::sync::Mutex` is not re-entrant. Do not emit tracing
/// events while holding the guard on the same thread. That includes calling
/// [`LogInstance::initialize`], which reports the opened file through
/// `tracing::debug!`. Either deadlocks or panics.
pub struct LogInstanceLayer<F, T> {
    instance: Arc<Mutex<LogInstance<F, T>>>,
    config: OutputConfig,
}

impl<F, T> LogInstanceLayer<F, T> {
    /// Creates a layer that emits every event with `config`.
    #[must_use]
    pub const fn new(instance: Arc<Mutex<LogInstance<F, T>>>, config: OutputConfig) -> Self {
        Self { instance, config }
    }

    /// Map a tracing level to a record severity.
    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR | Level::WARN => Severity::Warning,
            Level::INFO | Level::DEBUG | Level::TRACE => Severity::Normal,
        }
    }
}

impl<S, F, T> Layer<S> for LogInstanceLayer<F, T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    F: Write + Send + 'static,
    T: Write + Send + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::severity_for(event.metadata().level());

        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);
        let parts: Vec<Value> = visitor.message.into_iter().map(Value::from).collect();
        let fields = (!visitor.fields.is_empty()).then_some(&visitor.fields);

        let mut log = self
            .instance
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        log.emit(self.config, severity, fields, &parts);
    }
}

/// Visitor splitting an event into its message and its structured fields.
#[derive(Default)]
struct RecordVisitor {
    message: Option<String>,
    fields: Fields,
}

impl Visit for RecordVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            self.message = Some(rendered);
        } else {
            self.fields.insert(field.name(), rendered);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.insert(field.name(), value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name(), value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name(), value);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields.insert(field.name(), value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.insert(field.name(), value);
    }
}

/// Install a global subscriber that forwards every tracing event to `instance`.
pub fn init_tracing<F, T>(
    instance: Arc<Mutex<LogInstance<F, T>>>,
    config: OutputConfig,
) -> Result<(), TryInitError>
where
    F: Write + Send + 'static,
    T: Write + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LogInstanceLayer::new(instance, config))
        .try_init()
}

/// Install a global subscriber that applies `filter` before forwarding events to `instance`.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::filter::LevelFilter;
///
/// init_tracing_with_filter(log, OutputConfig::file_only(), LevelFilter::WARN)?;
/// ```
pub fn init_tracing_with_filter<F, T, L>(
    instance: Arc<Mutex<LogInstance<F, T>>>,
    config: OutputConfig,
    filter: L,
) -> Result<(), TryInitError>
where
    F: Write + Send + 'static,
    T: Write + Send + 'static,
    L: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LogInstanceLayer::new(instance, config))
        .try_init()
}
