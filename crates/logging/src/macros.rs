//! crates/logging/src/macros.rs
//! Emission macros taking a variable number of message parts.
//!
//! Each part is converted with [`Value::from`](crate::Value::from) and the
//! parts are concatenated without separators. Structured fields are passed
//! before the parts with `fields = <expr>;`.

/// Emit an informational record.
///
/// # Example
/// ```no_run
/// use logging::{Fields, OutputConfig, emit_info};
///
/// let mut log = logging::initialize("app.log")?;
/// emit_info!(log, OutputConfig::both(), "served ", 12, " requests");
///
/// let fields = Fields::new().with("route", "/health");
/// emit_info!(log, OutputConfig::file_only(), fields = &fields; "ok");
/// # Ok::<(), logging::LogError>(())
/// ```
#[macro_export]
macro_rules! emit_info {
    ($log:expr, $config:expr, fields = $fields:expr; $($part:expr),* $(,)?) => {
        $log.info(
            $config,
            ::core::option::Option::Some($fields),
            &[$($crate::Value::from($part)),*],
        )
    };
    ($log:expr, $config:expr $(, $part:expr)* $(,)?) => {
        $log.info(
            $config,
            ::core::option::Option::None,
            &[$($crate::Value::from($part)),*],
        )
    };
}

/// Emit a warning record.
///
/// # Example
/// ```ignore
/// emit_warning!(log, OutputConfig::both().with_color(true), "retrying in ", 5, "s");
/// ```
#[macro_export]
macro_rules! emit_warning {
    ($log:expr, $config:expr, fields = $fields:expr; $($part:expr),* $(,)?) => {
        $log.warning(
            $config,
            ::core::option::Option::Some($fields),
            &[$($crate::Value::from($part)),*],
        )
    };
    ($log:expr, $config:expr $(, $part:expr)* $(,)?) => {
        $log.warning(
            $config,
            ::core::option::Option::None,
            &[$($crate::Value::from($part)),*],
        )
    };
}

/// Emit a fatal record and terminate the process with status 1.
///
/// The expansion has type `!`.
///
/// # Example
/// ```ignore
/// let config = match load() {
///     Ok(config) => config,
///     Err(err) => emit_fatal!(log, OutputConfig::both(), "cannot load config: ", err.to_string()),
/// };
/// ```
#[macro_export]
macro_rules! emit_fatal {
    ($log:expr, $config:expr, fields = $fields:expr; $($part:expr),* $(,)?) => {
        $log.fatal(
            $config,
            ::core::option::Option::Some($fields),
            &[$($crate::Value::from($part)),*],
        )
    };
    ($log:expr, $config:expr $(, $part:expr)* $(,)?) => {
        $log.fatal(
            $config,
            ::core::option::Option::None,
            &[$($crate::Value::from($part)),*],
        )
    };
}
