//! crates/logging-sink/src/severity.rs
//! Severity levels and their fixed tags.

use std::fmt;
use std::str::FromStr;

use crate::color::AnsiColor;

/// Exit status used when a [`Severity::Fatal`] record terminates the process.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Classification of a log record.
///
/// The severity selects the tag written after the timestamp, the color used in
/// ANSI terminal output and whether emitting the record terminates the process.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Informational record.
    #[cfg_attr(feature = "serde", serde(rename = "info", alias = "normal"))]
    Normal,
    /// Something unexpected that does not stop the program.
    #[cfg_attr(feature = "serde", serde(rename = "warning", alias = "warn"))]
    Warning,
    /// Unrecoverable condition; emitting it exits the process with status 1.
    #[cfg_attr(feature = "serde", serde(rename = "fatal", alias = "erro"))]
    Fatal,
}

impl Severity {
    /// Returns the lowercase label of the severity.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::Normal.as_str(), "info");
    /// assert_eq!(Severity::Warning.as_str(), "warning");
    /// assert_eq!(Severity::Fatal.as_str(), "fatal");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "info",
            Self::Warning => "warning",
            Self::Fatal => "fatal",
        }
    }

    /// Returns the tag appended to the timestamp of every record.
    ///
    /// The leading and trailing spaces are part of the tag, so the message
    /// text follows the closing bracket after exactly one space.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::Normal.tag(), " [ INFO ] ");
    /// assert_eq!(Severity::Warning.tag(), " [ WARN ] ");
    /// assert_eq!(Severity::Fatal.tag(), " [ ERRO ] ");
    /// ```
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Normal => " [ INFO ] ",
            Self::Warning => " [ WARN ] ",
            Self::Fatal => " [ ERRO ] ",
        }
    }

    /// Returns the color that opens a record of this severity on an ANSI terminal.
    #[must_use]
    pub const fn color(self) -> AnsiColor {
        match self {
            Self::Normal => AnsiColor::Default,
            Self::Warning => AnsiColor::Yellow,
            Self::Fatal => AnsiColor::Red,
        }
    }

    /// Reports whether emitting this severity terminates the process.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Fatal)
    }

    /// Returns the process exit status tied to this severity, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::Fatal.exit_code(), Some(1));
    /// assert_eq!(Severity::Warning.exit_code(), None);
    /// ```
    #[must_use]
    pub const fn exit_code(self) -> Option<i32> {
        if self.is_fatal() {
            Some(FATAL_EXIT_CODE)
        } else {
            None
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses either the lowercase label or the four-letter tag word.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "info" | "normal" => Ok(Self::Normal),
            "warning" | "warn" => Ok(Self::Warning),
            "fatal" | "erro" => Ok(Self::Fatal),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}
