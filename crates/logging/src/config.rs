//! crates/logging/src/config.rs
//! Sink selection for a single emission.

use std::io;

use is_terminal::IsTerminal;
use logging_sink::ColorMode;

/// Which sinks an emission reaches and whether terminal output is colored.
///
/// The three switches are independent. `colored` only affects the terminal
/// sink and is ignored when `to_terminal` is off. Turning both sinks off is
/// legal; such an emission writes nothing but a fatal one still terminates the
/// process.
///
/// # Examples
///
/// ```
/// use logging::OutputConfig;
///
/// let config = OutputConfig::terminal_only().with_color(true);
/// assert!(!config.to_file);
/// assert!(config.to_terminal && config.colored);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutputConfig {
    /// Write the record to the log file.
    pub to_file: bool,
    /// Write the record to standard output.
    pub to_terminal: bool,
    /// Wrap terminal records in ANSI colors.
    pub colored: bool,
}

impl OutputConfig {
    /// Builds a configuration from the three switches.
    #[must_use]
    pub const fn new(to_file: bool, to_terminal: bool, colored: bool) -> Self {
        Self {
            to_file,
            to_terminal,
            colored,
        }
    }

    /// Writes to the log file only.
    #[must_use]
    pub const fn file_only() -> Self {
        Self::new(true, false, false)
    }

    /// Writes to the terminal only, uncolored.
    #[must_use]
    pub const fn terminal_only() -> Self {
        Self::new(false, true, false)
    }

    /// Writes to both sinks, uncolored.
    #[must_use]
    pub const fn both() -> Self {
        Self::new(true, true, false)
    }

    /// Writes to neither sink.
    #[must_use]
    pub const fn silent() -> Self {
        Self::new(false, false, false)
    }

    /// Returns the configuration with terminal coloring set to `colored`.
    #[must_use]
    pub const fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Colors terminal output only when standard output is a terminal.
    #[must_use]
    pub fn with_auto_color(self) -> Self {
        self.with_color(io::stdout().is_terminal())
    }

    /// Reports whether neither sink is selected.
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        !self.to_file && !self.to_terminal
    }

    /// Color mode applied to the terminal sink.
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        if self.to_terminal && self.colored {
            ColorMode::Ansi
        } else {
            ColorMode::Plain
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::both()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_select_expected_sinks() {
        assert_eq!(OutputConfig::file_only(), OutputConfig::new(true, false, false));
        assert_eq!(OutputConfig::terminal_only(), OutputConfig::new(false, true, false));
        assert_eq!(OutputConfig::default(), OutputConfig::both());
        assert!(OutputConfig::silent().is_silent());
        assert!(!OutputConfig::both().is_silent());
    }

    #[test]
    fn color_requires_terminal() {
        assert_eq!(OutputConfig::both().with_color(true).color_mode(), ColorMode::Ansi);
        assert_eq!(OutputConfig::both().color_mode(), ColorMode::Plain);
        assert_eq!(
            OutputConfig::file_only().with_color(true).color_mode(),
            ColorMode::Plain
        );
    }

    #[test]
    fn auto_color_keeps_sink_selection() {
        let config = OutputConfig::file_only().with_auto_color();
        assert!(config.to_file);
        assert!(!config.to_terminal);
        assert_eq!(config.color_mode(), ColorMode::Plain);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fills_missing_switches_with_defaults() {
        let config: OutputConfig =
            serde_json::from_str(r#"{"colored": true}"#).expect("deserialize");
        assert_eq!(config, OutputConfig::both().with_color(true));

        let json = serde_json::to_string(&OutputConfig::file_only()).expect("serialize");
        assert_eq!(json, r#"{"to_file":true,"to_terminal":false,"colored":false}"#);
    }
}
