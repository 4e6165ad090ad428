//! crates/logging-sink/src/color.rs
//! ANSI SGR escapes used for terminal records.

/// Terminal colors used to open a record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnsiColor {
    /// Terminal default; doubles as the reset code.
    Default,
    /// Bold red.
    Red,
    /// Bold yellow.
    Yellow,
}

impl AnsiColor {
    /// Escape sequence written after every colored record.
    pub const RESET: &'static str = "\x1b[0;0m";

    const ALL: [Self; 3] = [Self::Default, Self::Red, Self::Yellow];

    /// Returns the SGR escape sequence selecting this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::AnsiColor;
    ///
    /// assert_eq!(AnsiColor::Red.escape(), "\x1b[31;1m");
    /// assert_eq!(AnsiColor::Default.escape(), AnsiColor::RESET);
    /// ```
    #[must_use]
    pub const fn escape(self) -> &'static str {
        match self {
            Self::Default => Self::RESET,
            Self::Red => "\x1b[31;1m",
            Self::Yellow => "\x1b[33;1m",
        }
    }
}

/// Whether a sink wraps records in ANSI escapes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColorMode {
    /// Write records as plain text.
    #[default]
    Plain,
    /// Open each record with its severity color and close it with [`AnsiColor::RESET`].
    Ansi,
}

impl ColorMode {
    /// Reports whether records are wrapped in escapes.
    #[must_use]
    pub const fn is_ansi(self) -> bool {
        matches!(self, Self::Ansi)
    }
}

impl From<bool> for ColorMode {
    fn from(colored: bool) -> Self {
        if colored { Self::Ansi } else { Self::Plain }
    }
}

/// Reports whether `text` contains any escape produced by [`AnsiColor::escape`].
///
/// # Examples
///
/// ```
/// use logging_sink::{AnsiColor, contains_escape};
///
/// assert!(contains_escape(&format!("{}boom", AnsiColor::Red.escape())));
/// assert!(!contains_escape("plain text"));
/// ```
#[must_use]
pub fn contains_escape(text: &str) -> bool {
    AnsiColor::ALL
        .iter()
        .any(|color| text.contains(color.escape()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_are_distinct() {
        assert_ne!(AnsiColor::Red.escape(), AnsiColor::Yellow.escape());
        assert_ne!(AnsiColor::Red.escape(), AnsiColor::Default.escape());
        assert_eq!(AnsiColor::Yellow.escape(), "\x1b[33;1m");
    }

    #[test]
    fn color_mode_from_bool() {
        assert_eq!(ColorMode::from(true), ColorMode::Ansi);
        assert_eq!(ColorMode::from(false), ColorMode::Plain);
        assert_eq!(ColorMode::default(), ColorMode::Plain);
    }

    #[test]
    fn detects_each_escape() {
        for color in AnsiColor::ALL {
            assert!(contains_escape(&format!("x{}y", color.escape())));
        }
        assert!(!contains_escape("\x1b[32m green is not ours"));
    }
}
