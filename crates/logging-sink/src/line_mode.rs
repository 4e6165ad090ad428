//! crates/logging-sink/src/line_mode.rs
//! Record terminator policy.

/// Whether a rendered record ends with `\n`.
///
/// Log files and terminals both expect one record per line, so sinks default
/// to [`LineMode::WithNewline`]. [`LineMode::WithoutNewline`] exists for
/// callers that embed a record inside a larger line of their own.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// End every record with `\n`, after any color reset.
    #[default]
    WithNewline,
    /// Leave the record unterminated.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether records end with `\n`.
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }

    /// Returns the text placed after a record: `"\n"` or nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert_eq!(LineMode::WithNewline.terminator(), "\n");
    /// assert_eq!(LineMode::WithoutNewline.terminator(), "");
    /// ```
    #[must_use]
    pub const fn terminator(self) -> &'static str {
        match self {
            Self::WithNewline => "\n",
            Self::WithoutNewline => "",
        }
    }
}

impl From<bool> for LineMode {
    fn from(terminated: bool) -> Self {
        if terminated {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests;
