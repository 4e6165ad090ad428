//! crates/logging-sink/src/record.rs
//! A single log record and its textual rendering.

use std::fmt::Write as _;

use crate::color::{AnsiColor, ColorMode};
use crate::fields::Fields;
use crate::line_mode::LineMode;
use crate::timestamp::Prefix;
use crate::value::Value;

/// One log record: a prefix, the message parts and optional structured fields.
///
/// The record borrows all of its pieces so the same prefix and parts can be
/// rendered into several sinks. Rendering concatenates the parts without any
/// separator and places the fields directly after them.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    prefix: &'a Prefix,
    parts: &'a [Value],
    fields: Option<&'a Fields>,
}

impl<'a> Record<'a> {
    /// Creates a record without structured fields.
    #[must_use]
    pub const fn new(prefix: &'a Prefix, parts: &'a [Value]) -> Self {
        Self {
            prefix,
            parts,
            fields: None,
        }
    }

    /// Attaches structured fields.
    #[must_use]
    pub const fn with_fields(mut self, fields: &'a Fields) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Replaces the structured fields, clearing them when `fields` is `None`.
    #[must_use]
    pub const fn with_optional_fields(mut self, fields: Option<&'a Fields>) -> Self {
        self.fields = fields;
        self
    }

    /// Returns the prefix.
    #[must_use]
    pub const fn prefix(&self) -> &'a Prefix {
        self.prefix
    }

    /// Returns the message parts.
    #[must_use]
    pub const fn parts(&self) -> &'a [Value] {
        self.parts
    }

    /// Returns the structured fields, if any.
    #[must_use]
    pub const fn fields(&self) -> Option<&'a Fields> {
        self.fields
    }

    /// Appends the rendered record to `out`.
    ///
    /// With [`ColorMode::Ansi`] the record opens with its severity color and
    /// closes with [`AnsiColor::RESET`]; the newline, when requested, follows
    /// the reset code.
    pub fn render_into(&self, out: &mut String, color_mode: ColorMode, line_mode: LineMode) {
        if color_mode.is_ansi() {
            out.push_str(self.prefix.severity().color().escape());
        }

        // Writing into a String cannot fail.
        let _ = write!(out, "{}", self.prefix);
        for part in self.parts {
            let _ = write!(out, "{part}");
        }

        if let Some(fields) = self.fields {
            fields.render_into(out);
        }

        if color_mode.is_ansi() {
            out.push_str(AnsiColor::RESET);
        }
        out.push_str(line_mode.terminator());
    }

    /// Renders the record into a fresh `String`.
    #[must_use]
    pub fn render(&self, color_mode: ColorMode, line_mode: LineMode) -> String {
        let mut out = String::new();
        self.render_into(&mut out, color_mode, line_mode);
        out
    }
}
