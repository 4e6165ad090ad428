//! crates/logging-sink/src/value.rs
//! Printable values used for message parts and structured fields.

use std::borrow::Cow;
use std::fmt;

/// A printable value from the closed set accepted by records.
///
/// Message parts and structured field values are both expressed as `Value`s.
/// Each variant renders with its natural textual form: strings as-is,
/// integers and floats in decimal, booleans as `true`/`false`. Types outside
/// the set can be captured with [`Value::display`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Text rendered verbatim.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Double precision float.
    Float(f64),
    /// Single precision float, kept narrow so it prints its shortest `f32` form.
    Float32(f32),
    /// Boolean.
    Bool(bool),
    /// Single character.
    Char(char),
}

impl Value {
    /// Captures any [`Display`](fmt::Display) type as its rendered text.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    /// use logging_sink::Value;
    ///
    /// let value = Value::display(Ipv4Addr::LOCALHOST);
    /// assert_eq!(value.to_string(), "127.0.0.1");
    /// ```
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Str(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(text) => f.write_str(text),
            Self::Int(number) => fmt::Display::fmt(number, f),
            Self::UInt(number) => fmt::Display::fmt(number, f),
            Self::Float(number) => fmt::Display::fmt(number, f),
            Self::Float32(number) => fmt::Display::fmt(number, f),
            Self::Bool(flag) => fmt::Display::fmt(flag, f),
            Self::Char(ch) => fmt::Display::fmt(ch, f),
        }
    }
}

macro_rules! value_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

value_from!(Int as i64: i8, i16, i32, i64);
value_from!(UInt as u64: u8, u16, u32, u64);
value_from!(Float as f64: f64);
value_from!(Float32 as f32: f32);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_default_forms() {
        assert_eq!(Value::from("as-is").to_string(), "as-is");
        assert_eq!(Value::from(-42).to_string(), "-42");
        assert_eq!(Value::from(7_u8).to_string(), "7");
        assert_eq!(Value::from(usize::MAX).to_string(), usize::MAX.to_string());
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(1.1_f32).to_string(), "1.1");
        assert_eq!(Value::from(0.1_f32).to_string(), "0.1");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from('x').to_string(), "x");
    }

    #[test]
    fn float_widths_are_kept_apart() {
        assert_eq!(Value::from(1.1_f32), Value::Float32(1.1));
        assert_eq!(Value::from(1.1_f64), Value::Float(1.1));
    }

    #[test]
    fn integer_widths_map_to_signedness() {
        assert_eq!(Value::from(3_i16), Value::Int(3));
        assert_eq!(Value::from(3_u32), Value::UInt(3));
        assert_eq!(Value::from(3_isize), Value::Int(3));
    }

    #[test]
    fn owned_and_borrowed_strings_agree() {
        let owned = String::from("text");
        assert_eq!(Value::from(&owned), Value::from("text"));
        assert_eq!(Value::from(Cow::Borrowed("text")), Value::from(owned));
    }
}
