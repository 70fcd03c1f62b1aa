// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Literal Encoding
//!
//! The serializer never escapes string values itself. It hands the raw value
//! to a [`LiteralEncoder`] and splices whatever comes back. [`MySqlEncoder`]
//! is the encoder the router ships with; tests and other front ends can
//! substitute their own.

/// Turns a raw string value into a single SQL string literal
pub trait LiteralEncoder: Send + Sync {
    /// Append the quoted, escaped form of `raw` to `out`
    fn encode(&self, raw: &str, out: &mut String);
}

/// MySQL string literal encoding: single quotes, backslash escapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MySqlEncoder;

pub(crate) static MYSQL_ENCODER: MySqlEncoder = MySqlEncoder;

impl MySqlEncoder {
    fn escape(ch: char) -> Option<&'static str> {
        match ch {
            '\0' => Some("\\0"),
            '\'' => Some("\\'"),
            '"' => Some("\\\""),
            '\u{8}' => Some("\\b"),
            '\n' => Some("\\n"),
            '\r' => Some("\\r"),
            '\t' => Some("\\t"),
            '\u{1a}' => Some("\\Z"),
            '\\' => Some("\\\\"),
            _ => None,
        }
    }
}

impl LiteralEncoder for MySqlEncoder {
    fn encode(&self, raw: &str, out: &mut String) {
        out.reserve(raw.len() + 2);
        out.push('\'');
        for ch in raw.chars() {
            match Self::escape(ch) {
                Some(escaped) => out.push_str(escaped),
                None => out.push(ch),
            }
        }
        out.push('\'');
    }
}

/// Encode `raw` with the MySQL encoder into a fresh string
pub fn encode_sql(raw: &str) -> String {
    let mut out = String::new();
    MYSQL_ENCODER.encode(raw, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        assert_eq!(encode_sql("abc"), "'abc'");
        assert_eq!(encode_sql(""), "''");
    }

    #[test]
    fn test_quotes_escaped() {
        assert_eq!(encode_sql("it's"), "'it\\'s'");
        assert_eq!(encode_sql("say \"hi\""), "'say \\\"hi\\\"'");
    }

    #[test]
    fn test_control_bytes_escaped() {
        assert_eq!(encode_sql("a\nb\tc\rd"), "'a\\nb\\tc\\rd'");
        assert_eq!(encode_sql("\0\u{1a}\u{8}"), "'\\0\\Z\\b'");
        assert_eq!(encode_sql("back\\slash"), "'back\\\\slash'");
    }

    #[test]
    fn test_multibyte_passthrough() {
        assert_eq!(encode_sql("héllo 世界"), "'héllo 世界'");
    }
}
