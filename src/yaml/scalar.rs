use core::fmt::Write;

use bstr::ByteSlice;

/// Where a scalar is being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Context {
    /// A key or a value in a block mapping.
    Block,
    /// An item in a flow sequence.
    Flow,
}

/// How a string has to be written to be read back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Style {
    Plain,
    SingleQuoted,
    DoubleQuoted,
}

/// Characters which can't start a plain scalar.
const INDICATORS: &[u8] = b"-?:,[]{}#&*!|>'\"%@`";
/// Characters which terminate a plain scalar inside of a flow collection.
const FLOW_INDICATORS: &[u8] = b",[]{}";
/// Words which would be read back as a boolean or a null value.
const RESERVED: [&str; 10] = [
    "null", "~", "true", "false", "yes", "no", "on", "off", "y", "n",
];

/// Figure out the style to use for a string.
pub(crate) fn style(string: &str, context: Context) -> Style {
    let bytes = string.as_bytes();

    if memchr::memchr3(b'\n', b'\r', b'\t', bytes).is_some()
        || string.chars().any(is_break_or_control)
    {
        return Style::DoubleQuoted;
    }

    let Some((&first, _)) = bytes.split_first() else {
        return Style::SingleQuoted;
    };

    let quoted = INDICATORS.contains(&first)
        || first == b' '
        || bytes.last() == Some(&b' ')
        || bytes.last() == Some(&b':')
        || bytes.contains_str(": ")
        || bytes.contains_str(" #")
        || (context == Context::Flow && bytes.find_byteset(FLOW_INDICATORS).is_some())
        || RESERVED.iter().any(|word| word.eq_ignore_ascii_case(string))
        || looks_numeric(bytes);

    if quoted {
        Style::SingleQuoted
    } else {
        Style::Plain
    }
}

/// Line and paragraph separators count as line breaks in YAML.
fn is_break_or_control(c: char) -> bool {
    c.is_control() || matches!(c, '\u{2028}' | '\u{2029}')
}

/// Test if a plain scalar would be read back as a number.
fn looks_numeric(bytes: &[u8]) -> bool {
    matches!(bytes.first(), Some(b'.' | b'+'))
        || lexical_core::parse::<f64>(bytes).is_ok()
        || bytes.get(..2).map_or(false, |prefix| {
            prefix.eq_ignore_ascii_case(b"0x")
                || prefix.eq_ignore_ascii_case(b"0o")
                || prefix.eq_ignore_ascii_case(b"0b")
        })
}

/// Write a string in the given context.
pub(crate) fn write(out: &mut String, string: &str, context: Context) {
    match style(string, context) {
        Style::Plain => {
            out.push_str(string);
        }
        Style::SingleQuoted => {
            out.push('\'');
            out.push_str(&string.replace('\'', "''"));
            out.push('\'');
        }
        Style::DoubleQuoted => {
            out.push('"');
            escape(out, string);
            out.push('"');
        }
    }
}

fn escape(out: &mut String, string: &str) {
    for c in string.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\x1b' => out.push_str("\\e"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if c.is_control() => {
                // Writing into a string can't fail.
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
}
