use crate::yaml::scalar::{style, write, Context, Style};

macro_rules! test {
    ($string:expr, $context:ident, $style:ident) => {
        assert_eq!(
            style($string, Context::$context),
            Style::$style,
            "{:?}",
            $string
        );
    };
}

#[test]
fn plain() {
    test!("hello", Block, Plain);
    test!("hello world", Block, Plain);
    test!("1h 30m", Block, Plain);
    test!("2.50 MB", Block, Plain);
    test!("2023-05-01T12:30:00Z", Block, Plain);
    test!("a, b", Block, Plain);
    test!("it's", Flow, Plain);
}

#[test]
fn single_quoted() {
    test!("", Block, SingleQuoted);
    test!("null", Block, SingleQuoted);
    test!("NULL", Block, SingleQuoted);
    test!("yes", Block, SingleQuoted);
    test!("Off", Block, SingleQuoted);
    test!("10", Block, SingleQuoted);
    test!("1e3", Block, SingleQuoted);
    test!("0o17", Block, SingleQuoted);
    test!("0b101", Block, SingleQuoted);
    test!("0B11", Flow, SingleQuoted);
    test!("+1", Block, SingleQuoted);
    test!("*alias", Block, SingleQuoted);
    test!("a: b", Block, SingleQuoted);
    test!("a, b", Flow, SingleQuoted);
    test!("[a]", Block, SingleQuoted);
    test!("x ", Block, SingleQuoted);
}

#[test]
fn double_quoted() {
    test!("a\nb", Block, DoubleQuoted);
    test!("a\tb", Flow, DoubleQuoted);
    test!("\x1b[0m", Block, DoubleQuoted);
    test!("a\u{2028}b", Block, DoubleQuoted);
    test!("a\u{2029}b", Flow, DoubleQuoted);
}

#[test]
fn escapes() {
    let mut out = String::new();
    write(&mut out, "It's", Context::Block);
    assert_eq!(out, "It's");

    let mut out = String::new();
    write(&mut out, "'It's'", Context::Block);
    assert_eq!(out, "'''It''s'''");

    let mut out = String::new();
    write(
        &mut out,
        "a \n \0 \x07 \x08 \t \x0b \x0c \r \x1b \\ \" \x7f b",
        Context::Block,
    );
    assert_eq!(
        out,
        "\"a \\n \\0 \\a \\b \\t \\v \\f \\r \\e \\\\ \\\" \\u007f b\""
    );

    let mut out = String::new();
    write(&mut out, "line\u{2028}paragraph\u{2029}", Context::Block);
    assert_eq!(out, "\"line\\Lparagraph\\P\"");
}
