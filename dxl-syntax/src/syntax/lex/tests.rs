//! Tokens must cover the source exactly, one after another, and line breaks
//! must end statements only where the previous token allows it.

use proptest::{prop_assert, prop_assert_eq, proptest};

use super::{tokenize, Token};
use crate::source::Position;
use crate::syntax::Kind;

fn kinds(source: &str) -> Vec<Kind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

fn first(source: &str) -> Token {
    tokenize(source).tokens.remove(0)
}

proptest! {
    #[test]
    fn renders_the_same(s in r".*") {
        prop_assert_eq!(s.clone(), tokenize(&s).write());
    }

    #[test]
    fn tokens_are_contiguous(s in r"(.|\n)*") {
        let tokens = tokenize(&s);
        let mut offset = 0;

        for token in tokens.iter() {
            prop_assert_eq!(offset, token.start);
            prop_assert_eq!(token.text.len(), token.len());
            offset = token.end;
        }

        prop_assert_eq!(s.len(), offset);
        prop_assert!(tokens.tokens.last().is_some_and(|token| token.kind == Kind::Eof));
    }
}

#[test]
fn single_tokens() {
    let cases = [
        ("", Kind::Eof, 0),
        ("  ", Kind::Spaces, 2),
        ("\t\t", Kind::Tabs, 2),
        ("(", Kind::LeftParen, 1),
        ("}", Kind::RightBrace, 1),
        ("\\", Kind::Backslash, 1),
        ("&&", Kind::AmpersandAmpersand, 2),
        ("&=", Kind::AmpersandEqual, 2),
        ("!=", Kind::BangEqual, 2),
        ("||", Kind::PipePipe, 2),
        ("^^", Kind::CaretCaret, 2),
        ("::", Kind::ColonColon, 2),
        (":=", Kind::ColonEqual, 2),
        ("=>", Kind::EqualArrow, 2),
        (">>=", Kind::GreaterGreaterEqual, 3),
        ("<<=", Kind::LessLessEqual, 3),
        ("<>", Kind::LessGreater, 2),
        ("<-", Kind::LessMinus, 2),
        ("->", Kind::MinusArrow, 2),
        ("--", Kind::MinusMinus, 2),
        ("%=", Kind::PercentEqual, 2),
        ("..", Kind::DotDot, 2),
        ("++", Kind::PlusPlus, 2),
        ("*=", Kind::StarEqual, 2),
        ("/", Kind::Slash, 1),
        ("/=", Kind::SlashEqual, 2),
        ("//", Kind::Comment, 2),
        ("/*", Kind::Comment, 2),
        ("\r\n", Kind::End, 2),
        ("\n", Kind::End, 1),
        ("\r", Kind::End, 1),
        ("'a'", Kind::String, 3),
        ("\"hello\"", Kind::String, 7),
        ("0123456789", Kind::Integer, 10),
        ("12.34", Kind::Real, 5),
        ("1e10", Kind::Real, 4),
        ("1.2E30", Kind::Real, 6),
        ("1.", Kind::Real, 2),
        ("and", Kind::KwAnd, 3),
        ("continue", Kind::KwContinue, 8),
        ("sizeof", Kind::KwSizeof, 6),
        ("#include", Kind::KwInclude, 8),
        ("#define", Kind::Name, 7),
        ("print", Kind::Name, 5),
        ("snake_case2", Kind::Name, 11),
        ("// comment text", Kind::Comment, 15),
        ("@", Kind::Invalid, 1),
        ("\0", Kind::Invalid, 1),
        ("é", Kind::Invalid, 2),
    ];

    for (source, kind, len) in cases {
        let token = first(source);
        assert_eq!((kind, 0, len), (token.kind, token.start, token.end), "lexing {source:?}");
    }
}

#[test]
fn newlines_are_separate_tokens() {
    assert_eq!(vec![Kind::End, Kind::End, Kind::Eof], kinds("\r\n\r\n"));
    assert_eq!(vec![Kind::End, Kind::End, Kind::Eof], kinds("\n\n"));
}

#[test]
fn multiline_comment() {
    let source = "/* text on one line \nmore text in next line */";
    let token = first(source);
    assert_eq!(Kind::Comment, token.kind);
    assert_eq!(source.len(), token.end);
    assert_eq!(Position::new(1, 25), token.end_pos);
}

#[test]
fn comment_closed_by_its_own_star() {
    assert_eq!(vec![Kind::Comment, Kind::Name, Kind::Eof], kinds("/*/a"));
}

#[test]
fn unterminated_comment() {
    assert_eq!(vec![Kind::Comment, Kind::Eof], kinds("/* a\nb"));
}

#[test]
fn multiline_string() {
    let token = first("\"hello\nworld\"");
    assert_eq!(Kind::String, token.kind);
    assert_eq!(13, token.end);
    assert_eq!(Position::new(1, 6), token.end_pos);
}

#[test]
fn unterminated_string() {
    let tokens = tokenize("\"abc");
    assert_eq!(2, tokens.len());
    assert_eq!(Kind::String, tokens.tokens[0].kind);
    assert_eq!("\"abc", tokens.tokens[0].text);
}

#[test]
fn escaped_quote() {
    let token = first(r#""a\"b" c"#);
    assert_eq!(Kind::String, token.kind);
    assert_eq!(r#""a\"b""#, token.text);
}

#[test]
fn expression() {
    let expected = vec![
        Kind::Integer,
        Kind::Spaces,
        Kind::Plus,
        Kind::Spaces,
        Kind::Integer,
        Kind::Eof,
    ];
    assert_eq!(expected, kinds("1 + 2"));
}

#[test]
fn operator_continues_statement() {
    let expected = vec![
        Kind::Integer,
        Kind::Spaces,
        Kind::Plus,
        Kind::Eol,
        Kind::Integer,
        Kind::Eof,
    ];
    assert_eq!(expected, kinds("1 +\n2"));
}

#[test]
fn trailing_whitespace_ends_statement() {
    let expected = vec![Kind::Integer, Kind::Plus, Kind::Spaces, Kind::End, Kind::Integer, Kind::Eof];
    assert_eq!(expected, kinds("1+ \n2"));

    let expected = vec![
        Kind::Name,
        Kind::Spaces,
        Kind::Plus,
        Kind::Spaces,
        Kind::End,
        Kind::Name,
        Kind::Eof,
    ];
    assert_eq!(expected, kinds("a +  \nb"));

    let expected = vec![Kind::Name, Kind::Comma, Kind::Tabs, Kind::End, Kind::Name, Kind::Eof];
    assert_eq!(expected, kinds("a,\t\nb"));
}

#[test]
fn newline_ends_statement() {
    let expected = vec![Kind::Name, Kind::End, Kind::Name, Kind::Eof];
    assert_eq!(expected, kinds("a\nb"));
}

#[test]
fn only_first_newline_is_continued() {
    let expected = vec![Kind::Name, Kind::Comma, Kind::Eol, Kind::End, Kind::Name, Kind::Eof];
    assert_eq!(expected, kinds("a,\n\nb"));
}

#[test]
fn continuation_comment() {
    let expected = vec![Kind::Name, Kind::Spaces, Kind::Comment, Kind::Eol, Kind::Name, Kind::Eof];
    assert_eq!(expected, kinds("a //-\nb"));

    let expected = vec![Kind::Name, Kind::Spaces, Kind::Comment, Kind::End, Kind::Name, Kind::Eof];
    assert_eq!(expected, kinds("a // x\nb"));
}

#[test]
fn line_starts() {
    let tokens = tokenize("a\r\nb\rc\nd");
    assert_eq!(vec![0, 3, 5, 7], tokens.line_starts);

    let d = tokens.tokens.iter().find(|token| token.text == "d");
    assert_eq!(Some(Position::new(3, 0)), d.map(|token| token.start_pos));
}
