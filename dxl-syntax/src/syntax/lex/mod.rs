//! The lexer splits a source text into tokens without losing a single byte:
//! whitespace, comments and line breaks all become tokens of their own.
//!
//! Line breaks are special. Since statements need no terminator, a line break
//! ends the current statement unless the token right before it expects
//! something to follow (an operator, an open parenthesis, a comma, ...) or is
//! a comment ending in `-`. Spaces and tabs are tokens too, so trailing
//! whitespace after an operator still ends the statement. Line breaks that end statements are [`Kind::End`] tokens,
//! the others are [`Kind::Eol`] trivia.

mod tokens;

#[cfg(test)]
mod tests;

use log::debug;
use smol_str::SmolStr;

use self::tokens::Lexeme;
use crate::source::{LineIndex, Position, Span};
use crate::syntax::Kind;

/// A lexed token along with its location.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    pub kind: Kind,
    pub text: SmolStr,
    pub start: usize,
    pub end: usize,
    pub start_pos: Position,
    pub end_pos: Position,
}

impl Token {
    pub fn span(&self) -> Span {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_type_specifier(&self) -> bool {
        self.kind.is_type_specifier(&self.text)
    }
}

/// Every token of a source, ending with a single [`Kind::Eof`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tokens {
    pub tokens: Vec<Token>,
    /// The offset at which every line begins.
    pub line_starts: Vec<usize>,
    len: usize,
}

impl Tokens {
    pub fn iter(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Concatenate the text of every token.
    pub fn write(&self) -> String {
        let mut result = String::with_capacity(self.len);
        for token in self.tokens.iter() {
            result.push_str(&token.text);
        }
        result
    }

    pub fn line_index(&self) -> LineIndex {
        LineIndex::new(self.line_starts.clone(), self.len)
    }
}

pub fn tokenize(source: &str) -> Tokens {
    use logos::Logos;

    let line_starts = line_starts(source);
    let lines = LineIndex::new(line_starts.clone(), source.len());

    let mut tokens = Vec::new();
    let mut ignore_end = false;

    for (result, range) in Lexeme::lexer(source).spanned() {
        let text = &source[range.clone()];
        let kind = classify(result, text, ignore_end);

        ignore_end = match kind {
            Kind::Comment => text.ends_with('-'),
            kind => kind.ignores_following_end(),
        };

        tokens.push(Token {
            kind,
            text: text.into(),
            start: range.start,
            end: range.end,
            start_pos: lines.position(range.start),
            end_pos: lines.position(range.end),
        });
    }

    let end = lines.position(source.len());
    tokens.push(Token {
        kind: Kind::Eof,
        text: SmolStr::default(),
        start: source.len(),
        end: source.len(),
        start_pos: end,
        end_pos: end,
    });

    debug!("lexed {} tokens over {} lines", tokens.len(), line_starts.len());

    Tokens { tokens, line_starts, len: source.len() }
}

fn classify(result: Result<Lexeme, ()>, text: &str, ignore_end: bool) -> Kind {
    let Ok(lexeme) = result else {
        return Kind::Invalid;
    };

    match lexeme {
        Lexeme::Name | Lexeme::Directive => Kind::keyword(text).unwrap_or(Kind::Name),
        Lexeme::Integer => Kind::Integer,
        Lexeme::Real => Kind::Real,
        Lexeme::String => Kind::String,
        Lexeme::Comment => Kind::Comment,
        Lexeme::Spaces => Kind::Spaces,
        Lexeme::Tabs => Kind::Tabs,
        Lexeme::Newline if ignore_end => Kind::Eol,
        Lexeme::Newline => Kind::End,

        Lexeme::LeftParen => Kind::LeftParen,
        Lexeme::RightParen => Kind::RightParen,
        Lexeme::LeftBrace => Kind::LeftBrace,
        Lexeme::RightBrace => Kind::RightBrace,
        Lexeme::LeftBracket => Kind::LeftBracket,
        Lexeme::RightBracket => Kind::RightBracket,
        Lexeme::Semicolon => Kind::Semicolon,
        Lexeme::Comma => Kind::Comma,
        Lexeme::Question => Kind::Question,
        Lexeme::Tilde => Kind::Tilde,
        Lexeme::Backslash => Kind::Backslash,
        Lexeme::Ampersand => Kind::Ampersand,
        Lexeme::AmpersandEqual => Kind::AmpersandEqual,
        Lexeme::AmpersandAmpersand => Kind::AmpersandAmpersand,
        Lexeme::Bang => Kind::Bang,
        Lexeme::BangEqual => Kind::BangEqual,
        Lexeme::Pipe => Kind::Pipe,
        Lexeme::PipeEqual => Kind::PipeEqual,
        Lexeme::PipePipe => Kind::PipePipe,
        Lexeme::Caret => Kind::Caret,
        Lexeme::CaretCaret => Kind::CaretCaret,
        Lexeme::CaretEqual => Kind::CaretEqual,
        Lexeme::Colon => Kind::Colon,
        Lexeme::ColonEqual => Kind::ColonEqual,
        Lexeme::ColonColon => Kind::ColonColon,
        Lexeme::Equal => Kind::Equal,
        Lexeme::EqualEqual => Kind::EqualEqual,
        Lexeme::EqualArrow => Kind::EqualArrow,
        Lexeme::Slash => Kind::Slash,
        Lexeme::SlashEqual => Kind::SlashEqual,
        Lexeme::Greater => Kind::Greater,
        Lexeme::GreaterEqual => Kind::GreaterEqual,
        Lexeme::GreaterGreater => Kind::GreaterGreater,
        Lexeme::GreaterGreaterEqual => Kind::GreaterGreaterEqual,
        Lexeme::Less => Kind::Less,
        Lexeme::LessEqual => Kind::LessEqual,
        Lexeme::LessGreater => Kind::LessGreater,
        Lexeme::LessLess => Kind::LessLess,
        Lexeme::LessLessEqual => Kind::LessLessEqual,
        Lexeme::LessMinus => Kind::LessMinus,
        Lexeme::Minus => Kind::Minus,
        Lexeme::MinusEqual => Kind::MinusEqual,
        Lexeme::MinusMinus => Kind::MinusMinus,
        Lexeme::MinusArrow => Kind::MinusArrow,
        Lexeme::Percent => Kind::Percent,
        Lexeme::PercentEqual => Kind::PercentEqual,
        Lexeme::Dot => Kind::Dot,
        Lexeme::DotDot => Kind::DotDot,
        Lexeme::Plus => Kind::Plus,
        Lexeme::PlusPlus => Kind::PlusPlus,
        Lexeme::PlusEqual => Kind::PlusEqual,
        Lexeme::Star => Kind::Star,
        Lexeme::StarEqual => Kind::StarEqual,
    }
}

/// Find the offset of every line start. A line break is `\r\n`, `\n` or a
/// lone `\r`, wherever it occurs (including inside strings and comments).
fn line_starts(source: &str) -> Vec<usize> {
    let bytes = source.as_bytes();
    let mut starts = vec![0];

    for (index, byte) in bytes.iter().enumerate() {
        let is_break = match byte {
            b'\n' => true,
            b'\r' => bytes.get(index + 1) != Some(&b'\n'),
            _ => false,
        };

        if is_break {
            starts.push(index + 1);
        }
    }

    starts
}
