use logos::{Lexer, Logos};

/// The raw shape of a lexeme. Keywords, statement ends and the like are
/// decided afterwards, since they depend on the text or on earlier tokens.
#[derive(Logos, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lexeme {
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Name,

    /// A `#` followed by an identifier, such as `#include`
    #[regex(r"#[A-Za-z0-9_]*")]
    Directive,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]*([eE][0-9]*)?")]
    #[regex(r"[0-9]+[eE][0-9]*")]
    Real,

    #[token("\"", |lex| string(lex, '"'))]
    #[token("'", |lex| string(lex, '\''))]
    String,

    #[regex(r"//[^\r\n]*")]
    #[token("/*", block_comment)]
    Comment,

    #[regex(r" +")]
    Spaces,

    #[regex(r"\t+")]
    Tabs,

    #[regex(r"\r\n?|\n")]
    Newline,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("?")]
    Question,
    #[token("~")]
    Tilde,
    #[token("\\")]
    Backslash,

    #[token("&")]
    Ampersand,
    #[token("&=")]
    AmpersandEqual,
    #[token("&&")]
    AmpersandAmpersand,
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("|")]
    Pipe,
    #[token("|=")]
    PipeEqual,
    #[token("||")]
    PipePipe,
    #[token("^")]
    Caret,
    #[token("^^")]
    CaretCaret,
    #[token("^=")]
    CaretEqual,
    #[token(":")]
    Colon,
    #[token(":=")]
    ColonEqual,
    #[token("::")]
    ColonColon,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token("=>")]
    EqualArrow,
    #[token("/")]
    Slash,
    #[token("/=")]
    SlashEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token(">>")]
    GreaterGreater,
    #[token(">>=")]
    GreaterGreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token("<>")]
    LessGreater,
    #[token("<<")]
    LessLess,
    #[token("<<=")]
    LessLessEqual,
    #[token("<-")]
    LessMinus,
    #[token("-")]
    Minus,
    #[token("-=")]
    MinusEqual,
    #[token("--")]
    MinusMinus,
    #[token("->")]
    MinusArrow,
    #[token("%")]
    Percent,
    #[token("%=")]
    PercentEqual,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token("+")]
    Plus,
    #[token("++")]
    PlusPlus,
    #[token("+=")]
    PlusEqual,
    #[token("*")]
    Star,
    #[token("*=")]
    StarEqual,
}

/// Consume the rest of a string literal opened by `quote`. A backslash skips
/// the character after it, and a missing closing quote extends the literal to
/// the end of the source.
fn string(lex: &mut Lexer<Lexeme>, quote: char) -> bool {
    let rest = lex.remainder();
    let mut chars = rest.char_indices();
    let mut len = rest.len();

    while let Some((index, c)) = chars.next() {
        if c == quote {
            len = index + c.len_utf8();
            break;
        }

        if c == '\\' {
            chars.next();
        }
    }

    lex.bump(len);
    true
}

/// Consume the rest of a block comment. The search for the closing `*/`
/// includes the `*` of the opening `/*`, so `/*/` is a complete comment.
fn block_comment(lex: &mut Lexer<Lexeme>) -> bool {
    let rest = lex.remainder();

    let len = if rest.starts_with('/') {
        1
    } else {
        rest.find("*/").map(|index| index + 2).unwrap_or(rest.len())
    };

    lex.bump(len);
    true
}
