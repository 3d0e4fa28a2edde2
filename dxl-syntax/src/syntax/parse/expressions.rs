//! Expressions are parsed by precedence climbing. Besides the usual operators,
//! two expressions next to each other form a call (`print "text"`) or a string
//! concatenation (`"a" name`), depending on what the first one is.

use super::parser::{MarkClosed, Parser};
use crate::messages::Message;
use crate::syntax::Kind;

/// Parse an expression statement.
pub(super) fn expression(p: &mut Parser) {
    let m = p.open();
    expr_bp(p, 0);
    p.close(m, Kind::StmtExpr);
}

fn expr_bp(p: &mut Parser, min_bp: u8) {
    let mut lhs = match p.peek_kind() {
        Kind::KwTrue | Kind::KwFalse | Kind::String | Kind::Real | Kind::Integer => {
            p.bump_as(Kind::ExprLiteral)
        }

        Kind::KwNull => p.bump_as(Kind::Null),
        Kind::Name | Kind::KwObject | Kind::KwModule => p.bump_as(Kind::NameRef),
        Kind::LeftParen => grouping(p),

        Kind::Semicolon => {
            p.bump();
            return;
        }

        kind => match prefix_binding_power(kind) {
            Some(bp) => {
                let m = p.open();
                p.bump();
                expr_bp(p, bp);
                p.close(m, Kind::ExprPrefix)
            }

            None => {
                if !p.at_stmt_end() && !p.eof() {
                    p.error(Message::expected_expression(kind));
                    p.bump_as(Kind::ErrorNode);
                }

                return;
            }
        },
    };

    loop {
        let op = p.peek_kind();

        if matches!(lhs.kind(), Kind::NameRef | Kind::Null | Kind::ExprGrouping)
            && matches!(
                op,
                Kind::Integer
                    | Kind::Real
                    | Kind::Name
                    | Kind::KwModule
                    | Kind::KwNull
                    | Kind::KwTrue
                    | Kind::KwFalse
            )
        {
            lhs = call(p, lhs);
            continue;
        }

        if let Some(bp) = postfix_binding_power(op) {
            lhs = match op {
                Kind::LeftBracket => index(p, lhs),
                Kind::Dot => infix(p, lhs, bp, Kind::ExprGet),
                Kind::MinusArrow | Kind::LessMinus => infix(p, lhs, bp, Kind::ExprArrow),

                Kind::PlusPlus | Kind::MinusMinus => {
                    let m = p.open_before(lhs);
                    p.bump();
                    p.close(m, Kind::ExprPostfix)
                }

                Kind::String => string_concat(p, lhs, bp),
                _ if matches!(lhs.kind(), Kind::NameRef | Kind::Null) => call(p, lhs),
                _ => grouping(p),
            };

            continue;
        }

        let Some((lbp, rbp)) = infix_binding_power(op) else {
            return;
        };

        if lbp < min_bp {
            return;
        }

        lhs = match op {
            Kind::Plus | Kind::Minus | Kind::Star | Kind::Slash | Kind::Percent | Kind::Ampersand => {
                infix(p, lhs, rbp, Kind::ExprBinary)
            }

            Kind::EqualEqual | Kind::BangEqual => infix(p, lhs, rbp, Kind::ExprEquality),

            Kind::Pipe
            | Kind::Caret
            | Kind::AmpersandAmpersand
            | Kind::PipePipe
            | Kind::KwAnd
            | Kind::KwOr => infix(p, lhs, rbp, Kind::ExprLogical),

            Kind::Less | Kind::LessEqual | Kind::Greater | Kind::GreaterEqual => {
                infix(p, lhs, rbp, Kind::ExprCompare)
            }

            Kind::Equal
            | Kind::StarEqual
            | Kind::SlashEqual
            | Kind::PercentEqual
            | Kind::PlusEqual
            | Kind::MinusEqual
            | Kind::LessLessEqual
            | Kind::GreaterGreaterEqual
            | Kind::AmpersandEqual
            | Kind::CaretEqual
            | Kind::PipeEqual => infix(p, lhs, rbp, Kind::ExprAssignment),

            Kind::LessLess | Kind::GreaterGreater => infix(p, lhs, rbp, Kind::ExprWrite),
            Kind::Question => ternary(p, lhs, rbp),
            Kind::Colon => range(p, lhs, rbp),

            _ => {
                if matches!(
                    lhs.kind(),
                    Kind::ExprStringConcat | Kind::ExprGrouping | Kind::ExprLiteral | Kind::ExprCall
                ) && p.at_any(&[Kind::Name, Kind::Integer, Kind::Real])
                {
                    string_concat(p, lhs, rbp);
                }

                return;
            }
        };
    }
}

/// ```abnf
/// grouping = "(" [type] expr ")"
/// ```
fn grouping(p: &mut Parser) -> MarkClosed {
    let m = p.open();
    p.expect(Kind::LeftParen);

    let mut kind = Kind::ExprGrouping;
    if p.at_type_specifier() {
        p.bump_as(Kind::TypeRef);
        kind = Kind::ExprCast;
    }

    expr_bp(p, 0);
    p.expect(Kind::RightParen);

    p.close(m, kind)
}

/// Turn `lhs` into the callee of a call, or into the operand of a cast if a
/// type follows it.
fn call(p: &mut Parser, lhs: MarkClosed) -> MarkClosed {
    let m = p.open_before(lhs);

    if p.at_type_specifier() {
        p.bump_as(Kind::TypeRef);
        return p.close(m, Kind::ExprCast);
    }

    let args = p.open();

    if p.consume(Kind::LeftParen) {
        while !p.at(Kind::RightParen) && !p.eof() {
            let start = p.position();

            let arg = p.open();
            expression(p);

            if !p.at(Kind::RightParen) {
                p.expect(Kind::Comma);
            }

            p.close(arg, Kind::Arg);

            if !p.progressed_since(start) {
                break;
            }
        }

        p.expect(Kind::RightParen);
    } else {
        let arg = p.open();
        expression(p);
        p.close(arg, Kind::Arg);
    }

    p.close(args, Kind::ArgList);
    p.close(m, Kind::ExprCall)
}

/// ```abnf
/// index = expr "[" expr [":" [expr]] "]"
/// ```
fn index(p: &mut Parser, lhs: MarkClosed) -> MarkClosed {
    let m = p.open_before(lhs);
    p.expect(Kind::LeftBracket);
    expr_bp(p, 0);

    if p.consume(Kind::Colon) && !p.at(Kind::RightBracket) {
        expr_bp(p, 0);
    }

    p.expect(Kind::RightBracket);
    p.close(m, Kind::ExprIndex)
}

/// An operator followed by an operand.
fn infix(p: &mut Parser, lhs: MarkClosed, bp: u8, kind: Kind) -> MarkClosed {
    let m = p.open_before(lhs);
    p.bump();
    expr_bp(p, bp);
    p.close(m, kind)
}

fn string_concat(p: &mut Parser, lhs: MarkClosed, bp: u8) -> MarkClosed {
    let m = p.open_before(lhs);
    expr_bp(p, bp);
    p.close(m, Kind::ExprStringConcat)
}

fn ternary(p: &mut Parser, lhs: MarkClosed, bp: u8) -> MarkClosed {
    let m = p.open_before(lhs);
    p.bump();
    expr_bp(p, bp);

    if p.expect(Kind::Colon) {
        expr_bp(p, bp);
    }

    p.close(m, Kind::ExprTernary)
}

/// The upper bound of a range may be left out inside an index.
fn range(p: &mut Parser, lhs: MarkClosed, bp: u8) -> MarkClosed {
    let m = p.open_before(lhs);
    p.bump();

    if !p.at(Kind::RightBracket) {
        expr_bp(p, bp);
    }

    p.close(m, Kind::ExprRange)
}

fn prefix_binding_power(kind: Kind) -> Option<u8> {
    match kind {
        Kind::PlusPlus
        | Kind::MinusMinus
        | Kind::Ampersand
        | Kind::Plus
        | Kind::Minus
        | Kind::Tilde
        | Kind::Bang
        | Kind::KwSizeof
        | Kind::KwNull => Some(15),
        _ => None,
    }
}

fn postfix_binding_power(kind: Kind) -> Option<u8> {
    match kind {
        Kind::LeftBracket
        | Kind::LeftParen
        | Kind::Dot
        | Kind::MinusArrow
        | Kind::LessMinus
        | Kind::PlusPlus
        | Kind::MinusMinus => Some(16),
        Kind::String => Some(15),
        _ => None,
    }
}

fn infix_binding_power(kind: Kind) -> Option<(u8, u8)> {
    Some(match kind {
        Kind::Star | Kind::Slash | Kind::Percent => (14, 13),
        Kind::Plus | Kind::Minus => (13, 12),
        Kind::Less | Kind::LessEqual | Kind::Greater | Kind::GreaterEqual => (11, 10),
        Kind::EqualEqual | Kind::BangEqual => (10, 9),
        Kind::Ampersand => (9, 8),
        Kind::Caret => (8, 7),
        Kind::Pipe => (7, 6),
        Kind::AmpersandAmpersand | Kind::KwAnd => (6, 5),
        Kind::PipePipe | Kind::KwOr => (5, 4),
        Kind::Question => (4, 3),

        Kind::Equal
        | Kind::StarEqual
        | Kind::SlashEqual
        | Kind::PercentEqual
        | Kind::PlusEqual
        | Kind::MinusEqual
        | Kind::LessLessEqual
        | Kind::GreaterGreaterEqual
        | Kind::AmpersandEqual
        | Kind::CaretEqual
        | Kind::PipeEqual
        | Kind::LessLess
        | Kind::GreaterGreater => (3, 2),

        Kind::Name | Kind::Colon => (2, 1),
        _ => return None,
    })
}
