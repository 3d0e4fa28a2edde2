//! Declarations and statements.

use super::expressions::expression;
use super::parser::{MarkClosed, MarkOpened, Parser};
use crate::messages::Message;
use crate::syntax::Kind;

/// ```abnf
/// root = *(declaration / stmt-end) EOF
/// ```
pub(super) fn root(p: &mut Parser) {
    let m = p.open();

    while !p.eof() {
        if p.at_stmt_end() {
            p.bump();
            continue;
        }

        declaration(p);
    }

    p.skip();
    p.close(m, Kind::Root);
}

/// ```abnf
/// declaration = [qualifier] type ["&"] name (function / variable)
///             / statement
/// ```
fn declaration(p: &mut Parser) {
    if p.at_any(&[Kind::KwConst, Kind::KwStatic]) {
        let qualifier = p.peek();
        p.error(Message::ignored_qualifier(&qualifier.text));
        p.bump_as(Kind::WarningNode);
    }

    if p.at_type_specifier() {
        let m = p.open();
        p.bump_as(Kind::TypeRef);
        p.consume(Kind::Ampersand);

        if p.at(Kind::Name) {
            let name = p.bump_as(Kind::NameRef);

            if p.at(Kind::LeftParen) {
                function_declaration(p, m);
            } else {
                variable_declaration(p, m, Some(name));
            }
        } else {
            p.expected(Kind::Name);
            p.synchronize(m);
        }

        return;
    }

    statement(p);

    while p.at_stmt_end() {
        p.bump();
    }
}

fn parameter(p: &mut Parser) {
    let m = p.open();

    if p.at_type_specifier() {
        p.bump_as(Kind::TypeRef);
        p.consume(Kind::Ampersand);

        if p.at(Kind::Name) {
            p.bump_as(Kind::NameRef);

            if p.at(Kind::LeftParen) {
                function_declaration(p, m);
            } else {
                variable_declaration(p, m, None);
            }
        } else {
            p.close(m, Kind::StmtFuncDecl);
        }
    } else {
        p.consume(Kind::Ampersand);

        if p.at(Kind::Name) {
            p.bump_as(Kind::NameRef);
            variable_declaration(p, m, None);
        } else {
            p.expected(Kind::Name);
            p.synchronize(m);
        }
    }
}

fn function_declaration(p: &mut Parser, m: MarkOpened) {
    if p.expect(Kind::LeftParen) && !p.at(Kind::RightParen) {
        let params = p.open();

        loop {
            let param = p.open();

            if !p.at_any(&[Kind::Comma, Kind::RightParen]) {
                parameter(p);
            }

            p.close(param, Kind::Param);

            if !p.consume(Kind::Comma) {
                break;
            }
        }

        p.close(params, Kind::ParamList);
    }

    p.expect(Kind::RightParen);

    if p.at(Kind::LeftBrace) {
        block(p);
    }

    p.close(m, Kind::StmtFuncDecl);
}

/// `name` is the declared name, if more names may follow it.
fn variable_declaration(p: &mut Parser, m: MarkOpened, name: Option<MarkClosed>) {
    if p.consume(Kind::Equal) {
        expression(p);
    } else if p.consume(Kind::LeftBracket) {
        if !p.consume(Kind::RightBracket) {
            expression(p);
            p.expect(Kind::RightBracket);
        }

        if p.consume(Kind::Equal) && p.expect(Kind::LeftBrace) {
            expression_list(p, Kind::RightBrace);
            p.expect(Kind::RightBrace);
        }

        p.close(m, Kind::StmtArrayDecl);
        return;
    }

    if let Some(name) = name.filter(|_| p.at(Kind::Comma)) {
        let list = p.open_before(name);

        while p.consume(Kind::Comma) {
            if p.at(Kind::Name) {
                p.bump_as(Kind::NameRef);
            }

            if p.consume(Kind::Equal) {
                expression(p);
            }
        }

        p.close(list, Kind::NameRefList);
    }

    p.close(m, Kind::StmtVarDecl);
}

fn expression_list(p: &mut Parser, end: Kind) -> MarkClosed {
    let m = p.open();

    while !p.at(end) && !p.eof() {
        if p.at_type_specifier() {
            p.bump();
        } else {
            p.consume(Kind::Ampersand);
            expression(p);
        }

        if !p.consume(Kind::Comma) {
            break;
        }
    }

    p.close(m, Kind::ArgList)
}

fn statement(p: &mut Parser) {
    match p.peek_kind() {
        Kind::LeftBrace => block(p),
        Kind::KwIf => if_statement(p),
        Kind::KwWhile => while_statement(p),
        Kind::KwFor => for_statement(p),
        Kind::KwReturn | Kind::KwBreak | Kind::KwContinue => jump(p),
        Kind::KwPragma => pragma(p),
        Kind::KwInclude => include(p),
        _ => expression(p),
    }

    while p.at_stmt_end() {
        p.bump();
    }
}

fn block(p: &mut Parser) {
    let m = p.open();
    p.expect(Kind::LeftBrace);

    while !p.at(Kind::RightBrace) && !p.eof() {
        if p.at_stmt_end() {
            p.bump();
            continue;
        }

        declaration(p);
    }

    p.expect(Kind::RightBrace);
    p.close(m, Kind::StmtBlock);
}

/// ```abnf
/// pragma = "pragma" name "," (integer / string)
/// ```
fn pragma(p: &mut Parser) {
    let m = p.open();
    p.expect(Kind::KwPragma);

    if p.expect(Kind::Name) && p.expect(Kind::Comma) && p.at_any(&[Kind::Integer, Kind::String]) {
        p.bump();
    }

    p.close(m, Kind::StmtPragma);
}

/// ```abnf
/// include = "#include" ("<" *(name / "\" / "/" / ".") ">" / string)
/// ```
fn include(p: &mut Parser) {
    let m = p.open();
    p.expect(Kind::KwInclude);

    if p.consume(Kind::Less) {
        while !p.at(Kind::Greater) && !p.eof() {
            if !p.at_any(&[Kind::Name, Kind::Backslash, Kind::Slash, Kind::Dot]) {
                break;
            }

            p.bump();
        }

        p.expect(Kind::Greater);
    } else {
        p.expect(Kind::String);
    }

    p.close(m, Kind::StmtInclude);
}

fn jump(p: &mut Parser) {
    let m = p.open();
    let keyword = p.peek().kind;
    p.bump();

    let kind = match keyword {
        Kind::KwBreak => Kind::StmtBreak,
        Kind::KwContinue => Kind::StmtContinue,
        _ => Kind::StmtReturn,
    };

    if keyword == Kind::KwReturn && !p.at_stmt_end() && !p.at(Kind::RightBrace) && !p.eof() {
        expression(p);
    }

    p.close(m, kind);
}

/// ```abnf
/// if = "if" "(" expr ")" *END (block ["else" (if / statement)] / "then" expr / statement ["else" statement])
///    / "if" expr ["then" expr]
/// ```
fn if_statement(p: &mut Parser) {
    let m = p.open();
    p.expect(Kind::KwIf);

    if p.consume(Kind::LeftParen) {
        expression(p);

        if p.expect(Kind::RightParen) {
            while p.consume(Kind::End) {}

            if p.at(Kind::LeftBrace) {
                statement(p);

                if p.consume(Kind::KwElse) {
                    match p.peek_kind() {
                        Kind::KwIf => if_statement(p),
                        Kind::LeftBrace => block(p),
                        _ => statement(p),
                    }
                }
            } else if p.consume(Kind::KwThen) {
                expression(p);
            } else {
                statement(p);

                if p.consume(Kind::KwElse) {
                    statement(p);
                }
            }
        }
    } else {
        expression(p);

        if p.consume(Kind::KwThen) {
            expression(p);
        }
    }

    p.close(m, Kind::StmtIf);
}

fn while_statement(p: &mut Parser) {
    let m = p.open();
    p.expect(Kind::KwWhile);

    if p.expect(Kind::LeftParen) {
        expression(p);

        if p.expect(Kind::RightParen) {
            body(p);
        }
    }

    p.close(m, Kind::StmtWhile);
}

/// ```abnf
/// for    = "for" "(" expr [";" expr [";" expr]] ")" statement
/// for-in = "for" [name "in" expr] ["by" expr] "do" declaration
/// ```
fn for_statement(p: &mut Parser) {
    let m = p.open();
    p.expect(Kind::KwFor);

    if p.consume(Kind::LeftParen) {
        expression(p);

        if p.consume(Kind::Semicolon) {
            expression(p);

            if p.consume(Kind::Semicolon) {
                expression(p);
            }
        }

        if p.expect(Kind::RightParen) {
            body(p);
        }

        p.close(m, Kind::StmtFor);
        return;
    }

    if p.at(Kind::Name) {
        expression(p);

        if p.expect(Kind::KwIn) {
            expression(p);
        }
    }

    if p.consume(Kind::KwBy) {
        expression(p);
    }

    p.expect(Kind::KwDo);
    declaration(p);

    p.close(m, Kind::StmtForIn);
}

/// The body of a loop.
fn body(p: &mut Parser) {
    if p.at(Kind::LeftBrace) {
        block(p);
    } else {
        statement(p);
    }
}
