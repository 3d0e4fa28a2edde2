//! Semantic highlighting and the document outline.

use std::fmt;

use log::debug;
use smol_str::SmolStr;

use crate::source::{LineIndex, Position, Span};
use crate::syntax::ast::{self, AstNode, Expr, Stmt};
use crate::syntax::red;
use crate::syntax::Kind;

/// How a highlighted token should be shown. The order matches [`LEGEND`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SemanticKind {
    Function,
    Variable,
    String,
    Number,
    Keyword,
    Type,
    Comment,
}

pub const LEGEND: [SemanticKind; 7] = [
    SemanticKind::Function,
    SemanticKind::Variable,
    SemanticKind::String,
    SemanticKind::Number,
    SemanticKind::Keyword,
    SemanticKind::Type,
    SemanticKind::Comment,
];

impl SemanticKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Variable => "variable",
            Self::String => "string",
            Self::Number => "number",
            Self::Keyword => "keyword",
            Self::Type => "type",
            Self::Comment => "comment",
        }
    }

    /// The index of this kind in [`LEGEND`].
    pub fn index(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SemanticToken {
    pub kind: SemanticKind,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SymbolKind {
    Function,
}

/// An entry of the document outline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: SmolStr,
    /// The whole declaration.
    pub range: Span,
    /// The declared name.
    pub selection_range: Span,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Symbols {
    /// Highlighted tokens in source order.
    pub tokens: Vec<SemanticToken>,
    pub outline: Vec<Symbol>,
}

/// A semantic token positioned relative to the one before it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RelativeToken {
    pub delta_line: u32,
    pub delta_start: u32,
    pub length: u32,
    pub kind: u32,
}

pub fn symbols(root: &red::Node) -> Symbols {
    let mut collector = Collector { symbols: Symbols::default() };

    if let Some(node) = ast::cast(root.clone()) {
        collector.visit(node);
    }

    let mut symbols = collector.symbols;
    symbols.tokens.sort_by_key(|token| (token.span.start, token.span.end));

    debug!(
        "collected {} semantic tokens and {} symbols",
        symbols.tokens.len(),
        symbols.outline.len()
    );

    symbols
}

impl Symbols {
    /// Encode the tokens as line and column deltas, each relative to the start
    /// of the previous token. Tokens spanning several lines are cut off at the
    /// end of their first line.
    pub fn encode(&self, lines: &LineIndex) -> Vec<RelativeToken> {
        let mut previous = lines.position(0);
        let mut result = Vec::with_capacity(self.tokens.len());

        for token in self.tokens.iter() {
            let start = lines.position(token.span.start);
            let end = lines.position(token.span.end);

            let length = if end.line == start.line {
                end.col - start.col
            } else {
                lines.offset(Position::new(start.line + 1, 0)) - token.span.start
            };

            let delta_start = if start.line == previous.line {
                start.col - previous.col
            } else {
                start.col
            };

            let (Ok(delta_line), Ok(delta_start), Ok(length)) = (
                u32::try_from(start.line - previous.line),
                u32::try_from(delta_start),
                u32::try_from(length),
            ) else {
                continue;
            };

            result.push(RelativeToken { delta_line, delta_start, length, kind: token.kind.index() });
            previous = start;
        }

        result
    }
}

struct Collector {
    symbols: Symbols,
}

impl Collector {
    fn push(&mut self, kind: SemanticKind, token: Option<red::Token>) {
        if let Some(token) = token {
            self.symbols.tokens.push(SemanticToken { kind, span: token.range() });
        }
    }

    fn visit_opt<'g>(&mut self, node: Option<impl Into<AstNode<'g>>>) {
        if let Some(node) = node {
            self.visit(node.into());
        }
    }

    fn visit_all<'g>(&mut self, nodes: impl IntoIterator<Item = impl Into<AstNode<'g>>>) {
        for node in nodes {
            self.visit(node.into());
        }
    }

    fn visit(&mut self, node: AstNode) {
        for token in node.red().child_tokens() {
            if token.kind() == Kind::Comment {
                self.push(SemanticKind::Comment, Some(token));
            }
        }

        match node {
            AstNode::Stmt(stmt) => self.stmt(stmt),
            AstNode::Expr(expr) => self.expr(expr),
        }
    }

    fn stmt(&mut self, stmt: Stmt) {
        match stmt {
            Stmt::Root(root) => self.visit_all(root.stmts()),
            Stmt::ArgList(args) => self.visit_all(args.args()),
            Stmt::Arg(arg) => self.visit_opt(arg.expr()),
            Stmt::ParamList(params) => self.visit_all(params.params()),
            Stmt::Param(param) => self.visit_opt(param.decl()),
            Stmt::TypeAnnotation(typing) => self.push(SemanticKind::Type, typing.name()),

            Stmt::ArrayDecl(decl) => {
                self.visit_opt(decl.typing());
                self.visit_opt(decl.name());
                self.visit_opt(decl.count());
                self.visit_opt(decl.args());
            }

            Stmt::Block(block) => self.visit_all(block.stmts()),
            Stmt::Break(stmt) => self.push(SemanticKind::Keyword, stmt.keyword()),
            Stmt::Continue(stmt) => self.push(SemanticKind::Keyword, stmt.keyword()),
            Stmt::Expr(stmt) => self.visit_opt(stmt.expr()),

            Stmt::For(stmt) => {
                self.push(SemanticKind::Keyword, stmt.keyword());
                self.visit_opt(stmt.initializer());
                self.visit_opt(stmt.condition());
                self.visit_opt(stmt.increment());
                self.visit_opt(stmt.body());
            }

            Stmt::ForIn(stmt) => {
                self.push(SemanticKind::Keyword, stmt.for_keyword());
                self.push(SemanticKind::Keyword, stmt.in_keyword());
                self.push(SemanticKind::Keyword, stmt.do_keyword());
                self.visit_opt(stmt.item());
                self.visit_opt(stmt.parent());
                self.visit_opt(stmt.step());
                self.visit_opt(stmt.body());
            }

            Stmt::FunctionDecl(decl) => {
                if let Some(name) = decl.name().and_then(|name| name.name()) {
                    self.symbols.outline.push(Symbol {
                        kind: SymbolKind::Function,
                        name: name.text().into(),
                        range: decl.red().range(),
                        selection_range: name.range(),
                    });

                    self.push(SemanticKind::Function, Some(name));
                }

                self.visit_opt(decl.typing());
                self.visit_opt(decl.params());
                self.visit_opt(decl.body());
            }

            Stmt::If(stmt) => {
                self.push(SemanticKind::Keyword, stmt.if_keyword());
                self.push(SemanticKind::Keyword, stmt.else_keyword());
                self.visit_opt(stmt.condition());
                self.visit_opt(stmt.then_branch());
                self.visit_opt(stmt.else_branch());
            }

            Stmt::Include(stmt) => self.push(SemanticKind::Keyword, stmt.keyword()),
            Stmt::Pragma(stmt) => self.push(SemanticKind::Keyword, stmt.keyword()),

            Stmt::Return(stmt) => {
                self.push(SemanticKind::Keyword, stmt.keyword());
                self.visit_opt(stmt.expr());
            }

            Stmt::VariableDecl(decl) => {
                self.visit_opt(decl.typing());
                self.visit_opt(decl.name());
                self.visit_opt(decl.value());
                self.visit_all(decl.names().unwrap_or_default());
            }

            Stmt::While(stmt) => {
                self.push(SemanticKind::Keyword, stmt.keyword());
                self.visit_opt(stmt.condition());
                self.visit_opt(stmt.body());
            }
        }
    }

    fn expr(&mut self, expr: Expr) {
        match expr {
            Expr::Arrow(expr) => {
                self.visit_opt(expr.lhs());
                self.visit_opt(expr.rhs());
            }

            Expr::Assignment(expr) => {
                self.visit_opt(expr.target());
                self.visit_opt(expr.value());
            }

            Expr::Binary(expr) => {
                self.visit_opt(expr.lhs());
                self.visit_opt(expr.rhs());
            }

            Expr::Call(expr) => {
                self.push(SemanticKind::Function, expr.name().and_then(|name| name.name()));
                self.visit_opt(expr.args());
            }

            Expr::Cast(expr) => {
                self.visit_opt(expr.typing());
                self.visit_opt(expr.expr());
            }

            Expr::Compare(expr) => {
                self.visit_opt(expr.lhs());
                self.visit_opt(expr.rhs());
            }

            Expr::Get(expr) => {
                self.visit_opt(expr.object());
                self.visit_opt(expr.property());
            }

            Expr::Grouping(expr) => self.visit_opt(expr.expr()),

            Expr::Index(expr) => {
                self.visit_opt(expr.name());
                self.visit_opt(expr.index());
                self.visit_opt(expr.end());
            }

            Expr::Literal(expr) => {
                let value = expr.value();
                match value.as_ref().map(red::Token::kind) {
                    Some(Kind::String) => self.push(SemanticKind::String, value),
                    Some(Kind::Integer | Kind::Real) => self.push(SemanticKind::Number, value),
                    _ => {}
                }
            }

            Expr::Logical(expr) => {
                self.visit_opt(expr.lhs());
                self.visit_opt(expr.rhs());
            }

            Expr::NameRef(expr) => self.push(SemanticKind::Variable, expr.name()),
            Expr::NameRefList(expr) => self.visit_all(expr.names().unwrap_or_default()),
            Expr::Postfix(expr) => self.visit_opt(expr.expr()),
            Expr::Prefix(expr) => self.visit_opt(expr.expr()),

            Expr::Range(expr) => {
                self.visit_opt(expr.start());
                self.visit_opt(expr.end());
            }

            Expr::StringConcat(expr) => {
                self.visit_opt(expr.lhs());
                self.visit_opt(expr.rhs());
            }

            Expr::Ternary(expr) => {
                self.visit_opt(expr.condition());
                self.visit_opt(expr.then_branch());
                self.visit_opt(expr.else_branch());
            }

            Expr::Write(expr) => {
                self.visit_opt(expr.lhs());
                self.visit_opt(expr.rhs());
            }
        }
    }
}
