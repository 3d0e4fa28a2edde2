//! Typed views of red nodes. A view is only a red node whose kind is known,
//! and every accessor finds what it asks for by scanning the node's children
//! anew.

/// Define views of red nodes which belong to one of the sum types below.
macro_rules! ast_nodes {
    ($($sum:ident :: $variant:ident => $name:ident,)*) => {
        $(
            #[derive(Clone, Debug, Eq, PartialEq)]
            pub struct $name<'g>(pub(super) $crate::syntax::red::Node<'g>);

            impl<'g> $name<'g> {
                pub fn red(&self) -> &$crate::syntax::red::Node<'g> {
                    &self.0
                }
            }

            impl<'g> From<$name<'g>> for $crate::syntax::ast::$sum<'g> {
                fn from(node: $name<'g>) -> Self {
                    $crate::syntax::ast::$sum::$variant(node)
                }
            }

            impl<'g> From<$name<'g>> for $crate::syntax::ast::AstNode<'g> {
                fn from(node: $name<'g>) -> Self {
                    $crate::syntax::ast::AstNode::$sum(node.into())
                }
            }
        )*
    };
}

mod debug;
mod exprs;
mod stmts;

pub use self::debug::dump;
pub use self::exprs::*;
pub use self::stmts::*;

use super::red;
use super::Kind;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AstNode<'g> {
    Stmt(Stmt<'g>),
    Expr(Expr<'g>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Stmt<'g> {
    Root(Root<'g>),
    ArgList(ArgList<'g>),
    Arg(Arg<'g>),
    ParamList(ParamList<'g>),
    Param(Param<'g>),
    TypeAnnotation(TypeAnnotation<'g>),
    ArrayDecl(StmtArrayDecl<'g>),
    Block(StmtBlock<'g>),
    Break(StmtBreak<'g>),
    Continue(StmtContinue<'g>),
    Expr(StmtExpr<'g>),
    For(StmtFor<'g>),
    ForIn(StmtForIn<'g>),
    FunctionDecl(StmtFunctionDecl<'g>),
    If(StmtIf<'g>),
    Include(StmtInclude<'g>),
    Pragma(StmtPragma<'g>),
    Return(StmtReturn<'g>),
    VariableDecl(StmtVariableDecl<'g>),
    While(StmtWhile<'g>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr<'g> {
    Arrow(ExprArrow<'g>),
    Assignment(ExprAssignment<'g>),
    Binary(ExprBinary<'g>),
    Call(ExprCall<'g>),
    Cast(ExprCast<'g>),
    Compare(ExprCompare<'g>),
    Get(ExprGet<'g>),
    Grouping(ExprGrouping<'g>),
    Index(ExprIndex<'g>),
    Literal(ExprLiteral<'g>),
    Logical(ExprLogical<'g>),
    NameRef(ExprNameRef<'g>),
    NameRefList(ExprNameRefList<'g>),
    Postfix(ExprPostfix<'g>),
    Prefix(ExprPrefix<'g>),
    Range(ExprRange<'g>),
    StringConcat(ExprStringConcat<'g>),
    Ternary(ExprTernary<'g>),
    Write(ExprWrite<'g>),
}

pub fn cast<'g>(node: red::Node<'g>) -> Option<AstNode<'g>> {
    match cast_stmt(node.clone()) {
        Some(stmt) => Some(AstNode::Stmt(stmt)),
        None => cast_expr(node).map(AstNode::Expr),
    }
}

pub fn cast_stmt<'g>(node: red::Node<'g>) -> Option<Stmt<'g>> {
    Some(match node.kind() {
        Kind::Root => Stmt::Root(Root(node)),
        Kind::ArgList => Stmt::ArgList(ArgList(node)),
        Kind::Arg => Stmt::Arg(Arg(node)),
        Kind::ParamList => Stmt::ParamList(ParamList(node)),
        Kind::Param => Stmt::Param(Param(node)),
        Kind::TypeRef => Stmt::TypeAnnotation(TypeAnnotation(node)),
        Kind::StmtArrayDecl => Stmt::ArrayDecl(StmtArrayDecl(node)),
        Kind::StmtBlock => Stmt::Block(StmtBlock(node)),
        Kind::StmtBreak => Stmt::Break(StmtBreak(node)),
        Kind::StmtContinue => Stmt::Continue(StmtContinue(node)),
        Kind::StmtExpr => Stmt::Expr(StmtExpr(node)),
        Kind::StmtFor => Stmt::For(StmtFor(node)),
        Kind::StmtForIn => Stmt::ForIn(StmtForIn(node)),
        Kind::StmtFuncDecl => Stmt::FunctionDecl(StmtFunctionDecl(node)),
        Kind::StmtIf => Stmt::If(StmtIf(node)),
        Kind::StmtInclude => Stmt::Include(StmtInclude(node)),
        Kind::StmtPragma => Stmt::Pragma(StmtPragma(node)),
        Kind::StmtReturn => Stmt::Return(StmtReturn(node)),
        Kind::StmtVarDecl => Stmt::VariableDecl(StmtVariableDecl(node)),
        Kind::StmtWhile => Stmt::While(StmtWhile(node)),
        _ => return None,
    })
}

pub fn cast_expr<'g>(node: red::Node<'g>) -> Option<Expr<'g>> {
    Some(match node.kind() {
        Kind::ExprArrow => Expr::Arrow(ExprArrow(node)),
        Kind::ExprAssignment => Expr::Assignment(ExprAssignment(node)),
        Kind::ExprBinary => Expr::Binary(ExprBinary(node)),
        Kind::ExprCall => Expr::Call(ExprCall(node)),
        Kind::ExprCast => Expr::Cast(ExprCast(node)),
        Kind::ExprCompare | Kind::ExprEquality => Expr::Compare(ExprCompare(node)),
        Kind::ExprGet => Expr::Get(ExprGet(node)),
        Kind::ExprGrouping => Expr::Grouping(ExprGrouping(node)),
        Kind::ExprIndex => Expr::Index(ExprIndex(node)),
        Kind::ExprLiteral => Expr::Literal(ExprLiteral(node)),
        Kind::ExprLogical => Expr::Logical(ExprLogical(node)),
        Kind::NameRef | Kind::Null => Expr::NameRef(ExprNameRef(node)),
        Kind::NameRefList => Expr::NameRefList(ExprNameRefList(node)),
        Kind::ExprPostfix => Expr::Postfix(ExprPostfix(node)),
        Kind::ExprPrefix => Expr::Prefix(ExprPrefix(node)),
        Kind::ExprRange => Expr::Range(ExprRange(node)),
        Kind::ExprStringConcat => Expr::StringConcat(ExprStringConcat(node)),
        Kind::ExprTernary => Expr::Ternary(ExprTernary(node)),
        Kind::ExprWrite => Expr::Write(ExprWrite(node)),
        _ => return None,
    })
}

impl<'g> AstNode<'g> {
    pub fn red(&self) -> &red::Node<'g> {
        match self {
            Self::Stmt(stmt) => stmt.red(),
            Self::Expr(expr) => expr.red(),
        }
    }
}

impl<'g> From<Stmt<'g>> for AstNode<'g> {
    fn from(stmt: Stmt<'g>) -> Self {
        Self::Stmt(stmt)
    }
}

impl<'g> From<Expr<'g>> for AstNode<'g> {
    fn from(expr: Expr<'g>) -> Self {
        Self::Expr(expr)
    }
}

/// The `n`th child which is a statement.
fn nth_stmt<'g>(node: &red::Node<'g>, n: usize) -> Option<Stmt<'g>> {
    node.child_nodes().filter_map(cast_stmt).nth(n)
}

/// The `n`th child which is an expression.
fn nth_expr<'g>(node: &red::Node<'g>, n: usize) -> Option<Expr<'g>> {
    node.child_nodes().filter_map(cast_expr).nth(n)
}

/// The expression of the `n`th child which is an expression statement.
fn nth_stmt_expr<'g>(node: &red::Node<'g>, n: usize) -> Option<Expr<'g>> {
    match nth_stmt(node, n)? {
        Stmt::Expr(stmt) => stmt.expr(),
        _ => None,
    }
}

/// The first child token of one of the given kinds.
fn token<'g>(node: &red::Node<'g>, kinds: &[Kind]) -> Option<red::Token<'g>> {
    node.child_tokens().find(|token| kinds.contains(&token.kind()))
}

fn first_token<'g>(node: &red::Node<'g>) -> Option<red::Token<'g>> {
    node.child_tokens().find(|token| !token.kind().is_trivia())
}

/// The first statement which starts after the child token `keyword`.
fn stmt_after<'g>(node: &red::Node<'g>, keyword: Kind) -> Option<Stmt<'g>> {
    let keyword = token(node, &[keyword])?;
    node.child_nodes()
        .filter(|child| child.start() >= keyword.end())
        .find_map(cast_stmt)
}

fn name_ref<'g>(expr: Option<Expr<'g>>) -> Option<ExprNameRef<'g>> {
    match expr? {
        Expr::NameRef(name) => Some(name),
        _ => None,
    }
}
