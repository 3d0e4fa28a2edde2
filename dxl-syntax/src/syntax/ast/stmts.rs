use super::{
    cast_stmt, first_token, name_ref, nth_expr, nth_stmt, nth_stmt_expr, stmt_after, token, Expr,
    ExprNameRef, Stmt,
};
use crate::syntax::{red, Kind};

ast_nodes! {
    Stmt::Root => Root,
    Stmt::ArgList => ArgList,
    Stmt::Arg => Arg,
    Stmt::ParamList => ParamList,
    Stmt::Param => Param,
    Stmt::TypeAnnotation => TypeAnnotation,
    Stmt::ArrayDecl => StmtArrayDecl,
    Stmt::Block => StmtBlock,
    Stmt::Break => StmtBreak,
    Stmt::Continue => StmtContinue,
    Stmt::Expr => StmtExpr,
    Stmt::For => StmtFor,
    Stmt::ForIn => StmtForIn,
    Stmt::FunctionDecl => StmtFunctionDecl,
    Stmt::If => StmtIf,
    Stmt::Include => StmtInclude,
    Stmt::Pragma => StmtPragma,
    Stmt::Return => StmtReturn,
    Stmt::VariableDecl => StmtVariableDecl,
    Stmt::While => StmtWhile,
}

impl<'g> Stmt<'g> {
    pub fn red(&self) -> &red::Node<'g> {
        match self {
            Self::Root(stmt) => stmt.red(),
            Self::ArgList(stmt) => stmt.red(),
            Self::Arg(stmt) => stmt.red(),
            Self::ParamList(stmt) => stmt.red(),
            Self::Param(stmt) => stmt.red(),
            Self::TypeAnnotation(stmt) => stmt.red(),
            Self::ArrayDecl(stmt) => stmt.red(),
            Self::Block(stmt) => stmt.red(),
            Self::Break(stmt) => stmt.red(),
            Self::Continue(stmt) => stmt.red(),
            Self::Expr(stmt) => stmt.red(),
            Self::For(stmt) => stmt.red(),
            Self::ForIn(stmt) => stmt.red(),
            Self::FunctionDecl(stmt) => stmt.red(),
            Self::If(stmt) => stmt.red(),
            Self::Include(stmt) => stmt.red(),
            Self::Pragma(stmt) => stmt.red(),
            Self::Return(stmt) => stmt.red(),
            Self::VariableDecl(stmt) => stmt.red(),
            Self::While(stmt) => stmt.red(),
        }
    }
}

/// Every child which is a statement.
fn stmts<'g>(node: &red::Node<'g>) -> Vec<Stmt<'g>> {
    node.child_nodes().filter_map(cast_stmt).collect()
}

/// The type annotation among the children of `node`.
fn typing<'g>(node: &red::Node<'g>) -> Option<TypeAnnotation<'g>> {
    match nth_stmt(node, 0)? {
        Stmt::TypeAnnotation(typing) => Some(typing),
        _ => None,
    }
}

impl<'g> Root<'g> {
    pub fn stmts(&self) -> Vec<Stmt<'g>> {
        stmts(&self.0)
    }
}

impl<'g> ArgList<'g> {
    pub fn args(&self) -> Vec<Arg<'g>> {
        self.0
            .child_nodes()
            .filter_map(|child| match cast_stmt(child)? {
                Stmt::Arg(arg) => Some(arg),
                _ => None,
            })
            .collect()
    }

    /// The expressions of the list, which are either wrapped in arguments or
    /// direct children as in array initializers.
    pub fn exprs(&self) -> Vec<Expr<'g>> {
        self.0
            .child_nodes()
            .filter_map(|child| match cast_stmt(child)? {
                Stmt::Arg(arg) => arg.expr(),
                Stmt::Expr(stmt) => stmt.expr(),
                _ => None,
            })
            .collect()
    }
}

impl<'g> Arg<'g> {
    pub fn expr(&self) -> Option<Expr<'g>> {
        nth_stmt_expr(&self.0, 0)
    }
}

impl<'g> ParamList<'g> {
    pub fn params(&self) -> Vec<Param<'g>> {
        self.0
            .child_nodes()
            .filter_map(|child| match cast_stmt(child)? {
                Stmt::Param(param) => Some(param),
                _ => None,
            })
            .collect()
    }
}

impl<'g> Param<'g> {
    /// The declaration of this parameter, if it is named or a function.
    pub fn decl(&self) -> Option<Stmt<'g>> {
        self.0.child_nodes().find_map(|child| match cast_stmt(child)? {
            stmt @ (Stmt::VariableDecl(_) | Stmt::FunctionDecl(_) | Stmt::ArrayDecl(_)) => Some(stmt),
            _ => None,
        })
    }
}

impl<'g> TypeAnnotation<'g> {
    pub fn name(&self) -> Option<red::Token<'g>> {
        first_token(&self.0)
    }
}

impl<'g> StmtArrayDecl<'g> {
    pub fn typing(&self) -> Option<TypeAnnotation<'g>> {
        typing(&self.0)
    }

    pub fn name(&self) -> Option<ExprNameRef<'g>> {
        name_ref(nth_expr(&self.0, 0))
    }

    /// The size between the brackets.
    pub fn count(&self) -> Option<Expr<'g>> {
        let bracket = token(&self.0, &[Kind::RightBracket])?;
        self.0
            .child_nodes()
            .filter(|child| child.end() <= bracket.start())
            .find_map(|child| match cast_stmt(child)? {
                Stmt::Expr(stmt) => stmt.expr(),
                _ => None,
            })
    }

    /// The initial values.
    pub fn args(&self) -> Option<ArgList<'g>> {
        self.0.child_nodes().find_map(|child| match cast_stmt(child)? {
            Stmt::ArgList(args) => Some(args),
            _ => None,
        })
    }
}

impl<'g> StmtBlock<'g> {
    pub fn stmts(&self) -> Vec<Stmt<'g>> {
        stmts(&self.0)
    }
}

impl<'g> StmtBreak<'g> {
    pub fn keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwBreak])
    }
}

impl<'g> StmtContinue<'g> {
    pub fn keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwContinue])
    }
}

impl<'g> StmtExpr<'g> {
    pub fn expr(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }
}

impl<'g> StmtFor<'g> {
    pub fn initializer(&self) -> Option<Expr<'g>> {
        self.clause(0)
    }

    pub fn condition(&self) -> Option<Expr<'g>> {
        self.clause(1)
    }

    pub fn increment(&self) -> Option<Expr<'g>> {
        self.clause(2)
    }

    pub fn body(&self) -> Option<Stmt<'g>> {
        stmt_after(&self.0, Kind::RightParen)
    }

    pub fn keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwFor])
    }

    /// The `n`th expression between the parentheses.
    fn clause(&self, n: usize) -> Option<Expr<'g>> {
        let end = token(&self.0, &[Kind::RightParen]).map_or(usize::MAX, |paren| paren.start());

        match self
            .0
            .child_nodes()
            .filter(|child| child.end() <= end)
            .filter_map(cast_stmt)
            .nth(n)?
        {
            Stmt::Expr(stmt) => stmt.expr(),
            _ => None,
        }
    }
}

impl<'g> StmtForIn<'g> {
    pub fn item(&self) -> Option<Expr<'g>> {
        nth_stmt_expr(&self.0, 0)
    }

    /// The expression iterated over.
    pub fn parent(&self) -> Option<Expr<'g>> {
        match stmt_after(&self.0, Kind::KwIn)? {
            Stmt::Expr(stmt) => stmt.expr(),
            _ => None,
        }
    }

    pub fn step(&self) -> Option<Expr<'g>> {
        match stmt_after(&self.0, Kind::KwBy)? {
            Stmt::Expr(stmt) => stmt.expr(),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<Stmt<'g>> {
        stmt_after(&self.0, Kind::KwDo)
    }

    pub fn for_keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwFor])
    }

    pub fn in_keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwIn])
    }

    pub fn do_keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwDo])
    }
}

impl<'g> StmtFunctionDecl<'g> {
    pub fn typing(&self) -> Option<TypeAnnotation<'g>> {
        typing(&self.0)
    }

    pub fn name(&self) -> Option<ExprNameRef<'g>> {
        name_ref(nth_expr(&self.0, 0))
    }

    pub fn params(&self) -> Option<ParamList<'g>> {
        self.0.child_nodes().find_map(|child| match cast_stmt(child)? {
            Stmt::ParamList(params) => Some(params),
            _ => None,
        })
    }

    pub fn body(&self) -> Option<StmtBlock<'g>> {
        self.0.child_nodes().find_map(|child| match cast_stmt(child)? {
            Stmt::Block(block) => Some(block),
            _ => None,
        })
    }
}

impl<'g> StmtIf<'g> {
    pub fn condition(&self) -> Option<Expr<'g>> {
        nth_stmt_expr(&self.0, 0)
    }

    pub fn then_branch(&self) -> Option<Stmt<'g>> {
        nth_stmt(&self.0, 1)
    }

    pub fn else_branch(&self) -> Option<Stmt<'g>> {
        stmt_after(&self.0, Kind::KwElse)
    }

    pub fn if_keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwIf])
    }

    pub fn else_keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwElse])
    }
}

impl<'g> StmtInclude<'g> {
    pub fn keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwInclude])
    }

    /// The included path as written, without the surrounding quotes or angle
    /// brackets.
    pub fn path(&self) -> String {
        let mut path = String::new();
        let mut tokens = self.0.child_tokens().filter(|token| !token.kind().is_trivia());

        for token in tokens.by_ref() {
            match token.kind() {
                Kind::String => {
                    let quote = |c: char| c == '"' || c == '\'';
                    let text = token.text();
                    let text = text.strip_prefix(quote).unwrap_or(text);
                    let text = text.strip_suffix(quote).unwrap_or(text);
                    return text.into();
                }

                Kind::Less => break,
                _ => {}
            }
        }

        for token in tokens.take_while(|token| token.kind() != Kind::Greater) {
            path.push_str(token.text());
        }

        path
    }
}

impl<'g> StmtPragma<'g> {
    pub fn keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwPragma])
    }

    pub fn name(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::Name])
    }

    pub fn value(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::Integer, Kind::String])
    }
}

impl<'g> StmtReturn<'g> {
    pub fn expr(&self) -> Option<Expr<'g>> {
        nth_stmt_expr(&self.0, 0)
    }

    pub fn keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwReturn])
    }
}

impl<'g> StmtVariableDecl<'g> {
    pub fn typing(&self) -> Option<TypeAnnotation<'g>> {
        typing(&self.0)
    }

    /// The declared name, unless several names are declared at once.
    pub fn name(&self) -> Option<ExprNameRef<'g>> {
        name_ref(nth_expr(&self.0, 0))
    }

    /// Every declared name, if several names are declared at once.
    pub fn names(&self) -> Option<Vec<ExprNameRef<'g>>> {
        match nth_expr(&self.0, 0)? {
            Expr::NameRefList(list) => list.names(),
            _ => None,
        }
    }

    /// The initial value of a single declared name.
    pub fn value(&self) -> Option<Expr<'g>> {
        self.0.child_nodes().find_map(|child| match cast_stmt(child)? {
            Stmt::Expr(stmt) => stmt.expr(),
            _ => None,
        })
    }
}

impl<'g> StmtWhile<'g> {
    pub fn condition(&self) -> Option<Expr<'g>> {
        nth_stmt_expr(&self.0, 0)
    }

    pub fn body(&self) -> Option<Stmt<'g>> {
        stmt_after(&self.0, Kind::RightParen)
    }

    pub fn keyword(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::KwWhile])
    }
}
