use super::{AstNode, Expr, Stmt};
use crate::syntax::red;

/// Render an outline of `node`, one line per node or token of interest.
pub fn dump(node: &AstNode) -> String {
    let mut printer = Printer { out: String::new() };
    printer.item(0, Some(node.clone()));
    printer.out
}

enum Item<'g> {
    Ast(AstNode<'g>),
    Token(red::Token<'g>),
}

impl<'g> From<AstNode<'g>> for Item<'g> {
    fn from(node: AstNode<'g>) -> Self {
        Self::Ast(node)
    }
}

impl<'g> From<Stmt<'g>> for Item<'g> {
    fn from(stmt: Stmt<'g>) -> Self {
        Self::Ast(AstNode::Stmt(stmt))
    }
}

impl<'g> From<Expr<'g>> for Item<'g> {
    fn from(expr: Expr<'g>) -> Self {
        Self::Ast(AstNode::Expr(expr))
    }
}

impl<'g> From<red::Token<'g>> for Item<'g> {
    fn from(token: red::Token<'g>) -> Self {
        Self::Token(token)
    }
}

struct Printer {
    out: String,
}

impl Printer {
    /// Print `item` on a new line indented by `depth`, or inline if `depth`
    /// is zero.
    fn item<'g>(&mut self, depth: usize, item: Option<impl Into<Item<'g>>>) {
        let Some(item) = item else {
            return;
        };

        if depth > 0 {
            self.out.push('\n');
            self.out.extend(std::iter::repeat("  ").take(depth));
        }

        match item.into() {
            Item::Token(token) => self.out.push_str(token.text()),
            Item::Ast(AstNode::Stmt(stmt)) => self.stmt(depth, stmt),
            Item::Ast(AstNode::Expr(expr)) => self.expr(depth, expr),
        }
    }

    /// Print `tag, detail` where the detail is printed inline.
    fn head<'g>(&mut self, tag: &str, detail: Option<impl Into<Item<'g>>>) {
        self.out.push_str(tag);
        self.out.push_str(", ");
        self.item(0, detail);
    }

    fn tag(&mut self, tag: &str) {
        self.out.push_str(tag);
    }

    fn stmt(&mut self, n: usize, stmt: Stmt) {
        match stmt {
            Stmt::Root(root) => {
                self.tag("Root");
                for stmt in root.stmts() {
                    self.item(n + 1, Some(stmt));
                }
            }

            Stmt::ArrayDecl(decl) => {
                self.tag("StmtArrayDecl");
                self.item(n + 1, decl.name().map(AstNode::from));
                self.item(n + 1, decl.count());
                for expr in decl.args().map(|args| args.exprs()).unwrap_or_default() {
                    self.item(n + 2, Some(expr));
                }
            }

            Stmt::Block(block) => {
                self.tag("StmtBlock");
                for stmt in block.stmts() {
                    self.item(n + 2, Some(stmt));
                }
            }

            Stmt::Break(_) => self.tag("StmtBreak"),
            Stmt::Continue(_) => self.tag("StmtContinue"),

            Stmt::Expr(stmt) => {
                self.tag("StmtExpr");
                self.item(n + 1, stmt.expr());
            }

            Stmt::For(stmt) => {
                self.tag("StmtFor");
                self.item(n + 1, stmt.initializer());
                self.item(n + 1, stmt.condition());
                self.item(n + 1, stmt.increment());
                self.item(n + 1, stmt.body());
            }

            Stmt::ForIn(stmt) => {
                self.tag("StmtForIn");
                self.item(n + 1, stmt.item());
                self.item(n + 1, stmt.parent());
                self.item(n + 1, stmt.body());
            }

            Stmt::FunctionDecl(decl) => {
                self.tag("StmtFunctionDecl");
                self.item(n + 1, decl.name().map(AstNode::from));
                self.out.push_str(" => ");
                self.item(0, decl.typing().and_then(|typing| typing.name()));
                for param in decl.params().map(|params| params.params()).unwrap_or_default() {
                    self.item(n + 1, Some(AstNode::from(param)));
                }
                self.item(n + 1, decl.body().map(AstNode::from));
            }

            Stmt::If(stmt) => {
                self.tag("StmtIf");
                self.item(n + 1, stmt.condition());
                self.item(n + 1, stmt.then_branch());
                self.item(n + 1, stmt.else_branch());
            }

            Stmt::Return(stmt) => {
                self.tag("StmtReturn");
                self.item(n + 1, stmt.expr());
            }

            Stmt::VariableDecl(decl) => {
                self.tag("StmtVariableDecl");
                self.item(n + 1, decl.name().map(AstNode::from));
                self.out.push_str(" => ");
                self.item(0, decl.typing().and_then(|typing| typing.name()));
                self.item(n + 1, decl.value());
            }

            Stmt::While(stmt) => {
                self.tag("StmtWhile");
                self.item(n + 1, stmt.condition());
                self.item(n + 1, stmt.body());
            }

            Stmt::Param(param) => {
                self.tag("Param");
                self.item(n + 1, param.decl());
            }

            Stmt::ArgList(_)
            | Stmt::Arg(_)
            | Stmt::ParamList(_)
            | Stmt::TypeAnnotation(_)
            | Stmt::Include(_)
            | Stmt::Pragma(_) => self.tag("Not Implemented"),
        }
    }

    fn expr(&mut self, n: usize, expr: Expr) {
        match expr {
            Expr::Arrow(expr) => {
                self.head("ExprArrow", expr.op());
                self.item(n + 1, expr.lhs());
                self.item(n + 1, expr.rhs());
            }

            Expr::Assignment(expr) => {
                self.head("ExprAssignment", expr.op());
                self.item(n + 1, expr.target());
                self.item(n + 1, expr.value());
            }

            Expr::Binary(expr) => {
                self.head("ExprBinary", expr.op());
                self.item(n + 1, expr.lhs());
                self.item(n + 1, expr.rhs());
            }

            Expr::Call(expr) => {
                self.head("ExprCall", expr.name().map(AstNode::from));
                for arg in expr.args().map(|args| args.exprs()).unwrap_or_default() {
                    self.item(n + 2, Some(arg));
                }
            }

            Expr::Cast(expr) => {
                self.head("ExprCast", expr.typing().and_then(|typing| typing.name()));
                self.item(n + 1, expr.expr());
            }

            Expr::Compare(expr) => {
                self.head("ExprCompare", expr.op());
                self.item(n + 1, expr.lhs());
                self.item(n + 1, expr.rhs());
            }

            Expr::Get(expr) => {
                self.head("ExprGet", expr.object());
                self.item(n + 1, expr.property());
            }

            Expr::Grouping(expr) => {
                self.tag("ExprGrouping");
                self.item(n + 1, expr.expr());
            }

            Expr::Index(expr) => {
                self.head("ExprIndex", expr.name().map(AstNode::from));
                self.item(n + 1, expr.index());
                self.item(n + 1, expr.end());
            }

            Expr::Literal(expr) => self.head("ExprLiteral", expr.value()),

            Expr::Logical(expr) => {
                self.head("ExprLogical", expr.op());
                self.item(n + 1, expr.lhs());
                self.item(n + 1, expr.rhs());
            }

            Expr::NameRef(expr) => self.head("ExprNameRef", expr.name()),

            Expr::Postfix(expr) => {
                self.head("ExprPostfix", expr.op());
                self.item(n + 1, expr.expr());
            }

            Expr::Prefix(expr) => {
                self.head("ExprPrefix", expr.op());
                self.item(n + 1, expr.expr());
            }

            Expr::Range(expr) => {
                self.tag("ExprRange");
                self.item(n + 1, expr.start());
                self.item(n + 1, expr.end());
            }

            Expr::StringConcat(expr) => {
                self.tag("ExprStringConcat");
                self.item(n + 1, expr.lhs());
                self.item(n + 1, expr.rhs());
            }

            Expr::Ternary(expr) => {
                self.tag("ExprTernary");
                self.item(n + 1, expr.condition());
                self.item(n + 1, expr.then_branch());
                self.item(n + 1, expr.else_branch());
            }

            Expr::Write(expr) => {
                self.tag("ExprWrite");
                self.item(n + 1, expr.lhs());
                self.item(n + 1, expr.rhs());
            }

            Expr::NameRefList(_) => self.tag("Not Implemented"),
        }
    }
}
