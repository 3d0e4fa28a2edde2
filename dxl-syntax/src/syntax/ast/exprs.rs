use super::{cast_stmt, first_token, name_ref, nth_expr, token, Expr, Stmt};
use crate::syntax::{red, Kind};

ast_nodes! {
    Expr::Arrow => ExprArrow,
    Expr::Assignment => ExprAssignment,
    Expr::Binary => ExprBinary,
    Expr::Call => ExprCall,
    Expr::Cast => ExprCast,
    Expr::Compare => ExprCompare,
    Expr::Get => ExprGet,
    Expr::Grouping => ExprGrouping,
    Expr::Index => ExprIndex,
    Expr::Literal => ExprLiteral,
    Expr::Logical => ExprLogical,
    Expr::NameRef => ExprNameRef,
    Expr::NameRefList => ExprNameRefList,
    Expr::Postfix => ExprPostfix,
    Expr::Prefix => ExprPrefix,
    Expr::Range => ExprRange,
    Expr::StringConcat => ExprStringConcat,
    Expr::Ternary => ExprTernary,
    Expr::Write => ExprWrite,
}

const ASSIGNMENT_OPS: &[Kind] = &[
    Kind::Equal,
    Kind::PlusEqual,
    Kind::MinusEqual,
    Kind::StarEqual,
    Kind::SlashEqual,
    Kind::PercentEqual,
    Kind::LessLessEqual,
    Kind::GreaterGreaterEqual,
    Kind::AmpersandEqual,
    Kind::CaretEqual,
    Kind::PipeEqual,
];

const BINARY_OPS: &[Kind] = &[
    Kind::Plus,
    Kind::Minus,
    Kind::Star,
    Kind::Slash,
    Kind::Percent,
    Kind::Ampersand,
];

const COMPARE_OPS: &[Kind] = &[
    Kind::EqualEqual,
    Kind::BangEqual,
    Kind::Greater,
    Kind::GreaterEqual,
    Kind::Less,
    Kind::LessEqual,
];

const LOGICAL_OPS: &[Kind] = &[
    Kind::PipePipe,
    Kind::AmpersandAmpersand,
    Kind::Pipe,
    Kind::Caret,
    Kind::KwAnd,
    Kind::KwOr,
];

const PREFIX_OPS: &[Kind] = &[
    Kind::PlusPlus,
    Kind::MinusMinus,
    Kind::Ampersand,
    Kind::Plus,
    Kind::Minus,
    Kind::Tilde,
    Kind::Bang,
    Kind::KwSizeof,
    Kind::KwNull,
];

impl<'g> Expr<'g> {
    pub fn red(&self) -> &red::Node<'g> {
        match self {
            Self::Arrow(expr) => expr.red(),
            Self::Assignment(expr) => expr.red(),
            Self::Binary(expr) => expr.red(),
            Self::Call(expr) => expr.red(),
            Self::Cast(expr) => expr.red(),
            Self::Compare(expr) => expr.red(),
            Self::Get(expr) => expr.red(),
            Self::Grouping(expr) => expr.red(),
            Self::Index(expr) => expr.red(),
            Self::Literal(expr) => expr.red(),
            Self::Logical(expr) => expr.red(),
            Self::NameRef(expr) => expr.red(),
            Self::NameRefList(expr) => expr.red(),
            Self::Postfix(expr) => expr.red(),
            Self::Prefix(expr) => expr.red(),
            Self::Range(expr) => expr.red(),
            Self::StringConcat(expr) => expr.red(),
            Self::Ternary(expr) => expr.red(),
            Self::Write(expr) => expr.red(),
        }
    }
}

impl<'g> ExprArrow<'g> {
    pub fn lhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn rhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 1)
    }

    pub fn op(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::MinusArrow, Kind::LessMinus])
    }
}

impl<'g> ExprAssignment<'g> {
    /// The assigned name, if the target is a plain name.
    pub fn name(&self) -> Option<ExprNameRef<'g>> {
        name_ref(self.target())
    }

    pub fn target(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn value(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 1)
    }

    pub fn op(&self) -> Option<red::Token<'g>> {
        token(&self.0, ASSIGNMENT_OPS)
    }
}

impl<'g> ExprBinary<'g> {
    pub fn lhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn rhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 1)
    }

    pub fn op(&self) -> Option<red::Token<'g>> {
        token(&self.0, BINARY_OPS)
    }
}

impl<'g> ExprCall<'g> {
    /// The called function, if it is named.
    pub fn name(&self) -> Option<ExprNameRef<'g>> {
        name_ref(nth_expr(&self.0, 0))
    }

    pub fn args(&self) -> Option<super::ArgList<'g>> {
        self.0.child_nodes().find_map(|child| match cast_stmt(child)? {
            Stmt::ArgList(args) => Some(args),
            _ => None,
        })
    }
}

impl<'g> ExprCast<'g> {
    pub fn typing(&self) -> Option<super::TypeAnnotation<'g>> {
        self.0.child_nodes().find_map(|child| match cast_stmt(child)? {
            Stmt::TypeAnnotation(typing) => Some(typing),
            _ => None,
        })
    }

    pub fn expr(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }
}

impl<'g> ExprCompare<'g> {
    pub fn lhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn rhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 1)
    }

    pub fn op(&self) -> Option<red::Token<'g>> {
        token(&self.0, COMPARE_OPS)
    }
}

impl<'g> ExprGet<'g> {
    pub fn name(&self) -> Option<ExprNameRef<'g>> {
        name_ref(nth_expr(&self.0, 0))
    }

    pub fn object(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn property(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 1)
    }
}

impl<'g> ExprGrouping<'g> {
    pub fn expr(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }
}

impl<'g> ExprIndex<'g> {
    pub fn name(&self) -> Option<ExprNameRef<'g>> {
        name_ref(nth_expr(&self.0, 0))
    }

    pub fn index(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 1)
    }

    /// The end of a sliced range, as in `text[0:2]`.
    pub fn end(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 2)
    }
}

impl<'g> ExprLiteral<'g> {
    pub fn value(&self) -> Option<red::Token<'g>> {
        first_token(&self.0)
    }
}

impl<'g> ExprLogical<'g> {
    pub fn lhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn rhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 1)
    }

    pub fn op(&self) -> Option<red::Token<'g>> {
        token(&self.0, LOGICAL_OPS)
    }
}

impl<'g> ExprNameRef<'g> {
    pub fn name(&self) -> Option<red::Token<'g>> {
        first_token(&self.0)
    }
}

impl<'g> ExprNameRefList<'g> {
    /// Every name in the list, or `None` if there are none.
    pub fn names(&self) -> Option<Vec<ExprNameRef<'g>>> {
        let names: Vec<_> =
            self.0.child_nodes().filter_map(|child| name_ref(super::cast_expr(child))).collect();

        if names.is_empty() {
            None
        } else {
            Some(names)
        }
    }
}

impl<'g> ExprPostfix<'g> {
    pub fn expr(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn op(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::PlusPlus, Kind::MinusMinus])
    }
}

impl<'g> ExprPrefix<'g> {
    pub fn expr(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn op(&self) -> Option<red::Token<'g>> {
        token(&self.0, PREFIX_OPS)
    }
}

impl<'g> ExprRange<'g> {
    pub fn start(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn end(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 1)
    }
}

impl<'g> ExprStringConcat<'g> {
    pub fn lhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn rhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 1)
    }
}

impl<'g> ExprTernary<'g> {
    pub fn condition(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn then_branch(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 1)
    }

    pub fn else_branch(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 2)
    }
}

impl<'g> ExprWrite<'g> {
    pub fn lhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 0)
    }

    pub fn rhs(&self) -> Option<Expr<'g>> {
        nth_expr(&self.0, 1)
    }

    pub fn op(&self) -> Option<red::Token<'g>> {
        token(&self.0, &[Kind::LessLess, Kind::GreaterGreater])
    }
}
