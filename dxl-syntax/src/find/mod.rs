//! Name resolution by walking the red tree. Scopes are never built; instead a
//! name is resolved by searching backwards from its use, and its references are
//! found by searching the subtree of the scope it was declared in.

#[cfg(test)]
mod tests;

use log::trace;

use crate::syntax::ast::{self, Expr, ExprNameRef, Stmt};
use crate::syntax::red::{self, Element};
use crate::syntax::Kind;

/// Find the token at `offset`. Ranges include their end, so the first of two
/// adjacent tokens wins.
pub fn token_at_offset<'g>(node: &red::Node<'g>, offset: usize) -> Option<red::Token<'g>> {
    for child in node.children() {
        if !contains(&child, offset) {
            continue;
        }

        return match child {
            Element::Node(child) => token_at_offset(&child, offset),
            Element::Token(token) => Some(token),
        };
    }

    None
}

/// Find the innermost node with a token at `offset`.
pub fn node_at_offset<'g>(node: &red::Node<'g>, offset: usize) -> Option<red::Node<'g>> {
    let mut result = None;

    for child in node.children() {
        if !contains(&child, offset) {
            continue;
        }

        match child {
            Element::Node(child) => return node_at_offset(&child, offset),
            Element::Token(_) => result = Some(node.clone()),
        }
    }

    result
}

fn contains(element: &Element, offset: usize) -> bool {
    element.start() <= offset && offset <= element.end()
}

/// The number of scopes around `element`.
pub fn level<'g>(element: impl Into<Element<'g>>) -> usize {
    element
        .into()
        .ancestors()
        .filter(|node| {
            matches!(
                node.kind(),
                Kind::Root
                    | Kind::StmtIf
                    | Kind::StmtFor
                    | Kind::StmtWhile
                    | Kind::StmtBlock
                    | Kind::ParamList
            )
        })
        .count()
}

/// The nearest node around `node` which may contain declarations, or `node`
/// itself if there is none.
pub fn containing_scope<'g>(node: &red::Node<'g>) -> red::Node<'g> {
    node.ancestors()
        .find(|ancestor| {
            matches!(
                ancestor.kind(),
                Kind::Root
                    | Kind::StmtIf
                    | Kind::StmtFor
                    | Kind::StmtWhile
                    | Kind::StmtBlock
                    | Kind::StmtFuncDecl
                    | Kind::ParamList
            )
        })
        .unwrap_or_else(|| node.clone())
}

/// Find the name token declaring the name at `offset`.
///
/// The nearest preceding declaration which is no deeper than the use wins.
/// Names which are never declared are defined by a preceding plain `=`
/// assignment instead.
pub fn find_definition<'g>(root: &red::Node<'g>, offset: usize) -> Option<red::Token<'g>> {
    let start = node_at_offset(root, offset)?;
    let name = name_of(&start)?;
    let start_level = level(start.clone());

    trace!("finding the definition of `{name}` at level {start_level}");

    let visible = |token: &red::Token<'g>| level(token.clone()) <= start_level;

    start
        .previous()
        .find_map(|node| declared_name(&node, name).filter(visible))
        .or_else(|| start.previous().find_map(|node| assigned_name(&node, name).filter(visible)))
}

/// Find every use of the name at `offset` which refers to the same
/// definition, in source order. The definition itself is included.
pub fn find_references<'g>(root: &red::Node<'g>, offset: usize) -> Option<Vec<red::Token<'g>>> {
    let definition = find_definition(root, offset)?;
    let start = definition.parent().clone();
    let name = name_of(&start)?;
    let start_level = level(start.clone());
    let mut scope = containing_scope(&start);

    if matches!(scope.kind(), Kind::StmtFuncDecl | Kind::ParamList) {
        if let Some(parent) = scope.parent().cloned() {
            scope = parent;
        }
    }

    trace!("finding references to `{name}` in {scope}");

    let mut references = Vec::new();
    references_in(&scope, name, start.start(), start_level, &mut references);
    Some(references)
}

/// Collect the uses of `name` below `node` which come after `offset`. A
/// deeper declaration of the same name hides the rest of its scope.
fn references_in<'g>(
    node: &red::Node<'g>,
    name: &str,
    offset: usize,
    start_level: usize,
    references: &mut Vec<red::Token<'g>>,
) {
    let mut skip_until = offset;

    for child in node.child_nodes() {
        if child.end() <= skip_until {
            continue;
        }

        let shadowing = declared_name(&child, name).filter(|token| level(token.clone()) > start_level);

        if shadowing.is_some() {
            let scope = containing_scope(&child);

            if scope.kind() != Kind::Root {
                skip_until = scope.end();
            }

            continue;
        }

        if let Some(Expr::NameRef(name_ref)) = ast::cast_expr(child.clone()) {
            if let Some(token) = name_ref.name().filter(|token| token.text() == name) {
                references.push(token);
            }
        }

        references_in(&child, name, offset, start_level, references);
    }
}

/// The text of the name referenced by `node`.
fn name_of<'g>(node: &red::Node<'g>) -> Option<&'g str> {
    match ast::cast_expr(node.clone())? {
        Expr::NameRef(name_ref) => name_ref.name().map(|token| token.text()),
        _ => None,
    }
}

fn matching<'g>(name_ref: Option<ExprNameRef<'g>>, name: &str) -> Option<red::Token<'g>> {
    name_ref?.name().filter(|token| token.text() == name)
}

/// The name token of `node` if it declares `name`.
fn declared_name<'g>(node: &red::Node<'g>, name: &str) -> Option<red::Token<'g>> {
    match ast::cast_stmt(node.clone())? {
        Stmt::VariableDecl(decl) => match decl.names() {
            Some(names) => names.into_iter().find_map(|name_ref| matching(Some(name_ref), name)),
            None => matching(decl.name(), name),
        },

        Stmt::ArrayDecl(decl) => matching(decl.name(), name),
        Stmt::FunctionDecl(decl) => matching(decl.name(), name),

        Stmt::ParamList(params) => params.params().into_iter().find_map(|param| match param.decl()? {
            Stmt::VariableDecl(decl) => matching(decl.name(), name),
            Stmt::ArrayDecl(decl) => matching(decl.name(), name),
            Stmt::FunctionDecl(decl) => matching(decl.name(), name),
            _ => None,
        }),

        _ => None,
    }
}

/// The name token of `node` if it is a plain assignment to `name`.
fn assigned_name<'g>(node: &red::Node<'g>, name: &str) -> Option<red::Token<'g>> {
    let Some(Stmt::Expr(stmt)) = ast::cast_stmt(node.clone()) else {
        return None;
    };

    let Some(Expr::Assignment(assignment)) = stmt.expr() else {
        return None;
    };

    if assignment.op()?.kind() != Kind::Equal {
        return None;
    }

    matching(assignment.name(), name)
}
