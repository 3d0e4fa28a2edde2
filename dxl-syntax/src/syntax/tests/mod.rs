mod invariants;
mod lossless;

use super::ast::{self, AstNode, Expr, Stmt};
use super::parse::{parse_text, Parse};
use super::red;
use super::Kind;
use crate::errors::Severity;

fn parse_clean(source: &str) -> Parse {
    let _ = pretty_env_logger::try_init();

    let parse = parse_text(source);
    let messages: Vec<_> = parse.errors.iter().map(|error| &error.message).collect();
    assert!(parse.errors.is_perfect(), "errors while parsing {source:?}: {messages:?}");
    assert_eq!(source, parse.tree.write());
    parse
}

/// The kinds of the non-trivia nodes directly under the root.
fn top_level(parse: &Parse) -> Vec<Kind> {
    parse
        .tree
        .children()
        .iter()
        .filter(|child| !child.is_token())
        .map(|child| child.kind())
        .collect()
}

/// The kind of the expression in the first expression statement.
fn first_expr(source: &str) -> Kind {
    let parse = parse_clean(source);
    let stmt = &parse.tree.children()[0];
    assert_eq!(Kind::StmtExpr, stmt.kind(), "parsing {source:?}");

    stmt.children()
        .iter()
        .find(|child| !child.is_token())
        .map(|child| child.kind())
        .unwrap_or(Kind::Invalid)
}

fn ast_dump(source: &str) -> String {
    let parse = parse_clean(source);
    let root = red::Node::new_root(&parse.tree, 0);
    let node = ast::cast(root).expect("the root is a statement");
    ast::dump(&node)
}

#[test]
fn binary_expression() {
    let expected = "\
Node TREEROOT@0..5
  Node STMTEXPR@0..5
    Node EXPRBINARY@0..5
      Node EXPRLITERAL@0..1
        Leaf INTEGER@0..1 \"1\"
      Leaf SPACES@1..2 \" \"
      Leaf PLUS@2..3 \"+\"
      Leaf SPACES@3..4 \" \"
      Node EXPRLITERAL@4..5
        Leaf INTEGER@4..5 \"2\"";

    assert_eq!(expected, parse_clean("1 + 2").tree.dump());
}

#[test]
fn variable_declaration() {
    let expected = "\
Node TREEROOT@0..9
  Node STMTVARDECL@0..9
    Node TYPEREF@0..3
      Leaf KWINT@0..3 \"int\"
    Leaf SPACES@3..4 \" \"
    Node NAMEREF@4..5
      Leaf IDENT@4..5 \"a\"
    Leaf SPACES@5..6 \" \"
    Leaf EQUAL@6..7 \"=\"
    Node STMTEXPR@7..9
      Leaf SPACES@7..8 \" \"
      Node EXPRLITERAL@8..9
        Leaf INTEGER@8..9 \"2\"";

    assert_eq!(expected, parse_clean("int a = 2").tree.dump());
}

#[test]
fn call_with_arguments() {
    let expected = "\
Node TREEROOT@0..7
  Node STMTEXPR@0..7
    Node EXPRCALL@0..7
      Node NAMEREF@0..1
        Leaf IDENT@0..1 \"f\"
      Node ARGLIST@1..7
        Leaf LPAREN@1..2 \"(\"
        Node ARG@2..4
          Node STMTEXPR@2..3
            Node EXPRLITERAL@2..3
              Leaf INTEGER@2..3 \"1\"
          Leaf COMMA@3..4 \",\"
        Leaf SPACES@4..5 \" \"
        Node ARG@5..6
          Node STMTEXPR@5..6
            Node EXPRLITERAL@5..6
              Leaf INTEGER@5..6 \"2\"
        Leaf RPAREN@6..7 \")\"";

    assert_eq!(expected, parse_clean("f(1, 2)").tree.dump());
}

#[test]
fn index_of_call() {
    let expected = "\
Node TREEROOT@0..7
  Node STMTEXPR@0..7
    Node EXPRINDEX@0..7
      Node EXPRCALL@0..4
        Node NAMEREF@0..1
          Leaf IDENT@0..1 \"f\"
        Node ARGLIST@1..4
          Leaf LPAREN@1..2 \"(\"
          Node ARG@2..3
            Node STMTEXPR@2..3
              Node NAMEREF@2..3
                Leaf IDENT@2..3 \"a\"
          Leaf RPAREN@3..4 \")\"
      Leaf LBRACKET@4..5 \"[\"
      Node NAMEREF@5..6
        Leaf IDENT@5..6 \"b\"
      Leaf RBRACKET@6..7 \"]\"";

    assert_eq!(expected, parse_clean("f(a)[b]").tree.dump());
}

#[test]
fn incomplete_declaration() {
    let parse = parse_text("int");

    let errors: Vec<_> = parse.errors.iter().collect();
    assert_eq!(1, errors.len());
    assert_eq!(Severity::Error, errors[0].severity);
    assert_eq!("Expected= IDENT. Got= EOF", errors[0].message);
    assert_eq!(3, errors[0].at);

    let expected = "\
Node TREEROOT@0..3
  Node ERRORNODE@0..3
    Node TYPEREF@0..3
      Leaf KWINT@0..3 \"int\"";

    assert_eq!(expected, parse.tree.dump());
}

#[test]
fn unterminated_string() {
    let parse = parse_text("\"abc");
    let expected = "\
Node TREEROOT@0..4
  Node STMTEXPR@0..4
    Node EXPRLITERAL@0..4
      Leaf STRING@0..4 \"\"abc\"";

    assert_eq!(expected, parse.tree.dump());
    assert!(parse.errors.is_perfect());
}

#[test]
fn ignored_qualifier() {
    let parse = parse_text("const int a = 1");
    assert_eq!(0, parse.errors.num_errors());
    assert_eq!(1, parse.errors.num_warnings());
    assert_eq!(vec![Kind::WarningNode, Kind::StmtVarDecl], top_level(&parse));
}

#[test]
fn line_breaks_end_dumps_without_text() {
    let parse = parse_clean("a\nb");
    let expected = "\
Node TREEROOT@0..3
  Node STMTEXPR@0..1
    Node NAMEREF@0..1
      Leaf IDENT@0..1 \"a\"
  Leaf END@1..2
  Node STMTEXPR@2..3
    Node NAMEREF@2..3
      Leaf IDENT@2..3 \"b\"";

    assert_eq!(expected, parse.tree.dump());
}

#[test]
fn expressions() {
    let cases = [
        ("1 + 2 * 3", Kind::ExprBinary),
        ("(1 + 2) * 3", Kind::ExprBinary),
        ("(int key sk)", Kind::ExprCast),
        ("current Object", Kind::ExprCast),
        ("i++", Kind::ExprPostfix),
        ("-1 * 2", Kind::ExprBinary),
        ("!done", Kind::ExprPrefix),
        ("a < 2 ? 3 : 4", Kind::ExprTernary),
        ("a == b", Kind::ExprEquality),
        ("a <= b", Kind::ExprCompare),
        ("a && b || c", Kind::ExprLogical),
        ("a = 2", Kind::ExprAssignment),
        ("a += 2", Kind::ExprAssignment),
        ("a <<= 2", Kind::ExprAssignment),
        ("sum(1, 2)", Kind::ExprCall),
        ("print square 2", Kind::ExprCall),
        ("arr[1]", Kind::ExprIndex),
        ("obj.\"text\"", Kind::ExprGet),
        ("dbe->\"left\"->\"form\"", Kind::ExprArrow),
        ("str[0:2]", Kind::ExprIndex),
        ("str[0:]", Kind::ExprIndex),
        ("2 \"\"", Kind::ExprStringConcat),
        ("\"hello\" //-\n\"world\"", Kind::ExprStringConcat),
        ("out << \"hello\" << \"world\"", Kind::ExprWrite),
        ("null", Kind::Null),
        ("true", Kind::ExprLiteral),
        ("1.5e3", Kind::ExprLiteral),
    ];

    for (source, kind) in cases {
        assert_eq!(kind, first_expr(source), "parsing {source:?}");
    }
}

#[test]
fn statements() {
    let cases = [
        ("1 + 2; 3 + 4", vec![Kind::StmtExpr, Kind::StmtExpr]),
        ("return a", vec![Kind::StmtReturn]),
        ("if (a < 2) {\n    a + 1\n}", vec![Kind::StmtIf]),
        ("if (true) 1 else 2", vec![Kind::StmtIf]),
        ("if (a) { 1 } else if (b) { 2 }", vec![Kind::StmtIf]),
        ("while (a) last--", vec![Kind::StmtWhile]),
        ("for (i = 0; i < 4; i++) {\n    a + 1\n}", vec![Kind::StmtFor]),
        ("for obj in mod do {}", vec![Kind::StmtForIn]),
        ("int sum(int a, int b) {\n    return a + b\n}", vec![Kind::StmtFuncDecl]),
        ("int acc(int base, int f(int, int)) {}", vec![Kind::StmtFuncDecl]),
        ("int nums[] = {1, 2, 3}", vec![Kind::StmtArrayDecl]),
        ("int nums[3]", vec![Kind::StmtArrayDecl]),
        ("pragma runLim, 0", vec![Kind::StmtPragma]),
        ("#include \"file.txt\"", vec![Kind::StmtInclude]),
        ("#include <file.txt>", vec![Kind::StmtInclude]),
        ("string s1, s2, s3", vec![Kind::StmtVarDecl]),
        ("{ break; continue }", vec![Kind::StmtBlock]),
        ("int a\n\n\nint b", vec![Kind::StmtVarDecl, Kind::StmtVarDecl]),
        ("a +\nb", vec![Kind::StmtExpr]),
        ("a + \nb", vec![Kind::StmtExpr, Kind::StmtExpr]),
    ];

    for (source, expected) in cases {
        assert_eq!(expected, top_level(&parse_clean(source)), "parsing {source:?}");
    }
}

#[test]
fn operator_precedence() {
    let parse = parse_clean("1 + 2 * 3");
    let root = red::Node::new_root(&parse.tree, 0);
    let Some(AstNode::Stmt(Stmt::Root(root))) = ast::cast(root) else {
        panic!("expected a root");
    };

    let Some(Stmt::Expr(stmt)) = root.stmts().into_iter().next() else {
        panic!("expected an expression statement");
    };

    let Some(Expr::Binary(sum)) = stmt.expr() else {
        panic!("expected a binary expression");
    };

    assert_eq!(Some("+"), sum.op().map(|op| op.text()));
    assert!(matches!(sum.rhs(), Some(Expr::Binary(product)) if product.red().range() == (4..9)));
}

#[test]
fn names_declared_together() {
    let parse = parse_clean("string s1, s2, s3");
    let root = red::Node::new_root(&parse.tree, 0);
    let decl = root.child_nodes().next().expect("a declaration");

    let Some(Stmt::VariableDecl(decl)) = ast::cast_stmt(decl) else {
        panic!("expected a variable declaration");
    };

    let names: Vec<_> = decl
        .names()
        .unwrap_or_default()
        .iter()
        .filter_map(|name| name.name())
        .map(|name| name.text())
        .collect();

    assert_eq!(vec!["s1", "s2", "s3"], names);
}

#[test]
fn include_paths() {
    for (source, path) in [
        ("#include \"lib/file.inc\"", "lib/file.inc"),
        ("#include <lib/file.inc>", "lib/file.inc"),
    ] {
        let parse = parse_clean(source);
        let root = red::Node::new_root(&parse.tree, 0);
        let include = root.child_nodes().next().expect("an include");

        let Some(Stmt::Include(include)) = ast::cast_stmt(include) else {
            panic!("expected an include in {source:?}");
        };

        assert_eq!(path, include.path());
    }
}

#[test]
fn ast_outline() {
    let expected = "Root\n  StmtVariableDecl\n    ExprNameRef, a => int\n    ExprLiteral, 2";
    assert_eq!(expected, ast_dump("int a = 2"));

    let expected = "Root\n  StmtExpr\n    ExprBinary, +\n      ExprLiteral, 1\n      ExprLiteral, 2";
    assert_eq!(expected, ast_dump("1 + 2"));
}
