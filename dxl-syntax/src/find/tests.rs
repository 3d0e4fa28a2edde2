use super::{containing_scope, find_definition, find_references, level, node_at_offset, token_at_offset};
use crate::syntax::parse::parse_text;
use crate::syntax::red;
use crate::syntax::{green, Kind};

const NESTED_USE: &str = "\
int cc = 1

int f(int a) {
    if (a > 0) {
        print cc
    }
}

f(cc)
";

const SHADOWED: &str = "\
int x = 1
{
    x = 2
    int x = 3
    x = 4
}
x = 5
";

fn parse_tree(source: &str) -> green::Node {
    let _ = pretty_env_logger::try_init();

    let parse = parse_text(source);
    assert!(parse.errors.is_perfect(), "errors while parsing {source:?}");
    parse.tree
}

fn ranges(tokens: Option<Vec<red::Token>>) -> Option<Vec<std::ops::Range<usize>>> {
    tokens.map(|tokens| tokens.iter().map(red::Token::range).collect())
}

fn name_refs<'g>(node: &red::Node<'g>, acc: &mut Vec<red::Node<'g>>) {
    for child in node.child_nodes() {
        if child.kind() == Kind::NameRef {
            acc.push(child.clone());
        }

        name_refs(&child, acc);
    }
}

#[test]
fn elements_at_offset() {
    let tree = parse_tree(NESTED_USE);
    let root = red::Node::new_root(&tree, 0);

    let token = token_at_offset(&root, 5).map(|token| token.to_string());
    assert_eq!(Some("Leaf IDENT@4..6 \"cc\"".to_string()), token);

    let node = node_at_offset(&root, 5).map(|node| node.to_string());
    assert_eq!(Some("Node NAMEREF@4..6".to_string()), node);

    let node = node_at_offset(&root, 59).map(|node| node.to_string());
    assert_eq!(Some("Node NAMEREF@58..60".to_string()), node);

    assert_eq!(None, token_at_offset(&root, 1000));
    assert_eq!(None, node_at_offset(&root, 1000));
}

#[test]
fn ranges_include_their_end() {
    let tree = parse_tree("ab+c");
    let root = red::Node::new_root(&tree, 0);

    let token = token_at_offset(&root, 2).map(|token| token.to_string());
    assert_eq!(Some("Leaf IDENT@0..2 \"ab\"".to_string()), token);
}

#[test]
fn levels() {
    let tree = parse_tree(NESTED_USE);
    let root = red::Node::new_root(&tree, 0);

    let at = |offset| node_at_offset(&root, offset).expect("a node at the offset");

    assert_eq!(1, level(at(5)));
    assert_eq!(2, level(at(22)));
    assert_eq!(3, level(at(35)));
    assert_eq!(4, level(at(59)));

    let token = token_at_offset(&root, 59).expect("a token at the offset");
    assert_eq!(4, level(token));
}

#[test]
fn containing_scopes() {
    let tree = parse_tree(NESTED_USE);
    let root = red::Node::new_root(&tree, 0);

    let scope = |offset| {
        let node = node_at_offset(&root, offset).expect("a node at the offset");
        containing_scope(&node).kind()
    };

    assert_eq!(Kind::Root, scope(5));
    assert_eq!(Kind::ParamList, scope(22));
    assert_eq!(Kind::StmtBlock, scope(59));
    assert_eq!(Kind::Root, containing_scope(&root).kind());
}

#[test]
fn definition_in_outer_scope() {
    let tree = parse_tree(NESTED_USE);
    let root = red::Node::new_root(&tree, 0);

    let definition = find_definition(&root, 59).map(|token| token.range());
    assert_eq!(Some(4..6), definition);

    let definition = find_definition(&root, 73).map(|token| token.range());
    assert_eq!(Some(4..6), definition);
}

#[test]
fn definition_of_declaration() {
    let tree = parse_tree(NESTED_USE);
    let root = red::Node::new_root(&tree, 0);

    assert_eq!(Some(4..6), find_definition(&root, 5).map(|token| token.range()));
    assert_eq!(Some(16..17), find_definition(&root, 16).map(|token| token.range()));
}

#[test]
fn definition_of_parameter() {
    let tree = parse_tree(NESTED_USE);
    let root = red::Node::new_root(&tree, 0);

    assert_eq!(Some(22..23), find_definition(&root, 35).map(|token| token.range()));
    assert_eq!(Some(16..17), find_definition(&root, 70).map(|token| token.range()));
}

#[test]
fn undeclared_names() {
    let tree = parse_tree(NESTED_USE);
    let root = red::Node::new_root(&tree, 0);

    // `print`
    assert_eq!(None, find_definition(&root, 53));
    assert!(find_references(&root, 53).is_none());

    // the `=` of the first declaration
    assert_eq!(None, find_definition(&root, 8));
}

#[test]
fn references_across_scopes() {
    let tree = parse_tree(NESTED_USE);
    let root = red::Node::new_root(&tree, 0);

    let expected = Some(vec![4..6, 58..60, 72..74]);
    assert_eq!(expected, ranges(find_references(&root, 5)));
    assert_eq!(expected, ranges(find_references(&root, 59)));
}

#[test]
fn references_to_functions_and_parameters() {
    let tree = parse_tree(NESTED_USE);
    let root = red::Node::new_root(&tree, 0);

    assert_eq!(Some(vec![16..17, 70..71]), ranges(find_references(&root, 70)));
    assert_eq!(Some(vec![22..23, 35..36]), ranges(find_references(&root, 22)));
}

#[test]
fn shadowing_hides_the_rest_of_a_block() {
    let tree = parse_tree(SHADOWED);
    let root = red::Node::new_root(&tree, 0);

    assert_eq!(Some(4..5), find_definition(&root, 16).map(|token| token.range()));
    assert_eq!(Some(30..31), find_definition(&root, 41).map(|token| token.range()));
    assert_eq!(Some(4..5), find_definition(&root, 49).map(|token| token.range()));

    assert_eq!(Some(vec![4..5, 16..17, 48..49]), ranges(find_references(&root, 4)));
    assert_eq!(Some(vec![30..31, 40..41]), ranges(find_references(&root, 41)));
}

#[test]
fn definition_by_assignment() {
    let tree = parse_tree("a = 1\nprint a");
    let root = red::Node::new_root(&tree, 0);
    assert_eq!(Some(0..1), find_definition(&root, 13).map(|token| token.range()));

    let tree = parse_tree("a = 1\na = 2\nprint a");
    let root = red::Node::new_root(&tree, 0);
    assert_eq!(Some(6..7), find_definition(&root, 19).map(|token| token.range()));

    let tree = parse_tree("a += 1\nprint a");
    let root = red::Node::new_root(&tree, 0);
    assert_eq!(None, find_definition(&root, 14));
}

#[test]
fn later_declarations_are_invisible() {
    let tree = parse_tree("print a\nint a = 1");
    let root = red::Node::new_root(&tree, 0);
    assert_eq!(None, find_definition(&root, 7));
}

#[test]
fn names_declared_together() {
    let tree = parse_tree("string s1, s2\ns2 = \"x\"");
    let root = red::Node::new_root(&tree, 0);
    assert_eq!(Some(11..13), find_definition(&root, 16).map(|token| token.range()));
}

#[test]
fn references_include_every_use() {
    for source in [NESTED_USE, SHADOWED] {
        let tree = parse_tree(source);
        let root = red::Node::new_root(&tree, 0);

        let mut uses = Vec::new();
        name_refs(&root, &mut uses);

        for name_ref in uses {
            let Some(definition) = find_definition(&root, name_ref.end()) else {
                continue;
            };

            let references = ranges(find_references(&root, definition.end())).unwrap_or_default();
            assert!(
                references.contains(&name_ref.range()),
                "{name_ref} resolves to {definition} but is not among its references"
            );
        }
    }
}
