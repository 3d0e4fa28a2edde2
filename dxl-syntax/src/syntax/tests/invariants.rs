use proptest::{prop_assert, prop_assert_eq, proptest};

use crate::syntax::parse::parse_text;
use crate::syntax::red::{self, Element};
use crate::syntax::Kind;

/// Check that the children of `node` follow each other without gaps and stay
/// within their parent.
fn offsets_are_monotonic(node: &red::Node) -> bool {
    let mut offset = node.start();

    for child in node.children() {
        if child.start() != offset || child.end() > node.end() {
            return false;
        }

        offset = child.end();

        if let Element::Node(child) = child {
            if !offsets_are_monotonic(&child) {
                return false;
            }
        }
    }

    offset == node.end()
}

proptest! {
    #[test]
    fn tree_invariants(s in r"(.|\n)*") {
        let parse = parse_text(&s);

        parse.tree.check_invariants();
        prop_assert_eq!(Kind::Root, parse.tree.kind());
        prop_assert_eq!(s.len(), parse.tree.width());
    }

    #[test]
    fn red_offsets(s in r"(.|\n)*") {
        let parse = parse_text(&s);
        let root = red::Node::new_root(&parse.tree, 0);
        prop_assert!(offsets_are_monotonic(&root));
    }

    #[test]
    fn errors_are_inside_source(s in r".*") {
        let parse = parse_text(&s);
        prop_assert!(parse.errors.iter().all(|error| error.at <= s.len()));
    }
}

#[test]
fn red_offsets_with_base() {
    let parse = parse_text("int a = 1\nint b = a");
    let root = red::Node::new_root(&parse.tree, 100);

    assert_eq!(100..119, root.range());
    assert!(offsets_are_monotonic(&root));
}
