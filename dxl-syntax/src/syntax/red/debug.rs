use std::fmt;

use super::{Element, Node, Token};
use crate::syntax::Kind;

impl Node<'_> {
    /// Render this node and everything below it, one element per line and
    /// indented by depth.
    pub fn dump(&self) -> String {
        let mut result = self.to_string();
        dump_children(&mut result, self, 1);
        result
    }
}

fn dump_children(result: &mut String, node: &Node, depth: usize) {
    for child in node.children() {
        result.push('\n');
        result.extend(std::iter::repeat("  ").take(depth));

        match child {
            Element::Node(node) => {
                result.push_str(&node.to_string());
                dump_children(result, &node, depth + 1);
            }

            Element::Token(token) => result.push_str(&token.to_string()),
        }
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node {}@{}..{}", self.kind(), self.start(), self.end())
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Leaf {}@{}..{}", self.kind(), self.start(), self.end())?;

        match self.kind() {
            Kind::End | Kind::Eol => Ok(()),
            _ => write!(f, " \"{}\"", self.text()),
        }
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => fmt::Display::fmt(node, f),
            Self::Token(token) => fmt::Display::fmt(token, f),
        }
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::syntax::green;
    use crate::syntax::red::Node;
    use crate::syntax::Kind;

    #[test]
    fn dumps_nested_nodes() {
        let tree = green::Node::new_node(
            Kind::Root,
            vec![
                green::Node::new_node(Kind::NameRef, vec![green::Node::new_token(Kind::Name, "a")]),
                green::Node::new_token(Kind::End, "\n"),
            ],
        );

        let expected = "Node TREEROOT@0..2\n  Node NAMEREF@0..1\n    Leaf IDENT@0..1 \"a\"\n  Leaf END@1..2";
        assert_eq!(expected, Node::new_root(&tree, 0).dump());
    }
}
