use super::{Data, Node};

impl Node {
    /// The exact source text this tree was built from.
    pub fn write(&self) -> String {
        let mut result = String::with_capacity(self.width);
        self.write_into(&mut result);
        result
    }

    fn write_into(&self, out: &mut String) {
        match &self.data {
            Data::Node(children) => children.iter().for_each(|child| child.write_into(out)),
            Data::Token(text) => out.push_str(text),
        }
    }

    /// Panic unless every node is as wide as its children together, and every
    /// token is a nonempty leaf of a token kind.
    pub fn check_invariants(&self) {
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            assert_eq!(node.width, node.data.width(), "{} has the wrong width", node.kind);

            match &node.data {
                Data::Node(children) => {
                    assert!(node.kind.is_node(), "{} has children", node.kind);
                    pending.extend(children.iter());
                }

                Data::Token(text) => {
                    assert!(node.kind.is_token(), "{} has text", node.kind);
                    assert!(!text.is_empty(), "{} is empty", node.kind);
                }
            }
        }
    }
}

impl Data {
    pub fn width(&self) -> usize {
        match self {
            Self::Node(children) => children.iter().map(Node::width).sum(),
            Self::Token(text) => text.len(),
        }
    }
}
