use std::collections::{HashMap, HashSet};
use std::mem;

use smol_str::SmolStr;

use super::Node;
use crate::syntax::Kind;

/// Nodes with at most this many children, all of them tokens, are shared.
const SHARED_NODE_CHILDREN: usize = 3;

/// Assembles a green tree out of a sequence of start, token and finish calls.
/// Identical tokens and small identical nodes share their storage.
#[derive(Debug, Default)]
pub(crate) struct Builder {
    cache: Cache,

    /// The kind of every open node along with the children of its parent
    parents: Vec<(Kind, Vec<Node>)>,
    children: Vec<Node>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_node(&mut self, kind: Kind) {
        let siblings = mem::take(&mut self.children);
        self.parents.push((kind, siblings));
    }

    pub fn finish_node(&mut self) {
        let (kind, siblings) = self.parents.pop().expect("finished a node which was never started");
        let children = mem::replace(&mut self.children, siblings);
        let node = self.cache.node(kind, children);
        self.children.push(node);
    }

    pub fn token(&mut self, kind: Kind, text: &SmolStr) {
        let token = self.cache.token(kind, text);
        self.children.push(token);
    }

    /// Close the root, which must be the only node still open.
    pub fn finish(mut self) -> Node {
        assert_eq!(1, self.parents.len(), "exactly one node must be open when the tree is done");
        let (kind, siblings) = self.parents.pop().expect("the root is open");
        assert!(siblings.is_empty(), "the root node cannot have siblings");

        Node::new_node(kind, self.children)
    }
}

#[derive(Debug, Default)]
struct Cache {
    tokens: HashMap<(Kind, SmolStr), Node>,
    nodes: HashSet<Node>,
}

impl Cache {
    fn token(&mut self, kind: Kind, text: &SmolStr) -> Node {
        self.tokens
            .entry((kind, text.clone()))
            .or_insert_with(|| Node::new_token(kind, text.clone()))
            .clone()
    }

    fn node(&mut self, kind: Kind, children: Vec<Node>) -> Node {
        let shareable =
            children.len() <= SHARED_NODE_CHILDREN && children.iter().all(Node::is_token);
        let node = Node::new_node(kind, children);

        if !shareable {
            return node;
        }

        if let Some(shared) = self.nodes.get(&node) {
            return shared.clone();
        }

        self.nodes.insert(node.clone());
        node
    }
}

#[cfg(test)]
mod tests {
    use smol_str::SmolStr;

    use super::Builder;
    use crate::syntax::Kind;

    #[test]
    fn nests_nodes() {
        let mut builder = Builder::new();
        builder.start_node(Kind::Root);
        builder.start_node(Kind::NameRef);
        builder.token(Kind::Name, &SmolStr::new("a"));
        builder.finish_node();
        builder.token(Kind::Spaces, &SmolStr::new(" "));
        let root = builder.finish();

        assert_eq!(Kind::Root, root.kind());
        assert_eq!(2, root.width());
        assert_eq!(2, root.children().len());
        assert_eq!(Kind::NameRef, root.children()[0].kind());
        root.check_invariants();
    }

    #[test]
    fn shares_small_nodes() {
        let mut builder = Builder::new();
        builder.start_node(Kind::Root);

        for _ in 0..2 {
            builder.start_node(Kind::NameRef);
            builder.token(Kind::Name, &SmolStr::new("name"));
            builder.finish_node();
        }

        let root = builder.finish();
        let [a, b] = root.children() else {
            panic!("expected two children, got {root:?}");
        };

        assert!(a.ptr_eq(b));
    }

    #[test]
    #[should_panic]
    fn unbalanced() {
        let mut builder = Builder::new();
        builder.start_node(Kind::Root);
        builder.start_node(Kind::StmtExpr);
        let _ = builder.finish();
    }
}
