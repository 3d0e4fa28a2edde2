mod builder;
mod checks;
mod debug;

pub(crate) use self::builder::Builder;

use std::sync::Arc;

use smol_str::SmolStr;

use super::Kind;

/// A green node is a lossless and immutable syntax tree facilitating sharing.
/// Each node stores its total width in bytes. Tokens are green nodes whose data
/// is their text.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Node {
    /// The total width of this node. This must be the equal to
    /// `self.data.width()`.
    pub(super) width: usize,
    pub(super) kind: Kind,
    pub(super) data: Data,
}

/// A node contains either a string (if it is a token) or a set of children.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Data {
    Node(Arc<[Node]>),
    Token(SmolStr),
}

impl Node {
    pub fn new_node(kind: Kind, children: impl Into<Arc<[Node]>>) -> Self {
        let data = Data::Node(children.into());
        Self { width: data.width(), kind, data }
    }

    pub fn new_token(kind: Kind, text: impl Into<SmolStr>) -> Self {
        let data = Data::Token(text.into());
        Self { width: data.width(), kind, data }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn is_token(&self) -> bool {
        matches!(self.data, Data::Token(_))
    }

    /// The children of this node, or nothing if it is a token.
    pub fn children(&self) -> &[Node] {
        match &self.data {
            Data::Node(children) => children,
            Data::Token(_) => &[],
        }
    }

    /// The text of this token, or `None` if it is a node.
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            Data::Node(_) => None,
            Data::Token(text) => Some(text),
        }
    }

    /// Returns `true` if both nodes share the same children allocation.
    /// Tokens never do.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (&self.data, &other.data) {
            (Data::Node(a), Data::Node(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
