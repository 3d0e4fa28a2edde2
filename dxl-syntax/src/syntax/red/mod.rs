//! The red tree is a view of a green tree which knows the absolute offset of
//! every node and token, as well as their parents. Red nodes are created on
//! the fly while walking the tree and are cheap to throw away.

mod debug;

use std::rc::Rc;

use super::{green, Kind};
use crate::source::Span;

/// A node along with its offset and parent.
#[derive(Clone)]
pub struct Node<'g>(Rc<NodeData<'g>>);

struct NodeData<'g> {
    green: &'g green::Node,
    offset: usize,
    parent: Option<Node<'g>>,
}

/// A token along with its offset and parent.
#[derive(Clone)]
pub struct Token<'g> {
    green: &'g green::Node,
    offset: usize,
    parent: Node<'g>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Element<'g> {
    Node(Node<'g>),
    Token(Token<'g>),
}

impl<'g> Node<'g> {
    /// View `green` as the root of a tree starting at `offset`.
    pub fn new_root(green: &'g green::Node, offset: usize) -> Self {
        Self(Rc::new(NodeData { green, offset, parent: None }))
    }

    pub fn kind(&self) -> Kind {
        self.0.green.kind()
    }

    pub fn green(&self) -> &'g green::Node {
        self.0.green
    }

    pub fn start(&self) -> usize {
        self.0.offset
    }

    pub fn end(&self) -> usize {
        self.0.offset + self.0.green.width()
    }

    pub fn range(&self) -> Span {
        self.start()..self.end()
    }

    /// The source text covered by this node.
    pub fn text(&self) -> String {
        self.0.green.write()
    }

    pub fn parent(&self) -> Option<&Node<'g>> {
        self.0.parent.as_ref()
    }

    pub fn children(&self) -> impl Iterator<Item = Element<'g>> + '_ {
        let mut offset = self.start();

        self.0.green.children().iter().map(move |child| {
            let start = offset;
            offset += child.width();

            if child.is_token() {
                Element::Token(Token { green: child, offset: start, parent: self.clone() })
            } else {
                Element::Node(Self(Rc::new(NodeData {
                    green: child,
                    offset: start,
                    parent: Some(self.clone()),
                })))
            }
        })
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = Node<'g>> + '_ {
        self.children().filter_map(Element::into_node)
    }

    pub fn child_tokens(&self) -> impl Iterator<Item = Token<'g>> + '_ {
        self.children().filter_map(Element::into_token)
    }

    /// Every node above this one, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = Node<'g>> {
        std::iter::successors(self.parent().cloned(), |node| node.parent().cloned())
    }

    /// Every node which starts before this one among the children of its
    /// ancestors. The children of the nearest ancestor come first, each
    /// generation from last to first.
    pub fn previous(&self) -> impl Iterator<Item = Node<'g>> {
        let start = self.start();

        self.ancestors().flat_map(move |ancestor| {
            let mut earlier: Vec<_> =
                ancestor.child_nodes().filter(|child| child.start() < start).collect();
            earlier.reverse();
            earlier
        })
    }
}

impl<'g> Token<'g> {
    pub fn kind(&self) -> Kind {
        self.green.kind()
    }

    pub fn green(&self) -> &'g green::Node {
        self.green
    }

    pub fn text(&self) -> &'g str {
        self.green.text().unwrap_or_default()
    }

    pub fn start(&self) -> usize {
        self.offset
    }

    pub fn end(&self) -> usize {
        self.offset + self.green.width()
    }

    pub fn range(&self) -> Span {
        self.start()..self.end()
    }

    pub fn parent(&self) -> &Node<'g> {
        &self.parent
    }

    /// Every node above this token, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = Node<'g>> {
        std::iter::successors(Some(self.parent.clone()), |node| node.parent().cloned())
    }
}

impl<'g> Element<'g> {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Node(node) => node.kind(),
            Self::Token(token) => token.kind(),
        }
    }

    pub fn start(&self) -> usize {
        match self {
            Self::Node(node) => node.start(),
            Self::Token(token) => token.start(),
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Self::Node(node) => node.end(),
            Self::Token(token) => token.end(),
        }
    }

    /// Every node above this element, nearest first.
    pub fn ancestors(&self) -> Box<dyn Iterator<Item = Node<'g>> + 'g> {
        match self {
            Self::Node(node) => Box::new(node.ancestors()),
            Self::Token(token) => Box::new(token.ancestors()),
        }
    }

    pub fn into_node(self) -> Option<Node<'g>> {
        match self {
            Self::Node(node) => Some(node),
            Self::Token(_) => None,
        }
    }

    pub fn into_token(self) -> Option<Token<'g>> {
        match self {
            Self::Node(_) => None,
            Self::Token(token) => Some(token),
        }
    }
}

impl<'g> From<Node<'g>> for Element<'g> {
    fn from(node: Node<'g>) -> Self {
        Self::Node(node)
    }
}

impl<'g> From<Token<'g>> for Element<'g> {
    fn from(token: Token<'g>) -> Self {
        Self::Token(token)
    }
}

/// Red nodes are equal if they cover the same range as the same kind.
impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.range() == other.range()
    }
}

impl Eq for Node<'_> {}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.range() == other.range()
    }
}

impl Eq for Token<'_> {}
