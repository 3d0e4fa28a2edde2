use std::fmt;

use super::{Data, Node};
use crate::syntax::red;

impl Node {
    /// Render this tree with one line per node and token, as in
    /// `Node TREEROOT@0..5`.
    pub fn dump(&self) -> String {
        red::Node::new_root(self, 0).dump()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Data::Token(lexeme) => write!(f, "{}{lexeme:?}", self.kind),
            Data::Node(children) => {
                write!(f, "({}", self.kind)?;

                for child in children.iter() {
                    write!(f, " {child:?}")?;
                }

                write!(f, ")")
            }
        }
    }
}
