use std::mem;

use crate::errors::{Error, Errors};
use crate::messages::Message;
use crate::syntax::green::{self, Builder};
use crate::syntax::lex::Token;
use crate::syntax::Kind;

/// The parser describes the tree it found as a flat list of events, which
/// [`build`] then turns into a green tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Event {
    /// Start a node. If `forward_parent` is set, the event at that index is
    /// the start of a node which wraps this one.
    StartNode {
        kind: Kind,
        forward_parent: Option<usize>,
    },
    FinishNode,
    /// Add the next token to the current node.
    AddToken,
    /// Consume the next token without adding it to the tree.
    SkipToken,
    Error(Message),
    /// An opened node which has not been closed yet, or a start event which
    /// was already consumed as part of a forward parent chain.
    Placeholder,
}

pub(super) fn build(tokens: &[Token], mut events: Vec<Event>) -> (green::Node, Errors) {
    let mut builder = Builder::new();
    let mut errors = Errors::new();

    let mut cursor = 0;
    let mut offset = 0;
    let mut parents = Vec::new();

    // The root is finished by `Builder::finish`.
    assert_eq!(Some(Event::FinishNode), events.pop(), "the root must be closed last");

    for index in 0..events.len() {
        match mem::replace(&mut events[index], Event::Placeholder) {
            Event::StartNode { kind, forward_parent } => {
                parents.push(kind);

                let mut current = index;
                let mut next = forward_parent;

                while let Some(parent) = next {
                    assert!(parent > current, "forward parents must point forwards");
                    current = parent;

                    match mem::replace(&mut events[parent], Event::Placeholder) {
                        Event::StartNode { kind, forward_parent } => {
                            parents.push(kind);
                            next = forward_parent;
                        }

                        event => unreachable!("forward parent links to {event:?}"),
                    }
                }

                for kind in parents.drain(..).rev() {
                    builder.start_node(kind);
                }
            }

            Event::FinishNode => builder.finish_node(),

            Event::AddToken => {
                let token = &tokens[cursor];
                builder.token(token.kind, &token.text);
                offset += token.len();
                cursor += 1;
            }

            Event::SkipToken => {
                offset += tokens[cursor].len();
                cursor += 1;
            }

            Event::Error(message) => {
                errors.add(Error::new(message.severity, offset, message.text));
            }

            Event::Placeholder => {}
        }
    }

    assert_eq!(tokens.len(), cursor, "every token must be consumed");

    (builder.finish(), errors)
}

#[cfg(test)]
mod tests {
    use super::{build, Event};
    use crate::syntax::lex::tokenize;
    use crate::syntax::Kind;

    fn start(kind: Kind) -> Event {
        Event::StartNode { kind, forward_parent: None }
    }

    #[test]
    fn forward_parents_wrap_earlier_nodes() {
        let tokens = tokenize("f x");
        let events = vec![
            start(Kind::Root),
            Event::StartNode { kind: Kind::NameRef, forward_parent: Some(4) },
            Event::AddToken,
            Event::FinishNode,
            start(Kind::ExprCall),
            Event::AddToken,
            Event::AddToken,
            Event::FinishNode,
            Event::SkipToken,
            Event::FinishNode,
        ];

        let (tree, errors) = build(&tokens.tokens, events);
        assert!(errors.is_empty());
        assert_eq!(
            r#"(TREEROOT (EXPRCALL (NAMEREF IDENT"f") SPACES" " IDENT"x"))"#,
            format!("{tree:?}")
        );
    }

    #[test]
    #[should_panic]
    fn unconsumed_tokens() {
        let tokens = tokenize("a");
        let _ = build(&tokens.tokens, vec![start(Kind::Root), Event::FinishNode]);
    }
}
