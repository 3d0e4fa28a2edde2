//! The parser turns tokens into a list of [events](event::Event), which are
//! then assembled into a green tree. Syntax errors never stop the parser; they
//! are collected alongside the tree, which always covers the entire source.

mod event;
mod expressions;
mod grammar;
mod parser;

use log::debug;

use self::parser::Parser;
use super::green;
use super::lex::{tokenize, Tokens};
use crate::errors::Errors;

/// The result of parsing a source text.
#[derive(Clone, Debug)]
pub struct Parse {
    pub tree: green::Node,
    pub errors: Errors,
}

pub fn parse(tokens: &Tokens) -> Parse {
    debug!("parsing {} tokens", tokens.len());

    let mut parser = Parser::new(&tokens.tokens);
    grammar::root(&mut parser);

    let (tree, errors) = event::build(&tokens.tokens, parser.events);

    debug!(
        "parsed with {} errors and {} warnings",
        errors.num_errors(),
        errors.num_warnings()
    );

    Parse { tree, errors }
}

pub fn parse_text(text: &str) -> Parse {
    parse(&tokenize(text))
}

#[cfg(test)]
mod tests {
    use proptest::{prop_assert_eq, proptest};

    use super::event::{self, Event};
    use super::grammar;
    use super::parser::Parser;
    use crate::syntax::lex::tokenize;
    use crate::syntax::Kind;

    proptest! {
        #[test]
        fn every_error_event_is_reported(s in r"(.|\n)*") {
            let tokens = tokenize(&s);
            let mut parser = Parser::new(&tokens.tokens);
            grammar::root(&mut parser);

            let reported = parser
                .events
                .iter()
                .filter(|event| matches!(event, Event::Error(_)))
                .count();

            let (tree, errors) = event::build(&tokens.tokens, parser.events);
            prop_assert_eq!(reported, errors.len());
            prop_assert_eq!(Kind::Root, tree.kind());
        }
    }
}
