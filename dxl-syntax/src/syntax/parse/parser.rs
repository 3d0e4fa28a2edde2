use log::trace;

use super::event::Event;
use crate::messages::Message;
use crate::syntax::lex::Token;
use crate::syntax::Kind;

/// How many times the parser may look at the same token without consuming
/// anything before it is considered stuck.
const FUEL: u32 = 256;

pub(super) struct Parser<'t> {
    tokens: &'t [Token],
    cursor: usize,
    fuel: u32,
    pub(super) events: Vec<Event>,
}

/// A node which has been opened but not yet closed.
#[must_use]
#[derive(Debug)]
pub(super) struct MarkOpened {
    index: usize,
}

/// A closed node, which may still be wrapped in a new parent with
/// [`Parser::open_before`].
#[derive(Clone, Copy, Debug)]
pub(super) struct MarkClosed {
    index: usize,
    kind: Kind,
}

impl MarkClosed {
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        debug_assert!(tokens.last().is_some_and(|token| token.kind == Kind::Eof));

        Self {
            tokens,
            cursor: 0,
            fuel: FUEL,
            events: Vec::new(),
        }
    }

    pub fn open(&mut self) -> MarkOpened {
        let mark = MarkOpened { index: self.events.len() };
        self.events.push(Event::Placeholder);
        mark
    }

    /// Open a node which will wrap the already closed `closed` node. If that
    /// node was itself wrapped, the outermost wrapper gets wrapped instead.
    pub fn open_before(&mut self, closed: MarkClosed) -> MarkOpened {
        let mark = self.open();
        let mut index = closed.index;

        loop {
            match &mut self.events[index] {
                Event::StartNode { forward_parent: Some(parent), .. } => index = *parent,
                Event::StartNode { forward_parent, .. } => {
                    *forward_parent = Some(mark.index);
                    break;
                }
                event => unreachable!("closed mark points at {event:?}"),
            }
        }

        mark
    }

    pub fn close(&mut self, mark: MarkOpened, kind: Kind) -> MarkClosed {
        self.events[mark.index] = Event::StartNode { kind, forward_parent: None };
        self.events.push(Event::FinishNode);
        MarkClosed { index: mark.index, kind }
    }

    /// Close `mark` as an error node after skipping ahead to something which
    /// likely starts a new statement.
    pub fn synchronize(&mut self, mark: MarkOpened) -> MarkClosed {
        trace!("synchronizing at {}", self.peek_kind());

        while !self.eof()
            && !self.at_any(&[Kind::Semicolon, Kind::KwFor, Kind::KwWhile, Kind::KwReturn, Kind::End])
        {
            self.bump();
        }

        self.close(mark, Kind::ErrorNode)
    }

    pub fn error(&mut self, message: Message) {
        self.events.push(Event::Error(message));
    }

    /// Record that `kind` was expected where something else was found.
    pub fn expected(&mut self, kind: Kind) {
        let got = self.peek_kind();
        self.error(Message::expected(kind, got));
    }

    /// Add the next non-trivia token to the current node.
    pub fn bump(&mut self) {
        self.eat_trivia();

        let kind = self.tokens[self.cursor].kind;
        assert_ne!(Kind::Eof, kind, "bumped past the end of the source");

        self.fuel = FUEL;
        self.cursor += 1;
        self.events.push(Event::AddToken);
    }

    /// Wrap the next token in a node of its own.
    pub fn bump_as(&mut self, kind: Kind) -> MarkClosed {
        let mark = self.open();
        self.bump();
        self.close(mark, kind)
    }

    /// Consume the next token without adding it to the tree.
    pub fn skip(&mut self) {
        self.eat_trivia();
        self.fuel = FUEL;
        self.cursor += 1;
        self.events.push(Event::SkipToken);
    }

    pub fn consume(&mut self, kind: Kind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind, or record an error and leave the
    /// current token alone.
    pub fn expect(&mut self, kind: Kind) -> bool {
        if self.consume(kind) {
            true
        } else {
            self.expected(kind);
            false
        }
    }

    /// The index of the next token, trivia included.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if anything but trivia was consumed since `start`.
    pub fn progressed_since(&self, start: usize) -> bool {
        self.tokens[start..self.cursor].iter().any(|token| !token.kind.is_trivia())
    }

    pub fn peek(&mut self) -> &'t Token {
        self.nth(0)
    }

    pub fn peek_kind(&mut self) -> Kind {
        self.nth(0).kind
    }

    /// Look at the `lookahead`th token after any trivia. Looking past the end
    /// gives the final EOF token.
    pub fn nth(&mut self, lookahead: usize) -> &'t Token {
        self.eat_trivia();

        if self.fuel == 0 {
            panic!("parser is stuck at {}", self.tokens[self.cursor].kind);
        }

        self.fuel -= 1;

        let tokens = self.tokens;
        let mut rest = tokens[self.cursor..].iter().filter(|token| !token.kind.is_trivia());
        match rest.nth(lookahead) {
            Some(token) => token,
            None => &tokens[tokens.len() - 1],
        }
    }

    pub fn at(&mut self, kind: Kind) -> bool {
        self.peek_kind() == kind
    }

    pub fn at_any(&mut self, kinds: &[Kind]) -> bool {
        kinds.contains(&self.peek_kind())
    }

    pub fn at_stmt_end(&mut self) -> bool {
        self.peek_kind().is_stmt_end()
    }

    pub fn at_type_specifier(&mut self) -> bool {
        self.peek().is_type_specifier()
    }

    pub fn eof(&mut self) -> bool {
        self.at(Kind::Eof)
    }

    /// Add every trivia token at the cursor to the current node.
    fn eat_trivia(&mut self) {
        while self.tokens[self.cursor].kind.is_trivia() {
            self.cursor += 1;
            self.events.push(Event::AddToken);
        }
    }
}
