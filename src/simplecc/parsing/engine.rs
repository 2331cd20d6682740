//! Pushdown automaton driven by the grammar tables
//!
//!     The parser keeps a stack of derivation frames. Each frame is one nonterminal
//!     being recognized: its DFA, the current state in that DFA and the tree node
//!     collecting its children. The stack replaces recursion, so nesting depth is only
//!     limited by memory.
//!
//!     Tokens are fed one at a time. For each token the top frame's arcs are tried in
//!     table order:
//!         - an arc on the token's own label shifts it into the current node
//!         - an arc on a nonterminal whose FIRST set holds the label predicts that
//!           nonterminal: a new frame is pushed and the same token is tried again
//!     With no usable arc, an accepting frame is completed (popped into its parent) and
//!     the token retried; a non-accepting frame rejects the token.
//!
//!     After a shift, every frame that has reached an accept-only state is popped at
//!     once. When the start frame pops the tree is complete.

use super::classify::classify;
use super::error::ParseError;
use crate::simplecc::cst::{Node, Nonterminal};
use crate::simplecc::grammar::{Dfa, Grammar, LabelId, NonterminalId, Symbol};
use crate::simplecc::token::{Location, TokenInfo};

/// Outcome of feeding one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The token was shifted and the parse continues.
    Consumed,
    /// The token completed the start symbol; the tree can be taken.
    Done,
}

struct Frame<'g> {
    dfa: &'g Dfa,
    state: usize,
    node: Nonterminal,
}

#[derive(Debug)]
enum Status {
    Active,
    Done,
    Failed(ParseError),
}

enum Action<'g> {
    Shift(usize),
    Push {
        target: usize,
        symbol: NonterminalId,
        dfa: &'g Dfa,
    },
    Pop,
    Reject,
}

/// A single-use parser over a shared grammar.
pub struct Parser<'g> {
    grammar: &'g Grammar,
    stack: Vec<Frame<'g>>,
    root: Option<Node>,
    status: Status,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        let start = grammar.start();
        Self {
            grammar,
            stack: vec![Frame {
                dfa: grammar.dfa_for(start),
                state: 0,
                node: Nonterminal::new(start, Location::default()),
            }],
            root: None,
            status: Status::Active,
        }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Number of open derivation frames.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_done(&self) -> bool {
        matches!(self.status, Status::Done)
    }

    /// The error that stopped the parse, if any.
    pub fn error(&self) -> Option<&ParseError> {
        match &self.status {
            Status::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Hand the finished tree to the caller. `None` until the parse is done, and
    /// after the tree has been taken once.
    pub fn take_root(&mut self) -> Option<Node> {
        self.root.take()
    }

    /// Feed the next token.
    ///
    /// Once the parse is done any further token is excess input. Once it has failed
    /// the same error is returned for every call.
    pub fn feed(&mut self, token: &TokenInfo) -> Result<Step, ParseError> {
        match &self.status {
            Status::Active => {}
            Status::Done => return Err(ParseError::excess_input(token)),
            Status::Failed(err) => return Err(err.clone()),
        }

        let Some(label) = classify(self.grammar, token.kind, &token.text) else {
            return Err(self.fail(ParseError::lexical_mismatch(token)));
        };

        loop {
            match self.next_action(label) {
                Action::Shift(target) => {
                    self.shift(token, target);
                    return Ok(self.collapse());
                }
                Action::Push {
                    target,
                    symbol,
                    dfa,
                } => self.push(target, symbol, dfa, token.location),
                Action::Pop => {
                    self.pop();
                    if self.stack.is_empty() {
                        return Err(self.fail(ParseError::excess_input(token)));
                    }
                }
                Action::Reject => return Err(self.fail(ParseError::unexpected_token(token))),
            }
        }
    }

    fn next_action(&self, label: LabelId) -> Action<'g> {
        let Some(top) = self.stack.last() else {
            return Action::Reject;
        };
        let state = top.dfa.state(top.state);
        for arc in state.arcs() {
            if arc.label == label {
                return Action::Shift(arc.target);
            }
            if let Symbol::Nonterminal(symbol) = self.grammar.label_at(arc.label).symbol() {
                let dfa = self.grammar.dfa_for(symbol);
                if dfa.first_contains(label) {
                    return Action::Push {
                        target: arc.target,
                        symbol,
                        dfa,
                    };
                }
            }
        }
        if state.is_accepting() {
            Action::Pop
        } else {
            Action::Reject
        }
    }

    fn shift(&mut self, token: &TokenInfo, target: usize) {
        if let Some(top) = self.stack.last_mut() {
            log::trace!(
                "shift {} {:?} in {} state {} -> {}",
                token.kind,
                token.text,
                top.dfa.name(),
                top.state,
                target
            );
            top.node
                .add_child(Node::terminal(token.kind, token.text.clone(), token.location));
            top.state = target;
        }
    }

    fn push(&mut self, target: usize, symbol: NonterminalId, dfa: &'g Dfa, location: Location) {
        if let Some(top) = self.stack.last_mut() {
            top.state = target;
        }
        log::trace!("push {} at {}", dfa.name(), location);
        self.stack.push(Frame {
            dfa,
            state: 0,
            node: Nonterminal::new(symbol, location),
        });
    }

    fn pop(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        log::trace!("pop {}", frame.dfa.name());
        match self.stack.last_mut() {
            Some(parent) => parent.node.add_child(frame.node.into()),
            None => self.root = Some(frame.node.into()),
        }
    }

    /// Pop every frame whose derivation cannot be extended.
    fn collapse(&mut self) -> Step {
        while let Some(top) = self.stack.last() {
            if !top.dfa.state(top.state).is_accept_only() {
                return Step::Consumed;
            }
            self.pop();
        }
        log::debug!("parse of {} complete", self.grammar.name());
        self.status = Status::Done;
        Step::Done
    }

    fn fail(&mut self, err: ParseError) -> ParseError {
        log::debug!("parse failed: {}", err);
        self.stack.clear();
        self.root = None;
        self.status = Status::Failed(err.clone());
        err
    }
}

/// Parse a whole token sequence with a fresh parser.
///
/// Feeding stops at the first error or as soon as the start symbol is complete;
/// tokens after that point are ignored. Running out of tokens first is
/// [IncompleteInput](super::ParseErrorKind::IncompleteInput), located at the last token.
pub fn parse_tokens<'t, I>(grammar: &Grammar, tokens: I) -> Result<Node, ParseError>
where
    I: IntoIterator<Item = &'t TokenInfo>,
{
    let mut parser = Parser::new(grammar);
    let mut last = None;
    for token in tokens {
        last = Some(token);
        if parser.feed(token)? == Step::Done {
            return parser
                .take_root()
                .ok_or_else(|| ParseError::incomplete_input(Some(token)));
        }
    }
    let err = ParseError::incomplete_input(last);
    log::debug!("parse failed: {}", err);
    Err(err)
}
