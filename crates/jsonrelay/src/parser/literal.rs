use super::{matcher::Consume, ParserCore};
use crate::{backend::Backend, error::Error};

/// The keyword a [`LiteralMatcher`] is checking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    True,
    False,
    Null,
}

/// Matches one of the fixed keywords `true`, `false`, or `null`.
///
/// The input must match the keyword byte for byte and must not be followed
/// by an alphanumeric character; anything else is an unrecognized token.
#[derive(Debug)]
pub(crate) struct LiteralMatcher {
    state: State,
    /// Bytes of the keyword still to be matched.
    remaining: &'static [u8],
    kind: Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Done,
    /// Comparing the keyword character by character.
    Text,
    /// The keyword is fully matched; the next character must be absent or
    /// non-alphanumeric.
    Boundary,
}

impl LiteralMatcher {
    pub(crate) fn new(kind: Literal) -> Self {
        let remaining: &'static [u8] = match kind {
            Literal::True => b"true",
            Literal::False => b"false",
            Literal::Null => b"null",
        };
        Self {
            state: State::Text,
            remaining,
            kind,
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.state == State::Done
    }

    pub(crate) fn consume<B: Backend>(
        &mut self,
        core: &mut ParserCore<B>,
        ch: Option<char>,
    ) -> Consume {
        match self.state {
            State::Text => {
                let matched = ch
                    .is_some_and(|c| self.remaining.first().is_some_and(|&b| char::from(b) == c));
                if !matched {
                    core.fail(Error::UnrecognizedToken);
                    self.state = State::Done;
                    return (None, true);
                }
                self.remaining = &self.remaining[1..];
                if self.remaining.is_empty() {
                    self.state = State::Boundary;
                }
                (None, true)
            }
            State::Boundary => {
                let mut consumed = true;
                if let Some(c) = ch {
                    if c.is_ascii_alphanumeric() {
                        core.fail(Error::UnrecognizedToken);
                        self.state = State::Done;
                        return (None, true);
                    }
                    // The character belongs to whatever follows the
                    // keyword.
                    consumed = false;
                }
                let res = self.complete(core);
                core.record(res);
                self.state = State::Done;
                (None, consumed)
            }
            State::Done => (None, true),
        }
    }

    fn complete<B: Backend>(&self, core: &mut ParserCore<B>) -> Result<(), Error> {
        match self.kind {
            Literal::True => core.backend.boolean_value(true),
            Literal::False => core.backend.boolean_value(false),
            Literal::Null => core.backend.null_value(),
        }
    }
}
