//! The matcher polymorphism: one state machine per JSON production, stored
//! inline on the parse stack.

use super::{
    array::ArrayMatcher,
    literal::{Literal, LiteralMatcher},
    number::NumberMatcher,
    object::ObjectMatcher,
    root::RootMatcher,
    string::StringMatcher,
    whitespace::WhitespaceMatcher,
    ParserCore,
};
use crate::{backend::Backend, error::Error};

/// What a matcher reports after seeing one code point: an optional child to
/// push onto the stack, and whether the code point was consumed. An
/// unconsumed code point is re-offered to the new top of the stack.
pub(crate) type Consume = (Option<Matcher>, bool);

/// A production state machine on the parse stack.
///
/// Dispatch is a match on the tag and per-variant state lives inline, so
/// pushing a matcher costs no allocation beyond amortized stack growth. At
/// most one terminal matcher (number, string, literal, whitespace) is live
/// at a time; the structural matchers (array, object) recurse through
/// nested root matchers instead of containing children directly.
#[derive(Debug)]
pub(crate) enum Matcher {
    EndOfInput(EndOfInputMatcher),
    Whitespace(WhitespaceMatcher),
    Root(RootMatcher),
    Array(ArrayMatcher),
    Object(ObjectMatcher),
    Literal(LiteralMatcher),
    Number(NumberMatcher),
    String(StringMatcher),
}

impl Matcher {
    pub(crate) fn end_of_input() -> Self {
        Self::EndOfInput(EndOfInputMatcher::new())
    }

    pub(crate) fn whitespace() -> Self {
        Self::Whitespace(WhitespaceMatcher::new())
    }

    pub(crate) fn root(object_key: bool) -> Self {
        Self::Root(RootMatcher::new(object_key))
    }

    pub(crate) fn array() -> Self {
        Self::Array(ArrayMatcher::new())
    }

    pub(crate) fn object() -> Self {
        Self::Object(ObjectMatcher::new())
    }

    pub(crate) fn literal(kind: Literal) -> Self {
        Self::Literal(LiteralMatcher::new(kind))
    }

    pub(crate) fn number() -> Self {
        Self::Number(NumberMatcher::new())
    }

    pub(crate) fn string(object_key: bool, quote: char) -> Self {
        Self::String(StringMatcher::new(object_key, quote))
    }

    /// Offers one code point (or the end-of-input signal, `None`) to this
    /// matcher.
    pub(crate) fn consume<B: Backend>(
        &mut self,
        core: &mut ParserCore<B>,
        ch: Option<char>,
    ) -> Consume {
        match self {
            Self::EndOfInput(m) => m.consume(core, ch),
            Self::Whitespace(m) => m.consume(core, ch),
            Self::Root(m) => m.consume(core, ch),
            Self::Array(m) => m.consume(core, ch),
            Self::Object(m) => m.consume(core, ch),
            Self::Literal(m) => m.consume(core, ch),
            Self::Number(m) => m.consume(core, ch),
            Self::String(m) => m.consume(core, ch),
        }
    }

    /// True once the matcher has reached its done state; the dispatch loop
    /// pops it before continuing.
    pub(crate) fn is_done(&self) -> bool {
        match self {
            Self::EndOfInput(m) => m.is_done(),
            Self::Whitespace(m) => m.is_done(),
            Self::Root(m) => m.is_done(),
            Self::Array(m) => m.is_done(),
            Self::Object(m) => m.is_done(),
            Self::Literal(m) => m.is_done(),
            Self::Number(m) => m.is_done(),
            Self::String(m) => m.is_done(),
        }
    }
}

/// The sentinel at the bottom of the stack: any content that reaches it is
/// extra input after the top-level value; end of input completes it.
#[derive(Debug)]
pub(crate) struct EndOfInputMatcher {
    done: bool,
}

impl EndOfInputMatcher {
    pub(crate) fn new() -> Self {
        Self { done: false }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.done
    }

    pub(crate) fn consume<B: Backend>(
        &mut self,
        core: &mut ParserCore<B>,
        ch: Option<char>,
    ) -> Consume {
        if ch.is_some() {
            core.fail(Error::UnexpectedExtraInput);
        } else {
            self.done = true;
        }
        (None, true)
    }
}
