use super::{
    literal::Literal,
    matcher::{Consume, Matcher},
    ParserCore,
};
use crate::{backend::Backend, error::Error, extensions::Extensions};

/// Dispatches the first significant character of a value to the matcher for
/// its production.
///
/// The root matcher is done as soon as it has chosen; the child is pushed
/// with the triggering character unconsumed so the child sees it too.
#[derive(Debug)]
pub(crate) struct RootMatcher {
    state: State,
    /// True when this value position is an object key, which restricts the
    /// production to a string.
    object_key: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Done,
    /// Leading whitespace has not been consumed yet.
    Start,
    NewToken,
}

impl RootMatcher {
    pub(crate) fn new(object_key: bool) -> Self {
        Self {
            state: State::Start,
            object_key,
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
        let Some(c) = ch else {
            core.fail(Error::ExpectedToken);
            self.state = State::Done;
            return (None, true);
        };
        match self.state {
            State::Start => {
                self.state = State::NewToken;
                (Some(Matcher::whitespace()), false)
            }
            State::NewToken => {
                self.state = State::Done;
                if self.object_key && c != '"' && c != '\'' {
                    core.fail(Error::ExpectedString);
                    return (None, true);
                }
                match c {
                    '+' if !core.extension_enabled(Extensions::LEADING_PLUS) => {
                        core.fail(Error::ExpectedToken);
                        (None, true)
                    }
                    '+' | '-' | '0'..='9' => (Some(Matcher::number()), false),
                    '\'' if !core.extension_enabled(Extensions::SINGLE_QUOTE_STRING) => {
                        core.fail(Error::ExpectedToken);
                        (None, true)
                    }
                    '"' | '\'' => (Some(Matcher::string(self.object_key, c)), false),
                    't' => (Some(Matcher::literal(Literal::True)), false),
                    'f' => (Some(Matcher::literal(Literal::False)), false),
                    'n' => (Some(Matcher::literal(Literal::Null)), false),
                    '[' => (Some(Matcher::array()), false),
                    '{' => (Some(Matcher::object()), false),
                    _ => {
                        core.fail(Error::ExpectedToken);
                        (None, true)
                    }
                }
            }
            State::Done => (None, true),
        }
    }
}
