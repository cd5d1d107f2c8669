use super::{
    is_json_space,
    matcher::{Consume, Matcher},
    ParserCore,
};
use crate::{backend::Backend, error::Error, extensions::Extensions};

/// Drives the `{ "key": value, ... }` production.
///
/// Each member is two nested root matchers (one restricted to a string for
/// the key, one for the value) with the colon and comma sub-grammar handled
/// here.
#[derive(Debug)]
pub(crate) struct ObjectMatcher {
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Done,
    /// Expecting the opening `{`.
    Start,
    /// After `{` or (with the trailing-comma extension) after `,`: a `}`
    /// may close the object here.
    FirstKey,
    /// After a `,` in strict mode: a key is required.
    Key,
    /// Between a key and its `:`.
    Colon,
    /// Between a `:` and the member value.
    Value,
    /// After a member value: expecting `,` or `}`.
    Comma,
}

impl ObjectMatcher {
    pub(crate) fn new() -> Self {
        Self {
            state: State::Start,
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
            core.fail(Error::ExpectedObjectMember);
            self.state = State::Done;
            return (None, true);
        };
        match self.state {
            State::Start => {
                debug_assert_eq!(c, '{');
                let res = core.backend.begin_object();
                if core.record(res) {
                    self.state = State::Done;
                    return (None, true);
                }
                self.state = State::FirstKey;
                (Some(Matcher::whitespace()), true)
            }
            State::FirstKey if c == '}' => {
                self.end_object(core);
                (None, true)
            }
            State::FirstKey | State::Key => {
                self.state = State::Colon;
                (Some(Matcher::root(true)), false)
            }
            State::Colon => {
                if is_json_space(c) {
                    return (Some(Matcher::whitespace()), false);
                }
                if c == ':' {
                    self.state = State::Value;
                } else {
                    core.fail(Error::ExpectedColon);
                    self.state = State::Done;
                }
                (None, true)
            }
            State::Value => {
                self.state = State::Comma;
                (Some(Matcher::root(false)), false)
            }
            State::Comma => {
                if is_json_space(c) {
                    return (Some(Matcher::whitespace()), false);
                }
                match c {
                    ',' => {
                        self.state =
                            if core.extension_enabled(Extensions::OBJECT_TRAILING_COMMA) {
                                State::FirstKey
                            } else {
                                State::Key
                            };
                        // Consume the comma and any whitespace before the
                        // next key or the closing brace.
                        (Some(Matcher::whitespace()), true)
                    }
                    '}' => {
                        self.end_object(core);
                        (None, true)
                    }
                    _ => {
                        core.fail(Error::ExpectedObjectMember);
                        self.state = State::Done;
                        (None, true)
                    }
                }
            }
            State::Done => (None, true),
        }
    }

    fn end_object<B: Backend>(&mut self, core: &mut ParserCore<B>) {
        let res = core.backend.end_object();
        core.record(res);
        self.state = State::Done;
    }
}
