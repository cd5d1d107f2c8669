use super::{
    is_json_space,
    matcher::{Consume, Matcher},
    ParserCore,
};
use crate::{backend::Backend, error::Error, extensions::Extensions};

/// Drives the `[ value, value, ... ]` production.
///
/// Members are parsed by nested root matchers; this matcher owns the comma
/// and closing-bracket sub-grammar and the begin/end notifications.
#[derive(Debug)]
pub(crate) struct ArrayMatcher {
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Done,
    /// Expecting the opening `[`.
    Start,
    /// After `[` or (with the trailing-comma extension) after `,`: a `]`
    /// may close the array here.
    FirstMember,
    /// After a `,` in strict mode: a member is required.
    Member,
    /// After a member: expecting `,` or `]`.
    Comma,
}

impl ArrayMatcher {
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
            core.fail(Error::ExpectedArrayMember);
            self.state = State::Done;
            return (None, true);
        };
        match self.state {
            State::Start => {
                debug_assert_eq!(c, '[');
                let res = core.backend.begin_array();
                if core.record(res) {
                    self.state = State::Done;
                    return (None, true);
                }
                self.state = State::FirstMember;
                // Consume the bracket and any whitespace before the first
                // member or the closing bracket.
                (Some(Matcher::whitespace()), true)
            }
            State::FirstMember if c == ']' => {
                self.end_array(core);
                (None, true)
            }
            State::Member if c == ']' => {
                // A comma promised another member.
                core.fail(Error::ExpectedArrayMember);
                self.state = State::Done;
                (None, true)
            }
            State::FirstMember | State::Member => {
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
                            if core.extension_enabled(Extensions::ARRAY_TRAILING_COMMA) {
                                State::FirstMember
                            } else {
                                State::Member
                            };
                        (Some(Matcher::whitespace()), true)
                    }
                    ']' => {
                        self.end_array(core);
                        (None, true)
                    }
                    _ => {
                        core.fail(Error::ExpectedArrayMember);
                        self.state = State::Done;
                        (None, true)
                    }
                }
            }
            State::Done => (None, true),
        }
    }

    fn end_array<B: Backend>(&mut self, core: &mut ParserCore<B>) {
        let res = core.backend.end_array();
        core.record(res);
        self.state = State::Done;
    }
}
