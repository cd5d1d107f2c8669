use super::{matcher::Consume, ParserCore};
use crate::{backend::Backend, error::Error, extensions::Extensions};

/// Consumes whitespace between tokens, updating the row number for the
/// various combinations of CR and LF. When the matching extensions are
/// enabled it also consumes `#`, `//`, and `/* ... */` comments.
#[derive(Debug)]
pub(crate) struct WhitespaceMatcher {
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Done,
    /// Ordinary whitespace scanning.
    Body,
    /// Just saw a CR; an immediately following LF belongs to the same line
    /// break.
    CrLf,
    /// Inside a `#` or `//` comment.
    SingleLineComment,
    /// Just saw a `/`; the next character selects the comment kind.
    CommentStart,
    /// Inside `/* ... */`.
    MultiLineCommentBody,
    /// Saw a `*` inside a multi-line comment.
    MultiLineCommentEnding,
    /// Saw a CR inside a multi-line comment.
    MultiLineCommentCrLf,
}

impl WhitespaceMatcher {
    pub(crate) fn new() -> Self {
        Self { state: State::Body }
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
            self.state = State::Done;
            return (None, true);
        };
        match self.state {
            State::CrLf => {
                self.state = State::Body;
                if crlf(core, c) {
                    (None, true)
                } else {
                    self.consume_body(core, c)
                }
            }
            State::Body => self.consume_body(core, c),
            State::CommentStart => self.consume_comment_start(core, c),
            State::MultiLineCommentEnding => {
                debug_assert!(core.extension_enabled(Extensions::MULTI_LINE_COMMENTS));
                self.state = if c == '/' {
                    State::Body
                } else {
                    State::MultiLineCommentBody
                };
                (None, true)
            }
            State::MultiLineCommentCrLf => {
                self.state = State::MultiLineCommentBody;
                if crlf(core, c) {
                    (None, true)
                } else {
                    self.multi_line_comment_body(core, c)
                }
            }
            State::MultiLineCommentBody => self.multi_line_comment_body(core, c),
            State::SingleLineComment => {
                if c == '\r' || c == '\n' {
                    // The line break ends the comment. Back to ordinary
                    // whitespace handling, which retries the character.
                    self.state = State::Body;
                    (None, false)
                } else {
                    (None, true)
                }
            }
            State::Done => (None, true),
        }
    }

    fn consume_body<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) -> Consume {
        match c {
            ' ' | '\t' => (None, true),
            '\r' => {
                core.advance_row();
                self.state = State::CrLf;
                (None, true)
            }
            '\n' => {
                core.advance_row();
                (None, true)
            }
            '#' => {
                if !core.extension_enabled(Extensions::BASH_COMMENTS) {
                    return self.stop_retry();
                }
                self.state = State::SingleLineComment;
                (None, true)
            }
            '/' => {
                if !core.extension_enabled(
                    Extensions::SINGLE_LINE_COMMENTS | Extensions::MULTI_LINE_COMMENTS,
                ) {
                    return self.stop_retry();
                }
                self.state = State::CommentStart;
                (None, true)
            }
            _ => self.stop_retry(),
        }
    }

    /// An initial `/` has been seen; the character after it selects a `//`
    /// comment, a `/* */` comment, or is an error.
    fn consume_comment_start<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) -> Consume {
        if c == '/' && core.extension_enabled(Extensions::SINGLE_LINE_COMMENTS) {
            self.state = State::SingleLineComment;
        } else if c == '*' && core.extension_enabled(Extensions::MULTI_LINE_COMMENTS) {
            self.state = State::MultiLineCommentBody;
        } else {
            core.fail(Error::ExpectedToken);
            self.state = State::Done;
        }
        (None, true)
    }

    /// Like `consume_body` except that commented characters are swallowed
    /// too; a `*` may begin the end of the comment.
    fn multi_line_comment_body<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) -> Consume {
        match c {
            '*' => self.state = State::MultiLineCommentEnding,
            '\r' => {
                core.advance_row();
                self.state = State::MultiLineCommentCrLf;
            }
            '\n' => core.advance_row(),
            _ => {}
        }
        (None, true)
    }

    /// Stops the matcher and retries the current character in the parent.
    fn stop_retry(&mut self) -> Consume {
        self.state = State::Done;
        (None, false)
    }
}

/// Second character of a CR/LF pair. Returns true if `c` is the LF, which
/// only resets the column: the row was already advanced for the CR.
fn crlf<B: Backend>(core: &mut ParserCore<B>, c: char) -> bool {
    if c != '\n' {
        return false;
    }
    core.reset_column();
    true
}
