use super::{matcher::Consume, ParserCore};
use crate::{
    backend::Backend,
    error::Error,
    escape_buffer::{HexEscapeBuffer, SurrogateAssembler},
};

/// Matches a quoted string, resolving escape sequences and `\uXXXX`
/// surrogate pairs into UTF-8 in the parser's shared output buffer.
///
/// The enclosing quote is `"`, or `'` when the single-quote extension chose
/// this matcher. When the string closes, the buffer is delivered to the
/// backend as a key or a string value depending on where the string
/// appeared.
#[derive(Debug)]
pub(crate) struct StringMatcher {
    state: State,
    object_key: bool,
    /// The quote character that opened the string.
    quote: char,
    hex: HexEscapeBuffer,
    surrogates: SurrogateAssembler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Done,
    /// Expecting the opening quote.
    Start,
    /// Ordinary string content.
    Normal,
    /// Just saw a `\`.
    Escape,
    /// Inside the four hex digits of a `\uXXXX` escape.
    UnicodeEscape,
}

impl StringMatcher {
    pub(crate) fn new(object_key: bool, quote: char) -> Self {
        Self {
            state: State::Start,
            object_key,
            quote,
            hex: HexEscapeBuffer::default(),
            surrogates: SurrogateAssembler::default(),
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
            core.fail(Error::ExpectedCloseQuote);
            self.state = State::Done;
            return (None, true);
        };
        match self.state {
            State::Start => {
                if c == self.quote {
                    debug_assert!(!self.surrogates.is_partial());
                    core.str_buf.clear();
                    self.state = State::Normal;
                } else {
                    core.fail(Error::ExpectedToken);
                    self.state = State::Done;
                }
            }
            State::Normal => self.normal(core, c),
            State::Escape => self.escape(core, c),
            State::UnicodeEscape => self.unicode_escape(core, c),
            State::Done => {}
        }
        (None, true)
    }

    fn normal<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) {
        if c == self.quote {
            if self.surrogates.is_partial() {
                // A high surrogate escape was never given its partner.
                core.fail(Error::BadUnicodeCodePoint);
                self.state = State::Done;
                return;
            }
            let res = core.emit_string(self.object_key);
            core.record(res);
            self.state = State::Done;
            return;
        }
        if c == '\\' {
            self.state = State::Escape;
            return;
        }
        if c <= '\u{1F}' {
            // Control characters U+0000 through U+001F must be escaped.
            core.fail(Error::BadUnicodeCodePoint);
            self.state = State::Done;
            return;
        }
        core.str_buf.push(c);
    }

    fn escape<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) {
        let resolved = match c {
            '"' | '/' | '\\' => c,
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => {
                self.hex.reset();
                self.state = State::UnicodeEscape;
                return;
            }
            _ => {
                core.fail(Error::InvalidEscapeChar);
                self.state = State::Done;
                return;
            }
        };
        core.str_buf.push(resolved);
        self.state = State::Normal;
    }

    fn unicode_escape<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) {
        match self.hex.feed(c) {
            Ok(Some(unit)) => {
                if let Err(err) = self.surrogates.push(unit, &mut core.str_buf) {
                    core.fail(err);
                    self.state = State::Done;
                } else {
                    self.state = State::Normal;
                }
            }
            Ok(None) => {}
            Err(err) => {
                core.fail(err);
                self.state = State::Done;
            }
        }
    }
}
