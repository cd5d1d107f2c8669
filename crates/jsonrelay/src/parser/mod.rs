//! The streaming push parser: a stack of per-production state machines
//! ("matchers") driven one code point at a time.
//!
//! Bytes arrive through [`Parser::input`], pass through the incremental
//! UTF-8 decoder, and each resulting code point is offered to the topmost
//! matcher on the parse stack. A matcher may consume the code point, push a
//! child matcher, or both; a code point that was not consumed is re-offered
//! to the new top of the stack. Matchers that reach their done state are
//! popped. [`Parser::eof`] drains the stack with an end-of-input signal and
//! returns the backend's result.

mod array;
mod literal;
mod matcher;
mod number;
mod object;
mod root;
mod string;
mod whitespace;


use alloc::{string::String, vec::Vec};

use crate::{
    backend::Backend, coord::Coord, error::Error, extensions::Extensions, utf8::Utf8Decoder,
};
use self::matcher::Matcher;

/// The maximum depth to which the parse stack may grow. Bounds the parser's
/// memory on hostile input; reasonable documents stay far below it.
const MAX_STACK_DEPTH: usize = 200;

/// The whitespace JSON permits between tokens.
pub(crate) fn is_json_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Parser state shared with the matchers: everything except the stack
/// itself, so that the matcher being driven can borrow it alongside.
#[derive(Debug)]
pub(crate) struct ParserCore<B> {
    pub(crate) backend: B,
    extensions: Extensions,
    error: Option<Error>,
    pos: Coord,
    matcher_pos: Coord,
    /// Output buffer for the active string matcher. Reused across strings
    /// so that scanning a string allocates only when it outgrows the
    /// previous high-water mark.
    pub(crate) str_buf: String,
}

impl<B: Backend> ParserCore<B> {
    fn new(backend: B, extensions: Extensions) -> Self {
        Self {
            backend,
            extensions,
            error: None,
            pos: Coord::default(),
            matcher_pos: Coord::default(),
            str_buf: String::new(),
        }
    }

    pub(crate) fn extension_enabled(&self, flag: Extensions) -> bool {
        self.extensions.intersects(flag)
    }

    pub(crate) fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Records an error. The first error wins and poisons the parse.
    pub(crate) fn fail(&mut self, err: Error) {
        self.error.get_or_insert(err);
    }

    /// Folds a backend notification result into the parser state, returning
    /// true if the parser is now poisoned.
    pub(crate) fn record(&mut self, res: Result<(), Error>) -> bool {
        if let Err(err) = res {
            self.fail(err);
        }
        self.has_error()
    }

    /// Advances to the next row. The column becomes 0 because the dispatch
    /// loop increments it once per consumed code point, which makes the
    /// first character of the new line read as column 1.
    pub(crate) fn advance_row(&mut self) {
        self.pos.column = 0;
        self.pos.line += 1;
    }

    /// Resets the column without touching the row (the LF of a CR-LF pair).
    pub(crate) fn reset_column(&mut self) {
        self.pos.column = 0;
    }

    fn advance_column(&mut self) {
        self.pos.column += 1;
    }

    /// Delivers the accumulated string buffer to the backend as either an
    /// object key or a string value.
    pub(crate) fn emit_string(&mut self, object_key: bool) -> Result<(), Error> {
        if object_key {
            self.backend.key(&self.str_buf)
        } else {
            self.backend.string_value(&self.str_buf)
        }
    }
}

/// A streaming, incremental JSON parser.
///
/// Created with a [`Backend`] and a set of [`Extensions`]; fed UTF-8 bytes
/// in arbitrary chunks; finalized with [`Parser::eof`], which returns the
/// backend's result or the first error.
///
/// The first error poisons the parser: subsequent [`Parser::input`] calls
/// discard their input, no further backend notifications are issued, and
/// [`Parser::eof`] returns the saved error.
///
/// # Examples
///
/// ```rust
/// use jsonrelay::{DomBackend, Extensions, Parser, Value};
///
/// let mut parser = Parser::new(DomBackend::new(), Extensions::empty());
/// parser.input(b"[1, 2, ").input(b"3]");
/// assert_eq!(
///     parser.eof().unwrap(),
///     Some(Value::Array(vec![
///         Value::UInt(1),
///         Value::UInt(2),
///         Value::UInt(3)
///     ]))
/// );
/// ```
#[derive(Debug)]
pub struct Parser<B> {
    core: ParserCore<B>,
    stack: Vec<Matcher>,
    decoder: Utf8Decoder,
}

impl<B: Backend> Parser<B> {
    #[must_use]
    pub fn new(backend: B, extensions: Extensions) -> Self {
        let mut stack = Vec::with_capacity(16);
        // The end-of-input matcher at the bottom of the stack ensures the
        // input holds exactly one top-level value; the whitespace matcher
        // above it permits trailing whitespace after that value.
        stack.push(Matcher::end_of_input());
        stack.push(Matcher::whitespace());
        stack.push(Matcher::root(false));
        Self {
            core: ParserCore::new(backend, extensions),
            stack,
            decoder: Utf8Decoder::new(),
        }
    }

    /// Parses a chunk of JSON input.
    ///
    /// May be called any number of times as data arrives; a chunk may end
    /// anywhere, including between the bytes of a multi-byte UTF-8
    /// sequence. Once the parser is poisoned this is a no-op.
    pub fn input(&mut self, src: &[u8]) -> &mut Self {
        if self.core.has_error() {
            return self;
        }
        for &byte in src {
            match self.decoder.push(byte) {
                Ok(Some(code_point)) => {
                    self.consume_code_point(code_point);
                    if self.core.has_error() {
                        break;
                    }
                    self.core.advance_column();
                }
                Ok(None) => {}
                Err(err) => {
                    self.core.fail(err);
                    break;
                }
            }
        }
        self
    }

    /// Signals that the input is complete.
    ///
    /// Every matcher still on the stack is given the end-of-input signal;
    /// if the document is well formed the backend's result is returned,
    /// otherwise the first error.
    pub fn eof(mut self) -> Result<B::Result, Error> {
        if !self.core.has_error() && self.decoder.is_partial() {
            // The final chunk ended inside a multi-byte sequence.
            self.core.fail(Error::BadUnicodeCodePoint);
        }
        while !self.core.has_error() {
            let Some(mut top) = self.stack.pop() else {
                break;
            };
            let (child, consumed) = top.consume(&mut self.core, None);
            debug_assert!(top.is_done() || self.core.has_error());
            debug_assert!(consumed);
            debug_assert!(child.is_none());
            let _ = (child, consumed);
        }
        match self.core.error {
            Some(err) => Err(err),
            None => Ok(self.core.backend.result()),
        }
    }

    /// True if the parser has recorded an error.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.core.has_error()
    }

    /// The error recorded by the parser, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<Error> {
        self.core.error
    }

    /// The position of the next code point to be consumed.
    #[must_use]
    pub fn input_pos(&self) -> Coord {
        self.core.pos
    }

    /// The position at which the most recent token started.
    #[must_use]
    pub fn pos(&self) -> Coord {
        self.core.matcher_pos
    }

    /// True if any extension named by `flag` is enabled.
    #[must_use]
    pub fn extension_enabled(&self, flag: Extensions) -> bool {
        self.core.extension_enabled(flag)
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.core.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.core.backend
    }

    /// Offers one code point to the stack, re-offering it to the new top
    /// for as long as matchers decline to consume it.
    fn consume_code_point(&mut self, code_point: char) {
        let mut retry = true;
        while retry {
            debug_assert!(!self.stack.is_empty(), "dispatch on an empty parse stack");
            let Some(mut top) = self.stack.pop() else {
                return;
            };
            let (child, consumed) = top.consume(&mut self.core, Some(code_point));
            if self.core.has_error() {
                return;
            }
            if top.is_done() {
                self.core.matcher_pos = self.core.pos;
            } else {
                self.stack.push(top);
            }
            if let Some(child) = child {
                if self.stack.len() > MAX_STACK_DEPTH {
                    self.core.fail(Error::NestingTooDeep);
                    return;
                }
                self.stack.push(child);
                self.core.matcher_pos = self.core.pos;
            }
            retry = !consumed;
        }
    }
}
