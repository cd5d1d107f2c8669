//! The contract between the parser and its output stage.

use crate::error::Error;

/// Receives SAX-style parse events in document order.
///
/// The parser invokes these notifications synchronously from within
/// [`crate::Parser::input`] and [`crate::Parser::eof`]. Every notification
/// returns a `Result`; an `Err` poisons the owning parser exactly as a
/// syntax error does, and no further notifications are issued.
///
/// All event methods default to doing nothing, so a backend implements only
/// the events it cares about. String slices passed to
/// [`Backend::string_value`] and [`Backend::key`] are well-formed UTF-8 with
/// every escape sequence already resolved.
pub trait Backend {
    /// The value handed back by [`crate::Parser::eof`] on success.
    type Result;

    /// Produces the final result of the parse. Called exactly once, after
    /// the input has been fully consumed without error.
    fn result(&mut self) -> Self::Result;

    /// A string value was parsed.
    fn string_value(&mut self, _s: &str) -> Result<(), Error> {
        Ok(())
    }

    /// An integer in `i64::MIN..0` was parsed.
    fn int64_value(&mut self, _v: i64) -> Result<(), Error> {
        Ok(())
    }

    /// A non-negative integer was parsed.
    fn uint64_value(&mut self, _v: u64) -> Result<(), Error> {
        Ok(())
    }

    /// A floating-point number was parsed.
    fn double_value(&mut self, _v: f64) -> Result<(), Error> {
        Ok(())
    }

    /// A `true` or `false` keyword was parsed.
    fn boolean_value(&mut self, _v: bool) -> Result<(), Error> {
        Ok(())
    }

    /// A `null` keyword was parsed.
    fn null_value(&mut self) -> Result<(), Error> {
        Ok(())
    }

    /// An array begins. Subsequent events are members of this array until
    /// the matching [`Backend::end_array`].
    fn begin_array(&mut self) -> Result<(), Error> {
        Ok(())
    }

    /// The most recently begun array is complete.
    fn end_array(&mut self) -> Result<(), Error> {
        Ok(())
    }

    /// An object begins. Subsequent events alternate between keys and their
    /// values until the matching [`Backend::end_object`].
    fn begin_object(&mut self) -> Result<(), Error> {
        Ok(())
    }

    /// An object key was parsed.
    fn key(&mut self, _k: &str) -> Result<(), Error> {
        Ok(())
    }

    /// The most recently begun object is complete.
    fn end_object(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// A backend that ignores every event and produces no result.
///
/// Useful for validating input without materializing it.
///
/// ```rust
/// use jsonrelay::{Extensions, NullBackend, Parser};
///
/// let mut parser = Parser::new(NullBackend, Extensions::empty());
/// parser.input(b"[true, false]");
/// assert!(parser.eof().is_ok());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl Backend for NullBackend {
    type Result = ();

    fn result(&mut self) -> Self::Result {}
}
