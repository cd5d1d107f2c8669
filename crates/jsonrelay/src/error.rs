use thiserror::Error;

/// Everything that can go wrong during a parse.
///
/// The taxonomy is closed: each failure mode of the grammar, the UTF-8
/// decoder, and the reference backends maps to exactly one variant, and the
/// message strings are stable. The absence of an error is modelled as
/// `Option<Error>` by the parser rather than with a dedicated variant.
///
/// The first error recorded poisons the parser: all further input is
/// discarded and no further backend notifications are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed UTF-8 input, a disallowed scalar value (an unescaped
    /// control character or a raw surrogate), or a mismatched surrogate
    /// pair in `\uXXXX` escapes.
    #[error("bad UNICODE code point")]
    BadUnicodeCodePoint,
    /// Something other than a value appeared where an array member was
    /// required.
    #[error("expected array member")]
    ExpectedArrayMember,
    /// The input ended inside a string.
    #[error("expected close quote")]
    ExpectedCloseQuote,
    /// A `:` was missing between an object key and its value.
    #[error("expected colon")]
    ExpectedColon,
    /// A number ended before any digit was seen.
    #[error("expected digits")]
    ExpectedDigits,
    /// Something other than a member appeared inside an object.
    #[error("expected object member")]
    ExpectedObjectMember,
    /// An object key was not a string.
    #[error("expected string")]
    ExpectedString,
    /// A malformed lexical token.
    #[error("expected token")]
    ExpectedToken,
    /// An unrecognized character followed `\` in a string.
    #[error("invalid escape character")]
    InvalidEscapeChar,
    /// A non-hex digit appeared in a `\uXXXX` escape.
    #[error("invalid hexadecimal escape character")]
    InvalidHexChar,
    /// Integer or floating-point overflow.
    #[error("number out of range")]
    NumberOutOfRange,
    /// Non-whitespace content after the top-level value.
    #[error("unexpected extra input")]
    UnexpectedExtraInput,
    /// A keyword or number that is lexically invalid.
    #[error("unrecognized token")]
    UnrecognizedToken,
    /// The parse stack exceeded its depth bound, or a DOM backend exceeded
    /// its element limit.
    #[error("objects are too deeply nested")]
    NestingTooDeep,
}
