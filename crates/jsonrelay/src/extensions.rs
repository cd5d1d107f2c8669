use bitflags::bitflags;

bitflags! {
    /// Syntax accepted on top of strict RFC 7159.
    ///
    /// Each bit is independent; the default is [`Extensions::empty`], which
    /// is strict JSON. [`Extensions::all`] enables everything at once.
    ///
    /// ```rust
    /// use jsonrelay::Extensions;
    ///
    /// let relaxed = Extensions::SINGLE_LINE_COMMENTS | Extensions::ARRAY_TRAILING_COMMA;
    /// assert!(relaxed.contains(Extensions::ARRAY_TRAILING_COMMA));
    /// assert!(!relaxed.contains(Extensions::SINGLE_QUOTE_STRING));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Extensions: u8 {
        /// `#`-to-end-of-line comments wherever whitespace is allowed.
        const BASH_COMMENTS = 1 << 0;
        /// `//`-to-end-of-line comments.
        const SINGLE_LINE_COMMENTS = 1 << 1;
        /// `/* ... */` comments.
        const MULTI_LINE_COMMENTS = 1 << 2;
        /// Permit a `,` immediately before the `]` that closes an array.
        const ARRAY_TRAILING_COMMA = 1 << 3;
        /// Permit a `,` immediately before the `}` that closes an object.
        const OBJECT_TRAILING_COMMA = 1 << 4;
        /// Permit `'...'` strings in addition to `"..."`.
        const SINGLE_QUOTE_STRING = 1 << 5;
        /// Permit a leading `+` sign on numbers.
        const LEADING_PLUS = 1 << 6;
    }
}
