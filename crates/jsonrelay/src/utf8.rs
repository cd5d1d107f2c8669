//! Incremental UTF-8 decoding.

use crate::error::Error;

/// A streaming UTF-8 decoder.
///
/// Bytes are pushed one at a time and a scalar value is produced when the
/// final byte of a sequence arrives. Partial sequences survive across
/// pushes, so input may be split at arbitrary byte boundaries.
///
/// Invalid prefixes, invalid continuation bytes, overlong encodings,
/// surrogate code points, and values above U+10FFFF are all rejected with
/// [`Error::BadUnicodeCodePoint`].
#[derive(Debug, Default)]
pub(crate) struct Utf8Decoder {
    /// Continuation bytes still required to finish the current sequence.
    need: u8,
    /// Accumulated bits of the code point under construction.
    acc: u32,
    /// Permitted range for the next continuation byte. The first
    /// continuation byte of a sequence is constrained more tightly than
    /// 0x80..=0xBF so that overlong forms, surrogates, and out-of-range
    /// values are rejected on the byte that introduces them.
    min: u8,
    max: u8,
}

impl Utf8Decoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// True if the decoder is in the middle of a multi-byte sequence.
    pub(crate) fn is_partial(&self) -> bool {
        self.need != 0
    }

    /// Feeds one byte, returning a scalar value when the byte completes a
    /// sequence.
    pub(crate) fn push(&mut self, byte: u8) -> Result<Option<char>, Error> {
        if self.need == 0 {
            return match byte {
                0x00..=0x7F => Ok(Some(char::from(byte))),
                0xC2..=0xDF => self.start(1, u32::from(byte & 0x1F), 0x80, 0xBF),
                0xE0 => self.start(2, 0, 0xA0, 0xBF),
                0xE1..=0xEC | 0xEE..=0xEF => self.start(2, u32::from(byte & 0x0F), 0x80, 0xBF),
                0xED => self.start(2, 0x0D, 0x80, 0x9F),
                0xF0 => self.start(3, 0, 0x90, 0xBF),
                0xF1..=0xF3 => self.start(3, u32::from(byte & 0x07), 0x80, 0xBF),
                0xF4 => self.start(3, 0x04, 0x80, 0x8F),
                _ => Err(Error::BadUnicodeCodePoint),
            };
        }

        if byte < self.min || byte > self.max {
            return Err(Error::BadUnicodeCodePoint);
        }
        self.acc = (self.acc << 6) | u32::from(byte & 0x3F);
        self.need -= 1;
        self.min = 0x80;
        self.max = 0xBF;
        if self.need == 0 {
            // The lead-byte table and continuation bounds guarantee the
            // accumulator is a scalar value at this point.
            char::from_u32(self.acc)
                .map(Some)
                .ok_or(Error::BadUnicodeCodePoint)
        } else {
            Ok(None)
        }
    }

    fn start(&mut self, need: u8, acc: u32, min: u8, max: u8) -> Result<Option<char>, Error> {
        self.need = need;
        self.acc = acc;
        self.min = min;
        self.max = max;
        Ok(None)
    }
}
