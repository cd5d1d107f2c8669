//! Number scanning.
//!
//! Grammar (RFC 7159):
//!
//! ```text
//! number = [ minus ] int [ frac ] [ exp ]
//! int    = zero / ( digit1-9 *DIGIT )
//! frac   = decimal-point 1*DIGIT
//! exp    = ("e" / "E") [ minus / plus ] 1*DIGIT
//! ```

use super::{matcher::Consume, ParserCore};
use crate::{backend::Backend, error::Error, extensions::Extensions};

/// Matches a number, tracking whether it is still integral and detecting
/// overflow.
///
/// While the number is integral its magnitude accumulates in a `u64`; the
/// first `.` or exponent switches to floating-point accumulation. Integers
/// are delivered as `i64` (negative) or `u64` (non-negative), everything
/// else as `f64`.
#[derive(Debug)]
pub(crate) struct NumberMatcher {
    state: State,
    is_neg: bool,
    is_integer: bool,
    /// Magnitude accumulator while the number is still integral.
    int_acc: u64,
    fp: FloatAcc,
}

#[derive(Debug)]
struct FloatAcc {
    whole_part: f64,
    frac_part: f64,
    frac_scale: f64,
    exp_is_negative: bool,
    exponent: u32,
}

impl Default for FloatAcc {
    fn default() -> Self {
        Self {
            whole_part: 0.0,
            frac_part: 0.0,
            frac_scale: 1.0,
            exp_is_negative: false,
            exponent: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Done,
    /// Expecting a sign or the first digit.
    LeadingMinus,
    /// Expecting the first digit of the integer part.
    IntegerInitialDigit,
    /// Inside the integer part.
    IntegerDigit,
    /// After a leading-zero integer part: only `.`, an exponent, or the end
    /// of the number may follow.
    Frac,
    /// Expecting the first digit of the fraction.
    FracInitialDigit,
    /// Inside the fraction.
    FracDigit,
    /// Expecting the exponent's sign or first digit.
    ExponentSign,
    /// Expecting the first digit of the exponent.
    ExponentInitialDigit,
    /// Inside the exponent.
    ExponentDigit,
}

impl NumberMatcher {
    pub(crate) fn new() -> Self {
        Self {
            state: State::LeadingMinus,
            is_neg: false,
            is_integer: true,
            int_acc: 0,
            fp: FloatAcc::default(),
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
            if !self.in_terminal_state() {
                core.fail(Error::ExpectedDigits);
            }
            self.complete(core);
            return (None, true);
        };
        let consumed = match self.state {
            State::LeadingMinus => self.leading_minus(core, c),
            State::IntegerInitialDigit => self.integer_initial_digit(core, c),
            State::IntegerDigit => self.integer_digit(core, c),
            State::Frac => self.frac(core, c),
            State::FracInitialDigit | State::FracDigit => self.frac_digit(core, c),
            State::ExponentSign => self.exponent_sign(core, c),
            State::ExponentInitialDigit | State::ExponentDigit => self.exponent_digit(core, c),
            State::Done => true,
        };
        (None, consumed)
    }

    fn leading_minus<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) -> bool {
        match c {
            '-' => {
                self.is_neg = true;
                self.state = State::IntegerInitialDigit;
                true
            }
            '+' => {
                // The root matcher only dispatches a '+' here when the
                // extension is enabled.
                debug_assert!(core.extension_enabled(Extensions::LEADING_PLUS));
                self.state = State::IntegerInitialDigit;
                true
            }
            '0'..='9' => {
                self.state = State::IntegerInitialDigit;
                self.integer_initial_digit(core, c)
            }
            _ => {
                debug_assert!(false, "number matcher started without a sign or digit");
                core.fail(Error::UnrecognizedToken);
                self.state = State::Done;
                true
            }
        }
    }

    fn integer_initial_digit<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) -> bool {
        match c {
            '0' => self.state = State::Frac,
            '1'..='9' => {
                debug_assert_eq!(self.int_acc, 0);
                self.int_acc = u64::from(c as u8 - b'0');
                self.state = State::IntegerDigit;
            }
            _ => {
                core.fail(Error::UnrecognizedToken);
                self.state = State::Done;
            }
        }
        true
    }

    fn integer_digit<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) -> bool {
        match c {
            '.' => {
                self.number_is_float();
                self.state = State::FracInitialDigit;
                true
            }
            'e' | 'E' => {
                self.number_is_float();
                self.state = State::ExponentSign;
                true
            }
            '0'..='9' => {
                let acc = self
                    .int_acc
                    .wrapping_mul(10)
                    .wrapping_add(u64::from(c as u8 - b'0'));
                // The multiplier is 10 and the addend at most 9, so a wrap
                // strictly decreases the value.
                if acc < self.int_acc {
                    core.fail(Error::NumberOutOfRange);
                    self.state = State::Done;
                } else {
                    self.int_acc = acc;
                }
                true
            }
            _ => {
                self.complete(core);
                false
            }
        }
    }

    fn frac<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) -> bool {
        match c {
            '.' => {
                self.state = State::FracInitialDigit;
                true
            }
            'e' | 'E' => {
                self.state = State::ExponentSign;
                true
            }
            '0'..='9' => {
                // A digit after the leading zero cannot be part of any
                // following token, so the error is issued here.
                core.fail(Error::NumberOutOfRange);
                self.state = State::Done;
                true
            }
            _ => {
                self.complete(core);
                false
            }
        }
    }

    fn frac_digit<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) -> bool {
        debug_assert!(matches!(
            self.state,
            State::FracInitialDigit | State::FracDigit
        ));
        match c {
            'e' | 'E' => {
                self.number_is_float();
                if self.state == State::FracInitialDigit {
                    core.fail(Error::UnrecognizedToken);
                    self.state = State::Done;
                } else {
                    self.state = State::ExponentSign;
                }
                true
            }
            '0'..='9' => {
                self.number_is_float();
                self.fp.frac_part = self.fp.frac_part * 10.0 + f64::from(c as u8 - b'0');
                self.fp.frac_scale *= 10.0;
                self.state = State::FracDigit;
                true
            }
            _ => {
                if self.state == State::FracInitialDigit {
                    core.fail(Error::UnrecognizedToken);
                    self.state = State::Done;
                    true
                } else {
                    self.complete(core);
                    false
                }
            }
        }
    }

    fn exponent_sign<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) -> bool {
        self.number_is_float();
        self.state = State::ExponentInitialDigit;
        match c {
            '+' => {
                self.fp.exp_is_negative = false;
                true
            }
            '-' => {
                self.fp.exp_is_negative = true;
                true
            }
            _ => self.exponent_digit(core, c),
        }
    }

    fn exponent_digit<B: Backend>(&mut self, core: &mut ParserCore<B>, c: char) -> bool {
        debug_assert!(!self.is_integer);
        match c {
            '0'..='9' => {
                self.fp.exponent = self
                    .fp
                    .exponent
                    .saturating_mul(10)
                    .saturating_add(u32::from(c as u8 - b'0'));
                self.state = State::ExponentDigit;
                true
            }
            _ => {
                if self.state == State::ExponentInitialDigit {
                    core.fail(Error::UnrecognizedToken);
                    self.state = State::Done;
                    true
                } else {
                    self.complete(core);
                    false
                }
            }
        }
    }

    /// Switches to floating-point accumulation, carrying over the integer
    /// part scanned so far.
    #[allow(clippy::cast_precision_loss)]
    fn number_is_float(&mut self) {
        if self.is_integer {
            self.fp.whole_part = self.int_acc as f64;
            self.is_integer = false;
        }
    }

    /// States in which the end of the number is grammatically valid.
    fn in_terminal_state(&self) -> bool {
        matches!(
            self.state,
            State::IntegerDigit | State::Frac | State::FracDigit | State::ExponentDigit | State::Done
        )
    }

    fn complete<B: Backend>(&mut self, core: &mut ParserCore<B>) {
        self.state = State::Done;
        self.make_result(core);
    }

    #[allow(clippy::cast_possible_wrap)]
    fn make_result<B: Backend>(&mut self, core: &mut ParserCore<B>) {
        if core.has_error() {
            return;
        }
        debug_assert!(self.in_terminal_state());

        if self.is_integer {
            const UMIN: u64 = i64::MIN.unsigned_abs();
            let res = if self.is_neg {
                if self.int_acc > UMIN {
                    core.fail(Error::NumberOutOfRange);
                    return;
                }
                let value = if self.int_acc == UMIN {
                    i64::MIN
                } else {
                    -(self.int_acc as i64)
                };
                core.backend.int64_value(value)
            } else {
                core.backend.uint64_value(self.int_acc)
            };
            core.record(res);
            return;
        }

        let mut scale = 1.0_f64;
        let mut exponent = self.fp.exponent;
        while exponent > 0 && scale.is_finite() {
            scale *= 10.0;
            exponent -= 1;
        }
        if scale.is_infinite() {
            core.fail(Error::NumberOutOfRange);
            return;
        }
        if self.fp.exp_is_negative {
            scale = 1.0 / scale;
        }

        let mut value = (self.fp.whole_part + self.fp.frac_part / self.fp.frac_scale) * scale;
        if self.is_neg {
            value = -value;
        }
        if !value.is_finite() {
            core.fail(Error::NumberOutOfRange);
            return;
        }
        let res = core.backend.double_value(value);
        core.record(res);
    }
}
