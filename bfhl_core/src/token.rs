//! Single-step token classification.
//!
//! Every input string maps to exactly one [`Token`] variant, so the
//! numeric / alphabetic / special split is total and mutually exclusive.

/// A numeric token together with its truncated integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberToken<'a> {
    /// The token exactly as received.
    pub raw: &'a str,
    /// Integer part of the decimal value (truncated toward zero),
    /// clamped to `±i128::MAX`.
    pub value: i128,
    /// Parity of the integer part, taken from its last digit.
    pub is_even: bool,
}

/// The category a single token falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Number(NumberToken<'a>),
    Alpha(&'a str),
    Special(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a raw token.
    ///
    /// Numeric tokens must match `[+-]? (digits ("." digits?)? | "." digits)`
    /// over the whole string. Alphabetic tokens are one or more ASCII letters.
    /// Anything else is special, including the empty string.
    #[must_use]
    pub fn classify(raw: &'a str) -> Self {
        if let Some(number) = parse_number(raw) {
            Self::Number(number)
        } else if is_alphabetic(raw) {
            Self::Alpha(raw)
        } else {
            Self::Special(raw)
        }
    }

    /// The token exactly as received.
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        match *self {
            Self::Number(n) => n.raw,
            Self::Alpha(s) | Self::Special(s) => s,
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn is_alphabetic(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_alphabetic())
}

fn parse_number(raw: &str) -> Option<NumberToken<'_>> {
    let (negative, unsigned) = match raw.as_bytes().first()? {
        b'+' => (false, &raw[1..]),
        b'-' => (true, &raw[1..]),
        _ => (false, raw),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    if !is_digits(int_part) || !frac_part.is_none_or(is_digits) {
        return None;
    }
    // "", "+", "-", "." and "-." carry no digits at all
    if int_part.is_empty() && frac_part.is_none_or(str::is_empty) {
        return None;
    }

    let magnitude = int_part.bytes().fold(0_i128, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i128::from(digit - b'0'))
    });
    let value = if negative { -magnitude } else { magnitude };
    let is_even = int_part
        .bytes()
        .last()
        .is_none_or(|digit| (digit - b'0') % 2 == 0);

    Some(NumberToken {
        raw,
        value,
        is_even,
    })
}
