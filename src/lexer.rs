//! Token lexers for the built-in primitive scanners.
//!
//! Each lexer returns `(token, rest)` without touching the scan context;
//! the scanner that called it decides whether the token materializes as a
//! value and only then advances the cursor.

use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{take_till1, take_while1};
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{opt, recognize};

use crate::error::{Error, Result};

/// Limits `input` to at most `width` characters.
fn clamp(input: &str, width: Option<usize>) -> &str {
    match width {
        None => input,
        Some(width) => match input.char_indices().nth(width) {
            Some((end, _)) => &input[..end],
            None => input,
        },
    }
}

fn reject(window: &str) -> Error {
    if window.is_empty() {
        Error::EndOfRange
    } else {
        Error::InvalidScannedValue
    }
}

/// Lexes an optionally signed run of digits in `radix`. Unsigned targets
/// only admit `+`.
pub(crate) fn integer(
    input: &str,
    radix: u32,
    width: Option<usize>,
    signed: bool,
) -> Result<(&str, &str)> {
    let window = clamp(input, width);
    let signs = if signed { "+-" } else { "+" };
    let parsed: IResult<&str, &str> = recognize((
        opt(one_of(signs)),
        take_while1(move |c: char| c.is_digit(radix)),
    ))
    .parse(window);
    match parsed {
        Ok((_, token)) => Ok((token, &input[token.len()..])),
        Err(_) => Err(reject(window)),
    }
}

/// Lexes a decimal floating-point token: an optional sign, then
/// `digits[.digits]` or `.digits`, then an optional exponent.
pub(crate) fn float(input: &str, width: Option<usize>) -> Result<(&str, &str)> {
    let window = clamp(input, width);
    let mantissa = alt((
        recognize((digit1, opt((char('.'), digit0)))),
        recognize((char('.'), digit1)),
    ));
    let exponent = opt((one_of("eE"), opt(one_of("+-")), digit1));
    let parsed: IResult<&str, &str> =
        recognize((opt(one_of("+-")), mantissa, exponent)).parse(window);
    match parsed {
        Ok((_, token)) => Ok((token, &input[token.len()..])),
        Err(_) => Err(reject(window)),
    }
}

/// Lexes a whitespace-delimited word.
pub(crate) fn word(input: &str, width: Option<usize>) -> Result<(&str, &str)> {
    let window = clamp(input, width);
    let parsed: IResult<&str, &str> = take_till1(|c: char| c.is_whitespace()).parse(window);
    match parsed {
        Ok((_, token)) => Ok((token, &input[token.len()..])),
        Err(_) => Err(reject(window)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_stops_at_non_digit() {
        assert_eq!(integer("123 rest", 10, None, true), Ok(("123", " rest")));
        assert_eq!(integer("-42,", 10, None, true), Ok(("-42", ",")));
    }

    #[test]
    fn integer_respects_radix() {
        assert_eq!(integer("2af?", 16, None, false), Ok(("2af", "?")));
        assert_eq!(integer("1012", 2, None, false), Ok(("101", "2")));
    }

    #[test]
    fn integer_rejects_minus_for_unsigned() {
        assert_eq!(
            integer("-5", 10, None, false),
            Err(Error::InvalidScannedValue)
        );
        assert_eq!(integer("+5", 10, None, false), Ok(("+5", "")));
    }

    #[test]
    fn integer_needs_at_least_one_digit() {
        assert_eq!(integer("-", 10, None, true), Err(Error::InvalidScannedValue));
        assert_eq!(integer("", 10, None, true), Err(Error::EndOfRange));
    }

    #[test]
    fn width_clamps_consumption() {
        assert_eq!(integer("12345", 10, Some(2), true), Ok(("12", "345")));
        assert_eq!(word("hello", Some(3)), Ok(("hel", "lo")));
    }

    #[test]
    fn float_shapes() {
        assert_eq!(float("3.14 pie", None), Ok(("3.14", " pie")));
        assert_eq!(float(".5", None), Ok((".5", "")));
        assert_eq!(float("3.", None), Ok(("3.", "")));
        assert_eq!(float("-1.5e-3!", None), Ok(("-1.5e-3", "!")));
        assert_eq!(float("x", None), Err(Error::InvalidScannedValue));
    }

    #[test]
    fn word_stops_at_whitespace() {
        assert_eq!(word("hello world", None), Ok(("hello", " world")));
        assert_eq!(word("", None), Err(Error::EndOfRange));
    }
}
