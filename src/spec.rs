//! Per-placeholder configuration parsed from the text between `:` and `}`.

use nom::Parser;
use nom::character::complete::{digit1, one_of};
use nom::combinator::opt;

use crate::error::{Error, Result};

/// Parsed form of a placeholder spec.
///
/// Each built-in scanner routes its spec text through one of the
/// constructors below. Types that take no configuration keep the default
/// [`Scan::parse_spec`](crate::Scan::parse_spec), which is [`Spec::empty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spec {
    /// Maximum number of characters the scanner may consume.
    pub width: Option<usize>,
    /// Numeric base for integer scanners.
    pub radix: Option<u32>,
}

impl Spec {
    /// The empty parser: accepts no spec text at all.
    pub fn empty(text: &str) -> Result<Self> {
        if text.is_empty() {
            Ok(Self::default())
        } else {
            Err(Error::InvalidFormatString)
        }
    }

    /// Integer spec syntax: `[width][b|d|o|x]`.
    pub fn integer(text: &str) -> Result<Self> {
        let parsed: nom::IResult<&str, _> = (opt(digit1), opt(one_of("bdox"))).parse(text);
        let (rest, (width, base)) = parsed.map_err(|_| Error::InvalidFormatString)?;
        if !rest.is_empty() {
            return Err(Error::InvalidFormatString);
        }
        let radix = base.map(|letter| match letter {
            'b' => 2,
            'o' => 8,
            'x' => 16,
            _ => 10,
        });
        Ok(Self {
            width: parse_width(width)?,
            radix,
        })
    }

    /// Width-only spec syntax, shared by floats and strings: `[width]`.
    pub fn width_only(text: &str) -> Result<Self> {
        let parsed: nom::IResult<&str, _> = opt(digit1).parse(text);
        let (rest, width) = parsed.map_err(|_| Error::InvalidFormatString)?;
        if !rest.is_empty() {
            return Err(Error::InvalidFormatString);
        }
        Ok(Self {
            width: parse_width(width)?,
            radix: None,
        })
    }
}

fn parse_width(digits: Option<&str>) -> Result<Option<usize>> {
    match digits {
        None => Ok(None),
        Some(digits) => match digits.parse() {
            Ok(0) | Err(_) => Err(Error::InvalidFormatString),
            Ok(width) => Ok(Some(width)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accepts_only_nothing() {
        assert_eq!(Spec::empty(""), Ok(Spec::default()));
        assert_eq!(Spec::empty("a"), Err(Error::InvalidFormatString));
        assert_eq!(Spec::empty("5"), Err(Error::InvalidFormatString));
    }

    #[test]
    fn integer_parses_width_and_radix() {
        assert_eq!(
            Spec::integer("8x"),
            Ok(Spec {
                width: Some(8),
                radix: Some(16),
            })
        );
        assert_eq!(
            Spec::integer("b"),
            Ok(Spec {
                width: None,
                radix: Some(2),
            })
        );
        assert_eq!(
            Spec::integer("12"),
            Ok(Spec {
                width: Some(12),
                radix: None,
            })
        );
        assert_eq!(Spec::integer(""), Ok(Spec::default()));
    }

    #[test]
    fn integer_rejects_unknown_syntax() {
        assert_eq!(Spec::integer("a"), Err(Error::InvalidFormatString));
        assert_eq!(Spec::integer("x8"), Err(Error::InvalidFormatString));
        assert_eq!(Spec::integer("8q"), Err(Error::InvalidFormatString));
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(Spec::integer("0"), Err(Error::InvalidFormatString));
        assert_eq!(Spec::width_only("0"), Err(Error::InvalidFormatString));
    }

    #[test]
    fn width_only_rejects_radix_letters() {
        assert_eq!(Spec::width_only("5"), Ok(Spec {
            width: Some(5),
            radix: None,
        }));
        assert_eq!(Spec::width_only("5x"), Err(Error::InvalidFormatString));
    }
}
