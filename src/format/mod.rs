//! Format strings: literal text plus typed placeholders.

use crate::args::ArgList;
use crate::error::Result;
use crate::result::ScanResult;

mod parser;

/// One piece of a tokenized format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'f> {
    /// Text that must appear in the input. Whitespace matches any run of
    /// input whitespace; every other character matches verbatim.
    Literal(&'f str),

    /// `{}` or `{:spec}`; consumes exactly one argument.
    Placeholder { spec: &'f str },
}

/// A tokenized format string, reusable across scan calls.
#[derive(Debug)]
pub struct Format<'f> {
    segments: Vec<Segment<'f>>,
    placeholders: usize,
}

impl<'f> Format<'f> {
    /// Tokenizes `format`, rejecting unterminated placeholders, stray
    /// braces and anything but `{}`/`{:spec}` between braces.
    pub fn new(format: &'f str) -> Result<Self> {
        let segments = parser::tokenize(format)?;
        let placeholders = segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Placeholder { .. }))
            .count();
        Ok(Self {
            segments,
            placeholders,
        })
    }

    /// Number of `{}`/`{:spec}` slots; must equal the argument count.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    /// Runs this pre-parsed format against `input`.
    pub fn scan<'a>(&self, input: &'a str, args: ArgList<'_, '_>) -> ScanResult<'a> {
        crate::engine::run(self, input, args)
    }

    pub(crate) fn segments(&self) -> &[Segment<'f>] {
        &self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn splits_literals_and_placeholders() {
        let format = Format::new("{} -> {}").unwrap();
        assert_eq!(
            format.segments(),
            [
                Segment::Placeholder { spec: "" },
                Segment::Literal(" -> "),
                Segment::Placeholder { spec: "" },
            ]
        );
        assert_eq!(format.placeholder_count(), 2);
    }

    #[test]
    fn captures_spec_text() {
        let format = Format::new("{:8x} {:a}").unwrap();
        assert_eq!(
            format.segments(),
            [
                Segment::Placeholder { spec: "8x" },
                Segment::Literal(" "),
                Segment::Placeholder { spec: "a" },
            ]
        );
    }

    #[test]
    fn empty_spec_after_colon_is_allowed() {
        let format = Format::new("{:}").unwrap();
        assert_eq!(format.segments(), [Segment::Placeholder { spec: "" }]);
    }

    #[test]
    fn unescapes_doubled_braces() {
        let format = Format::new("{{{}}}").unwrap();
        assert_eq!(
            format.segments(),
            [
                Segment::Literal("{"),
                Segment::Placeholder { spec: "" },
                Segment::Literal("}"),
            ]
        );
        assert_eq!(format.placeholder_count(), 1);
    }

    #[test]
    fn rejects_unterminated_placeholder() {
        assert_eq!(Format::new("{").err(), Some(Error::InvalidFormatString));
        assert_eq!(
            Format::new("{} -{> {}").err(),
            Some(Error::InvalidFormatString)
        );
    }

    #[test]
    fn rejects_unescaped_closing_brace() {
        assert_eq!(
            Format::new("{} -}> {}").err(),
            Some(Error::InvalidFormatString)
        );
    }

    #[test]
    fn rejects_text_between_braces() {
        assert_eq!(Format::new("{a}").err(), Some(Error::InvalidFormatString));
    }
}
