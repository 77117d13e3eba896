use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till, take_till1};
use nom::character::complete::char;
use nom::combinator::opt;
use nom::multi::many0;
use nom::sequence::{delimited, preceded};

use super::Segment;
use crate::error::{Error, Result};

pub(super) fn tokenize(format: &str) -> Result<Vec<Segment<'_>>> {
    let parsed: IResult<&str, Vec<Segment<'_>>> = many0(segment).parse(format);
    match parsed {
        Ok(("", segments)) => Ok(segments),
        // Leftover text is an unterminated placeholder or a stray brace
        // that no rule could consume.
        _ => Err(Error::InvalidFormatString),
    }
}

fn segment(input: &str) -> IResult<&str, Segment<'_>> {
    alt((escaped_brace, placeholder, literal)).parse(input)
}

fn escaped_brace(input: &str) -> IResult<&str, Segment<'_>> {
    let (rest, doubled) = alt((tag("{{"), tag("}}"))).parse(input)?;
    Ok((rest, Segment::Literal(&doubled[..1])))
}

fn placeholder(input: &str) -> IResult<&str, Segment<'_>> {
    let (rest, spec) = delimited(
        char('{'),
        opt(preceded(char(':'), take_till(|c| c == '{' || c == '}'))),
        char('}'),
    )
    .parse(input)?;
    Ok((
        rest,
        Segment::Placeholder {
            spec: spec.unwrap_or(""),
        },
    ))
}

fn literal(input: &str) -> IResult<&str, Segment<'_>> {
    let (rest, text) = take_till1(|c| c == '{' || c == '}').parse(input)?;
    Ok((rest, Segment::Literal(text)))
}
