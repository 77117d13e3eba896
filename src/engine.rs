//! The format-driven driver.

use crate::args::ArgList;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::format::{Format, Segment};
use crate::result::ScanResult;

/// Scans `input` according to `format`, filling `args` in order.
///
/// This is the monomorphic core behind [`scan!`](crate::scan!); user
/// scanners that decompose composite tokens may call it directly with a
/// hand-built argument list.
pub fn vscan<'a>(input: &'a str, format: &str, args: ArgList<'_, '_>) -> ScanResult<'a> {
    match Format::new(format) {
        Ok(format) => run(&format, input, args),
        Err(err) => ScanResult::fail(input, err),
    }
}

pub(crate) fn run<'a>(
    format: &Format<'_>,
    input: &'a str,
    mut args: ArgList<'_, '_>,
) -> ScanResult<'a> {
    // Count mismatch in either direction fails before any value is read.
    if format.placeholder_count() != args.len() {
        return ScanResult::fail(input, Error::InvalidFormatString);
    }

    let mut ctx = Context::new(input);
    for segment in format.segments() {
        let step = match *segment {
            Segment::Literal(text) => match_literal(&mut ctx, text),
            Segment::Placeholder { spec } => args
                .take_next()
                .and_then(|arg| arg.fill(spec, &mut ctx)),
        };
        if let Err(err) = step {
            return ScanResult::fail(ctx.remaining(), err);
        }
    }
    ScanResult::ok(ctx.remaining())
}

/// Matches literal format text against the input. Whitespace in the
/// format matches any run of input whitespace; every other character must
/// appear verbatim.
fn match_literal(ctx: &mut Context<'_>, text: &str) -> Result<()> {
    for expected in text.chars() {
        if expected.is_whitespace() {
            ctx.skip_whitespace();
            continue;
        }
        let mut rest = ctx.remaining().chars();
        match rest.next() {
            Some(found) if found == expected => ctx.advance_to(rest.as_str()),
            Some(_) => return Err(Error::InvalidScannedValue),
            None => return Err(Error::EndOfRange),
        }
    }
    Ok(())
}
