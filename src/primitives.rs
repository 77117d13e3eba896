//! [`Scan`] implementations for the primitive types.
//!
//! All of these skip leading whitespace before lexing, except `char`,
//! which reads the very next character.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::lexer;
use crate::scanner::Scan;
use crate::spec::Spec;

macro_rules! impl_scan_for_int {
    ($signed:literal => $($ty:ty),* $(,)?) => {$(
        impl Scan for $ty {
            fn parse_spec(spec: &str) -> Result<Spec> {
                Spec::integer(spec)
            }

            fn scan(&mut self, spec: &Spec, ctx: &mut Context<'_>) -> Result<()> {
                ctx.skip_whitespace();
                let radix = spec.radix.unwrap_or(10);
                let (token, rest) =
                    lexer::integer(ctx.remaining(), radix, spec.width, $signed)?;
                // The token is all sign and digits, so a parse failure
                // here can only be overflow.
                let value = <$ty>::from_str_radix(token, radix)
                    .map_err(|_| Error::ValueOutOfRange)?;
                *self = value;
                ctx.advance_to(rest);
                Ok(())
            }
        }
    )*};
}

impl_scan_for_int!(true => i8, i16, i32, i64, i128, isize);
impl_scan_for_int!(false => u8, u16, u32, u64, u128, usize);

macro_rules! impl_scan_for_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Scan for $ty {
            fn parse_spec(spec: &str) -> Result<Spec> {
                Spec::width_only(spec)
            }

            fn scan(&mut self, spec: &Spec, ctx: &mut Context<'_>) -> Result<()> {
                ctx.skip_whitespace();
                let (token, rest) = lexer::float(ctx.remaining(), spec.width)?;
                let value = token.parse().map_err(|_| Error::InvalidScannedValue)?;
                *self = value;
                ctx.advance_to(rest);
                Ok(())
            }
        }
    )*};
}

impl_scan_for_float!(f32, f64);

impl Scan for String {
    fn parse_spec(spec: &str) -> Result<Spec> {
        Spec::width_only(spec)
    }

    /// Reads one whitespace-delimited word.
    fn scan(&mut self, spec: &Spec, ctx: &mut Context<'_>) -> Result<()> {
        ctx.skip_whitespace();
        let (token, rest) = lexer::word(ctx.remaining(), spec.width)?;
        self.clear();
        self.push_str(token);
        ctx.advance_to(rest);
        Ok(())
    }
}

impl Scan for char {
    fn scan(&mut self, _spec: &Spec, ctx: &mut Context<'_>) -> Result<()> {
        let mut rest = ctx.remaining().chars();
        let value = rest.next().ok_or(Error::EndOfRange)?;
        *self = value;
        ctx.advance_to(rest.as_str());
        Ok(())
    }
}

impl Scan for bool {
    /// Accepts `true`, `false`, `1` and `0`.
    fn scan(&mut self, _spec: &Spec, ctx: &mut Context<'_>) -> Result<()> {
        ctx.skip_whitespace();
        let remaining = ctx.remaining();
        let (value, rest) = if let Some(rest) = remaining.strip_prefix("true") {
            (true, rest)
        } else if let Some(rest) = remaining.strip_prefix("false") {
            (false, rest)
        } else if let Some(rest) = remaining.strip_prefix('1') {
            (true, rest)
        } else if let Some(rest) = remaining.strip_prefix('0') {
            (false, rest)
        } else if remaining.is_empty() {
            return Err(Error::EndOfRange);
        } else {
            return Err(Error::InvalidScannedValue);
        };
        *self = value;
        ctx.advance_to(rest);
        Ok(())
    }
}
