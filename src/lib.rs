//! Typed, format-driven text scanning — the inverse of `print!` and
//! `format!`.
//!
//! A format string with `{}`/`{:spec}` placeholders drives sequential
//! extraction of typed values from one input string:
//!
//! ```
//! use unformat::scan;
//!
//! let mut product = String::new();
//! let mut price = 0.0f64;
//! let ret = scan!("Candy -> 2.75", "{} -> {}", product, price);
//! assert!(ret.is_ok());
//! assert_eq!(product, "Candy");
//! assert_eq!(price, 2.75);
//! ```
//!
//! # Architecture
//!
//! Scanning runs in three phases:
//! 1. **Tokenization**: the format string is split into literal text and
//!    placeholders, and the placeholder count is checked against the
//!    argument count before any input is consumed
//! 2. **Erasure**: the heterogeneous arguments are packed behind a
//!    uniform dispatch interface, in declaration order
//! 3. **Driving**: the engine walks the segments, matching literal text
//!    and handing each placeholder to the next argument's scanner
//!
//! The implementation is organized into focused modules:
//! - `error`: the closed error enumeration
//! - `result`: scan outcome plus residual input
//! - `context`: cursor state for one call
//! - `format`: format-string tokenization
//! - `spec`: per-placeholder configuration
//! - `scanner`: the [`Scan`] extension protocol
//! - `args`: the type-erased argument list
//! - `lexer`: token lexers for the built-in scanners
//! - `primitives`: [`Scan`] for the primitive types
//! - `wrap`: deferred construction for non-defaultable types
//!
//! # Extending
//!
//! Any type becomes scannable by implementing [`Scan`]. A composite type
//! usually decomposes its token with a nested scan against a sub-format:
//!
//! ```
//! use unformat::{scan, Context, Scan, Spec};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Scan for Point {
//!     fn scan(&mut self, _spec: &Spec, ctx: &mut Context<'_>) -> unformat::Result<()> {
//!         let (mut x, mut y) = (0i32, 0i32);
//!         let ret = scan!(ctx.remaining(), "[{}, {}]", x, y);
//!         ctx.advance_to(ret.remaining());
//!         ret.status()?;
//!         *self = Point { x, y };
//!         Ok(())
//!     }
//! }
//!
//! let mut point = Point::default();
//! assert!(scan!("[4, 20]", "{}", point).is_ok());
//! assert_eq!(point, Point { x: 4, y: 20 });
//! ```
//!
//! # Error Handling
//!
//! Nothing on the scan path panics or unwinds: every failure is an
//! [`Error`] carried by a [`ScanResult`], which also carries the input at
//! the point of failure so callers can report or resume precisely. A
//! failed call can be retried against [`ScanResult::remaining`] — already
//! consumed characters are never re-processed.
//!
//! # Known Limitations
//!
//! - Placeholders are positional; there is no named capture.
//! - Parsing is greedy: once a placeholder succeeds the engine never
//!   backtracks.
//! - Built-in scanners are whitespace-delimited, like C's `scanf`;
//!   whitespace in the format matches any run of input whitespace.

#![forbid(unsafe_code)]

mod args;
mod context;
mod engine;
mod error;
mod format;
mod lexer;
mod primitives;
mod result;
mod scanner;
mod spec;
mod wrap;

pub use args::{ArgList, ScanArg};
pub use context::Context;
pub use engine::vscan;
pub use error::{Error, Result};
pub use format::Format;
pub use result::ScanResult;
pub use scanner::Scan;
pub use spec::Spec;
pub use wrap::WrapDefault;

/// Scans `input` according to a format string, filling the given
/// arguments in order.
///
/// Placeholder syntax is `{}` for the default spec and `{:spec}` for a
/// type-specific spec; `{{` and `}}` escape literal braces. The number of
/// placeholders must equal the number of arguments.
///
/// Returns a [`ScanResult`]: scanning stops at the first failure, and the
/// result carries the residual input either way.
///
/// ```
/// use unformat::scan;
///
/// let mut count = 0u32;
/// let mut fruit = String::new();
/// let ret = scan!("5: apples", "{}: {}", count, fruit);
/// assert!(ret.is_ok());
/// assert_eq!(count, 5);
/// assert_eq!(fruit, "apples");
/// ```
#[macro_export]
macro_rules! scan {
    ($input:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::vscan(
            $input,
            $format,
            $crate::ArgList::new(&mut [$($crate::ScanArg::new(&mut $arg)),*]),
        )
    };
}

/// Reads one line from stdin and scans it.
///
/// Flushes stdout first so prompts appear, trims the trailing newline,
/// and returns `Err(Error::Io(..))` when reading fails.
///
/// ```no_run
/// use unformat::scanln;
///
/// let mut age = 0u32;
/// print!("Enter your age: ");
/// scanln!("{}", age).unwrap();
/// ```
#[macro_export]
macro_rules! scanln {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        match $crate::read_line() {
            Ok(line) => $crate::scan!(
                line.trim_end_matches('\n').trim_end_matches('\r'),
                $format
                $(, $arg)*
            )
            .status(),
            Err(err) => Err($crate::Error::Io(err.kind())),
        }
    };
}

/// Stdin plumbing for [`scanln!`].
#[doc(hidden)]
pub fn read_line() -> std::io::Result<String> {
    use std::io::Write;

    std::io::stdout().flush()?;
    let mut buffer = String::new();
    std::io::stdin().read_line(&mut buffer)?;
    Ok(buffer)
}
