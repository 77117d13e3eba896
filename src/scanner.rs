//! The extension protocol a type implements to become scannable.

use crate::context::Context;
use crate::error::Result;
use crate::spec::Spec;

/// Capability pair that makes a type scannable.
///
/// [`parse_spec`](Scan::parse_spec) interprets the text between `:` and
/// the closing brace of a placeholder; the default body accepts only an
/// empty spec, so types that need no configuration implement
/// [`scan`](Scan::scan) alone and dispatch stays uniform.
///
/// `scan` reads exactly the characters needed for one value and commits
/// them with [`Context::advance_to`]. On failure it returns the
/// appropriate error without committing the cursor past the rejected
/// token (leading whitespace it skipped stays consumed).
///
/// A type can borrow another type's whole protocol and post-process the
/// produced value — see the deferred-construction example on
/// [`WrapDefault`](crate::WrapDefault) — or decompose a composite token by
/// running a nested [`scan!`](crate::scan!) against its own sub-format and
/// copying the fields out.
pub trait Scan {
    /// Parse the placeholder spec. Defaults to the empty parser.
    fn parse_spec(spec: &str) -> Result<Spec>
    where
        Self: Sized,
    {
        Spec::empty(spec)
    }

    /// Read one value from the context's current position.
    fn scan(&mut self, spec: &Spec, ctx: &mut Context<'_>) -> Result<()>;
}
