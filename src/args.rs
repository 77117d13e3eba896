//! Type-erased argument list: one slot per placeholder.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::scanner::Scan;

/// Object-safe bridge over [`Scan`].
///
/// `Scan::parse_spec` takes no receiver and cannot be called through
/// `dyn`, so this trait runs the whole spec-then-scan sequence behind one
/// dispatchable method.
trait Slot {
    fn fill(&mut self, spec: &str, ctx: &mut Context<'_>) -> Result<()>;
}

impl<T: Scan> Slot for T {
    fn fill(&mut self, spec: &str, ctx: &mut Context<'_>) -> Result<()> {
        let spec = T::parse_spec(spec)?;
        self.scan(&spec, ctx)
    }
}

/// One scannable value reference paired with its dispatch table.
pub struct ScanArg<'a> {
    slot: &'a mut dyn Slot,
}

impl<'a> ScanArg<'a> {
    pub fn new<T: Scan>(value: &'a mut T) -> Self {
        Self { slot: value }
    }

    pub(crate) fn fill(&mut self, spec: &str, ctx: &mut Context<'_>) -> Result<()> {
        self.slot.fill(spec, ctx)
    }
}

/// Ordered argument slots for one scan call, consumed strictly left to
/// right; slot *i* is only ever matched to placeholder *i*.
pub struct ArgList<'l, 'v> {
    args: &'l mut [ScanArg<'v>],
    next: usize,
}

impl<'l, 'v> ArgList<'l, 'v> {
    pub fn new(args: &'l mut [ScanArg<'v>]) -> Self {
        Self { args, next: 0 }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The next unconsumed slot, or `InvalidFormatString` when the format
    /// string carries more placeholders than arguments.
    pub(crate) fn take_next(&mut self) -> Result<&mut ScanArg<'v>> {
        let arg = self
            .args
            .get_mut(self.next)
            .ok_or(Error::InvalidFormatString)?;
        self.next += 1;
        Ok(arg)
    }
}
