//! Cursor state for one scan call.

/// Tracks how much input one top-level scan call has consumed.
///
/// Created fresh per call and never shared. The only way forward is
/// [`advance_to`](Context::advance_to), and there is no way back: a
/// scanner that rejects a token simply does not commit it, leaving the
/// cursor at the position preceding the rejected token.
#[derive(Debug)]
pub struct Context<'a> {
    remaining: &'a str,
}

impl<'a> Context<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { remaining: input }
    }

    /// Input not yet consumed.
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Commits consumption up to `tail`, which must be a tail of the
    /// current remaining input.
    pub fn advance_to(&mut self, tail: &'a str) {
        debug_assert!(
            tail.len() <= self.remaining.len(),
            "scan cursor moved backward"
        );
        self.remaining = tail;
    }

    /// Consumes any run of leading whitespace. Scanners for
    /// whitespace-delimited tokens call this before lexing.
    pub fn skip_whitespace(&mut self) {
        self.remaining = self.remaining.trim_start();
    }
}
