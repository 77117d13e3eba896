//! The outcome of one top-level scan call.

use crate::error::Error;

/// Success or failure of a scan, plus the residual input either way.
///
/// On failure the residual input sits exactly where the failing scanner
/// left it, so the caller can report the position or feed it into an
/// independent follow-up call ("chaining"). Characters consumed by a
/// successful placeholder are never re-processed.
#[must_use = "a scan result reports failure through its value, not by panicking"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult<'a> {
    remaining: &'a str,
    error: Option<Error>,
}

impl<'a> ScanResult<'a> {
    pub(crate) fn ok(remaining: &'a str) -> Self {
        Self {
            remaining,
            error: None,
        }
    }

    pub(crate) fn fail(remaining: &'a str, error: Error) -> Self {
        Self {
            remaining,
            error: Some(error),
        }
    }

    /// True when every literal matched and every placeholder was filled.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The first error encountered, if any.
    pub fn error(&self) -> Option<Error> {
        self.error
    }

    /// Input left over after the last fully consumed token.
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    /// The outcome without the residual input, for `?` propagation inside
    /// [`Scan`](crate::Scan) implementations.
    pub fn status(&self) -> crate::error::Result<()> {
        match self.error {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}
