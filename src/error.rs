//! Error codes shared by every layer of the scanning pipeline.

/// The closed set of ways a scan can fail.
///
/// Errors travel by return value from scanner to engine to caller; the
/// engine never recovers on its own. [`Error::Io`] only ever comes out of
/// the stdin convenience layer.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Placeholder/argument count mismatch, malformed spec text,
    /// unterminated placeholder or unescaped brace.
    #[error("invalid format string")]
    InvalidFormatString,

    /// A token is present but does not parse as the requested type.
    #[error("invalid scanned value")]
    InvalidScannedValue,

    /// The token has the right lexical shape but overflows the requested
    /// type.
    #[error("scanned value out of range")]
    ValueOutOfRange,

    /// Input ran out before a token completed.
    #[error("unexpected end of input")]
    EndOfRange,

    /// Reading the underlying stream failed.
    #[error("io error: {0:?}")]
    Io(std::io::ErrorKind),
}

pub type Result<T> = std::result::Result<T, Error>;
