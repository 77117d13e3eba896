//! Two-phase storage for types without a default value.

use std::ops::Deref;

/// Holds either nothing or a fully constructed `T`.
///
/// The engine needs a storage slot for every argument before any value is
/// known, which rules out scanning directly into a type with no default.
/// A `WrapDefault<T>` starts empty; its [`Scan`](crate::Scan)
/// implementation scans an intermediate value through a delegate scanner
/// and constructs `T` from it only on success, so a failed scan leaves
/// the wrapper empty rather than half-built.
///
/// Check [`has_value`](WrapDefault::has_value) or use
/// [`get`](WrapDefault::get) before dereferencing; dereferencing an empty
/// wrapper panics.
///
/// ```
/// use unformat::{scan, Context, Scan, Spec, WrapDefault};
///
/// struct Celsius(i32); // no Default
///
/// impl Scan for WrapDefault<Celsius> {
///     fn parse_spec(spec: &str) -> unformat::Result<Spec> {
///         i32::parse_spec(spec)
///     }
///
///     fn scan(&mut self, spec: &Spec, ctx: &mut Context<'_>) -> unformat::Result<()> {
///         let mut raw = 0i32;
///         raw.scan(spec, ctx)?;
///         self.set(Celsius(raw));
///         Ok(())
///     }
/// }
///
/// let mut degrees = WrapDefault::<Celsius>::default();
/// let ret = scan!("42", "{}", degrees);
/// assert!(ret.is_ok());
/// assert_eq!(degrees.get().map(|c| c.0), Some(42));
/// ```
#[derive(Debug)]
pub struct WrapDefault<T> {
    slot: Option<T>,
}

impl<T> WrapDefault<T> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// True once a scan has populated the wrapper.
    pub fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Installs the constructed value; called by delegating scanners on
    /// success.
    pub fn set(&mut self, value: T) {
        self.slot = Some(value);
    }

    pub fn into_inner(self) -> Option<T> {
        self.slot
    }
}

impl<T> Default for WrapDefault<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for WrapDefault<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.slot
            .as_ref()
            .expect("scanned value accessed before a successful scan")
    }
}
