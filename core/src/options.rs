//! Configuration options for guard checks.

/// Configuration options for building guard failure messages.
///
/// # Example
///
/// ```
/// use warden_core::GuardOptions;
///
/// let options = GuardOptions { show_types: false };
/// assert!(GuardOptions::default().show_types);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardOptions {
    /// Include the parameter's type name in messages, as in
    /// `Parameter "count" (int) must be ...`.
    ///
    /// Default: true
    pub show_types: bool,
}

impl Default for GuardOptions {
    fn default() -> Self {
        Self { show_types: true }
    }
}
