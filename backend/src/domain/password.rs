//! Stored credential wrapper.

use std::fmt;

use zeroize::Zeroizing;

/// Plain-text credential held for equality checks.
///
/// The buffer is wiped on drop and the value never appears in `Debug` output.
/// Comparison is plain string equality; no hashing is applied.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a raw credential string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Zeroizing::new(raw.into()))
    }

    /// Borrow the credential for persistence.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Whether `candidate` matches the stored credential.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_str() == candidate
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
