//! Normalization error.

use core::fmt;

/// Error on normalizing a resource identifier.
///
/// This is the only error the normalizer returns. The detailed cause is
/// available through [`kind()`][`Self::kind`], but callers are not expected
/// to recover from any of them: the same input always fails the same way.
// Note that this type should implement `Copy` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MalformedIdentifierError {
    /// Detailed cause.
    kind: ErrorKind,
}

impl MalformedIdentifierError {
    /// Creates a new error.
    ///
    /// For internal use.
    #[inline]
    #[must_use]
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for MalformedIdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ErrorKind::Empty => "empty identifier",
            ErrorKind::EmptyHost => "identifier has no host",
            ErrorKind::EmptyUserinfo => "identifier has an empty user part before `@`",
            ErrorKind::InvalidPort => "identifier has an invalid port",
            ErrorKind::UnexpectedChar => "identifier contains an unexpected character",
        };
        write!(f, "malformed resource identifier: {}", msg)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for MalformedIdentifierError {}

/// Detailed cause of a [`MalformedIdentifierError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input is an empty string.
    Empty,
    /// No host (or opaque scheme-specific part) could be extracted.
    ///
    /// For example `acct:`, `nov@`, `http://`, and `#fragment`.
    EmptyHost,
    /// The input has `@` but nothing before it, such as `@example.com`.
    EmptyUserinfo,
    /// The port is not a decimal number in `0..=65535`.
    InvalidPort,
    /// A character is not allowed at its position.
    ///
    /// ASCII whitespace and control characters are never allowed. Each
    /// component must consist of the characters RFC 3986 allows there
    /// (non-ASCII characters as RFC 3987 allows) and well-formed `%XX`
    /// triplets. A host must not contain `@`, `[`, or `]` unless it is an IP
    /// literal.
    ///
    /// Since the part after `mailto:` is read as `user@host`, a `mailto:` URI
    /// with several recipients (such as `mailto:a@example.com,b@example.org`)
    /// is rejected with this error.
    UnexpectedChar,
}
