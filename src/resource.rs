//! Canonical resource URI.

use core::fmt;

use crate::components::Components;
use crate::scheme::Scheme;

/// A canonical resource URI, borrowing from the raw identifier.
///
/// Values of this type are created by [`normalize`][`crate::normalize()`].
/// The [`Display`][`fmt::Display`] implementation is the serialization of the
/// canonical form: `scheme:` or `scheme://`, followed by
/// `[userinfo@]host[:port]path[?query]`. A fragment is never part of a
/// canonical resource.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "alloc")] {
/// use webfinger_resource::{normalize, Scheme};
///
/// let resource = normalize("nov@example.com:8080/path#fragment")?;
/// assert_eq!(resource.scheme(), "https");
/// assert_eq!(resource.scheme_kind(), Scheme::Https);
/// assert_eq!(resource.userinfo(), Some("nov"));
/// assert_eq!(resource.host(), "example.com");
/// assert_eq!(resource.port(), Some(8080));
/// assert_eq!(resource.path(), "/path");
/// assert_eq!(resource.query(), None);
/// assert_eq!(resource.to_string(), "https://nov@example.com:8080/path");
/// # }
/// # Ok::<_, webfinger_resource::MalformedIdentifierError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resource<'a> {
    /// Scheme, as given in the input or assigned by the normalizer.
    pub(crate) scheme: &'a str,
    /// Classification of the scheme.
    pub(crate) kind: Scheme,
    /// Whether the URI is written without `//` after the scheme.
    pub(crate) opaque: bool,
    /// Userinfo.
    pub(crate) userinfo: Option<&'a str>,
    /// Host, or the opaque scheme-specific part.
    pub(crate) host: &'a str,
    /// Port.
    pub(crate) port: Option<u16>,
    /// Path.
    pub(crate) path: &'a str,
    /// Query.
    pub(crate) query: Option<&'a str>,
}

impl<'a> Resource<'a> {
    /// Creates a resource from the scheme and the parsed components.
    ///
    /// The fragment in the components is dropped.
    #[must_use]
    pub(crate) fn from_components(
        scheme: &'a str,
        kind: Scheme,
        opaque: bool,
        components: Components<'a>,
    ) -> Self {
        Self {
            scheme,
            kind,
            opaque,
            userinfo: components.userinfo,
            host: components.host,
            port: components.port,
            path: components.path,
            query: components.query,
        }
    }

    /// Returns the scheme.
    ///
    /// Explicit schemes are returned as written in the input.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &'a str {
        self.scheme
    }

    /// Returns the classification of the scheme.
    #[inline]
    #[must_use]
    pub fn scheme_kind(&self) -> Scheme {
        self.kind
    }

    /// Returns whether the serialization has no `//` after the scheme.
    ///
    /// True for `acct:`, `mailto:`, `tel:`, `device:`, and for other schemes
    /// given without `//`.
    #[inline]
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Returns the userinfo, without the trailing `@`.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a str> {
        self.userinfo
    }

    /// Returns the host.
    ///
    /// For `tel:` and other opaque identifiers, this is the whole
    /// scheme-specific part before the query.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &'a str {
        self.host
    }

    /// Returns whether [`host()`][`Self::host`] is a network host.
    ///
    /// False for `tel:` and for opaque identifiers of other schemes (such as
    /// `urn:isbn:0451450523`), whose host is the scheme-specific part.
    #[must_use]
    pub fn has_network_host(&self) -> bool {
        !matches!(
            (self.kind, self.opaque),
            (Scheme::Tel, _) | (Scheme::Other, true)
        )
    }

    /// Returns the port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the path. Empty or starts with `/`.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Returns the query, without the leading `?`.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&'a str> {
        self.query
    }
}

impl fmt::Display for Resource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme)?;
        f.write_str(if self.opaque { ":" } else { "://" })?;
        if let Some(userinfo) = self.userinfo {
            write!(f, "{}@", userinfo)?;
        }
        f.write_str(self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        f.write_str(self.path)?;
        if let Some(query) = self.query {
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}
