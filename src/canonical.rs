//! Owned canonical resource URI.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Range;
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::error::MalformedIdentifierError;
use crate::normalize::normalize;
use crate::resource::Resource;
use crate::scheme::Scheme;

/// Serializes the canonical resource into a string.
///
/// This is the same as `resource.to_string()`.
///
/// # Examples
///
/// ```
/// use webfinger_resource::{normalize, serialize};
///
/// let resource = normalize("acct:nov@example.com#fragment")?;
/// assert_eq!(serialize(&resource), "acct:nov@example.com");
/// # Ok::<_, webfinger_resource::MalformedIdentifierError>(())
/// ```
#[must_use]
pub fn serialize(resource: &Resource<'_>) -> String {
    resource.to_string()
}

/// An owned canonical resource URI.
///
/// The serialized string and the positions of the components are kept
/// together, so the string can be used as a lookup key and the components can
/// be inspected without parsing again.
///
/// Comparison and hashing use the serialized string.
///
/// # Examples
///
/// ```
/// use webfinger_resource::CanonicalUri;
///
/// let uri = CanonicalUri::new("nov@example.com")?;
/// assert_eq!(uri, "acct:nov@example.com");
/// assert_eq!(uri.userinfo(), Some("nov"));
/// assert_eq!(uri.host(), "example.com");
///
/// let uri: CanonicalUri = "example.com:8080/path?query#fragment".parse()?;
/// assert_eq!(uri.as_str(), "https://example.com:8080/path?query");
/// # Ok::<_, webfinger_resource::MalformedIdentifierError>(())
/// ```
#[derive(Clone)]
pub struct CanonicalUri {
    /// Serialized canonical form.
    serialized: String,
    /// End of the scheme.
    scheme_end: usize,
    /// Classification of the scheme.
    kind: Scheme,
    /// Whether `//` is absent after the scheme.
    opaque: bool,
    /// Range of the userinfo.
    userinfo: Option<Range<usize>>,
    /// Range of the host.
    host: Range<usize>,
    /// Port.
    port: Option<u16>,
    /// Range of the path.
    path: Range<usize>,
    /// Range of the query.
    query: Option<Range<usize>>,
}

impl CanonicalUri {
    /// Normalizes the raw identifier into an owned canonical URI.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedIdentifierError`] on the same inputs
    /// [`normalize`][`crate::normalize()`] rejects.
    pub fn new(raw: &str) -> Result<Self, MalformedIdentifierError> {
        normalize(raw).map(Self::from)
    }

    /// Returns the serialized canonical form.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.serialized
    }

    /// Returns the serialized canonical form.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.serialized
    }

    /// Returns the borrowed view.
    #[must_use]
    pub fn as_resource(&self) -> Resource<'_> {
        Resource {
            scheme: self.scheme(),
            kind: self.kind,
            opaque: self.opaque,
            userinfo: self.userinfo(),
            host: self.host(),
            port: self.port,
            path: self.path(),
            query: self.query(),
        }
    }

    /// Returns the scheme.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.serialized[..self.scheme_end]
    }

    /// Returns the classification of the scheme.
    #[inline]
    #[must_use]
    pub fn scheme_kind(&self) -> Scheme {
        self.kind
    }

    /// Returns whether the serialization has no `//` after the scheme.
    #[inline]
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Returns the userinfo.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.clone().map(|range| &self.serialized[range])
    }

    /// Returns the host.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.serialized[self.host.clone()]
    }

    /// Returns the port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.serialized[self.path.clone()]
    }

    /// Returns the query.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.clone().map(|range| &self.serialized[range])
    }
}

/// Appends `s` to `buf`, and returns the range it occupies.
fn push_range(buf: &mut String, s: &str) -> Range<usize> {
    let start = buf.len();
    buf.push_str(s);
    start..buf.len()
}

impl From<Resource<'_>> for CanonicalUri {
    fn from(resource: Resource<'_>) -> Self {
        let mut serialized = String::new();
        serialized.push_str(resource.scheme);
        let scheme_end = serialized.len();
        serialized.push_str(if resource.opaque { ":" } else { "://" });
        let userinfo = resource.userinfo.map(|userinfo| {
            let range = push_range(&mut serialized, userinfo);
            serialized.push('@');
            range
        });
        let host = push_range(&mut serialized, resource.host);
        if let Some(port) = resource.port {
            serialized.push(':');
            serialized.push_str(&port.to_string());
        }
        let path = push_range(&mut serialized, resource.path);
        let query = resource.query.map(|query| {
            serialized.push('?');
            push_range(&mut serialized, query)
        });
        debug_assert_eq!(serialized, resource.to_string());

        Self {
            serialized,
            scheme_end,
            kind: resource.kind,
            opaque: resource.opaque,
            userinfo,
            host,
            port: resource.port,
            path,
            query,
        }
    }
}

impl Resource<'_> {
    /// Converts the resource into an owned canonical URI.
    #[inline]
    #[must_use]
    pub fn to_canonical(&self) -> CanonicalUri {
        CanonicalUri::from(*self)
    }
}

impl FromStr for CanonicalUri {
    type Err = MalformedIdentifierError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for CanonicalUri {
    type Error = MalformedIdentifierError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for CanonicalUri {
    type Error = MalformedIdentifierError;

    #[inline]
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl AsRef<str> for CanonicalUri {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<CanonicalUri> for String {
    #[inline]
    fn from(uri: CanonicalUri) -> Self {
        uri.into_string()
    }
}

impl fmt::Display for CanonicalUri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CanonicalUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CanonicalUri").field(&self.as_str()).finish()
    }
}

impl PartialEq for CanonicalUri {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.serialized == other.serialized
    }
}

impl Eq for CanonicalUri {}

impl PartialOrd for CanonicalUri {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CanonicalUri {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.serialized.cmp(&other.serialized)
    }
}

impl Hash for CanonicalUri {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serialized.hash(state);
    }
}

impl PartialEq<str> for CanonicalUri {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CanonicalUri {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<CanonicalUri> for str {
    #[inline]
    fn eq(&self, other: &CanonicalUri) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<CanonicalUri> for &str {
    #[inline]
    fn eq(&self, other: &CanonicalUri) -> bool {
        *self == other.as_str()
    }
}

/// Serde support.
#[cfg(feature = "serde")]
mod __serde {
    use super::CanonicalUri;

    use core::fmt;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for CanonicalUri {
        #[inline]
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    /// Visitor that normalizes the given string.
    #[derive(Debug, Clone, Copy)]
    struct CanonicalUriVisitor;

    impl<'de> Visitor<'de> for CanonicalUriVisitor {
        type Value = CanonicalUri;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a WebFinger resource identifier")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            CanonicalUri::new(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for CanonicalUri {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(CanonicalUriVisitor)
        }
    }
}
