//! WebFinger discovery request target.
//!
//! A WebFinger client asks the host of a resource about the resource itself:
//!
//! ```text
//! GET https://example.com/.well-known/webfinger?resource=acct%3Anov%40example.com&rel=...
//! ```
//!
//! [`DiscoveryRequest`] renders that URL from a canonical resource. Sending the
//! request is up to the caller.
//!
//! Resources without a network host, such as `tel:+810312345678` or
//! `urn:isbn:0451450523`, have no server to ask, so no request can be made for
//! them.

use core::fmt;

use crate::percent_encode::QueryParam;
use crate::resource::Resource;
use crate::scheme::Scheme;

/// Path of the WebFinger endpoint.
pub const WELL_KNOWN_PATH: &str = "/.well-known/webfinger";

/// Link relation for OpenID Connect issuer discovery.
pub const ISSUER_REL: &str = "http://openid.net/specs/connect/1.0/issuer";

/// A WebFinger discovery request URL for a canonical resource.
///
/// The [`Display`][`fmt::Display`] implementation renders
/// `{scheme}://host[:port]/.well-known/webfinger?resource=...[&rel=...]`.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "alloc")] {
/// use webfinger_resource::discovery::{DiscoveryRequest, ISSUER_REL};
/// use webfinger_resource::normalize;
///
/// let resource = normalize("nov@example.com")?;
/// let request = DiscoveryRequest::new(resource)
///     .expect("accounts have a host")
///     .with_rels(&[ISSUER_REL]);
/// assert_eq!(
///     request.to_string(),
///     "https://example.com/.well-known/webfinger\
///      ?resource=acct%3Anov%40example.com\
///      &rel=http%3A%2F%2Fopenid.net%2Fspecs%2Fconnect%2F1.0%2Fissuer"
/// );
///
/// assert!(DiscoveryRequest::new(normalize("tel:+810312345678")?).is_none());
/// # }
/// # Ok::<_, webfinger_resource::MalformedIdentifierError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DiscoveryRequest<'a> {
    /// Resource to ask about.
    resource: Resource<'a>,
    /// Link relations to ask for.
    rels: &'a [&'a str],
    /// Whether to use `https` even for `http` resources.
    force_https: bool,
}

impl<'a> DiscoveryRequest<'a> {
    /// Creates a request for the resource, without link relations.
    ///
    /// Returns `None` if the resource has no network host to send the request
    /// to (see [`Resource::has_network_host`]).
    #[must_use]
    pub fn new(resource: Resource<'a>) -> Option<Self> {
        if !resource.has_network_host() {
            return None;
        }
        Some(Self {
            resource,
            rels: &[],
            force_https: false,
        })
    }

    /// Sets the link relations. One `rel` parameter is written per entry.
    #[inline]
    #[must_use]
    pub fn with_rels(self, rels: &'a [&'a str]) -> Self {
        Self { rels, ..self }
    }

    /// Sets whether to use `https` for the request even if the resource is an
    /// `http` URI. Defaults to `false`.
    #[inline]
    #[must_use]
    pub fn force_https(self, force_https: bool) -> Self {
        Self {
            force_https,
            ..self
        }
    }

    /// Returns the resource.
    #[inline]
    #[must_use]
    pub fn resource(&self) -> Resource<'a> {
        self.resource
    }

    /// Returns the scheme of the request URL.
    #[must_use]
    pub fn target_scheme(&self) -> &'static str {
        match self.resource.scheme_kind() {
            Scheme::Http if !self.force_https => "http",
            _ => "https",
        }
    }
}

impl fmt::Display for DiscoveryRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.target_scheme(), self.resource.host())?;
        if let Some(port) = self.resource.port() {
            write!(f, ":{}", port)?;
        }
        write!(
            f,
            "{}?resource={}",
            WELL_KNOWN_PATH,
            QueryParam::new(&self.resource)
        )?;
        self.rels
            .iter()
            .try_for_each(|rel| write!(f, "&rel={}", QueryParam::new(rel)))
    }
}

#[cfg(feature = "alloc")]
#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::ToString;

    use crate::normalize;

    /// Returns the request for the raw identifier.
    fn request(raw: &str) -> DiscoveryRequest<'_> {
        let resource = normalize(raw).expect("valid");
        DiscoveryRequest::new(resource).expect("has network host")
    }

    #[test]
    fn account_without_rels() {
        assert_eq!(
            request("acct:nov@example.com").to_string(),
            "https://example.com/.well-known/webfinger?resource=acct%3Anov%40example.com"
        );
    }

    #[test]
    fn port_is_kept_and_path_is_encoded() {
        assert_eq!(
            request("example.com:8080/path?query").to_string(),
            "https://example.com:8080/.well-known/webfinger\
             ?resource=https%3A%2F%2Fexample.com%3A8080%2Fpath%3Fquery"
        );
    }

    #[test]
    fn http_resource() {
        let plain = request("http://example.com");
        assert_eq!(plain.target_scheme(), "http");
        assert!(plain.to_string().starts_with("http://example.com/"));

        let forced = plain.force_https(true);
        assert_eq!(forced.target_scheme(), "https");
        assert!(forced.to_string().starts_with("https://example.com/"));
    }

    #[test]
    fn multiple_rels() {
        let with_rels = request("nov@example.com").with_rels(&["self", "profile page"]);
        assert_eq!(
            with_rels.to_string(),
            "https://example.com/.well-known/webfinger\
             ?resource=acct%3Anov%40example.com&rel=self&rel=profile%20page"
        );
    }

    #[test]
    fn no_request_without_network_host() {
        for raw in ["tel:+810312345678", "urn:isbn:0451450523", "urn:isbn:0451450523?q"] {
            let resource = normalize(raw).expect("valid");
            assert!(DiscoveryRequest::new(resource).is_none(), "raw={:?}", raw);
        }
        assert_eq!(
            request("device:192.168.2.1:8080").to_string(),
            "https://192.168.2.1:8080/.well-known/webfinger\
             ?resource=device%3A192.168.2.1%3A8080"
        );
        assert_eq!(
            request("xmpp://nov@example.com:5222").to_string(),
            "https://example.com:5222/.well-known/webfinger\
             ?resource=xmpp%3A%2F%2Fnov%40example.com%3A5222"
        );
    }
}
