//! Normalization of resource identifiers.
//!
//! # Classification
//!
//! The raw identifier is classified by the first of these rules that applies:
//!
//! 1. **Explicit scheme**: `scheme:rest`.
//!     + The scheme is kept as written.
//!     + `http` and `https` are serialized with `//`; `acct`, `mailto`,
//!       `tel`, and `device` without it. A `//` after the colon is accepted
//!       in any case.
//!     + `tel:` keeps everything before the fragment as an opaque token.
//!     + Other schemes are explicit only when followed by `//` (parsed as an
//!       authority), or by a string not starting with a digit (kept opaque).
//!       Otherwise `name:digits` is a host and a port.
//! 2. **User at host**: `user@host...`, where the `@` comes before any `/`,
//!    `?`, and `#`.
//!     + Exactly `user@host` (possibly with a fragment) becomes
//!       `acct:user@host`.
//!     + With a port, a path, or a query, it becomes `https://user@host...`.
//! 3. **Bare host**: anything else becomes `https://host...`.
//!
//! The fragment is always dropped. Each component must consist of the
//! characters URIs allow there; nothing is percent-encoded or decoded.

use crate::error::{ErrorKind, MalformedIdentifierError};
use crate::parser::{self, char, Shape};
use crate::resource::Resource;
use crate::scheme::Scheme;

/// Scheme assigned to account identifiers without a scheme.
const ACCT: &str = "acct";

/// Scheme assigned to other identifiers without a scheme.
const HTTPS: &str = "https";

/// Normalizes the raw resource identifier into a canonical resource URI.
///
/// The returned value borrows from the input; see
/// [`CanonicalUri`][`crate::CanonicalUri`] for an owned version.
///
/// # Errors
///
/// Returns [`MalformedIdentifierError`] when no host can be extracted from the
/// input, or the input contains a malformed port, a malformed percent-encoded
/// triplet, or a character not allowed in its component.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "alloc")] {
/// use webfinger_resource::normalize;
///
/// assert_eq!(normalize("nov@example.com")?.to_string(), "acct:nov@example.com");
/// assert_eq!(normalize("nov@example.com/path")?.to_string(), "https://nov@example.com/path");
/// assert_eq!(normalize("example.com#fragment")?.to_string(), "https://example.com");
/// assert_eq!(
///     normalize("http://example.com:8080/path?query#fragment")?.to_string(),
///     "http://example.com:8080/path?query"
/// );
/// assert_eq!(normalize("tel:+810312345678")?.to_string(), "tel:+810312345678");
/// assert!(normalize("").is_err());
/// # }
/// # Ok::<_, webfinger_resource::MalformedIdentifierError>(())
/// ```
pub fn normalize(raw: &str) -> Result<Resource<'_>, MalformedIdentifierError> {
    if raw.is_empty() {
        return Err(MalformedIdentifierError::new(ErrorKind::Empty));
    }
    if raw.bytes().any(char::is_forbidden) {
        return Err(MalformedIdentifierError::new(ErrorKind::UnexpectedChar));
    }

    match parser::classify(raw) {
        Shape::ExplicitScheme { scheme, kind, rest } => explicit_scheme(scheme, kind, rest),
        Shape::UserAtHost(rest) => {
            let components = parser::decompose_hierarchical(rest)?;
            let resource = if components.is_bare_account() {
                Resource::from_components(ACCT, Scheme::Acct, true, components)
            } else {
                Resource::from_components(HTTPS, Scheme::Https, false, components)
            };
            Ok(resource)
        }
        Shape::BareHost(rest) => {
            let components = parser::decompose_hierarchical(rest)?;
            Ok(Resource::from_components(
                HTTPS,
                Scheme::Https,
                false,
                components,
            ))
        }
    }
}

/// Builds a resource for the identifier with an explicit scheme.
fn explicit_scheme<'a>(
    scheme: &'a str,
    kind: Scheme,
    rest: &'a str,
) -> Result<Resource<'a>, MalformedIdentifierError> {
    let slashed = rest.strip_prefix("//");
    let opaque = kind.is_opaque().unwrap_or(slashed.is_none());
    let rest = slashed.unwrap_or(rest);

    let components = match kind {
        Scheme::Tel => parser::decompose_opaque(rest)?,
        Scheme::Other if opaque => parser::decompose_opaque(rest)?,
        _ => parser::decompose_hierarchical(rest)?,
    };
    Ok(Resource::from_components(scheme, kind, opaque, components))
}
