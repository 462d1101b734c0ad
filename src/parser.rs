//! Parser.
//!
//! Parsing runs in two steps. First the raw identifier is classified into a
//! [`Shape`] by an ordered list of matchers; then the scheme-specific part is
//! decomposed into [`Components`].
//!
//! Every component is checked against its character set of RFC 3986, with
//! non-ASCII characters allowed as RFC 3987 does.

use crate::components::Components;
use crate::error::{ErrorKind, MalformedIdentifierError};
use crate::scheme::Scheme;

use self::str::{
    find_split2, find_split3, find_split4_hole, find_split_hole, satisfy_chars_with_pct_encoded,
    split_ascii_digits,
};

pub(crate) mod char;
mod str;

/// Result type with the normalization error.
type Result<T> = core::result::Result<T, MalformedIdentifierError>;

/// Shape of a raw identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape<'a> {
    /// `scheme:rest`.
    ExplicitScheme {
        /// Scheme, as written in the input.
        scheme: &'a str,
        /// Classification of the scheme.
        kind: Scheme,
        /// String after the colon.
        rest: &'a str,
    },
    /// `user@host...` without a scheme.
    UserAtHost(&'a str),
    /// `host...` without a scheme and userinfo.
    BareHost(&'a str),
}

/// A classifier that claims the input or passes it to the next one.
type Matcher = for<'a> fn(&'a str) -> Option<Shape<'a>>;

/// Matchers in the order of precedence.
const MATCHERS: &[Matcher] = &[explicit_scheme, user_at_host, bare_host];

/// Classifies the raw identifier.
#[must_use]
pub(crate) fn classify(i: &str) -> Shape<'_> {
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(i))
        .unwrap_or(Shape::BareHost(i))
}

/// Matches `scheme:rest`.
///
/// A scheme other than the known ones also looks like `host:port`, so it is
/// accepted only when followed by `//`, or by a non-empty string that does not
/// start with a digit.
fn explicit_scheme(i: &str) -> Option<Shape<'_>> {
    let (scheme, rest) = find_split_hole(i, b':')?;
    if !char::is_scheme(scheme) {
        return None;
    }
    let kind = Scheme::classify(scheme);
    if !kind.is_known() {
        let port_like = rest.bytes().next().map_or(true, |b| b.is_ascii_digit());
        if port_like {
            return None;
        }
    }
    Some(Shape::ExplicitScheme { scheme, kind, rest })
}

/// Matches `user@host...`.
///
/// The at sign counts only if it comes before any `/`, `?`, and `#`.
fn user_at_host(i: &str) -> Option<Shape<'_>> {
    match find_split4_hole(i, b'@', b'/', b'?', b'#') {
        Some((_, b'@', _)) => Some(Shape::UserAtHost(i)),
        _ => None,
    }
}

/// Matches anything.
fn bare_host(i: &str) -> Option<Shape<'_>> {
    Some(Shape::BareHost(i))
}

/// Decomposes `[userinfo@]host[:port][/path][?query][#fragment]`.
pub(crate) fn decompose_hierarchical(i: &str) -> Result<Components<'_>> {
    let (i, userinfo) = userinfo_at_opt(i)?;
    let (host_port, i) = find_split3(i, b'/', b'?', b'#').unwrap_or((i, ""));
    let (host, port) = host_port_opt(host_port)?;
    let (path, i) = find_split2(i, b'?', b'#').unwrap_or((i, ""));
    validate_chars(path, char::is_ascii_path, char::is_ucschar)?;
    let (query, fragment) = decompose_query_and_fragment(i)?;

    Ok(Components {
        userinfo,
        host,
        port,
        path,
        query,
        fragment,
    })
}

/// Decomposes `opaque[?query][#fragment]`.
///
/// The opaque part is reported as the host.
pub(crate) fn decompose_opaque(i: &str) -> Result<Components<'_>> {
    let (opaque, i) = find_split2(i, b'?', b'#').unwrap_or((i, ""));
    if opaque.is_empty() {
        return Err(MalformedIdentifierError::new(ErrorKind::EmptyHost));
    }
    validate_chars(opaque, char::is_ascii_path, char::is_ucschar)?;
    let (query, fragment) = decompose_query_and_fragment(i)?;

    Ok(Components {
        userinfo: None,
        host: opaque,
        port: None,
        path: "",
        query,
        fragment,
    })
}

/// Eats `userinfo@` if available, and returns the rest and the userinfo.
fn userinfo_at_opt(i: &str) -> Result<(&str, Option<&str>)> {
    match find_split4_hole(i, b'@', b'/', b'?', b'#') {
        Some(("", b'@', _)) => Err(MalformedIdentifierError::new(ErrorKind::EmptyUserinfo)),
        Some((userinfo, b'@', rest)) => {
            validate_chars(userinfo, char::is_ascii_userinfo, char::is_ucschar)?;
            Ok((rest, Some(userinfo)))
        }
        _ => Ok((i, None)),
    }
}

/// Decomposes `host[:port]`.
fn host_port_opt(i: &str) -> Result<(&str, Option<u16>)> {
    let (host, port) = if i.starts_with('[') {
        let (literal, rest) = find_split_hole(i, b']')
            .ok_or_else(|| MalformedIdentifierError::new(ErrorKind::UnexpectedChar))?;
        let inner = &literal[1..];
        if !inner.bytes().all(char::is_ascii_ip_literal) {
            return Err(MalformedIdentifierError::new(ErrorKind::UnexpectedChar));
        }
        if inner.is_empty() {
            return Err(MalformedIdentifierError::new(ErrorKind::EmptyHost));
        }
        let port = match rest.strip_prefix(':') {
            Some(port) => Some(port),
            None if rest.is_empty() => None,
            None => return Err(MalformedIdentifierError::new(ErrorKind::UnexpectedChar)),
        };
        // Including the closing bracket.
        (&i[..(literal.len() + 1)], port)
    } else {
        let (host, port) = match find_split_hole(i, b':') {
            Some((host, port)) => (host, Some(port)),
            None => (i, None),
        };
        if host.is_empty() {
            return Err(MalformedIdentifierError::new(ErrorKind::EmptyHost));
        }
        validate_chars(host, char::is_ascii_regname, char::is_ucschar)?;
        (host, port)
    };

    Ok((host, port.map(parse_port).transpose()?.flatten()))
}

/// Parses the port. An empty port is treated as absent.
fn parse_port(s: &str) -> Result<Option<u16>> {
    if s.is_empty() {
        return Ok(None);
    }
    let (digits, rest) = split_ascii_digits(s);
    if digits.is_empty() || !rest.is_empty() {
        return Err(MalformedIdentifierError::new(ErrorKind::InvalidPort));
    }
    digits
        .parse::<u16>()
        .map(Some)
        .map_err(|_| MalformedIdentifierError::new(ErrorKind::InvalidPort))
}

/// Decomposes query and fragment, if available.
///
/// The string must start with `?`, or `#`, or be empty. Empty query is treated
/// as absent.
fn decompose_query_and_fragment(i: &str) -> Result<(Option<&str>, Option<&str>)> {
    let (query, fragment) = match i.as_bytes().first().copied() {
        None => (None, None),
        Some(b'?') => {
            let rest = &i[1..];
            let (query, fragment) = match find_split_hole(rest, b'#') {
                Some((query, fragment)) => (query, Some(fragment)),
                None => (rest, None),
            };
            (Some(query).filter(|q| !q.is_empty()), fragment)
        }
        Some(c) => {
            debug_assert_eq!(c, b'#');
            (None, Some(&i[1..]))
        }
    };
    if let Some(query) = query {
        validate_chars(query, char::is_ascii_frag_query, char::is_nonascii_query)?;
    }
    if let Some(fragment) = fragment {
        validate_chars(fragment, char::is_ascii_frag_query, char::is_ucschar)?;
    }

    Ok((query, fragment))
}

/// Returns `Ok(())` if the component consists of allowed characters and
/// well-formed percent-encoded triplets.
fn validate_chars(
    s: &str,
    pred_ascii: fn(u8) -> bool,
    pred_nonascii: fn(char) -> bool,
) -> Result<()> {
    if satisfy_chars_with_pct_encoded(s, pred_ascii, pred_nonascii) {
        Ok(())
    } else {
        Err(MalformedIdentifierError::new(ErrorKind::UnexpectedChar))
    }
}
