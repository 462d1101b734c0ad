//! Components of resource identifiers.

/// Components parsed from the scheme-specific part of a resource identifier.
///
/// This is a transient value: the scheme is decided separately, and the
/// fragment is dropped when the canonical resource is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Components<'a> {
    /// Userinfo, without the trailing `@`.
    ///
    /// Never `Some("")`.
    pub(crate) userinfo: Option<&'a str>,
    /// Host.
    ///
    /// For opaque identifiers (such as `tel:`) this is the whole scheme-specific
    /// part before the query. Never empty.
    pub(crate) host: &'a str,
    /// Port.
    pub(crate) port: Option<u16>,
    /// Path.
    ///
    /// Either empty or starts with `/`.
    pub(crate) path: &'a str,
    /// Query, without the leading `?`.
    ///
    /// Never `Some("")`.
    pub(crate) query: Option<&'a str>,
    /// Fragment, without the leading `#`.
    // Never part of a canonical resource; kept for inspection in tests.
    #[allow(dead_code)]
    pub(crate) fragment: Option<&'a str>,
}

impl Components<'_> {
    /// Returns whether the components are exactly `user@host`, ignoring the fragment.
    ///
    /// Such an identifier without a scheme denotes an account rather than a
    /// network resource.
    #[inline]
    #[must_use]
    pub(crate) fn is_bare_account(&self) -> bool {
        self.userinfo.is_some() && self.port.is_none() && self.path.is_empty() && self.query.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Components with only `userinfo` and `host`.
    fn account() -> Components<'static> {
        Components {
            userinfo: Some("nov"),
            host: "example.com",
            port: None,
            path: "",
            query: None,
            fragment: None,
        }
    }

    #[test]
    fn bare_account() {
        assert!(account().is_bare_account());
        assert!(Components {
            fragment: Some("fragment"),
            ..account()
        }
        .is_bare_account());
    }

    #[test]
    fn not_bare_account() {
        assert!(!Components {
            userinfo: None,
            ..account()
        }
        .is_bare_account());
        assert!(!Components {
            port: Some(8080),
            ..account()
        }
        .is_bare_account());
        assert!(!Components {
            path: "/path",
            ..account()
        }
        .is_bare_account());
        assert!(!Components {
            query: Some("query"),
            ..account()
        }
        .is_bare_account());
    }
}
