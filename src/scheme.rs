//! Schemes of canonical resource URIs.

/// Classification of the scheme of a canonical resource URI.
///
/// The scheme string itself is kept as given in the input (for example
/// `HTTPS` stays `HTTPS`); this type only tells which family it belongs to.
/// Known names are matched ASCII case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// `https`.
    Https,
    /// `http`.
    Http,
    /// `acct` ([RFC 7565](https://datatracker.ietf.org/doc/html/rfc7565)).
    Acct,
    /// `mailto`.
    Mailto,
    /// `tel`.
    Tel,
    /// `device`.
    Device,
    /// Any other scheme.
    Other,
}

impl Scheme {
    /// Classifies the given scheme name.
    ///
    /// # Examples
    ///
    /// ```
    /// use webfinger_resource::Scheme;
    ///
    /// assert_eq!(Scheme::classify("acct"), Scheme::Acct);
    /// assert_eq!(Scheme::classify("HTTPS"), Scheme::Https);
    /// assert_eq!(Scheme::classify("urn"), Scheme::Other);
    /// ```
    #[must_use]
    pub fn classify(name: &str) -> Self {
        const KNOWN: &[(&str, Scheme)] = &[
            ("https", Scheme::Https),
            ("http", Scheme::Http),
            ("acct", Scheme::Acct),
            ("mailto", Scheme::Mailto),
            ("tel", Scheme::Tel),
            ("device", Scheme::Device),
        ];
        KNOWN
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map_or(Scheme::Other, |&(_, scheme)| scheme)
    }

    /// Returns whether the scheme is one of the names the normalizer knows.
    #[inline]
    #[must_use]
    pub fn is_known(self) -> bool {
        self != Self::Other
    }

    /// Returns whether URIs of this scheme are written without `//`.
    ///
    /// Returns `None` for [`Scheme::Other`], since it depends on the input.
    #[must_use]
    pub(crate) fn is_opaque(self) -> Option<bool> {
        match self {
            Self::Https | Self::Http => Some(false),
            Self::Acct | Self::Mailto | Self::Tel | Self::Device => Some(true),
            Self::Other => None,
        }
    }
}
