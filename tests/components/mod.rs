//! Test cases.
#![allow(dead_code)]

/// Test case.
#[derive(Debug, Clone, Copy)]
pub struct TestCase<'a> {
    /// Raw identifier.
    pub raw: &'a str,
    /// Expected serialization of the canonical resource.
    pub normalized: &'a str,
    /// Expected scheme.
    pub scheme: &'a str,
    /// Expected userinfo.
    pub userinfo: Option<&'a str>,
    /// Expected host.
    pub host: &'a str,
    /// Expected port.
    pub port: Option<u16>,
    /// Expected path.
    pub path: &'a str,
    /// Expected query.
    pub query: Option<&'a str>,
}

impl TestCase<'_> {
    #[inline]
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        self.raw.contains('#')
    }
}

macro_rules! case {
    ($raw:expr => $normalized:expr, $scheme:expr, $userinfo:expr, $host:expr, $port:expr, $path:expr, $query:expr $(,)?) => {
        TestCase {
            raw: $raw,
            normalized: $normalized,
            scheme: $scheme,
            userinfo: $userinfo,
            host: $host,
            port: $port,
            path: $path,
            query: $query,
        }
    };
}

/// Bare hosts.
const BARE_HOST: &[TestCase<'static>] = &[
    case!("example.com" => "https://example.com", "https", None, "example.com", None, "", None),
    case!("example.com:8080" => "https://example.com:8080", "https", None, "example.com", Some(8080), "", None),
    case!("example.com/path" => "https://example.com/path", "https", None, "example.com", None, "/path", None),
    case!("example.com?query" => "https://example.com?query", "https", None, "example.com", None, "", Some("query")),
    case!("example.com#fragment" => "https://example.com", "https", None, "example.com", None, "", None),
    case!(
        "example.com:8080/path?query#fragment" => "https://example.com:8080/path?query",
        "https", None, "example.com", Some(8080), "/path", Some("query"),
    ),
];

/// `http:` URIs.
const HTTP: &[TestCase<'static>] = &[
    case!("http://example.com" => "http://example.com", "http", None, "example.com", None, "", None),
    case!("http://example.com:8080" => "http://example.com:8080", "http", None, "example.com", Some(8080), "", None),
    case!("http://example.com/path" => "http://example.com/path", "http", None, "example.com", None, "/path", None),
    case!("http://example.com?query" => "http://example.com?query", "http", None, "example.com", None, "", Some("query")),
    case!("http://example.com#fragment" => "http://example.com", "http", None, "example.com", None, "", None),
    case!(
        "http://example.com:8080/path?query#fragment" => "http://example.com:8080/path?query",
        "http", None, "example.com", Some(8080), "/path", Some("query"),
    ),
];

/// Accounts without a scheme.
const USER_AT_HOST: &[TestCase<'static>] = &[
    case!("nov@example.com" => "acct:nov@example.com", "acct", Some("nov"), "example.com", None, "", None),
    case!(
        "nov@example.com:8080" => "https://nov@example.com:8080",
        "https", Some("nov"), "example.com", Some(8080), "", None,
    ),
    case!(
        "nov@example.com/path" => "https://nov@example.com/path",
        "https", Some("nov"), "example.com", None, "/path", None,
    ),
    case!(
        "nov@example.com?query" => "https://nov@example.com?query",
        "https", Some("nov"), "example.com", None, "", Some("query"),
    ),
    case!("nov@example.com#fragment" => "acct:nov@example.com", "acct", Some("nov"), "example.com", None, "", None),
    case!(
        "nov@example.com:8080/path?query#fragment" => "https://nov@example.com:8080/path?query",
        "https", Some("nov"), "example.com", Some(8080), "/path", Some("query"),
    ),
];

/// `acct:` URIs.
const ACCT: &[TestCase<'static>] = &[
    case!("acct:nov@matake.jp" => "acct:nov@matake.jp", "acct", Some("nov"), "matake.jp", None, "", None),
    case!(
        "acct:nov@example.com:8080" => "acct:nov@example.com:8080",
        "acct", Some("nov"), "example.com", Some(8080), "", None,
    ),
    case!(
        "acct:nov@example.com/path" => "acct:nov@example.com/path",
        "acct", Some("nov"), "example.com", None, "/path", None,
    ),
    case!(
        "acct:nov@example.com?query" => "acct:nov@example.com?query",
        "acct", Some("nov"), "example.com", None, "", Some("query"),
    ),
    case!(
        "acct:nov@example.com#fragment" => "acct:nov@example.com",
        "acct", Some("nov"), "example.com", None, "", None,
    ),
    case!(
        "acct:nov@example.com:8080/path?query#fragment" => "acct:nov@example.com:8080/path?query",
        "acct", Some("nov"), "example.com", Some(8080), "/path", Some("query"),
    ),
];

/// `mailto:` URIs.
const MAILTO: &[TestCase<'static>] = &[
    case!("mailto:nov@matake.jp" => "mailto:nov@matake.jp", "mailto", Some("nov"), "matake.jp", None, "", None),
    case!(
        "mailto:nov@example.com:8080" => "mailto:nov@example.com:8080",
        "mailto", Some("nov"), "example.com", Some(8080), "", None,
    ),
    case!(
        "mailto:nov@example.com/path" => "mailto:nov@example.com/path",
        "mailto", Some("nov"), "example.com", None, "/path", None,
    ),
    case!(
        "mailto:nov@example.com?query" => "mailto:nov@example.com?query",
        "mailto", Some("nov"), "example.com", None, "", Some("query"),
    ),
    case!(
        "mailto:nov@example.com#fragment" => "mailto:nov@example.com",
        "mailto", Some("nov"), "example.com", None, "", None,
    ),
    case!(
        "mailto:nov@example.com:8080/path?query#fragment" => "mailto:nov@example.com:8080/path?query",
        "mailto", Some("nov"), "example.com", Some(8080), "/path", Some("query"),
    ),
];

/// `tel:` and `device:` URIs.
const TEL_AND_DEVICE: &[TestCase<'static>] = &[
    case!("tel:+810312345678" => "tel:+810312345678", "tel", None, "+810312345678", None, "", None),
    case!("device:192.168.2.1" => "device:192.168.2.1", "device", None, "192.168.2.1", None, "", None),
    case!(
        "device:192.168.2.1:8080" => "device:192.168.2.1:8080",
        "device", None, "192.168.2.1", Some(8080), "", None,
    ),
    case!(
        "device:192.168.2.1/path" => "device:192.168.2.1/path",
        "device", None, "192.168.2.1", None, "/path", None,
    ),
    case!(
        "device:192.168.2.1?query" => "device:192.168.2.1?query",
        "device", None, "192.168.2.1", None, "", Some("query"),
    ),
    case!("device:192.168.2.1#fragment" => "device:192.168.2.1", "device", None, "192.168.2.1", None, "", None),
    case!(
        "device:192.168.2.1/path?query#fragment" => "device:192.168.2.1/path?query",
        "device", None, "192.168.2.1", None, "/path", Some("query"),
    ),
];

/// Hosts with many labels.
const MULTI_LABEL_HOST: &[TestCase<'static>] = &[
    case!(
        "openid-mitre.7f0613ea.svc.dockerapp.io" => "https://openid-mitre.7f0613ea.svc.dockerapp.io",
        "https", None, "openid-mitre.7f0613ea.svc.dockerapp.io", None, "", None,
    ),
    case!(
        "openid-mitre.7f0613ea.svc.dockerapp.io/path" => "https://openid-mitre.7f0613ea.svc.dockerapp.io/path",
        "https", None, "openid-mitre.7f0613ea.svc.dockerapp.io", None, "/path", None,
    ),
    case!(
        "openid-mitre.7f0613ea.svc.dockerapp.io?query" => "https://openid-mitre.7f0613ea.svc.dockerapp.io?query",
        "https", None, "openid-mitre.7f0613ea.svc.dockerapp.io", None, "", Some("query"),
    ),
    case!(
        "openid-mitre.7f0613ea.svc.dockerapp.io#fragment" => "https://openid-mitre.7f0613ea.svc.dockerapp.io",
        "https", None, "openid-mitre.7f0613ea.svc.dockerapp.io", None, "", None,
    ),
    case!(
        "openid-mitre.7f0613ea.svc.dockerapp.io/path?query#fragment"
            => "https://openid-mitre.7f0613ea.svc.dockerapp.io/path?query",
        "https", None, "openid-mitre.7f0613ea.svc.dockerapp.io", None, "/path", Some("query"),
    ),
    case!(
        "nov@openid-mitre.7f0613ea.svc.dockerapp.io/path" => "https://nov@openid-mitre.7f0613ea.svc.dockerapp.io/path",
        "https", Some("nov"), "openid-mitre.7f0613ea.svc.dockerapp.io", None, "/path", None,
    ),
    case!(
        "nov@openid-mitre.7f0613ea.svc.dockerapp.io?query" => "https://nov@openid-mitre.7f0613ea.svc.dockerapp.io?query",
        "https", Some("nov"), "openid-mitre.7f0613ea.svc.dockerapp.io", None, "", Some("query"),
    ),
    case!(
        "nov@openid-mitre.7f0613ea.svc.dockerapp.io#fragment" => "acct:nov@openid-mitre.7f0613ea.svc.dockerapp.io",
        "acct", Some("nov"), "openid-mitre.7f0613ea.svc.dockerapp.io", None, "", None,
    ),
    case!(
        "nov@openid-mitre.7f0613ea.svc.dockerapp.io/path?query#fragment"
            => "https://nov@openid-mitre.7f0613ea.svc.dockerapp.io/path?query",
        "https", Some("nov"), "openid-mitre.7f0613ea.svc.dockerapp.io", None, "/path", Some("query"),
    ),
];

/// Test case groups.
pub const TEST_CASE_GROUPS: &[&[TestCase<'static>]] = &[
    BARE_HOST,
    HTTP,
    USER_AT_HOST,
    ACCT,
    MAILTO,
    TEL_AND_DEVICE,
    MULTI_LABEL_HOST,
];

/// Returns all test cases.
pub fn test_cases() -> impl Iterator<Item = &'static TestCase<'static>> {
    TEST_CASE_GROUPS.iter().flat_map(|group| group.iter())
}

/// Inputs that should be rejected.
pub const MALFORMED: &[&str] = &[
    "",
    "acct:",
    "mailto:",
    "tel:",
    "device:",
    "http://",
    "https:",
    "nov@",
    "@example.com",
    "#fragment",
    "?query",
    "/path",
    ":8080",
    "example.com:80x",
    "example.com:70000",
    "nov@example.com:8080:8080",
    "a@b@example.com",
    "example.com/a b",
    "example.com\t",
    "exa<mple.com",
    "example.com/\"{}|^`",
    "example.com?<query>",
    "example.com#frag#ment",
    "nov@ex%mple.com",
    "example.com/%2",
    "n\\ov@example.com",
    "[::1%25eth0]",
    "tel:+81<3>",
    "urn:isbn:%zz",
    "mailto:a@example.com,b@example.org",
];
