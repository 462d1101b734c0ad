//! Helpers for characters.

/// Checks if the given string matches `scheme` rule of RFC 3986.
///
/// ```text
/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
/// ```
pub(crate) fn is_scheme(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

/// Checks if the given character matches `unreserved` rule.
#[inline]
pub(crate) fn is_ascii_unreserved(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'.' | b'_' | b'~')
}

/// Checks if the given character matches `sub-delim` rule.
#[inline]
pub(crate) fn is_sub_delim(c: u8) -> bool {
    matches!(
        c,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Checks if the given ASCII character is allowed in `userinfo` (except `pct-encoded`).
#[inline]
pub(crate) fn is_ascii_userinfo(c: u8) -> bool {
    is_ascii_unreserved(c) || is_sub_delim(c) || c == b':'
}

/// Checks if the given ASCII character is allowed in `reg-name` (except `pct-encoded`).
#[inline]
pub(crate) fn is_ascii_regname(c: u8) -> bool {
    is_ascii_unreserved(c) || is_sub_delim(c)
}

/// Checks if the given ASCII character is allowed between the brackets of
/// `IP-literal`.
///
/// This covers both `IPv6address` and `IPvFuture` characters; the address
/// itself is not parsed.
#[inline]
pub(crate) fn is_ascii_ip_literal(c: u8) -> bool {
    is_ascii_unreserved(c) || is_sub_delim(c) || c == b':'
}

/// Checks if the given ASCII character matches `pchar` (except `pct-encoded`).
#[inline]
pub(crate) fn is_ascii_pchar(c: u8) -> bool {
    is_ascii_unreserved(c) || is_sub_delim(c) || matches!(c, b':' | b'@')
}

/// Checks if the given ASCII character is allowed in a path (`pchar` or `/`).
#[inline]
pub(crate) fn is_ascii_path(c: u8) -> bool {
    c == b'/' || is_ascii_pchar(c)
}

/// Checks if the given ASCII character is allowed in `query` and `fragment`.
#[inline]
pub(crate) fn is_ascii_frag_query(c: u8) -> bool {
    matches!(c, b'/' | b'?') || is_ascii_pchar(c)
}

/// Checks if the given character matches `ucschar` rule.
pub(crate) fn is_ucschar(c: char) -> bool {
    matches!(
        u32::from(c),
        0xA0..=0xD7FF |
        0xF900..=0xFDCF |
        0xFDF0..=0xFFEF |
        0x1_0000..=0x1_FFFD |
        0x2_0000..=0x2_FFFD |
        0x3_0000..=0x3_FFFD |
        0x4_0000..=0x4_FFFD |
        0x5_0000..=0x5_FFFD |
        0x6_0000..=0x6_FFFD |
        0x7_0000..=0x7_FFFD |
        0x8_0000..=0x8_FFFD |
        0x9_0000..=0x9_FFFD |
        0xA_0000..=0xA_FFFD |
        0xB_0000..=0xB_FFFD |
        0xC_0000..=0xC_FFFD |
        0xD_0000..=0xD_FFFD |
        0xE_1000..=0xE_FFFD
    )
}

/// Checks if the given non-ASCII character is allowed in `iquery`.
///
/// `iprivate` is only allowed in queries.
pub(crate) fn is_nonascii_query(c: char) -> bool {
    is_ucschar(c)
        || matches!(
            u32::from(c),
            0xE000..=0xF8FF | 0xF_0000..=0xF_FFFD | 0x10_0000..=0x10_FFFD
        )
}

/// Checks if the given byte can never appear in a resource identifier.
///
/// ASCII control characters (including DEL) and ASCII whitespaces.
#[inline]
pub(crate) fn is_forbidden(b: u8) -> bool {
    b.is_ascii_control() || b == b' '
}
