//! Functions for common string operations.
//!
//! With `memchr` feature, delimiter search is done by the `memchr` crate.

/// Returns the position of the first `needle` in `haystack`.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    memchr::memchr(needle, haystack)
}

/// Returns the position of the first `needle` in `haystack`.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}

/// Returns the position of the first `needle1` or `needle2` in `haystack`.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find2(haystack: &[u8], needle1: u8, needle2: u8) -> Option<usize> {
    memchr::memchr2(needle1, needle2, haystack)
}

/// Returns the position of the first `needle1` or `needle2` in `haystack`.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find2(haystack: &[u8], needle1: u8, needle2: u8) -> Option<usize> {
    haystack
        .iter()
        .position(|&b| b == needle1 || b == needle2)
}

/// Returns the position of the first `needle1`, `needle2`, or `needle3` in `haystack`.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    memchr::memchr3(needle1, needle2, needle3, haystack)
}

/// Returns the position of the first `needle1`, `needle2`, or `needle3` in `haystack`.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    haystack
        .iter()
        .position(|&b| b == needle1 || b == needle2 || b == needle3)
}

/// Returns the position of the first of the four needles in `haystack`.
#[must_use]
fn find4(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8, needle4: u8) -> Option<usize> {
    let bound = find3(haystack, needle2, needle3, needle4);
    let searched = match bound {
        Some(pos) => &haystack[..pos],
        None => haystack,
    };
    find(searched, needle1).or(bound)
}

/// Splits the string at the first `delim`, and removes the delimiter.
///
/// Returns `(before, after)`.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, delim: u8) -> Option<(&str, &str)> {
    find(s.as_bytes(), delim).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the first `delim1` or `delim2`, and keeps the delimiter.
///
/// Returns `(before, delim_and_after)`.
#[inline]
#[must_use]
pub(crate) fn find_split2(s: &str, delim1: u8, delim2: u8) -> Option<(&str, &str)> {
    find2(s.as_bytes(), delim1, delim2).map(|pos| s.split_at(pos))
}

/// Splits the string at the first `delim1`, `delim2`, or `delim3`, and keeps the delimiter.
///
/// Returns `(before, delim_and_after)`.
#[inline]
#[must_use]
pub(crate) fn find_split3(s: &str, delim1: u8, delim2: u8, delim3: u8) -> Option<(&str, &str)> {
    find3(s.as_bytes(), delim1, delim2, delim3).map(|pos| s.split_at(pos))
}

/// Splits the string at the first delimiter, and removes it.
///
/// Returns `(before, delim, after)`.
#[must_use]
pub(crate) fn find_split4_hole(
    s: &str,
    delim1: u8,
    delim2: u8,
    delim3: u8,
    delim4: u8,
) -> Option<(&str, u8, &str)> {
    find4(s.as_bytes(), delim1, delim2, delim3, delim4)
        .map(|pos| (&s[..pos], s.as_bytes()[pos], &s[(pos + 1)..]))
}

/// Returns the string with the leading ASCII digits removed, and the digits.
///
/// Returns `(digits, rest)`.
#[inline]
#[must_use]
pub(crate) fn split_ascii_digits(s: &str) -> (&str, &str) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(len)
}

/// Returns true if every character in the string satisfies the predicate
/// for its class.
#[must_use]
fn satisfy_chars<F, G>(s: &str, pred_ascii: F, pred_nonascii: G) -> bool
where
    F: Copy + Fn(u8) -> bool,
    G: Copy + Fn(char) -> bool,
{
    s.chars().all(|c| {
        if c.is_ascii() {
            pred_ascii(c as u8)
        } else {
            pred_nonascii(c)
        }
    })
}

/// Returns true if the string consists of allowed characters and
/// well-formed `pct-encoded` triplets.
#[must_use]
pub(crate) fn satisfy_chars_with_pct_encoded<F, G>(
    mut s: &str,
    pred_ascii: F,
    pred_nonascii: G,
) -> bool
where
    F: Copy + Fn(u8) -> bool,
    G: Copy + Fn(char) -> bool,
{
    while let Some((prefix, suffix)) = find_split_hole(s, b'%') {
        if !satisfy_chars(prefix, pred_ascii, pred_nonascii) {
            return false;
        }
        match suffix.as_bytes() {
            [upper, lower, ..] if upper.is_ascii_hexdigit() && lower.is_ascii_hexdigit() => {}
            _ => return false,
        }
        s = &suffix[2..];
    }

    satisfy_chars(s, pred_ascii, pred_nonascii)
}
