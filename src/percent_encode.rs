//! Percent encoding.

use core::fmt::{self, Write as _};

use crate::parser::char;

/// A proxy to percent-encode a string as a query parameter value.
///
/// Every character other than `unreserved` ones (ASCII alphanumerics, `-`,
/// `.`, `_`, and `~`) is written as UTF-8 octets in `%XX` form, so the result
/// can be placed after `name=` in a query without being mistaken for a
/// delimiter.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "alloc")] {
/// use webfinger_resource::percent_encode::QueryParam;
///
/// assert_eq!(
///     QueryParam::new("acct:nov@example.com").to_string(),
///     "acct%3Anov%40example.com"
/// );
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryParam<T> {
    /// Raw string before being encoded.
    raw: T,
}

impl<T: fmt::Display> QueryParam<T> {
    /// Creates an encoding proxy for the given raw value.
    #[inline]
    #[must_use]
    pub fn new(raw: T) -> Self {
        Self { raw }
    }
}

impl<T: fmt::Display> fmt::Display for QueryParam<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Filter that encodes a character before written if necessary.
        struct Filter<'a, 'b> {
            /// Writer.
            writer: &'a mut fmt::Formatter<'b>,
        }
        impl fmt::Write for Filter<'_, '_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                s.chars().try_for_each(|c| self.write_char(c))
            }
            fn write_char(&mut self, c: char) -> fmt::Result {
                if c.is_ascii() && char::is_ascii_unreserved(c as u8) {
                    self.writer.write_char(c)
                } else {
                    write_pct_encoded_char(&mut self.writer, c)
                }
            }
        }
        let mut filter = Filter { writer: f };
        write!(filter, "{}", self.raw)
    }
}

/// Percent-encodes the given character and writes it.
#[inline]
fn write_pct_encoded_char<W: fmt::Write>(writer: &mut W, c: char) -> fmt::Result {
    let mut buf = [0_u8; 4];
    let buf = c.encode_utf8(&mut buf);
    buf.bytes().try_for_each(|b| write!(writer, "%{:02X}", b))
}
