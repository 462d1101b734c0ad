//! Normalization of [WebFinger] resource identifiers.
//!
//! A WebFinger client receives the resource to look up as a loosely written
//! string: a bare host (`example.com`), an email-like account
//! (`nov@example.com`), or a URI with an explicit scheme (`acct:`, `mailto:`,
//! `tel:`, `device:`, `http:`, `https:`, ...). This crate turns such a string
//! into one canonical absolute URI, which can be used as a lookup key and as the
//! `resource` parameter of the discovery request.
//!
//! [WebFinger]: https://datatracker.ietf.org/doc/html/rfc7033
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use webfinger_resource::normalize;
//!
//! for (raw, canonical) in [
//!     ("example.com", "https://example.com"),
//!     ("example.com#fragment", "https://example.com"),
//!     ("nov@example.com", "acct:nov@example.com"),
//!     ("nov@example.com:8080", "https://nov@example.com:8080"),
//!     ("acct:nov@example.com#fragment", "acct:nov@example.com"),
//!     ("device:192.168.2.1/path?query#fragment", "device:192.168.2.1/path?query"),
//! ] {
//!     assert_eq!(normalize(raw)?.to_string(), canonical);
//! }
//! # }
//! # Ok::<_, webfinger_resource::MalformedIdentifierError>(())
//! ```
//!
//! See [the `normalize` function][`normalize()`] for the classification rules.
//!
//! # Normalization is idempotent
//!
//! The serialization of a canonical resource normalizes to itself. The
//! fragment is always dropped, an explicit scheme is kept as written, and a
//! scheme is assigned only when the input has none.
//!
//! # `std` and `alloc` support
//!
//! This crate supports `no_std` usage.
//!
//! * `alloc` feature:
//!     + Std library or `alloc` crate is required.
//!     + This feature enables the owned [`CanonicalUri`] type and the
//!       [`serialize`] function.
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + This automatically enables `alloc` feature.
//!     + The feature let the crate utilize std-specific stuff, such as `std::error::Error` trait.
//! * Without neither of them:
//!     + [`normalize()`] and [`Resource`] are still usable, and the serialization
//!       can be written through `core::fmt`.
//!
//! Other optional features:
//!
//! * `memchr`: uses the `memchr` crate to find delimiters.
//! * `serde`: implements `Serialize` and `Deserialize` for [`CanonicalUri`].
//!   Deserialization normalizes the input string.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod canonical;
mod components;
pub mod discovery;
mod error;
mod normalize;
pub(crate) mod parser;
pub mod percent_encode;
mod resource;
mod scheme;

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub use self::canonical::{serialize, CanonicalUri};
pub use self::error::{ErrorKind, MalformedIdentifierError};
pub use self::normalize::normalize;
pub use self::resource::Resource;
pub use self::scheme::Scheme;
