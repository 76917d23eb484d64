//! A URL value (RFC 3986) with lazy conversion between its encoded string and
//! its decoded components.
//!
//! # Overview
//!
//! A [`Url`] holds either an encoded string, decoded components, or both:
//!
//! ```text
//! scheme ":" [ "//" [ user-info "@" ] host [ ":" port ] ] path [ "?" query ] [ "#" fragment ]
//! ```
//!
//! Reading a component parses the string if it changed; reading the string
//! rebuilds it if a component changed. Each conversion runs at most once per
//! change.
//!
//! # Quick Start
//!
//! ```rust
//! use lazy_url::{IpVersion, KeyVal, Url};
//!
//! let mut url = Url::from("http://[2001:db8::1]/x");
//! assert_eq!(url.host()?, "2001:db8::1");
//! assert_eq!(url.ip_version()?, IpVersion::V6);
//!
//! url.add_query("q", "a b")?;
//! assert_eq!(url.as_str()?, "http://[2001:db8::1]/x?q=a%20b");
//! assert_eq!(url.query_at(0)?, &KeyVal::new("q", "a b"));
//! # Ok::<(), lazy_url::UrlError>(())
//! ```
//!
//! # Building from Components
//!
//! ```rust
//! use lazy_url::Url;
//!
//! let mut url = Url::new();
//! url.set_scheme("https")?
//!     .set_host("example.com")?
//!     .set_port_number(8443)?
//!     .set_path("/a path")?
//!     .add_query_key("verbose")?
//!     .set_fragment("top")?;
//! assert_eq!(url.as_str()?, "https://example.com:8443/a%20path?verbose#top");
//! # Ok::<(), lazy_url::UrlError>(())
//! ```
//!
//! # Errors
//!
//! Invalid strings surface as [`ParseError`] on the first component read after
//! they are assigned; field combinations that cannot be serialized surface as
//! [`UrlError::Build`] (wrapping a [`BuildError`]) on the next string read. Query indexing past the end is a
//! separate [`UrlError::OutOfRange`]. A failed operation leaves the value
//! unchanged.
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Url`] (as its encoded string),
//!   [`KeyVal`], and [`IpVersion`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod components;
mod encoding;
mod error;
mod host;
mod parser;
pub mod prelude;
mod query;
mod url;

pub use error::{BuildError, Component, ParseError, ParseErrorKind, UrlError};
pub use host::IpVersion;
pub use query::KeyVal;
pub use url::Url;
