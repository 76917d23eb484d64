//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use lazy_url::prelude::*;
//!
//! let mut url = Url::from("http://example.com/");
//! assert_eq!(url.ip_version().unwrap(), IpVersion::Name);
//! ```

pub use crate::{
    // Core types
    IpVersion, KeyVal, Url,
    // Errors
    BuildError, Component, ParseError, ParseErrorKind, UrlError,
};
