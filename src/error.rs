//! Error types for URL parsing, building, and query indexing.

use std::fmt;

use thiserror::Error;

/// The URL component an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The scheme, e.g. `http`
    Scheme,
    /// The user information before `@`
    UserInfo,
    /// The host
    Host,
    /// The port after the host
    Port,
    /// The path
    Path,
    /// A query key or value
    Query,
    /// The fragment after `#`
    Fragment,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scheme => "scheme",
            Self::UserInfo => "user info",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when parsing a URL string or validating a field value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse URL '{input}': {kind}")]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// Returns the component the error was found in.
    #[must_use]
    pub const fn component(&self) -> Component {
        self.kind.component()
    }
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Scheme does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
    #[error("invalid scheme '{found}'")]
    InvalidScheme {
        /// The scheme that was found
        found: String,
    },
    /// A `%` not followed by two hexadecimal digits
    #[error("invalid percent-encoding in {component} at position {position}")]
    InvalidPercentEncoding {
        /// Component holding the bad escape
        component: Component,
        /// Byte offset of the `%` within the component
        position: usize,
    },
    /// Decoded octets do not form valid UTF-8
    #[error("percent-decoded {component} is not valid UTF-8")]
    InvalidUtf8 {
        /// Component that failed to decode
        component: Component,
    },
    /// Dotted-quad host with an out-of-range or malformed octet
    #[error("invalid IPv4 address '{value}'")]
    InvalidIpv4 {
        /// The rejected host
        value: String,
    },
    /// Bracketed literal that is not a valid IPv6 address
    #[error("invalid IPv6 address '{value}'")]
    InvalidIpv6 {
        /// The rejected literal, without brackets
        value: String,
    },
    /// Host that cannot be a registered name
    #[error("invalid host '{value}': {reason}")]
    InvalidHost {
        /// The rejected host
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Port containing something other than decimal digits
    #[error("invalid port '{value}'; only decimal digits are allowed")]
    InvalidPort {
        /// The rejected port
        value: String,
    },
    /// User info or port given in an authority without a host
    #[error("{component} requires a host")]
    MissingHost {
        /// The component that needs a host
        component: Component,
    },
}

impl ParseErrorKind {
    /// Returns the component the error was found in.
    #[must_use]
    pub const fn component(&self) -> Component {
        match self {
            Self::InvalidScheme { .. } => Component::Scheme,
            Self::InvalidPercentEncoding { component, .. }
            | Self::InvalidUtf8 { component }
            | Self::MissingHost { component } => *component,
            Self::InvalidIpv4 { .. } | Self::InvalidIpv6 { .. } | Self::InvalidHost { .. } => {
                Component::Host
            }
            Self::InvalidPort { .. } => Component::Port,
        }
    }
}

/// Errors for field combinations that cannot be serialized unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// User info or port is set but the host is empty
    #[error("cannot build URL: {component} is set but the host is empty")]
    MissingHost {
        /// The component that needs a host
        component: Component,
    },
    /// An authority is present but the path does not start with `/`
    #[error("cannot build URL: path '{path}' must start with '/' when an authority is present")]
    RelativePathWithAuthority {
        /// The offending path
        path: String,
    },
}

/// Any error produced by a [`Url`](crate::Url) operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The encoded string or an assigned field value violates RFC 3986
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The fields cannot be serialized into a valid URL string
    #[error(transparent)]
    Build(#[from] BuildError),
    /// A query index past the end of the sequence
    #[error("query index {index} is out of range for {len} parameters")]
    OutOfRange {
        /// The requested index
        index: usize,
        /// Number of query parameters
        len: usize,
    },
    /// The output sink of a streaming build rejected a write
    #[error("failed to write URL to the output sink")]
    Format(#[from] fmt::Error),
}

impl UrlError {
    /// Returns true if this is a parse error.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns true if this is a build error.
    #[must_use]
    pub const fn is_build(&self) -> bool {
        matches!(self, Self::Build(_))
    }

    /// Returns true if this is a query index error.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
