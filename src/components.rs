//! The decoded field form of a URL.

use std::fmt;

use crate::host::IpVersion;
use crate::query::KeyVal;

/// Whether the URL has an authority, and whether it names a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Authority {
    /// No `//` at all (e.g. `mailto:a@b`)
    #[default]
    Absent,
    /// `//` followed by an empty host (e.g. `file:///etc`)
    Empty,
    /// `//` followed by a non-empty host
    Host,
}

/// The seven decoded components plus the presence markers needed to
/// reproduce empty-but-present delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Components {
    pub(crate) scheme: String,
    pub(crate) authority: Authority,
    pub(crate) user_info: Option<String>,
    pub(crate) host: String,
    pub(crate) ip_version: IpVersion,
    pub(crate) port: Option<String>,
    pub(crate) path: String,
    pub(crate) query: Vec<KeyVal>,
    /// A bare `?` with no parameters was parsed
    pub(crate) empty_query: bool,
    pub(crate) fragment: Option<String>,
}

impl Components {
    pub(crate) fn has_query(&self) -> bool {
        !self.query.is_empty() || self.empty_query
    }

    /// Writes one line per component.
    pub(crate) fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "scheme: {}", self.scheme)?;
        writeln!(out, "user_info: {}", self.user_info.as_deref().unwrap_or(""))?;
        writeln!(out, "host: {} ({})", self.host, self.ip_version)?;
        writeln!(out, "port: {}", self.port.as_deref().unwrap_or(""))?;
        writeln!(out, "path: {}", self.path)?;
        write!(out, "query:")?;
        for kv in &self.query {
            write!(out, " {kv}")?;
        }
        writeln!(out)?;
        writeln!(out, "fragment: {}", self.fragment.as_deref().unwrap_or(""))
    }
}
