//! RFC 3986 grammar builder: decoded components to an encoded string.
//!
//! The builder validates the whole field combination before writing anything,
//! so a sink never receives a partial URL from a rejected build.

use std::fmt::{self, Write};

use crate::components::{Authority, Components};
use crate::encoding::{
    FRAGMENT_ENCODE, PATH_ENCODE, PATH_NOSCHEME_ENCODE, QUERY_KEY_ENCODE, QUERY_VALUE_ENCODE,
    REG_NAME_ENCODE, USER_INFO_ENCODE, write_encoded,
};
use crate::error::{BuildError, Component, UrlError};
use crate::host::IpVersion;

/// Checks that the components serialize to a string that parses back to them.
fn validate(parts: &Components) -> Result<(), BuildError> {
    if parts.host.is_empty() {
        if parts.user_info.is_some() {
            return Err(BuildError::MissingHost {
                component: Component::UserInfo,
            });
        }
        if parts.port.is_some() {
            return Err(BuildError::MissingHost {
                component: Component::Port,
            });
        }
    }

    if parts.authority != Authority::Absent
        && !parts.path.is_empty()
        && !parts.path.starts_with('/')
    {
        return Err(BuildError::RelativePathWithAuthority {
            path: parts.path.clone(),
        });
    }

    Ok(())
}

/// Validates the components and writes their encoded form to `out`.
pub(crate) fn write<W: Write>(parts: &Components, out: &mut W) -> Result<(), UrlError> {
    validate(parts)?;
    write_unchecked(parts, out)?;
    Ok(())
}

/// Builds the encoded form into a new string.
pub(crate) fn build(parts: &Components) -> Result<String, UrlError> {
    let mut out = String::with_capacity(estimated_len(parts));
    write(parts, &mut out)?;
    Ok(out)
}

fn write_unchecked<W: Write>(parts: &Components, out: &mut W) -> fmt::Result {
    if !parts.scheme.is_empty() {
        out.write_str(&parts.scheme)?;
        out.write_char(':')?;
    }

    if parts.authority != Authority::Absent {
        out.write_str("//")?;
        if let Some(user_info) = &parts.user_info {
            write_encoded(out, user_info, USER_INFO_ENCODE)?;
            out.write_char('@')?;
        }
        match parts.ip_version {
            IpVersion::V6 => write!(out, "[{}]", parts.host)?,
            IpVersion::V4 => out.write_str(&parts.host)?,
            IpVersion::Name | IpVersion::Undefined => {
                write_encoded(out, &parts.host, REG_NAME_ENCODE)?;
            }
        }
        if let Some(port) = &parts.port {
            out.write_char(':')?;
            out.write_str(port)?;
        }
    }

    if parts.authority == Authority::Absent && parts.path.starts_with("//") {
        // A literal "//" would be read back as an authority
        out.write_str("/%2F")?;
        write_encoded(out, &parts.path[2..], PATH_ENCODE)?;
    } else if parts.scheme.is_empty() && parts.authority == Authority::Absent {
        let (first, rest) = parts
            .path
            .split_at(parts.path.find('/').unwrap_or(parts.path.len()));
        write_encoded(out, first, PATH_NOSCHEME_ENCODE)?;
        write_encoded(out, rest, PATH_ENCODE)?;
    } else {
        write_encoded(out, &parts.path, PATH_ENCODE)?;
    }

    if parts.has_query() {
        out.write_char('?')?;
        for (i, kv) in parts.query.iter().enumerate() {
            if i > 0 {
                out.write_char('&')?;
            }
            write_encoded(out, kv.key(), QUERY_KEY_ENCODE)?;
            // An empty key keeps its '=' so a lone empty pair is not read as a bare '?'
            if !kv.val().is_empty() || kv.key().is_empty() {
                out.write_char('=')?;
                write_encoded(out, kv.val(), QUERY_VALUE_ENCODE)?;
            }
        }
    }

    if let Some(fragment) = &parts.fragment {
        out.write_char('#')?;
        write_encoded(out, fragment, FRAGMENT_ENCODE)?;
    }

    Ok(())
}

fn estimated_len(parts: &Components) -> usize {
    let query: usize = parts
        .query
        .iter()
        .map(|kv| kv.key().len() + kv.val().len() + 2)
        .sum();
    parts.scheme.len()
        + parts.user_info.as_ref().map_or(0, String::len)
        + parts.host.len()
        + parts.port.as_ref().map_or(0, String::len)
        + parts.path.len()
        + query
        + parts.fragment.as_ref().map_or(0, String::len)
        + 8
}
