//! RFC 3986 grammar parser: encoded string to decoded components.
//!
//! ```abnf
//! URI-reference = [ scheme ":" ] [ "//" authority ] path [ "?" query ] [ "#" fragment ]
//! authority     = [ userinfo "@" ] host [ ":" port ]
//! scheme        = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
//! port          = *DIGIT
//! ```

use crate::components::{Authority, Components};
use crate::encoding::decode;
use crate::error::{Component, ParseError, ParseErrorKind};
use crate::host::{IpVersion, classify_decoded, validate_ipv6};
use crate::query::KeyVal;

/// Parses an encoded URL string into its decoded components.
pub(crate) fn parse(input: &str) -> Result<Components, ParseError> {
    parse_components(input).map_err(|kind| ParseError::new(input, kind))
}

/// Validates and lowercases a scheme.
pub(crate) fn parse_scheme(scheme: &str) -> Result<String, ParseErrorKind> {
    let mut bytes = scheme.bytes();
    let valid = bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'));
    if !valid {
        return Err(ParseErrorKind::InvalidScheme {
            found: scheme.to_string(),
        });
    }
    Ok(scheme.to_ascii_lowercase())
}

/// Checks that a port is all decimal digits.
pub(crate) fn validate_port(port: &str) -> Result<(), ParseErrorKind> {
    if port.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ParseErrorKind::InvalidPort {
            value: port.to_string(),
        })
    }
}

fn parse_components(input: &str) -> Result<Components, ParseErrorKind> {
    let mut parts = Components::default();
    let mut rest = input;

    // A scheme ends at a ':' seen before any other delimiter
    if let Some(end) = rest.find([':', '/', '?', '#']) {
        if rest.as_bytes()[end] == b':' {
            parts.scheme = parse_scheme(&rest[..end])?;
            rest = &rest[end + 1..];
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        parse_authority(&after[..end], &mut parts)?;
        rest = &after[end..];
    }

    let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
    parts.path = decode(&rest[..path_end], Component::Path)?.into_owned();
    rest = &rest[path_end..];

    if let Some(after) = rest.strip_prefix('?') {
        let end = after.find('#').unwrap_or(after.len());
        parse_query(&after[..end], &mut parts)?;
        rest = &after[end..];
    }

    if let Some(after) = rest.strip_prefix('#') {
        parts.fragment = Some(decode(after, Component::Fragment)?.into_owned());
    }

    Ok(parts)
}

fn parse_authority(authority: &str, parts: &mut Components) -> Result<(), ParseErrorKind> {
    let (user_info, host_port) = match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    };

    if let Some(user_info) = user_info {
        parts.user_info = Some(decode(user_info, Component::UserInfo)?.into_owned());
    }

    let (host, port) = split_host_port(host_port)?;

    if let Some(port) = port {
        validate_port(port)?;
        parts.port = Some(port.to_string());
    }

    if let Some(literal) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        validate_ipv6(literal)?;
        parts.host = literal.to_string();
        parts.ip_version = IpVersion::V6;
    } else {
        if host.contains(['[', ']']) {
            return Err(ParseErrorKind::InvalidHost {
                value: host.to_string(),
                reason: "brackets are only allowed around an IPv6 literal",
            });
        }
        let decoded = decode(host, Component::Host)?;
        parts.ip_version = classify_decoded(&decoded)?;
        parts.host = decoded.into_owned();
    }

    if parts.host.is_empty() {
        if parts.user_info.is_some() {
            return Err(ParseErrorKind::MissingHost {
                component: Component::UserInfo,
            });
        }
        if parts.port.is_some() {
            return Err(ParseErrorKind::MissingHost {
                component: Component::Port,
            });
        }
        parts.authority = Authority::Empty;
    } else {
        parts.authority = Authority::Host;
    }

    Ok(())
}

/// Splits `host[:port]` at the last ':' outside an IPv6 literal.
fn split_host_port(host_port: &str) -> Result<(&str, Option<&str>), ParseErrorKind> {
    if host_port.starts_with('[') {
        let close = host_port
            .find(']')
            .ok_or_else(|| ParseErrorKind::InvalidIpv6 {
                value: host_port[1..].to_string(),
            })?;
        let (host, after) = host_port.split_at(close + 1);
        return match after.strip_prefix(':') {
            Some(port) => Ok((host, Some(port))),
            None if after.is_empty() => Ok((host, None)),
            None => Err(ParseErrorKind::InvalidHost {
                value: host_port.to_string(),
                reason: "unexpected characters after IPv6 literal",
            }),
        };
    }

    Ok(match host_port.rfind(':') {
        Some(colon) => (&host_port[..colon], Some(&host_port[colon + 1..])),
        None => (host_port, None),
    })
}

fn parse_query(query: &str, parts: &mut Components) -> Result<(), ParseErrorKind> {
    if query.is_empty() {
        parts.empty_query = true;
        return Ok(());
    }

    for pair in query.split('&') {
        let (key, val) = pair.split_once('=').unwrap_or((pair, ""));
        parts.query.push(KeyVal::new(
            decode(key, Component::Query)?,
            decode(val, Component::Query)?,
        ));
    }

    Ok(())
}
