//! Host classification.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host        = IP-literal / IPv4address / reg-name
//! IP-literal  = "[" IPv6address "]"
//! IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet
//! ```
//!
//! A decoded host made only of digits and dots that splits into four parts is
//! treated as an IPv4 address and must be valid as one; it never silently
//! falls back to a registered name.

use std::fmt;
use std::net::Ipv6Addr;

use crate::error::ParseErrorKind;

/// The kind of host a URL carries.
///
/// The numeric codes (`-1`, `0`, `4`, `6`) are available via [`IpVersion::as_i8`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum IpVersion {
    /// No host
    #[default]
    Undefined = -1,
    /// A registered name (e.g. "example.com")
    Name = 0,
    /// An IPv4 dotted-quad (e.g. "192.168.1.1")
    V4 = 4,
    /// An IPv6 address, bracketed in the encoded form (e.g. `[::1]`)
    V6 = 6,
}

impl IpVersion {
    /// Returns the numeric code: `-1`, `0`, `4`, or `6`.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Returns true for IPv4 and IPv6 hosts.
    #[must_use]
    pub const fn is_ip(self) -> bool {
        matches!(self, Self::V4 | Self::V6)
    }
}

impl TryFrom<i8> for IpVersion {
    type Error = i8;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Self::Undefined),
            0 => Ok(Self::Name),
            4 => Ok(Self::V4),
            6 => Ok(Self::V6),
            other => Err(other),
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::Name => "name",
            Self::V4 => "IPv4",
            Self::V6 => "IPv6",
        };
        f.write_str(name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IpVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i8(self.as_i8())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IpVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i8::deserialize(deserializer)?;
        Self::try_from(code)
            .map_err(|c| serde::de::Error::custom(format!("unknown IP version code {c}")))
    }
}

/// Classifies a decoded, unbracketed host taken from a parsed authority.
///
/// Only bracketed literals are IPv6 in the encoded form, so this never
/// returns [`IpVersion::V6`].
pub(crate) fn classify_decoded(host: &str) -> Result<IpVersion, ParseErrorKind> {
    if host.is_empty() {
        return Ok(IpVersion::Undefined);
    }
    if is_ipv4_shaped(host) {
        validate_ipv4(host)?;
        return Ok(IpVersion::V4);
    }
    Ok(IpVersion::Name)
}

/// Validates the contents of a bracketed IP literal.
pub(crate) fn validate_ipv6(literal: &str) -> Result<(), ParseErrorKind> {
    literal
        .parse::<Ipv6Addr>()
        .map(|_| ())
        .map_err(|_| ParseErrorKind::InvalidIpv6 {
            value: literal.to_string(),
        })
}

/// Classifies a host assigned through a setter.
///
/// `declared` selects the expected kind; [`IpVersion::Undefined`] detects it.
/// IPv6 addresses may be given with or without brackets. Returns the host as
/// it is stored (brackets removed) together with its version.
pub(crate) fn classify_assigned(
    host: &str,
    declared: IpVersion,
) -> Result<(String, IpVersion), ParseErrorKind> {
    // An empty host clears the host whatever kind was declared
    if host.is_empty() {
        return Ok((String::new(), IpVersion::Undefined));
    }

    let unbracketed = host
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'));

    if let Some(literal) = unbracketed {
        if matches!(declared, IpVersion::Undefined | IpVersion::V6) {
            validate_ipv6(literal)?;
            return Ok((literal.to_string(), IpVersion::V6));
        }
    }

    match declared {
        IpVersion::Undefined => {
            if host.contains(':') && host.parse::<Ipv6Addr>().is_ok() {
                return Ok((host.to_string(), IpVersion::V6));
            }
            check_not_bracketed(host)?;
            Ok((host.to_string(), classify_decoded(host)?))
        }
        IpVersion::Name => {
            check_not_bracketed(host)?;
            if is_ipv4_shaped(host) {
                validate_ipv4(host)?;
                return Err(ParseErrorKind::InvalidHost {
                    value: host.to_string(),
                    reason: "declared as a name but is an IPv4 address",
                });
            }
            Ok((host.to_string(), IpVersion::Name))
        }
        IpVersion::V4 => {
            if !is_ipv4_shaped(host) {
                return Err(ParseErrorKind::InvalidIpv4 {
                    value: host.to_string(),
                });
            }
            validate_ipv4(host)?;
            Ok((host.to_string(), IpVersion::V4))
        }
        IpVersion::V6 => {
            validate_ipv6(host)?;
            Ok((host.to_string(), IpVersion::V6))
        }
    }
}

/// Returns true if `host` is four dot-separated parts of 1 to 3 digits each.
fn is_ipv4_shaped(host: &str) -> bool {
    host.split('.').count() == 4
        && host
            .split('.')
            .all(|part| (1..=3).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit()))
}

/// Checks the octet range of an IPv4-shaped host.
fn validate_ipv4(host: &str) -> Result<(), ParseErrorKind> {
    let valid = host.split('.').all(|octet| octet.parse::<u8>().is_ok());
    if valid {
        Ok(())
    } else {
        Err(ParseErrorKind::InvalidIpv4 {
            value: host.to_string(),
        })
    }
}

fn check_not_bracketed(host: &str) -> Result<(), ParseErrorKind> {
    if host.contains(['[', ']']) {
        return Err(ParseErrorKind::InvalidHost {
            value: host.to_string(),
            reason: "brackets are only allowed around an IPv6 literal",
        });
    }
    Ok(())
}
