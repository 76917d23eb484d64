//! Percent-encoding and decoding against per-component safe sets.
//!
//! Each set below lists the bytes that must be escaped in a component, derived
//! from the RFC 3986 grammar:
//!
//! ```abnf
//! unreserved  = ALPHA / DIGIT / "-" / "." / "_" / "~"
//! sub-delims  = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
//! reg-name    = *( unreserved / pct-encoded / sub-delims )
//! userinfo    = *( unreserved / pct-encoded / sub-delims / ":" )
//! pchar       = unreserved / pct-encoded / sub-delims / ":" / "@"
//! query       = *( pchar / "/" / "?" )
//! fragment    = *( pchar / "/" / "?" )
//! ```

use std::borrow::Cow;
use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::{Component, ParseErrorKind};

const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Escapes everything outside `reg-name`.
pub(crate) const REG_NAME_ENCODE: &AsciiSet = &UNRESERVED
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

pub(crate) const USER_INFO_ENCODE: &AsciiSet = &REG_NAME_ENCODE.remove(b':');

pub(crate) const PATH_ENCODE: &AsciiSet = &USER_INFO_ENCODE.remove(b'@').remove(b'/');

/// First segment of a path with neither scheme nor authority, where a `:`
/// would be read as the end of a scheme.
pub(crate) const PATH_NOSCHEME_ENCODE: &AsciiSet = &PATH_ENCODE.add(b':');

pub(crate) const FRAGMENT_ENCODE: &AsciiSet = &PATH_ENCODE.remove(b'?');

pub(crate) const QUERY_VALUE_ENCODE: &AsciiSet = &FRAGMENT_ENCODE.add(b'&');

pub(crate) const QUERY_KEY_ENCODE: &AsciiSet = &QUERY_VALUE_ENCODE.add(b'=');

/// Writes `input` to `out`, escaping every byte in `set` as `%XY`.
pub(crate) fn write_encoded<W: fmt::Write>(
    out: &mut W,
    input: &str,
    set: &'static AsciiSet,
) -> fmt::Result {
    for chunk in utf8_percent_encode(input, set) {
        out.write_str(chunk)?;
    }
    Ok(())
}

/// Percent-decodes `input`.
///
/// Every `%` must start a `%XY` triplet of two hex digits, and the decoded
/// octets must be UTF-8.
pub(crate) fn decode(input: &str, component: Component) -> Result<Cow<'_, str>, ParseErrorKind> {
    validate_escapes(input, component)?;
    percent_decode_str(input)
        .decode_utf8()
        .map_err(|_| ParseErrorKind::InvalidUtf8 { component })
}

/// Checks that every `%` in `input` is followed by two hex digits.
fn validate_escapes(input: &str, component: Component) -> Result<(), ParseErrorKind> {
    let bytes = input.as_bytes();
    for (position, _) in input.match_indices('%') {
        let well_formed = bytes
            .get(position + 1..position + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(ParseErrorKind::InvalidPercentEncoding {
                component,
                position,
            });
        }
    }
    Ok(())
}
