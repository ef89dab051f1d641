//! URL string parsing.
//!
//! The input is first pre-encoded so that only the delimiters `: / @ ? & = #`
//! remain literal. The pre-encoded string is split into raw components, and
//! each component is decoded back before it is stored in the record.

use crate::error::UrlError;
use crate::url::encoding::{decode, pre_encode};
use crate::url::query::QueryParams;
use crate::url::record::UrlRecord;

/// Raw, still-encoded slices of a URL.
#[derive(Debug, Default, PartialEq)]
struct RawParts<'a> {
    scheme: Option<&'a str>,
    user: Option<&'a str>,
    pass: Option<&'a str>,
    host: Option<&'a str>,
    port: Option<&'a str>,
    path: Option<&'a str>,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

/// Parse a URL string into a [`UrlRecord`].
///
/// Fails with [`UrlError::InvalidUrl`] when no host can be found, the port is
/// not a number in `1..=65535`, or a query pair has no `=`.
pub fn parse(input: &str) -> Result<UrlRecord, UrlError> {
    let encoded = pre_encode(input);
    let raw = split(&encoded)?;

    tracing::trace!(
        scheme = ?raw.scheme,
        host = ?raw.host,
        port = ?raw.port,
        path = ?raw.path,
        "split url"
    );

    let host = raw
        .host
        .map(decode)
        .filter(|host| !host.is_empty())
        .ok_or_else(|| UrlError::invalid_url("missing host"))?;

    let port = raw.port.map(parse_port).transpose()?;

    let query = match raw.query {
        Some(query) => QueryParams::parse(&decode(query))?,
        None => QueryParams::new(),
    };

    Ok(UrlRecord {
        scheme: decode_non_empty(raw.scheme),
        user: decode_non_empty(raw.user),
        pass: decode_non_empty(raw.pass),
        host: Some(host),
        port,
        path: decode_non_empty(raw.path),
        query,
        fragment: decode_non_empty(raw.fragment),
    })
}

/// Returns true if `input` parses as a URL.
///
/// # Examples
///
/// ```
/// use urlrec::validate;
///
/// assert!(validate("http://www.test.com/some/path.html"));
/// assert!(!validate("/some/path.html"));
/// assert!(!validate(""));
/// ```
pub fn validate(input: &str) -> bool {
    parse(input).is_ok()
}

fn decode_non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(decode).filter(|value| !value.is_empty())
}

fn parse_port(raw: &str) -> Result<u16, UrlError> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UrlError::invalid_url(format!("invalid port: {}", decode(raw))));
    }

    match raw.parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(UrlError::invalid_url(format!("port out of range: {}", raw))),
    }
}

/// Split a pre-encoded URL into its raw components.
fn split(encoded: &str) -> Result<RawParts<'_>, UrlError> {
    let mut parts = RawParts::default();

    let rest = match encoded.split_once('#') {
        Some((rest, fragment)) => {
            parts.fragment = Some(fragment);
            rest
        }
        None => encoded,
    };

    let rest = match rest.split_once('?') {
        Some((rest, query)) => {
            parts.query = Some(query);
            rest
        }
        None => rest,
    };

    let rest = match split_scheme(rest) {
        Some((scheme, rest)) => {
            parts.scheme = Some(scheme);
            rest
        }
        None => rest,
    };

    let Some(after_slashes) = rest.strip_prefix("//") else {
        parts.path = Some(rest).filter(|path| !path.is_empty());
        return Ok(parts);
    };

    let (authority, path) = match after_slashes.find('/') {
        Some(idx) => (&after_slashes[..idx], Some(&after_slashes[idx..])),
        None => (after_slashes, None),
    };
    parts.path = path;

    let host_port = match authority.rfind('@') {
        Some(idx) => {
            let userinfo = &authority[..idx];
            match userinfo.split_once(':') {
                Some((user, pass)) => {
                    parts.user = Some(user);
                    parts.pass = Some(pass);
                }
                None => parts.user = Some(userinfo),
            }
            &authority[idx + 1..]
        }
        None => authority,
    };

    let (host, port) = split_host_port(host_port)?;
    parts.host = Some(host);
    parts.port = port;

    Ok(parts)
}

/// Split `scheme:rest` when the prefix is a valid scheme name.
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = input.split_once(':')?;
    let mut chars = scheme.chars();

    let first_is_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let tail_is_valid = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'));

    if first_is_alpha && tail_is_valid {
        Some((scheme, rest))
    } else {
        None
    }
}

/// Split `host[:port]`, keeping a bracketed IPv6 literal intact.
fn split_host_port(host_port: &str) -> Result<(&str, Option<&str>), UrlError> {
    // `[` and `]` arrive pre-encoded
    if host_port.starts_with("%5B") {
        let end = host_port
            .find("%5D")
            .map(|idx| idx + 3)
            .ok_or_else(|| UrlError::invalid_url("unterminated IPv6 host"))?;

        let (host, rest) = host_port.split_at(end);
        return match rest {
            "" => Ok((host, None)),
            _ => match rest.strip_prefix(':') {
                Some(port) => Ok((host, Some(port).filter(|port| !port.is_empty()))),
                None => Err(UrlError::invalid_url("unexpected text after IPv6 host")),
            },
        };
    }

    match host_port.rsplit_once(':') {
        Some((host, port)) => Ok((host, Some(port).filter(|port| !port.is_empty()))),
        None => Ok((host_port, None)),
    }
}
