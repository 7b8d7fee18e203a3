//! Turning a raw string into a [`ParsedUri`].

use fluent_uri::encoding::EStr;
use fluent_uri::UriRef;

use crate::error::UriError;
use crate::log::{debug, warning};
use crate::types::{ParsedUri, UriParts};
use crate::uri::query::parse_query_string;

/// Parse a URI string into its components.
///
/// Surrounding whitespace is trimmed first. The rest must match the RFC 3986
/// `URI-reference` grammar, so scheme-less input such as `www.google.com`
/// is accepted as a relative reference. Components are not normalized.
///
/// # Errors
///
/// - [`UriError::EmptyInput`] if nothing is left after trimming.
/// - [`UriError::Malformed`] if the grammar rejects the input or the port
///   does not fit in 16 bits.
///
/// # Examples
///
/// ```
/// use parsed_uri::parse;
///
/// let uri = parse("http://127.0.0.1:8080/search?q=rust&page=2#top")?;
/// assert_eq!(uri.scheme(), Some("http"));
/// assert_eq!(uri.host(), Some("127.0.0.1"));
/// assert_eq!(uri.port(), Some(8080));
/// assert_eq!(uri.path(), Some("/search"));
/// assert_eq!(uri.query("page"), Some("2"));
/// assert_eq!(uri.fragment(), Some("top"));
/// # Ok::<(), parsed_uri::UriError>(())
/// ```
pub fn parse(raw: &str) -> Result<ParsedUri, UriError> {
    let trimmed = trim(raw);
    if trimmed.is_empty() {
        warning!("rejecting empty uri input");
        return Err(UriError::EmptyInput);
    }

    let uri = UriRef::parse(trimmed).map_err(|err| {
        warning!("rejecting malformed uri {:?}: {}", raw, err);
        UriError::malformed(raw, err)
    })?;

    let (user_info, host, port) = match uri.authority() {
        Some(authority) => (
            authority.userinfo().map(|u| u.as_str().to_string()),
            non_empty(authority.host()),
            parse_port(raw, authority.port().map(EStr::as_str))?,
        ),
        None => (None, None, None),
    };

    let parts = UriParts {
        scheme: uri.scheme().map(|s| s.as_str().to_string()),
        user_info,
        host,
        port,
        path: non_empty(uri.path().as_str()),
        query: uri
            .query()
            .map(|q| parse_query_string(q.as_str()))
            .unwrap_or_default(),
        fragment: uri.fragment().and_then(|f| non_empty(f.as_str())),
    };

    let parsed = ParsedUri::new(raw, parts);
    debug!("parsed uri {:?}", parsed);

    Ok(parsed)
}

/// Trim space, `\t`, `\n`, `\r`, NUL and `\x0B`.
fn trim(raw: &str) -> &str {
    raw.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// An empty port (`http://host:`) counts as absent.
fn parse_port(raw: &str, port: Option<&str>) -> Result<Option<u16>, UriError> {
    match port {
        None | Some("") => Ok(None),
        Some(digits) => digits
            .parse::<u16>()
            .map(Some)
            .map_err(|err| UriError::malformed(raw, format!("invalid port {digits:?}: {err}"))),
    }
}
