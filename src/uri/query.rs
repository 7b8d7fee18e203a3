//! Query string splitting.
//!
//! Keys and values are kept exactly as written: no percent-decoding and no
//! `+` to space conversion.

use crate::types::QueryParams;

/// Split a raw query string (the text after `?`, without it) into parameters.
///
/// - Segments are separated by `&`; empty segments are skipped.
/// - Each segment is split on its first `=` only, so values may contain `=`.
/// - A segment with no `=`, or nothing after it, maps to `None`.
/// - A repeated key keeps its first position and takes the later value.
///
/// # Examples
///
/// ```
/// use parsed_uri::parse_query_string;
///
/// let params = parse_query_string("a=&&&c=d&e&token=x=y");
/// assert_eq!(params.len(), 4);
/// assert_eq!(params["a"], None);
/// assert_eq!(params["c"].as_deref(), Some("d"));
/// assert_eq!(params["e"], None);
/// assert_eq!(params["token"].as_deref(), Some("x=y"));
/// ```
pub fn parse_query_string(query: &str) -> QueryParams {
    let mut params = QueryParams::new();

    for segment in query.split('&').filter(|s| !s.is_empty()) {
        let (key, value) = split_pair(segment);
        params.insert(key.to_string(), value.map(str::to_string));
    }

    params
}

/// Split one `key=value` segment on its first `=`.
fn split_pair(segment: &str) -> (&str, Option<&str>) {
    match segment.split_once('=') {
        Some((key, value)) if !value.is_empty() => (key, Some(value)),
        Some((key, _)) => (key, None),
        None => (segment, None),
    }
}
