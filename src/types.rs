//! The parsed URI value and its query parameter map.

use indexmap::IndexMap;

/// Query parameters in order of first appearance.
///
/// A key maps to `None` when it had no `=` or nothing after it.
pub type QueryParams = IndexMap<String, Option<String>>;

/// A URI split into its components.
///
/// Built only through [`crate::parse`] (or [`ParsedUri::parse`]) and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedUri {
    raw: String,
    scheme: Option<String>,
    user_info: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: Option<String>,
    query: QueryParams,
    fragment: Option<String>,
}

/// Components handed over by the parser.
#[derive(Debug, Default)]
pub(crate) struct UriParts {
    pub scheme: Option<String>,
    pub user_info: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub query: QueryParams,
    pub fragment: Option<String>,
}

impl ParsedUri {
    pub(crate) fn new(raw: &str, parts: UriParts) -> Self {
        Self {
            raw: raw.to_string(),
            scheme: parts.scheme,
            user_info: parts.user_info,
            host: parts.host,
            port: parts.port,
            path: parts.path,
            query: parts.query,
            fragment: parts.fragment,
        }
    }

    /// Parse a URI string. Same as [`crate::parse`].
    pub fn parse(raw: &str) -> Result<Self, crate::UriError> {
        crate::uri::parse(raw)
    }

    /// The input exactly as given, before trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Userinfo before the `@` in the authority, if any.
    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Port number, only when written in the URI. Defaults are never filled in.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Path component, or `None` when the URI has no path.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsed_uri::parse;
    ///
    /// assert_eq!(parse("https://example.com/docs")?.path(), Some("/docs"));
    /// assert_eq!(parse("https://example.com?a=b")?.path(), None);
    /// # Ok::<(), parsed_uri::UriError>(())
    /// ```
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// All query parameters. Empty when the URI has no query.
    pub fn queries(&self) -> &QueryParams {
        &self.query
    }

    /// Whether `key` appeared in the query, with or without a value.
    pub fn query_has(&self, key: &str) -> bool {
        self.query.contains_key(key)
    }

    /// Value of the query parameter `key`.
    ///
    /// Returns `None` both for a missing key and for a key without a value;
    /// use [`ParsedUri::query_has`] to tell them apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsed_uri::parse;
    ///
    /// let uri = parse("https://example.com?a=b&c")?;
    /// assert_eq!(uri.query("a"), Some("b"));
    /// assert_eq!(uri.query("c"), None);
    /// assert!(uri.query_has("c"));
    /// # Ok::<(), parsed_uri::UriError>(())
    /// ```
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).and_then(|value| value.as_deref())
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Check if any query parameter was captured.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Check if a fragment is present.
    pub fn has_fragment(&self) -> bool {
        self.fragment.is_some()
    }

    /// Split the path into its non-empty segments. No percent-decoding is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsed_uri::parse;
    ///
    /// let uri = parse("https://example.com/api//v1/users/")?;
    /// assert_eq!(uri.path_segments(), vec!["api", "v1", "users"]);
    /// # Ok::<(), parsed_uri::UriError>(())
    /// ```
    pub fn path_segments(&self) -> Vec<&str> {
        self.path
            .as_deref()
            .map(|path| path.split('/').filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }

    /// Last path segment if it looks like a file name.
    ///
    /// A segment counts when it has an extension or is the only segment, and
    /// the path does not end with `/`.
    pub fn filename(&self) -> Option<&str> {
        let path = self.path.as_deref()?;
        if path.ends_with('/') {
            return None;
        }

        let segments = self.path_segments();
        let last = *segments.last()?;
        if last.contains('.') || segments.len() == 1 {
            Some(last)
        } else {
            None
        }
    }
}

impl std::str::FromStr for ParsedUri {
    type Err = crate::UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ParsedUri {
    type Error = crate::UriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(path: Option<&str>) -> ParsedUri {
        let mut query = QueryParams::new();
        query.insert("a".to_string(), Some("b".to_string()));
        query.insert("c".to_string(), None);

        ParsedUri::new(
            "https://example.com",
            UriParts {
                scheme: Some("https".to_string()),
                host: Some("example.com".to_string()),
                path: path.map(str::to_string),
                query,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_query_accessors() {
        let uri = sample(None);

        assert_eq!(uri.query("a"), Some("b"));
        assert_eq!(uri.query("c"), None);
        assert_eq!(uri.query("missing"), None);
        assert!(uri.query_has("c"));
        assert!(!uri.query_has("missing"));
        assert!(uri.has_query());
        assert!(!uri.has_fragment());
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(sample(Some("/a/b/c")).path_segments(), vec!["a", "b", "c"]);
        assert_eq!(sample(Some("/")).path_segments(), Vec::<&str>::new());
        assert_eq!(sample(None).path_segments(), Vec::<&str>::new());
    }

    #[test]
    fn test_filename() {
        assert_eq!(sample(Some("/docs/file.pdf")).filename(), Some("file.pdf"));
        assert_eq!(sample(Some("/file")).filename(), Some("file"));
        assert_eq!(sample(Some("/api/users")).filename(), None);
        assert_eq!(sample(Some("/api/users/")).filename(), None);
        assert_eq!(sample(None).filename(), None);
    }
}
