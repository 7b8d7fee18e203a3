//! Parsed URI - split URI strings into typed components
//!
//! This crate takes a raw URI string and decomposes it into scheme, host,
//! port, path, query parameters and fragment.
//!
//! # Features
//!
//! - **Grammar-based**: Structural parsing follows the RFC 3986 `URI-reference` rule
//! - **Verbatim**: Components are returned as written, never normalized or decoded
//! - **Ordered queries**: Query parameters keep the order they appear in
//! - **Immutable**: A [`ParsedUri`] is built once per call and never changes
//!
//! # Quick Start
//!
//! ```
//! use parsed_uri::parse;
//!
//! let uri = parse("https://www.google.com/path/to/file?a=b&c#fragment")?;
//! assert_eq!(uri.scheme(), Some("https"));
//! assert_eq!(uri.host(), Some("www.google.com"));
//! assert_eq!(uri.path(), Some("/path/to/file"));
//! assert_eq!(uri.fragment(), Some("fragment"));
//!
//! // Keys without a value are present but map to `None`
//! assert!(uri.query_has("c"));
//! assert_eq!(uri.query("c"), None);
//! assert_eq!(uri.query("a"), Some("b"));
//! # Ok::<(), parsed_uri::UriError>(())
//! ```
//!
//! # Absent components
//!
//! Anything missing from the input is `None`, never an error. An empty path
//! is `None` as well, so `https://www.google.com?a=b` has no path.
//! [`ParsedUri::queries`] always returns a map, empty when there is no query.
//!
//! # Error Handling
//!
//! [`parse`] returns `Result<ParsedUri, UriError>`:
//!
//! - Empty or whitespace-only input
//! - Input the URI grammar rejects, or a port larger than 65535
//!
//! # Cargo features
//!
//! Both are off by default; without `log` the crate emits nothing.
//!
//! - `log`: emit parse outcomes through the `log` facade
//! - `serde`: derive `Serialize` for [`ParsedUri`]

// Re-export main parsing functions
pub use uri::{parse, parse_query_string};

// Re-export public types
pub use error::UriError;
pub use types::{ParsedUri, QueryParams};

// Module declarations
pub mod error;
pub mod types;
pub mod uri;

mod log;
