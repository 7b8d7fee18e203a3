//! URI decomposition.
//!
//! - [`parser`]: trimming, grammar decomposition and construction
//! - [`query`]: splitting the raw query string into ordered parameters

pub mod parser;
pub mod query;

pub use parser::parse;
pub use query::parse_query_string;
