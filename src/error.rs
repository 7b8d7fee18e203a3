//! Error types for URI parsing.

use thiserror::Error;

/// Errors that can occur while parsing a URI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The input was empty once surrounding whitespace was removed.
    #[error("The URI provided is empty")]
    EmptyInput,

    /// The input does not match the URI-reference grammar.
    #[error("Could not parse URI {raw:?}: {reason}")]
    Malformed {
        /// The original input, before trimming.
        raw: String,
        /// Why the grammar rejected it.
        reason: String,
    },
}

impl UriError {
    pub(crate) fn malformed(raw: &str, reason: impl ToString) -> Self {
        UriError::Malformed {
            raw: raw.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The raw input that failed to parse, if this is a grammar error.
    pub fn raw(&self) -> Option<&str> {
        match self {
            UriError::EmptyInput => None,
            UriError::Malformed { raw, .. } => Some(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(UriError::EmptyInput.to_string(), "The URI provided is empty");

        let err = UriError::malformed("http://a b", "invalid character");
        assert_eq!(
            err.to_string(),
            "Could not parse URI \"http://a b\": invalid character"
        );
    }

    #[test]
    fn test_error_raw() {
        assert_eq!(UriError::EmptyInput.raw(), None);
        assert_eq!(UriError::malformed(" x y ", "bad").raw(), Some(" x y "));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(UriError::EmptyInput, UriError::EmptyInput);
        assert_ne!(UriError::EmptyInput, UriError::malformed("", ""));
    }
}
