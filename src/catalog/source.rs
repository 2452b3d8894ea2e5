use std::fmt;

use async_trait::async_trait;

use crate::core::book::Book;
use crate::core::text::{MessageId, UiText};

/// Errors that can occur while talking to a book catalog.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// The catalog returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Failed to parse the catalog's response. Not retryable.
    Parse(String),
}

impl CatalogError {
    /// Maps the failure class onto a deferred-resolution message for the
    /// render layer. Raw reqwest/serde detail stays in the log, not on
    /// screen.
    pub fn to_ui_text(&self) -> UiText {
        match self {
            CatalogError::Network(_) => UiText::resource(MessageId::ErrorNetwork),
            CatalogError::Api { status, .. } => {
                UiText::resource_with(MessageId::ErrorApi, vec![status.to_string()])
            }
            CatalogError::Parse(_) => UiText::resource(MessageId::ErrorMalformedResponse),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[async_trait]
pub trait BookSource: Send + Sync {
    /// Returns the name of the catalog backend.
    fn name(&self) -> &str;

    /// Searches the catalog, returning at most `limit` books in the
    /// catalog's relevance order.
    async fn search_books(&self, query: &str, limit: u32) -> Result<Vec<Book>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_carry_their_status_into_the_message() {
        let text = CatalogError::Api {
            status: 503,
            message: "unavailable".to_string(),
        }
        .to_ui_text();

        match text {
            UiText::Resource { id, args } => {
                assert_eq!(id, MessageId::ErrorApi);
                assert_eq!(args, vec!["503".to_string()]);
            }
            UiText::Dynamic(_) => panic!("expected a resource reference"),
        }
    }

    #[test]
    fn display_includes_the_failure_class() {
        let err = CatalogError::Api {
            status: 429,
            message: "slow down".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 429): slow down");
        assert_eq!(
            CatalogError::Network("dns".to_string()).to_string(),
            "network error: dns"
        );
    }
}
