//! Domain error taxonomy for the option store.
//!
//! The service reports failures through exactly three kinds: `Database` for
//! backend faults, `NotFound` for absent entities, `KeyExists` for uniqueness
//! violations. Each kind has a stable machine identity (`code`) and a
//! conventional transport status (`status_hint`) for presentation layers;
//! the core itself never depends on a web framework.

use http::StatusCode;
use thiserror::Error;

use crate::repositories::RepositoryError;

/// Domain error returned by every service operation.
#[derive(Debug, Error)]
pub enum OptionError {
    /// The backing store failed for reasons opaque to the service, including
    /// cancellation or deadline expiry during a backend call.
    #[error("database operation failed: {0}")]
    Database(#[source] RepositoryError),

    /// No option matches the given id or key.
    #[error("option not found: {0}")]
    NotFound(String),

    /// Create was attempted with a key that already exists.
    #[error("option key already exists: {0}")]
    KeyExists(String),
}

impl OptionError {
    pub(crate) fn not_found_id(id: uuid::Uuid) -> Self {
        Self::NotFound(format!("id={id}"))
    }

    pub(crate) fn not_found_key(key: &str) -> Self {
        Self::NotFound(format!("key={key}"))
    }

    /// Stable machine-checkable identity of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Database(_) => "database_error",
            Self::NotFound(_) => "not_found",
            Self::KeyExists(_) => "key_exists",
        }
    }

    /// Conventional transport status for presentation layers.
    pub fn status_hint(&self) -> StatusCode {
        match self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::KeyExists(_) => StatusCode::CONFLICT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_hints() {
        let database = OptionError::Database(RepositoryError::Backend(anyhow::anyhow!("boom")));
        assert_eq!(database.status_hint(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            OptionError::NotFound("id=1".into()).status_hint(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            OptionError::KeyExists("site.title".into()).status_hint(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_codes_are_stable() {
        let database = OptionError::Database(RepositoryError::Backend(anyhow::anyhow!("boom")));
        assert_eq!(database.code(), "database_error");
        assert_eq!(OptionError::NotFound("key=a".into()).code(), "not_found");
        assert_eq!(OptionError::KeyExists("a".into()).code(), "key_exists");
    }

    #[test]
    fn test_messages_carry_context() {
        assert_eq!(
            format!("{}", OptionError::not_found_key("site.title")),
            "option not found: key=site.title"
        );
        assert_eq!(
            format!("{}", OptionError::KeyExists("site.title".into())),
            "option key already exists: site.title"
        );
    }

    #[test]
    fn test_database_error_preserves_source() {
        use std::error::Error;
        let err = OptionError::Database(RepositoryError::Backend(anyhow::anyhow!("conn reset")));
        assert!(err.source().unwrap().to_string().contains("conn reset"));
    }
}
