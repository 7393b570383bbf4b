//! Option repository contract.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{ConfigOption, NewOption};

/// Failure reported by a repository implementation.
///
/// The repository never raises domain error kinds; the service translates
/// these into its own taxonomy.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store's own uniqueness constraint rejected an insert. This is the
    /// final authority on key uniqueness; the service's existence pre-check
    /// is advisory.
    #[error("unique key violation: {key}")]
    UniqueKeyViolation { key: String },

    /// Any other backend fault, including cancellation and deadline expiry
    /// surfaced by the driver.
    #[error("backend failure: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Storage contract for options. Any backend honoring these semantics is
/// interchangeable: a relational store, a document store, or the in-memory
/// double in [`memory`](crate::repositories::memory).
#[async_trait]
pub trait OptionRepository: Send + Sync {
    /// All options ordered by `(group_type, key)` ascending. No rows is an
    /// empty vector, not an error.
    async fn find_all(&self) -> Result<Vec<ConfigOption>, RepositoryError>;

    /// Absent is a non-error outcome distinct from a backend fault.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ConfigOption>, RepositoryError>;

    async fn find_by_key(&self, key: &str) -> Result<Option<ConfigOption>, RepositoryError>;

    /// Options in the given group ordered by `key` ascending.
    async fn find_by_group_type(
        &self,
        group_type: &str,
    ) -> Result<Vec<ConfigOption>, RepositoryError>;

    /// Pure existence probe; no row materialization required.
    async fn exists_by_key(&self, key: &str) -> Result<bool, RepositoryError>;

    /// Inserts a new row and returns it with the backend-assigned id.
    async fn create(&self, option: NewOption) -> Result<ConfigOption, RepositoryError>;

    /// Persists all mutable fields of the given record as-is.
    async fn update(&self, option: &ConfigOption) -> Result<(), RepositoryError>;

    /// Removes at most one row; zero rows affected is silent success.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn delete_by_key(&self, key: &str) -> Result<(), RepositoryError>;
}
