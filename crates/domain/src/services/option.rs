//! Option service: business rules over the repository contract.

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::errors::OptionError;
use crate::models::{
    ComponentParams, ConfigOption, CreateOptionInput, NewOption, UpdateOptionInput, SYSTEM_GROUP,
};
use crate::repositories::{OptionRepository, RepositoryError};

/// Stateless, reentrant service for option management.
///
/// Every operation is independent; concurrency is bounded only by the
/// backend. Cancellation during a backend call aborts the operation and
/// surfaces as [`OptionError::Database`].
pub struct OptionService<R> {
    repo: R,
}

impl<R: OptionRepository> OptionService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All options, ordered by `(group_type, key)` ascending.
    pub async fn get_all(&self) -> Result<Vec<ConfigOption>, OptionError> {
        self.repo.find_all().await.map_err(|err| {
            error!(error = %err, "failed to list options");
            OptionError::Database(err)
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ConfigOption, OptionError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|err| {
                error!(%id, error = %err, "failed to load option by id");
                OptionError::Database(err)
            })?
            .ok_or_else(|| OptionError::not_found_id(id))
    }

    pub async fn get_by_key(&self, key: &str) -> Result<ConfigOption, OptionError> {
        self.repo
            .find_by_key(key)
            .await
            .map_err(|err| {
                error!(key, error = %err, "failed to load option by key");
                OptionError::Database(err)
            })?
            .ok_or_else(|| OptionError::not_found_key(key))
    }

    /// Convenience projection of the `value` field of the option at `key`.
    pub async fn get_value(&self, key: &str) -> Result<String, OptionError> {
        Ok(self.get_by_key(key).await?.value)
    }

    /// Options in the given group ordered by `key` ascending. An empty group
    /// yields an empty vector, not `NotFound`.
    pub async fn get_by_group_type(
        &self,
        group_type: &str,
    ) -> Result<Vec<ConfigOption>, OptionError> {
        self.repo.find_by_group_type(group_type).await.map_err(|err| {
            error!(group_type, error = %err, "failed to list options by group");
            OptionError::Database(err)
        })
    }

    /// Creates an option after checking key uniqueness.
    ///
    /// The existence pre-check is advisory: two concurrent creates can both
    /// pass it, and the store's unique constraint then rejects one of them.
    /// That rejection is reported as [`OptionError::KeyExists`] as well.
    pub async fn create(&self, input: CreateOptionInput) -> Result<ConfigOption, OptionError> {
        let exists = self.repo.exists_by_key(&input.key).await.map_err(|err| {
            error!(key = %input.key, error = %err, "failed to check key existence");
            OptionError::Database(err)
        })?;
        if exists {
            return Err(OptionError::KeyExists(input.key));
        }

        let component_params = input
            .component_params
            .as_deref()
            .and_then(|raw| parse_component_params(&input.key, raw));

        let now = Utc::now();
        let new_option = NewOption {
            key: input.key,
            value: input.value,
            group_type: resolve_group_type(input.group_type),
            component: input.component.filter(|c| !c.is_empty()),
            component_params,
            created_at: now,
            updated_at: now,
        };

        match self.repo.create(new_option).await {
            Ok(option) => {
                info!(key = %option.key, id = %option.id, "created option");
                Ok(option)
            }
            Err(RepositoryError::UniqueKeyViolation { key }) => Err(OptionError::KeyExists(key)),
            Err(err) => {
                error!(error = %err, "failed to create option");
                Err(OptionError::Database(err))
            }
        }
    }

    /// Partial update: only the fields supplied in `input` are overwritten.
    ///
    /// A supplied `component_params` always overwrites the stored value,
    /// even to absent when the raw string is empty or malformed.
    /// `created_at` is never modified.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateOptionInput,
    ) -> Result<ConfigOption, OptionError> {
        let mut option = self.get_by_id(id).await?;

        if let Some(value) = input.value {
            option.value = value;
        }
        if let Some(group_type) = input.group_type {
            option.group_type = resolve_group_type(Some(group_type));
        }
        if let Some(component) = input.component {
            option.component = Some(component).filter(|c| !c.is_empty());
        }
        if let Some(raw) = input.component_params {
            option.component_params = parse_component_params(&option.key, &raw);
        }
        option.updated_at = Utc::now();

        self.repo.update(&option).await.map_err(|err| {
            error!(%id, error = %err, "failed to update option");
            OptionError::Database(err)
        })?;

        info!(key = %option.key, %id, "updated option");
        Ok(option)
    }

    /// Overwrites only `value` (and `updated_at`) of the option at `key`.
    pub async fn update_by_key(
        &self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<ConfigOption, OptionError> {
        let mut option = self.get_by_key(key).await?;

        option.value = value.into();
        option.updated_at = Utc::now();

        self.repo.update(&option).await.map_err(|err| {
            error!(key, error = %err, "failed to update option value");
            OptionError::Database(err)
        })?;

        info!(key, "updated option value");
        Ok(option)
    }

    /// Deletes by id. The option is loaded first so an absent id surfaces
    /// uniformly as `NotFound` and the key is available for logging.
    pub async fn delete(&self, id: Uuid) -> Result<(), OptionError> {
        let option = self.get_by_id(id).await?;

        self.repo.delete_by_id(id).await.map_err(|err| {
            error!(%id, error = %err, "failed to delete option");
            OptionError::Database(err)
        })?;

        info!(key = %option.key, %id, "deleted option");
        Ok(())
    }

    /// Deletes by key, with the same load-first semantics as [`delete`](Self::delete).
    pub async fn delete_by_key(&self, key: &str) -> Result<(), OptionError> {
        let option = self.get_by_key(key).await?;

        self.repo.delete_by_key(key).await.map_err(|err| {
            error!(key, error = %err, "failed to delete option");
            OptionError::Database(err)
        })?;

        info!(key, id = %option.id, "deleted option");
        Ok(())
    }
}

/// Missing or empty group resolves to the sentinel system group.
fn resolve_group_type(group_type: Option<String>) -> String {
    match group_type {
        Some(group) if !group.is_empty() => group,
        _ => SYSTEM_GROUP.to_string(),
    }
}

/// Lenient parse of raw component parameters.
///
/// Anything that is not a well-formed JSON object becomes absent, with a
/// warning. The operation carrying the parameters is never failed by this.
fn parse_component_params(key: &str, raw: &str) -> Option<ComponentParams> {
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<ComponentParams>(raw) {
        Ok(params) => Some(params),
        Err(err) => {
            warn!(key, error = %err, "ignoring malformed component params");
            None
        }
    }
}
