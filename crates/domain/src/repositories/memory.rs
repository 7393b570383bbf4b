//! In-memory repository, the test double for the storage contract.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{ConfigOption, NewOption};
use crate::repositories::{OptionRepository, RepositoryError};

/// Mutex-guarded in-memory implementation of [`OptionRepository`].
///
/// Reproduces the contracts a real backend provides: the unique-key
/// constraint on insert, the ordering guarantees on list operations, and
/// silent success when deleting absent rows.
#[derive(Debug, Default)]
pub struct InMemoryOptionRepository {
    options: Mutex<Vec<ConfigOption>>,
}

impl InMemoryOptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OptionRepository for InMemoryOptionRepository {
    async fn find_all(&self) -> Result<Vec<ConfigOption>, RepositoryError> {
        let mut options = self.options.lock().unwrap().clone();
        options.sort_by(|a, b| {
            (a.group_type.as_str(), a.key.as_str()).cmp(&(b.group_type.as_str(), b.key.as_str()))
        });
        Ok(options)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ConfigOption>, RepositoryError> {
        let options = self.options.lock().unwrap();
        Ok(options.iter().find(|o| o.id == id).cloned())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<ConfigOption>, RepositoryError> {
        let options = self.options.lock().unwrap();
        Ok(options.iter().find(|o| o.key == key).cloned())
    }

    async fn find_by_group_type(
        &self,
        group_type: &str,
    ) -> Result<Vec<ConfigOption>, RepositoryError> {
        let options = self.options.lock().unwrap();
        let mut matching: Vec<_> = options
            .iter()
            .filter(|o| o.group_type == group_type)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(matching)
    }

    async fn exists_by_key(&self, key: &str) -> Result<bool, RepositoryError> {
        let options = self.options.lock().unwrap();
        Ok(options.iter().any(|o| o.key == key))
    }

    async fn create(&self, option: NewOption) -> Result<ConfigOption, RepositoryError> {
        let mut options = self.options.lock().unwrap();
        if options.iter().any(|o| o.key == option.key) {
            return Err(RepositoryError::UniqueKeyViolation { key: option.key });
        }
        let stored = ConfigOption {
            id: Uuid::new_v4(),
            key: option.key,
            value: option.value,
            group_type: option.group_type,
            component: option.component,
            component_params: option.component_params,
            created_at: option.created_at,
            updated_at: option.updated_at,
        };
        options.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, option: &ConfigOption) -> Result<(), RepositoryError> {
        let mut options = self.options.lock().unwrap();
        match options.iter_mut().find(|o| o.id == option.id) {
            Some(existing) => *existing = option.clone(),
            None => options.push(option.clone()),
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.options.lock().unwrap().retain(|o| o.id != id);
        Ok(())
    }

    async fn delete_by_key(&self, key: &str) -> Result<(), RepositoryError> {
        self.options.lock().unwrap().retain(|o| o.key != key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SYSTEM_GROUP;
    use chrono::Utc;

    fn new_option(key: &str, group: &str) -> NewOption {
        let now = Utc::now();
        NewOption {
            key: key.into(),
            value: "v".into(),
            group_type: group.into(),
            component: None,
            component_params: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_enforces_unique_key() {
        let repo = InMemoryOptionRepository::new();
        let stored = repo.create(new_option("a", SYSTEM_GROUP)).await.unwrap();
        assert!(repo.exists_by_key("a").await.unwrap());
        assert_eq!(repo.find_by_id(stored.id).await.unwrap().unwrap().key, "a");

        let err = repo.create(new_option("a", SYSTEM_GROUP)).await.unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::UniqueKeyViolation { key } if key == "a"
        ));
    }

    #[tokio::test]
    async fn test_find_all_orders_by_group_then_key() {
        let repo = InMemoryOptionRepository::new();
        repo.create(new_option("z", "system")).await.unwrap();
        repo.create(new_option("a", "ui")).await.unwrap();
        repo.create(new_option("m", "system")).await.unwrap();

        let keys: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|o| (o.group_type, o.key))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("system".to_string(), "m".to_string()),
                ("system".to_string(), "z".to_string()),
                ("ui".to_string(), "a".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_absent_row_is_silent() {
        let repo = InMemoryOptionRepository::new();
        repo.delete_by_id(Uuid::new_v4()).await.unwrap();
        repo.delete_by_key("missing").await.unwrap();
    }
}
