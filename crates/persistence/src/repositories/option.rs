//! PostgreSQL option repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use domain::models::{ConfigOption, NewOption};
use domain::repositories::{OptionRepository, RepositoryError};

use crate::entities::OptionEntity;

/// Postgres error code for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Repository for option persistence against PostgreSQL.
///
/// Expects an `options` table with a unique index on `key` and a JSONB
/// `component_params` column; schema migration is managed outside this
/// crate.
#[derive(Clone)]
pub struct PgOptionRepository {
    pool: PgPool,
}

impl PgOptionRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Backend(err.into())
}

#[async_trait]
impl OptionRepository for PgOptionRepository {
    async fn find_all(&self) -> Result<Vec<ConfigOption>, RepositoryError> {
        let entities = sqlx::query_as::<_, OptionEntity>(
            r#"
            SELECT id, key, value, group_type, component, component_params, created_at, updated_at
            FROM options
            ORDER BY group_type, key
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ConfigOption>, RepositoryError> {
        let entity = sqlx::query_as::<_, OptionEntity>(
            r#"
            SELECT id, key, value, group_type, component, component_params, created_at, updated_at
            FROM options
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;
        Ok(entity.map(Into::into))
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<ConfigOption>, RepositoryError> {
        let entity = sqlx::query_as::<_, OptionEntity>(
            r#"
            SELECT id, key, value, group_type, component, component_params, created_at, updated_at
            FROM options
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;
        Ok(entity.map(Into::into))
    }

    async fn find_by_group_type(
        &self,
        group_type: &str,
    ) -> Result<Vec<ConfigOption>, RepositoryError> {
        let entities = sqlx::query_as::<_, OptionEntity>(
            r#"
            SELECT id, key, value, group_type, component, component_params, created_at, updated_at
            FROM options
            WHERE group_type = $1
            ORDER BY key
            "#,
        )
        .bind(group_type)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn exists_by_key(&self, key: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM options WHERE key = $1)")
            .bind(key)
            .fetch_one(&self.pool)
            .await
            .map_err(backend)
    }

    async fn create(&self, option: NewOption) -> Result<ConfigOption, RepositoryError> {
        let params = option.component_params.map(serde_json::Value::Object);
        let entity = sqlx::query_as::<_, OptionEntity>(
            r#"
            INSERT INTO options (id, key, value, group_type, component, component_params, created_at, updated_at)
            VALUES (gen_random_uuid(), $1, $2, $3, $4, $5, $6, $7)
            RETURNING id, key, value, group_type, component, component_params, created_at, updated_at
            "#,
        )
        .bind(&option.key)
        .bind(&option.value)
        .bind(&option.group_type)
        .bind(&option.component)
        .bind(&params)
        .bind(option.created_at)
        .bind(option.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db_err) = &err {
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                    return RepositoryError::UniqueKeyViolation {
                        key: option.key.clone(),
                    };
                }
            }
            backend(err)
        })?;
        Ok(entity.into())
    }

    async fn update(&self, option: &ConfigOption) -> Result<(), RepositoryError> {
        let params = option
            .component_params
            .clone()
            .map(serde_json::Value::Object);
        sqlx::query(
            r#"
            UPDATE options
            SET value = $2, group_type = $3, component = $4, component_params = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(option.id)
        .bind(&option.value)
        .bind(&option.group_type)
        .bind(&option.component)
        .bind(&params)
        .bind(option.updated_at)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM options WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(())
    }

    async fn delete_by_key(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM options WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_map_to_backend() {
        let err = backend(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Backend(_)));
    }
}
