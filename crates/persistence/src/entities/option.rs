//! Option entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::ConfigOption;

/// Database row mapping for the `options` table.
#[derive(Debug, Clone, FromRow)]
pub struct OptionEntity {
    pub id: Uuid,
    pub key: String,
    pub value: String,
    pub group_type: String,
    pub component: Option<String>,
    pub component_params: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OptionEntity> for ConfigOption {
    fn from(entity: OptionEntity) -> Self {
        Self {
            id: entity.id,
            key: entity.key,
            value: entity.value,
            group_type: entity.group_type,
            component: entity.component,
            // Only a well-formed object survives the mapping; any other
            // value in the column is treated as absent.
            component_params: entity.component_params.and_then(|value| match value {
                serde_json::Value::Object(map) => Some(map),
                _ => None,
            }),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(params: Option<serde_json::Value>) -> OptionEntity {
        OptionEntity {
            id: Uuid::new_v4(),
            key: "site.title".into(),
            value: "MySite".into(),
            group_type: "system".into(),
            component: Some("input".into()),
            component_params: params,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_entity_to_domain_with_object_params() {
        let option: ConfigOption = entity(Some(serde_json::json!({"maxLength": 50}))).into();
        assert_eq!(
            option.component_params.unwrap()["maxLength"],
            serde_json::json!(50)
        );
    }

    #[test]
    fn test_entity_to_domain_without_params() {
        let option: ConfigOption = entity(None).into();
        assert!(option.component_params.is_none());
    }

    #[test]
    fn test_entity_to_domain_drops_non_object_params() {
        let option: ConfigOption = entity(Some(serde_json::json!([1, 2, 3]))).into();
        assert!(option.component_params.is_none());

        let option: ConfigOption = entity(Some(serde_json::Value::Null)).into();
        assert!(option.component_params.is_none());
    }
}
