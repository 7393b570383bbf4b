//! Option domain model.
//!
//! A `ConfigOption` is one named, runtime-tunable setting: a unique key, an
//! opaque string value, a group tag for bulk retrieval, and optional
//! presentation hints (widget name plus structured parameters) that this
//! layer stores but never interprets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel group assigned when a caller does not specify one.
pub const SYSTEM_GROUP: &str = "system";

/// Structured parameters attached to a UI component hint.
///
/// An owned string-keyed mapping of arbitrary well-formed JSON values. The
/// service round-trips it without looking inside.
pub type ComponentParams = serde_json::Map<String, serde_json::Value>;

/// One configuration entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOption {
    /// Backend-assigned surrogate identifier, immutable once created.
    pub id: Uuid,
    /// Globally unique lookup handle.
    pub key: String,
    /// The configuration payload; interpretation is the caller's concern.
    pub value: String,
    /// Partition tag used to cluster related options.
    pub group_type: String,
    /// UI widget hint (e.g. "input", "select"); not validated by the core.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Structured parameters for `component`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_params: Option<ComponentParams>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape handed to the repository: a `ConfigOption` minus the id the
/// backend has not assigned yet.
#[derive(Debug, Clone)]
pub struct NewOption {
    pub key: String,
    pub value: String,
    pub group_type: String,
    pub component: Option<String>,
    pub component_params: Option<ComponentParams>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an option.
///
/// `component_params` arrives as a raw JSON string; the service parses it
/// leniently (malformed input is logged and dropped, never an error).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOptionInput {
    pub key: String,
    pub value: String,
    /// Missing or empty resolves to [`SYSTEM_GROUP`].
    #[serde(default)]
    pub group_type: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub component_params: Option<String>,
}

/// Partial-update input: `None` means the field is not touched, `Some`
/// overwrites it.
///
/// For `component_params`, `Some("")` explicitly clears stored parameters to
/// absent; that distinction is why the raw string is kept optional rather
/// than defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptionInput {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub group_type: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub component_params: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_option() -> ConfigOption {
        let mut params = ComponentParams::new();
        params.insert("maxLength".into(), serde_json::json!(50));
        ConfigOption {
            id: Uuid::new_v4(),
            key: "site.title".into(),
            value: "MySite".into(),
            group_type: SYSTEM_GROUP.into(),
            component: Some("input".into()),
            component_params: Some(params),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_option_serializes_camel_case() {
        let json = serde_json::to_string(&sample_option()).unwrap();
        assert!(json.contains("\"groupType\":\"system\""));
        assert!(json.contains("\"componentParams\":{\"maxLength\":50}"));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_absent_component_fields_are_skipped() {
        let mut option = sample_option();
        option.component = None;
        option.component_params = None;
        let json = serde_json::to_string(&option).unwrap();
        assert!(!json.contains("component"));
    }

    #[test]
    fn test_update_input_distinguishes_missing_from_supplied() {
        let input: UpdateOptionInput =
            serde_json::from_str(r#"{"value":"v2","componentParams":""}"#).unwrap();
        assert_eq!(input.value.as_deref(), Some("v2"));
        assert!(input.group_type.is_none());
        assert_eq!(input.component_params.as_deref(), Some(""));
    }
}
