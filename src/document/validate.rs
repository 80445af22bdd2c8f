//! Acceptance rules for mode objects coming from outside the database.
//!
//! Imported objects are checked strictly: every required field must be
//! present and have the right JSON type before the object is turned into a
//! [`Mode`]. Nothing is loaded from or written to storage until an object
//! passes.

use crate::document::mode::{Mode, ThinkingLevel};
use crate::store::error::{ModeStoreError, Result};
use serde_json::{Map, Value};

/// Fields every imported mode must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 9] = [
    "id",
    "name",
    "icon",
    "thinkingLevel",
    "autoRun",
    "shouldAutoApplyIfNoEditTool",
    "enabledTools",
    "autoFix",
    "enabledMcpServers",
];

/// Sets the mode's id: the override when given, otherwise a fresh UUID v4
/// when the object has no id or an empty one.
///
/// Returns the id the object ends up with.
pub fn resolve_id(object: &mut Map<String, Value>, override_id: Option<&str>) -> String {
    if let Some(id) = override_id {
        object.insert("id".to_string(), Value::String(id.to_string()));
        return id.to_string();
    }

    match object.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Null) | Some(Value::String(_)) | None => {
            let id = uuid::Uuid::new_v4().to_string();
            object.insert("id".to_string(), Value::String(id.clone()));
            id
        }
        // Left as-is so the type check reports it.
        Some(_) => String::new(),
    }
}

/// Validates an imported JSON value and converts it into a [`Mode`].
///
/// The id should already have been resolved with [`resolve_id`].
///
/// # Errors
///
/// Returns [`ModeStoreError::Validation`] naming the first field that is
/// missing or has the wrong type.
pub fn validate_mode(value: Value) -> Result<Mode> {
    let object = match value {
        Value::Object(object) => object,
        _ => {
            return Err(ModeStoreError::Validation {
                field: "mode".to_string(),
                reason: "must be a JSON object".to_string(),
            })
        }
    };

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(ModeStoreError::missing_field(field));
        }
    }

    for (field, value) in &object {
        if let Some(reason) = check_field(field, value) {
            return Err(ModeStoreError::Validation {
                field: field.clone(),
                reason: reason.to_string(),
            });
        }
    }

    serde_json::from_value(Value::Object(object)).map_err(|e| ModeStoreError::Validation {
        field: "mode".to_string(),
        reason: e.to_string(),
    })
}

/// Returns why a known field's value is unacceptable, or `None` if it is fine.
fn check_field(field: &str, value: &Value) -> Option<&'static str> {
    match field {
        "id" | "name" | "icon" => (!value.is_string()).then_some("must be a string"),
        "description" | "customRulesForAI" => {
            (!value.is_string() && !value.is_null()).then_some("must be a string")
        }
        "thinkingLevel" => match value.as_str().and_then(ThinkingLevel::parse) {
            Some(_) => None,
            None => Some("must be one of none, low, medium, high"),
        },
        "autoRun" | "shouldAutoApplyIfNoEditTool" | "autoFix" => {
            (!value.is_boolean()).then_some("must be a boolean")
        }
        "enabledTools" => match value.as_array() {
            Some(items) if items.iter().all(|item| item.is_i64()) => None,
            _ => Some("must be a list of integers"),
        },
        "enabledMcpServers" => (!value.is_array()).then_some("must be a list"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> Map<String, Value> {
        match json!({
            "id": "c1",
            "name": "Foo",
            "icon": "bug",
            "thinkingLevel": "none",
            "autoRun": false,
            "shouldAutoApplyIfNoEditTool": true,
            "enabledTools": [1, 3],
            "autoFix": true,
            "enabledMcpServers": []
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_resolve_id_override_wins() {
        let mut object = complete();
        assert_eq!(resolve_id(&mut object, Some("forced")), "forced");
        assert_eq!(object["id"], json!("forced"));
    }

    #[test]
    fn test_resolve_id_keeps_existing() {
        let mut object = complete();
        assert_eq!(resolve_id(&mut object, None), "c1");
    }

    #[test]
    fn test_resolve_id_generates_uuid() {
        let mut object = complete();
        object.insert("id".to_string(), json!(""));
        let id = resolve_id(&mut object, None);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert_eq!(object["id"], json!(id));

        let mut object = complete();
        object.remove("id");
        let other = resolve_id(&mut object, None);
        assert_ne!(id, other);
    }

    #[test]
    fn test_every_required_field_is_enforced() {
        for field in REQUIRED_FIELDS {
            let mut object = complete();
            object.remove(field);
            match validate_mode(Value::Object(object)) {
                Err(ModeStoreError::Validation { field: reported, .. }) => {
                    assert_eq!(reported, field)
                }
                other => panic!("expected validation error for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_wrong_types_are_named() {
        let mut object = complete();
        object.insert("thinkingLevel".to_string(), json!("extreme"));
        match validate_mode(Value::Object(object)) {
            Err(ModeStoreError::Validation { field, .. }) => assert_eq!(field, "thinkingLevel"),
            other => panic!("unexpected {:?}", other),
        }

        let mut object = complete();
        object.insert("enabledTools".to_string(), json!(["1"]));
        match validate_mode(Value::Object(object)) {
            Err(ModeStoreError::Validation { field, .. }) => assert_eq!(field, "enabledTools"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            validate_mode(json!([1, 2])),
            Err(ModeStoreError::Validation { .. })
        ));
    }

    #[test]
    fn test_optional_fields_accepted() {
        let mut object = complete();
        object.insert("description".to_string(), json!("Ünïcode описание"));
        object.insert("customRulesForAI".to_string(), json!("# rules"));
        let mode = validate_mode(Value::Object(object)).unwrap();
        assert_eq!(mode.description.as_deref(), Some("Ünïcode описание"));
        assert_eq!(mode.custom_rules_for_ai.as_deref(), Some("# rules"));
    }
}
