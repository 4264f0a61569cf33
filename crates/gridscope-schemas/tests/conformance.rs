use gridscope_core::{ElementType, InfoType, Network};
use gridscope_schemas::SchemaCache;
use gridscope_views::{project_many, InfoTypeParameters, MapperContext};
use serde_json::Value;
use std::path::PathBuf;

fn sample_grid() -> Network {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test_data/networks/sample_grid.json");
    Network::from_path(path).unwrap()
}

fn allows_null(schema: &Value) -> bool {
    match &schema["type"] {
        Value::String(kind) => kind == "null",
        Value::Array(kinds) => kinds.iter().any(|k| k == "null"),
        _ => false,
    }
}

/// Walks `value` alongside `schema`. A property that may be left out must
/// never be written as `null`; a required one may only be `null` when the
/// schema says so.
fn check(path: &str, value: &Value, schema: &Value) {
    match value {
        Value::Object(fields) => {
            let Some(properties) = schema["properties"].as_object() else {
                return;
            };
            let required: Vec<&str> = schema["required"]
                .as_array()
                .map(|keys| keys.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            for key in &required {
                assert!(fields.contains_key(*key), "{path}.{key} is required");
            }
            for (key, field) in fields {
                let field_schema = properties
                    .get(key)
                    .unwrap_or_else(|| panic!("{path}.{key} is not in the schema"));
                if field.is_null() {
                    assert!(
                        required.contains(&key.as_str()),
                        "{path}.{key} is optional and must be omitted, not null"
                    );
                    assert!(allows_null(field_schema), "{path}.{key} must not be null");
                }
                check(&format!("{path}.{key}"), field, field_schema);
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                check(&format!("{path}[{i}]"), item, &schema["items"]);
            }
        }
        _ => {}
    }
}

#[test]
fn test_tab_views_follow_schema_null_policy() {
    let network = sample_grid();
    let cache = SchemaCache::load_embedded().unwrap();

    for load_operational_limit_groups in [false, true] {
        let parameters = InfoTypeParameters {
            load_operational_limit_groups,
        };
        let ctx = MapperContext::new(&network, &parameters);
        for element_type in ElementType::ALL {
            let schema: Value =
                serde_json::from_str(cache.get(element_type, InfoType::Tab).unwrap()).unwrap();
            let views = project_many(&ctx, element_type, InfoType::Tab, &[]).unwrap();
            for view in views {
                let value = serde_json::to_value(view).unwrap();
                let id = value["id"].as_str().unwrap_or_default().to_string();
                check(&format!("{element_type} {id}"), &value, &schema);
            }
        }
    }
}
