//! JSON-schema resources for the TAB views
//!
//! One schema per element type that has a TAB view. The resources ship inside
//! the binary and are parsed and re-serialized once at startup, so lookups
//! hand out a minimized, key-sorted string without touching the filesystem.
//!
//! ```
//! use gridscope_core::{ElementType, InfoType};
//! use gridscope_schemas::SchemaCache;
//!
//! let cache = SchemaCache::load_embedded().unwrap();
//! let schema = cache.get(ElementType::Load, InfoType::Tab).unwrap();
//! assert!(schema.starts_with('{'));
//! assert!(cache.get(ElementType::Load, InfoType::Form).is_err());
//! ```

use gridscope_core::{ElementType, GridscopeError, GridscopeResult, InfoType};
use gridscope_views::ViewRegistry;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

macro_rules! embedded {
    ($($element_type:ident => $file:literal),* $(,)?) => {
        const RESOURCES: &[(ElementType, &str, &str)] = &[
            $((ElementType::$element_type, $file, include_str!(concat!("../schemas/", $file))),)*
        ];
    };
}

embedded! {
    Substation => "substation-tab.json",
    VoltageLevel => "voltage-level-tab.json",
    Line => "line-tab.json",
    TieLine => "tie-line-tab.json",
    HvdcLine => "hvdc-line-tab.json",
    TwoWindingsTransformer => "two-windings-transformer-tab.json",
    ThreeWindingsTransformer => "three-windings-transformer-tab.json",
    Generator => "generator-tab.json",
    Battery => "battery-tab.json",
    Load => "load-tab.json",
    ShuntCompensator => "shunt-compensator-tab.json",
    StaticVarCompensator => "static-var-compensator-tab.json",
    LccConverterStation => "lcc-converter-station-tab.json",
    VscConverterStation => "vsc-converter-station-tab.json",
    DanglingLine => "dangling-line-tab.json",
    BusbarSection => "busbar-section-tab.json",
    Bus => "bus-tab.json",
}

static GLOBAL: OnceCell<SchemaCache> = OnceCell::new();

/// File name of the TAB schema resource for `element_type`.
pub fn resource_name(element_type: ElementType) -> Option<&'static str> {
    RESOURCES
        .iter()
        .find(|(t, _, _)| *t == element_type)
        .map(|(_, file, _)| *file)
}

/// Minimized TAB schemas, keyed by element type.
#[derive(Debug, Clone)]
pub struct SchemaCache {
    schemas: HashMap<ElementType, String>,
}

impl SchemaCache {
    /// Build the cache from the resources compiled into the crate.
    pub fn load_embedded() -> GridscopeResult<Self> {
        let raw = RESOURCES
            .iter()
            .map(|&(element_type, file, content)| (element_type, file, content.to_string()))
            .collect();
        Self::build("embedded", raw)
    }

    /// Build the cache from `dir`, which must hold every resource file.
    pub fn load_from_dir(dir: &Path) -> GridscopeResult<Self> {
        let mut raw = Vec::with_capacity(RESOURCES.len());
        for &(element_type, file, _) in RESOURCES {
            let path = dir.join(file);
            let content = fs::read_to_string(&path).map_err(|e| {
                GridscopeError::Schema(format!("cannot read {}: {e}", path.display()))
            })?;
            raw.push((element_type, file, content));
        }
        Self::build(&dir.display().to_string(), raw)
    }

    fn build(source: &str, raw: Vec<(ElementType, &str, String)>) -> GridscopeResult<Self> {
        let mut schemas = HashMap::with_capacity(raw.len());
        for (element_type, file, content) in raw {
            schemas.insert(element_type, minimize(file, &content)?);
        }

        let uncovered: Vec<String> = ViewRegistry::global()
            .supported()
            .into_iter()
            .filter(|(t, v)| *v == InfoType::Tab && !schemas.contains_key(t))
            .map(|(t, _)| t.to_string())
            .collect();
        if !uncovered.is_empty() {
            return Err(GridscopeError::Schema(format!(
                "no TAB schema for {}",
                uncovered.join(", ")
            )));
        }

        info!(source, count = schemas.len(), "schema cache loaded");
        Ok(Self { schemas })
    }

    /// Minimized schema of the `info_type` view of `element_type`.
    ///
    /// Only TAB views carry a schema.
    pub fn get(&self, element_type: ElementType, info_type: InfoType) -> GridscopeResult<&str> {
        let unsupported = || GridscopeError::UnsupportedSchema {
            element_type,
            info_type,
        };
        if info_type != InfoType::Tab {
            return Err(unsupported());
        }
        self.schemas
            .get(&element_type)
            .map(String::as_str)
            .ok_or_else(unsupported)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Element types with a schema, in declaration order.
    pub fn element_types(&self) -> Vec<ElementType> {
        ElementType::ALL
            .into_iter()
            .filter(|t| self.schemas.contains_key(t))
            .collect()
    }
}

fn minimize(file: &str, content: &str) -> GridscopeResult<String> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| GridscopeError::Schema(format!("{file}: {e}")))?;
    if !value.is_object() {
        return Err(GridscopeError::Schema(format!("{file}: not a JSON object")));
    }
    serde_json::to_string(&value).map_err(|e| GridscopeError::Schema(format!("{file}: {e}")))
}

/// Install the process-wide cache. Fails if one is already installed.
pub fn init_global(cache: SchemaCache) -> GridscopeResult<&'static SchemaCache> {
    GLOBAL
        .set(cache)
        .map_err(|_| GridscopeError::Other("schema cache already initialized".to_string()))?;
    global()
}

/// The cache installed by [`init_global`].
pub fn global() -> GridscopeResult<&'static SchemaCache> {
    GLOBAL
        .get()
        .ok_or_else(|| GridscopeError::Other("schema cache not initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_element_type_has_a_resource() {
        for element_type in ElementType::ALL {
            assert!(resource_name(element_type).is_some(), "{element_type}");
        }
    }

    #[test]
    fn minimize_sorts_keys_and_drops_whitespace() {
        let minimized =
            minimize("t.json", "{\n  \"type\": \"object\",\n  \"$id\": \"x\"\n}").unwrap();
        assert_eq!(minimized, r#"{"$id":"x","type":"object"}"#);
    }

    #[test]
    fn minimize_rejects_non_objects() {
        assert!(matches!(minimize("t.json", "[]"), Err(GridscopeError::Schema(_))));
        assert!(matches!(minimize("t.json", "{"), Err(GridscopeError::Schema(_))));
    }
}
