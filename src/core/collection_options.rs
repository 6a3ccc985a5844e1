//! Turns nested, snake-cased collection settings into the flat, camel-cased
//! query parameters the Solr Collections API expects.
//!
//! ```
//! use collection_provisioner::core::collection_options::transform;
//! use collection_provisioner::domain::model::{ParamValue, Settings};
//!
//! let mut settings = Settings::new();
//! settings
//!     .insert("replication_factor", 5)
//!     .insert("empty_value", "")
//!     .insert_nested("collection", [("config_name".to_string(), "x")]);
//!
//! let params = transform(&settings);
//! assert_eq!(params.get("replicationFactor"), Some(&ParamValue::Integer(5)));
//! assert_eq!(params.get("collection.configName"), Some(&ParamValue::from("x")));
//! assert!(!params.contains_key("emptyValue"));
//! ```

use crate::domain::model::{FlatParameters, ParamValue, SettingValue, Settings};
use std::collections::BTreeMap;

/// Flattens one level of nesting, camel-cases keys and drops blank values.
pub fn transform(settings: &Settings) -> FlatParameters {
    let mut flat = BTreeMap::new();

    for (key, value) in settings.iter() {
        match value {
            SettingValue::Nested(entries) => {
                let prefix = camelize_lower(key);
                for (inner_key, inner_value) in entries {
                    flat.insert(
                        format!("{}.{}", prefix, camelize_lower(inner_key)),
                        inner_value.clone(),
                    );
                }
            }
            SettingValue::Scalar(scalar) => {
                flat.insert(camelize_lower(key), scalar.clone());
            }
        }
    }

    flat.retain(|_, v: &mut ParamValue| !v.is_blank());
    FlatParameters::from_map(flat)
}

/// `replication_factor` -> `replicationFactor`.
///
/// Segments are split on any non-alphanumeric character. The first segment
/// only has its leading character lower-cased, so keys that are already
/// camel-cased pass through unchanged; later segments are capitalized.
pub fn camelize_lower(key: &str) -> String {
    let mut out = String::with_capacity(key.len());

    let segments = key
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty());

    for (index, segment) in segments.enumerate() {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            continue;
        };

        if index == 0 {
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
        } else {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }

    out
}
