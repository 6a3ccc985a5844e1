use crate::domain::model::Settings;
use crate::utils::error::{ProvisionError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Loads collection settings from a TOML file, or JSON when the extension is `.json`.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    tracing::debug!("Loading collection settings from {}", path.display());

    if is_json {
        settings_from_json_str(&content)
    } else {
        settings_from_toml_str(&content)
    }
}

pub fn settings_from_toml_str(content: &str) -> Result<Settings> {
    let processed = substitute_env_vars(content);
    toml::from_str(&processed).map_err(|e| ProvisionError::SettingsParse {
        message: format!("TOML parsing error: {}", e),
    })
}

pub fn settings_from_json_str(content: &str) -> Result<Settings> {
    let processed = substitute_env_vars(content);
    serde_json::from_str(&processed).map_err(|e| ProvisionError::SettingsParse {
        message: format!("JSON parsing error: {}", e),
    })
}

/// Replaces `${VAR}` with the variable's value; unknown variables are left as written.
fn substitute_env_vars(content: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"));

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collection_options::transform;
    use crate::domain::model::ParamValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_toml_settings() {
        let settings = settings_from_toml_str(
            r#"
num_shards = 1
replication_factor = 2
router_name = ""

[collection]
config_name = "tenant_template"
"#,
        )
        .unwrap();

        let params = transform(&settings);
        assert_eq!(params.get("numShards"), Some(&ParamValue::Integer(1)));
        assert_eq!(
            params.get("collection.configName"),
            Some(&ParamValue::from("tenant_template"))
        );
        assert!(!params.contains_key("routerName"));
    }

    #[test]
    fn test_toml_rejects_double_nesting() {
        let result = settings_from_toml_str(
            r#"
[collection.config]
name = "x"
"#,
        );
        assert!(matches!(result, Err(ProvisionError::SettingsParse { .. })));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COLLECTION_PROVISIONER_TEST_CONFIGSET", "hyku");

        let settings = settings_from_toml_str(
            r#"
[collection]
config_name = "${COLLECTION_PROVISIONER_TEST_CONFIGSET}"
unknown = "${COLLECTION_PROVISIONER_TEST_UNSET}"
"#,
        )
        .unwrap();

        let params = transform(&settings);
        assert_eq!(params.get("collection.configName"), Some(&ParamValue::from("hyku")));
        assert_eq!(
            params.get("collection.unknown"),
            Some(&ParamValue::from("${COLLECTION_PROVISIONER_TEST_UNSET}"))
        );

        std::env::remove_var("COLLECTION_PROVISIONER_TEST_CONFIGSET");
    }

    #[test]
    fn test_load_json_file() {
        let mut temp_file = NamedTempFile::with_suffix(".json").unwrap();
        temp_file
            .write_all(br#"{"replication_factor": 3, "empty_value": null}"#)
            .unwrap();

        let settings = load_settings(temp_file.path()).unwrap();
        let params = transform(&settings);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("replicationFactor"), Some(&ParamValue::Integer(3)));
    }

    #[test]
    fn test_load_toml_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"max_shards_per_node = 4\n").unwrap();

        let settings = load_settings(temp_file.path()).unwrap();
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_settings("/nonexistent/collection-settings.toml");
        assert!(matches!(result, Err(ProvisionError::Io(_))));
    }
}
