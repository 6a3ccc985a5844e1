use crate::domain::model::CollectionName;
use crate::utils::error::{ProvisionError, Result};
use deunicode::deunicode;
use regex::Regex;
use std::sync::OnceLock;

fn separator_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static regex is valid"))
}

/// Derives the collection name for a tenant: transliterated to ASCII
/// (`Café` -> `cafe`), lower-cased, every run of
/// characters outside `[a-z0-9]` collapsed to one `-`, no leading or
/// trailing `-`. The same tenant always maps to the same name, which is
/// what lets the existence check find a collection created earlier.
pub fn parameterize(tenant: &str) -> Result<CollectionName> {
    let lowered = deunicode(tenant).to_lowercase();
    let hyphenated = separator_runs().replace_all(&lowered, "-");
    let name = hyphenated.trim_matches('-');

    if name.is_empty() {
        return Err(ProvisionError::InvalidTenant {
            tenant: tenant.to_string(),
        });
    }

    Ok(CollectionName::new_unchecked(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterize_tenant() {
        assert_eq!(parameterize("Acme Corp!").unwrap().as_str(), "acme-corp");
        assert_eq!(parameterize("acme").unwrap().as_str(), "acme");
        assert_eq!(parameterize("  Foo__Bar--Baz  ").unwrap().as_str(), "foo-bar-baz");
        assert_eq!(parameterize("tenant.example.com").unwrap().as_str(), "tenant-example-com");
        assert_eq!(parameterize("Café 42").unwrap().as_str(), "cafe-42");
        assert_eq!(parameterize("Über Bank").unwrap().as_str(), "uber-bank");
    }

    #[test]
    fn test_accents_do_not_collide_with_plain_names() {
        assert_ne!(parameterize("Café 42").unwrap(), parameterize("Caf 42").unwrap());
    }

    #[test]
    fn test_parameterize_is_deterministic() {
        let first = parameterize("Acme Corp!").unwrap();
        for _ in 0..10 {
            assert_eq!(parameterize("Acme Corp!").unwrap(), first);
        }
    }

    #[test]
    fn test_parameterize_rejects_unusable_tenant() {
        assert!(matches!(
            parameterize("!!!"),
            Err(ProvisionError::InvalidTenant { .. })
        ));
        assert!(parameterize("").is_err());
    }
}
