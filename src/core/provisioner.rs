use crate::config::solr::SolrConfig;
use crate::core::collection_options;
use crate::core::naming::parameterize;
use crate::domain::model::{CollectionEndpoint, CollectionName, FlatParameters, Settings};
use crate::domain::ports::{AdminApi, TenantAccount};
use crate::utils::error::{ProvisionError, Result};
use url::Url;

pub const COLLECTIONS_ADMIN_PATH: &str = "/solr/admin/collections";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    AlreadyExists,
}

/// Creates per-tenant Solr collections from account settings.
///
/// Check-then-create is not atomic: two concurrent runs for the same name can
/// both see the collection missing and both send CREATE. The second CREATE
/// is answered with "already exists", which is treated as success.
pub struct CollectionProvisioner<A: AdminApi> {
    admin: A,
    solr: SolrConfig,
}

impl<A: AdminApi> CollectionProvisioner<A> {
    pub fn new(admin: A, config: &SolrConfig) -> Self {
        Self {
            admin,
            solr: config.clone(),
        }
    }

    /// Ensures the tenant's collection exists and attaches its endpoint to
    /// the account. Safe to repeat against Solr; whether a second endpoint
    /// may be attached is up to the account.
    pub async fn provision_for_account<T: TenantAccount>(
        &self,
        account: &mut T,
    ) -> Result<CollectionEndpoint> {
        let name = parameterize(account.tenant())?;
        let url = self.collection_url(&name)?;
        let params = collection_options::transform(account.solr_collection_options());

        self.ensure_collection(name.as_str(), &params).await?;

        let endpoint = CollectionEndpoint {
            collection: name.to_string(),
            url: url.to_string(),
        };
        account.create_solr_endpoint(endpoint.clone())?;

        tracing::info!("Attached Solr endpoint {} to tenant {}", name, account.tenant());
        Ok(endpoint)
    }

    /// Ensures a collection that belongs to no account exists. Nothing is recorded.
    pub async fn provision_named(&self, name: &str, settings: &Settings) -> Result<ProvisionOutcome> {
        if name.trim().is_empty() {
            return Err(ProvisionError::InvalidConfigValue {
                field: "name".to_string(),
                value: name.to_string(),
                reason: "Collection name cannot be empty".to_string(),
            });
        }

        let params = collection_options::transform(settings);
        self.ensure_collection(name, &params).await
    }

    pub async fn collection_exists(&self, name: &str) -> Result<bool> {
        let response = self
            .admin
            .get(COLLECTIONS_ADMIN_PATH, &[("action".to_string(), "LIST".to_string())])
            .await?;

        let collections = response
            .get("collections")
            .and_then(|c| c.as_array())
            .ok_or_else(|| ProvisionError::malformed("LIST response has no 'collections' array"))?;

        Ok(collections.iter().any(|c| c.as_str() == Some(name)))
    }

    pub fn collection_url(&self, name: &CollectionName) -> Result<Url> {
        self.solr.collection_url(name)
    }

    async fn ensure_collection(&self, name: &str, params: &FlatParameters) -> Result<ProvisionOutcome> {
        if self.collection_exists(name).await? {
            tracing::info!("Solr collection {} already exists, skipping create", name);
            return Ok(ProvisionOutcome::AlreadyExists);
        }

        tracing::info!("Creating Solr collection {} with {} parameters", name, params.len());

        match self
            .admin
            .get(COLLECTIONS_ADMIN_PATH, &create_query(name, params))
            .await
        {
            Ok(_) => Ok(ProvisionOutcome::Created),
            Err(e) if e.is_already_exists() => {
                tracing::warn!("Solr collection {} was created concurrently: {}", name, e);
                Ok(ProvisionOutcome::AlreadyExists)
            }
            Err(e) => Err(e),
        }
    }
}

/// Collection settings merged with `action` and `name`; the latter two win.
fn create_query(name: &str, params: &FlatParameters) -> Vec<(String, String)> {
    let mut query: Vec<(String, String)> = params
        .to_query_pairs()
        .into_iter()
        .filter(|(key, _)| key != "action" && key != "name")
        .collect();

    query.push(("action".to_string(), "CREATE".to_string()));
    query.push(("name".to_string(), name.to_string()));
    query
}
