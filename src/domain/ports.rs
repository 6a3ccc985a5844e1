use crate::domain::model::{CollectionEndpoint, Settings};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Issues GET requests against the search engine's admin API and returns the parsed JSON body.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn get(&self, path: &str, params: &[(String, String)]) -> Result<serde_json::Value>;
}

/// The account side of provisioning: where the tenant name and settings come
/// from, and where the resulting endpoint is recorded.
pub trait TenantAccount: Send + Sync {
    fn tenant(&self) -> &str;
    fn solr_collection_options(&self) -> &Settings;
    fn create_solr_endpoint(&mut self, endpoint: CollectionEndpoint) -> Result<()>;
}
