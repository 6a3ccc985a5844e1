use crate::config::solr::SolrConfig;
use crate::domain::ports::AdminApi;
use crate::utils::error::{ProvisionError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Admin API session backed by `reqwest`. Credentials found in the
/// configured URL are sent as basic auth, never as part of the request URL.
#[derive(Debug, Clone)]
pub struct SolrAdminClient {
    client: Client,
    base_url: Url,
    credentials: Option<(String, Option<String>)>,
}

impl SolrAdminClient {
    pub fn new(config: &SolrConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Self::with_client(builder.build()?, config)
    }

    pub fn with_client(client: Client, config: &SolrConfig) -> Result<Self> {
        let mut base_url = config.url().clone();

        let credentials = if base_url.username().is_empty() {
            None
        } else {
            let user = decode_userinfo(base_url.username())?;
            let password = base_url.password().map(decode_userinfo).transpose()?;
            Some((user, password))
        };

        base_url
            .set_username("")
            .and_then(|_| base_url.set_password(None))
            .map_err(|_| ProvisionError::configuration("Solr URL cannot carry credentials"))?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }
}

#[async_trait]
impl AdminApi for SolrAdminClient {
    async fn get(&self, path: &str, params: &[(String, String)]) -> Result<serde_json::Value> {
        let url = self.base_url.join(path).map_err(|e| {
            ProvisionError::configuration(format!("Invalid admin path '{}': {}", path, e))
        })?;

        tracing::debug!("Admin API request: GET {} {:?}", url, params);

        let mut request = self.client.get(url).query(params);
        if let Some((user, password)) = &self.credentials {
            request = request.basic_auth(user, password.as_ref());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("Admin API response status: {}", status);

        if !status.is_success() {
            return Err(ProvisionError::AdminApi {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            ProvisionError::malformed(format!("Expected a JSON body from {}: {}", path, e))
        })
    }
}

fn decode_userinfo(raw: &str) -> Result<String> {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ProvisionError::configuration(format!("Invalid credentials in Solr URL: {}", e)))
}

/// Solr reports failures as `{"error": {"msg": ...}}`; fall back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.pointer("/error/msg")
                .or_else(|| json.pointer("/exception/msg"))
                .and_then(|msg| msg.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
