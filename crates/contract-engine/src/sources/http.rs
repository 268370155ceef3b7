//! Fragments fetched from the web deployment

use async_trait::async_trait;

use super::FragmentSource;
use crate::errors::ContractError;

/// Fetches fragments relative to a base URL
///
/// A response with a non-success status is an error, never a fragment.
#[derive(Debug, Clone)]
pub struct HttpFragmentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFragmentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches("./").trim_start_matches('/');
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, ContractError> {
        let url = self.url_for(path);
        tracing::debug!(%url, "Fetching fragment");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ContractError::Fetch {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContractError::FetchStatus {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl FragmentSource for HttpFragmentSource {
    async fn fetch_text(&self, path: &str) -> Result<String, ContractError> {
        self.get(path)
            .await?
            .text()
            .await
            .map_err(|e| ContractError::Fetch {
                path: path.to_string(),
                message: e.to_string(),
            })
    }

    async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, ContractError> {
        self.get(path)
            .await?
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| ContractError::Fetch {
                path: path.to_string(),
                message: e.to_string(),
            })
    }
}
