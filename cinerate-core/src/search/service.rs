//! The single lookup request a manual search issues.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use cinerate_model::MovieFound;
use reqwest::Client;
use url::Url;

use super::error::SearchError;

/// Seam for the one network call the search client makes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieLookup: Send + Sync {
    /// Look up the best match for a movie title.
    async fn lookup(&self, title: &str) -> Result<MovieFound, SearchError>;
}

/// HTTP implementation talking to the application's search endpoint.
#[derive(Clone)]
pub struct LookupService {
    client: Client,
    endpoint: Url,
}

impl fmt::Debug for LookupService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupService")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl LookupService {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, SearchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl MovieLookup for LookupService {
    async fn lookup(&self, title: &str) -> Result<MovieFound, SearchError> {
        tracing::debug!(endpoint = %self.endpoint, title, "requesting movie lookup");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("title", title)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, title, "lookup returned no match");
            return Err(SearchError::NotFound);
        }

        Ok(response.json().await?)
    }
}
