//! HTTP access to the profile and assessment endpoints.

use futures::future;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{AssessmentRecord, EndpointConfig, FetchError, ProfileRecord};

/// Fetches the two dashboard records. One GET per call, no retries, no caching.
#[derive(Debug, Clone)]
pub struct RemoteDataSource {
    client: Client,
    config: EndpointConfig,
}

impl RemoteDataSource {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Uses a caller-built client, e.g. one with proxy or TLS settings.
    pub fn with_client(client: Client, config: EndpointConfig) -> Self {
        Self { client, config }
    }

    pub async fn fetch_profile(&self) -> Result<ProfileRecord, FetchError> {
        self.get_json(&self.config.profile_url).await
    }

    pub async fn fetch_assessment(&self) -> Result<AssessmentRecord, FetchError> {
        self.get_json(&self.config.assessment_url).await
    }

    /// Issues both requests at once and waits for both to settle.
    ///
    /// Either failure fails the whole step; when both fail the profile error wins.
    pub async fn fetch_both(&self) -> Result<(ProfileRecord, AssessmentRecord), FetchError> {
        let (profile, assessment) =
            future::join(self.fetch_profile(), self.fetch_assessment()).await;
        Ok((profile?, assessment?))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(%url, "requesting dashboard data");

        let response = self.client.get(url).send().await.map_err(|err| {
            warn!(%url, error = %err, "dashboard request failed");
            FetchError::Transport(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "dashboard endpoint returned an error status");
            return Err(FetchError::Status { status });
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        serde_json::from_slice(&body).map_err(|err| {
            warn!(%url, error = %err, "dashboard response did not match the expected shape");
            FetchError::Decode(err)
        })
    }
}
