use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::settings::FootballDataSettings;
use crate::models::error::UpstreamError;
use crate::models::football_match::{Match, MatchesResponse};
use crate::services::match_provider::MatchProvider;

const AUTH_HEADER: &str = "X-Auth-Token";

/// Client for the football-data.org v2 API.
pub struct FootballDataClient {
    client: Client,
    base_url: Url,
    competition: String,
    api_key: SecretString,
}

impl FootballDataClient {
    pub fn new(settings: &FootballDataSettings) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(UpstreamError::Client)?;
        let base_url = Url::parse(&settings.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(settings.base_url.clone()));
        }

        Ok(Self {
            client,
            base_url,
            competition: settings.competition.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, UpstreamError> {
        let url_str = url.to_string();
        tracing::debug!("⚽ Calling football-data at {}", url_str);

        let response = self
            .client
            .get(url)
            .header(AUTH_HEADER, self.api_key.expose_secret())
            .send()
            .await
            .map_err(|source| UpstreamError::Network { url: url_str.clone(), source })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("❌ football-data returned {} for {}: {}", status, url_str, body);
            return Err(UpstreamError::Status { url: url_str, status, body });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| UpstreamError::Payload { url: url_str, source })
    }
}

#[async_trait]
impl MatchProvider for FootballDataClient {
    #[tracing::instrument(name = "Fetch finished matches", skip(self), fields(competition = %self.competition))]
    async fn fetch_finished_matches(&self) -> Result<Vec<Match>, UpstreamError> {
        let mut url = self.endpoint(&["competitions", self.competition.as_str(), "matches"])?;
        url.query_pairs_mut().append_pair("status", "FINISHED");

        let body: MatchesResponse = self.get_json(url).await?;
        tracing::info!("✅ Fetched {} finished matches", body.matches.len());
        Ok(body.matches)
    }

    #[tracing::instrument(name = "Fetch match by id", skip(self))]
    async fn fetch_match(&self, match_id: &str) -> Result<Value, UpstreamError> {
        let url = self.endpoint(&["matches", match_id])?;
        self.get_json(url).await
    }
}
