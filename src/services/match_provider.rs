use async_trait::async_trait;
use serde_json::Value;

use crate::models::error::UpstreamError;
use crate::models::football_match::Match;

/// Source of match data. Every call is one upstream round-trip.
#[async_trait]
pub trait MatchProvider: Send + Sync {
    /// All finished matches of the configured competition.
    async fn fetch_finished_matches(&self) -> Result<Vec<Match>, UpstreamError>;

    /// A single match, exactly as the provider serves it.
    async fn fetch_match(&self, match_id: &str) -> Result<Value, UpstreamError>;
}
