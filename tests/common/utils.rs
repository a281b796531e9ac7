use async_trait::async_trait;
use once_cell::sync::Lazy;
use secrecy::SecretString;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use premier_results_api::config::settings::FootballDataSettings;
use premier_results_api::models::error::UpstreamError;
use premier_results_api::models::football_match::Match;
use premier_results_api::run;
use premier_results_api::services::{FootballDataClient, MatchProvider};
use premier_results_api::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
}

/// In-memory provider that counts how often the upstream would have been hit.
pub struct StubProvider {
    matches: Vec<Match>,
    match_detail: Option<Value>,
    fail: bool,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn with_matches(matches: Vec<Match>) -> Self {
        Self {
            matches,
            match_detail: None,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_match_detail(detail: Value) -> Self {
        Self {
            match_detail: Some(detail),
            ..Self::with_matches(Vec::new())
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_matches(Vec::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn unavailable(&self) -> UpstreamError {
        UpstreamError::InvalidUrl("stub upstream is down".to_string())
    }
}

#[async_trait]
impl MatchProvider for StubProvider {
    async fn fetch_finished_matches(&self) -> Result<Vec<Match>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(self.unavailable());
        }
        Ok(self.matches.clone())
    }

    async fn fetch_match(&self, _match_id: &str) -> Result<Value, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match (&self.match_detail, self.fail) {
            (Some(detail), false) => Ok(detail.clone()),
            _ => Err(self.unavailable()),
        }
    }
}

pub async fn spawn_app(provider: Arc<dyn MatchProvider>) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = run(listener, provider, Vec::new())
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp { address }
}

/// Spawn the app wired to the real client, pointed at a fake football-data server.
pub async fn spawn_app_with_upstream(upstream_url: &str) -> TestApp {
    let client = FootballDataClient::new(&football_data_settings(upstream_url))
        .expect("Failed to build football-data client");
    spawn_app(Arc::new(client)).await
}

pub fn football_data_settings(upstream_url: &str) -> FootballDataSettings {
    FootballDataSettings {
        base_url: format!("{}/v2", upstream_url),
        competition: "PL".to_string(),
        api_key: SecretString::new("test-api-key".to_string().into_boxed_str()),
        timeout_seconds: 5,
    }
}

/// Raw upstream record with the extra fields football-data.org sends.
pub fn raw_match(
    id: u64,
    utc_date: &str,
    home: &str,
    away: &str,
    home_goals: u32,
    away_goals: u32,
    winner: Option<&str>,
) -> Value {
    json!({
        "id": id,
        "utcDate": utc_date,
        "status": "FINISHED",
        "matchday": 1,
        "homeTeam": { "id": id * 10, "name": home },
        "awayTeam": { "id": id * 10 + 1, "name": away },
        "score": {
            "winner": winner,
            "duration": "REGULAR",
            "fullTime": { "homeTeam": home_goals, "awayTeam": away_goals },
            "halfTime": { "homeTeam": 0, "awayTeam": 0 }
        }
    })
}

pub fn sample_match(
    id: u64,
    utc_date: &str,
    home: &str,
    away: &str,
    home_goals: u32,
    away_goals: u32,
    winner: Option<&str>,
) -> Match {
    serde_json::from_value(raw_match(id, utc_date, home, away, home_goals, away_goals, winner))
        .expect("Invalid sample match")
}

pub fn season_fixture() -> Vec<Match> {
    vec![
        sample_match(1, "2023-01-01T00:00:00Z", "Arsenal", "Chelsea", 2, 1, Some("HOME_TEAM")),
        sample_match(2, "2023-01-01T17:30:00Z", "Liverpool", "Everton", 0, 0, Some("DRAW")),
        sample_match(3, "2023-01-03T20:00:00Z", "Chelsea", "Liverpool", 1, 3, Some("AWAY_TEAM")),
        sample_match(4, "2023-01-05T20:00:00Z", "Everton", "Arsenal", 1, 1, None),
    ]
}
