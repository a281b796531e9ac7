use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::date_parsing::UtcTimestamp;

/// Envelope returned by the competition matches endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchesResponse {
    pub matches: Vec<Match>,
}

/// A finished fixture as served by football-data.org.
///
/// Only the fields the result pipeline reads are typed. Everything else
/// (competition, season, matchday, referees, ...) is kept in `extra` so the
/// record goes back to clients unchanged.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u64,
    pub utc_date: UtcTimestamp,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub score: Score,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamRef {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Score block, kept as sent: `winner` and `fullTime` may be null or absent
/// and must come back the same way.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Score {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Score {
    /// `HOME_TEAM`, `AWAY_TEAM`, `DRAW`, or `None` when null or absent
    pub fn winner(&self) -> Option<&str> {
        self.fields.get("winner").and_then(Value::as_str)
    }

    pub fn home_goals(&self) -> Option<u32> {
        self.full_time_goals("homeTeam")
    }

    pub fn away_goals(&self) -> Option<u32> {
        self.full_time_goals("awayTeam")
    }

    fn full_time_goals(&self, side: &str) -> Option<u32> {
        self.fields
            .get("fullTime")
            .and_then(|full_time| full_time.get(side))
            .and_then(Value::as_u64)
            .and_then(|goals| u32::try_from(goals).ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    /// Anything other than an explicit home or away winner counts as a draw.
    pub fn from_winner(winner: Option<&str>) -> Self {
        match winner {
            Some("HOME_TEAM") => Outcome::HomeWin,
            Some("AWAY_TEAM") => Outcome::AwayWin,
            _ => Outcome::Draw,
        }
    }
}

impl Match {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_winner(self.score.winner())
    }

    /// Name of the winning side, `None` for a draw.
    pub fn winner_name(&self) -> Option<&str> {
        match self.outcome() {
            Outcome::HomeWin => Some(&self.home_team.name),
            Outcome::AwayWin => Some(&self.away_team.name),
            Outcome::Draw => None,
        }
    }

    pub fn involves_team(&self, team_name: &str) -> bool {
        let wanted = team_name.to_lowercase();
        self.home_team.name.to_lowercase() == wanted || self.away_team.name.to_lowercase() == wanted
    }
}

/// `{id, result}` line served by `/results`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MatchSummary {
    pub id: u64,
    pub result: String,
}

/// Unique team names across a set of matches, in order of first appearance.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TeamRoster {
    #[serde(rename = "equipos")]
    pub teams: Vec<String>,
}
