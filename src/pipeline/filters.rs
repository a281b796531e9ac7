use chrono::{DateTime, Utc};

use crate::models::error::ResultsError;
use crate::models::football_match::Match;
use crate::models::query::{DateRangeQuery, TeamQuery};
use crate::utils::date_parsing::parse_timestamp;

pub const MISSING_DATE_RANGE: &str = "Se requieren los parámetros startDate y endDate.";
pub const MISSING_TEAM_NAME: &str = "Se requiere el parámetro teamName.";

/// Inclusive `[start, end]` window over match kick-off times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Validate `startDate`/`endDate`. Blank values count as missing.
    pub fn from_query(query: &DateRangeQuery) -> Result<Self, ResultsError> {
        let (start, end) = match (non_blank(&query.start_date), non_blank(&query.end_date)) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(ResultsError::validation(MISSING_DATE_RANGE)),
        };

        Ok(Self::new(parse_param("startDate", start)?, parse_param("endDate", end)?))
    }

    pub fn contains(&self, ts: &DateTime<Utc>) -> bool {
        self.start <= *ts && *ts <= self.end
    }
}

/// Validate `teamName`, returning it untouched.
pub fn team_name_from_query(query: &TeamQuery) -> Result<&str, ResultsError> {
    non_blank(&query.team_name).ok_or_else(|| ResultsError::validation(MISSING_TEAM_NAME))
}

/// Case-insensitive exact match on either side. No partial matching.
pub fn filter_by_team(matches: Vec<Match>, team_name: &str) -> Vec<Match> {
    matches
        .into_iter()
        .filter(|m| m.involves_team(team_name))
        .collect()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_param(name: &str, raw: &str) -> Result<DateTime<Utc>, ResultsError> {
    parse_timestamp(raw).ok_or_else(|| {
        ResultsError::validation(format!("El parámetro {} no es una fecha válida.", name))
    })
}
