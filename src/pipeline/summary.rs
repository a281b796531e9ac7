use crate::models::football_match::{Match, MatchSummary};

use super::filters::DateRange;

/// `"{home} {hg} - {ag} {away}. Result: Winner {team}"`, or `Result: Draw`.
pub fn summarize(m: &Match) -> MatchSummary {
    let scoreline = format!(
        "{} {} - {} {}",
        m.home_team.name,
        goals(m.score.home_goals()),
        goals(m.score.away_goals()),
        m.away_team.name
    );
    let verdict = match m.winner_name() {
        Some(team) => format!("Result: Winner {}", team),
        None => "Result: Draw".to_string(),
    };

    MatchSummary {
        id: m.id,
        result: format!("{}. {}", scoreline, verdict),
    }
}

/// Summaries of every match kicking off inside `range`, in upstream order.
pub fn results_in_range(matches: &[Match], range: &DateRange) -> Vec<MatchSummary> {
    matches
        .iter()
        .filter(|m| range.contains(m.utc_date.instant()))
        .map(summarize)
        .collect()
}

// Null or absent when upstream has no recorded full-time score.
fn goals(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |g| g.to_string())
}
