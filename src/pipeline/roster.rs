use std::collections::HashSet;

use crate::models::football_match::{Match, TeamRoster};

/// Distinct home and away team names, first appearance first.
pub fn team_roster(matches: &[Match]) -> TeamRoster {
    let mut seen = HashSet::new();
    let mut teams = Vec::new();

    for m in matches {
        for name in [&m.home_team.name, &m.away_team.name] {
            if seen.insert(name.as_str()) {
                teams.push(name.clone());
            }
        }
    }

    TeamRoster { teams }
}
