use serde::Deserialize;

/// Query string of `/results`. Fields are optional so that a missing
/// parameter is reported with our own message instead of actix's.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Query string of `/team-results`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamQuery {
    pub team_name: Option<String>,
}
