// src/routes/results.rs
use actix_web::{get, web, HttpResponse};

use crate::handlers::results_handler;
use crate::models::error::ResultsError;
use crate::models::query::{DateRangeQuery, TeamQuery};
use crate::services::MatchProvider;

/// Premier League results of this season
#[get("/this-season")]
async fn this_season(
    provider: web::Data<dyn MatchProvider>,
) -> Result<HttpResponse, ResultsError> {
    results_handler::get_this_season(provider).await
}

/// Match id and detailed result for every match in a date range
#[get("/results")]
async fn results(
    query: web::Query<DateRangeQuery>,
    provider: web::Data<dyn MatchProvider>,
) -> Result<HttpResponse, ResultsError> {
    results_handler::get_results(query, provider).await
}

#[get("/match/{match_id}")]
async fn match_by_id(
    path: web::Path<String>,
    provider: web::Data<dyn MatchProvider>,
) -> Result<HttpResponse, ResultsError> {
    let match_id = path.into_inner();
    results_handler::get_match(match_id, provider).await
}

/// Matches played by a team, home or away
#[get("/team-results")]
async fn team_results(
    query: web::Query<TeamQuery>,
    provider: web::Data<dyn MatchProvider>,
) -> Result<HttpResponse, ResultsError> {
    results_handler::get_team_results(query, provider).await
}

/// Every team that has played a finished match this season
#[get("/equipos")]
async fn teams(
    provider: web::Data<dyn MatchProvider>,
) -> Result<HttpResponse, ResultsError> {
    results_handler::get_teams(provider).await
}
