// src/handlers/results_handler.rs
use actix_web::error::QueryPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::models::error::{ResultsError, UpstreamError};
use crate::models::query::{DateRangeQuery, TeamQuery};
use crate::pipeline::{filter_by_team, results_in_range, team_name_from_query, team_roster, DateRange};
use crate::services::MatchProvider;

const SEASON_ERROR: &str = "Hubo un error al obtener los resultados de esta temporada.";
const RESULTS_ERROR: &str = "Hubo un error al obtener los resultados.";
const MATCH_ERROR: &str = "Hubo un error al obtener el partido.";
const TEAM_RESULTS_ERROR: &str = "Hubo un error al obtener los resultados filtrados por equipo.";
const TEAMS_ERROR: &str = "Hubo un error al obtener los equipos.";
const INVALID_QUERY: &str = "Los parámetros de la consulta no son válidos.";

/// Query strings serde cannot read (e.g. a repeated parameter) still get the JSON envelope
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Rejected query string {:?} on {}: {}", req.query_string(), req.path(), err);
    ResultsError::validation(INVALID_QUERY).into()
}

fn upstream_failure(message: &'static str) -> impl FnOnce(UpstreamError) -> ResultsError {
    move |e| {
        tracing::error!("Upstream call failed: {}", e);
        ResultsError::upstream(message, e)
    }
}

/// Every finished match of the season, untouched
#[tracing::instrument(name = "Get this season", skip(provider))]
pub async fn get_this_season(
    provider: web::Data<dyn MatchProvider>,
) -> Result<HttpResponse, ResultsError> {
    let matches = provider
        .fetch_finished_matches()
        .await
        .map_err(upstream_failure(SEASON_ERROR))?;

    Ok(HttpResponse::Ok().json(matches))
}

/// `{id, result}` summaries for matches inside `[startDate, endDate]`
#[tracing::instrument(name = "Get results in range", skip(provider))]
pub async fn get_results(
    query: web::Query<DateRangeQuery>,
    provider: web::Data<dyn MatchProvider>,
) -> Result<HttpResponse, ResultsError> {
    let range = DateRange::from_query(&query)?;

    let matches = provider
        .fetch_finished_matches()
        .await
        .map_err(upstream_failure(RESULTS_ERROR))?;

    let results = results_in_range(&matches, &range);
    tracing::debug!("{} of {} matches inside range", results.len(), matches.len());
    Ok(HttpResponse::Ok().json(results))
}

/// Single match forwarded from the per-match upstream lookup
#[tracing::instrument(name = "Get match", skip(provider))]
pub async fn get_match(
    match_id: String,
    provider: web::Data<dyn MatchProvider>,
) -> Result<HttpResponse, ResultsError> {
    let body = provider
        .fetch_match(&match_id)
        .await
        .map_err(upstream_failure(MATCH_ERROR))?;

    Ok(HttpResponse::Ok().json(body))
}

/// Raw matches where `teamName` played home or away
#[tracing::instrument(name = "Get team results", skip(provider))]
pub async fn get_team_results(
    query: web::Query<TeamQuery>,
    provider: web::Data<dyn MatchProvider>,
) -> Result<HttpResponse, ResultsError> {
    let team_name = team_name_from_query(&query)?;

    let matches = provider
        .fetch_finished_matches()
        .await
        .map_err(upstream_failure(TEAM_RESULTS_ERROR))?;

    Ok(HttpResponse::Ok().json(filter_by_team(matches, team_name)))
}

/// Distinct team names across the finished matches
#[tracing::instrument(name = "Get teams", skip(provider))]
pub async fn get_teams(
    provider: web::Data<dyn MatchProvider>,
) -> Result<HttpResponse, ResultsError> {
    let matches = provider
        .fetch_finished_matches()
        .await
        .map_err(upstream_failure(TEAMS_ERROR))?;

    Ok(HttpResponse::Ok().json(team_roster(&matches)))
}
