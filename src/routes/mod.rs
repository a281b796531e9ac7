use actix_web::web;

pub mod backend_health;
pub mod results;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(results::this_season)
        .service(results::results)
        .service(results::match_by_id)
        .service(results::team_results)
        .service(results::teams);
}
