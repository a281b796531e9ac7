use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use std::net::TcpListener;
use std::sync::Arc;
use actix_cors::Cors;

pub mod config;
mod routes;
mod handlers;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod telemetry;
pub mod utils;
use crate::handlers::results_handler::query_error_handler;
use crate::routes::init_routes;
use crate::services::MatchProvider;

pub fn run(
    listener: TcpListener,
    provider: Arc<dyn MatchProvider>,
    allowed_origins: Vec<String>,
) -> Result<Server, std::io::Error> {
    // web::Data is an Arc under the hood; share the provider as-is
    let provider_data: web::Data<dyn MatchProvider> = web::Data::from(provider);

    let server = HttpServer::new(move || {
        let cors = build_cors(&allowed_origins);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(provider_data.clone())
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET"])
        .allowed_headers(vec![
            http::header::ACCEPT,
            http::header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
