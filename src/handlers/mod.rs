pub mod backend_health_handler;
pub mod results_handler;
