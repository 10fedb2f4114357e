use crate::handler::health::health_handler;
use crate::handler::loglevel::{get_log_level_handler, set_log_level_handler};
use crate::service::LevelControlService;
use axum::Router;
use axum::routing::{get, put};

/// Build the HTTP router (health + log level control).
pub fn main_router(level_control: LevelControlService) -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health_handler));

    let loglevel_router = Router::new()
        .route("/loglevel", get(get_log_level_handler))
        .route("/loglevel/{level}", put(set_log_level_handler))
        .with_state(level_control);

    Router::new().merge(v1_health_router).merge(loglevel_router)
}
