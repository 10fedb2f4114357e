use crate::domain::Severity;
use crate::error::LevelError;
use crate::service::LevelControlService;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Body of `GET /loglevel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLevelResponse {
    #[serde(rename = "log-level")]
    pub log_level: Severity,
}

/// Handler for GET /loglevel
pub async fn get_log_level_handler(State(service): State<LevelControlService>) -> Response {
    match service.get_level() {
        Ok(log_level) => {
            info!(level = %log_level, "Log level requested");
            (StatusCode::OK, Json(LogLevelResponse { log_level })).into_response()
        }
        Err(e) => level_error_response(e),
    }
}

/// Handler for PUT /loglevel/{level}
pub async fn set_log_level_handler(
    State(service): State<LevelControlService>,
    Path(level): Path<String>,
) -> Response {
    match service.set_level(&level) {
        Ok(_) => (StatusCode::OK, Json("ok")).into_response(),
        Err(e) => level_error_response(e),
    }
}

fn level_error_response(e: LevelError) -> Response {
    let status = match &e {
        LevelError::InvalidLevel(_) => StatusCode::BAD_REQUEST,
        LevelError::Uninitialized => {
            error!("Log level control invariant violated: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(e.to_string())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_hyphenated_key() {
        let body = serde_json::to_value(LogLevelResponse {
            log_level: Severity::Info,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "log-level": "info" }));
    }

    #[test]
    fn test_invalid_level_maps_to_bad_request() {
        let response = level_error_response(LevelError::InvalidLevel("bogus".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_uninitialized_maps_to_internal_error() {
        let response = level_error_response(LevelError::Uninitialized);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
