//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::domain::{PortCode, TravelDays};
use crate::planner::{JourneyFilter, PlanError, RouteProcessor};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ports", get(list_ports))
        .route("/journey/direct", post(direct_journey))
        .route("/journey/indirect", post(indirect_journey))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every port in the catalogue.
async fn list_ports(State(state): State<AppState>) -> Json<PortsResponse> {
    let ports = state
        .catalogue
        .ports()
        .into_iter()
        .map(PortResult::from_port)
        .collect();

    Json(PortsResponse { ports })
}

/// Calculate the journey along an explicit list of stops.
async fn direct_journey(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DirectJourneyResponse>, AppError> {
    let req: DirectJourneyRequest = parse_body(&body)?;

    let from = parse_port(&req.from)?;
    let stops = req
        .stops
        .iter()
        .map(|s| parse_port(s))
        .collect::<Result<Vec<_>, _>>()?;

    let processor = RouteProcessor::new(state.catalogue.as_ref());
    let journey = processor.direct_journey(&from, &stops);

    let valid = journey.is_valid();
    Ok(Json(DirectJourneyResponse {
        valid,
        journey: valid.then(|| JourneyResult::from_journey(&journey)),
    }))
}

/// Find every journey between two ports within the requested limits.
async fn indirect_journey(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IndirectJourneyResponse>, AppError> {
    let req: IndirectJourneyRequest = parse_body(&body)?;

    let from = parse_port(&req.from)?;
    let to = parse_port(&req.to)?;
    let filter = JourneyFilter {
        min_stops: req.min_stops,
        max_stops: req.max_stops,
        max_days: req.max_days.map(TravelDays),
    };
    filter.validate()?;

    // The search is CPU-bound and fans out on the rayon pool
    let catalogue = Arc::clone(&state.catalogue);
    let found = tokio::task::spawn_blocking(move || {
        RouteProcessor::new(catalogue.as_ref()).indirect_journeys(&from, &to, &filter)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("search task failed: {e}"),
    })?;

    Ok(Json(IndirectJourneyResponse::from_permutations(
        found,
        state.max_results,
    )))
}

/// Parse a JSON body, logging it on failure.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(
            error = %e,
            body = %String::from_utf8_lossy(body),
            "Rejected request body"
        );
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

fn parse_port(s: &str) -> Result<PortCode, AppError> {
    PortCode::parse_normalized(s).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidFilter(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "Bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::catalogue::landscape;
    use crate::config::ServerConfig;

    fn app() -> Router {
        create_router(AppState::new(landscape(), &ServerConfig::default()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read(response).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        read(response).await
    }

    async fn read(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_check() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn lists_ports() {
        let (status, body) = get_json("/ports").await;

        assert_eq!(status, StatusCode::OK);
        let ports = body["ports"].as_array().unwrap();
        assert_eq!(ports.len(), 5);
        assert_eq!(ports[0], json!({"code": "BA", "name": "Buenos Aires"}));
    }

    #[tokio::test]
    async fn direct_journey_valid() {
        let (status, body) =
            post_json("/journey/direct", json!({"from": "BA", "stops": ["NY", "LV"]})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["journey"]["days"], 10);
        assert_eq!(body["journey"]["ports"], json!(["BA", "NY", "LV"]));
    }

    #[tokio::test]
    async fn direct_journey_normalizes_codes() {
        let (status, body) =
            post_json("/journey/direct", json!({"from": "ba", "stops": [" cb", "lv"]})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["journey"]["days"], 8);
    }

    #[tokio::test]
    async fn direct_journey_invalid() {
        let (status, body) =
            post_json("/journey/direct", json!({"from": "BA", "stops": ["CT", "CB"]})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);
        assert_eq!(body["journey"], Value::Null);
    }

    #[tokio::test]
    async fn direct_journey_bad_code() {
        let (status, body) =
            post_json("/journey/direct", json!({"from": "B-A", "stops": ["NY"]})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("invalid port code"));
    }

    #[tokio::test]
    async fn indirect_journey_shortest() {
        let (status, body) =
            post_json("/journey/indirect", json!({"from": "BA", "to": "LV"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["has_valid_permutations"], true);
        assert_eq!(body["shortest_days"], 8);
        assert_eq!(body["journeys"][0]["ports"], json!(["BA", "CB", "LV"]));
    }

    #[tokio::test]
    async fn indirect_journey_with_filters() {
        let (status, body) = post_json(
            "/journey/indirect",
            json!({"from": "LV", "to": "LV", "max_days": 18}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        assert_eq!(body["truncated"], false);
    }

    #[tokio::test]
    async fn indirect_journey_unknown_port_is_empty() {
        let (status, body) =
            post_json("/journey/indirect", json!({"from": "ZZ", "to": "LV"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);
        assert_eq!(body["has_valid_permutations"], false);
    }

    #[tokio::test]
    async fn indirect_journey_inverted_filter() {
        let (status, body) = post_json(
            "/journey/indirect",
            json!({"from": "LV", "to": "LV", "min_stops": 4, "max_stops": 2}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("invalid filter"));
    }

    #[tokio::test]
    async fn malformed_json() {
        let (status, body) = post_json("/journey/indirect", json!({"from": "LV"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }
}
