//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::planner::{PipelineError, PlanRequest, Planner, RankError};
use crate::tfl::JourneySource;

use super::dto::*;
use super::state::AppState;

/// Body returned when a place cannot be resolved.
pub const UNRESOLVED_MESSAGE: &str = "Try modifying the origin or destination";

/// Body returned when the journey planner offers no routes.
pub const NO_ROUTES_MESSAGE: &str = "No routes available between the origin and destination";

/// Create the application router.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: JourneySource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/get_directions/", get(get_directions::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a journey and report the chosen route with its fare.
async fn get_directions<S>(
    State(state): State<AppState<S>>,
    Query(req): Query<DirectionsRequest>,
) -> Result<Response, AppError>
where
    S: JourneySource + Send + Sync + 'static,
{
    let origin = req.origin.ok_or_else(|| AppError::BadRequest {
        message: "missing query parameter: origin".to_string(),
    })?;
    let destination = req.destination.ok_or_else(|| AppError::BadRequest {
        message: "missing query parameter: destination".to_string(),
    })?;

    let mut request = PlanRequest::new(origin, destination);
    if let Some(mode) = req.mode {
        request = request.with_mode(mode);
    }
    if let Some(sort) = req.sort {
        request = request.with_rank_by(sort);
    }
    info!(origin = %request.origin, destination = %request.destination, mode = ?request.mode, "planning");

    let planner = Planner::new(state.source.as_ref(), state.estimator.as_ref());
    let outcome = planner.plan(&request).await?;

    Ok(Json(DirectionsResponse {
        status: outcome.status,
        lowest_fare_route: RouteResult::from_itinerary(&outcome.itinerary),
    })
    .into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The user should try different input; reported with a 200
    Unroutable { message: String },
    BadRequest { message: String },
    /// The journey planner failed or sent something unusable
    BadGateway { message: String },
    Internal { message: String },
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Resolve(_) => AppError::Unroutable {
                message: UNRESOLVED_MESSAGE.to_string(),
            },
            PipelineError::Rank(RankError::NoRoutesAvailable) => AppError::Unroutable {
                message: NO_ROUTES_MESSAGE.to_string(),
            },
            PipelineError::InvalidRequest(message) => AppError::BadRequest { message },
            PipelineError::Lookup(_) | PipelineError::Retrieve(_) | PipelineError::Malformed(_) => {
                AppError::BadGateway {
                    message: format!("{} failed: {e}", e.stage()),
                }
            }
            PipelineError::Fare(_) | PipelineError::Rank(_) => AppError::Internal {
                message: format!("{} failed: {e}", e.stage()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unroutable { message } => (StatusCode::OK, message),
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::FareEstimator;
    use crate::tfl::{DisambiguationResponse, MockTflClient};
    use serde_json::{Value, json};

    fn disambiguation() -> DisambiguationResponse {
        serde_json::from_value(json!({
            "fromLocationDisambiguation": {
                "disambiguationOptions": [{"place": {"commonName": "Angel", "icsCode": "1000007"}}]
            },
            "toLocationDisambiguation": {
                "disambiguationOptions": [{"place": {"commonName": "Bank", "icsCode": "1000013"}}]
            }
        }))
        .unwrap()
    }

    fn journey(duration: u32, modes: &[&str]) -> Value {
        let legs: Vec<Value> = modes
            .iter()
            .map(|mode| {
                json!({
                    "departurePoint": {"commonName": "Angel"},
                    "arrivalPoint": {"commonName": "Bank"},
                    "instruction": {"summary": format!("{mode} to Bank")},
                    "mode": {"name": mode}
                })
            })
            .collect();
        json!({
            "startDateTime": "2024-03-04T08:00:00",
            "arrivalDateTime": "2024-03-04T08:30:00",
            "duration": duration,
            "legs": legs
        })
    }

    fn state(source: MockTflClient) -> AppState<MockTflClient> {
        AppState::new(source, FareEstimator::default())
    }

    fn query(origin: Option<&str>, destination: Option<&str>) -> DirectionsRequest {
        DirectionsRequest {
            origin: origin.map(String::from),
            destination: destination.map(String::from),
            ..Default::default()
        }
    }

    async fn call(
        state: AppState<MockTflClient>,
        req: DirectionsRequest,
    ) -> (StatusCode, Value) {
        let response = match get_directions(State(state), Query(req)).await {
            Ok(response) => response,
            Err(e) => e.into_response(),
        };
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn returns_cheapest_route() {
        let source = MockTflClient::new(
            disambiguation(),
            vec![journey(20, &["tube"]), journey(20, &["bus"])],
        );

        let (status, body) = call(state(source), query(Some("Angel"), Some("Bank"))).await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            body["_status"]
                .as_str()
                .unwrap()
                .starts_with("The route with the lowest fare is route with start time Monday")
        );
        let route = &body["lowest_fare_route"];
        assert_eq!(route["estimated_fare"], 3.0);
        assert_eq!(route["legs"][0]["mode"], "bus");
        assert_eq!(route["legs"][0]["_origin"], "Angel");
    }

    #[tokio::test]
    async fn ambiguous_place_is_soft_error() {
        let source = MockTflClient::new(DisambiguationResponse::default(), vec![]);

        let (status, body) = call(state(source), query(Some("Nowhere"), Some("Bank"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": UNRESOLVED_MESSAGE}));
    }

    #[tokio::test]
    async fn no_routes_is_soft_error() {
        let source = MockTflClient::new(disambiguation(), vec![]);

        let (status, body) = call(state(source), query(Some("Angel"), Some("Bank"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": NO_ROUTES_MESSAGE}));
    }

    #[tokio::test]
    async fn malformed_upstream_is_bad_gateway() {
        let source = MockTflClient::new(disambiguation(), vec![json!({"legs": []})]);

        let (status, body) = call(state(source), query(Some("Angel"), Some("Bank"))).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().starts_with("normalize failed"));
    }

    #[tokio::test]
    async fn missing_destination_is_bad_request() {
        let source = MockTflClient::new(disambiguation(), vec![]);

        let (status, body) = call(state(source), query(Some("Angel"), None)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing query parameter: destination");
    }

    #[tokio::test]
    async fn sort_by_duration() {
        let source = MockTflClient::new(
            disambiguation(),
            vec![journey(30, &["bus"]), journey(10, &["taxi"])],
        );
        let mut req = query(Some("Angel"), Some("Bank"));
        req.sort = Some(crate::planner::RankBy::Duration);

        let (status, body) = call(state(source), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["lowest_fare_route"]["duration"], 10);
        assert!(body["_status"].as_str().unwrap().starts_with("The fastest route"));
    }

    #[test]
    fn router_builds() {
        let source = MockTflClient::new(disambiguation(), vec![]);
        let _router = create_router(state(source));
    }
}
