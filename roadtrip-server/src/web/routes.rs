//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};

use crate::planner::{EntityKind, PlanError, Planner, RouteRequest};
use crate::resolver::{NameResolver, Resolution};

use super::dto::*;
use super::state::AppState;

const DEFAULT_SEARCH_LIMIT: usize = 10;
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities", get(list_cities))
        .route("/api/attractions", get(list_attractions))
        .route("/api/cities/search", get(search_cities))
        .route("/api/attractions/search", get(search_attractions))
        .route("/api/resolve/city", get(resolve_city))
        .route("/api/resolve/attraction", get(resolve_attraction))
        .route("/route/plan", post(plan_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every city, sorted by full name.
async fn list_cities(State(state): State<AppState>) -> Json<CityListResponse> {
    let mut cities: Vec<CityResult> = state.network.cities().map(CityResult::from).collect();
    cities.sort_by(|a, b| a.full_name.cmp(&b.full_name));

    Json(CityListResponse { cities })
}

/// Every attraction, sorted by name.
async fn list_attractions(State(state): State<AppState>) -> Json<AttractionListResponse> {
    let mut attractions: Vec<AttractionResult> = state
        .network
        .attractions()
        .map(AttractionResult::from)
        .collect();
    attractions.sort_by(|a, b| a.name.cmp(&b.name));

    Json(AttractionListResponse { attractions })
}

/// Search cities by free text.
async fn search_cities(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Json<SearchResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
    let mut matches = NameResolver::new(&state.network).city_candidates(&req.q);
    matches.truncate(limit);

    Json(SearchResponse { matches })
}

/// Search attractions by free text.
async fn search_attractions(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Json<SearchResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
    let mut matches = NameResolver::new(&state.network).attraction_candidates(&req.q);
    matches.truncate(limit);

    Json(SearchResponse { matches })
}

/// Resolve free text to one city, if possible.
async fn resolve_city(
    State(state): State<AppState>,
    Query(req): Query<ResolveRequest>,
) -> Json<ResolveResponse> {
    let resolution = NameResolver::new(&state.network).resolve_city(&req.q);
    Json(ResolveResponse {
        query: req.q,
        resolution,
    })
}

/// Resolve free text to one attraction, if possible.
async fn resolve_attraction(
    State(state): State<AppState>,
    Query(req): Query<ResolveRequest>,
) -> Json<ResolveResponse> {
    let resolution = NameResolver::new(&state.network).resolve_attraction(&req.q);
    Json(ResolveResponse {
        query: req.q,
        resolution,
    })
}

/// Plan a route.
///
/// Every name in the request goes through the resolver first; ambiguous
/// input is answered with 409 and the candidates to choose from.
async fn plan_route(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>, AppError> {
    let resolver = NameResolver::new(&state.network);

    let source = resolve(EntityKind::City, &req.source, resolver.resolve_city(&req.source))?;
    let destination = resolve(
        EntityKind::City,
        &req.destination,
        resolver.resolve_city(&req.destination),
    )?;
    let attractions = req
        .attractions
        .iter()
        .map(|input| {
            resolve(
                EntityKind::Attraction,
                input,
                resolver.resolve_attraction(input),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let order = req.order.unwrap_or(state.config.default_order);
    let algorithm = req.algorithm.unwrap_or(state.config.default_algorithm);
    let request = RouteRequest::new(source, destination)
        .via(attractions)
        .with_order(order)
        .with_algorithm(algorithm);

    let route = Planner::new(&state.network, &state.config).route(&request)?;

    info!(
        source = %request.source,
        destination = %request.destination,
        waypoints = request.attractions.len(),
        total_distance = route.total_distance,
        "Planned route"
    );

    Ok(Json(PlanRouteResponse::from_route(route, order, algorithm)))
}

/// Turn a resolution into a canonical name or the matching error.
fn resolve(kind: EntityKind, input: &str, resolution: Resolution) -> Result<String, AppError> {
    match resolution {
        Resolution::Resolved(name) => Ok(name),
        Resolution::Candidates(candidates) => Err(AppError::Conflict {
            message: format!("ambiguous {kind}: {input}"),
            candidates,
        }),
        Resolution::NoMatch => Err(AppError::NotFound {
            message: format!("{kind} not found: {input}"),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict {
        message: String,
        candidates: Vec<String>,
    },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        let message = e.to_string();
        match e {
            PlanError::NotFound { .. } => AppError::NotFound { message },
            PlanError::Unreachable { .. } => AppError::Unprocessable { message },
            PlanError::TooManyWaypoints { .. } => AppError::BadRequest { message },
            PlanError::MissingRoad { .. } => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, candidates) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, Vec::new()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, Vec::new()),
            AppError::Conflict {
                message,
                candidates,
            } => (StatusCode::CONFLICT, message, candidates),
            AppError::Unprocessable { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, Vec::new())
            }
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, Vec::new())
            }
        };

        warn!(%status, candidates = candidates.len(), "{message}");

        let body = Json(ErrorResponse {
            error: message,
            candidates,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::sample::us_network;
    use crate::planner::{Algorithm, PlannerConfig, WaypointOrder};

    fn state() -> AppState {
        AppState::new(us_network(), PlannerConfig::default())
    }

    fn plan(source: &str, destination: &str, attractions: &[&str]) -> PlanRouteRequest {
        PlanRouteRequest {
            source: source.to_string(),
            destination: destination.to_string(),
            attractions: attractions.iter().map(|s| s.to_string()).collect(),
            order: None,
            algorithm: None,
        }
    }

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn lists_are_sorted() {
        let Json(cities) = list_cities(State(state())).await;
        assert!(cities.cities.len() >= 40);
        assert!(
            cities
                .cities
                .windows(2)
                .all(|pair| pair[0].full_name < pair[1].full_name)
        );

        let Json(attractions) = list_attractions(State(state())).await;
        assert_eq!(attractions.attractions.len(), 20);
        assert_eq!(attractions.attractions[0].name, "Balboa Park");
    }

    #[tokio::test]
    async fn search_respects_limit() {
        let Json(response) = search_cities(
            State(state()),
            Query(SearchRequest {
                q: "san".into(),
                limit: Some(2),
            }),
        )
        .await;
        assert_eq!(response.matches, vec!["San Antonio TX", "San Diego CA"]);

        let Json(response) = search_attractions(
            State(state()),
            Query(SearchRequest {
                q: "space".into(),
                limit: None,
            }),
        )
        .await;
        assert_eq!(response.matches.len(), 2);
    }

    #[tokio::test]
    async fn resolve_region_returns_candidates() {
        let Json(response) = resolve_city(
            State(state()),
            Query(ResolveRequest { q: "ny".into() }),
        )
        .await;

        assert_eq!(response.query, "ny");
        assert!(response.resolution.is_ambiguous());
    }

    #[tokio::test]
    async fn resolve_attraction_typo() {
        let Json(response) = resolve_attraction(
            State(state()),
            Query(ResolveRequest {
                q: "gracelnad".into(),
            }),
        )
        .await;

        assert_eq!(response.resolution.resolved(), Some("Graceland"));
    }

    #[tokio::test]
    async fn plan_with_free_text_names() {
        let Json(response) = plan_route(
            State(state()),
            Json(plan("houston", "philadelphia pa", &["liberty bell"])),
        )
        .await
        .unwrap();

        assert_eq!(response.cities.first().unwrap(), "Houston TX");
        assert_eq!(response.cities.last().unwrap(), "Philadelphia PA");
        assert_eq!(response.stops[0].attraction, "Liberty Bell");
        assert_eq!(response.order, WaypointOrder::Ordered);
        assert_eq!(response.algorithm, Algorithm::Dijkstra);
        assert_eq!(response.hops, response.cities.len() - 1);
    }

    #[tokio::test]
    async fn plan_uses_requested_modes() {
        let mut request = plan(
            "San Jose CA",
            "Phoenix AZ",
            &["Liberty Bell", "Millennium Park", "Graceland"],
        );
        request.order = Some(WaypointOrder::Unordered);
        request.algorithm = Some(Algorithm::AStar);

        let Json(response) = plan_route(State(state()), Json(request)).await.unwrap();

        assert_eq!(response.order, WaypointOrder::Unordered);
        assert_eq!(response.algorithm, Algorithm::AStar);
        assert_eq!(response.stops.len(), 3);
    }

    #[tokio::test]
    async fn ambiguous_city_is_conflict() {
        let err = plan_route(State(state()), Json(plan("ny", "Houston TX", &[])))
            .await
            .unwrap_err();

        match &err {
            AppError::Conflict { candidates, .. } => {
                assert_eq!(candidates, &["Albany NY", "Buffalo NY", "New York NY"]);
            }
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn unknown_names_are_not_found() {
        let err = plan_route(State(state()), Json(plan("atlantis", "Houston TX", &[])))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);

        let err = plan_route(
            State(state()),
            Json(plan("Houston TX", "Austin TX", &["qwxzvbnmkj"])),
        )
        .await
        .unwrap_err();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unreachable_is_unprocessable() {
        let mut network = us_network();
        network
            .add_attraction("Castaway Cove", "Lonely Isle HI")
            .unwrap();
        let state = AppState::new(network, PlannerConfig::default());

        let err = plan_route(
            State(state),
            Json(plan("Houston TX", "Philadelphia PA", &["Castaway Cove"])),
        )
        .await
        .unwrap_err();

        assert_eq!(status_of(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn waypoint_cap_is_bad_request() {
        let config = PlannerConfig {
            max_unordered_waypoints: 1,
            ..PlannerConfig::default()
        };
        let state = AppState::new(us_network(), config);
        let mut request = plan("Houston TX", "Austin TX", &["Graceland", "The Alamo"]);
        request.order = Some(WaypointOrder::Unordered);

        let err = plan_route(State(state), Json(request)).await.unwrap_err();

        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn plan_errors_map_to_statuses() {
        let cases = [
            (
                PlanError::NotFound {
                    kind: EntityKind::City,
                    token: "X".into(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                PlanError::Unreachable {
                    from: "A".into(),
                    to: "B".into(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                PlanError::TooManyWaypoints { count: 9, max: 8 },
                StatusCode::BAD_REQUEST,
            ),
            (
                PlanError::MissingRoad {
                    from: "A".into(),
                    to: "B".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(status_of(AppError::from(error)), status);
        }
    }
}
