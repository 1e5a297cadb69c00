use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::client::FootballData;
use crate::service::StandingService;

pub mod health;
pub mod standing;

pub const STANDING_PATH: &str = "/api/service/v1/team/standing";

/// Build the application router around a standing service.
pub fn router<C>(service: StandingService<C>) -> Router
where
    C: FootballData + Clone + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "Football Standings API - v1.0" }))
        .route("/health", get(health::health_check))
        .route(STANDING_PATH, get(standing::get_team_standing::<C>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
