use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
};

use crate::client::FootballData;
use crate::error::ApiError;
use crate::models::{StandingRequest, TeamStanding};
use crate::service::StandingService;

/// GET /api/service/v1/team/standing - Standing of one team in a league
///
/// Query params (all required, matched case-insensitively):
/// - countryName
/// - leagueName
/// - teamName
#[tracing::instrument(skip_all)]
pub async fn get_team_standing<C>(
    State(service): State<StandingService<C>>,
    query: Result<Query<StandingRequest>, QueryRejection>,
) -> Result<Json<TeamStanding>, ApiError>
where
    C: FootballData + Clone + 'static,
{
    let Query(request) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    validate(&request)?;

    tracing::info!("Request {:?}", request);
    let standing = service.get_team_standing(&request).await?;

    Ok(Json(standing))
}

fn validate(request: &StandingRequest) -> Result<(), ApiError> {
    let fields = [
        ("countryName", &request.country_name),
        ("leagueName", &request.league_name),
        ("teamName", &request.team_name),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ApiError::bad_request(format!("{name} must not be blank")));
        }
    }

    Ok(())
}
