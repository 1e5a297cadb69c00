//! Country → league → team resolution for the standing endpoint

use tracing::{info, instrument};

use crate::client::FootballData;
use crate::error::ApiError;
use crate::models::{Country, League, Standing, StandingRequest, TeamStanding};

#[derive(Clone)]
pub struct StandingService<C> {
    client: C,
}

impl<C: FootballData> StandingService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Resolve the requested team's standing.
    ///
    /// A country or league name that matches nothing is a `BadRequest`. A match
    /// carrying the zero id, or a team name missing from the standings, yields
    /// the fallback record built from the request.
    #[instrument(skip(self))]
    pub async fn get_team_standing(
        &self,
        request: &StandingRequest,
    ) -> Result<TeamStanding, ApiError> {
        let mut fallback = TeamStanding::from_request(request);

        let countries = self.client.list_countries().await?;
        let country = find_country(&countries, &request.country_name).ok_or_else(|| {
            ApiError::bad_request(format!("Country Not Found by name {}", request.country_name))
        })?;
        info!("Country found {:?}", country);
        if country.id == 0 {
            return Ok(fallback);
        }
        fallback.country_id = country.id;

        let leagues = self.client.list_leagues(country.id).await?;
        let league = find_league(&leagues, &request.league_name).ok_or_else(|| {
            ApiError::bad_request(format!("leagues Not Found by name {}", request.league_name))
        })?;
        info!("League found {:?}", league);
        if league.league_id == 0 {
            return Ok(fallback);
        }
        fallback.league_id = league.league_id;

        let standings = self.client.list_standings(league.league_id).await?;
        info!("Team standings found: {}", standings.len());

        let mut standing = find_standing(&standings, &request.team_name)
            .cloned()
            .unwrap_or_default();
        standing.country_id = country.id;
        info!("Team standing filtered {:?}", standing);

        if standing.team_id == 0 {
            return Ok(fallback);
        }

        Ok(TeamStanding::from_standing(&standing, request))
    }
}

fn find_country<'a>(countries: &'a [Country], name: &str) -> Option<&'a Country> {
    countries.iter().find(|c| names_match(&c.name, name))
}

fn find_league<'a>(leagues: &'a [League], name: &str) -> Option<&'a League> {
    leagues.iter().find(|l| names_match(&l.league_name, name))
}

fn find_standing<'a>(standings: &'a [Standing], team_name: &str) -> Option<&'a Standing> {
    standings.iter().find(|s| names_match(&s.team_name, team_name))
}

fn names_match(candidate: &str, requested: &str) -> bool {
    candidate.to_lowercase() == requested.to_lowercase()
}
