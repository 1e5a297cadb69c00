use serde::{Deserialize, Deserializer, Serialize};

/// Query parameters for the standing endpoint
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StandingRequest {
    pub country_name: String,
    pub league_name: String,
    pub team_name: String,
}

/// Country as returned by `action=get_countries`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Country {
    #[serde(rename = "country_id", default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(rename = "country_name", default)]
    pub name: String,
}

/// League as returned by `action=get_leagues`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct League {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub league_id: i64,
    #[serde(default)]
    pub league_name: String,
}

/// One row of `action=get_standings`.
///
/// `country_id` is not part of the upstream payload; the resolver stamps it
/// after the standing has been matched.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Standing {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub country_id: i64,
    #[serde(default)]
    pub country_name: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub league_id: i64,
    #[serde(default)]
    pub league_name: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub team_id: i64,
    #[serde(default)]
    pub team_name: String,
    #[serde(rename = "overall_league_position", default, deserialize_with = "lenient_i64")]
    pub position: i64,
    #[serde(rename = "overall_league_payed", default, deserialize_with = "lenient_i64")]
    pub played: i64,
    #[serde(rename = "overall_league_W", default, deserialize_with = "lenient_i64")]
    pub won: i64,
    #[serde(rename = "overall_league_D", default, deserialize_with = "lenient_i64")]
    pub drawn: i64,
    #[serde(rename = "overall_league_L", default, deserialize_with = "lenient_i64")]
    pub lost: i64,
    #[serde(rename = "overall_league_GF", default, deserialize_with = "lenient_i64")]
    pub goals_for: i64,
    #[serde(rename = "overall_league_GA", default, deserialize_with = "lenient_i64")]
    pub goals_against: i64,
    #[serde(rename = "overall_league_PTS", default, deserialize_with = "lenient_i64")]
    pub points: i64,
}

/// Upstream body: either the requested list or an error object such as
/// `{"error": 404, "message": "No league found"}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UpstreamPayload<T> {
    List(Vec<T>),
    Error {
        #[serde(deserialize_with = "lenient_i64")]
        error: i64,
        #[serde(default)]
        message: String,
    },
}

/// Standing response returned to API callers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub country_id: i64,
    pub country_name: String,
    pub league_id: i64,
    pub league_name: String,
    pub team_id: i64,
    pub team_name: String,
    pub position: i64,
    pub played: i64,
    pub won: i64,
    pub drawn: i64,
    pub lost: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub points: i64,
}

impl TeamStanding {
    /// Fallback record: requested names, every id and stat zeroed
    pub fn from_request(request: &StandingRequest) -> Self {
        TeamStanding {
            country_name: request.country_name.clone(),
            league_name: request.league_name.clone(),
            team_name: request.team_name.clone(),
            ..Default::default()
        }
    }

    /// Project a matched standing. Names are echoed from the request.
    pub fn from_standing(standing: &Standing, request: &StandingRequest) -> Self {
        TeamStanding {
            country_id: standing.country_id,
            country_name: request.country_name.clone(),
            league_id: standing.league_id,
            league_name: request.league_name.clone(),
            team_id: standing.team_id,
            team_name: request.team_name.clone(),
            position: standing.position,
            played: standing.played,
            won: standing.won,
            drawn: standing.drawn,
            lost: standing.lost,
            goals_for: standing.goals_for,
            goals_against: standing.goals_against,
            points: standing.points,
        }
    }
}

/// Error body for every non-2xx response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
}

/// apifootball sends numbers as strings ("152"), sometimes as "" or null.
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
        Null(()),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Null(()) => Ok(0),
        Raw::Text(s) if s.trim().is_empty() => Ok(0),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {s:?}"))),
    }
}
