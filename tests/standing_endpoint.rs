use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use football_standings::client::HttpFootballData;
use football_standings::config::UpstreamConfig;
use football_standings::models::{ErrorResponse, TeamStanding};
use football_standings::routes;
use football_standings::service::StandingService;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, query_param},
};

/// Upstream with England (1) → Premier League (10) → Arsenal (7)
async fn england_upstream() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("action", "get_countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"country_id": "1", "country_name": "England"},
            {"country_id": "0", "country_name": "Atlantis"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("action", "get_leagues"))
        .and(query_param("country_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"country_id": "1", "country_name": "England", "league_id": "10", "league_name": "Premier League"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("action", "get_standings"))
        .and(query_param("league_id", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "country_name": "England",
                "league_id": "10",
                "league_name": "Premier League",
                "team_id": "7",
                "team_name": "Arsenal",
                "overall_league_position": "2",
                "overall_league_payed": "38",
                "overall_league_W": "26",
                "overall_league_D": "6",
                "overall_league_L": "6",
                "overall_league_GF": "88",
                "overall_league_GA": "43",
                "overall_league_PTS": "84"
            }
        ])))
        .mount(&server)
        .await;

    server
}

fn app_for(server: &MockServer) -> Router {
    let client = HttpFootballData::new(&UpstreamConfig {
        base_url: format!("{}/", server.uri()),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
    })
    .unwrap();

    routes::router(StandingService::new(client))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn returns_resolved_standing() {
    let server = england_upstream().await;

    let (status, body) = get(
        app_for(&server),
        "/api/service/v1/team/standing?countryName=england&leagueName=Premier%20League&teamName=Arsenal",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let standing: TeamStanding = serde_json::from_slice(&body).unwrap();
    assert_eq!(standing.country_id, 1);
    assert_eq!(standing.league_id, 10);
    assert_eq!(standing.team_id, 7);
    assert_eq!(standing.points, 84);
    assert_eq!(standing.country_name, "england");
}

#[tokio::test]
async fn unknown_country_is_400() {
    let server = england_upstream().await;

    let (status, body) = get(
        app_for(&server),
        "/api/service/v1/team/standing?countryName=France&leagueName=Ligue%201&teamName=PSG",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.status, 400);
    assert_eq!(error.message, "Country Not Found by name France");
}

#[tokio::test]
async fn unknown_league_is_400() {
    let server = england_upstream().await;

    let (status, body) = get(
        app_for(&server),
        "/api/service/v1/team/standing?countryName=England&leagueName=Championship&teamName=Leeds",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.message, "leagues Not Found by name Championship");
}

#[tokio::test]
async fn unknown_team_returns_default_result() {
    let server = england_upstream().await;

    let (status, body) = get(
        app_for(&server),
        "/api/service/v1/team/standing?countryName=england&leagueName=Premier%20League&teamName=Chelsea",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let standing: TeamStanding = serde_json::from_slice(&body).unwrap();
    assert_eq!(standing.team_name, "Chelsea");
    assert_eq!(standing.country_name, "england");
    assert_eq!(standing.league_name, "Premier League");
    assert_eq!(standing.team_id, 0);
    assert_eq!(standing.country_id, 1);
    assert_eq!(standing.league_id, 10);
}

#[tokio::test]
async fn sentinel_country_returns_default_result() {
    let server = england_upstream().await;

    let (status, body) = get(
        app_for(&server),
        "/api/service/v1/team/standing?countryName=atlantis&leagueName=Any&teamName=Any",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let standing: TeamStanding = serde_json::from_slice(&body).unwrap();
    assert_eq!(standing.country_id, 0);
    assert_eq!(standing.country_name, "atlantis");
}

#[tokio::test]
async fn missing_parameter_is_400() {
    let server = england_upstream().await;

    let (status, body) = get(
        app_for(&server),
        "/api/service/v1/team/standing?countryName=England&leagueName=Premier%20League",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.status, 400);
    assert!(error.message.contains("teamName"));
}

#[tokio::test]
async fn blank_parameter_is_400() {
    let server = england_upstream().await;

    let (status, body) = get(
        app_for(&server),
        "/api/service/v1/team/standing?countryName=%20&leagueName=Premier%20League&teamName=Arsenal",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.message, "countryName must not be blank");
}

#[tokio::test]
async fn upstream_failure_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (status, body) = get(
        app_for(&server),
        "/api/service/v1/team/standing?countryName=England&leagueName=Premier%20League&teamName=Arsenal",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.status, 500);
    assert!(error.message.contains("get_countries"));
}

#[tokio::test]
async fn health_check_reports_ok() {
    let server = MockServer::start().await;

    let (status, body) = get(app_for(&server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn connection_failure_is_500_without_api_key() {
    let client = HttpFootballData::new(&UpstreamConfig {
        base_url: "http://127.0.0.1:1/".to_string(),
        api_key: "SECRET-KEY-123".to_string(),
        timeout_secs: 5,
    })
    .unwrap();
    let app = routes::router(StandingService::new(client));

    let (status, body) = get(
        app,
        "/api/service/v1/team/standing?countryName=England&leagueName=Premier%20League&teamName=Arsenal",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.status, 500);
    assert!(error.message.starts_with("Upstream request failed"));
    assert!(!error.message.contains("SECRET-KEY-123"));
    assert!(!error.message.contains("APIkey"));
}
