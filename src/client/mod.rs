//! Client for the apifootball v2 REST API

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::UpstreamConfig;
use crate::error::ApiError;
use crate::models::{Country, League, Standing, UpstreamPayload};

/// Lookups the standing resolver needs from a football-data source.
pub trait FootballData: Send + Sync {
    fn list_countries(&self) -> impl Future<Output = Result<Vec<Country>, ApiError>> + Send;

    fn list_leagues(
        &self,
        country_id: i64,
    ) -> impl Future<Output = Result<Vec<League>, ApiError>> + Send;

    fn list_standings(
        &self,
        league_id: i64,
    ) -> impl Future<Output = Result<Vec<Standing>, ApiError>> + Send;
}

#[derive(Clone)]
pub struct HttpFootballData {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpFootballData {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    #[instrument(skip(self, params))]
    async fn fetch<T: DeserializeOwned + Send>(
        &self,
        action: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let mut query: Vec<(&str, String)> = vec![
            ("action", action.to_string()),
            ("APIkey", self.api_key.clone()),
        ];
        query.extend(params.iter().cloned());

        let response = self.client.get(&self.base_url).query(&query).send().await?;

        let status = response.status();
        debug!("Upstream responded {} for {}", status, action);
        if !status.is_success() {
            return Err(ApiError::UpstreamStatus {
                status: status.as_u16(),
                action: action.to_string(),
            });
        }

        let body = response.text().await?;
        let payload: UpstreamPayload<T> =
            serde_json::from_str(&body).map_err(|e| ApiError::UpstreamDecode {
                action: action.to_string(),
                message: e.to_string(),
            })?;

        match payload {
            UpstreamPayload::List(items) => Ok(items),
            // apifootball answers "nothing found" with an error object instead of []
            UpstreamPayload::Error { error: 404, message } => {
                debug!("Upstream found nothing for {}: {}", action, message);
                Ok(Vec::new())
            }
            UpstreamPayload::Error { error, message } => Err(ApiError::UpstreamReported {
                code: error,
                action: action.to_string(),
                message,
            }),
        }
    }
}

impl FootballData for HttpFootballData {
    async fn list_countries(&self) -> Result<Vec<Country>, ApiError> {
        self.fetch("get_countries", &[]).await
    }

    async fn list_leagues(&self, country_id: i64) -> Result<Vec<League>, ApiError> {
        self.fetch("get_leagues", &[("country_id", country_id.to_string())])
            .await
    }

    async fn list_standings(&self, league_id: i64) -> Result<Vec<Standing>, ApiError> {
        self.fetch("get_standings", &[("league_id", league_id.to_string())])
            .await
    }
}
