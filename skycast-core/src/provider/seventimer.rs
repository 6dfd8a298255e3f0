use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::ForecastProvider;
use crate::error::WeatherError;
use crate::model::{ForecastRecord, ForecastSeries};

/// Public 7timer endpoint serving the civil product.
pub const DEFAULT_ENDPOINT: &str = "http://www.7timer.info/bin/api.pl";

/// Forecast provider backed by 7timer's 3-hourly civil product.
#[derive(Debug, Clone)]
pub struct SevenTimer {
    endpoint: String,
    http: Client,
}

impl SevenTimer {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string())
    }

    /// Point the provider at a different base URL (config override, tests).
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            endpoint,
            http: Client::new(),
        }
    }
}

impl Default for SevenTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct CivilResponse {
    dataseries: Vec<ForecastRecord>,
}

#[async_trait]
impl ForecastProvider for SevenTimer {
    async fn fetch(&self, lat: f64, lon: f64) -> Result<ForecastSeries, WeatherError> {
        debug!(lat, lon, "requesting civil forecast");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("lon", lon.to_string()),
                ("lat", lat.to_string()),
                ("product", "civil".to_string()),
                ("output", "json".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = res.text().await?;
        let parsed: CivilResponse =
            serde_json::from_str(&body).map_err(|err| WeatherError::Parse(err.to_string()))?;

        if parsed.dataseries.is_empty() {
            return Err(WeatherError::Parse(
                "body contained no dataseries records".to_string(),
            ));
        }

        debug!(records = parsed.dataseries.len(), "forecast received");
        Ok(parsed.dataseries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PrecipKind;

    #[test]
    fn civil_body_parses_into_a_series() {
        let body = r#"{
            "product": "civil",
            "init": "2026080612",
            "dataseries": [
                { "timepoint": 3, "cloudcover": 1, "prec_type": "none",
                  "temp2m": 20, "rh2m": "69%",
                  "wind10m": { "direction": "NE", "speed": 3 } },
                { "timepoint": 6, "cloudcover": 9, "prec_type": "rain",
                  "temp2m": 17, "rh2m": "85%",
                  "wind10m": { "direction": "W", "speed": 4 } }
            ]
        }"#;

        let parsed: CivilResponse = serde_json::from_str(body).expect("body should parse");
        assert_eq!(parsed.dataseries.len(), 2);
        assert_eq!(parsed.dataseries[0].temp2m, Some(20));
        assert_eq!(parsed.dataseries[1].prec_type, PrecipKind::Rain);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = serde_json::from_str::<CivilResponse>("{\"dataseries\": 12}")
            .map_err(|err| WeatherError::Parse(err.to_string()))
            .unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
    }
}
