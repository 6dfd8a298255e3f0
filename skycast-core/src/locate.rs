//! "Use my location" support.
//!
//! A terminal has no browser geolocation to ask, so the production locator
//! resolves the machine's public IP to coordinates instead. The lookup is
//! bounded: a slow resolver fails the command rather than hanging it.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::WeatherError;

/// Upper bound on the position lookup.
pub const LOCATE_TIMEOUT: Duration = Duration::from_secs(8);

/// Resolves the user's current position.
#[async_trait]
pub trait Locator: Send + Sync + Debug {
    async fn locate(&self) -> Result<(f64, f64), WeatherError>;
}

/// IP-geolocation lookup via ip-api.com (no API key required).
#[derive(Debug, Clone)]
pub struct GeoIp {
    endpoint: String,
    http: Client,
}

impl GeoIp {
    pub fn new() -> Self {
        Self {
            endpoint: "http://ip-api.com/json".to_string(),
            http: Client::new(),
        }
    }
}

impl Default for GeoIp {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[async_trait]
impl Locator for GeoIp {
    async fn locate(&self) -> Result<(f64, f64), WeatherError> {
        debug!("looking up position by IP");

        let res = self
            .http
            .get(&self.endpoint)
            .timeout(LOCATE_TIMEOUT)
            .send()
            .await
            .map_err(|err| WeatherError::Geolocation(err.to_string()))?;

        if !res.status().is_success() {
            return Err(WeatherError::Geolocation(format!(
                "lookup returned status {}",
                res.status().as_u16()
            )));
        }

        let parsed: GeoIpResponse = res
            .json()
            .await
            .map_err(|err| WeatherError::Geolocation(err.to_string()))?;

        match (parsed.status.as_str(), parsed.lat, parsed.lon) {
            ("success", Some(lat), Some(lon)) => Ok((lat, lon)),
            _ => Err(WeatherError::Geolocation(
                "lookup did not return a position".to_string(),
            )),
        }
    }
}
