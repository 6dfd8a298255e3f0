use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::WeatherError;
use crate::model::ForecastSeries;

pub mod seventimer;

/// Source of multi-day forecasts for a coordinate.
///
/// The controller only sees this trait, so tests can substitute a scripted
/// implementation and exercise the full command path without a network.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, lat: f64, lon: f64) -> Result<ForecastSeries, WeatherError>;
}
