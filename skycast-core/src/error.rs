use thiserror::Error;

/// Failure kinds surfaced by the loader, locator, and city search.
///
/// Every variant is handled terminally at the controller: fetch and parse
/// failures become the fixed error panel, geolocation and city-search misses
/// become user notices. Nothing propagates past the triggering command.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("forecast request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("forecast request returned status {0}")]
    Status(u16),

    #[error("could not decode forecast body: {0}")]
    Parse(String),

    #[error("geolocation unavailable: {0}")]
    Geolocation(String),

    #[error("city {0:?} is not in the built-in table")]
    UnknownCity(String),
}
