//! Turns UI commands into state changes and render descriptions.
//!
//! The controller is the single writer of [`DisplayState`]: commands run to
//! completion one at a time, and the only suspension points are the forecast
//! fetch and the position lookup. Unit toggling re-renders from the cached
//! series and never touches the network.

use chrono::Local;
use tracing::{debug, error, warn};

use crate::cities;
use crate::error::WeatherError;
use crate::locate::Locator;
use crate::model::{DisplayState, ForecastSeries, LocationMeta, TempUnit};
use crate::provider::ForecastProvider;
use crate::view::Dashboard;

/// Fixed message shown in the current-conditions region when a load fails.
pub const LOAD_FAILED: &str = "Unable to load forecast. Please try again.";

/// Fallback display name for loads that carry no city metadata.
const GENERIC_FLAG: &str = "🇪🇺";
const GENERIC_CITY: &str = "Selected location";

/// A user interaction, decoupled from any input widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    UnitToggled,
    /// Selector value encoded as `lat,lon,flag,city`.
    CitySelected(String),
    SearchSubmitted(String),
    LocationRequested,
}

/// What the adapter should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw all three regions.
    Dashboard(Dashboard),
    /// Replace the current-conditions region with a fixed message; the
    /// forecast strips keep their previous content.
    ErrorPanel(&'static str),
    /// Blocking notification, no region replaced.
    Notice(String),
}

pub struct Controller {
    state: DisplayState,
    provider: Box<dyn ForecastProvider>,
    locator: Box<dyn Locator>,
    /// Monotonic fetch token; commits carrying an older token are discarded.
    fetch_seq: u64,
}

impl Controller {
    pub fn new(
        provider: Box<dyn ForecastProvider>,
        locator: Box<dyn Locator>,
        unit: TempUnit,
    ) -> Self {
        Self {
            state: DisplayState {
                unit,
                ..DisplayState::default()
            },
            provider,
            locator,
            fetch_seq: 0,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub async fn handle(&mut self, command: Command) -> Outcome {
        match command {
            Command::UnitToggled => self.toggle_unit(),
            Command::CitySelected(choice) => match cities::parse_choice(&choice) {
                Some((lat, lon, flag, city)) => self.load(lat, lon, &flag, &city).await,
                None => {
                    warn!(choice, "selector value did not decode");
                    Outcome::Notice(format!("Unrecognized selection: {choice}"))
                }
            },
            Command::SearchSubmitted(text) => self.search(&text).await,
            Command::LocationRequested => self.use_current_location().await,
        }
    }

    /// Fetch a forecast and, on success, replace the cached series and
    /// location together. Any failure leaves the state untouched and yields
    /// the fixed error panel.
    pub async fn load(&mut self, lat: f64, lon: f64, flag: &str, city: &str) -> Outcome {
        self.fetch_seq += 1;
        let token = self.fetch_seq;

        match self.provider.fetch(lat, lon).await {
            Ok(series) => {
                let meta = LocationMeta {
                    flag: flag.to_string(),
                    city: city.to_string(),
                    lat,
                    lon,
                };
                if !self.commit(token, series, meta) {
                    debug!(token, "discarding forecast superseded by a newer request");
                }
                self.render_cached()
            }
            Err(err) => {
                error!(%err, lat, lon, "forecast load failed");
                Outcome::ErrorPanel(LOAD_FAILED)
            }
        }
    }

    /// Load by coordinates only, with the generic display name.
    pub async fn load_coords(&mut self, lat: f64, lon: f64) -> Outcome {
        self.load(lat, lon, GENERIC_FLAG, GENERIC_CITY).await
    }

    /// Re-fetch the currently displayed location.
    pub async fn reload(&mut self) -> Outcome {
        let meta = self.state.meta.clone();
        self.load(meta.lat, meta.lon, &meta.flag, &meta.city).await
    }

    fn toggle_unit(&mut self) -> Outcome {
        self.state.unit = self.state.unit.toggled();
        self.render_cached()
    }

    async fn search(&mut self, text: &str) -> Outcome {
        let needle = text.trim();
        if needle.is_empty() {
            return Outcome::Notice("Enter a city name to search.".to_string());
        }
        match cities::find(needle) {
            Some(city) => self.load(city.lat, city.lon, city.flag, city.name).await,
            None => {
                let err = WeatherError::UnknownCity(needle.to_string());
                debug!(%err, "search missed the city table");
                Outcome::Notice(format!("City not in list. Try {}.", cities::suggestions()))
            }
        }
    }

    async fn use_current_location(&mut self) -> Outcome {
        match self.locator.locate().await {
            Ok((lat, lon)) => {
                // Keep the displayed coordinates at position-fix precision.
                let lat = (lat * 10_000.0).round() / 10_000.0;
                let lon = (lon * 10_000.0).round() / 10_000.0;
                self.load(lat, lon, "📍", "My Location").await
            }
            Err(err) => {
                error!(%err, "geolocation lookup failed");
                Outcome::Notice(format!("Unable to get location: {err}"))
            }
        }
    }

    /// Replace series and meta together, but only while `token` still names
    /// the newest issued fetch.
    fn commit(&mut self, token: u64, series: ForecastSeries, meta: LocationMeta) -> bool {
        if token != self.fetch_seq {
            return false;
        }
        self.state.series = Some(series);
        self.state.meta = meta;
        true
    }

    fn render_cached(&self) -> Outcome {
        match Dashboard::from_state(&self.state, Local::now()) {
            Some(dashboard) => Outcome::Dashboard(dashboard),
            None => Outcome::Notice("No forecast loaded yet.".to_string()),
        }
    }
}
