use serde::{Deserialize, Deserializer, Serialize};

/// One 3-hour slice of the civil forecast product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastRecord {
    /// 2-meter air temperature, degrees Celsius.
    pub temp2m: Option<i32>,
    /// Sky coverage on the provider's 0-9 scale.
    pub cloudcover: Option<i8>,
    #[serde(default, deserialize_with = "de_precip")]
    pub prec_type: PrecipKind,
    /// Relative humidity, percent. The wire value is either a bare integer
    /// or a string like `"69%"` depending on the product revision.
    #[serde(default, deserialize_with = "de_humidity")]
    pub rh2m: Option<i32>,
    pub wind10m: Option<Wind>,
}

/// 10-meter wind as reported by the provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
    pub direction: Option<String>,
}

/// Precipitation tag carried by each forecast record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecipKind {
    #[default]
    None,
    Rain,
    Snow,
    Sleet,
    FreezingRain,
}

impl PrecipKind {
    /// Decode a provider tag. Unrecognized tags (the civil product also
    /// emits `mix` and friends) count as no precipitation rather than an
    /// error, so the visual mapping stays total.
    pub fn from_code(code: &str) -> Self {
        match code {
            "rain" => Self::Rain,
            "snow" => Self::Snow,
            "ice" | "icep" => Self::Sleet,
            "frzr" => Self::FreezingRain,
            _ => Self::None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Sleet => "ice",
            Self::FreezingRain => "frzr",
        }
    }
}

fn de_precip<'de, D>(deserializer: D) -> Result<PrecipKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map_or(PrecipKind::None, PrecipKind::from_code))
}

fn de_humidity<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i32),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim_end_matches('%').trim().parse().ok(),
        None => None,
    })
}

/// Ordered forecast records at the provider's fixed 3-hour cadence,
/// replaced wholesale on each successful fetch.
pub type ForecastSeries = Vec<ForecastRecord>;

/// Describes the location the dashboard currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationMeta {
    pub flag: String,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
}

impl Default for LocationMeta {
    /// Fallback shown before the first successful load.
    fn default() -> Self {
        Self {
            flag: "🇪🇺".to_string(),
            city: "Europe".to_string(),
            lat: 48.8566,
            lon: 2.3522,
        }
    }
}

/// Temperature unit preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// The single snapshot every render derives from.
///
/// `unit` changes only through the unit toggle; `series` and `meta` are
/// replaced together by a successful load commit and by nothing else. A
/// failed load leaves the previous snapshot untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    pub unit: TempUnit,
    pub series: Option<ForecastSeries>,
    pub meta: LocationMeta,
}
