//! Built-in city table and the selector tuple encoding.

/// A predefined dashboard location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// Lowercase search key.
    pub key: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    /// Encode this city as the comma-joined selector value.
    pub fn choice(&self) -> String {
        format!("{},{},{},{}", self.lat, self.lon, self.flag, self.name)
    }
}

pub const CITIES: &[City] = &[
    City { key: "paris", name: "Paris", flag: "🇫🇷", lat: 48.8566, lon: 2.3522 },
    City { key: "london", name: "London", flag: "🇬🇧", lat: 51.5074, lon: -0.1278 },
    City { key: "rome", name: "Rome", flag: "🇮🇹", lat: 41.9028, lon: 12.4964 },
    City { key: "madrid", name: "Madrid", flag: "🇪🇸", lat: 40.4168, lon: -3.7038 },
    City { key: "berlin", name: "Berlin", flag: "🇩🇪", lat: 52.5200, lon: 13.4050 },
];

/// Case-insensitive lookup against the table.
pub fn find(name: &str) -> Option<&'static City> {
    let needle = name.trim().to_lowercase();
    CITIES.iter().find(|city| city.key == needle)
}

/// Human-readable list of valid search terms, e.g.
/// `Paris, London, Rome, Madrid, or Berlin`.
pub fn suggestions() -> String {
    let names: Vec<&str> = CITIES.iter().map(|city| city.name).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {last}", rest.join(", ")),
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}

/// Decode a selector value of the form `lat,lon,flag,city`.
pub fn parse_choice(value: &str) -> Option<(f64, f64, String, String)> {
    let mut parts = value.splitn(4, ',');
    let lat = parts.next()?.trim().parse().ok()?;
    let lon = parts.next()?.trim().parse().ok()?;
    let flag = parts.next()?.trim().to_string();
    let city = parts.next()?.trim().to_string();
    Some((lat, lon, flag, city))
}
