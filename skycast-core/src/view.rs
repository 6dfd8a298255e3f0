//! Pure view-model builders for the three dashboard regions.
//!
//! Builders map (records, location, unit, clock) to plain data; the terminal
//! adapter in the CLI crate is the only place that writes output. The clock
//! is an explicit parameter so card labels are deterministic under test.

use chrono::{DateTime, Datelike, Duration, Local, Timelike};

use crate::format::{MISSING, format_temp};
use crate::model::{DisplayState, ForecastRecord, LocationMeta, TempUnit};
use crate::visual::{Theme, describe, visual_for};

/// Hourly strip length: 8 slices at 3-hour cadence cover the next ~24h.
pub const HOURLY_SLOTS: usize = 8;
/// One record per day at 3-hour cadence.
pub const DAY_STRIDE: usize = 8;
/// Daily strip length cap.
pub const DAILY_SLOTS: usize = 7;

/// Current-conditions region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPanel {
    /// `flag city`, e.g. `🇫🇷 Paris`.
    pub location: String,
    pub description: &'static str,
    pub emoji: &'static str,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
    pub clouds: String,
    pub precipitation: &'static str,
    /// Applied to the document root by the adapter.
    pub theme: Theme,
}

/// One card of the hourly strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyCard {
    /// Zero-padded `HH:00`.
    pub label: String,
    pub emoji: &'static str,
    pub temperature: String,
    pub clouds: String,
}

/// One card of the daily strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCard {
    /// `flag weekday day`, e.g. `🇫🇷 Mon 8`.
    pub label: String,
    pub emoji: &'static str,
    pub temperature: String,
    pub humidity: String,
    pub clouds: String,
}

/// Complete render description for one [`DisplayState`] snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub theme: Theme,
    pub current: CurrentPanel,
    pub hourly: Vec<HourlyCard>,
    pub daily: Vec<DailyCard>,
}

impl Dashboard {
    /// Build all three regions from the cached state, or `None` when no
    /// series has been loaded yet.
    pub fn from_state(state: &DisplayState, now: DateTime<Local>) -> Option<Self> {
        let series = state.series.as_deref()?;
        let first = series.first()?;
        let current = current_panel(first, &state.meta, state.unit);
        Some(Self {
            theme: current.theme,
            hourly: hourly_cards(series, state.unit, now),
            daily: daily_cards(series, &state.meta.flag, state.unit, now),
            current,
        })
    }
}

pub fn current_panel(
    record: &ForecastRecord,
    meta: &LocationMeta,
    unit: TempUnit,
) -> CurrentPanel {
    let visual = visual_for(record.cloudcover, record.prec_type);
    CurrentPanel {
        location: format!("{} {}", meta.flag, meta.city),
        description: describe(record.cloudcover, record.prec_type),
        emoji: visual.emoji,
        temperature: format_temp(record.temp2m, unit),
        humidity: humidity(record.rh2m),
        wind: wind(record),
        clouds: cloud_level(record.cloudcover),
        precipitation: record.prec_type.as_code(),
        theme: visual.theme,
    }
}

pub fn hourly_cards(
    series: &[ForecastRecord],
    unit: TempUnit,
    now: DateTime<Local>,
) -> Vec<HourlyCard> {
    series
        .iter()
        .take(HOURLY_SLOTS)
        .enumerate()
        .map(|(idx, record)| {
            let at = now + Duration::hours(idx as i64 * 3);
            HourlyCard {
                label: format!("{:02}:00", at.hour()),
                emoji: visual_for(record.cloudcover, record.prec_type).emoji,
                temperature: format_temp(record.temp2m, unit),
                clouds: cloud_level(record.cloudcover),
            }
        })
        .collect()
}

pub fn daily_cards(
    series: &[ForecastRecord],
    flag: &str,
    unit: TempUnit,
    today: DateTime<Local>,
) -> Vec<DailyCard> {
    series
        .iter()
        .step_by(DAY_STRIDE)
        .take(DAILY_SLOTS)
        .enumerate()
        .map(|(idx, record)| {
            let date = today + Duration::days(idx as i64);
            DailyCard {
                label: format!("{flag} {} {}", date.format("%a"), date.day()),
                emoji: visual_for(record.cloudcover, record.prec_type).emoji,
                temperature: format_temp(record.temp2m, unit),
                humidity: humidity(record.rh2m),
                clouds: cloud_level(record.cloudcover),
            }
        })
        .collect()
}

fn humidity(rh: Option<i32>) -> String {
    rh.map_or_else(|| MISSING.to_string(), |v| format!("{v}%"))
}

fn cloud_level(cloud: Option<i8>) -> String {
    cloud.map_or_else(|| format!("{MISSING}/9"), |c| format!("{c}/9"))
}

fn wind(record: &ForecastRecord) -> String {
    let (speed, direction) = match &record.wind10m {
        Some(w) => (
            w.speed.map_or_else(|| MISSING.to_string(), |s| s.to_string()),
            w.direction.as_deref().unwrap_or(""),
        ),
        None => (MISSING.to_string(), ""),
    };
    format!("{speed} m/s {direction}").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PrecipKind, Wind};
    use chrono::TimeZone;

    fn record(temp: i32, cloud: i8) -> ForecastRecord {
        ForecastRecord {
            temp2m: Some(temp),
            cloudcover: Some(cloud),
            prec_type: PrecipKind::None,
            rh2m: Some(69),
            wind10m: Some(Wind {
                speed: Some(3.0),
                direction: Some("NE".to_string()),
            }),
        }
    }

    fn paris() -> LocationMeta {
        LocationMeta {
            flag: "🇫🇷".to_string(),
            city: "Paris".to_string(),
            lat: 48.8566,
            lon: 2.3522,
        }
    }

    fn nine_thirty() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 1, 14, 9, 30, 0)
            .single()
            .expect("fixed test clock should be unambiguous")
    }

    #[test]
    fn current_panel_for_a_sunny_record() {
        let panel = current_panel(&record(20, 1), &paris(), TempUnit::Celsius);
        assert_eq!(panel.location, "🇫🇷 Paris");
        assert_eq!(panel.description, "Sunny");
        assert_eq!(panel.temperature, "20°C");
        assert_eq!(panel.theme, Theme::Sunny);
        assert_eq!(panel.humidity, "69%");
        assert_eq!(panel.wind, "3 m/s NE");
        assert_eq!(panel.clouds, "1/9");
        assert_eq!(panel.precipitation, "none");
    }

    #[test]
    fn current_panel_falls_back_per_stat() {
        let bare = ForecastRecord {
            temp2m: None,
            cloudcover: None,
            prec_type: PrecipKind::None,
            rh2m: None,
            wind10m: None,
        };
        let panel = current_panel(&bare, &paris(), TempUnit::Celsius);
        assert_eq!(panel.temperature, "—");
        assert_eq!(panel.humidity, "—");
        assert_eq!(panel.wind, "— m/s");
        assert_eq!(panel.clouds, "—/9");
        assert_eq!(panel.description, "Foggy");
        assert_eq!(panel.theme, Theme::Foggy);
    }

    #[test]
    fn hourly_caps_at_eight_cards() {
        let series: Vec<ForecastRecord> = (0..12).map(|i| record(i, 1)).collect();
        let cards = hourly_cards(&series, TempUnit::Celsius, nine_thirty());
        assert_eq!(cards.len(), HOURLY_SLOTS);
        assert_eq!(cards[0].temperature, "0°C");
        assert_eq!(cards[7].temperature, "7°C");
    }

    #[test]
    fn hourly_handles_short_series() {
        let series: Vec<ForecastRecord> = (0..3).map(|i| record(i, 1)).collect();
        assert_eq!(
            hourly_cards(&series, TempUnit::Celsius, nine_thirty()).len(),
            3
        );
        assert!(hourly_cards(&[], TempUnit::Celsius, nine_thirty()).is_empty());
    }

    #[test]
    fn hourly_labels_step_three_hours_from_now() {
        let series: Vec<ForecastRecord> = (0..4).map(|i| record(i, 1)).collect();
        let cards = hourly_cards(&series, TempUnit::Celsius, nine_thirty());
        let labels: Vec<&str> = cards.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["09:00", "12:00", "15:00", "18:00"]);
    }

    #[test]
    fn daily_samples_every_eighth_record() {
        let series: Vec<ForecastRecord> = (0..20).map(|i| record(i, 1)).collect();
        let cards = daily_cards(&series, "🇫🇷", TempUnit::Celsius, nine_thirty());
        // Indices 0, 8, 16.
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].temperature, "0°C");
        assert_eq!(cards[1].temperature, "8°C");
        assert_eq!(cards[2].temperature, "16°C");
    }

    #[test]
    fn daily_caps_at_seven_cards() {
        let series: Vec<ForecastRecord> = (0..80).map(|i| record(i % 40, 1)).collect();
        let cards = daily_cards(&series, "🇫🇷", TempUnit::Celsius, nine_thirty());
        assert_eq!(cards.len(), DAILY_SLOTS);
    }

    #[test]
    fn daily_labels_advance_one_day_and_carry_the_flag() {
        let series: Vec<ForecastRecord> = (0..16).map(|i| record(i, 1)).collect();
        let cards = daily_cards(&series, "🇫🇷", TempUnit::Celsius, nine_thirty());
        assert_eq!(cards[0].label, "🇫🇷 Wed 14");
        assert_eq!(cards[1].label, "🇫🇷 Thu 15");
    }

    #[test]
    fn dashboard_from_state_requires_a_series() {
        let mut state = DisplayState::default();
        assert!(Dashboard::from_state(&state, nine_thirty()).is_none());

        state.series = Some(vec![record(20, 1)]);
        state.meta = paris();
        let dashboard =
            Dashboard::from_state(&state, nine_thirty()).expect("cached state should render");
        assert_eq!(dashboard.theme, Theme::Sunny);
        assert_eq!(dashboard.current.temperature, "20°C");
        assert_eq!(dashboard.hourly.len(), 1);
        assert_eq!(dashboard.daily.len(), 1);
    }

    #[test]
    fn toggling_unit_twice_restores_the_display() {
        let state = DisplayState {
            unit: TempUnit::Celsius,
            series: Some(vec![record(20, 1)]),
            meta: paris(),
        };
        let before = Dashboard::from_state(&state, nine_thirty()).expect("should render");

        let flipped = DisplayState {
            unit: state.unit.toggled(),
            ..state.clone()
        };
        let mid = Dashboard::from_state(&flipped, nine_thirty()).expect("should render");
        assert_eq!(mid.current.temperature, "68°F");

        let restored = DisplayState {
            unit: flipped.unit.toggled(),
            ..flipped
        };
        let after = Dashboard::from_state(&restored, nine_thirty()).expect("should render");
        assert_eq!(before, after);
    }
}
