//! Mapping from forecast records to presentation: emoji glyph, color theme,
//! and short text label.
//!
//! All three derive from one branch classification, so the glyph and the
//! label can never disagree for the same input. Precipitation always wins
//! over cloud-derived visuals; within precipitation the order is snow, rain,
//! sleet, freezing rain. Absent or out-of-range cloud cover lands on the
//! foggy catch-all — the mapping is total.

use crate::model::PrecipKind;

/// Color theme applied to the whole dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Foggy,
    /// Pre-first-render document state.
    #[default]
    Default,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Foggy => "foggy",
            Self::Default => "default",
        }
    }
}

/// Outcome of the fixed precedence over (cloud cover, precipitation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Snow,
    Rain,
    Sleet,
    FreezingRain,
    Sunny,
    PartlyCloudy,
    Cloudy,
    Foggy,
}

impl Condition {
    pub fn classify(cloud: Option<i8>, precip: PrecipKind) -> Self {
        match precip {
            PrecipKind::Snow => Self::Snow,
            PrecipKind::Rain => Self::Rain,
            PrecipKind::Sleet => Self::Sleet,
            PrecipKind::FreezingRain => Self::FreezingRain,
            PrecipKind::None => match cloud {
                Some(c) if c <= 2 => Self::Sunny,
                Some(c) if c <= 5 => Self::PartlyCloudy,
                Some(c) if c <= 8 => Self::Cloudy,
                _ => Self::Foggy,
            },
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Snow => "❄️",
            Self::Rain => "🌧️",
            Self::Sleet => "🌨️",
            Self::FreezingRain => "🌩️",
            Self::Sunny => "☀️",
            Self::PartlyCloudy => "🌤️",
            Self::Cloudy => "☁️",
            Self::Foggy => "🌫️",
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Self::Snow | Self::Sleet => Theme::Snowy,
            Self::Rain | Self::FreezingRain => Theme::Rainy,
            Self::Sunny => Theme::Sunny,
            Self::PartlyCloudy | Self::Cloudy => Theme::Cloudy,
            Self::Foggy => Theme::Foggy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Snow => "Snow",
            Self::Rain => "Rain",
            Self::Sleet => "Sleet",
            Self::FreezingRain => "Freezing rain",
            Self::Sunny => "Sunny",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Cloudy => "Cloudy",
            Self::Foggy => "Foggy",
        }
    }
}

/// Glyph plus theme for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherVisual {
    pub emoji: &'static str,
    pub theme: Theme,
}

pub fn visual_for(cloud: Option<i8>, precip: PrecipKind) -> WeatherVisual {
    let condition = Condition::classify(cloud, precip);
    WeatherVisual {
        emoji: condition.emoji(),
        theme: condition.theme(),
    }
}

/// Short human-readable label, same branch selection as [`visual_for`].
pub fn describe(cloud: Option<i8>, precip: PrecipKind) -> &'static str {
    Condition::classify(cloud, precip).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRECIPS: [PrecipKind; 5] = [
        PrecipKind::None,
        PrecipKind::Rain,
        PrecipKind::Snow,
        PrecipKind::Sleet,
        PrecipKind::FreezingRain,
    ];

    #[test]
    fn visual_and_describe_agree_for_every_input() {
        let clouds: Vec<Option<i8>> = (0..=9).map(Some).chain([None]).collect();
        for &cloud in &clouds {
            for precip in PRECIPS {
                let condition = Condition::classify(cloud, precip);
                let visual = visual_for(cloud, precip);
                assert_eq!(visual.emoji, condition.emoji(), "{cloud:?}/{precip:?}");
                assert_eq!(visual.theme, condition.theme(), "{cloud:?}/{precip:?}");
                assert_eq!(describe(cloud, precip), condition.label(), "{cloud:?}/{precip:?}");
            }
        }
    }

    #[test]
    fn precipitation_overrides_clouds() {
        // Clear sky plus snow still reads as snow.
        let visual = visual_for(Some(0), PrecipKind::Snow);
        assert_eq!(visual.emoji, "❄️");
        assert_eq!(visual.theme, Theme::Snowy);
        assert_eq!(describe(Some(0), PrecipKind::Snow), "Snow");

        assert_eq!(visual_for(Some(9), PrecipKind::Rain).theme, Theme::Rainy);
        assert_eq!(visual_for(Some(3), PrecipKind::Sleet).theme, Theme::Snowy);
        assert_eq!(
            visual_for(Some(3), PrecipKind::FreezingRain).theme,
            Theme::Rainy
        );
    }

    #[test]
    fn precipitation_glyphs_are_distinct() {
        let glyphs: Vec<&str> = [
            PrecipKind::Snow,
            PrecipKind::Rain,
            PrecipKind::Sleet,
            PrecipKind::FreezingRain,
        ]
        .iter()
        .map(|&p| visual_for(Some(5), p).emoji)
        .collect();
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn cloud_thresholds() {
        assert_eq!(describe(Some(0), PrecipKind::None), "Sunny");
        assert_eq!(describe(Some(2), PrecipKind::None), "Sunny");
        assert_eq!(describe(Some(3), PrecipKind::None), "Partly cloudy");
        assert_eq!(describe(Some(5), PrecipKind::None), "Partly cloudy");
        assert_eq!(describe(Some(6), PrecipKind::None), "Cloudy");
        assert_eq!(describe(Some(8), PrecipKind::None), "Cloudy");
        assert_eq!(describe(Some(9), PrecipKind::None), "Foggy");
    }

    #[test]
    fn absent_or_out_of_range_cloud_is_foggy() {
        assert_eq!(visual_for(None, PrecipKind::None).theme, Theme::Foggy);
        assert_eq!(visual_for(Some(i8::MAX), PrecipKind::None).theme, Theme::Foggy);
        assert_eq!(describe(None, PrecipKind::None), "Foggy");
    }

    #[test]
    fn partly_cloudy_keeps_the_cloudy_theme() {
        // Glyph splits at <=5 but the theme ladder has no partly-cloudy tier.
        let visual = visual_for(Some(4), PrecipKind::None);
        assert_eq!(visual.emoji, "🌤️");
        assert_eq!(visual.theme, Theme::Cloudy);
    }
}
