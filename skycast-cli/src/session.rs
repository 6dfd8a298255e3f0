//! Interactive session and one-shot entry points.
//!
//! The session owns nothing but the controller; every user action becomes a
//! command, every outcome goes straight to the render adapter.

use anyhow::{Context, bail};
use inquire::{Select, Text};
use skycast_core::locate::GeoIp;
use skycast_core::{Command, Config, Controller, Outcome, SevenTimer, TempUnit, cities};

use crate::render;

const PICK_CITY: &str = "Pick a city";
const SEARCH_CITY: &str = "Search city";
const USE_LOCATION: &str = "Use my location";
const REFRESH: &str = "Refresh";
const QUIT: &str = "Quit";

fn build_controller(config: &Config, unit: TempUnit) -> Controller {
    let provider = match &config.endpoint {
        Some(url) => SevenTimer::with_endpoint(url.clone()),
        None => SevenTimer::new(),
    };
    Controller::new(Box::new(provider), Box::new(GeoIp::new()), unit)
}

/// Menu label for the unit toggle, reflecting the current unit.
fn toggle_label(unit: TempUnit) -> &'static str {
    match unit {
        TempUnit::Celsius => "Units: °C (switch to °F)",
        TempUnit::Fahrenheit => "Units: °F (switch to °C)",
    }
}

pub async fn interactive(config: Config) -> anyhow::Result<()> {
    let mut controller = build_controller(&config, config.default_unit);

    let city = config.startup_city();
    let outcome = controller.load(city.lat, city.lon, city.flag, city.name).await;
    render::outcome(&outcome);

    loop {
        let toggle = toggle_label(controller.state().unit);
        let menu = vec![toggle, PICK_CITY, SEARCH_CITY, USE_LOCATION, REFRESH, QUIT];

        // Esc or EOF ends the session like Quit.
        let Ok(action) = Select::new("skycast", menu).prompt() else {
            break;
        };

        let outcome = if action == toggle {
            controller.handle(Command::UnitToggled).await
        } else {
            match action {
                PICK_CITY => {
                    let names: Vec<&str> = cities::CITIES.iter().map(|c| c.name).collect();
                    let Ok(name) = Select::new("City", names).prompt() else {
                        continue;
                    };
                    let Some(city) = cities::CITIES.iter().find(|c| c.name == name) else {
                        continue;
                    };
                    controller.handle(Command::CitySelected(city.choice())).await
                }
                SEARCH_CITY => {
                    let Ok(text) = Text::new("City name:").prompt() else {
                        continue;
                    };
                    controller.handle(Command::SearchSubmitted(text)).await
                }
                USE_LOCATION => controller.handle(Command::LocationRequested).await,
                REFRESH => controller.reload().await,
                _ => break,
            }
        };

        render::outcome(&outcome);
    }

    Ok(())
}

pub async fn show_once(
    config: Config,
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    fahrenheit: bool,
) -> anyhow::Result<()> {
    let unit = if fahrenheit {
        TempUnit::Fahrenheit
    } else {
        config.default_unit
    };
    let mut controller = build_controller(&config, unit);

    let outcome = match (city, lat, lon) {
        (Some(name), _, _) => match cities::find(&name) {
            Some(city) => controller.load(city.lat, city.lon, city.flag, city.name).await,
            None => bail!("Unknown city {name:?}. Try {}.", cities::suggestions()),
        },
        (None, Some(lat), Some(lon)) => controller.load_coords(lat, lon).await,
        _ => bail!("Pass a city name, or both --lat and --lon."),
    };

    let failed = matches!(outcome, Outcome::ErrorPanel(_));
    render::outcome(&outcome);
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

pub fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let names: Vec<&str> = cities::CITIES.iter().map(|c| c.name).collect();
    let city = Select::new("Startup city:", names)
        .prompt()
        .context("configuration cancelled")?;

    let unit = Select::new("Temperature unit:", vec!["Celsius", "Fahrenheit"])
        .prompt()
        .context("configuration cancelled")?;

    config.default_city = city.to_lowercase();
    config.default_unit = if unit == "Fahrenheit" {
        TempUnit::Fahrenheit
    } else {
        TempUnit::Celsius
    };
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}
