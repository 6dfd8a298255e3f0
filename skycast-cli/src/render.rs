//! Thin terminal adapter: view-models in, ANSI-styled lines out.
//!
//! Everything printable is computed by the core builders; this module only
//! decides colors and layout.

use chrono::Local;
use skycast_core::Outcome;
use skycast_core::view::{CurrentPanel, DailyCard, Dashboard, HourlyCard};
use skycast_core::visual::Theme;

const RESET: &str = "\u{1b}[0m";
const BOLD: &str = "\u{1b}[1m";
const RED: &str = "\u{1b}[38;5;160m";

/// Accent color applied per theme, 256-color palette.
fn theme_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Sunny => "\u{1b}[38;5;226m",
        Theme::Cloudy => "\u{1b}[38;5;250m",
        Theme::Rainy => "\u{1b}[38;5;111m",
        Theme::Snowy => "\u{1b}[38;5;195m",
        Theme::Foggy => "\u{1b}[38;5;245m",
        Theme::Default => "",
    }
}

pub fn outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Dashboard(d) => dashboard(d),
        Outcome::ErrorPanel(message) => println!("\n{BOLD}{RED}{message}{RESET}\n"),
        Outcome::Notice(message) => println!("\n{message}\n"),
    }
}

fn dashboard(d: &Dashboard) {
    current(&d.current);
    hourly(&d.hourly);
    daily(&d.daily);
    println!("\nUpdated {} · data: 7timer (civil)", Local::now().format("%H:%M"));
}

fn current(panel: &CurrentPanel) {
    let color = theme_color(panel.theme);
    println!();
    println!("{color}{BOLD}{}{RESET}", panel.location);
    println!(
        "  {} {color}{BOLD}{}{RESET}  {}",
        panel.emoji, panel.temperature, panel.description
    );
    println!("  💧 Humidity: {}   🌬️ Wind: {}", panel.humidity, panel.wind);
    println!(
        "  ☁️ Clouds: {}   🌧️ Precip: {}",
        panel.clouds, panel.precipitation
    );
}

fn hourly(cards: &[HourlyCard]) {
    println!("\n{BOLD}Next 24 hours{RESET}");
    for card in cards {
        println!(
            "  {}  {}  {:>6}  clouds {}",
            card.label, card.emoji, card.temperature, card.clouds
        );
    }
}

fn daily(cards: &[DailyCard]) {
    println!("\n{BOLD}Week ahead{RESET}");
    for card in cards {
        println!(
            "  {:<12} {}  {:>6}  humidity {:>4}  clouds {}",
            card.label, card.emoji, card.temperature, card.humidity, card.clouds
        );
    }
}
