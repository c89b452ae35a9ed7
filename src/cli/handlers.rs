use anyhow::Result;
use chrono::Local;
use log::{debug, error, warn};
use std::time::Duration;

use crate::api::TimingsSource;
use crate::config::AppConfig;
use crate::models::{LocationQuery, LocationRequest, PrayerTimeSet, PrayerType};
use crate::platform::{DesktopNotifier, LocationProvider, NotificationScheduler};
use crate::scheduling::{parse_prayer_time, schedule_notifications};
use crate::utils::format::{format_duration_secs, format_time};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Fetch and schedule ──────────────────────────────────────────────────────

/// One fetch, one scheduling pass. Every failure class — transport, non-2xx
/// status, malformed body — is logged and swallowed; a failed fetch schedules
/// nothing and returns None, and the caller proceeds as if nothing happened.
pub fn fetch_and_schedule(
    source: &dyn TimingsSource,
    query: &LocationQuery,
    sink: &mut dyn NotificationScheduler,
) -> Option<PrayerTimeSet> {
    match source.timings_for(query) {
        Ok(times) => {
            if times.is_empty() {
                warn!("timings response contained no entries");
            }
            debug!("fetched {} timing entries", times.len());
            schedule_notifications(&times, sink);
            Some(times)
        }
        Err(err) => {
            error!("fetching prayer times failed: {}", err);
            None
        }
    }
}

// ─── City ────────────────────────────────────────────────────────────────────

pub fn handle_city(
    config: &AppConfig,
    notifier: &mut DesktopNotifier,
    name: &str,
    wait: bool,
) -> Result<()> {
    let client = crate::api::AladhanClient::new(&config.api)?;
    let query = LocationQuery::City(name.to_string());

    if let Some(times) = fetch_and_schedule(&client, &query, notifier) {
        print_times(name, &times);
    }
    if wait {
        notifier.deliver_pending();
    }
    Ok(())
}

// ─── Coordinates ─────────────────────────────────────────────────────────────

pub fn handle_here(
    config: &AppConfig,
    notifier: &mut DesktopNotifier,
    provider: &mut dyn LocationProvider,
    wait: bool,
) -> Result<()> {
    let request = LocationRequest {
        timeout: Duration::from_secs(config.location.timeout_secs),
        max_age: Duration::from_secs(config.location.max_age_secs),
    };

    // Position strictly before fetch; a geolocation failure ends the flow
    // the same way a fetch failure does.
    let position = match provider.current_position(&request) {
        Ok(position) => position,
        Err(err) => {
            error!("geolocation failed: {}", err);
            return Ok(());
        }
    };

    let client = crate::api::AladhanClient::new(&config.api)?;
    let query = LocationQuery::from(position);

    if let Some(times) = fetch_and_schedule(&client, &query, notifier) {
        let label = format!("{:.4}, {:.4}", position.latitude, position.longitude);
        print_times(&label, &times);
    }
    if wait {
        notifier.deliver_pending();
    }
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, set_default_city: Option<String>) -> Result<()> {
    if let Some(city) = set_default_city {
        let mut updated = config.clone();
        updated.location.default_city = city.clone();
        updated.save()?;
        println!("Default city set to {}", city);
        return Ok(());
    }

    println!("# {}", AppConfig::config_path()?.display());
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

// ─── Display ─────────────────────────────────────────────────────────────────

fn print_times(location: &str, times: &PrayerTimeSet) {
    let today = Local::now().date_naive();
    let now_time = Local::now().time();

    println!();
    println_colored!(GOLD, "  Namaz Vakitleri — {} ({})", location, today);
    println!();

    let mut next: Option<(PrayerType, i64)> = None;
    for prayer in PrayerType::all() {
        let Some(raw) = times.get(prayer) else {
            continue;
        };
        let Ok(time) = parse_prayer_time(raw) else {
            continue;
        };
        if time < now_time {
            println_colored!(DIM, "  {:<10}  {}", prayer.display_name(), format_time(time));
        } else {
            println_colored!(BOLD, "  {:<10}  {}", prayer.display_name(), format_time(time));
            if next.is_none() {
                next = Some((prayer, (time - now_time).num_seconds()));
            }
        }
    }

    if let Some((prayer, secs)) = next {
        println!();
        println_colored!(
            AMBER,
            "  Next: {} in {}",
            prayer.display_name(),
            format_duration_secs(secs)
        );
    }
    println!();
}
