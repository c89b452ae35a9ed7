mod api;
mod cli;
mod config;
mod models;
mod platform;
mod scheduling;
mod utils;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use models::ChannelSpec;
use platform::{
    request_startup_permissions, DesktopNotifier, GeoIpProvider, GrantAllPermissions,
    NotificationScheduler,
};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // Channel registration and permission requests happen once per process,
    // before any fetch.
    let mut notifier = DesktopNotifier::new();
    let created = notifier.create_channel(&ChannelSpec::prayer_times())?;
    info!(
        "notification channel {}",
        if created { "created" } else { "already exists" }
    );
    request_startup_permissions(&GrantAllPermissions);

    match cli.command {
        Some(Commands::City { name, wait }) => {
            handlers::handle_city(&config, &mut notifier, &name, wait)?;
        }
        Some(Commands::Here { wait }) => {
            let mut provider = GeoIpProvider::new()?;
            handlers::handle_here(&config, &mut notifier, &mut provider, wait)?;
        }
        Some(Commands::Config { set_default_city }) => {
            handlers::handle_config(&config, set_default_city)?;
        }

        // No subcommand → fall back to the configured city.
        None => {
            let city = config.location.default_city.clone();
            if city.is_empty() {
                bail!(
                    "no default city configured; run `vakit city <NAME>` or \
                     `vakit config --set-default-city <NAME>`"
                );
            }
            handlers::handle_city(&config, &mut notifier, &city, config.notify.wait_for_delivery)?;
        }
    }

    Ok(())
}
