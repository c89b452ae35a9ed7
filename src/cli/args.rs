use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vakit", version, author, about = "Fetch daily prayer times and schedule local notifications")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch today's times for a city and schedule its notifications
    City {
        /// City name, resolved by the timings service
        name: String,
        /// Stay alive until every notification has been delivered
        #[arg(long)]
        wait: bool,
    },
    /// Geolocate this machine, then fetch and schedule by coordinates
    Here {
        /// Stay alive until every notification has been delivered
        #[arg(long)]
        wait: bool,
    },
    /// Show the resolved configuration, or change the default city
    Config {
        /// Set the city used when no subcommand is given
        #[arg(long)]
        set_default_city: Option<String>,
    },
}
