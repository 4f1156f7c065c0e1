//! # Royal Stay Front Desk
//!
//! Runs the scripted guest scenarios and prints their reports.
//!
//! ```text
//! royal-front-desk [--config <PATH>] [--scenario all|trump|biden] [--policy permissive|strict]
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};

use royal_core::{BookingPolicy, FrontDesk};
use royal_front_desk::{
    init_logging, with_bootstrap_logging, AppResult, FrontDeskConfig, Scenario,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScenarioSelection {
    All,
    Trump,
    Biden,
}

impl ScenarioSelection {
    fn scenarios(self) -> &'static [Scenario] {
        match self {
            ScenarioSelection::All => &Scenario::ALL,
            ScenarioSelection::Trump => &[Scenario::DonaldTrump],
            ScenarioSelection::Biden => &[Scenario::JoeBiden],
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "royal-front-desk", version, about = "Royal Stay hotel front desk")]
struct Cli {
    /// TOML config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Which scripted scenario to run
    #[arg(long, value_enum, default_value_t = ScenarioSelection::All)]
    scenario: ScenarioSelection,

    /// Overrides the configured booking policy (permissive | strict)
    #[arg(long)]
    policy: Option<BookingPolicy>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Cli::parse())?;
    Ok(())
}

fn run(cli: Cli) -> AppResult<()> {
    // An explicit --config must load; the default location is best effort.
    let (mut config, fallback) = with_bootstrap_logging(|| match cli.config {
        Some(path) => FrontDeskConfig::load(Some(path)).map(|config| (config, None)),
        None => Ok(FrontDeskConfig::load_with_fallback(None)),
    })?;
    if let Some(policy) = cli.policy {
        config.hotel.booking_policy = policy;
    }

    init_logging(&config.logging.level);
    if let Some(e) = fallback {
        warn!(error = %e, "Running with default configuration");
    }
    info!(
        hotel = %config.hotel.name,
        policy = %config.booking_policy(),
        "Configuration loaded"
    );

    println!("{} Front Desk", config.hotel.name);
    println!("Booking policy: {}", config.booking_policy());
    println!();

    let mut desk = FrontDesk::new(config.booking_policy());
    for scenario in cli.scenario.scenarios() {
        let report = scenario.run(&mut desk)?;
        println!("{}", report);
    }

    info!("All scenarios complete");
    Ok(())
}
