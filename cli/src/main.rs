//! Bloom Pizza CLI
//!
//! Command-line front end for the Bloom Pizza order form.
//!
//! # Usage
//!
//! ```bash
//! bloom-pizza toppings
//! bloom-pizza order --name "Ann Lee" --size L --topping pepperoni --topping ham
//! bloom-pizza order --name "Ann Lee" --size L --dry-run --format json
//! bloom-pizza interactive
//! bloom-pizza config set endpoint http://localhost:9009/api/order
//! ```

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "bloom-pizza")]
#[command(author = "Bloom Pizza")]
#[command(version)]
#[command(about = "Order a pizza from Bloom Pizza", long_about = None)]
pub struct Cli {
    /// Order-intake endpoint URL
    #[arg(long, env = "BLOOM_PIZZA_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Give up on the order-intake service after this many seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Output format
    #[arg(long, short, global = true)]
    format: Option<output::OutputFormat>,

    /// Profile name from config file
    #[arg(long, short, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the order form and submit it
    Order(OrderArgs),
    /// Fill in the order form field by field
    Interactive,
    /// List the toppings on the menu
    Toppings,
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Args)]
pub struct OrderArgs {
    /// Full name for the order
    #[arg(long)]
    name: Option<String>,
    /// Size: S, M or L
    #[arg(long)]
    size: Option<String>,
    /// Topping field name, repeatable (see `toppings`)
    #[arg(long = "topping", short)]
    toppings: Vec<String>,
    /// Validate and print the payload without sending it
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match config::Config::load(cli.profile.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Config not readable, using defaults");
            config::Config::default()
        }
    };
    let settings = commands::Settings::resolve(&cli, &config);

    let result = match cli.command {
        Commands::Order(args) => commands::order::handle(args, &settings).await,
        Commands::Interactive => commands::interactive::handle(&settings).await,
        Commands::Toppings => commands::toppings::handle(&settings),
        Commands::Config { action } => commands::config::handle(action, cli.profile.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
