use anyhow::Result;
use clap::{Parser, Subcommand};

/// mealbook - recipe storage and weekly meal planning
#[derive(Parser)]
#[command(name = "mealbook")]
#[command(about = "Recipe storage and weekly meal planning server", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealbook::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealbook::observability::init_observability(
        "mealbook",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.is_production(),
    )?;

    match cli.command {
        Commands::Serve { host, port } => mealbook::server::serve(config, host, port).await,
        Commands::Migrate => mealbook::migrate::migrate(&config).await,
        Commands::Reset => mealbook::migrate::reset(&config).await,
    }
}
