use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::runtime::{Builder, Runtime};
use tracing::info;

use dt_money::api::ApiClient;
use dt_money::cli::{handle_add_command, AddTransactionArgs};
use dt_money::config::{paths::DtMoneyPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "dt-money",
    version,
    about = "Register income and outcome transactions from the terminal",
    long_about = "dt-money records finance transactions against a transactions API. \
                  Run it without arguments to open the interactive interface, or use \
                  'dt-money add' to register a transaction from a script."
)]
struct Cli {
    /// Base URL of the transactions API (overrides the config file)
    #[arg(long, env = "DT_MONEY_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Register a transaction without the TUI
    #[command(alias = "txn")]
    Add(AddTransactionArgs),

    /// Write the configuration file with default values
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DtMoneyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_api_url(cli.api_url);
    dt_money::logging::init(&paths, &settings.log_level)?;
    info!(version = env!("CARGO_PKG_VERSION"), "dt-money starting");

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let client = ApiClient::new(&settings.api)?;
            let runtime = build_runtime()?;
            dt_money::tui::run_tui(&settings, client, runtime.handle().clone())?;
        }
        Commands::Add(args) => {
            let client = ApiClient::new(&settings.api)?;
            let runtime = build_runtime()?;
            handle_add_command(&client, &runtime, args)?;
        }
        Commands::Init => {
            println!("Initializing dt-money at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Configuration written to {}", paths.settings_file().display());
            println!();
            println!("Transactions will be sent to {}", settings.api.base_url);
            println!("Run 'dt-money' to launch the interactive interface.");
        }
        Commands::Config => {
            println!("dt-money Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  API base URL:   {}", settings.api.base_url);
            println!("  Timeout:        {}s", settings.api.timeout_secs);
            println!("  Log level:      {}", settings.log_level);
        }
    }

    Ok(())
}

fn build_runtime() -> Result<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")
}
