mod gateway;

use std::path::PathBuf;

use abacus_bootstrap::{AppConfig, CliArgs};
use anyhow::{Context, Result};
use calculator::CalculatorModule;
use calculator::config::CalculatorConfig;
use calculator::module::MODULE_NAME;
use calculator_sdk::keypad::{Key, press_all};
use clap::{Parser, Subcommand};

/// Abacus Server - calculator API with persisted history
#[derive(Parser)]
#[command(name = "abacus-server")]
#[command(about = "Abacus Server - calculator API with persisted history")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory database (sqlite::memory:)
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Press keypad buttons and print the resulting display
    Press {
        /// Button labels (0-9 . + - * / = C), separate or run together
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        port: cli.port,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    abacus_bootstrap::init_logging(&config.logging)?;

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    // Dispatch subcommands (default: run)
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
        Commands::Press { keys } => press_keys(&keys),
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Abacus Server starting");
    let cancel = abacus_bootstrap::shutdown_token();

    let module = CalculatorModule::init(&config).await?;
    let router = gateway::build_router(&config.server, &module);

    let addr = config.server.bind_addr();
    let served = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => gateway::serve(listener, router, cancel).await,
        Err(e) => Err(e).with_context(|| format!("failed to bind {addr}")),
    };

    // Close storage only after in-flight requests have drained
    module.shutdown().await?;
    tracing::info!("Abacus Server stopped");
    served
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    let _calculator: CalculatorConfig = config.module_config(MODULE_NAME)?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

fn press_keys(labels: &[String]) -> Result<()> {
    let keys = labels
        .iter()
        .flat_map(|label| label.chars())
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_string().parse::<Key>())
        .collect::<Result<Vec<_>, _>>()?;

    println!("{}", press_all(keys).display());
    Ok(())
}
