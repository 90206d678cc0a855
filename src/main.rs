//! Salary Engine CLI
//!
//! Usage: salary-engine [--config <PATH>] <COMMAND>
//!
//! Commands:
//!   lookup  Print the salary result for one employee
//!   serve   Run the HTTP API

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use salary_engine::api::create_router;
use salary_engine::cli::render_lookup;
use salary_engine::composition::{build_app_state, build_salary_service};
use salary_engine::config::{AppConfig, ConfigLoader};
use salary_engine::models::EmployeeNumber;

/// Salary Engine - net salary lookups over a pluggable employee store
#[derive(Parser, Debug)]
#[command(name = "salary-engine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the salary result for one employee
    Lookup {
        /// The employee number to look up
        #[arg(allow_negative_numbers = true)]
        employee_number: EmployeeNumber,
    },

    /// Run the HTTP API
    Serve {
        /// Override the configured host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,salary_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Lookup { employee_number } => lookup(&config, employee_number),
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let loader = ConfigLoader::load(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            Ok(loader.into_config())
        }
        None => Ok(AppConfig::default()),
    }
}

fn lookup(config: &AppConfig, employee_number: EmployeeNumber) -> Result<ExitCode> {
    let service = build_salary_service(config).context("Failed to build salary service")?;

    match render_lookup(&service, employee_number) {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(output) => {
            eprintln!("{}", output);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn serve(config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start Tokio runtime")?;
    runtime.block_on(run_server(config))
}

async fn run_server(config: AppConfig) -> Result<()> {
    let state = build_app_state(&config).context("Failed to build application state")?;
    let router = create_router(state);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "Salary Engine API listening");
    axum::serve(listener, router)
        .await
        .context("HTTP server terminated")?;
    Ok(())
}
