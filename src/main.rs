//! Healthcare API entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use healthcare_api::api::{create_router, docs, with_swagger_ui, AppState};
use healthcare_api::config::Config;
use healthcare_api::health::{calculate_metrics, MetricsRequest};
use healthcare_api::metrics;
use healthcare_api::utils::shutdown_signal;

/// BMI and suitable-weight HTTP API.
#[derive(Parser, Debug)]
#[command(name = "healthcare-api")]
#[command(about = "HTTP API computing BMI and suitable weight from weight and height")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Mount Swagger UI at /swagger-ui.
        #[arg(long)]
        swagger_ui: bool,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the API document to stdout.
    PrintDocs,

    /// Compute metrics once and print them as JSON.
    Bmi {
        /// Weight in kilograms.
        #[arg(long)]
        weight: f64,

        /// Height in centimeters.
        #[arg(long)]
        height: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("healthcare_api=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::PrintDocs) => cmd_print_docs(),
        Some(Command::Bmi { weight, height }) => cmd_bmi(weight, height),
        Some(Command::Serve { port, swagger_ui }) => cmd_serve(port, swagger_ui).await,
        None => cmd_serve(args.port, false).await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("HEALTHCARE API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    print!("Rendering API document... ");
    match docs::render() {
        Ok(doc) => println!("OK ({} bytes)", doc.len()),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("API document rendering failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!("  Log Level: {}", config.rust_log);
    match config.metrics_port {
        Some(p) => println!("  Metrics Port: {}", p),
        None => println!("  Metrics Port: disabled"),
    }
    println!("  Swagger UI: {}", if config.swagger_ui { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the API document to stdout.
fn cmd_print_docs() -> anyhow::Result<()> {
    println!("{}", docs::render()?);
    Ok(())
}

/// Compute metrics once and print them as JSON.
fn cmd_bmi(weight: f64, height: f64) -> anyhow::Result<()> {
    let request = MetricsRequest::new(weight, height)?;
    let result = calculate_metrics(&request);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(port_override: Option<u16>, swagger_ui_override: bool) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }
    if swagger_ui_override {
        config.swagger_ui = true;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    // Initialize metrics
    if let Some(metrics_port) = config.metrics_port {
        metrics::install_exporter(metrics_port)?;
    }
    metrics::init_metrics();

    // Create app state
    let app_state = AppState::new()?;
    info!("API document rendered ({} bytes)", app_state.api_docs.len());

    let mut router = create_router(app_state);
    if config.swagger_ui {
        router = with_swagger_ui(router);
        info!("Swagger UI mounted at /swagger-ui");
    }

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
