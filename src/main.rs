//! Profile-gated REST route demo entry point.

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use profile_routes::api::create_router;
use profile_routes::config::Config;
use profile_routes::metrics;
use profile_routes::profile::Activation;
use profile_routes::server;

/// Profile-gated REST route demo.
#[derive(Parser, Debug)]
#[command(name = "profile-routes")]
#[command(about = "HTTP service exposing one of two route groups chosen by a runtime profile")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Activation selector ("typeone" or "typetwo"); overrides ACTIVE_PROFILE.
    #[arg(long)]
    profile: Option<String>,

    /// HTTP server port.
    #[arg(short, long, default_value = "8080")]
    port: u16,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// Activation selector ("typeone" or "typetwo"); overrides ACTIVE_PROFILE.
        #[arg(long)]
        profile: Option<String>,

        /// HTTP server port.
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Check configuration and report the resolved activation.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("profile_routes=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Run { profile, port }) => cmd_run(profile, port).await,
        None => cmd_run(args.profile, args.port).await,
    }
}

/// Check configuration and report the resolved activation.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("PROFILE ROUTES - CONFIGURATION CHECK");
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

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!(
        "  Selector: {}",
        config.active_profile.as_deref().unwrap_or("(unset)")
    );
    println!(
        "  Activation: {}",
        match config.activation() {
            Activation::TypeOne => "typeone group active",
            Activation::TypeTwo => "typetwo group active",
            Activation::Neither => "no group active (all routes 404)",
        }
    );
    println!("  Port: {}", config.port);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server.
async fn cmd_run(profile_override: Option<String>, port: u16) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load()?;

    // Override with CLI args if provided
    if let Some(profile) = profile_override {
        config.active_profile = Some(profile);
    }
    config.port = port;

    // Resolve the activation once, before any route registration
    let activation = config.activation();
    match activation {
        Activation::TypeOne => info!("Profile \"typeone\" active: serving /typeone routes"),
        Activation::TypeTwo => info!("Profile \"typetwo\" active: serving /typetwo routes"),
        Activation::Neither => warn!(
            "No recognized profile active (selector: {:?}): no routes registered, all paths return 404",
            config.active_profile
        ),
    }

    let router = create_router(activation);

    server::serve(router, config.port).await?;

    info!("Server stopped");
    Ok(())
}
