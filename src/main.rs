//! Clinic site backend
//!
//! ```sh
//! # Run with the default config (<config dir>/clinic-site/config.toml)
//! clinic-site
//!
//! # Custom config path and port
//! clinic-site --config /etc/clinic-site/config.toml --port 8080
//!
//! # Validate config without starting
//! clinic-site --check
//!
//! # Write the effective config (defaults plus overrides) and exit
//! clinic-site --port 8080 --write-config
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use clinic_site::config::AppConfig;
use clinic_site::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "clinic-site",
    version,
    about = "REST backend for the clinic website: services, appointments, contacts"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CLINIC_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long, conflicts_with = "check")]
    write_config: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip seeding the default service catalogue.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(clinic_site::default_config_path);

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config);
    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check || cli.write_config {
                return Err(e.into());
            }
            error!("Using default configuration.");
        }
    }

    if cli.write_config {
        config.save(&config_path)?;
        info!("Configuration written to {}", config_path.display());
        return Ok(());
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Listen      : {}", config.listen_address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!("   Seed        : {}", config.seed.default_services);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let mut opts = ServerOptions::new(config);
    opts.auto_migrate = !cli.no_migrate;
    opts.seed_services = opts.seed_services && !cli.no_seed;

    let handle = ServerHandle::start(opts).await?;
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
