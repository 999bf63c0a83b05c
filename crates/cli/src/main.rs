use clap::Parser;
use killswitch_domain::{CliOverrides, Config};
use std::net::SocketAddr;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "killswitch")]
#[command(version)]
#[command(about = "UniFi Kill Switch - block and unblock network clients from a dashboard")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging)?;

    info!("Starting UniFi Kill Switch v{}", env!("CARGO_PKG_VERSION"));
    let config_file = cli.config.clone().or_else(Config::get_config_path);
    info!(
        config_file = config_file.as_deref().unwrap_or("defaults"),
        "Configuration loaded"
    );

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&config, &repos)?;
    if use_cases.controller.is_none() {
        warn!("UniFi controller not configured; set UNIFI_CONTROLLER_URL and UNIFI_API_KEY");
    }

    let app_state = use_cases.into_app_state(config.server.api_key.as_deref());

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()
        .map_err(|e| {
            anyhow::anyhow!(
                "Invalid bind address {}:{}: {}",
                config.server.bind_address,
                config.server.web_port,
                e
            )
        })?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
