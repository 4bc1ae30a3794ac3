use anyhow::Result;
use colored::Colorize;
use cost_compare::{config, init_tracing, server};
use std::path::PathBuf;
use tracing::info;

/// Execute the start command
///
/// Loads configuration, initializes logging from it, then serves until a
/// shutdown signal arrives.
pub async fn execute(config_path: PathBuf) -> Result<()> {
    println!("{}", "Starting cost comparison server...".green());

    let cfg = config::load_config(&config_path)?;
    init_tracing(&cfg.server.log_level, &cfg.server.log_format);

    info!(
        config = %config_path.display(),
        metrics = cfg.metrics.enabled,
        "Configuration loaded"
    );

    // Blocks until shutdown
    server::start_server(cfg, config_path).await?;

    Ok(())
}
