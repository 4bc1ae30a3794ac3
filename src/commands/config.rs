use anyhow::Result;
use colored::Colorize;
use cost_compare::config;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Prints the effective configuration (file + environment + defaults) as TOML
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not found, defaults + environment)", config_path.display())
    };

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Source: {}", source);
    println!("  Listen: {}:{}", cfg.server.host, cfg.server.port);
    println!("  Currency: {}", cfg.report.currency_prefix);

    info!("Configuration validation successful");
    Ok(())
}
