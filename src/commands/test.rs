use anyhow::Result;
use colored::Colorize;
use cost_compare::config;
use std::path::Path;
use tracing::info;

/// Execute the test command
///
/// This validates the configuration file without starting the server
pub fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Testing configuration...".yellow());
    info!("Loading and validating configuration");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration test successful".green());
    println!();

    println!("{}", "Configuration Summary:".bold());
    println!("  {}: {}:{}", "Server".cyan(), cfg.server.host, cfg.server.port);
    println!("  {}: {}", "Log Level".cyan(), cfg.server.log_level);
    println!("  {}: {}", "Log Format".cyan(), cfg.server.log_format);
    println!();

    println!("  {}: {}", "Report Title".cyan(), cfg.report.title);
    println!(
        "  {}: {} (thousands '{}', decimal '{}')",
        "Currency".cyan(),
        cfg.report.currency_prefix,
        cfg.report.thousands_separator,
        cfg.report.decimal_separator
    );
    println!();

    println!("  {}: {}", "Metrics".cyan(), if cfg.metrics.enabled {
        "enabled".green()
    } else {
        "disabled".red()
    });
    if cfg.metrics.enabled {
        println!("    Endpoint: {}", cfg.metrics.endpoint);
    }

    info!("Configuration validation completed successfully");
    Ok(())
}
