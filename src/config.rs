use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::format::single_char;

/// Environment variable prefix, e.g. `COST_COMPARE__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "COST_COMPARE";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub report: ReportConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ReportConfig {
    pub title: String,
    pub currency_prefix: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                log_level: "info".to_string(),
                log_format: "text".to_string(),
            },
            report: ReportConfig {
                title: "Relatório de ROI: Humano vs IA".to_string(),
                currency_prefix: "R$".to_string(),
                thousands_separator: ".".to_string(),
                decimal_separator: ",".to_string(),
            },
            metrics: MetricsConfig {
                enabled: true,
                endpoint: "/metrics".to_string(),
            },
        }
    }
}

/// Load configuration from `path` (optional) layered with environment variables
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let defaults = Config::default();

    let config = config::Config::builder()
        .set_default("server.host", defaults.server.host)?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default("server.log_level", defaults.server.log_level)?
        .set_default("server.log_format", defaults.server.log_format)?
        .set_default("report.title", defaults.report.title)?
        .set_default("report.currency_prefix", defaults.report.currency_prefix)?
        .set_default("report.thousands_separator", defaults.report.thousands_separator)?
        .set_default("report.decimal_separator", defaults.report.decimal_separator)?
        .set_default("metrics.enabled", defaults.metrics.enabled)?
        .set_default("metrics.endpoint", defaults.metrics.endpoint)?
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("Server port must be non-zero");
    }

    if cfg.server.host.parse::<std::net::IpAddr>().is_err() {
        anyhow::bail!("Server host '{}' is not a valid IP address", cfg.server.host);
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}': expected 'text' or 'json'", other),
    }

    let thousands = single_char(&cfg.report.thousands_separator).ok_or_else(|| {
        anyhow::anyhow!(
            "Thousands separator must be a single character, got '{}'",
            cfg.report.thousands_separator
        )
    })?;
    let decimal = single_char(&cfg.report.decimal_separator).ok_or_else(|| {
        anyhow::anyhow!(
            "Decimal separator must be a single character, got '{}'",
            cfg.report.decimal_separator
        )
    })?;
    if thousands == decimal {
        anyhow::bail!("Thousands and decimal separators must differ");
    }

    if !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("Metrics endpoint '{}' must start with '/'", cfg.metrics.endpoint);
    }

    Ok(())
}
