use anyhow::Result;
use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use crate::config::{self, Config};

/// Shutdown signal types
#[derive(Debug, Clone, Copy)]
pub enum ShutdownSignal {
    /// Graceful shutdown (drain connections)
    Graceful,
}

/// Setup signal handlers for the server
///
/// Returns a broadcast sender for shutdown signals and a join handle for the signal task
///
/// Handles:
/// - SIGTERM/SIGINT: Graceful shutdown
/// - SIGHUP: Configuration reload from `config_path`
#[cfg(unix)]
pub fn setup_signal_handlers(
    config: Arc<ArcSwap<Config>>,
    config_path: PathBuf,
) -> (
    broadcast::Sender<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
) {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        let (mut sigterm, mut sigint, mut sighup) = match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        ) {
            (Ok(term), Ok(int), Ok(hup)) => (term, int, hup),
            _ => {
                error!("Failed to install signal handlers; shutdown via signal unavailable");
                return;
            }
        };

        loop {
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("SIGTERM received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sigint.recv() => {
                    info!("SIGINT received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sighup.recv() => {
                    info!("SIGHUP received, reloading configuration");
                    if let Err(e) = reload_config(&config, &config_path) {
                        error!("Failed to reload configuration: {}", e);
                    } else {
                        info!("Configuration reloaded successfully");
                    }
                }
            }
        }
    });

    (shutdown_tx, handle)
}

/// Windows placeholder - only Ctrl+C, no reload
#[cfg(not(unix))]
pub fn setup_signal_handlers(
    _config: Arc<ArcSwap<Config>>,
    _config_path: PathBuf,
) -> (
    broadcast::Sender<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
) {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received, initiating shutdown");
                let _ = tx_clone.send(ShutdownSignal::Graceful);
            }
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
            }
        }
    });

    (shutdown_tx, handle)
}

/// Reload configuration from disk and swap it in atomically
///
/// An invalid file is rejected and the running configuration stays in place.
pub fn reload_config(config: &ArcSwap<Config>, config_path: &Path) -> Result<()> {
    let new_config = config::load_config(config_path)?;
    let merged = merge_reloaded(&config.load(), new_config);
    config.store(Arc::new(merged));
    Ok(())
}

/// Only the `[report]` section applies live; the listener and recorder are
/// already bound, so `[server]` and `[metrics]` keep their running values.
fn merge_reloaded(current: &Config, new_config: Config) -> Config {
    if new_config.server != current.server {
        warn!("[server] changes require a restart and were not applied");
    }
    if new_config.metrics != current.metrics {
        warn!("[metrics] changes require a restart and were not applied");
    }

    Config {
        server: current.server.clone(),
        report: new_config.report,
        metrics: current.metrics.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_setup_signal_handlers() {
        let config = Arc::new(ArcSwap::from_pointee(Config::default()));
        let (shutdown_tx, _handle) = setup_signal_handlers(config, PathBuf::from("config.toml"));

        // Should be able to subscribe to shutdown signals
        let mut rx = shutdown_tx.subscribe();

        shutdown_tx.send(ShutdownSignal::Graceful).unwrap();

        let received = rx.recv().await.unwrap();
        assert!(matches!(received, ShutdownSignal::Graceful));
    }

    #[test]
    fn test_merge_keeps_running_server_section() {
        let current = Config::default();
        let mut new_config = Config::default();
        new_config.server.port = 9999;
        new_config.report.currency_prefix = "US$".to_string();

        let merged = merge_reloaded(&current, new_config);
        assert_eq!(merged.server.port, 5000);
        assert_eq!(merged.report.currency_prefix, "US$");
    }

    #[test]
    fn test_reload_config_applies_report_section() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[report]\ntitle = \"Comparativo\"").unwrap();

        let config = ArcSwap::from_pointee(Config::default());
        reload_config(&config, file.path()).unwrap();

        assert_eq!(config.load().report.title, "Comparativo");
    }

    #[test]
    fn test_reload_config_rejects_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[report]\ndecimal_separator = \".\"").unwrap();

        let config = ArcSwap::from_pointee(Config::default());
        assert!(reload_config(&config, file.path()).is_err());
        assert_eq!(config.load().report.decimal_separator, ",");
    }
}
