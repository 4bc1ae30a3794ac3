use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cost-compare", version, about = "Human vs AI call-center cost comparison")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", env = "COST_COMPARE_CONFIG", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the report web server (default)
    Start,

    /// Compute a report in the terminal
    Calc {
        /// Inputs as FIELD=VALUE, e.g. salary_monthly=2500 setup_fee=5000
        #[arg(value_name = "FIELD=VALUE")]
        fields: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Test configuration file validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
