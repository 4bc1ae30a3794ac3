use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cost_compare::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();
    let command = args.get_command();

    // The server initializes tracing from [server] settings once its config is loaded
    if !matches!(command, cli::Commands::Start) {
        init_tracing("warn", "text");
    }

    // Dispatch to appropriate command handler
    match command {
        cli::Commands::Start => {
            commands::start::execute(args.config).await?;
        }
        cli::Commands::Calc { fields, json } => {
            commands::calc::execute(&args.config, &fields, json)?;
        }
        cli::Commands::Test => {
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("cost-compare v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
