mod cli;
mod commands;
mod config;
mod formatter;

use std::process;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing based on --debug flag
    let level = if cli.global.debug { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(tool) = &cli.global.tool
        && let Err(error) = shepherd::set_cluster_tool(tool.clone())
    {
        eprintln!("Error: {}", error);
        process::exit(1);
    }

    let result = match cli.command {
        cli::Commands::Info(args) => commands::info::execute(args, &cli.global),
        cli::Commands::List(args) => commands::list::execute(args, &cli.global),
        cli::Commands::Show(args) => commands::show::execute(args, &cli.global),
        cli::Commands::Create(args) => commands::create::execute(args, &cli.global),
        cli::Commands::Delete(args) => commands::delete::execute(args, &cli.global),
        cli::Commands::Resize(args) => commands::resize::execute(args, &cli.global),
    };

    if let Err(error) = result {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}
