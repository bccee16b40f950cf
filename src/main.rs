//! `versemap` - resolve Bible references into highlighted passage maps.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("versemap=debug,info")
    } else {
        EnvFilter::new("versemap=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Resolve(args) => cli::resolve::run(&cli, args)?,
        Commands::Create(args) => cli::records::create(&cli, args)?,
        Commands::List => cli::records::list(&cli)?,
        Commands::Show { id } => cli::records::show(&cli, id)?,
    }

    Ok(())
}
