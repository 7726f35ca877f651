mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "runblob", about = "Color blob extraction from classified images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show label image dimensions and class histogram
    Info(commands::info::InfoArgs),
    /// Extract and list regions per color class
    Regions(commands::regions::RegionsArgs),
    /// Time repeated frames over the same arenas
    Bench(commands::bench::BenchArgs),
    /// Print or save the default config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Regions(args) => commands::regions::run(args),
        Commands::Bench(args) => commands::bench::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
