mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pinpoint", about = "Pick an origin on an image and measure points against it")]
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
    /// Show image dimensions and colour type
    Info(commands::info::InfoArgs),
    /// Render an origin and points onto an image in one go
    Annotate(commands::annotate::AnnotateArgs),
    /// Annotate interactively from line commands on stdin
    Session(commands::session::SessionArgs),
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
        Commands::Annotate(args) => commands::annotate::run(args),
        Commands::Session(args) => commands::session::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
