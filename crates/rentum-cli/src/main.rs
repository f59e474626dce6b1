//! CLI application for Rentum document extraction and review analysis.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, extract, profile, review};

/// Rentum - extract structured data from property documents and analyze
/// tenant/landlord reviews
#[derive(Parser)]
#[command(name = "rentum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from a single recognized-text file
    Extract(extract::ExtractArgs),

    /// Extract fields from multiple recognized-text files
    Batch(batch::BatchArgs),

    /// Analyze a review submission
    Review(review::ReviewArgs),

    /// Aggregate a review history into a user profile
    Profile(profile::ProfileArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Extract(args) => extract::run(args, cli.config.as_deref()).await,
        Commands::Batch(args) => batch::run(args, cli.config.as_deref()).await,
        Commands::Review(args) => review::run(args, cli.config.as_deref()).await,
        Commands::Profile(args) => profile::run(args).await,
    }
}
