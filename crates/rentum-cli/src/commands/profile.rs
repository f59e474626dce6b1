//! Profile command - aggregate a review history into a user profile.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use rentum_core::{aggregate_profile, ReviewRecord};

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    /// Input file containing a JSON array of review records
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ProfileArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let data = fs::read_to_string(&args.input)?;
    let reviews: Vec<ReviewRecord> = serde_json::from_str(&data)?;

    info!("Aggregating profile from {} reviews", reviews.len());

    let profile = aggregate_profile(&reviews);
    let output = serde_json::to_string_pretty(&profile)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}
