//! Review command - score a single review submission.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use rentum_core::{RentumConfig, ReviewAnalyzer, ReviewSubmission};

/// Arguments for the review command.
#[derive(Args)]
pub struct ReviewArgs {
    /// Input file containing the review submission as JSON
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print only the narrative summary
    #[arg(long)]
    summary_only: bool,
}

pub async fn run(args: ReviewArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        RentumConfig::from_file(std::path::Path::new(path))?
    } else {
        RentumConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let data = fs::read_to_string(&args.input)?;
    let submission: ReviewSubmission = serde_json::from_str(&data)?;

    let issues = submission.validate();
    if !issues.is_empty() {
        eprintln!("{}", style("Submission issues:").yellow());
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
    }

    info!("Analyzing review from {}", args.input.display());

    let analyzer = ReviewAnalyzer::new().with_flag_limit(config.analysis.flag_limit);
    let analysis = analyzer.analyze(&submission);

    let output = if args.summary_only {
        analysis.summary.clone()
    } else {
        serde_json::to_string_pretty(&analysis)?
    };

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
