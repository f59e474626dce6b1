//! Batch extraction command for multiple recognized-text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use rentum_core::{
    DocumentCategory, DocumentExtractor, MemoryScanRepository, RentumConfig, ScanRecord,
    ScanRepository,
};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Document category applied to every file
    #[arg(short = 't', long, default_value = "other")]
    category: String,

    /// User id recorded on every scan
    #[arg(short, long)]
    user: Option<String>,

    /// Output file for the scan records (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        RentumConfig::from_file(std::path::Path::new(path))?
    } else {
        RentumConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let category = DocumentCategory::parse(&args.category);
    let extractor = DocumentExtractor::new()
        .with_text_confidence(config.extraction.text_confidence)
        .with_excerpt_limit(config.extraction.excerpt_limit);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut repo = MemoryScanRepository::new();
    let mut failed = 0usize;

    for path in &files {
        match fs::read_to_string(path) {
            Ok(text) => {
                let extraction = extractor.extract(&text, category);
                let filename = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown")
                    .to_string();
                let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                let record =
                    ScanRecord::new(category, filename, file_size, args.user.clone(), extraction);
                let stored = repo.create(record)?;
                debug!(id = %stored.id, file = %path.display(), "processed file");
            }
            Err(e) => {
                if args.continue_on_error {
                    warn!("Failed to read {}: {}", path.display(), e);
                    failed += 1;
                } else {
                    error!("Failed to read {}: {}", path.display(), e);
                    anyhow::bail!("Batch processing failed: {}", e);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let records = repo.list(args.user.as_deref())?;
    let output = serde_json::to_string_pretty(&records)?;

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

    println!(
        "{} Processed {} files ({} failed) in {:.2}s",
        style("✓").green(),
        records.len(),
        failed,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
