//! Extract command - pull structured fields from a single text file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use rentum_core::{DocumentCategory, DocumentExtractor, Extraction, RentumConfig};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file containing recognized document text
    #[arg(required = true)]
    input: PathBuf,

    /// Document category (rental_agreement, id_card, property_document, other)
    #[arg(short = 't', long, default_value = "other")]
    category: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show overall extraction confidence
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        RentumConfig::from_file(std::path::Path::new(path))?
    } else {
        RentumConfig::default()
    };

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let category = DocumentCategory::parse(&args.category);
    info!(
        "Extracting {} fields from {}",
        category,
        args.input.display()
    );

    let text = fs::read_to_string(&args.input)?;

    let extractor = DocumentExtractor::new()
        .with_text_confidence(config.extraction.text_confidence)
        .with_excerpt_limit(config.extraction.excerpt_limit);
    let extraction = extractor.extract(&text, category);

    // Format output
    let output = format_extraction(&extraction, args.format)?;

    // Write output
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

    if args.show_confidence {
        println!();
        println!(
            "{} Extraction confidence: {:.1}%",
            style("ℹ").blue(),
            extraction.overall_confidence() * 100.0
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_extraction(extraction: &Extraction, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(extraction)?),
        OutputFormat::Csv => format_csv(extraction),
        OutputFormat::Text => Ok(format_text(extraction)),
    }
}

fn format_csv(extraction: &Extraction) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["field", "value"])?;
    for (field, value) in &extraction.extracted_data {
        wtr.write_record([field, value])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(extraction: &Extraction) -> String {
    let mut output = String::new();

    if extraction.extracted_data.is_empty() {
        output.push_str("No fields extracted\n");
    } else {
        output.push_str("Extracted fields:\n");
        for (field, value) in &extraction.extracted_data {
            output.push_str(&format!("  {}: {}\n", field, value));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "Overall confidence: {:.0}%\n",
        extraction.overall_confidence() * 100.0
    ));

    output
}
