//! Command-line interface for focus-gen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Five AWS rows for a small organization, printed as JSON Lines
//! focus-gen generate --profile greenfield --providers aws --row-count 5
//!
//! # A six-month linear growth trend across two providers
//! focus-gen generate \
//!   --profile enterprise --distribution data-intensive \
//!   --providers aws,gcp --row-count 200 \
//!   --months 6 --scenario linear --param growthRate=10 \
//!   --output cur.jsonl
//!
//! # One dataset file per provider
//! focus-gen generate --providers aws,azure,gcp --row-count 100 \
//!   --output cur.jsonl --split-providers
//! ```
//!
//! ## Validate
//! ```bash
//! focus-gen validate --input cur.jsonl
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use focus_core::{
    BillingMonth, CloudProvider, Distribution, FocusRecord, GenerationRequest, Profile,
    TrendOptions, TrendScenario,
};
use focus_generator::{DatasetGenerator, DatasetSummary};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "focus-gen")]
#[command(
    about = "A tool for generating and validating synthetic FOCUS-conformant cost and usage data"
)]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic FOCUS dataset as JSON Lines
    Generate(GenerateArgs),
    /// Validate a JSON Lines FOCUS dataset
    Validate(ValidateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Organization profile controlling cost magnitude
    #[arg(long, value_enum, default_value_t = Profile::Greenfield)]
    profile: Profile,

    /// Service mix bias
    #[arg(long, value_enum, default_value_t = Distribution::EvenlyDistributed)]
    distribution: Distribution,

    /// Cloud providers to bill from (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',', default_value = "aws")]
    providers: Vec<CloudProvider>,

    /// Number of rows per billing period
    #[arg(long, default_value = "100")]
    row_count: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// First billing month (YYYY-MM)
    #[arg(long, default_value = "2024-01")]
    start_month: BillingMonth,

    /// Generate a multi-month trend spanning this many months (2-12)
    #[arg(long)]
    months: Option<u32>,

    /// Trend shape for multi-month generation
    #[arg(long, value_enum, default_value_t = TrendScenario::Linear)]
    scenario: TrendScenario,

    /// Trend parameter as NAME=VALUE (repeatable), e.g. growthRate=10
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_parameter)]
    parameters: Vec<(String, f64)>,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Write one dataset file per provider next to --output
    #[arg(long, requires = "output")]
    split_providers: bool,
}

#[derive(Args)]
struct ValidateArgs {
    /// JSON Lines file of FOCUS records to validate
    #[arg(long, short = 'i')]
    input: PathBuf,
}

fn parse_parameter(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let value: f64 = value
        .parse()
        .map_err(|_| format!("parameter '{name}' value '{value}' is not a number"))?;
    Ok((name.to_string(), value))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Validate(args) => validate(args),
    }
}

fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut request = GenerationRequest::new(
        args.profile,
        args.distribution,
        args.providers,
        args.row_count,
    )
    .with_seed(args.seed)
    .with_start_month(args.start_month);

    if let Some(months) = args.months {
        let mut trend = TrendOptions::new(months, args.scenario);
        trend.parameters = args.parameters.into_iter().collect::<BTreeMap<_, _>>();
        request = request.with_trend(trend);
    }

    let generator = DatasetGenerator::new(request).context("invalid generation request")?;

    if args.split_providers {
        let output = args.output.expect("clap enforces --output");
        for (provider, records) in generator.generate_per_provider()? {
            let path = provider_path(&output, provider);
            write_records(&records, Some(&path))?;
            info!(provider = %provider, path = %path.display(), "wrote provider dataset");
            println!("{}: {}", path.display(), DatasetSummary::for_records(&records));
        }
        return Ok(());
    }

    let records = generator.generate()?;
    write_records(&records, args.output.as_deref())?;
    if let Some(path) = &args.output {
        info!(path = %path.display(), "wrote dataset");
        println!("{}: {}", path.display(), DatasetSummary::for_records(&records));
    }
    Ok(())
}

/// `cur.jsonl` + AWS -> `cur-aws.jsonl`.
fn provider_path(output: &Path, provider: CloudProvider) -> PathBuf {
    let stem = output.file_stem().unwrap_or_default().to_string_lossy();
    let name = match output.extension() {
        Some(ext) => format!(
            "{stem}-{}.{}",
            provider.as_str().to_lowercase(),
            ext.to_string_lossy()
        ),
        None => format!("{stem}-{}", provider.as_str().to_lowercase()),
    };
    output.with_file_name(name)
}

fn write_records(records: &[FocusRecord], output: Option<&Path>) -> anyhow::Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to create {}", path.display())
        })?)),
        None => Box::new(std::io::stdout().lock()),
    };

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

fn validate(args: ValidateArgs) -> anyhow::Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;

    let mut records = Vec::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: FocusRecord = serde_json::from_str(&line)
            .with_context(|| format!("malformed record on line {}", number + 1))?;
        records.push(record);
    }
    info!(records = records.len(), "validating dataset");

    let report = focus_validate::validate(&records);
    for violation in &report.violations {
        println!(
            "row {} {}: [{}] {}",
            violation.row,
            violation.column.unwrap_or("-"),
            violation.rule,
            violation.message
        );
    }
    for warning in &report.warnings {
        println!(
            "warning: row {} {}: [{}] {}",
            warning.row,
            warning.column.unwrap_or("-"),
            warning.rule,
            warning.message
        );
    }
    println!("{}", report.summary());

    if !report.valid() {
        anyhow::bail!("dataset failed validation");
    }
    Ok(())
}
