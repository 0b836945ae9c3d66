//! CLI entry point for the laptop pricing analysis.

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use price_profiling::{
    AnalysisConfig, AnalysisReport, ChartRenderer, SourceEncoding, company_price_averages,
    derive_storage_column, load_dataset, most_expensive_company, normalize_os_column,
    price_outlier_summary, storage_sample,
};
use std::path::Path;
use tracing::info;

/// CLI-compatible source encoding enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliEncoding {
    /// ISO-8859-1 (the encoding the dataset ships in)
    Latin1,
    /// Strict UTF-8
    Utf8,
}

impl From<CliEncoding> for SourceEncoding {
    fn from(cli: CliEncoding) -> Self {
        match cli {
            CliEncoding::Latin1 => SourceEncoding::Latin1,
            CliEncoding::Utf8 => SourceEncoding::Utf8,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory analysis of the laptop pricing dataset",
    long_about = "Computes per-company average prices, normalizes the OpSys column,\n\
                  detects price outliers with the IQR method, derives storage types\n\
                  from the Memory column and renders three charts.\n\n\
                  EXAMPLES:\n  \
                  # Full analysis with charts\n  \
                  price-profiling -i laptop_price.csv\n\n  \
                  # Console analysis only, no images\n  \
                  price-profiling -i laptop_price.csv --no-charts\n\n  \
                  # Machine-readable output\n  \
                  price-profiling -i laptop_price.csv --json | jq .price_outliers"
)]
struct Args {
    /// Path to the laptop pricing CSV file
    #[arg(short, long)]
    input: String,

    /// Output directory for charts and reports
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Encoding tried first when decoding the file
    #[arg(long, value_enum, default_value = "latin1")]
    encoding: CliEncoding,

    /// IQR multiplier for the outlier bounds
    #[arg(long, default_value = "1.5")]
    iqr_multiplier: f64,

    /// Number of bins in the price histograms
    #[arg(long, default_value = "30")]
    bins: usize,

    /// Skip chart rendering
    #[arg(long)]
    no_charts: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and the final summary)
    #[arg(short, long)]
    quiet: bool,

    /// Output the report as JSON to stdout instead of the console summary
    ///
    /// Disables all logs; only the JSON report is written to stdout.
    #[arg(long)]
    json: bool,

    /// Write the JSON report to the output directory
    ///
    /// The report is saved as <input_stem>_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    let config = AnalysisConfig::builder()
        .encoding(args.encoding.into())
        .iqr_multiplier(args.iqr_multiplier)
        .histogram_bins(args.bins)
        .output_dir(&args.output)
        .render_charts(!args.no_charts)
        .build()
        .map_err(|e| anyhow!("{}", e))?;

    let report = run_analysis(&args, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.emit_report {
        let path = report.write_to_file(Path::new(&args.output))?;
        info!("Report written to: {}", path.display());
    }

    print_summary(&report, &args);
    Ok(())
}

/// Run the analysis steps in the order the original study performed them.
fn run_analysis(args: &Args, config: &AnalysisConfig) -> Result<AnalysisReport> {
    info!("Loading dataset from: {}", args.input);
    let mut df = load_dataset(Path::new(&args.input), config.encoding)?;
    let shape = (df.height(), df.width());

    let charts = ChartRenderer::new(config);
    let mut chart_files = Vec::new();

    // Price distribution over the raw data
    if config.render_charts {
        chart_files.push(charts.render_price_distribution(&df)?);
    }

    // Average price per company
    let company_averages = company_price_averages(&df)?;
    let most_expensive = most_expensive_company(&company_averages).map(|a| a.company.clone());

    // Operating-system normalization
    let os_normalization = normalize_os_column(&mut df)?;

    // Per-OS distributions and the RAM/price relationship
    if config.render_charts {
        chart_files.push(charts.render_os_facets(&df)?);
        chart_files.push(charts.render_ram_boxplot(&df)?);
    }

    // IQR outlier detection on the price column
    let price_outliers = price_outlier_summary(&df, config.iqr_multiplier)?;

    // Storage type derived from the Memory description
    derive_storage_column(&mut df)?;
    let sample = storage_sample(&df, config.sample_rows)?;

    Ok(AnalysisReport {
        generated_at: AnalysisReport::timestamp(),
        input_file: args.input.clone(),
        shape,
        encoding_used: config.encoding.label().to_string(),
        company_averages,
        most_expensive_company: most_expensive,
        os_normalization,
        price_outliers,
        storage_sample: sample,
        chart_files: chart_files
            .into_iter()
            .map(|p| p.display().to_string())
            .collect(),
    })
}

/// Print the human-readable summary.
///
/// This uses `println!` intentionally for user-facing output; unlike the
/// `info!` logs it stays visible under `--quiet`.
fn print_summary(report: &AnalysisReport, args: &Args) {
    println!("Dataset loaded successfully.");
    println!("Dataset shape: ({}, {})", report.shape.0, report.shape.1);

    println!("\n--- Average Price per Company ---");
    for avg in &report.company_averages {
        println!(
            "{:<16} {:>10.2}  ({} laptops)",
            avg.company, avg.average_price, avg.laptop_count
        );
    }
    if let Some(ref company) = report.most_expensive_company {
        println!(
            "\nThe company with the most expensive laptops on average is: {}",
            company
        );
    }

    println!(
        "\nUnique OpSys before fix: {:?}",
        report.os_normalization.values_before
    );
    println!(
        "Unique OpSys after fix: {:?}",
        report.os_normalization.values_after
    );

    println!("\nOutlier Detection (IQR Method):");
    println!(
        "Prices above {:.2} Euro are considered outliers.",
        report.price_outliers.upper_bound
    );
    println!(
        "Number of outliers detected: {}",
        report.price_outliers.outlier_count
    );

    println!(
        "\nFirst {} rows with new 'Storage Type' column:",
        report.storage_sample.len()
    );
    println!("{:<32} {}", "Memory", "Storage Type");
    for row in &report.storage_sample {
        println!("{:<32} {}", row.memory, row.storage_type);
    }

    if !report.chart_files.is_empty() {
        println!("\nCharts written to {}:", args.output);
        for file in &report.chart_files {
            println!("  - {}", file);
        }
    }
}
