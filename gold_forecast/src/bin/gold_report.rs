//! Build the gold report from the built-in dataset and print it as JSON.
//!
//! Logs go to stderr and honour `RUST_LOG`; the report goes to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gold_forecast::utils::parse_date;
use gold_forecast::{
    Dataset, ForecastMethod, ForecastPoint, GoldStory, MetricsReport, ReportConfig, Result,
};

#[derive(Parser, Debug)]
#[command(name = "gold_report", version, about)]
struct Args {
    /// JSON report configuration; defaults apply to missing keys.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Last forecast date (YYYY-MM-DD or YYYY-MM), overrides the config.
    #[arg(long)]
    end: Option<String>,

    /// Forecast method: seasonal or average_growth.
    #[arg(long)]
    method: Option<ForecastMethod>,

    /// Derive volatility from prices instead of the yearly series.
    #[arg(long)]
    derive_volatility: bool,

    /// Include every series in the output, not just the summary.
    #[arg(long)]
    with_series: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Print the metrics table instead of JSON.
    #[arg(long, conflicts_with_all = ["with_series", "pretty"])]
    table: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    model: &'a str,
    last_forecast: Option<&'a ForecastPoint>,
    metrics: &'a MetricsReport,
}

fn load_config(args: &Args) -> Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::from_json_file(path)?,
        None => ReportConfig::default(),
    };

    if let Some(end) = &args.end {
        config.forecast_end = parse_date(end)?;
    }
    if let Some(method) = args.method {
        config.method = method;
    }
    if args.derive_volatility {
        config.derive_volatility = true;
    }

    Ok(config)
}

fn run(args: &Args) -> Result<String> {
    let config = load_config(args)?;
    let dataset = Dataset::builtin()?;
    let story = GoldStory::build(&dataset, &config)?;

    info!(
        model = %story.model,
        forecast_end = %config.forecast_end,
        points = story.gold.points().len(),
        "report built"
    );

    if args.table {
        return Ok(story.metrics.to_string());
    }

    let json = if args.with_series {
        to_json(&story, args.pretty)?
    } else {
        let summary = Summary {
            model: &story.model,
            last_forecast: story.last_forecast(),
            metrics: &story.metrics,
        };
        to_json(&summary, args.pretty)?
    };

    Ok(json)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to build report");
            ExitCode::FAILURE
        }
    }
}
