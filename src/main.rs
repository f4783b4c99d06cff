use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use air_cargo_delays::ingestion::{
    CompositeObserver, FileObserver, IngestionObserver, IngestionOptions, StdErrObserver, ingest_from_path,
};
use air_cargo_delays::processing::{DEFAULT_DELAY_THRESHOLD, DEFAULT_SAMPLE_LIMIT};
use air_cargo_delays::report::{DEFAULT_AIRLINES, DelayReport, ReportOptions};

const DEFAULT_DATA_FILE: &str = "data/cargo_data.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum OutputFormat {
    Text,
    Json,
}

/// Report delay statistics for an air cargo shipment CSV file.
#[derive(Debug, Parser)]
#[command(name = "air-cargo-delays", version, about)]
struct Args {
    /// Shipment CSV file.
    #[arg(default_value = DEFAULT_DATA_FILE)]
    path: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Number of sample rows to show.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_LIMIT)]
    sample: usize,

    /// Airline codes to report on (repeatable or comma-separated).
    #[arg(long = "airline", value_delimiter = ',', default_values = DEFAULT_AIRLINES)]
    airlines: Vec<String>,

    /// Delays strictly above this many minutes count as delayed.
    #[arg(long, default_value_t = DEFAULT_DELAY_THRESHOLD, allow_negative_numbers = true)]
    threshold: i64,

    /// Field delimiter.
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Log load events to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Append load events to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn ingestion_options(&self) -> Result<IngestionOptions, String> {
        let delimiter = u8::try_from(self.delimiter)
            .map_err(|_| format!("delimiter must be a single-byte character, got '{}'", self.delimiter))?;

        let mut observers: Vec<Arc<dyn IngestionObserver>> = Vec::new();
        if self.verbose {
            observers.push(Arc::new(StdErrObserver));
        }
        if let Some(path) = &self.log_file {
            observers.push(Arc::new(FileObserver::new(path)));
        }
        let observer: Option<Arc<dyn IngestionObserver>> = if observers.is_empty() {
            None
        } else {
            Some(Arc::new(CompositeObserver::new(observers)))
        };

        Ok(IngestionOptions {
            delimiter,
            observer,
            ..Default::default()
        })
    }

    fn report_options(&self) -> ReportOptions {
        ReportOptions {
            sample_limit: self.sample,
            airlines: self.airlines.clone(),
            delay_threshold: self.threshold,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let options = match args.ingestion_options() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let table = match ingest_from_path(&args.path, &options) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error loading {}: {e}", args.path.display());
            return ExitCode::FAILURE;
        }
    };

    let report = DelayReport::build(args.path.display().to_string(), &table, &args.report_options());
    match args.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error rendering report: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
