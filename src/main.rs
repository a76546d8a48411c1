// CauseConv - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. One-shot conversion of numbers given as arguments, or
// 4. the interactive session when none are given (or with --interactive)

use causeconv::app::session::Session;
use causeconv::core::classifier::classify;
use causeconv::core::gate::check_character_set;
use causeconv::core::model::ClassificationResult;
use causeconv::core::render::{self, OutputFormat};
use causeconv::platform::config::{self, PlatformPaths};
use causeconv::util;
use causeconv::util::error::{CauseConvError, InputError};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when one or more arguments were rejected by the input gate.
const EXIT_REJECTED: u8 = 2;

/// CauseConv - cause/case number converter.
///
/// Recognises FACTS (D-1-DC-YY-SEQ, compact d1dcYYSEQ, bare 5/6/7-digit
/// shelf and microfilm numbers) and civil (D-1-GN) numbers, and prints the
/// canonical form, filing year, record system, and alternate numbers.
#[derive(Parser, Debug)]
#[command(name = "causeconv", version, about)]
struct Cli {
    /// Case numbers to convert. Starts the interactive session if omitted.
    numbers: Vec<String>,

    /// Start the interactive session even when numbers are given.
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,

    /// Output format (default: config file, else text).
    #[arg(short = 'o', long = "format", value_enum)]
    format: Option<FormatArg>,

    /// Date that bounds the open-ended "2010 to current year" band.
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    as_of: Option<NaiveDate>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// `--format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // A config file named on the command line must load; the platform
    // default may be absent or broken and only produces warnings.
    let loaded = match &cli.config {
        Some(path) => config::load_required_config(path).map_err(CauseConvError::from),
        None => Ok(config::load_config(&PlatformPaths::resolve().config_file())),
    };
    let (app_config, config_warnings) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            util::logging::init(cli.debug, None);
            tracing::error!(error = %e, "CauseConv failed to start");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "CauseConv starting"
    );
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Configuration warning");
    }

    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or(app_config.output_format);
    let today = cli
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let outcome = if cli.numbers.is_empty() || cli.interactive {
        let mut converted = Ok(0);
        if !cli.numbers.is_empty() {
            converted = convert_arguments(&cli.numbers, today, format);
        }
        converted.and_then(|rejected| run_interactive(today, format).map(|()| rejected))
    } else {
        convert_arguments(&cli.numbers, today, format)
    };

    match outcome {
        Ok(0) => ExitCode::SUCCESS,
        Ok(rejected) => {
            tracing::info!(rejected, "Some inputs were rejected");
            ExitCode::from(EXIT_REJECTED)
        }
        Err(e) => {
            tracing::error!(error = %e, "CauseConv failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Convert every argument and print the results in input order.
///
/// Rejected arguments are reported on stderr and counted; the rest are
/// still printed.
fn convert_arguments(
    numbers: &[String],
    today: NaiveDate,
    format: OutputFormat,
) -> Result<usize, CauseConvError> {
    let mut results: Vec<ClassificationResult> = Vec::new();
    let mut rejected = 0usize;

    for raw in numbers.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        match check_character_set(raw) {
            Ok(()) => results.push(classify(raw, today)),
            Err(e) => {
                report_rejection(&e);
                rejected += 1;
            }
        }
    }

    let items: Vec<(u64, &ClassificationResult)> = results
        .iter()
        .enumerate()
        .map(|(i, result)| (i as u64 + 1, result))
        .collect();

    let stdout = std::io::stdout();
    render::render(format, stdout.lock(), &items)?;
    Ok(rejected)
}

fn run_interactive(today: NaiveDate, format: OutputFormat) -> Result<(), CauseConvError> {
    let stdin = std::io::stdin();
    let mut session = Session::new(today, format);
    if !stdin.is_terminal() {
        session = session.without_prompt();
    }
    session.run(stdin.lock(), std::io::stdout().lock())?;
    Ok(())
}

fn report_rejection(error: &InputError) {
    tracing::debug!(error = %error, "Input rejected");
    eprintln!("{error}");
}
