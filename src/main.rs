//! Generate synthetic test payment cards from the command line
//!
//! # Usage
//!
//! Ten Visa cards with no optional fields:
//! ```bash
//! testcardgen 411111
//! ```
//!
//! Five Mastercard cards with tokens and dynamic CVVs, saved to a file:
//! ```bash
//! testcardgen 510510 -n 5 --token --dynamic-cvv -o cards.txt
//! ```
//!
//! Save to a timestamped file such as `test-cards-20261018-143000.txt`:
//! ```bash
//! testcardgen 700000 -n 20 --did --save
//! ```
//!
//! Reproducible JSON output:
//! ```bash
//! testcardgen 601100 -n 3 --all --seed 42 --format json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use testcardgen::{
    format_cards, format_cards_json, save_text, CardGenerator, FeatureFlags, GenerationRequest,
    GeneratorError, DEFAULT_BATCH_SIZE,
};
use testcardgen::utils::{self, suggested_file_name};

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Generate synthetic payment-card records for software testing
#[derive(Parser)]
#[command(name = "testcardgen", version)]
struct Args {
    /// Issuer identification prefix (6-8 digits), e.g. 411111
    prefix: String,

    /// Number of cards (0-200)
    #[arg(short = 'n', long, default_value_t = DEFAULT_BATCH_SIZE)]
    count: usize,

    /// Add payment tokens (digital wallets / stablecoins)
    #[arg(long)]
    token: bool,

    /// Add 3-D Secure codes
    #[arg(long)]
    three_ds: bool,

    /// Add biometric tokens
    #[arg(long)]
    biometric: bool,

    /// Use hour-based dynamic CVVs
    #[arg(long)]
    dynamic_cvv: bool,

    /// Add decentralized identifiers
    #[arg(long)]
    did: bool,

    /// Enable every optional field
    #[arg(long)]
    all: bool,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also save the output to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save to a timestamped .txt file in the current directory
    #[arg(long, conflicts_with = "output")]
    save: bool,

    /// Log generation details to stderr, on top of any RUST_LOG filter
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn save_path(&self) -> Option<PathBuf> {
        match (&self.output, self.save) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from(suggested_file_name(&utils::now()))),
            (None, false) => None,
        }
    }

    fn features(&self) -> FeatureFlags {
        if self.all {
            return FeatureFlags::all();
        }
        FeatureFlags {
            token: self.token,
            three_ds: self.three_ds,
            biometric: self.biometric,
            dynamic_cvv: self.dynamic_cvv,
            did: self.did,
        }
    }
}

/// Exit status for invalid input
const EXIT_INVALID_INPUT: u8 = 2;

/// Exit status for generation and save failures
const EXIT_FAILURE: u8 = 1;

/// Log filter from `RUST_LOG` (default `warn`); `-v` raises it to at least debug
fn log_filter(env_filter: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = env_filter
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let below_debug = filter.max_level_hint().is_none_or(|level| level < LevelFilter::DEBUG);
    if verbose && below_debug {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn init_logging(verbose: bool) {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env_filter.as_deref(), verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Generated batch and its rendering
struct Rendered {
    card_count: usize,
    text: String,
}

fn render(args: &Args) -> Result<Rendered, GeneratorError> {
    let mut generator = match args.seed {
        Some(seed) => CardGenerator::seeded(seed),
        None => CardGenerator::from_entropy(),
    };

    let request = GenerationRequest::new(&args.prefix, args.count, args.features());
    let cards = generator.generate(&request)?;

    let text = match args.format {
        OutputFormat::Text => format_cards(&cards),
        OutputFormat::Json => format_cards_json(&cards)? + "\n",
    };

    Ok(Rendered {
        card_count: cards.len(),
        text,
    })
}

/// Save the rendered batch. Returns false when the batch was empty and
/// nothing was written, whatever the output format.
fn save_rendered(path: &Path, rendered: &Rendered) -> Result<bool, GeneratorError> {
    if rendered.card_count == 0 {
        return Ok(false);
    }
    save_text(path, &rendered.text)?;
    Ok(true)
}

/// Process exit status for an error
fn exit_status(err: &GeneratorError) -> u8 {
    if err.is_invalid_input() {
        EXIT_INVALID_INPUT
    } else {
        EXIT_FAILURE
    }
}

fn exit_code(err: &GeneratorError) -> ExitCode {
    ExitCode::from(exit_status(err))
}

/// One-line message for an error, labeled by kind
fn error_message(err: &GeneratorError) -> String {
    let label = match err {
        GeneratorError::InvalidInput(_) => "Input Error",
        GeneratorError::Save(_) => "Save Error",
        _ => "Error",
    };
    format!("{}: {}", label, err.detail())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!(prefix = %args.prefix, count = args.count, "starting");

    let rendered = match render(&args) {
        Ok(rendered) => rendered,
        Err(e) => {
            if !e.is_invalid_input() {
                error!(category = e.category(), "generation failed");
            }
            eprintln!("{}", error_message(&e));
            return exit_code(&e);
        }
    };

    print!("{}", rendered.text);

    if let Some(path) = args.save_path() {
        match save_rendered(&path, &rendered) {
            Ok(true) => eprintln!("File saved successfully: {}", path.display()),
            Ok(false) => warn!(path = %path.display(), "no cards generated, nothing saved"),
            Err(e) => {
                eprintln!("{}", error_message(&e));
                return exit_code(&e);
            }
        }
    }

    ExitCode::SUCCESS
}
