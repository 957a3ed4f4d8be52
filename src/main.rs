use anyhow::{Context, Result};
use clap::Parser;
use kthsel::{parse_values, resolve_rank, select, Strategy};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

// --- Configuration Constants ---
const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "debug";

// --- CLI Arguments ---

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the k-th largest of a list of integers", long_about = None)]
struct Cli {
    #[arg(allow_negative_numbers = true, help = "Rank to select, 1 being the largest. Duplicates count as separate ranks.")]
    k: i64,

    #[arg(allow_negative_numbers = true, help = "Values to select from. Read from --input or stdin when omitted.")]
    values: Vec<i64>,

    #[arg(short, long, conflicts_with = "values", help = "Read values from a file (whitespace/comma separated, or a JSON array).")]
    input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Strategy::Heap, help = "Selection algorithm.")]
    strategy: Strategy,

    #[arg(long, help = "Print the result as a JSON object.")]
    json: bool,

    #[arg(short, long, help = "Enable debug logging (RUST_LOG takes precedence).")]
    verbose: bool,
}

// --- Utility Functions ---

/// Values come from arguments, then `--input`, then `stdin`.
fn load_values(cli: &Cli, mut stdin: impl Read) -> Result<Vec<i64>> {
    if !cli.values.is_empty() {
        debug!("Using {} values from arguments", cli.values.len());
        return Ok(cli.values.clone());
    }
    let text = match &cli.input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read input file: {:?}", path))?,
        None => {
            debug!("Reading values from stdin");
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };
    let source = cli.input.as_ref().map_or_else(|| "stdin".to_string(), |p| format!("{:?}", p));
    parse_values(&text).with_context(|| format!("Failed to parse values from {}", source))
}

fn run(cli: &Cli, stdin: impl Read) -> Result<String> {
    let values = load_values(cli, stdin)?;
    let rank = resolve_rank(cli.k, values.len()).context("Cannot select")?;
    let selection = select(&values, rank, cli.strategy).context("Selection failed")?;
    info!("Rank {} of {} values is {}", selection.k, selection.len, selection.value);

    if cli.json {
        serde_json::to_string(&selection).context("Failed to serialize result")
    } else {
        Ok(selection.value.to_string())
    }
}

// --- Main Function ---

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = if cli.verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
    debug!("Parsed arguments: {:?}", cli);

    println!("{}", run(&cli, io::stdin().lock())?);
    Ok(())
}
