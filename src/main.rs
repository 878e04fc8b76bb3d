use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use email_screen::{Config, ResultStore, Status, StatusFilter, Validator, View};
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Extract email addresses from text, then score and classify each one.
#[derive(Parser, Debug)]
#[command(name = "email-screen", version, about)]
struct Cli {
    /// Text file to scan; reads stdin when absent or "-"
    input: Option<PathBuf>,

    /// TOML file overriding the built-in lists and settings
    #[arg(short, long, env = "EMAIL_SCREEN_CONFIG")]
    config: Option<PathBuf>,

    /// Only show records with this status: all, valid, risky or invalid
    #[arg(short, long, default_value = "all")]
    status: StatusFilter,

    /// Only show addresses containing this text (case-insensitive)
    #[arg(long, default_value = "")]
    search: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Pause after each candidate, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for pseudo-random verdicts on unknown domains
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Valid,
    Json,
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Could not load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(ms) = cli.delay_ms {
        config.pacing_delay = Duration::from_millis(ms);
    }
    if cli.seed.is_some() {
        config.domain_seed = cli.seed;
    }

    let text = read_input(cli.input.as_ref())?;

    let validator = Validator::new(config);
    let mut store = ResultStore::new();
    store.replace(validator.run(&text));

    let view = View::new(cli.status, cli.search);
    match cli.format {
        Format::Csv => print!("{}", store.export_csv(&view)),
        Format::Valid => {
            let list = store.export_valid_only(&view);
            if !list.is_empty() {
                println!("{list}");
            }
        }
        Format::Json => println!("{}", store.export_json(&view)?),
        Format::Stats => print_stats(&store),
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Could not read stdin")?;
            Ok(text)
        }
    }
}

fn print_stats(store: &ResultStore) {
    let stats = store.stats();
    println!("total: {}", stats.total);
    for status in Status::ALL {
        match stats.percent(status) {
            Some(pct) => println!("{status}: {} ({pct:.1}%)", stats.count(status)),
            None => println!("{status}: {}", stats.count(status)),
        }
    }
}
