//! costar: six-degrees queries over a performer/production dataset.
//!
//! Loads three pipe-delimited tables into a co-star graph, builds the
//! initial center's shortest-path tree, and drops into an interactive
//! shell for path, separation, and ranking queries.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use costar_cli::{load_graph, CliError, CliResult, GameConfig, Manifest, Session, Shell};

/// Six-degrees-of-separation queries over a co-star graph.
#[derive(Parser)]
#[command(name = "costar")]
#[command(version)]
#[command(about = "Shortest-path separation queries over performer/production data")]
struct Cli {
    /// Performer directory table (id|name per line)
    #[arg(long, value_name = "FILE")]
    performers: Option<PathBuf>,

    /// Production directory table (id|title per line)
    #[arg(long, value_name = "FILE")]
    productions: Option<PathBuf>,

    /// Credits table (production_id|performer_id per line)
    #[arg(long, value_name = "FILE")]
    credits: Option<PathBuf>,

    /// Initial center of the universe
    #[arg(long)]
    center: Option<String>,

    /// JSON manifest supplying any of the inputs above
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        error!(%err, "exiting");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // stdout belongs to the shell; diagnostics go to stderr.
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    let manifest = match &cli.config {
        Some(path) => Manifest::load(path)?,
        None => Manifest::default(),
    };
    let config = GameConfig::resolve(
        manifest,
        cli.performers,
        cli.productions,
        cli.credits,
        cli.center,
    )?;

    let graph = load_graph(&config.performers, &config.productions, &config.credits)?;
    let session = Session::new(graph, config.center)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(session)
        .run(stdin.lock(), stdout.lock())
        .map_err(|source| CliError::Io {
            path: "<stdio>".to_string(),
            source,
        })
}
