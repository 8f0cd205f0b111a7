//! pathstate - run state store scripts against an in-memory path store.
//!
//! Reads one command per line from a script file or stdin, executes it
//! against a single store, and prints the results together with any
//! notifications produced by `state watch` subscriptions.

use std::{
    error::Error,
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process,
};

use clap::Parser;
use pathstate::{
    cli::{CliService, Session, formatting::format_error},
    config::Config,
    store::PathStore,
    tracing_config,
};
use tracing::{Level, info, span};

#[derive(Parser)]
#[command(name = "pathstate")]
#[command(about = "Run state store scripts against an in-memory path store")]
struct Cli {
    /// Configuration file (defaults to $XDG_CONFIG_HOME/pathstate/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Script to run; reads stdin when omitted
    script: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(2);
        }
    };

    tracing_config::init(config.general.log_level)?;
    let _span = span!(Level::INFO, "pathstate").entered();

    let store = PathStore::with_options(config.store.clone());
    let service = CliService::new(store, config);

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            info!("Running script {}", path.display());
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(io::stdin().lock()),
    };

    let report = Session::new(&service).run(input, &mut io::stdout().lock(), &mut io::stderr())?;
    info!(executed = report.executed, failed = report.failed, "Script finished");

    if !report.succeeded() {
        process::exit(1);
    }

    Ok(())
}
