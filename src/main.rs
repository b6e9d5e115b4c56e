mod commands;
mod config;
mod logging;
mod session;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use agenda_core::Journal;
use session::Session;

#[derive(Parser)]
#[command(name = "agenda", version)]
#[command(about = "Keep a personal list of dated events from a line-oriented prompt")]
struct Cli {
    /// Read commands from this file instead of standard input
    script: Option<PathBuf>,

    /// Database file used by Save, Read and Clear (overrides the config file)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Config file (defaults to ~/.config/agenda/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Don't print the usage banner on startup
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_config(cli.config.as_deref())?;
    let db_path = cfg.database_path(cli.db.as_deref());
    ensure_parent_dir(&db_path)?;
    debug!(db = %db_path.display(), "resolved database path");

    let mut session = Session::new(Journal::new(db_path), cfg.description_join());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cfg.banner && !cli.quiet {
        writeln!(out, "{}", commands::USAGE)?;
    }

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    session.run(input, &mut out)?;
    debug!(events = session.index().len(), "events in memory at exit");
    Ok(())
}

/// Create the database's parent directory so Save and Clear can open it.
fn ensure_parent_dir(path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
    }
    Ok(())
}
