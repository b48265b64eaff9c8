//! Interactive console for shield coverage queries

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, warn};
use shield::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "shield", about = "Query which cities a circular shield protects")]
struct Cli {
    /// JSON file with the list of cities
    #[arg(default_value = "cities.json")]
    file: PathBuf,

    /// Radius limit for `optimal` when no radius is given
    #[arg(long, default_value_t = shield::facade::DEFAULT_MAX_RADIUS)]
    max_radius: f64,

    /// Run a single command and exit instead of starting the prompt
    #[arg(long, short)]
    command: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.max_radius.is_finite() || cli.max_radius < 0.0 {
        anyhow::bail!("--max-radius must be a finite, non-negative number, got {}", cli.max_radius);
    }

    let store = PointStore::load(&cli.file)
        .with_context(|| format!("could not load cities from {}", cli.file.display()))?;
    if store.is_empty() {
        warn!("{} contains no cities", cli.file.display());
    }

    let config = FacadeConfig { default_max_radius: cli.max_radius };
    let facade = QueryFacade::with_config(store, config);

    match cli.command {
        Some(line) => {
            let response = facade.handle_line(&line)?;
            println!("{response}");
            Ok(())
        }
        None => run_prompt(&facade),
    }
}

fn run_prompt(facade: &QueryFacade) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{} cities loaded. Type 'help' for commands.", facade.store().len());

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            debug!("end of input");
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match facade.handle_line(&line) {
            Ok(Response::Quit) => break,
            Ok(response) => println!("{response}\n"),
            Err(err) => println!("Error: {err}\n"),
        }
    }
    Ok(())
}
