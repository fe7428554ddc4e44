//! alsetto - evaluate Utakata no Alsetto check commands from the command line

use std::io::{self, BufRead};

use alsetto::{DiceSource, GameSystem, RandomSource};
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "alsetto", version, about = "Roll Utakata no Alsetto checks such as 5AL or 7AL2x10")]
struct Args {
    /// Commands to evaluate. Read one per line from stdin when omitted.
    commands: Vec<String>,

    /// Seed for a reproducible dice sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Print the command reference and exit
    #[arg(long)]
    help_text: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alsetto=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    if args.help_text {
        print!("{}", GameSystem::HELP_MESSAGE);
        return Ok(());
    }

    let mut source: Box<dyn DiceSource> = match args.seed {
        Some(seed) => Box::new(RandomSource::seeded(seed)),
        None => Box::new(RandomSource::new()),
    };

    if args.commands.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            run(&line, source.as_mut())?;
        }
    } else {
        for command in &args.commands {
            run(command, source.as_mut())?;
        }
    }

    Ok(())
}

fn run(command: &str, source: &mut dyn DiceSource) -> Result<()> {
    match GameSystem.eval(command, source)? {
        Some(output) => println!("{output}"),
        None => info!(command, "not an {} command", GameSystem::ID),
    }

    Ok(())
}
