use std::env;
use std::error::Error;
use std::io;
use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use smackoff::data::{smackoff_30, SMACKOFF_SEED};
use smackoff::display::pretty_name;
use smackoff::odds::{convert, Distribution, Entry};
use smackoff::print::tabulate;
use smackoff::reveal::{Reveal, TickerTape};
use smackoff::selector;

const MAX_COUNTDOWN: u32 = 60;
const MAX_DENSITY: usize = 10_000;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    #[clap(subcommand)]
    command: Option<Command>,

    /// output format
    #[clap(short = 'f', long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// seed for the winner draw
    #[clap(short = 's', long, default_value_t = SMACKOFF_SEED)]
    seed: u64,

    /// draw from the clock rather than the seed
    #[clap(long)]
    unseeded: bool,

    /// countdown length in seconds
    #[clap(short = 'c', long, default_value_t = 3)]
    countdown: u32,

    /// number of ticker-tape streamers
    #[clap(long, default_value_t = 220)]
    density: usize,

    /// skip the ticker-tape celebration
    #[clap(long)]
    no_celebrate: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.countdown == 0 || self.countdown > MAX_COUNTDOWN {
            bail!("countdown must be between 1 and {MAX_COUNTDOWN} seconds");
        }
        if self.density > MAX_DENSITY {
            bail!("density may not exceed {MAX_DENSITY}");
        }
        Ok(())
    }

    fn seed(&self) -> Option<u64> {
        if self.unseeded {
            None
        } else {
            Some(self.seed)
        }
    }

    fn reveal(&self) -> Reveal {
        let celebration = if self.no_celebrate {
            None
        } else {
            Some(TickerTape::default().with_density(self.density))
        };
        Reveal::default()
            .with_countdown(self.countdown)
            .with_tick(Duration::from_secs(1))
            .with_celebration(celebration)
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// print the field and its win probabilities
    Table,

    /// draw a winner and run the reveal
    Predict,

    /// print the field, then draw a winner when Enter is pressed
    Interactive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Debug, Serialize)]
struct Prediction<'a> {
    field: Vec<&'a Entry>,
    seed: Option<u64>,
    winner: Option<&'a str>,
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let field = smackoff_30();
    let dist = convert(&field)?;
    debug!("booksum: {:.6}", field.booksum()?);

    match args.command.clone().unwrap_or(Command::Interactive) {
        Command::Table => print_field(&args, &dist, None)?,
        Command::Predict => {
            let winner = selector::predict_winner(&dist, args.seed())?;
            print_field(&args, &dist, Some(winner))?;
            announce(&args, winner)?;
        }
        Command::Interactive => match args.format {
            Format::Table => {
                print_field(&args, &dist, None)?;
                info!("press Enter to predict the Smackoff 30 winner");
                let mut line = String::new();
                io::stdin().lock().read_line(&mut line)?;
                let winner = selector::predict_winner(&dist, args.seed())?;
                announce(&args, winner)?;
            }
            Format::Json => {
                let winner = selector::predict_winner(&dist, args.seed())?;
                print_field(&args, &dist, Some(winner))?;
            }
        },
    }
    Ok(())
}

fn print_field(args: &Args, dist: &Distribution, winner: Option<&str>) -> anyhow::Result<()> {
    match args.format {
        Format::Table => {
            info!(
                "Field & Probabilities (Based on Stucknut's Odds)\n{}",
                Console::default().render(&tabulate(dist))
            );
        }
        Format::Json => {
            let prediction = Prediction {
                field: dist.ranked(),
                seed: winner.and(args.seed()),
                winner,
            };
            println!("{}", serde_json::to_string_pretty(&prediction)?);
        }
    }
    Ok(())
}

fn announce(args: &Args, winner: &str) -> anyhow::Result<()> {
    if let Format::Json = args.format {
        return Ok(());
    }
    debug!("revealing winner: {}", pretty_name(winner));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    args.reveal().run(winner, &mut out, &mut selector::entropy())?;
    out.flush()?;
    Ok(())
}
