use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_picker::picker::{pick, Result};

/// Picks one name at random from a list, optionally weighted
#[derive(Debug, Parser)]
#[command(name = "random-picker", author, version, about, long_about = None)]
struct Args {
    /// List of names.
    /// Prefix a name with -q and a nonnegative number to set its weight (default is 1),
    /// either as -q2.5 or as -q 2.5
    #[arg(
        value_name = "NAMES",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    items: Vec<String>,

    /// Seed for the random draw, for a reproducible pick
    #[arg(long)]
    seed: Option<u64>,

    /// More logging on stderr, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run(args: &Args) -> Result<String> {
    match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            pick(args.items.as_slice(), &mut StdRng::seed_from_u64(seed))
        }
        None => pick(args.items.as_slice(), &mut rand::thread_rng()),
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(log_level_filter(args.verbose))
        .init();

    match run(&args) {
        Ok(name) => println!("{}", name),
        Err(err) => Args::command().error(ErrorKind::ValueValidation, err).exit(),
    }
}
