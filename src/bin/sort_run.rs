use clap::Parser;
use dsviz_rs::seq::{InstantPacer, Pacer, RealtimePacer};
use dsviz_rs::sort::{self, SortAlgo, SortWorld};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "sort-run", about = "Run a sorting visualization headlessly")]
struct Args {
    /// Sorting algorithm
    #[arg(long, value_enum, default_value_t = SortAlgo::Bubble)]
    algo: SortAlgo,

    /// Number of array elements
    #[arg(long, default_value_t = sort::DEFAULT_SIZE)]
    size: usize,

    /// RNG seed for a reproducible array
    #[arg(long)]
    seed: Option<u64>,

    /// Write the applied event tape as JSON
    #[arg(long)]
    events_json: Option<PathBuf>,

    /// Pace steps in real time instead of instantly
    #[arg(long)]
    realtime: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let values = sort::generate(args.size, &mut rng);
    info!(algo = args.algo.label(), ?values, "generated array");

    let pacer: Box<dyn Pacer> = if args.realtime {
        Box::new(RealtimePacer)
    } else {
        Box::new(InstantPacer)
    };
    let mut world = SortWorld::new(pacer);
    world.seed(values);

    match world.sort(args.algo) {
        Ok(outcome) => {
            info!(
                outcome = outcome.as_str(),
                events = world.seq().tape().len(),
                sorted = ?world.seq().stage().snapshot(),
                "run finished"
            );
        }
        Err(reject) => {
            eprintln!("sort rejected: {reject}");
            std::process::exit(1);
        }
    }

    for line in world.seq().stage().log() {
        println!("{line}");
    }

    if let Some(path) = args.events_json {
        let json = serde_json::to_string_pretty(world.seq().tape()).expect("serialize event tape");
        fs::write(&path, json).expect("write events json");
        info!(path = %path.display(), "event tape written");
    }
}
