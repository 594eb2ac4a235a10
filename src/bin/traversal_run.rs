use clap::Parser;
use dsviz_rs::graph::{GraphPreset, GraphWorld, TraversalAlgo};
use dsviz_rs::seq::{InstantPacer, MarkRole, Pacer, RealtimePacer};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "traversal-run", about = "Run a graph traversal visualization headlessly")]
struct Args {
    /// Graph preset
    #[arg(long, value_enum, default_value_t = GraphPreset::Default)]
    preset: GraphPreset,

    /// Traversal algorithm
    #[arg(long, value_enum, default_value_t = TraversalAlgo::Bfs)]
    algo: TraversalAlgo,

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

    let pacer: Box<dyn Pacer> = if args.realtime {
        Box::new(RealtimePacer)
    } else {
        Box::new(InstantPacer)
    };
    let mut world = GraphWorld::new(args.preset, pacer);

    match world.traverse(args.algo) {
        Ok(outcome) => {
            let visited: Vec<usize> = world
                .seq()
                .stage()
                .marks(MarkRole::Visited)
                .iter()
                .copied()
                .collect();
            info!(
                outcome = outcome.as_str(),
                ?visited,
                events = world.seq().tape().len(),
                "run finished"
            );
        }
        Err(reject) => {
            eprintln!("traversal rejected: {reject}");
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
