use clap::Parser;
use dsviz_rs::linear::{DllWorld, ListWorld, QueueWorld, StackWorld};
use dsviz_rs::recursion::RecursionWorld;
use dsviz_rs::seq::{InstantPacer, Reject, RunOutcome, VisualEvent};
use dsviz_rs::session::{OpSpec, SessionSpec, StructureSpec};
use dsviz_rs::tree::TreeWorld;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "session-run", about = "Run a session.json op script on a dsviz structure")]
struct Args {
    /// Path to session.json
    #[arg(long)]
    session: PathBuf,

    /// Write one record per op (outcome + event tape) as JSON
    #[arg(long)]
    events_json: Option<PathBuf>,
}

#[derive(Serialize)]
struct OpRecord<S> {
    op: &'static str,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    events: Vec<VisualEvent<S>>,
}

fn record<S: Clone + Serialize>(
    op: &'static str,
    res: Result<RunOutcome, Reject>,
    tape: Vec<VisualEvent<S>>,
) -> Value {
    let rec = match res {
        Ok(outcome) => OpRecord {
            op,
            outcome: outcome.as_str(),
            error: None,
            events: tape,
        },
        Err(reject) => {
            warn!(op, %reject, "op rejected");
            OpRecord {
                op,
                outcome: "rejected",
                error: Some(reject.to_string()),
                events: Vec::new(),
            }
        }
    };
    serde_json::to_value(rec).expect("serialize op record")
}

fn plain(op: &'static str) -> Value {
    record::<()>(op, Ok(RunOutcome::Completed), Vec::new())
}

fn unsupported(op: &OpSpec) -> Reject {
    Reject::InvalidInput(format!("op {} not supported for this structure", op.label()))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.session).expect("read session file");
    let spec: SessionSpec = serde_json::from_str(&raw).expect("parse session file");
    info!(ops = spec.ops.len(), "session loaded");

    let mut records: Vec<Value> = Vec::new();
    match &spec.structure {
        StructureSpec::List => {
            let mut world = ListWorld::new(Box::new(InstantPacer));
            for op in &spec.ops {
                let res = match op {
                    OpSpec::InsertHead { value } => world.insert_head(value),
                    OpSpec::InsertTail { value } => world.insert_tail(value),
                    OpSpec::DeleteValue { value } => world.delete_value(value),
                    OpSpec::Reset => {
                        world.reset();
                        records.push(plain("reset"));
                        continue;
                    }
                    other => Err(unsupported(other)),
                };
                records.push(record(op.label(), res, world.seq().tape().to_vec()));
            }
        }
        StructureSpec::Dll => {
            let mut world = DllWorld::new(Box::new(InstantPacer));
            for op in &spec.ops {
                let res = match op {
                    OpSpec::InsertHead { value } => world.insert_head(value),
                    OpSpec::InsertTail { value } => world.insert_tail(value),
                    OpSpec::DeleteHead => world.delete_head(),
                    OpSpec::Reset => {
                        world.reset();
                        records.push(plain("reset"));
                        continue;
                    }
                    other => Err(unsupported(other)),
                };
                records.push(record(op.label(), res, world.seq().tape().to_vec()));
            }
        }
        StructureSpec::Stack { capacity } => {
            let mut world = match capacity {
                Some(cap) => StackWorld::with_capacity(*cap, Box::new(InstantPacer)),
                None => StackWorld::new(Box::new(InstantPacer)),
            };
            for op in &spec.ops {
                let res = match op {
                    OpSpec::Push { value } => world.push(value),
                    OpSpec::Pop => world.pop(),
                    OpSpec::Peek => world.peek(),
                    OpSpec::Reset => {
                        world.reset();
                        records.push(plain("reset"));
                        continue;
                    }
                    other => Err(unsupported(other)),
                };
                records.push(record(op.label(), res, world.seq().tape().to_vec()));
            }
        }
        StructureSpec::Queue { capacity } => {
            let mut world = match capacity {
                Some(cap) => QueueWorld::with_capacity(*cap, Box::new(InstantPacer)),
                None => QueueWorld::new(Box::new(InstantPacer)),
            };
            for op in &spec.ops {
                let res = match op {
                    OpSpec::Enqueue { value } => world.enqueue(value),
                    OpSpec::Dequeue => world.dequeue(),
                    OpSpec::Reset => {
                        world.reset();
                        records.push(plain("reset"));
                        continue;
                    }
                    other => Err(unsupported(other)),
                };
                records.push(record(op.label(), res, world.seq().tape().to_vec()));
            }
        }
        StructureSpec::Tree => {
            let mut world = TreeWorld::new(Box::new(InstantPacer));
            for op in &spec.ops {
                let res = match op {
                    OpSpec::Insert { value } => world.insert(*value),
                    OpSpec::Reset => {
                        world.reset();
                        records.push(plain("reset"));
                        continue;
                    }
                    other => Err(unsupported(other)),
                };
                records.push(record(op.label(), res, world.seq().tape().to_vec()));
            }
        }
        StructureSpec::Recursion => {
            let mut world = RecursionWorld::new(Box::new(InstantPacer));
            for op in &spec.ops {
                let res = match op {
                    OpSpec::Factorial { n } => world.run_factorial(*n),
                    OpSpec::Reset => {
                        world.reset();
                        records.push(plain("reset"));
                        continue;
                    }
                    other => Err(unsupported(other)),
                };
                records.push(record(op.label(), res, world.seq().tape().to_vec()));
            }
        }
    }

    info!(records = records.len(), "session finished");

    if let Some(path) = args.events_json {
        let json = serde_json::to_string_pretty(&records).expect("serialize records");
        fs::write(&path, json).expect("write events json");
        info!(path = %path.display(), "event tapes written");
    }
}
