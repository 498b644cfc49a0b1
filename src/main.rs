use std::process;

use log::{error, info};

use descriptive_stats::{summary, StatsError, Value};

const SAMPLES: [&str; 7] = [
    "[4, 2, 6, 1, 3, 7, 5, 3]",
    "[9, 1, 4, 3, 4, 9]",
    "[1, 1, 1, 1, 1]",
    "[42]",
    "[]",
    "\"x\"",
    "[1, 2, \"3\"]",
];

fn failure_kind(err: &StatsError) -> &'static str {
    match err {
        StatsError::NotASequence { .. } => "not a sequence",
        StatsError::InvalidElement { .. } => "invalid element",
        StatsError::EmptySequence => "empty sequence",
    }
}

/// Summarize one JSON document. Returns `false` if it was rejected.
fn run(input: &str) -> bool {
    let value = match serde_json::from_str::<Value>(input) {
        Ok(value) => value,
        Err(err) => {
            error!("Unable to parse `{}` as JSON. Reason: `{}`.", input, err);
            return false;
        }
    };

    match summary(&value) {
        Ok(summary) => {
            println!("{} => {}", value, summary);
            true
        }
        Err(err) => {
            error!("{} => {}: {}", value, failure_kind(&err), err);
            false
        }
    }
}

fn main() {
    pretty_env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        info!("No input given, running {} sample data sets", SAMPLES.len());
        for sample in SAMPLES.iter() {
            run(sample);
        }
        return;
    }

    let failed = args.iter().filter(|input| !run(input)).count();
    if failed > 0 {
        error!("{} of {} inputs failed", failed, args.len());
        process::exit(1);
    }
}
