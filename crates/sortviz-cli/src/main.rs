//! sortviz command-line tool.
//!
//! Runs the same step-recording sorts as the HTTP server without starting
//! one, printing the step list as JSON. Useful for checking what a client
//! animation will replay.

use std::process;

use clap::{Parser, Subcommand};

use sortviz_core::{sort, Algorithm, SortInput};

/// Step-recording sorts for visualization.
#[derive(Parser)]
#[command(name = "sortviz", about = "Step-recording sorts for visualization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Sort integers and print every recorded step as JSON.
    Sort {
        /// Algorithm name: bubble, insertion or merge.
        #[arg(short, long)]
        algorithm: String,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,

        /// Integers to sort.
        #[arg(allow_negative_numbers = true)]
        elements: Vec<i64>,
    },
    /// List the registered algorithm names.
    Algorithms,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort {
            algorithm,
            pretty,
            elements,
        } => process::exit(run_sort(algorithm, elements, pretty)),
        Commands::Algorithms => {
            for algorithm in Algorithm::ALL {
                println!("{}", algorithm);
            }
        }
    }
}

/// Execute the sort subcommand.
///
/// Returns exit code: 0 = success, 1 = unknown algorithm, 2 = output error.
fn run_sort(algorithm: String, elements: Vec<i64>, pretty: bool) -> i32 {
    let steps = match sort(SortInput {
        elements,
        algorithm,
    }) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Available algorithms: {}", algorithm_names());
            return 1;
        }
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&steps)
    } else {
        serde_json::to_string(&steps)
    };

    match rendered {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize steps: {}", e);
            2
        }
    }
}

fn algorithm_names() -> String {
    Algorithm::ALL
        .iter()
        .map(|a| a.name())
        .collect::<Vec<_>>()
        .join(", ")
}
