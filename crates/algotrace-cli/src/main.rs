//! Algorithm trace CLI.
//!
//! Provides the `algotrace` binary: `list` and `info` print catalogue
//! metadata, `trace` generates one trace, `verify` runs the trace contracts.
//! All results are JSON on stdout; diagnostics go to stderr.
//!
//! Reads `ALGOTRACE_LOG` as a tracing filter (default: "warn").

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use algotrace_core::{AlgorithmId, Category, Difficulty};
use algotrace_engine::contracts::property::{run_property_tests, PropertyTestConfig};
use algotrace_engine::contracts::{verify_catalogue, CatalogueCheck};
use algotrace_engine::{registry, EngineError, TraceRequest};

/// Step-by-step traces of classic algorithms.
#[derive(Parser)]
#[command(name = "algotrace", about = "Step-by-step traces of classic algorithms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List every algorithm.
    List {
        /// Only this category: sorting, searching, graph, dynamic-programming.
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Print metadata for one algorithm.
    Info {
        /// Algorithm id, e.g. bubble-sort or dfs.
        algorithm: String,
    },

    /// Generate a trace.
    Trace {
        /// Algorithm id, e.g. bubble-sort or dfs.
        algorithm: String,

        /// Comma-separated input array, e.g. 5,3,8,1.
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        input: Option<Vec<i64>>,

        /// Search target.
        #[arg(short, long, allow_hyphen_values = true)]
        target: Option<i64>,

        /// Algorithm parameters as a JSON object.
        #[arg(short, long)]
        params: Option<String>,

        /// Read the whole request from a JSON file instead.
        #[arg(long, conflicts_with_all = ["input", "target", "params"])]
        request: Option<PathBuf>,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Check every default trace against reference results, then run
    /// randomized sorting and searching checks.
    Verify {
        /// Random arrays to draw.
        #[arg(short = 'n', long, default_value_t = 100)]
        iterations: u32,

        /// Seed for the random arrays.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Longest random array.
        #[arg(long, default_value_t = 12)]
        max_len: usize,
    },
}

fn main() {
    let filter = EnvFilter::try_from_env("ALGOTRACE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::List { category } => run_list(category.as_deref()),
        Commands::Info { algorithm } => run_info(&algorithm),
        Commands::Trace {
            algorithm,
            input,
            target,
            params,
            request,
            pretty,
        } => run_trace(&algorithm, input, target, params, request, pretty),
        Commands::Verify {
            iterations,
            seed,
            max_len,
        } => run_verify(iterations, seed, max_len),
    };
    process::exit(exit_code);
}

/// Print `value` as JSON to stdout.
fn emit<T: Serialize>(value: &T, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    let json = json.unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize result: {}\"}}", e));
    println!("{}", json);
}

fn parse_algorithm(name: &str) -> Result<AlgorithmId, i32> {
    name.parse().map_err(|e| {
        eprintln!("Error: {}", e);
        1
    })
}

#[derive(Serialize)]
struct ListEntry {
    id: AlgorithmId,
    name: &'static str,
    category: Category,
    difficulty: Difficulty,
}

/// Execute the list subcommand.
///
/// Returns exit code: 0 = success, 1 = unknown category.
fn run_list(category: Option<&str>) -> i32 {
    let category = match category.map(parse_category).transpose() {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };
    let entries: Vec<ListEntry> = registry::catalogue()
        .into_iter()
        .filter(|info| category.map_or(true, |c| info.category == c))
        .map(|info| ListEntry {
            id: info.id,
            name: info.name,
            category: info.category,
            difficulty: info.difficulty,
        })
        .collect();
    emit(&entries, true);
    0
}

fn parse_category(s: &str) -> Result<Category, String> {
    match s.to_ascii_lowercase().replace('_', "-").as_str() {
        "sorting" => Ok(Category::Sorting),
        "searching" => Ok(Category::Searching),
        "graph" => Ok(Category::Graph),
        "dynamic-programming" | "dp" => Ok(Category::DynamicProgramming),
        _ => Err(format!(
            "invalid category '{}', expected sorting/searching/graph/dynamic-programming",
            s
        )),
    }
}

/// Execute the info subcommand.
///
/// Returns exit code: 0 = success, 1 = unknown algorithm.
fn run_info(algorithm: &str) -> i32 {
    match parse_algorithm(algorithm) {
        Ok(id) => {
            emit(&registry::info(id), true);
            0
        }
        Err(code) => code,
    }
}

/// Execute the trace subcommand.
///
/// Returns exit code: 0 = success, 1 = bad request, 3 = I/O error.
fn run_trace(
    algorithm: &str,
    input: Option<Vec<i64>>,
    target: Option<i64>,
    params: Option<String>,
    request_path: Option<PathBuf>,
    pretty: bool,
) -> i32 {
    let id = match parse_algorithm(algorithm) {
        Ok(id) => id,
        Err(code) => return code,
    };

    let request = match request_path {
        Some(path) => {
            let text = match std::fs::read_to_string(&path) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Error: failed to read '{}': {}", path.display(), e);
                    return 3;
                }
            };
            match serde_json::from_str::<TraceRequest>(&text) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: invalid request in '{}': {}", path.display(), e);
                    return 1;
                }
            }
        }
        None => {
            let params = match params
                .as_deref()
                .map(serde_json::from_str::<serde_json::Value>)
                .transpose()
            {
                Ok(p) => p.unwrap_or_default(),
                Err(e) => {
                    eprintln!("Error: --params is not valid JSON: {}", e);
                    return 1;
                }
            };
            TraceRequest {
                input,
                target,
                params,
            }
        }
    };

    match registry::generate(id, &request) {
        Ok(bundle) => {
            tracing::info!("{}: {} steps", id, bundle.steps.len());
            emit(&bundle, pretty);
            0
        }
        Err(EngineError::Serialization { step, message }) => {
            eprintln!("Error: step {} could not be serialized: {}", step, message);
            3
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[derive(Serialize)]
struct VerifySummary {
    catalogue_checked: usize,
    catalogue_failed: Vec<CatalogueCheck>,
    property_runs: u32,
    property_passed: u32,
    property_failures: Vec<PropertyFailureSummary>,
    random_seed: u64,
}

/// A property failure without its trace, which can be long.
#[derive(Serialize)]
struct PropertyFailureSummary {
    algorithm: AlgorithmId,
    input: Vec<i64>,
    target: Option<i64>,
    violations: Vec<String>,
}

/// Execute the verify subcommand.
///
/// Returns exit code: 0 = all checks passed, 2 = verification failure.
fn run_verify(iterations: u32, seed: u64, max_len: usize) -> i32 {
    let checks = verify_catalogue();
    let catalogue_checked = checks.len();
    let catalogue_failed: Vec<_> = checks.into_iter().filter(|c| !c.passed()).collect();

    let config = PropertyTestConfig {
        iterations,
        random_seed: seed,
        max_len,
        ..PropertyTestConfig::default()
    };
    let result = run_property_tests(&config);

    let summary = VerifySummary {
        catalogue_checked,
        catalogue_failed,
        property_runs: result.total_run,
        property_passed: result.passed,
        property_failures: result
            .failures
            .into_iter()
            .map(|f| PropertyFailureSummary {
                algorithm: f.algorithm,
                input: f.input,
                target: f.target,
                violations: f.violations.into_iter().map(|v| v.message).collect(),
            })
            .collect(),
        random_seed: result.random_seed,
    };
    let failed = !summary.catalogue_failed.is_empty() || !summary.property_failures.is_empty();
    emit(&summary, true);
    if failed {
        eprintln!("Verification failed");
        2
    } else {
        0
    }
}
