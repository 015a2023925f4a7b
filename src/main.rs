//! Auxiliary Proof-of-Work Hash CLI
//!
//! A command-line tool for computing and checking the four auxiliary hashes.
//!
//! # Commands
//!
//! - `hash` - Hash a 200-byte hex input
//! - `self-test` - Check every algorithm against its pinned digests
//! - `benchmark` - Run performance benchmark

use clap::{Parser, Subcommand};

use auxhash::algorithm::{Error, DIGEST_SIZE, INPUT_SIZE, KNOWN_ANSWERS};
use auxhash::report::{
    hash_report, known_answer_reports, parse_message, parse_selection, run_benchmark,
};

#[derive(Parser)]
#[command(name = "auxhash")]
#[command(author = "Cyberia")]
#[command(version = "0.1.0")]
#[command(about = "Auxiliary proof-of-work hashes over 200-byte states")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a 200-byte input
    Hash {
        /// The input as 400 hex characters
        #[arg(short, long)]
        input: String,

        /// Algorithm to run: blake, groestl, jh, skein or all
        #[arg(short, long, default_value = "all")]
        algorithm: String,

        /// Print the digests as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check every algorithm against its known-answer digests
    SelfTest,

    /// Run performance benchmark
    Benchmark {
        /// Number of hashes to compute per algorithm
        #[arg(short, long, default_value = "10000")]
        count: u64,

        /// Algorithm to run: blake, groestl, jh, skein or all
        #[arg(short, long, default_value = "all")]
        algorithm: String,

        /// Number of threads to use (default: number of CPU cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Hash {
            input,
            algorithm,
            json,
        } => cmd_hash(&input, &algorithm, json),
        Commands::SelfTest => cmd_self_test(),
        Commands::Benchmark {
            count,
            algorithm,
            threads,
        } => cmd_benchmark(count, &algorithm, threads),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn cmd_hash(input: &str, algorithm: &str, json: bool) -> anyhow::Result<()> {
    let algorithms = parse_selection(algorithm)?;
    let message = parse_message(input)?;

    let reports = hash_report(&algorithms, &message);

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{:<8} {}", report.algorithm, report.digest);
        }
    }

    Ok(())
}

fn cmd_self_test() -> anyhow::Result<()> {
    log::info!("Checking {} known-answer vectors", KNOWN_ANSWERS.len());

    let reports = known_answer_reports();
    for report in &reports {
        let status = if report.passed { "ok" } else { "FAILED" };
        println!(
            "  {:<8} fill 0x{:02x}: {}",
            report.algorithm, report.fill, status
        );
    }

    if let Some(failed) = reports.iter().find(|report| !report.passed) {
        return Err(Error::KnownAnswerMismatch {
            algorithm: failed.algorithm,
        }
        .into());
    }
    println!("\nAll known-answer tests passed.");

    Ok(())
}

fn cmd_benchmark(count: u64, algorithm: &str, threads: Option<usize>) -> anyhow::Result<()> {
    let algorithms = parse_selection(algorithm)?;
    let num_threads = threads.unwrap_or_else(num_cpus::get);

    println!(
        "Running benchmark with {} hashes per algorithm on {} threads...",
        count, num_threads
    );

    let reports = algorithms
        .into_iter()
        .map(|algorithm| run_benchmark(algorithm, count, num_threads))
        .collect::<anyhow::Result<Vec<_>>>()?;

    println!("\nResults:");
    for report in &reports {
        println!(
            "  {:<8} {:>12.2} H/s ({:.3}s, {} threads)",
            report.algorithm, report.hashrate, report.seconds, report.threads
        );
    }

    println!("\nAlgorithm parameters:");
    println!("  Input size: {} bytes", INPUT_SIZE);
    println!("  Digest size: {} bytes", DIGEST_SIZE);

    Ok(())
}
