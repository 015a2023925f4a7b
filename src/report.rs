//! Hex input parsing and serializable reports for the CLI

use anyhow::{bail, Context};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

use crate::algorithm::{Algorithm, Message, INPUT_SIZE, KNOWN_ANSWERS};

/// Parse a 200-byte message from hex
///
/// Accepts an optional `0x` prefix and ignores ASCII whitespace, so states
/// copied out of logs can be pasted as-is.
pub fn parse_message(input: &str) -> anyhow::Result<Message> {
    let cleaned: String = input
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = hex::decode(&cleaned).context("input is not valid hex")?;
    log::debug!("parsed {} input bytes", bytes.len());

    let message: Message = match bytes.try_into() {
        Ok(message) => message,
        Err(bytes) => bail!(
            "input must be exactly {} bytes ({} hex characters), got {} bytes",
            INPUT_SIZE,
            INPUT_SIZE * 2,
            bytes.len()
        ),
    };
    Ok(message)
}

/// Resolve an `--algorithm` argument: one name, or `all`
pub fn parse_selection(name: &str) -> anyhow::Result<Vec<Algorithm>> {
    if name.trim().eq_ignore_ascii_case("all") {
        return Ok(Algorithm::ALL.to_vec());
    }
    let algorithm = name
        .parse::<Algorithm>()
        .with_context(|| format!("invalid algorithm '{}'", name))?;
    Ok(vec![algorithm])
}

/// One digest, ready for printing or JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestReport {
    pub algorithm: String,
    pub digest: String,
}

impl DigestReport {
    pub fn new(algorithm: Algorithm, message: &Message) -> Self {
        Self {
            algorithm: algorithm.name().to_string(),
            digest: hex::encode(algorithm.hash(message)),
        }
    }
}

/// Digests of one message under each selected algorithm, in selection order
pub fn hash_report(algorithms: &[Algorithm], message: &Message) -> Vec<DigestReport> {
    algorithms
        .iter()
        .map(|&algorithm| DigestReport::new(algorithm, message))
        .collect()
}

/// Outcome of one known-answer vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswerReport {
    pub algorithm: Algorithm,
    pub fill: u8,
    pub passed: bool,
}

/// Hash every known-answer vector once
pub fn known_answer_reports() -> Vec<KnownAnswerReport> {
    KNOWN_ANSWERS
        .iter()
        .map(|answer| KnownAnswerReport {
            algorithm: answer.algorithm,
            fill: answer.fill,
            passed: answer.check(),
        })
        .collect()
}

/// Throughput of one algorithm over a benchmark run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub algorithm: String,
    pub hashes: u64,
    pub threads: usize,
    pub seconds: f64,
    pub hashrate: f64,
}

impl BenchmarkReport {
    pub fn new(algorithm: Algorithm, hashes: u64, threads: usize, seconds: f64) -> Self {
        let hashrate = if seconds > 0.0 {
            hashes as f64 / seconds
        } else {
            0.0
        };
        Self {
            algorithm: algorithm.name().to_string(),
            hashes,
            threads,
            seconds,
            hashrate,
        }
    }
}

/// Hash `count` nonce-stamped inputs on a pool of `threads` workers
///
/// The pool never holds more workers than there are hashes to compute.
pub fn run_benchmark(
    algorithm: Algorithm,
    count: u64,
    threads: usize,
) -> anyhow::Result<BenchmarkReport> {
    if count == 0 {
        bail!("count must be at least 1");
    }
    if threads == 0 {
        bail!("threads must be at least 1");
    }

    let threads = threads.min(usize::try_from(count).unwrap_or(usize::MAX));
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("failed to start benchmark thread pool")?;
    log::debug!("benchmarking {} on {} threads", algorithm, threads);

    let start = Instant::now();
    pool.install(|| {
        (0..count).into_par_iter().for_each(|nonce| {
            let mut input = [0u8; INPUT_SIZE];
            input[..8].copy_from_slice(&nonce.to_le_bytes());
            std::hint::black_box(algorithm.hash(&input));
        })
    });
    let seconds = start.elapsed().as_secs_f64();

    Ok(BenchmarkReport::new(algorithm, count, threads, seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message() {
        let hex_input = "ab".repeat(INPUT_SIZE);
        let message = parse_message(&hex_input).unwrap();
        assert_eq!(message, [0xAB; INPUT_SIZE]);

        // Prefix and whitespace are tolerated
        let spaced = format!("0x{}\n {}", &hex_input[..100], &hex_input[100..]);
        assert_eq!(parse_message(&spaced).unwrap(), message);
    }

    #[test]
    fn test_parse_message_rejects_bad_input() {
        assert!(parse_message("zz").is_err());

        let err = parse_message(&"00".repeat(199)).unwrap_err();
        assert!(err.to_string().contains("got 199 bytes"), "{}", err);

        assert!(parse_message(&"00".repeat(201)).is_err());
        assert!(parse_message("").is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("all").unwrap(), Algorithm::ALL.to_vec());
        assert_eq!(parse_selection("JH").unwrap(), vec![Algorithm::Jh256]);
        assert!(parse_selection("sha256").is_err());
    }

    #[test]
    fn test_hash_report_json() {
        let message = [0xFFu8; INPUT_SIZE];
        let reports = hash_report(&[Algorithm::Skein512_256, Algorithm::Groestl256], &message);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].algorithm, "skein");
        assert_eq!(
            reports[1].digest,
            "108f73fb26eb26a2d6feae8d2d24233ee21878798be7375d95754c78e252530a"
        );

        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["algorithm"], "skein");
        assert_eq!(
            json[0]["digest"],
            "b4ce5e989bfe368b2b0adb350767175ec050a6bb3187f96627a9be3d62a41a3a"
        );
    }

    #[test]
    fn test_benchmark_report() {
        let report = BenchmarkReport::new(Algorithm::Blake256, 1000, 4, 0.5);
        assert_eq!(report.hashrate, 2000.0);

        let empty = BenchmarkReport::new(Algorithm::Blake256, 0, 1, 0.0);
        assert_eq!(empty.hashrate, 0.0);
    }

    #[test]
    fn test_run_benchmark_caps_threads_at_count() {
        let report = run_benchmark(Algorithm::Jh256, 3, 100_000).unwrap();
        assert_eq!(report.threads, 3);
        assert_eq!(report.hashes, 3);
        assert_eq!(report.algorithm, "jh");

        let report = run_benchmark(Algorithm::Skein512_256, 64, 2).unwrap();
        assert_eq!(report.threads, 2);
        assert_eq!(report.hashes, 64);
    }

    #[test]
    fn test_run_benchmark_rejects_zero() {
        let err = run_benchmark(Algorithm::Blake256, 5, 0).unwrap_err();
        assert!(err.to_string().contains("threads"), "{}", err);

        let err = run_benchmark(Algorithm::Blake256, 0, 4).unwrap_err();
        assert!(err.to_string().contains("count"), "{}", err);
    }

    #[test]
    fn test_known_answer_reports() {
        let reports = known_answer_reports();
        assert_eq!(reports.len(), KNOWN_ANSWERS.len());
        assert!(reports.iter().all(|report| report.passed));
        assert_eq!(reports[0].algorithm, Algorithm::Blake256);
        assert_eq!(reports[1].fill, 0xFF);
    }
}
