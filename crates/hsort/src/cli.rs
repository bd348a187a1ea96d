//! Argument parsing and command execution for `hsort`.
//!
//! `run` never exits the process; it returns a [`CliError`] and leaves the
//! exit code decision to `main`.

use std::fs;
use std::io::{self, Read, Write};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use clap::Parser;
use hybrid_sort::{SortAlgorithm, SortContext, is_sorted_non_decreasing, sort_i32_with_ctx};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "hsort", version, about = "Sort 32-bit integers in place with a hybrid quicksort")]
pub struct Args {
    /// Integers to sort, separated by commas or whitespace
    #[arg(allow_negative_numbers = true, conflicts_with = "input")]
    pub values: Vec<String>,

    /// Read integers from a file instead (`-` reads stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Sorting algorithm to run
    #[arg(short, long, default_value = "hybrid_quick_sort")]
    pub algorithm: SortAlgorithm,

    /// Fail unless the sorted output equals this sequence
    #[arg(long, value_name = "VALUES", allow_hyphen_values = true)]
    pub expect: Option<String>,

    /// Run the built-in reference scenarios
    #[arg(long, conflicts_with_all = ["values", "input", "expect"])]
    pub demo: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("value #{position} (`{token}`) is not a 32-bit integer")]
    InvalidValue {
        position: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("sorted output {actual} does not match expected {expected}")]
    Mismatch { expected: String, actual: String },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl CliError {
    /// Process exit status: 2 for a failed `--expect` check, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Mismatch { .. } => 2,
            _ => 1,
        }
    }
}

struct Scenario {
    input: &'static [i32],
    expected: &'static [i32],
}

const SCENARIOS: [Scenario; 4] = [
    Scenario {
        input: &[1, 7, 11, -99, 15, 10],
        expected: &[-99, 1, 7, 10, 11, 15],
    },
    Scenario {
        input: &[
            1, 7, 11, -99, 15, 10, 10, -4, 4, 2, -66, 5, 0, 2, 90, 100, 17, 35, 211, -43,
        ],
        expected: &[
            -99, -66, -43, -4, 0, 1, 2, 2, 4, 5, 7, 10, 10, 11, 15, 17, 35, 90, 100, 211,
        ],
    },
    Scenario {
        input: &[
            1, 7, 11, -99, 15, 10, 10, -4, 4, 2, -66, 5, 0, 2, 90, 100, 17, 35, 211, -43, 454, 6,
            54, -35, 256, 34, 2, 77, 46, 2, 6773, 2678, -776,
        ],
        expected: &[
            -776, -99, -66, -43, -35, -4, 0, 1, 2, 2, 2, 2, 4, 5, 6, 7, 10, 10, 11, 15, 17, 34, 35,
            46, 54, 77, 90, 100, 211, 256, 454, 2678, 6773,
        ],
    },
    Scenario {
        input: &[5; 10],
        expected: &[5; 10],
    },
];

pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    if args.demo {
        return run_demo(args.algorithm, out);
    }

    let mut data = read_values(args)?;
    let mut ctx = SortContext::default();
    sort_i32_with_ctx(args.algorithm, &mut data, &mut ctx);
    tracing::debug!(
        algorithm = %args.algorithm,
        len = data.len(),
        partitions = ctx.partitions(),
        peak_pending = ctx.peak_pending(),
        "sorted input"
    );

    writeln!(out, "{}", format_values(&data))?;

    if let Some(expected) = &args.expect {
        check_equal(&data, &parse_values(expected)?)?;
    }
    Ok(())
}

fn run_demo(algo: SortAlgorithm, out: &mut impl Write) -> Result<(), CliError> {
    let mut ctx = SortContext::default();
    let mut first_failure = None;

    for (i, scenario) in SCENARIOS.iter().enumerate() {
        let mut data = scenario.input.to_vec();
        sort_i32_with_ctx(algo, &mut data, &mut ctx);

        let verdict = if data == scenario.expected { "ok" } else { "FAILED" };
        writeln!(
            out,
            "case {} (n={}): {verdict} {}",
            i + 1,
            data.len(),
            format_values(&data)
        )?;

        if first_failure.is_none() {
            first_failure = check_equal(&data, scenario.expected).err();
        }
    }

    first_failure.map_or(Ok(()), Err)
}

fn read_values(args: &Args) -> Result<Vec<i32>, CliError> {
    match &args.input {
        Some(path) => parse_values(&read_source(Some(path.as_path()))?),
        None if !args.values.is_empty() => parse_values(&args.values.join(" ")),
        None => parse_values(&read_source(None)?),
    }
}

fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".into(),
                    source,
                })?;
            Ok(text)
        }
    }
}

/// Parses integers separated by commas, whitespace or the brackets that
/// `format_values` emits.
pub fn parse_values(text: &str) -> Result<Vec<i32>, CliError> {
    text.split(|c: char| c == ',' || c == '[' || c == ']' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse().map_err(|source| CliError::InvalidValue {
                position: i + 1,
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}

pub fn format_values(data: &[i32]) -> String {
    format!("{data:?}")
}

fn check_equal(actual: &[i32], expected: &[i32]) -> Result<(), CliError> {
    if actual == expected {
        return Ok(());
    }
    tracing::debug!(
        sorted = is_sorted_non_decreasing(actual),
        actual_len = actual.len(),
        expected_len = expected.len(),
        "output mismatch"
    );
    Err(CliError::Mismatch {
        expected: format_values(expected),
        actual: format_values(actual),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hsort").chain(argv.iter().copied()))
            .expect("arguments should parse")
    }

    fn run_to_string(args: &Args) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();
        let result = run(args, &mut out);
        (result, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn parse_values_accepts_mixed_separators() {
        assert_eq!(
            parse_values("1,7 11\n-99,\t15 ,10").unwrap(),
            [1, 7, 11, -99, 15, 10]
        );
        assert_eq!(parse_values("[-3, 0, 4]").unwrap(), [-3, 0, 4]);
        assert!(parse_values("  ,, ").unwrap().is_empty());
    }

    #[test]
    fn parse_values_reports_position() {
        let err = parse_values("4 5 x6 7").unwrap_err();
        match err {
            CliError::InvalidValue {
                position, token, ..
            } => {
                assert_eq!(position, 3);
                assert_eq!(token, "x6");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(parse_values("2147483648").is_err());
    }

    #[test]
    fn sorts_positional_values() {
        let args = parse(&["1,7,11", "-99", "15", "10"]);
        let (result, out) = run_to_string(&args);
        result.unwrap();
        assert_eq!(out, "[-99, 1, 7, 10, 11, 15]\n");
    }

    #[test]
    fn algorithm_flag_selects_registry_entry() {
        let args = parse(&["-a", "insertion_sort", "3", "2", "1"]);
        assert_eq!(args.algorithm, SortAlgorithm::InsertionSort);
        let (result, out) = run_to_string(&args);
        result.unwrap();
        assert_eq!(out, "[1, 2, 3]\n");

        assert!(Args::try_parse_from(["hsort", "-a", "bogo_sort", "1"]).is_err());
    }

    #[test]
    fn expect_flag_checks_output() {
        let args = parse(&["--expect", "[-2, 0, 5]", "5", "-2", "0"]);
        let (result, _) = run_to_string(&args);
        result.unwrap();

        let args = parse(&["--expect=-2,5", "5", "-2", "0"]);
        let (result, out) = run_to_string(&args);
        assert_eq!(out, "[-2, 0, 5]\n");
        let err = result.unwrap_err();
        assert!(matches!(err, CliError::Mismatch { .. }));
        assert_eq!(err.exit_status(), 2);
    }

    #[test]
    fn reads_values_from_file() {
        let path = std::env::temp_dir().join(format!("hsort-input-{}.txt", std::process::id()));
        fs::write(&path, "9\n-1\n4, 4\n").unwrap();

        let args = parse(&["--input", path.to_str().unwrap()]);
        let (result, out) = run_to_string(&args);
        fs::remove_file(&path).unwrap();

        result.unwrap();
        assert_eq!(out, "[-1, 4, 4, 9]\n");
    }

    #[test]
    fn missing_file_is_read_error() {
        let args = parse(&["-i", "/nonexistent/hsort/input.txt"]);
        let (result, _) = run_to_string(&args);
        let err = result.unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert_eq!(err.exit_status(), 1);
    }

    #[test]
    fn demo_runs_reference_scenarios() {
        for algo in ["hybrid_quick_sort", "insertion_sort"] {
            let args = parse(&["--demo", "-a", algo]);
            let (result, out) = run_to_string(&args);
            result.unwrap();

            let lines: Vec<&str> = out.lines().collect();
            assert_eq!(lines.len(), SCENARIOS.len());
            assert!(lines.iter().all(|line| line.contains(": ok [")));
            assert!(lines[0].starts_with("case 1 (n=6): ok [-99, 1, 7, 10, 11, 15]"));
        }
    }

    #[test]
    fn demo_conflicts_with_values() {
        assert!(Args::try_parse_from(["hsort", "--demo", "1", "2"]).is_err());
    }
}
