use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "runlength-buffer workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark suite once per global allocator and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Where the markdown report is written
        #[arg(long, default_value = "benchmark_results/report.md")]
        output: PathBuf,
    },
}

/// Growth is the buffer's only allocation point, so the suite is compared
/// across global allocators.
const ALLOCATORS: &[&str] = &[
    "alloc-system",
    "alloc-mimalloc",
    "alloc-snmalloc",
    "alloc-jemalloc",
];

const BASELINE: &str = "system";

/// `estimates.json` as written by criterion.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// `benchmark.json` as written by criterion; only the throughput matters here.
#[derive(Deserialize)]
struct BenchmarkInfo {
    #[serde(default)]
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
    Bytes(u64),
}

/// workload -> allocator -> operations per second
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            output,
        } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report(&output)?;
        }
    }

    Ok(())
}

fn allocator_name(feature: &str) -> &str {
    feature.trim_start_matches("alloc-")
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Compiling benchmark suite...");
    let status = Command::new("cargo")
        .args(["build", "--bench", "suite", "--release"])
        .status()
        .context("failed to spawn cargo build")?;
    if !status.success() {
        bail!("failed to compile the benchmark suite");
    }

    for &feature in ALLOCATORS {
        println!("\n>>> Benchmarking with feature: {feature}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0").args([
            "bench",
            "--bench",
            "suite",
            "--no-default-features",
            "--features",
            feature,
            "--",
            "--save-baseline",
            allocator_name(feature),
        ]);
        if quick {
            cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to run the suite with {feature}"))?;
        if status.success() {
            println!("Finished {feature} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark run failed for {feature}");
        }
    }

    Ok(())
}

fn generate_report(output: &Path) -> Result<()> {
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report = render_report(&results);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(output, report).with_context(|| format!("failed to write {}", output.display()))?;

    println!("Report written to {}", output.display());
    Ok(())
}

fn render_report(results: &Results) -> String {
    let mut out = String::from("# Run-Length Buffer Allocator Report\n\n| Workload |");
    for feature in ALLOCATORS {
        let _ = write!(out, " {} (ops/s) | vs {BASELINE} |", allocator_name(feature));
    }
    out.push_str("\n|---|");
    out.push_str(&"---|---|".repeat(ALLOCATORS.len()));
    out.push('\n');

    for (workload, by_allocator) in results {
        let baseline = by_allocator.get(BASELINE).copied().unwrap_or(0.0);
        let _ = write!(out, "| {workload} |");
        for feature in ALLOCATORS {
            match by_allocator.get(allocator_name(feature)) {
                Some(&ops) => {
                    let relative = if baseline > 0.0 { ops / baseline } else { 0.0 };
                    let _ = write!(out, " {} | **{relative:.2}x** |", format_ops(ops));
                }
                None => out.push_str(" N/A | - |"),
            }
        }
        out.push('\n');
    }
    out
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks criterion's output looking for `<group>/<bench>/<baseline>/estimates.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_results(root, &path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else { continue };
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let Some(baseline) = dir_name(baseline_dir) else { continue };
        let Ok(workload) = workload_dir.strip_prefix(root) else { continue };
        let workload = workload.display().to_string();
        if baseline == "report" || workload.ends_with("report") {
            continue;
        }

        let estimates: Estimates = read_json(&path)?;
        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }

        let elements = read_json::<BenchmarkInfo>(&baseline_dir.join("benchmark.json"))
            .ok()
            .and_then(|info| info.throughput)
            .map_or(1.0, |t| match t {
                #[allow(clippy::cast_precision_loss)]
                Throughput::Elements(n) | Throughput::Bytes(n) => n as f64,
            });

        results
            .entry(workload)
            .or_default()
            .insert(baseline, elements * 1e9 / time_ns);
    }
    Ok(())
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_owned)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
