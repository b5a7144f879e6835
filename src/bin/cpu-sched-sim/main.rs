//! Command-line front end for the CPU scheduling simulator.

mod logger;

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, LevelFilter};
use term::{color, Attr, Terminal as _};

use cpu_sched_sim::models::RunResult;
use cpu_sched_sim::report::{export, gantt, table};
use cpu_sched_sim::scenarios::Scenario;
use cpu_sched_sim::simulation::{self, Algorithm};
use cpu_sched_sim::workload::{self, WorkloadConfig};
use cpu_sched_sim::Result;

use logger::Terminal;

/// Simulate CPU scheduling algorithms over a process scenario
#[derive(Parser, Debug)]
#[command(name = "cpu-sched-sim")]
#[command(about = "Simulate FCFS, SJF, SRTF and Round Robin scheduling", long_about = None)]
struct Args {
    /// Built-in scenario number (1 = mixed load, 2 = scattered arrivals)
    #[arg(short, long, default_value_t = 1, conflicts_with_all = ["file", "random"])]
    scenario: u32,

    /// Load the scenario from a JSON file
    #[arg(short, long, conflicts_with = "random")]
    file: Option<PathBuf>,

    /// Generate a random scenario with this many processes
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Algorithm: FCFS, SJF, SRTF, RR_Q3, RR_Q6 or ALL
    #[arg(short, long, default_value = "ALL")]
    algorithm: String,

    /// Write the results as JSON to this path
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Log progress information
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    Terminal::install(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    if let Err(e) = start(&args) {
        error!("{e}");
        process::exit(1);
    }
}

fn start(args: &Args) -> Result<()> {
    let scenario = load_scenario(args)?;

    let results = if args.algorithm.trim().eq_ignore_ascii_case("ALL") {
        simulation::run_all(&scenario)?
    } else {
        let algorithm: Algorithm = args.algorithm.parse()?;
        vec![simulation::run(algorithm, &scenario)?]
    };

    for result in &results {
        print_result(result);
    }
    if results.len() > 1 {
        heading(&format!("== Comparison: {} ==", scenario.name));
        print_table(&table::comparison_table(&results));
    }

    if let Some(path) = &args.export {
        match results.as_slice() {
            [single] => export::write_json(path, single)?,
            many => export::write_json_many(path, many)?,
        }
    }

    Ok(())
}

fn load_scenario(args: &Args) -> Result<Scenario> {
    if let Some(path) = &args.file {
        return Scenario::load(path);
    }
    if let Some(count) = args.random {
        let config = WorkloadConfig::new(count).with_seed(args.seed);
        let name = format!("Random ({count} processes, seed {})", args.seed);
        return Ok(Scenario::new(name, workload::generate(&config)));
    }
    Scenario::builtin(args.scenario)
}

fn print_result(result: &RunResult) {
    heading(&format!(
        "== {} | {} ==",
        result.algorithm,
        result.scenario.as_deref().unwrap_or("-")
    ));
    println!("{}\n", gantt::render(&result.intervals));
    print_table(&table::metrics_table(result));
    println!("{}", table::averages_table(&result.aggregates));
}

/// Prints a section heading in bold cyan when the terminal supports it.
fn heading(text: &str) {
    match term::stdout() {
        Some(mut out) => {
            let _ = out.fg(color::CYAN);
            let _ = out.attr(Attr::Bold);
            let _ = write!(out, "{text}");
            let _ = out.reset();
            let _ = writeln!(out);
        }
        None => println!("{text}"),
    }
}

/// Prints a table with its header row in bold.
fn print_table(table: &str) {
    let (header, rows) = split_header(table);
    match term::stdout() {
        Some(mut out) => {
            let _ = out.attr(Attr::Bold);
            let _ = write!(out, "{header}");
            let _ = out.reset();
            let _ = writeln!(out);
        }
        None => println!("{header}"),
    }
    println!("{rows}");
}

fn split_header(table: &str) -> (&str, &str) {
    table.split_once('\n').unwrap_or((table, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_header() {
        assert_eq!(split_header("Name  A\nP1    1\n"), ("Name  A", "P1    1\n"));
        assert_eq!(split_header("Name  A"), ("Name  A", ""));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["cpu-sched-sim"]);
        assert_eq!(args.scenario, 1);
        assert_eq!(args.algorithm, "ALL");
        assert!(args.file.is_none() && args.random.is_none());
    }

    #[test]
    fn test_args_conflict() {
        let parsed = Args::try_parse_from(["cpu-sched-sim", "-f", "a.json", "-r", "4"]);
        assert!(parsed.is_err());
    }
}
