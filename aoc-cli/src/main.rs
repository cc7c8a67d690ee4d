//! AOC CLI - run Advent of Code solutions and keep the README index current

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod logging;
mod output;
mod readme;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{RegistryBuilder, SolverError, SolverRegistry};
use clap::Parser;
use cli::{Args, Command};
use config::{ReadmeConfig, RunConfig};
use error::{ArcExecutorError, CliError};
use executor::{Executor, Plan, SolverResult};
use input::InputLoader;
use output::OutputFormatter;

fn main() {
    logging::init();
    let args = Args::parse();

    let outcome = match args.command {
        Command::Run(run_args) => RunConfig::from_args(run_args).and_then(run),
        Command::Readme(readme_args) => {
            readme::write_readme(&ReadmeConfig::from_args(readme_args)).map_err(CliError::from)
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: RunConfig) -> Result<(), CliError> {
    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    run_with_registry(config, registry)
}

/// Plan, execute and print a run; the result decides the exit status
fn run_with_registry(config: RunConfig, registry: SolverRegistry) -> Result<(), CliError> {
    tracing::debug!(days = registry.len(), years = ?registry.years(), "registry built");

    let loader =
        InputLoader::new(config.input_dir.clone()).with_override(config.input_override.clone());
    tracing::debug!(input_dir = %loader.input_dir().display(), "inputs");

    let executor =
        Executor::new(registry, loader, &config).map_err(ArcExecutorError::from)?;
    let plan = executor.plan();

    check_single_day(&config, &plan)?;

    let formatter = OutputFormatter::new(config.quiet, config.show_description);
    formatter.print_not_implemented(&plan.not_implemented);

    if plan.work_items.is_empty() {
        println!("No solutions found matching the specified filters.");
        return Ok(());
    }

    let results = run_executor(
        executor,
        plan.work_items,
        formatter,
        plan.not_implemented.len(),
    )?;

    check_results(&results)
}

/// An unimplemented day is fatal when it is the only day asked for
fn check_single_day(config: &RunConfig, plan: &Plan) -> Result<(), CliError> {
    match config.single_day() {
        Some(puzzle) if plan.not_implemented.contains(&puzzle) => {
            Err(SolverError::NotImplemented(puzzle).into())
        }
        _ => Ok(()),
    }
}

/// Every selected part must have produced an answer
fn check_results(results: &[SolverResult]) -> Result<(), CliError> {
    let failed = results.iter().filter(|r| r.answer.is_err()).count();
    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Run the executor and print results in (year, day, part) order as they arrive
fn run_executor(
    executor: Executor,
    work_items: Vec<executor::WorkItem>,
    mut formatter: OutputFormatter,
    not_implemented: usize,
) -> Result<Vec<SolverResult>, CliError> {
    let expected_keys: Vec<aggregator::ResultKey> =
        work_items.iter().flat_map(|w| w.keys()).collect();
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(work_items, tx));

    let mut results = Vec::new();
    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        tracing::warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results, not_implemented);
    Ok(results)
}
