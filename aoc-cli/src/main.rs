//! aoc2023 - run the Advent of Code 2023 solutions against local inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Link the solution crate so its plugins are registered
use aoc_2023 as _;

use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    let registry = build_registry(&config.tags)?;
    log::info!("{} solver(s) registered", registry.storage().len());

    let executor = Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    if config.input_file.is_some() && work_items.len() > 1 {
        return Err(CliError::Config(format!(
            "--input applies to one puzzle but {} match the filters; add --year",
            work_items.len()
        )));
    }

    for work in executor.missing_inputs(&work_items) {
        log::warn!("no input for {}/{:02}", work.year, work.day);
    }

    run_executor(executor, work_items, config.quiet)
}

/// Run the executor and print results in order as they arrive
fn run_executor(
    executor: Executor,
    work_items: Vec<executor::WorkItem>,
    quiet: bool,
) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys = work_items.iter().flat_map(|w| {
        w.parts.clone().map(move |part| aggregator::ResultKey {
            year: w.year,
            day: w.day,
            part,
        })
    });
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
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
        log::warn!("{} expected result(s) never arrived", aggregator.outstanding());
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
