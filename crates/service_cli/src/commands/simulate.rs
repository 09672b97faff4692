//! Simulate command implementation
//!
//! Runs the Monte Carlo task-completion sampler and renders the report.

use tracing::info;
use viz_core::types::{SimulationResult, Task};
use viz_sampler::{Sampler, SamplerConfig};

use crate::{CliError, Result};

/// Run the simulate command
#[allow(clippy::too_many_arguments)]
pub fn run(
    a_min: f64,
    a_max: f64,
    b_min: f64,
    b_max: f64,
    hours: f64,
    trials: usize,
    seed: Option<u64>,
    format: &str,
) -> Result<()> {
    info!("Starting simulation...");
    info!("  Task A: {} - {} hours", a_min, a_max);
    info!("  Task B: {} - {} hours", b_min, b_max);
    info!("  Available: {} hours, {} trials", hours, trials);

    let mut builder = SamplerConfig::builder()
        .task_a(Task::new("Task A", a_min, a_max))
        .task_b(Task::new("Task B", b_min, b_max))
        .available_hours(hours)
        .n_trials(trials);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    let mut sampler = Sampler::new(config)?;
    let result = sampler.run();

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "report" => {
            print_report(&result);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, report",
                other
            )));
        }
    }

    info!("Simulation complete");
    Ok(())
}

fn print_report(result: &SimulationResult) {
    println!("\nMonte Carlo simulation report");
    println!(
        "  Probability: {:.1}% ({} of {} trials)",
        result.probability * 100.0,
        result.success_count,
        result.total_trials
    );
    println!("  Threshold:   {} hours (inclusive)", result.threshold);
    println!(
        "  Durations:   min {:.2}, mean {:.2}, max {:.2} hours",
        result.min_duration(),
        result.mean_duration(),
        result.max_duration()
    );

    if result.probability >= 0.8 {
        println!("  Verdict:     high chance of completing both tasks in time");
    } else if result.probability >= 0.5 {
        println!("  Verdict:     moderate chance of completing both tasks in time");
    } else {
        println!("  Verdict:     low chance of completing both tasks in time");
    }
}
