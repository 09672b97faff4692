//! Trace command implementation
//!
//! Records a randomized quicksort trace and renders it for playback.

use tracing::info;
use viz_core::rng::VizRng;
use viz_core::types::{ElementStatus, SortElement, Trace, TraceStep};
use viz_trace::generate_trace_with;

use crate::parse;
use crate::{CliError, Result};

/// Run the trace command
pub fn run(
    values: Option<&str>,
    random: bool,
    size: Option<usize>,
    seed: Option<u64>,
    format: &str,
) -> Result<()> {
    let input = match (values, random) {
        (Some(list), _) => parse::parse_number_list(list)?,
        (None, true) => parse::random_input(size)?,
        (None, false) => {
            return Err(CliError::InvalidArgument(
                "provide --values or --random".to_string(),
            ))
        }
    };

    info!("Recording quicksort trace...");
    info!("  Input: {:?}", input);
    match seed {
        Some(seed) => info!("  Seed: {}", seed),
        None => info!("  Seed: entropy"),
    }

    let mut rng = seed.map_or_else(VizRng::from_entropy, VizRng::from_seed);
    let trace = generate_trace_with(&input, &mut rng);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&trace)?);
        }
        "table" => {
            print_table(&trace);
        }
        "summary" => {
            print_summary(&input, &trace);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table, summary",
                other
            )));
        }
    }

    info!("Trace complete: {} steps", trace.len());
    Ok(())
}

/// Renders one element with its status marker.
///
/// Markers: `[v]` pivot, `<v>` processing, `*v*` sorted, plain unsorted.
fn render_element(element: &SortElement) -> String {
    match element.status {
        ElementStatus::Pivot => format!("[{}]", element.value),
        ElementStatus::Processing => format!("<{}>", element.value),
        ElementStatus::Sorted => format!("*{}*", element.value),
        ElementStatus::Unsorted => format!("{}", element.value),
    }
}

fn render_array(step: &TraceStep) -> String {
    step.array
        .iter()
        .map(render_element)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_table(trace: &Trace) {
    println!("\nLegend: [pivot]  <processing>  *sorted*\n");
    for (index, step) in trace.iter().enumerate() {
        println!("Step {:>3}: {}", index, step.description);
        println!("          {}", render_array(step));
    }
}

fn print_summary(input: &[f64], trace: &Trace) {
    let comparisons = trace
        .iter()
        .filter(|s| s.description.starts_with("Comparing"))
        .count();
    let swaps = trace
        .iter()
        .filter(|s| s.description.starts_with("Swapped"))
        .count();
    let pivots = trace
        .iter()
        .filter(|s| s.description.starts_with("Randomly selected pivot"))
        .count();

    println!("\nRandomized quicksort trace");
    println!("  Input:       {:?}", input);
    println!("  Steps:       {}", trace.len());
    println!("  Pivots:      {}", pivots);
    println!("  Comparisons: {}", comparisons);
    println!("  Swaps:       {}", swaps);
    println!("  Sorted:      {:?}", trace.last().values());
}
