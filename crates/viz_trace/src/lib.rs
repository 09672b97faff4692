//! # viz_trace: Randomized Quicksort Trace Engine
//!
//! ## Engine Layer Role
//!
//! viz_trace is the core of the workspace: a deterministic step-recording
//! engine for randomized quicksort (a "Las Vegas" algorithm: always
//! correct, runtime randomized). A run produces a complete, faithfully
//! ordered, replayable [`Trace`](viz_core::types::Trace) of every
//! comparison, swap, and pivot decision, sufficient for a presentation
//! layer to scrub forward and backward through the sort without
//! recomputation.
//!
//! # Architecture
//!
//! ```text
//! generate_trace*()
//! ├── StepRecorder      (working array + ordered step sink)
//! ├── UniformSource     (injectable pivot randomness)
//! └── sort_range()      (recursive partition with full step emission)
//! ```
//!
//! # Determinism
//!
//! The trace is deterministic in structure but non-deterministic in the
//! content of pivot choices: successive entropy-seeded calls on identical
//! input generally produce different traces, all of which are valid sorts.
//! Inject a seeded [`VizRng`](viz_core::rng::VizRng) or a
//! [`ScriptedSource`](viz_core::rng::ScriptedSource) for exact
//! reproducibility.
//!
//! # Examples
//!
//! ```rust
//! use viz_core::rng::VizRng;
//! use viz_trace::{generate_trace, generate_trace_with};
//!
//! // Entropy-seeded run
//! let trace = generate_trace(&[3.0, 1.0, 2.0]);
//! assert_eq!(trace.first().description, "Initial array");
//! assert_eq!(trace.last().description, "Array is fully sorted");
//! assert_eq!(trace.last().values(), vec![1.0, 2.0, 3.0]);
//!
//! // Seeded, reproducible run
//! let mut rng = VizRng::from_seed(42);
//! let replayable = generate_trace_with(&[3.0, 1.0, 2.0], &mut rng);
//! assert!(replayable.last().all_sorted());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod generator;
pub mod recorder;

// Re-exports for convenient access
pub use generator::{generate_trace, generate_trace_checked, generate_trace_with, validate_values};
pub use recorder::StepRecorder;
