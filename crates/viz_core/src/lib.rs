//! # viz_core: Shared Foundation for the Algoviz Engines
//!
//! ## Foundation Layer Role
//!
//! viz_core is the bottom layer of the workspace, providing:
//! - The trace data model: `SortElement`, `TraceStep`, `Trace` (`types`)
//! - The simulation data model: `Task`, `SimulationResult` (`types`)
//! - Structured input validation errors: `InputError` (`types::error`)
//! - The injectable random-source abstraction: `UniformSource`, `VizRng`,
//!   `ScriptedSource` (`rng`)
//!
//! ## Minimal Dependency Principle
//!
//! The foundation layer depends on no other viz_* crates and keeps its
//! external surface small:
//! - rand: seeded pseudo-random number generation
//! - serde: serialisation of the data model for presentation layers
//! - thiserror: structured error enums
//!
//! ## Usage Examples
//!
//! ```rust
//! use viz_core::rng::{UniformSource, VizRng};
//! use viz_core::types::{ElementStatus, SortElement, Task};
//!
//! // Seeded, reproducible randomness
//! let mut rng = VizRng::from_seed(42);
//! let pivot = rng.pick_index(0, 9);
//! assert!(pivot <= 9);
//!
//! // Data model construction
//! let element = SortElement::new(7.0);
//! assert_eq!(element.status, ElementStatus::Unsorted);
//!
//! let task = Task::new("Write report", 2.0, 4.0);
//! assert!(task.validate().is_ok());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod types;

// Re-export commonly used items for convenience
pub use rng::{ScriptedSource, UniformSource, VizRng};
pub use types::{
    ElementStatus, InputError, SimulationResult, SortElement, Task, Trace, TraceStep,
};
