//! # viz_sampler: Monte Carlo Task-Completion Sampler
//!
//! ## Engine Layer Role
//!
//! viz_sampler estimates the probability that two tasks with uncertain
//! durations finish within an availability bound. Each trial draws one
//! duration per task uniformly from its range, sums them, and tests the sum
//! against the bound (inclusive). The aggregate
//! [`SimulationResult`](viz_core::types::SimulationResult) is produced
//! atomically after all trials complete.
//!
//! # Architecture
//!
//! ```text
//! Sampler
//! ├── SamplerConfig   (validated trial parameters, built via builder)
//! ├── UniformSource   (injectable trial randomness)
//! └── run()           (trial loop + aggregation)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use viz_core::types::Task;
//! use viz_sampler::{Sampler, SamplerConfig};
//!
//! let config = SamplerConfig::builder()
//!     .task_a(Task::new("Write report", 2.0, 4.0))
//!     .task_b(Task::new("Review slides", 3.0, 6.0))
//!     .available_hours(8.0)
//!     .n_trials(1000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut sampler = Sampler::new(config).unwrap();
//! let result = sampler.run();
//!
//! assert_eq!(result.total_trials, 1000);
//! assert!((0.0..=1.0).contains(&result.probability));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod error;
pub mod sampler;

// Re-exports for convenient access
pub use config::{SamplerConfig, SamplerConfigBuilder, DEFAULT_TRIALS, MAX_TRIALS, MIN_TRIALS};
pub use error::ConfigError;
pub use sampler::Sampler;
