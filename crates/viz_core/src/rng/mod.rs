//! # Random Source Infrastructure
//!
//! This module provides the randomness facilities shared by the trace engine
//! and the Monte Carlo sampler.
//!
//! ## Design Rationale
//!
//! - **Injectability**: both engines take any [`UniformSource`], so tests can
//!   script exact pivot choices and trial draws instead of asserting only
//!   structural invariants
//! - **Reproducibility**: [`VizRng`] supports seeding for deterministic
//!   sequences
//! - **Single source of randomness**: everything derives from uniform
//!   variates in `[0, 1)`; index and duration draws are provided methods on
//!   the trait
//!
//! ## Module Structure
//!
//! - [`source`]: The [`UniformSource`] trait and the scripted replay source
//! - [`prng`]: Seeded pseudo-random number generator wrapper
//!
//! ## Usage Example
//!
//! ```rust
//! use viz_core::rng::{ScriptedSource, UniformSource, VizRng};
//!
//! // Seeded RNG for reproducible runs
//! let mut rng = VizRng::from_seed(12345);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Scripted source for exact, replayable draws
//! let mut scripted = ScriptedSource::new(vec![0.0, 0.5]);
//! assert_eq!(scripted.pick_index(0, 9), 0);
//! assert_eq!(scripted.pick_index(0, 9), 5);
//! ```

pub mod prng;
pub mod source;

// Re-exports for convenient access
pub use prng::VizRng;
pub use source::{ScriptedSource, UniformSource};
