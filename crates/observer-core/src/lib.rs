//! # observer-core
//!
//! **A toy model of when an observer collapses what it observes.**
//!
//! An observer is a complex distinguishability amplitude `d` plus a classical
//! error rate. From those two numbers the crate derives a deterministic
//! collapse predicate and Monte-Carlo interference statistics, and sweeps the
//! distinguishability scale Λ (amplitude `1/Λ`) across a grid.
//!
//! ## Quick Start
//!
//! ```no_run
//! use observer_core::{DEFAULT_CRITICAL_SCALE, StatisticalModel, SweepRunner, linspace};
//!
//! let model = StatisticalModel::new(0.0, 0.0, 0.05);
//! let grid = linspace(1.0, 10.0, 20).unwrap();
//!
//! let results = SweepRunner::new(1000).with_seed(7).map(&model, &grid).unwrap();
//! for (lambda, r) in grid.iter().zip(&results) {
//!     println!("Λ={lambda:.2}  p(0)={:.3} ± {:.3}", r.mean, r.standard_error);
//! }
//!
//! let unitary = model.collapse_predicate(DEFAULT_CRITICAL_SCALE).unwrap();
//! assert_eq!(unitary, 1.0);
//! ```
//!
//! ## Architecture
//!
//! StatisticalModel (queries + sampling) → sweep (Λ grid) → `Vec<SweepResult>`
//!
//! The crate performs no I/O beyond the opt-in [`SimulationConfig::from_path`];
//! rendering and report files belong to the CLI.

pub mod config;
pub mod error;
pub mod model;
pub mod profile;
pub mod stats;
pub mod sweep;

pub use config::SimulationConfig;
pub use error::{ObserverError, Result};
pub use model::{DEFAULT_CRITICAL_SCALE, DEFAULT_SAMPLE_COUNT, StatisticalModel};
pub use profile::{
    DimensionPoint, ResolutionPoint, binary_entropy, cognitive_dimension, dimension_profile,
    linspace, resolution_point, resolution_profile,
};
pub use stats::SweepResult;
pub use sweep::{SweepRunner, run_sweep, run_sweep_inspect, sweep, sweep_inspect};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
