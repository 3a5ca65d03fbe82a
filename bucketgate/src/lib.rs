// bucketgate/src/lib.rs
//! # bucketgate CLI
//!
//! Terminal driver for `bucketgate-core`. It builds a limiter from flags or a YAML
//! file, replays a paced request loop against it and reports each decision.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::simulate::{run_simulation, SimulationOptions, SimulationReport};
