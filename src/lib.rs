//! Descriptive statistics over penguin body-mass measurements.
//!
//! Raw CSV rows are normalized (`ingest`), filtered and aggregated
//! (`analysis`), then written out as result files (`report`). `pipeline`
//! wires the stages together for the command-line entry point.

pub mod analysis;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
