//! This crate provides the aggregation core of a statsd-style metrics
//! daemon: the structures that sit between a decoded sample and a flushed
//! summary.
//!
//! Exact answers to "what was the 99th percentile latency" or "how many
//! distinct users did we see" need every sample kept around. The aggregates
//! here trade a bounded, known error for bounded memory instead:
//!
//! * `cm` answers quantile queries with a CM biased-quantile sketch.
//! * `hll` estimates cardinality with HyperLogLog.
//! * `timer`, `counter`, `set` and `histogram` wrap those into per-metric
//!   aggregates.
//! * `metrics` keys aggregates by name for one flush interval, configured
//!   by `config`.
//!
//! None of the aggregates synchronise internally. Give each writer its own
//! registry or guard a shared one with a lock.
#![deny(
    missing_docs,
    missing_copy_implementations,
    missing_debug_implementations,
    unstable_features,
    unused_import_braces
)]

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod cm;
pub mod config;
pub mod counter;
pub mod error;
pub mod heap;
pub mod histogram;
pub mod hll;
pub mod metrics;
pub mod set;
pub mod timer;

pub use crate::error::{Error, Result};
