//! Fixture regeneration module
//!
//! This module contains the regeneration engine, its configuration, and the
//! per-file outcome reporting.

pub mod config;
pub mod engine;
pub mod report;

pub use config::RegenConfig;
pub use engine::{regenerate_fixtures, RegenEngine};
pub use report::{FileOutcome, OutcomeStatus, RegenReport};
