//! Scoring module - Gap score engine
//!
//! This module provides the scoring pipeline: classification, per-suite
//! scoring, coverage comparison and report assembly.

mod engine;

pub use engine::*;
