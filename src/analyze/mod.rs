// src/analyze/mod.rs
//! Heuristic classification: pattern rules and the per-page classifier.

pub mod classify;
pub mod rules;

// Re-export convenient types.
pub use crate::analyze::classify::classify_page;
pub use crate::analyze::rules::{CompiledRules, RuleSet};
