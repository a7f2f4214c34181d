//! Time-series utilities shared by the aggregation orchestrator.
//!
//! Modules include:
//! - `join`: dominance derivation and the outer join of dated series
//! - `fill`: the deterministic gap-fill policy (interpolate, then forward fill)
/// Dominance derivation and date-keyed outer join.
pub mod join;
/// Gap-fill policy applied to a joined table.
pub mod fill;
