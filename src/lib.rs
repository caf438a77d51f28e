//! Minimum Mean Cycle solver: finds the simple cycle of an undirected,
//! edge-weighted graph minimizing mean edge weight, via the Edmonds–Johnson
//! T-join reduction driven by an exact-rational parametric search over γ.
//!
//! See [`core`] for the graph/DIMACS/algorithm modules and
//! [`core::engine::find_minimum_mean_cycle`] for the entry point.

pub mod core;
#[cfg(feature = "logging")]
mod settings;
