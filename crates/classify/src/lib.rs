//! `abcrank-classify` — the classification core.
//!
//! A pure, synchronous batch transformation: given the product catalog and
//! order facts, compute per-SKU delivered revenue, Pareto-style A/B/C tiers
//! from cumulative revenue share, and force dead-stock SKUs into tier C.
//! Inputs are taken as slices of records and never mutated; the only
//! non-deterministic input (the run date) is injected via
//! [`abcrank_core::Clock`].

pub mod classifier;
mod normalize;
mod stale;

#[cfg(test)]
mod integration_tests;

pub use classifier::AbcClassifier;
