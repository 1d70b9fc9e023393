//! Moral Graph - Aggregates pairwise value judgements into a published graph.
//!
//! Participants compare two value statements and say whether the second is
//! wiser than the first. This crate folds those judgements into directed,
//! scored edges, filters them for signal and consensus, and reports
//! per-value vote statistics broken down by political affiliation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
