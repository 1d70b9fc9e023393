//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `graph` - Judgement folding, edge scoring, filtering, and graph assembly
//! - `votes` - Per-value vote statistics with political breakdowns
//! - `scope` - Participant cohorts and query filters

pub mod foundation;
pub mod graph;
pub mod scope;
pub mod votes;
