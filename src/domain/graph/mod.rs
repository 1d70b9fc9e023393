//! Graph Module - Condenses pairwise judgements into the moral graph.
//!
//! # Pipeline
//!
//! 1. `JudgementFolder` - folds judgements into a `PairMap` (forward + reverse pass)
//! 2. `EdgeCooker` - scores each pair with wiser-likelihood and entropy
//! 3. `EdgePolicy` - drops edges lacking signal or consensus
//! 4. `GraphAssembler` - keeps only values referenced by surviving edges
//!
//! Everything here is pure and synchronous. Store access lives behind the
//! `JudgementReader` and `DemographicReader` ports.

mod cooking;
mod entropy;
mod folding;
mod pair_map;
mod policy;
mod records;
mod summary;

pub use cooking::{CookedEdge, EdgeCooker, EdgeSummary};
pub use entropy::shannon_entropy;
pub use folding::JudgementFolder;
pub use pair_map::{EdgeCounts, PairMap, PoliticalTally, RawPairCount};
pub use policy::{
    EdgePolicy, DEFAULT_MAX_ENTROPY, DEFAULT_MIN_WISER_LIKELIHOOD, DEFAULT_MIN_WISER_VOTES,
};
pub use records::{Affiliation, Demographic, Judgement, Relationship, Value};
pub use summary::{summarize, GraphAssembler, MoralGraphSummary};
