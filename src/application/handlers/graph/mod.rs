//! Graph query handlers.

mod summarize_graph;

pub use summarize_graph::{SummarizeGraphHandler, SummarizeGraphQuery, SummarizeGraphResult};
