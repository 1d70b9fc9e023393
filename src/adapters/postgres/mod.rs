//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! - `PostgresMoralGraphReader` - Values, judgements, demographics, votes, and impressions

mod moral_graph_reader;

pub use moral_graph_reader::PostgresMoralGraphReader;
