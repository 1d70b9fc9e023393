//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Reader Ports
//!
//! - `JudgementReader` - Value catalogue and pairwise judgements
//! - `DemographicReader` - Per-user demographic records
//! - `VoteReader` - Vote and impression events

mod demographic_reader;
mod judgement_reader;
mod reader_error;
mod vote_reader;

pub use demographic_reader::DemographicReader;
pub use judgement_reader::JudgementReader;
pub use reader_error::ReaderError;
pub use vote_reader::VoteReader;
