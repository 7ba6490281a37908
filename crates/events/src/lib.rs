//! BoardSig Events - JSONL journal
//!
//! Persists engine events as JSON lines, one file per UTC day. The
//! journal is the durable history of proposals and approvals; engine
//! state can be rebuilt from it by replay.

pub mod error;
pub mod reader;
pub mod record;
pub mod store;

pub use error::EventError;
pub use reader::EventReader;
pub use record::JournalRecord;
pub use store::EventStore;
