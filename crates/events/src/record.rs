//! Journal record envelope

use boardsig_engine::EngineEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the journal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    /// Groups the events produced by one operator command
    pub correlation_id: String,

    pub recorded_at: DateTime<Utc>,

    pub event: EngineEvent,
}

impl JournalRecord {
    pub fn new(correlation_id: impl Into<String>, event: EngineEvent) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            recorded_at: Utc::now(),
            event,
        }
    }
}
