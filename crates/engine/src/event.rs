//! Engine events for external observers
//!
//! Events are buffered by the engine and handed out with
//! `MultisigEngine::drain_events`. They are facts: a rejected call never
//! produces one.

use crate::transaction::TransactionId;
use boardsig_core::{AccountId, Amount, AssetId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A new transaction was appended to the log (emitted exactly once per id)
    TransactionProposed {
        id: TransactionId,
        proposer: AccountId,
        asset: AssetId,
        recipient: AccountId,
        amount: Amount,
        digest: String,
        timestamp: DateTime<Utc>,
    },

    /// A board member's approval was recorded
    TransactionApproved {
        id: TransactionId,
        member: AccountId,
        approval_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// The final approval triggered the transfer
    TransactionExecuted {
        id: TransactionId,
        asset: AssetId,
        recipient: AccountId,
        amount: Amount,
        timestamp: DateTime<Utc>,
    },
}

impl EngineEvent {
    pub fn transaction_id(&self) -> TransactionId {
        match self {
            EngineEvent::TransactionProposed { id, .. }
            | EngineEvent::TransactionApproved { id, .. }
            | EngineEvent::TransactionExecuted { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            EngineEvent::TransactionProposed { .. } => "transaction_proposed",
            EngineEvent::TransactionApproved { .. } => "transaction_approved",
            EngineEvent::TransactionExecuted { .. } => "transaction_executed",
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            EngineEvent::TransactionProposed { timestamp, .. }
            | EngineEvent::TransactionApproved { timestamp, .. }
            | EngineEvent::TransactionExecuted { timestamp, .. } => *timestamp,
        }
    }
}
