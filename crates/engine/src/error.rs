//! Engine errors

use crate::transaction::TransactionId;
use boardsig_ledger::LedgerError;
use thiserror::Error;

/// Errors from the authorization engine
///
/// Every variant is returned with the engine state unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Not a board member: {0}")]
    Unauthorized(String),

    #[error("Amount must be greater than 0")]
    InvalidAmount,

    #[error("Invalid recipient {recipient}: {reason}")]
    InvalidRecipient {
        recipient: String,
        reason: &'static str,
    },

    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),

    #[error("Already approved: transaction {id} by {member}")]
    AlreadyApproved { id: TransactionId, member: String },

    #[error("Transaction {0} already executed")]
    AlreadyExecuted(TransactionId),

    #[error("Transfer for transaction {id} failed: {source}")]
    TransferFailed {
        id: TransactionId,
        #[source]
        source: LedgerError,
    },

    #[error("Engine lock poisoned")]
    LockPoisoned,
}
