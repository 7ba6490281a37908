//! Ledger errors

use thiserror::Error;

/// Errors that can occur when the ledger refuses a transfer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient {asset} balance for {holder}: available {available}, required {required}")]
    InsufficientBalance {
        holder: String,
        asset: String,
        available: String,
        required: String,
    },

    #[error("Asset revoked: {0}")]
    AssetRevoked(String),

    #[error("Sender and recipient are the same account: {0}")]
    SelfTransfer(String),

    #[error("Balance overflow for {holder} in {asset}")]
    Overflow { holder: String, asset: String },
}
