//! # BoardSig Engine
//!
//! Transaction authorization for a shared custody account.
//!
//! ## Flow
//! - A board member proposes a transfer (asset, recipient, amount)
//! - Every board member approves it individually
//! - The approval that completes the board triggers the transfer, once
//!
//! ## Guarantees
//! - Unanimous threshold: approvals must equal the board size
//! - At-most-once execution per transaction id
//! - Failed calls leave the engine exactly as it was

mod engine;
mod error;
pub mod event;
mod shared;
mod transaction;

pub use engine::{ApprovalOutcome, MultisigEngine};
pub use error::EngineError;
pub use event::EngineEvent;
pub use shared::SharedEngine;
pub use transaction::{Approval, Transaction, TransactionId, TransactionStatus, TransactionView};
