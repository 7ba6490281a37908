//! Transaction records

use boardsig_core::{AccountId, Amount, AssetId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use strum_macros::{Display, EnumString};

/// Zero-based position of a transaction in the log
pub type TransactionId = u64;

/// Lifecycle state of a transaction
///
/// `Executed` is terminal: there is no path back and no cancelled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Collecting approvals
    Proposed,
    /// Transfer issued, record closed
    Executed,
}

/// One board member's sign-off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub member: AccountId,
    pub approved_at: DateTime<Utc>,
}

/// A proposed transfer and its approval progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Board member who submitted the proposal (not counted as an approval)
    pub proposer: AccountId,

    pub asset: AssetId,

    pub recipient: AccountId,

    pub amount: Amount,

    /// Approvals in the order they were recorded
    pub approvals: Vec<Approval>,

    pub executed: bool,

    pub proposed_at: DateTime<Utc>,

    pub executed_at: Option<DateTime<Utc>>,

    /// SHA256 over id, asset, recipient and amount
    pub digest: String,
}

impl Transaction {
    pub(crate) fn new(
        id: TransactionId,
        proposer: AccountId,
        asset: AssetId,
        recipient: AccountId,
        amount: Amount,
    ) -> Self {
        let digest = compute_digest(id, &asset, &recipient, amount);
        Self {
            id,
            proposer,
            asset,
            recipient,
            amount,
            approvals: Vec::new(),
            executed: false,
            proposed_at: Utc::now(),
            executed_at: None,
            digest,
        }
    }

    pub fn approval_count(&self) -> usize {
        self.approvals.len()
    }

    pub fn has_approved(&self, member: &AccountId) -> bool {
        self.approvals.iter().any(|a| &a.member == member)
    }

    /// Members who approved, in approval order
    pub fn approvers(&self) -> Vec<&AccountId> {
        self.approvals.iter().map(|a| &a.member).collect()
    }

    pub fn status(&self) -> TransactionStatus {
        if self.executed {
            TransactionStatus::Executed
        } else {
            TransactionStatus::Proposed
        }
    }

    /// Read-only projection handed to callers
    pub fn view(&self) -> TransactionView {
        TransactionView {
            id: self.id,
            asset: self.asset.clone(),
            recipient: self.recipient.clone(),
            amount: self.amount,
            executed: self.executed,
            approval_count: self.approval_count(),
        }
    }
}

/// Public projection of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionView {
    pub id: TransactionId,
    pub asset: AssetId,
    pub recipient: AccountId,
    pub amount: Amount,
    pub executed: bool,
    pub approval_count: usize,
}

fn compute_digest(id: TransactionId, asset: &AssetId, recipient: &AccountId, amount: Amount) -> String {
    // Normalised so that 100 and 100.00 fingerprint the same
    let amount = amount.value().normalize();
    let mut hasher = Sha256::new();
    hasher.update(format!("{id}|{asset}|{recipient}|{amount}").as_bytes());
    hex::encode(hasher.finalize())
}
