//! Authorization engine

use crate::error::EngineError;
use crate::event::EngineEvent;
use crate::transaction::{Approval, Transaction, TransactionId, TransactionView};
use boardsig_board::BoardRegistry;
use boardsig_core::{AccountId, Amount, AssetId};
use boardsig_ledger::AssetLedger;
use chrono::Utc;

/// Result of a successful approval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalOutcome {
    pub id: TransactionId,
    /// Approvals recorded so far, including this one
    pub approval_count: usize,
    /// Approvals needed for execution (the board size)
    pub required: usize,
    /// True when this approval executed the transfer
    pub executed: bool,
}

impl ApprovalOutcome {
    pub fn remaining(&self) -> usize {
        self.required.saturating_sub(self.approval_count)
    }
}

/// Unanimous multi-signature engine over a custody account
///
/// Owns the board, the transaction log and the ledger handle. Every
/// mutating call takes `&mut self`, so each transition runs to completion
/// before the next one starts. Use `SharedEngine` for concurrent callers.
pub struct MultisigEngine<L: AssetLedger> {
    board: BoardRegistry,
    custody: AccountId,
    ledger: L,
    transactions: Vec<Transaction>,
    pending_events: Vec<EngineEvent>,
}

impl<L: AssetLedger> MultisigEngine<L> {
    /// `custody` is the account the ledger debits when a transfer executes
    pub fn new(board: BoardRegistry, custody: AccountId, ledger: L) -> Self {
        Self {
            board,
            custody,
            ledger,
            transactions: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    pub fn board(&self) -> &BoardRegistry {
        &self.board
    }

    pub fn board_members(&self) -> &[AccountId] {
        self.board.members()
    }

    pub fn is_board_member(&self, id: &AccountId) -> bool {
        self.board.is_board_member(id)
    }

    pub fn custody_account(&self) -> &AccountId {
        &self.custody
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Direct ledger access for funding the custody account
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn balance_of(&self, asset: &AssetId, holder: &AccountId) -> Amount {
        self.ledger.balance_of(asset, holder)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Full records, in id order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Submit a new transfer request
    ///
    /// The proposer is not counted as an approver; proposing and
    /// approving are separate actions.
    pub fn propose_transaction(
        &mut self,
        caller: &AccountId,
        asset: AssetId,
        recipient: AccountId,
        amount: Amount,
    ) -> Result<TransactionId, EngineError> {
        if !self.board.is_board_member(caller) {
            tracing::warn!(%caller, "Proposal rejected: not a board member");
            return Err(EngineError::Unauthorized(caller.to_string()));
        }
        if amount.is_zero() {
            return Err(EngineError::InvalidAmount);
        }
        if recipient == self.custody {
            return Err(EngineError::InvalidRecipient {
                recipient: recipient.to_string(),
                reason: "recipient is the custody account",
            });
        }

        let id = self.transactions.len() as TransactionId;
        let tx = Transaction::new(id, caller.clone(), asset, recipient, amount);

        tracing::info!(
            id,
            proposer = %caller,
            asset = %tx.asset,
            recipient = %tx.recipient,
            amount = %tx.amount,
            "Transaction proposed"
        );

        self.pending_events.push(EngineEvent::TransactionProposed {
            id,
            proposer: caller.clone(),
            asset: tx.asset.clone(),
            recipient: tx.recipient.clone(),
            amount: tx.amount,
            digest: tx.digest.clone(),
            timestamp: tx.proposed_at,
        });
        self.transactions.push(tx);

        Ok(id)
    }

    /// Record `caller`'s approval, executing the transfer on the last one
    ///
    /// The approval is staged until the ledger accepts the transfer. If
    /// the transfer fails, nothing is recorded and the member can retry.
    pub fn approve_transaction(
        &mut self,
        caller: &AccountId,
        id: TransactionId,
    ) -> Result<ApprovalOutcome, EngineError> {
        let required = self.board.size();
        let index = self.index_of(id)?;

        if !self.board.is_board_member(caller) {
            tracing::warn!(%caller, id, "Approval rejected: not a board member");
            return Err(EngineError::Unauthorized(caller.to_string()));
        }

        let tx = &self.transactions[index];
        if tx.executed {
            return Err(EngineError::AlreadyExecuted(id));
        }
        if tx.has_approved(caller) {
            return Err(EngineError::AlreadyApproved {
                id,
                member: caller.to_string(),
            });
        }

        let approval_count = tx.approval_count() + 1;
        let completes_board = approval_count == required;

        if completes_board {
            if let Err(source) =
                self.ledger
                    .transfer(&self.custody, &tx.asset, &tx.recipient, tx.amount)
            {
                tracing::warn!(id, member = %caller, error = %source, "Execution transfer failed");
                return Err(EngineError::TransferFailed { id, source });
            }
        }

        // Commit point: nothing below can fail
        let now = Utc::now();
        let tx = &mut self.transactions[index];
        tx.approvals.push(Approval {
            member: caller.clone(),
            approved_at: now,
        });
        self.pending_events.push(EngineEvent::TransactionApproved {
            id,
            member: caller.clone(),
            approval_count,
            timestamp: now,
        });
        tracing::debug!(id, member = %caller, approval_count, required, "Approval recorded");

        if completes_board {
            tx.executed = true;
            tx.executed_at = Some(now);
            self.pending_events.push(EngineEvent::TransactionExecuted {
                id,
                asset: tx.asset.clone(),
                recipient: tx.recipient.clone(),
                amount: tx.amount,
                timestamp: now,
            });
            tracing::info!(
                id,
                asset = %tx.asset,
                recipient = %tx.recipient,
                amount = %tx.amount,
                "Transaction executed"
            );
        }

        Ok(ApprovalOutcome {
            id,
            approval_count,
            required,
            executed: completes_board,
        })
    }

    /// Read-only view of a transaction
    pub fn get_transaction(&self, id: TransactionId) -> Result<TransactionView, EngineError> {
        self.transaction(id).map(Transaction::view)
    }

    /// Full record, including approval timestamps
    pub fn transaction(&self, id: TransactionId) -> Result<&Transaction, EngineError> {
        let index = self.index_of(id)?;
        Ok(&self.transactions[index])
    }

    /// Whether `member` approved `id` (false for non-members, never an error)
    pub fn is_approved(&self, id: TransactionId, member: &AccountId) -> Result<bool, EngineError> {
        Ok(self.transaction(id)?.has_approved(member))
    }

    /// Events emitted since the last drain
    pub fn events(&self) -> &[EngineEvent] {
        &self.pending_events
    }

    /// Hand emitted events to the caller, oldest first
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn index_of(&self, id: TransactionId) -> Result<usize, EngineError> {
        usize::try_from(id)
            .ok()
            .filter(|index| *index < self.transactions.len())
            .ok_or(EngineError::NotFound(id))
    }
}
