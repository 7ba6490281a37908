//! Application context - wires config, ledger, engine and journal together

use crate::config::BoardConfig;
use boardsig_board::{BoardError, BoardRegistry};
use boardsig_core::{AccountId, Amount, AssetId};
use boardsig_engine::{ApprovalOutcome, EngineError, EngineEvent, MultisigEngine, TransactionId};
use boardsig_events::{EventError, EventReader, EventStore, JournalRecord};
use boardsig_ledger::{InMemoryLedger, LedgerError};
use std::path::{Path, PathBuf};

/// Errors while building or driving the context
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Event store error: {0}")]
    Event(#[from] EventError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Journal replay diverged at transaction {id}: {reason}")]
    ReplayDiverged { id: TransactionId, reason: String },
}

/// Application context
///
/// Every run starts from the configured roster and seed balances, then
/// replays the journal so the engine ends up where the last run left it.
pub struct AppContext {
    pub engine: MultisigEngine<InMemoryLedger>,
    event_store: EventStore,
    journal_path: PathBuf,
    replayed: usize,
}

impl AppContext {
    pub fn new(config: &BoardConfig, data_path: impl AsRef<Path>) -> Result<Self, ContextError> {
        let journal_path = data_path.as_ref().join("journal");
        std::fs::create_dir_all(&journal_path)?;

        let board = BoardRegistry::new(config.board_size, config.members.clone())?;

        let mut ledger = InMemoryLedger::new();
        for seed in &config.initial_balances {
            let holder = seed.holder.as_ref().unwrap_or(&config.custody_account);
            ledger.deposit(&seed.asset, holder, seed.amount)?;
        }

        let mut engine = MultisigEngine::new(board, config.custody_account.clone(), ledger);

        let records = EventReader::from_directory(&journal_path)?.read_all()?;
        let replayed = replay(&mut engine, &records)?;
        tracing::info!(replayed, transactions = engine.transaction_count(), "Journal replayed");

        let event_store = EventStore::new(&journal_path)?;

        Ok(Self {
            engine,
            event_store,
            journal_path,
            replayed,
        })
    }

    /// Propose and journal
    pub fn propose(
        &mut self,
        caller: &AccountId,
        asset: AssetId,
        recipient: AccountId,
        amount: Amount,
        correlation_id: &str,
    ) -> Result<TransactionId, ContextError> {
        let id = self
            .engine
            .propose_transaction(caller, asset, recipient, amount)?;
        self.commit(correlation_id)?;
        Ok(id)
    }

    /// Approve and journal
    pub fn approve(
        &mut self,
        caller: &AccountId,
        id: TransactionId,
        correlation_id: &str,
    ) -> Result<ApprovalOutcome, ContextError> {
        let outcome = self.engine.approve_transaction(caller, id)?;
        self.commit(correlation_id)?;
        Ok(outcome)
    }

    /// Drain the engine's events into the journal
    pub fn commit(&mut self, correlation_id: &str) -> Result<Vec<EngineEvent>, ContextError> {
        let events = self.engine.drain_events();
        let records: Vec<_> = events
            .iter()
            .cloned()
            .map(|event| JournalRecord::new(correlation_id, event))
            .collect();
        self.event_store.append_all(&records)?;
        Ok(events)
    }

    /// Journal contents, oldest first
    pub fn history(&self) -> Result<Vec<JournalRecord>, ContextError> {
        Ok(EventReader::from_directory(&self.journal_path)?.read_all()?)
    }

    pub fn journal_path(&self) -> &Path {
        &self.journal_path
    }

    /// Number of journal records applied on startup
    pub fn replayed(&self) -> usize {
        self.replayed
    }
}

/// Re-run journaled proposals and approvals against a fresh engine
fn replay(
    engine: &mut MultisigEngine<InMemoryLedger>,
    records: &[JournalRecord],
) -> Result<usize, ContextError> {
    for record in records {
        match &record.event {
            EngineEvent::TransactionProposed {
                id,
                proposer,
                asset,
                recipient,
                amount,
                ..
            } => {
                let assigned = engine
                    .propose_transaction(proposer, asset.clone(), recipient.clone(), *amount)
                    .map_err(|e| diverged(*id, e))?;
                if assigned != *id {
                    return Err(ContextError::ReplayDiverged {
                        id: *id,
                        reason: format!("proposal assigned id {assigned}"),
                    });
                }
            }
            EngineEvent::TransactionApproved {
                id,
                member,
                approval_count,
                ..
            } => {
                let outcome = engine
                    .approve_transaction(member, *id)
                    .map_err(|e| diverged(*id, e))?;
                if outcome.approval_count != *approval_count {
                    return Err(ContextError::ReplayDiverged {
                        id: *id,
                        reason: format!(
                            "approval count {} instead of {approval_count}",
                            outcome.approval_count
                        ),
                    });
                }
            }
            EngineEvent::TransactionExecuted { id, .. } => {
                let executed = engine
                    .get_transaction(*id)
                    .map_err(|e| diverged(*id, e))?
                    .executed;
                if !executed {
                    return Err(ContextError::ReplayDiverged {
                        id: *id,
                        reason: "journal records an execution the engine did not repeat".to_string(),
                    });
                }
            }
        }
    }

    // Replayed events are already in the journal
    engine.drain_events();
    Ok(records.len())
}

fn diverged(id: TransactionId, error: EngineError) -> ContextError {
    ContextError::ReplayDiverged {
        id,
        reason: error.to_string(),
    }
}
