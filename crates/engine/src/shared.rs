//! Thread-safe handle around the engine
//!
//! The engine lock is held for the whole of each call, so two approvals
//! on the same transaction can never interleave their check and commit.

use crate::engine::{ApprovalOutcome, MultisigEngine};
use crate::error::EngineError;
use crate::event::EngineEvent;
use crate::transaction::{TransactionId, TransactionView};
use boardsig_core::{AccountId, Amount, AssetId};
use boardsig_ledger::AssetLedger;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable, lock-protected engine for concurrent callers
pub struct SharedEngine<L: AssetLedger> {
    inner: Arc<Mutex<MultisigEngine<L>>>,
}

impl<L: AssetLedger> Clone for SharedEngine<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: AssetLedger> SharedEngine<L> {
    pub fn new(engine: MultisigEngine<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MultisigEngine<L>>, EngineError> {
        self.inner.lock().map_err(|_| EngineError::LockPoisoned)
    }

    pub fn propose_transaction(
        &self,
        caller: &AccountId,
        asset: AssetId,
        recipient: AccountId,
        amount: Amount,
    ) -> Result<TransactionId, EngineError> {
        self.lock()?
            .propose_transaction(caller, asset, recipient, amount)
    }

    pub fn approve_transaction(
        &self,
        caller: &AccountId,
        id: TransactionId,
    ) -> Result<ApprovalOutcome, EngineError> {
        self.lock()?.approve_transaction(caller, id)
    }

    pub fn get_transaction(&self, id: TransactionId) -> Result<TransactionView, EngineError> {
        self.lock()?.get_transaction(id)
    }

    pub fn is_approved(&self, id: TransactionId, member: &AccountId) -> Result<bool, EngineError> {
        self.lock()?.is_approved(id, member)
    }

    pub fn is_board_member(&self, id: &AccountId) -> Result<bool, EngineError> {
        Ok(self.lock()?.is_board_member(id))
    }

    pub fn board_members(&self) -> Result<Vec<AccountId>, EngineError> {
        Ok(self.lock()?.board_members().to_vec())
    }

    pub fn balance_of(&self, asset: &AssetId, holder: &AccountId) -> Result<Amount, EngineError> {
        Ok(self.lock()?.balance_of(asset, holder))
    }

    pub fn drain_events(&self) -> Result<Vec<EngineEvent>, EngineError> {
        Ok(self.lock()?.drain_events())
    }

    /// Run `f` with exclusive access to the engine
    pub fn with_engine<R>(
        &self,
        f: impl FnOnce(&mut MultisigEngine<L>) -> R,
    ) -> Result<R, EngineError> {
        let mut guard = self.lock()?;
        Ok(f(&mut *guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardsig_board::BoardRegistry;
    use boardsig_ledger::InMemoryLedger;
    use std::thread;

    fn account(id: &str) -> AccountId {
        AccountId::new(id).unwrap()
    }

    #[test]
    fn test_concurrent_approvals_execute_once() {
        let board_size = 8;
        let members: Vec<_> = (0..board_size).map(|i| account(&format!("M{i}"))).collect();
        let board = BoardRegistry::new(board_size, members.clone()).unwrap();
        let asset = AssetId::new("USDT").unwrap();

        let mut ledger = InMemoryLedger::new();
        ledger
            .deposit(&asset, &account("CUSTODY"), Amount::from_units(1_000))
            .unwrap();
        let shared = SharedEngine::new(MultisigEngine::new(board, account("CUSTODY"), ledger));

        let id = shared
            .propose_transaction(&members[0], asset.clone(), account("BOB"), Amount::from_units(100))
            .unwrap();

        // Every member approves twice from two threads
        let handles: Vec<_> = members
            .iter()
            .flat_map(|m| [m.clone(), m.clone()])
            .map(|member| {
                let engine = shared.clone();
                thread::spawn(move || engine.approve_transaction(&member, id))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let executed = results
            .iter()
            .filter(|r| matches!(r, Ok(outcome) if outcome.executed))
            .count();
        let accepted = results.iter().filter(|r| r.is_ok()).count();

        assert_eq!(executed, 1);
        assert_eq!(accepted, board_size);
        assert!(shared.get_transaction(id).unwrap().executed);
        assert_eq!(
            shared.balance_of(&asset, &account("BOB")).unwrap(),
            Amount::from_units(100)
        );

        let executions = shared
            .drain_events()
            .unwrap()
            .into_iter()
            .filter(|e| matches!(e, EngineEvent::TransactionExecuted { .. }))
            .count();
        assert_eq!(executions, 1);

        for member in &members {
            assert!(shared.is_approved(id, member).unwrap());
        }
        assert!(!shared.is_approved(id, &account("BOB")).unwrap());
    }

    #[test]
    fn test_roster_queries_through_handle() {
        let members: Vec<_> = ["ALICE", "BOB", "CAROL"].into_iter().map(account).collect();
        let board = BoardRegistry::new(3, members.clone()).unwrap();
        let shared = SharedEngine::new(MultisigEngine::new(
            board,
            account("VAULT"),
            InMemoryLedger::new(),
        ));

        assert_eq!(shared.board_members().unwrap(), members);
        assert!(shared.is_board_member(&account("carol")).unwrap());
        assert!(!shared.is_board_member(&account("VAULT")).unwrap());

        let custody = shared
            .with_engine(|engine| engine.custody_account().clone())
            .unwrap();
        assert_eq!(custody, account("VAULT"));

        // Funding goes through the same exclusive handle
        let asset = AssetId::new("USDT").unwrap();
        shared
            .with_engine(|engine| {
                engine
                    .ledger_mut()
                    .deposit(&asset, &account("VAULT"), Amount::from_units(50))
            })
            .unwrap()
            .unwrap();
        assert_eq!(
            shared.balance_of(&asset, &account("VAULT")).unwrap(),
            Amount::from_units(50)
        );
    }
}
