//! In-memory reference ledger
//!
//! Tracks balances per (asset, holder). Transfers are validated against a
//! projected state first and only then applied, so a refused transfer never
//! leaves a half-applied debit behind.

use crate::error::LedgerError;
use crate::AssetLedger;
use boardsig_core::{AccountId, Amount, AssetId};
use std::collections::{HashMap, HashSet};

/// Balance table for every (asset, holder) pair
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    balances: HashMap<(AssetId, AccountId), Amount>,
    revoked: HashSet<AssetId>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `holder` out of thin air (bootstrap / funding)
    pub fn deposit(
        &mut self,
        asset: &AssetId,
        holder: &AccountId,
        amount: Amount,
    ) -> Result<Amount, LedgerError> {
        let current = self.balance_of(asset, holder);
        let updated = current
            .checked_add(&amount)
            .ok_or_else(|| LedgerError::Overflow {
                holder: holder.to_string(),
                asset: asset.to_string(),
            })?;

        self.balances
            .insert((asset.clone(), holder.clone()), updated);
        tracing::debug!(%asset, %holder, %amount, balance = %updated, "Deposit applied");
        Ok(updated)
    }

    /// Refuse every later transfer of `asset`
    pub fn revoke(&mut self, asset: &AssetId) {
        tracing::warn!(%asset, "Asset revoked");
        self.revoked.insert(asset.clone());
    }

    pub fn is_revoked(&self, asset: &AssetId) -> bool {
        self.revoked.contains(asset)
    }

    /// All non-zero balances (for inspection/testing)
    pub fn balances(&self) -> impl Iterator<Item = (&AssetId, &AccountId, Amount)> {
        self.balances
            .iter()
            .filter(|(_, amount)| !amount.is_zero())
            .map(|((asset, holder), amount)| (asset, holder, *amount))
    }
}

impl AssetLedger for InMemoryLedger {
    fn transfer(
        &mut self,
        from: &AccountId,
        asset: &AssetId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if self.is_revoked(asset) {
            return Err(LedgerError::AssetRevoked(asset.to_string()));
        }
        if from == to {
            return Err(LedgerError::SelfTransfer(from.to_string()));
        }

        // Project both legs before touching the table
        let available = self.balance_of(asset, from);
        let debited = available
            .checked_sub(&amount)
            .ok_or_else(|| LedgerError::InsufficientBalance {
                holder: from.to_string(),
                asset: asset.to_string(),
                available: available.to_string(),
                required: amount.to_string(),
            })?;
        let credited = self
            .balance_of(asset, to)
            .checked_add(&amount)
            .ok_or_else(|| LedgerError::Overflow {
                holder: to.to_string(),
                asset: asset.to_string(),
            })?;

        self.balances.insert((asset.clone(), from.clone()), debited);
        self.balances.insert((asset.clone(), to.clone()), credited);

        tracing::debug!(%asset, %from, %to, %amount, "Transfer applied");
        Ok(())
    }

    fn balance_of(&self, asset: &AssetId, holder: &AccountId) -> Amount {
        self.balances
            .get(&(asset.clone(), holder.clone()))
            .copied()
            .unwrap_or(Amount::ZERO)
    }
}
