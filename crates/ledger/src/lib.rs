//! BoardSig Ledger - Asset ledger boundary
//!
//! The authorization engine never touches balances directly. It moves
//! funds only through the `AssetLedger` capability defined here.
//!
//! # Key Types
//! - `AssetLedger`: `transfer` + `balance_of` capability
//! - `InMemoryLedger`: Reference implementation used by the CLI and tests
//! - `LedgerError`: Reasons a transfer is refused

pub mod error;
pub mod memory;

pub use error::LedgerError;
pub use memory::InMemoryLedger;

use boardsig_core::{AccountId, Amount, AssetId};

/// Capability consumed by the engine to move custodied assets.
///
/// Implementations must be all-or-nothing: a failed `transfer` leaves
/// every balance untouched.
pub trait AssetLedger {
    /// Move `amount` of `asset` from `from` to `to`
    fn transfer(
        &mut self,
        from: &AccountId,
        asset: &AssetId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Current balance (zero for unknown holders)
    fn balance_of(&self, asset: &AssetId, holder: &AccountId) -> Amount;
}
