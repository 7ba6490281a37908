//! BoardSig Core - Domain types
//!
//! This crate contains the fundamental types shared across BoardSig:
//! - `Amount`: Non-negative decimal wrapper for transfer quantities
//! - `AccountId`: Identity of a board member, recipient or custody holder
//! - `AssetId`: Opaque identifier of a transferable asset

pub mod amount;
pub mod id;

pub use amount::{Amount, AmountError};
pub use id::{AccountId, AssetId, IdError};
