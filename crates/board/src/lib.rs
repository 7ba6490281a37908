//! BoardSig Board - Fixed board of approvers
//!
//! The registry is built once from an ordered candidate list and never
//! changes afterwards. It exposes no mutators.

pub mod error;
pub mod registry;

pub use error::BoardError;
pub use registry::{BoardRegistry, DEFAULT_BOARD_SIZE};
