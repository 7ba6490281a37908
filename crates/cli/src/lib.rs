//! BoardSig CLI - operator tool
//!
//! This crate provides the `boardsig` binary, its configuration and the
//! context that rebuilds engine state from the journal on every run.

pub mod commands;
pub mod config;
pub mod context;

pub use config::{BoardConfig, InitialBalance};
pub use context::{AppContext, ContextError};
