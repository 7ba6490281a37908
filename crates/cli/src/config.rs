//! Board configuration
//!
//! The roster and the seed balances of the reference ledger come from a
//! JSON file. Only `members` is required; everything else has a default.

use boardsig_board::DEFAULT_BOARD_SIZE;
use boardsig_core::{AccountId, Amount, AssetId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--config` is not given
pub const CONFIG_ENV: &str = "BOARDSIG_CONFIG";

/// Fallback config location
pub const DEFAULT_CONFIG_PATH: &str = "./board.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Seats on the board, which is also the approval threshold
    #[serde(default = "default_board_size")]
    pub board_size: usize,

    /// Account the engine transfers out of
    #[serde(default = "default_custody_account")]
    pub custody_account: AccountId,

    /// Board roster, in seat order
    pub members: Vec<AccountId>,

    /// Balances credited to the reference ledger on startup
    #[serde(default)]
    pub initial_balances: Vec<InitialBalance>,
}

/// One seed balance; `holder` defaults to the custody account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialBalance {
    pub asset: AssetId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<AccountId>,
    pub amount: Amount,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_custody_account() -> AccountId {
    AccountId::new("CUSTODY").expect("static identifier is valid")
}

impl BoardConfig {
    /// Config for `members`, sized to the roster
    pub fn for_members(members: Vec<AccountId>) -> Self {
        Self {
            board_size: members.len(),
            custody_account: default_custody_account(),
            members,
            initial_balances: Vec::new(),
        }
    }

    /// Load configuration from JSON file
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Write configuration as pretty JSON, refusing to overwrite
    pub fn write_new(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .and_then(|mut file| std::io::Write::write_all(&mut file, json.as_bytes()))
    }

    /// Resolve the config path: flag, then environment, then default
    pub fn resolve_path(flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}
