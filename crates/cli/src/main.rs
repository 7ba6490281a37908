//! BoardSig CLI - Main entry point

use boardsig_cli::{commands, AppContext, BoardConfig};
use boardsig_core::{AccountId, Amount, AssetId};
use boardsig_engine::TransactionId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "boardsig")]
#[command(about = "BoardSig - unanimous board custody", long_about = None)]
struct Cli {
    /// Data directory path
    #[arg(short, long, default_value = "./data")]
    data: PathBuf,

    /// Board config file (falls back to $BOARDSIG_CONFIG, then ./board.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a board config for the given members
    Init {
        /// Board members, in seat order
        #[arg(required = true)]
        members: Vec<AccountId>,
        /// Custody account the board controls
        #[arg(long)]
        custody: Option<AccountId>,
    },

    /// List board members
    Members,

    /// Propose a transfer out of the custody account
    Propose {
        /// Proposing board member
        #[arg(long = "as")]
        caller: AccountId,
        /// Asset identifier
        asset: AssetId,
        /// Destination account
        recipient: AccountId,
        /// Amount to transfer
        amount: Amount,
        /// Optional correlation ID
        #[arg(long)]
        correlation_id: Option<String>,
    },

    /// Approve a proposed transfer
    Approve {
        /// Approving board member
        #[arg(long = "as")]
        caller: AccountId,
        /// Transaction ID
        id: TransactionId,
        /// Optional correlation ID
        #[arg(long)]
        correlation_id: Option<String>,
    },

    /// Show a transaction
    Show {
        /// Transaction ID
        id: TransactionId,
    },

    /// Show which members approved a transaction
    Approvals {
        /// Transaction ID
        id: TransactionId,
    },

    /// Check a ledger balance
    Balance {
        /// Asset identifier
        asset: AssetId,
        /// Account holder
        holder: AccountId,
    },

    /// Print the event journal
    History {
        /// Maximum number of records to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config_path = BoardConfig::resolve_path(cli.config);

    let open_context = || -> anyhow::Result<AppContext> {
        let config = BoardConfig::from_file(&config_path)
            .map_err(|e| anyhow::anyhow!("Cannot load {}: {}", config_path.display(), e))?;
        Ok(AppContext::new(&config, &cli.data)?)
    };

    match cli.command {
        Commands::Init { members, custody } => commands::init(&config_path, members, custody)?,

        Commands::Members => commands::members(&open_context()?)?,

        Commands::Propose {
            caller,
            asset,
            recipient,
            amount,
            correlation_id,
        } => {
            let mut ctx = open_context()?;
            let correlation_id = correlation_id.unwrap_or_else(|| Uuid::new_v4().to_string());
            commands::propose(&mut ctx, &caller, asset, recipient, amount, &correlation_id)?;
        }

        Commands::Approve {
            caller,
            id,
            correlation_id,
        } => {
            let mut ctx = open_context()?;
            let correlation_id = correlation_id.unwrap_or_else(|| Uuid::new_v4().to_string());
            commands::approve(&mut ctx, &caller, id, &correlation_id)?;
        }

        Commands::Show { id } => commands::show(&open_context()?, id)?,

        Commands::Approvals { id } => commands::approvals(&open_context()?, id)?,

        Commands::Balance { asset, holder } => {
            commands::balance(&open_context()?, &asset, &holder)?
        }

        Commands::History { limit } => commands::history(&open_context()?, limit)?,
    }

    Ok(())
}
