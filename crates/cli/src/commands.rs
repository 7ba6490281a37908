//! CLI commands

use boardsig_core::{AccountId, Amount, AssetId};
use boardsig_engine::TransactionId;
use std::path::Path;

use crate::config::BoardConfig;
use crate::context::AppContext;

/// Write a fresh config for the given roster
pub fn init(
    config_path: &Path,
    members: Vec<AccountId>,
    custody: Option<AccountId>,
) -> Result<(), anyhow::Error> {
    let mut config = BoardConfig::for_members(members);
    if let Some(custody) = custody {
        config.custody_account = custody;
    }

    config
        .write_new(config_path)
        .map_err(|e| anyhow::anyhow!("Cannot create {}: {}", config_path.display(), e))?;

    println!(
        "✅ Wrote {} ({} board seats, custody {})",
        config_path.display(),
        config.board_size,
        config.custody_account
    );
    Ok(())
}

/// List the board in seat order
pub fn members(ctx: &AppContext) -> Result<(), anyhow::Error> {
    let members = ctx.engine.board_members();
    println!(
        "Board ({} seats, unanimous approval) controlling {}:",
        members.len(),
        ctx.engine.custody_account()
    );
    for (seat, member) in members.iter().enumerate() {
        println!("  {:>3}  {}", seat, member);
    }
    Ok(())
}

pub fn propose(
    ctx: &mut AppContext,
    caller: &AccountId,
    asset: AssetId,
    recipient: AccountId,
    amount: Amount,
    correlation_id: &str,
) -> Result<(), anyhow::Error> {
    let summary = format!("{} {} to {}", amount, asset, recipient);
    let id = ctx.propose(caller, asset, recipient, amount, correlation_id)?;

    println!("✅ Proposed transaction {}: {} (by {})", id, summary, caller);
    Ok(())
}

pub fn approve(
    ctx: &mut AppContext,
    caller: &AccountId,
    id: TransactionId,
    correlation_id: &str,
) -> Result<(), anyhow::Error> {
    let outcome = ctx.approve(caller, id, correlation_id)?;

    if outcome.executed {
        let tx = ctx.engine.get_transaction(id)?;
        println!(
            "✅ Transaction {} executed: {} {} sent to {}",
            id, tx.amount, tx.asset, tx.recipient
        );
    } else {
        println!(
            "✅ {} approved transaction {} ({}/{}, {} remaining)",
            caller,
            id,
            outcome.approval_count,
            outcome.required,
            outcome.remaining()
        );
    }
    Ok(())
}

pub fn show(ctx: &AppContext, id: TransactionId) -> Result<(), anyhow::Error> {
    let tx = ctx.engine.transaction(id)?;

    println!("Transaction {}", tx.id);
    println!("  status:     {}", tx.status());
    println!("  asset:      {}", tx.asset);
    println!("  recipient:  {}", tx.recipient);
    println!("  amount:     {}", tx.amount);
    println!("  proposer:   {}", tx.proposer);
    println!(
        "  approvals:  {}/{}",
        tx.approval_count(),
        ctx.engine.board().size()
    );
    println!("  digest:     {}", tx.digest);
    Ok(())
}

/// Per-member approval state of one transaction
pub fn approvals(ctx: &AppContext, id: TransactionId) -> Result<(), anyhow::Error> {
    println!("Approvals for transaction {}:", id);
    for member in ctx.engine.board_members() {
        let mark = if ctx.engine.is_approved(id, member)? { "✓" } else { "·" };
        println!("  {} {}", mark, member);
    }
    Ok(())
}

pub fn balance(ctx: &AppContext, asset: &AssetId, holder: &AccountId) -> Result<(), anyhow::Error> {
    let balance = ctx.engine.balance_of(asset, holder);
    println!("Balance for {}: {} {}", holder, balance, asset);
    Ok(())
}

/// Print the journal, newest last
pub fn history(ctx: &AppContext, limit: usize) -> Result<(), anyhow::Error> {
    let records = ctx.history()?;
    let skip = records.len().saturating_sub(limit);

    if records.is_empty() {
        println!("Journal is empty");
    }
    for record in &records[skip..] {
        println!(
            "{}  tx {:>4}  {:<22} {}",
            record.recorded_at.format("%Y-%m-%d %H:%M:%S"),
            record.event.transaction_id(),
            record.event.kind(),
            record.correlation_id
        );
    }
    Ok(())
}
