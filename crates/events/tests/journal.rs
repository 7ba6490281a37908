//! Journal write/read tests

use boardsig_core::{AccountId, Amount, AssetId};
use boardsig_engine::EngineEvent;
use boardsig_events::{EventError, EventReader, EventStore, JournalRecord};
use chrono::Utc;
use tempfile::TempDir;

fn proposed(id: u64) -> EngineEvent {
    EngineEvent::TransactionProposed {
        id,
        proposer: AccountId::new("ALICE").unwrap(),
        asset: AssetId::new("USDT").unwrap(),
        recipient: AccountId::new("BOB").unwrap(),
        amount: Amount::from_units(100),
        digest: "00".repeat(32),
        timestamp: Utc::now(),
    }
}

fn approved(id: u64, member: &str, approval_count: usize) -> EngineEvent {
    EngineEvent::TransactionApproved {
        id,
        member: AccountId::new(member).unwrap(),
        approval_count,
        timestamp: Utc::now(),
    }
}

#[test]
fn test_append_and_read_back_in_order() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let records = vec![
        JournalRecord::new("cmd-1", proposed(0)),
        JournalRecord::new("cmd-2", approved(0, "ALICE", 1)),
        JournalRecord::new("cmd-3", approved(0, "CAROL", 2)),
    ];

    let mut store = EventStore::new(temp_dir.path())?;
    assert_eq!(store.append_all(&records)?, 3);
    store.close()?;

    let reader = EventReader::from_directory(temp_dir.path())?;
    assert_eq!(reader.count()?, 3);
    assert_eq!(reader.read_all()?, records);
    Ok(())
}

#[test]
fn test_reopened_store_appends() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    {
        let mut store = EventStore::new(temp_dir.path())?;
        store.append(&JournalRecord::new("cmd-1", proposed(0)))?;
    }
    {
        let mut store = EventStore::new(temp_dir.path())?;
        store.append(&JournalRecord::new("cmd-2", proposed(1)))?;
    }

    let ids: Vec<_> = EventReader::from_directory(temp_dir.path())?
        .read_all()?
        .iter()
        .map(|r| r.event.transaction_id())
        .collect();
    assert_eq!(ids, vec![0, 1]);
    Ok(())
}

#[test]
fn test_missing_directory_is_empty() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let reader = EventReader::from_directory(temp_dir.path().join("nope"))?;

    assert!(reader.files().is_empty());
    assert!(reader.read_all()?.is_empty());
    Ok(())
}

#[test]
fn test_corrupt_line_reports_position() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mut store = EventStore::new(temp_dir.path())?;
    store.append(&JournalRecord::new("cmd-1", proposed(0)))?;
    store.close()?;

    let file = EventReader::from_directory(temp_dir.path())?.files()[0].clone();
    let mut content = std::fs::read_to_string(&file)?;
    content.push_str("{not json}\n");
    std::fs::write(&file, content)?;

    let result = EventReader::from_directory(temp_dir.path())?.read_all();
    assert!(matches!(result, Err(EventError::InvalidLine { line: 2, .. })));
    Ok(())
}
