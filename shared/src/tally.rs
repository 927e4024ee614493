use std::collections::HashMap;
use thiserror::Error;
use serde::{Serialize, Deserialize};

use crate::models::{Direction, ItemKind, ItemRef, ItemTally, TallySnapshot, VoteReceipt};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    #[error("Invalid item reference: {0}")] InvalidReference(String),
    #[error("Invalid vote direction: {0:?}")] InvalidDirection(String),
}

/// Up/down counts for one item. Counts only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    up: u64,
    down: u64,
}

impl VoteTally {
    fn record(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up += 1,
            Direction::Down => self.down += 1,
        }
    }

    pub fn snapshot(&self) -> TallySnapshot {
        TallySnapshot { up_count: self.up, down_count: self.down }
    }
}

/// Feedback counts for a single session. A key with no votes is absent.
#[derive(Debug, Clone, Default)]
pub struct TallyStore {
    tallies: HashMap<ItemRef, VoteTally>,
}

impl TallyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_vote(&mut self, item: ItemRef, direction: Direction) -> VoteReceipt {
        let message = confirmation_message(&item, direction);
        let tally = self.tallies.entry(item.clone()).or_default();
        tally.record(direction);
        VoteReceipt { item, tally: tally.snapshot(), message }
    }

    /// Parses every field before touching the store, so a rejected vote
    /// leaves it unchanged.
    pub fn record_raw_vote(&mut self, kind: &str, id: &str, direction: &str) -> Result<VoteReceipt, TallyError> {
        let kind: ItemKind = kind.parse()?;
        let item = ItemRef::new(kind, id)?;
        let direction: Direction = direction.parse()?;
        Ok(self.record_vote(item, direction))
    }

    pub fn snapshot(&self, item: &ItemRef) -> Option<TallySnapshot> {
        self.tallies.get(item).map(VoteTally::snapshot)
    }

    pub fn len(&self) -> usize { self.tallies.len() }
    pub fn is_empty(&self) -> bool { self.tallies.is_empty() }

    /// All recorded tallies ordered by kind, then id.
    pub fn items(&self) -> Vec<ItemTally> {
        let mut items: Vec<_> = self.tallies.iter()
            .map(|(item, tally)| ItemTally { item: item.clone(), tally: tally.snapshot() })
            .collect();
        items.sort_unstable_by(|a, b| a.item.cmp(&b.item));
        items
    }

    pub fn totals(&self) -> TallySnapshot {
        self.tallies.values().fold(TallySnapshot::default(), |acc, t| TallySnapshot {
            up_count: acc.up_count + t.up,
            down_count: acc.down_count + t.down,
        })
    }
}

pub fn confirmation_message(item: &ItemRef, direction: Direction) -> String {
    format!("Recorded {} vote for {} {}", direction, item.kind(), item.id())
}
