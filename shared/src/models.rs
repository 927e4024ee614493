use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::tally::TallyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Epic,
    Feature,
    Story,
}

impl ItemKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemKind::Epic => "epic",
            ItemKind::Feature => "feature",
            ItemKind::Story => "story",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "epic" => Ok(ItemKind::Epic),
            "feature" => Ok(ItemKind::Feature),
            "story" => Ok(ItemKind::Story),
            other => Err(TallyError::InvalidReference(format!("unknown item kind: {:?}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(TallyError::InvalidDirection(other.to_string())),
        }
    }
}

/// Composite key of a votable item. The id is only unique within its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawItemRef")]
pub struct ItemRef {
    kind: ItemKind,
    id: String,
}

#[derive(Deserialize)]
struct RawItemRef {
    kind: ItemKind,
    id: String,
}

impl TryFrom<RawItemRef> for ItemRef {
    type Error = TallyError;

    fn try_from(raw: RawItemRef) -> Result<Self, Self::Error> {
        ItemRef::new(raw.kind, raw.id)
    }
}

impl ItemRef {
    pub fn new(kind: ItemKind, id: impl Into<String>) -> Result<Self, TallyError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TallyError::InvalidReference(format!("empty {} id", kind)));
        }
        Ok(Self { kind, id })
    }

    pub(crate) fn generated(kind: ItemKind, id: String) -> Self {
        Self { kind, id }
    }

    pub fn epic(id: impl Into<String>) -> Result<Self, TallyError> { Self::new(ItemKind::Epic, id) }
    pub fn feature(id: impl Into<String>) -> Result<Self, TallyError> { Self::new(ItemKind::Feature, id) }
    pub fn story(id: impl Into<String>) -> Result<Self, TallyError> { Self::new(ItemKind::Story, id) }

    pub fn kind(&self) -> ItemKind { self.kind }
    pub fn id(&self) -> &str { &self.id }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallySnapshot {
    pub up_count: u64,
    pub down_count: u64,
}

impl TallySnapshot {
    pub fn total(&self) -> u64 {
        self.up_count + self.down_count
    }

    /// Combines two snapshots of the same item. Counts never decrease, so a
    /// stale snapshot arriving late cannot lower what is already known.
    pub fn merge(self, other: TallySnapshot) -> TallySnapshot {
        TallySnapshot {
            up_count: self.up_count.max(other.up_count),
            down_count: self.down_count.max(other.down_count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteReceipt {
    pub item: ItemRef,
    pub tally: TallySnapshot,
    pub message: String,
}

/// One click on a vote control, as sent by the results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteEvent {
    pub kind: String,
    pub id: String,
    pub direction: String,
}

impl VoteEvent {
    pub fn new(item: &ItemRef, direction: Direction) -> Self {
        Self {
            kind: item.kind().to_string(),
            id: item.id().to_string(),
            direction: direction.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    pub session_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTally {
    pub item: ItemRef,
    pub tally: TallySnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub items: Vec<ItemTally>,
    pub totals: TallySnapshot,
}
