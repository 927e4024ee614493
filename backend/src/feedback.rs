use shared::models::{Direction, ItemKind, ItemRef, VoteEvent, VoteReceipt};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{error::ApiError, store::SessionStore};

/// Turns clicks on the vote controls into tally updates for one session.
pub struct FeedbackAdapter;

impl FeedbackAdapter {
    /// Validates the whole event before the session's store is touched.
    pub fn parse_event(event: &VoteEvent) -> Result<(ItemRef, Direction), ApiError> {
        let kind: ItemKind = event.kind.parse()?;
        let item = ItemRef::new(kind, event.id.as_str())?;
        let direction: Direction = event.direction.parse()?;
        Ok((item, direction))
    }

    pub fn on_vote_clicked(
        sessions: &SessionStore,
        session_id: Uuid,
        event: &VoteEvent,
    ) -> Result<VoteReceipt, ApiError> {
        let (item, direction) = Self::parse_event(event).map_err(|e| {
            warn!(session = %session_id, code = ?e.code(), "Rejected vote: {}", e);
            e
        })?;

        let receipt = sessions.record_vote(session_id, item, direction)?;
        info!(
            session = %session_id,
            kind = %receipt.item.kind(),
            id = receipt.item.id(),
            direction = %direction,
            up = receipt.tally.up_count,
            down = receipt.tally.down_count,
            "{}", receipt.message
        );
        Ok(receipt)
    }
}
