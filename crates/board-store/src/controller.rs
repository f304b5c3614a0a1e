//! Translates resolved drag intents and form submissions into store calls.
//!
//! Gesture recognition (pointer tracking, collision detection, activation
//! distance) happens upstream. By the time a call reaches this module the
//! caller already knows which card is being dragged and which column or
//! card it is over.

use board_core::entities::{Activity, NewActivity, validate_title};
use board_core::enums::ActivityStatus;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::store::ActivityStore;
use crate::updates::activity::ActivityUpdate;

/// What a dragged card is currently over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropTarget {
    /// An empty area of a column.
    Column(ActivityStatus),
    /// Another card, by id.
    Card(String),
}

/// Owns the store plus the transient drag state.
#[derive(Debug)]
pub struct BoardController {
    store: ActivityStore,
    active: Option<String>,
}

impl BoardController {
    #[must_use]
    pub const fn new(store: ActivityStore) -> Self {
        Self {
            store,
            active: None,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &ActivityStore {
        &self.store
    }

    /// Direct access for intents that need no translation (delete, filters).
    pub const fn store_mut(&mut self) -> &mut ActivityStore {
        &mut self.store
    }

    #[must_use]
    pub fn into_store(self) -> ActivityStore {
        self.store
    }

    /// The card currently being dragged, if it still exists.
    #[must_use]
    pub fn active(&self) -> Option<&Activity> {
        self.active.as_deref().and_then(|id| self.store.get(id))
    }

    /// Begin dragging `id`. Unknown ids leave no drag in progress.
    pub fn drag_start(&mut self, id: &str) -> Option<&Activity> {
        self.active = self.store.contains(id).then(|| id.to_string());
        debug!(id, started = self.active.is_some(), "drag start");
        self.active()
    }

    /// Hovering over a column other than the dragged card's own moves the
    /// card there. Card targets only matter on drop. Returns whether a move
    /// happened.
    pub fn drag_over(&mut self, target: &DropTarget) -> bool {
        let Some(active_id) = self.active.as_deref() else {
            return false;
        };
        let &DropTarget::Column(status) = target else {
            return false;
        };
        let Some(current) = self.store.get(active_id).map(|activity| activity.status) else {
            return false;
        };
        if status == current {
            return false;
        }

        debug!(id = active_id, from = %current, to = %status, "drag over moves card");
        self.store.move_activity(active_id, status);
        true
    }

    /// Finish the drag. Dropping onto another card of the same column
    /// reorders the column so the dragged card takes that card's position.
    ///
    /// Positions are computed in the full column, not the filtered one, so a
    /// narrowed view cannot produce mismatched indices. Returns whether a
    /// reorder happened.
    ///
    /// # Errors
    ///
    /// Propagates `StoreError` from [`ActivityStore::reorder`]; with indices
    /// taken from the store itself this does not occur in practice.
    pub fn drag_end(&mut self, target: Option<&DropTarget>) -> Result<bool, StoreError> {
        let Some(active_id) = self.active.take() else {
            return Ok(false);
        };
        let Some(DropTarget::Card(over_id)) = target else {
            return Ok(false);
        };
        let (Some((status, from)), Some((over_status, to))) = (
            self.store.position_in_column(&active_id),
            self.store.position_in_column(over_id),
        ) else {
            return Ok(false);
        };
        if status != over_status || from == to {
            return Ok(false);
        }

        debug!(id = %active_id, %status, from, to, "drag end reorders column");
        self.store.reorder(status, from, to)?;
        Ok(true)
    }

    /// Abandon the drag without touching the store.
    pub fn cancel_drag(&mut self) {
        self.active = None;
    }

    /// Create-form submission.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if the title is blank.
    pub fn submit_create(&mut self, draft: NewActivity) -> Result<Activity, StoreError> {
        draft.validate()?;
        Ok(self.store.create(draft))
    }

    /// Partial edit. A provided title must not be blank; unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if a provided title is blank.
    pub fn submit_update(
        &mut self,
        id: &str,
        changes: ActivityUpdate,
    ) -> Result<Option<&Activity>, StoreError> {
        if let Some(title) = changes.title.as_deref() {
            validate_title(title)?;
        }
        Ok(self.store.update(id, changes))
    }

    /// Edit-form submission: every editable field is replaced by the draft.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if the title is blank.
    pub fn submit_edit(
        &mut self,
        id: &str,
        draft: NewActivity,
    ) -> Result<Option<&Activity>, StoreError> {
        self.submit_update(id, draft.into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::test_store;
    use crate::updates::filter::FilterUpdateBuilder;

    fn board_with_todo_column() -> (BoardController, Vec<String>) {
        let (store, _clock) = test_store();
        let mut board = BoardController::new(store);
        let ids = ["A", "B", "C"]
            .into_iter()
            .map(|title| board.submit_create(NewActivity::new(title)).unwrap().id)
            .collect();
        (board, ids)
    }

    fn todo_titles(board: &BoardController) -> Vec<String> {
        board
            .store()
            .column(ActivityStatus::Todo)
            .into_iter()
            .map(|activity| activity.title.clone())
            .collect()
    }

    #[test]
    fn drag_over_column_moves_card() {
        let (mut board, ids) = board_with_todo_column();
        board.drag_start(&ids[0]);

        assert!(board.drag_over(&DropTarget::Column(ActivityStatus::InProgress)));
        assert_eq!(board.store().get(&ids[0]).unwrap().status, ActivityStatus::InProgress);

        // Hovering the column it is already in does nothing.
        assert!(!board.drag_over(&DropTarget::Column(ActivityStatus::InProgress)));
    }

    #[test]
    fn drag_over_card_in_other_column_does_nothing() {
        let (mut board, ids) = board_with_todo_column();
        board
            .store_mut()
            .move_activity(&ids[2], ActivityStatus::Completed);
        board.drag_start(&ids[0]);

        assert!(!board.drag_over(&DropTarget::Card(ids[2].clone())));
        assert_eq!(board.store().get(&ids[0]).unwrap().status, ActivityStatus::Todo);
        assert_eq!(board.store().column(ActivityStatus::Completed).len(), 1);
    }

    #[test]
    fn drag_over_without_drag_is_ignored() {
        let (mut board, ids) = board_with_todo_column();
        assert!(!board.drag_over(&DropTarget::Column(ActivityStatus::Completed)));
        assert_eq!(board.store().get(&ids[0]).unwrap().status, ActivityStatus::Todo);
    }

    #[test]
    fn drag_end_on_card_reorders() {
        let (mut board, ids) = board_with_todo_column();
        board.drag_start(&ids[0]);

        let reordered = board.drag_end(Some(&DropTarget::Card(ids[2].clone()))).unwrap();

        assert!(reordered);
        assert_eq!(todo_titles(&board), vec!["B", "C", "A"]);
        assert!(board.active().is_none());
    }

    #[test]
    fn drag_end_uses_full_column_indices_under_filter() {
        let (mut board, ids) = board_with_todo_column();
        // Only "C" is visible, but the reorder must still address the full column.
        board
            .store_mut()
            .set_filters(FilterUpdateBuilder::new().search("c").build());
        board.drag_start(&ids[2]);

        board.drag_end(Some(&DropTarget::Card(ids[0].clone()))).unwrap();

        assert_eq!(todo_titles(&board), vec!["C", "A", "B"]);
    }

    #[test]
    fn drag_end_without_target_or_on_column_does_nothing() {
        let (mut board, ids) = board_with_todo_column();
        let before = board.store().activities().to_vec();

        board.drag_start(&ids[0]);
        assert!(!board.drag_end(None).unwrap());
        board.drag_start(&ids[0]);
        assert!(!board.drag_end(Some(&DropTarget::Column(ActivityStatus::Todo))).unwrap());

        assert_eq!(board.store().activities(), before.as_slice());
    }

    #[test]
    fn drag_start_on_unknown_id_starts_nothing() {
        let (mut board, _ids) = board_with_todo_column();
        assert!(board.drag_start("act-missing").is_none());
        assert!(board.active().is_none());
    }

    #[test]
    fn cancel_drag_clears_active() {
        let (mut board, ids) = board_with_todo_column();
        board.drag_start(&ids[1]);
        board.cancel_drag();
        assert!(!board.drag_end(Some(&DropTarget::Card(ids[0].clone()))).unwrap());
        assert_eq!(todo_titles(&board), vec!["A", "B", "C"]);
    }

    #[test]
    fn blank_titles_are_rejected_by_forms() {
        let (mut board, ids) = board_with_todo_column();

        assert!(board.submit_create(NewActivity::new("  ")).is_err());
        assert!(board.submit_edit(&ids[0], NewActivity::new("")).is_err());
        assert_eq!(board.store().len(), 3);
        assert_eq!(board.store().get(&ids[0]).unwrap().title, "A");
    }

    #[test]
    fn submit_edit_replaces_editable_fields() {
        let (mut board, ids) = board_with_todo_column();
        let draft = NewActivity::new("Renamed")
            .description("new")
            .status(ActivityStatus::Cancelled);

        let edited = board.submit_edit(&ids[1], draft).unwrap().cloned().unwrap();

        assert_eq!(edited.title, "Renamed");
        assert_eq!(edited.description, "new");
        assert_eq!(edited.status, ActivityStatus::Cancelled);
        assert_eq!(edited.id, ids[1]);
    }
}
