//! Within-column reordering.

use board_config::OrderingMode;
use board_core::entities::Activity;
use board_core::enums::ActivityStatus;
use tracing::debug;

use crate::error::StoreError;
use crate::store::ActivityStore;

impl ActivityStore {
    /// Move the activity at `from` to `to` inside the `status` column.
    ///
    /// Indices address the full (unfiltered) column, see [`ActivityStore::column`].
    /// `from == to` succeeds without touching anything. The moved activity gets
    /// a fresh `updated_at`. How the column is written back depends on
    /// [`OrderingMode`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if either index is not below the
    /// column length. The store is left unchanged.
    pub fn reorder(
        &mut self,
        status: ActivityStatus,
        from: usize,
        to: usize,
    ) -> Result<(), StoreError> {
        let slots: Vec<usize> = self
            .activities
            .iter()
            .enumerate()
            .filter(|(_, activity)| activity.status == status)
            .map(|(slot, _)| slot)
            .collect();

        let len = slots.len();
        for index in [from, to] {
            if index >= len {
                return Err(StoreError::IndexOutOfRange { status, index, len });
            }
        }
        if from == to {
            return Ok(());
        }

        let mut column: Vec<Activity> = slots
            .iter()
            .map(|&slot| self.activities[slot].clone())
            .collect();
        let mut moved = column.remove(from);
        moved.updated_at = self.clock.now().max(moved.updated_at);
        column.insert(to, moved);

        match self.ordering {
            OrderingMode::Manual => {
                for (slot, activity) in slots.into_iter().zip(column) {
                    self.activities[slot] = activity;
                }
            }
            OrderingMode::CreatedAt => {
                self.activities.retain(|activity| activity.status != status);
                self.activities.extend(column);
                self.activities.sort_by_key(|activity| activity.created_at);
            }
        }

        debug!(%status, from, to, ordering = ?self.ordering, "column reordered");
        self.refresh();
        Ok(())
    }
}
