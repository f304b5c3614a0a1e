//! Activity create / update / delete / move.

use board_core::entities::{Activity, NewActivity};
use board_core::enums::ActivityStatus;
use board_core::ids::{self, PREFIX_ACTIVITY};
use tracing::{debug, warn};

use crate::store::ActivityStore;
use crate::updates::activity::{ActivityUpdate, ActivityUpdateBuilder};

impl ActivityStore {
    /// Append a new activity and return it.
    ///
    /// The title is not validated here; see [`NewActivity::validate`].
    pub fn create(&mut self, data: NewActivity) -> Activity {
        let now = self.clock.now();
        let activity = Activity {
            id: self.allocate_id(),
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            created_at: now,
            updated_at: now,
        };

        debug!(id = %activity.id, status = %activity.status, "activity created");
        self.activities.push(activity.clone());
        self.refresh();
        activity
    }

    /// Merge `update` into the activity with `id` and bump `updated_at`.
    ///
    /// Unknown ids are ignored. Returns the updated activity when one matched.
    pub fn update(&mut self, id: &str, update: ActivityUpdate) -> Option<&Activity> {
        let index = self.index_of(id)?;
        let now = self.clock.now();

        let activity = &mut self.activities[index];
        update.apply(activity);
        activity.updated_at = now.max(activity.updated_at);
        debug!(id, status = %activity.status, "activity updated");

        self.refresh();
        self.activities.get(index)
    }

    /// Remove the activity with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> Option<Activity> {
        let index = self.index_of(id)?;
        let removed = self.activities.remove(index);
        debug!(id, status = %removed.status, "activity deleted");

        self.refresh();
        Some(removed)
    }

    /// Change an activity's column. Same as an update that only sets `status`;
    /// the activity keeps its slot in the canonical order.
    pub fn move_activity(&mut self, id: &str, status: ActivityStatus) -> Option<&Activity> {
        self.update(id, ActivityUpdateBuilder::new().status(status).build())
    }

    fn allocate_id(&mut self) -> String {
        loop {
            self.sequence = self.sequence.wrapping_add(1);
            let candidate = ids::random_id(PREFIX_ACTIVITY).unwrap_or_else(|error| {
                warn!(%error, "random source unavailable, using sequence id");
                ids::sequence_id(PREFIX_ACTIVITY, self.sequence)
            });
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}
