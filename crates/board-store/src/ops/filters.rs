//! Filter criteria mutations.

use tracing::debug;

use crate::store::ActivityStore;
use crate::updates::filter::FilterUpdate;

impl ActivityStore {
    /// Merge `update` into the current criteria and recompute the view.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        update.apply(&mut self.filters);
        debug!(
            status = %self.filters.status,
            priority = %self.filters.priority,
            search = %self.filters.search,
            "filters changed"
        );
        self.refresh();
    }

    /// Reset to "no filtering".
    pub fn clear_filters(&mut self) {
        self.set_filters(FilterUpdate::clear());
    }
}
