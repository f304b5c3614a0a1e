//! The activity store: collection, filter criteria and derived view.
//!
//! Mutations are implemented in `ops/` as `impl ActivityStore` blocks.

use std::collections::HashSet;
use std::fmt;

use board_config::{BoardConfig, OrderingMode};
use board_core::clock::{Clock, SystemClock};
use board_core::entities::Activity;
use board_core::enums::ActivityStatus;
use board_core::filters::FilterCriteria;
use board_core::layout::COLUMNS;
use board_core::responses::{BoardSnapshot, ColumnView};
use tracing::warn;

use crate::filter::compute_filtered_view;
use crate::seed;

/// Sole owner of the board state.
///
/// Invariants upheld by every method:
/// - ids are unique within `activities`
/// - `filtered` equals `compute_filtered_view(activities, filters)`
/// - `created_at <= updated_at` for every activity
pub struct ActivityStore {
    pub(crate) activities: Vec<Activity>,
    pub(crate) filters: FilterCriteria,
    pub(crate) filtered: Vec<Activity>,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) ordering: OrderingMode,
    /// Bumped on every id allocation; feeds the fallback id path.
    pub(crate) sequence: u32,
}

impl ActivityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new(clock: impl Clock + 'static, ordering: OrderingMode) -> Self {
        Self::with_activities(clock, ordering, Vec::new())
    }

    /// Create a store holding `activities` in the given order.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant holds.
    #[must_use]
    pub fn with_activities(
        clock: impl Clock + 'static,
        ordering: OrderingMode,
        activities: Vec<Activity>,
    ) -> Self {
        let mut seen = HashSet::new();
        let activities = activities
            .into_iter()
            .filter(|activity| {
                let fresh = seen.insert(activity.id.clone());
                if !fresh {
                    warn!(id = %activity.id, "dropping activity with duplicate id");
                }
                fresh
            })
            .collect();

        let mut store = Self {
            activities,
            filters: FilterCriteria::default(),
            filtered: Vec::new(),
            clock: Box::new(clock),
            ordering,
            sequence: 0,
        };
        store.refresh();
        store
    }

    /// Create a store pre-populated with the sample board.
    #[must_use]
    pub fn with_sample_data(clock: impl Clock + 'static, ordering: OrderingMode) -> Self {
        Self::with_activities(clock, ordering, seed::sample_activities())
    }

    /// Build a store from loaded configuration, using the system clock.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        let ordering = config.board.ordering;
        if config.general.seed_sample_data {
            Self::with_sample_data(SystemClock, ordering)
        } else {
            Self::new(SystemClock, ordering)
        }
    }

    /// Every activity in canonical order.
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Activities passing the current filters, in canonical order.
    #[must_use]
    pub fn filtered(&self) -> &[Activity] {
        &self.filtered
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    #[must_use]
    pub const fn ordering(&self) -> OrderingMode {
        self.ordering
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Full (unfiltered) column in canonical order. Reorder indices address this.
    #[must_use]
    pub fn column(&self, status: ActivityStatus) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|activity| activity.status == status)
            .collect()
    }

    /// Column as currently displayed, i.e. restricted to the filtered view.
    #[must_use]
    pub fn visible_column(&self, status: ActivityStatus) -> Vec<&Activity> {
        self.filtered
            .iter()
            .filter(|activity| activity.status == status)
            .collect()
    }

    /// Status and index of an activity inside its full column.
    #[must_use]
    pub fn position_in_column(&self, id: &str) -> Option<(ActivityStatus, usize)> {
        let status = self.get(id)?.status;
        self.column(status)
            .iter()
            .position(|activity| activity.id == id)
            .map(|index| (status, index))
    }

    /// Filtered view grouped by board column.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let columns = COLUMNS
            .iter()
            .map(|column| ColumnView {
                column: *column,
                activities: self
                    .visible_column(column.status)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
            .collect();

        BoardSnapshot {
            filters: self.filters.clone(),
            columns,
            total: self.activities.len(),
            visible: self.filtered.len(),
        }
    }

    /// Recompute the filtered view from the current collection and filters.
    pub fn refresh(&mut self) {
        self.filtered = compute_filtered_view(&self.activities, &self.filters);
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.activities.iter().position(|activity| activity.id == id)
    }
}

impl fmt::Debug for ActivityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityStore")
            .field("activities", &self.activities.len())
            .field("visible", &self.filtered.len())
            .field("filters", &self.filters)
            .field("ordering", &self.ordering)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{activity_at, test_store};
    use board_core::clock::ManualClock;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_store_is_empty_and_unfiltered() {
        let (store, _clock) = test_store();
        assert!(store.is_empty());
        assert!(store.filtered().is_empty());
        assert_eq!(store.filters(), &FilterCriteria::default());
    }

    #[test]
    fn construction_computes_initial_view() {
        let clock = ManualClock::new(chrono::Utc::now());
        let store = ActivityStore::with_sample_data(clock, OrderingMode::Manual);
        assert_eq!(store.filtered(), store.activities());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn duplicate_ids_are_dropped_on_construction() {
        let clock = ManualClock::new(chrono::Utc::now());
        let first = activity_at("act-1", ActivityStatus::Todo, 0);
        let mut dup = activity_at("act-1", ActivityStatus::Completed, 1);
        dup.title = "duplicate".into();

        let store = ActivityStore::with_activities(clock, OrderingMode::Manual, vec![first.clone(), dup]);
        assert_eq!(store.activities(), &[first]);
    }

    #[test]
    fn position_in_column_uses_full_column() {
        let clock = ManualClock::new(chrono::Utc::now());
        let store = ActivityStore::with_activities(
            clock,
            OrderingMode::Manual,
            vec![
                activity_at("a", ActivityStatus::Todo, 0),
                activity_at("b", ActivityStatus::Completed, 1),
                activity_at("c", ActivityStatus::Todo, 2),
            ],
        );
        assert_eq!(store.position_in_column("c"), Some((ActivityStatus::Todo, 1)));
        assert_eq!(store.position_in_column("b"), Some((ActivityStatus::Completed, 0)));
        assert_eq!(store.position_in_column("zzz"), None);
    }

    #[test]
    fn snapshot_groups_by_column_in_display_order() {
        let clock = ManualClock::new(chrono::Utc::now());
        let store = ActivityStore::with_sample_data(clock, OrderingMode::Manual);
        let snapshot = store.snapshot();

        let statuses: Vec<_> = snapshot.columns.iter().map(|c| c.column.status).collect();
        assert_eq!(statuses, ActivityStatus::ALL.to_vec());
        assert!(snapshot.columns.iter().all(|c| c.activities.len() == 1));
        assert_eq!(snapshot.total, 4);
        assert_eq!(snapshot.visible, 4);
    }
}
