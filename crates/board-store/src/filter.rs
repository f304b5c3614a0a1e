//! Pure derivation of the filtered view.
//!
//! Kept free of store state so it can be called and tested on its own. The
//! store calls [`compute_filtered_view`] after every mutation.

use board_core::entities::Activity;
use board_core::filters::FilterCriteria;

/// Activities matching every criterion, in collection order.
///
/// - status: exact match unless `all`
/// - priority: exact match unless `all`
/// - search: case-insensitive substring of title or description, unless empty
#[must_use]
pub fn compute_filtered_view(activities: &[Activity], filters: &FilterCriteria) -> Vec<Activity> {
    let needle = filters.search.to_lowercase();
    activities
        .iter()
        .filter(|activity| matches_filters(activity, filters, &needle))
        .cloned()
        .collect()
}

/// Single-activity predicate behind [`compute_filtered_view`].
///
/// `needle_lower` is `filters.search` already lowercased.
#[must_use]
pub fn matches_filters(activity: &Activity, filters: &FilterCriteria, needle_lower: &str) -> bool {
    filters.status.matches(&activity.status)
        && filters.priority.matches(&activity.priority)
        && (needle_lower.is_empty() || activity.mentions(needle_lower))
}
