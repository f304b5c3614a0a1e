use board_core::enums::{ActivityPriority, ActivityStatus, Selection};
use board_store::ActivityStore;
use board_store::updates::filter::{FilterUpdate, FilterUpdateBuilder};

use super::parse::parse_enum;
use crate::cli::FilterArgs;

/// Translate filter flags into a store update. Omitted flags stay unset.
pub fn filter_update(args: &FilterArgs) -> anyhow::Result<FilterUpdate> {
    let mut builder = FilterUpdateBuilder::new();
    if let Some(raw) = args.status.as_deref() {
        builder = builder.status(parse_enum::<Selection<ActivityStatus>>(raw, "status")?);
    }
    if let Some(raw) = args.priority.as_deref() {
        builder = builder.priority(parse_enum::<Selection<ActivityPriority>>(raw, "priority")?);
    }
    if let Some(search) = &args.search {
        builder = builder.search(search.clone());
    }
    Ok(builder.build())
}

/// Apply filter flags to the store, skipping the recompute when none were given.
pub fn apply_filter_args(args: &FilterArgs, store: &mut ActivityStore) -> anyhow::Result<()> {
    let update = filter_update(args)?;
    if update != FilterUpdate::default() {
        store.set_filters(update);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_given_flags_are_set() {
        let args = FilterArgs {
            status: Some("in-progress".into()),
            priority: None,
            search: Some("Bug".into()),
        };

        let update = filter_update(&args).expect("flags parse");

        assert_eq!(update.status, Some(Selection::Only(ActivityStatus::InProgress)));
        assert_eq!(update.priority, None);
        assert_eq!(update.search.as_deref(), Some("Bug"));
    }

    #[test]
    fn all_resets_a_criterion() {
        let args = FilterArgs {
            priority: Some("all".into()),
            ..FilterArgs::default()
        };
        let update = filter_update(&args).expect("flags parse");
        assert_eq!(update.priority, Some(Selection::<ActivityPriority>::All));
    }

    #[test]
    fn invalid_priority_names_the_flag() {
        let args = FilterArgs {
            priority: Some("urgent".into()),
            ..FilterArgs::default()
        };
        let err = filter_update(&args).expect_err("should fail");
        assert!(err.to_string().contains("invalid priority 'urgent'"));
    }
}
