//! Serializable board intents.
//!
//! A `BoardCommand` is one thing a user did: submit a form, drop a card,
//! change a filter. Commands are applied against a [`BoardController`] so
//! form checks and drag translation behave exactly as they do interactively.
//! One JSON object per line, tagged by `op`:
//!
//! ```text
//! {"op":"create","activity":{"title":"Fix bug","priority":"high"}}
//! {"op":"drag_start","id":"act-00000001"}
//! {"op":"drag_over","target":{"column":"in_progress"}}
//! {"op":"drag_end","target":null}
//! {"op":"set_filters","filters":{"search":"bug"}}
//! ```

use board_core::entities::NewActivity;
use board_core::enums::ActivityStatus;
use serde::{Deserialize, Serialize};

use crate::controller::{BoardController, DropTarget};
use crate::error::StoreError;
use crate::updates::activity::ActivityUpdate;
use crate::updates::filter::FilterUpdate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardCommand {
    Create {
        activity: NewActivity,
    },
    Update {
        id: String,
        changes: ActivityUpdate,
    },
    Delete {
        id: String,
    },
    Move {
        id: String,
        status: ActivityStatus,
    },
    Reorder {
        status: ActivityStatus,
        from: usize,
        to: usize,
    },
    SetFilters {
        filters: FilterUpdate,
    },
    ClearFilters,
    DragStart {
        id: String,
    },
    DragOver {
        target: DropTarget,
    },
    DragEnd {
        #[serde(default)]
        target: Option<DropTarget>,
    },
    CancelDrag,
}

/// What applying a command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// A new activity was created with this id.
    Created { id: String },
    /// The command changed state.
    Applied,
    /// Nothing to do: unknown id, no active drag, or a no-op drop.
    Ignored,
}

impl CommandOutcome {
    const fn from_hit(hit: bool) -> Self {
        if hit { Self::Applied } else { Self::Ignored }
    }
}

impl BoardCommand {
    /// Apply this command.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` for blank titles on create/update and
    /// `StoreError::IndexOutOfRange` for bad reorder indices.
    pub fn apply(self, board: &mut BoardController) -> Result<CommandOutcome, StoreError> {
        let outcome = match self {
            Self::Create { activity } => CommandOutcome::Created {
                id: board.submit_create(activity)?.id,
            },
            Self::Update { id, changes } => {
                CommandOutcome::from_hit(board.submit_update(&id, changes)?.is_some())
            }
            Self::Delete { id } => CommandOutcome::from_hit(board.store_mut().delete(&id).is_some()),
            Self::Move { id, status } => {
                CommandOutcome::from_hit(board.store_mut().move_activity(&id, status).is_some())
            }
            Self::Reorder { status, from, to } => {
                board.store_mut().reorder(status, from, to)?;
                CommandOutcome::from_hit(from != to)
            }
            Self::SetFilters { filters } => {
                board.store_mut().set_filters(filters);
                CommandOutcome::Applied
            }
            Self::ClearFilters => {
                board.store_mut().clear_filters();
                CommandOutcome::Applied
            }
            Self::DragStart { id } => CommandOutcome::from_hit(board.drag_start(&id).is_some()),
            Self::DragOver { target } => CommandOutcome::from_hit(board.drag_over(&target)),
            Self::DragEnd { target } => CommandOutcome::from_hit(board.drag_end(target.as_ref())?),
            Self::CancelDrag => {
                board.cancel_drag();
                CommandOutcome::Applied
            }
        };
        Ok(outcome)
    }

    /// Short human-readable summary, used in logs and error context.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Create { activity } => format!("create '{}'", activity.title),
            Self::Update { id, .. } => format!("update {id}"),
            Self::Delete { id } => format!("delete {id}"),
            Self::Move { id, status } => format!("move {id} to {status}"),
            Self::Reorder { status, from, to } => format!("reorder {status} {from} -> {to}"),
            Self::SetFilters { .. } => "set filters".to_string(),
            Self::ClearFilters => "clear filters".to_string(),
            Self::DragStart { id } => format!("drag start {id}"),
            Self::DragOver { target } => format!("drag over {target:?}"),
            Self::DragEnd { target } => format!("drag end {target:?}"),
            Self::CancelDrag => "cancel drag".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use board_core::enums::{ActivityPriority, Selection};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::test_store;

    fn parse(line: &str) -> BoardCommand {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn parses_tagged_lines() {
        assert_eq!(
            parse(r#"{"op":"create","activity":{"title":"Fix bug","priority":"high"}}"#),
            BoardCommand::Create {
                activity: NewActivity::new("Fix bug").priority(ActivityPriority::High),
            }
        );
        assert_eq!(
            parse(r#"{"op":"drag_over","target":{"column":"in_progress"}}"#),
            BoardCommand::DragOver {
                target: DropTarget::Column(ActivityStatus::InProgress),
            }
        );
        assert_eq!(parse(r#"{"op":"drag_end"}"#), BoardCommand::DragEnd { target: None });
        assert_eq!(
            parse(r#"{"op":"set_filters","filters":{"status":"all","search":"x"}}"#),
            BoardCommand::SetFilters {
                filters: FilterUpdate {
                    status: Some(Selection::All),
                    priority: None,
                    search: Some("x".into()),
                },
            }
        );
        assert_eq!(parse(r#"{"op":"clear_filters"}"#), BoardCommand::ClearFilters);
    }

    #[test]
    fn unknown_op_is_rejected() {
        assert!(serde_json::from_str::<BoardCommand>(r#"{"op":"archive","id":"x"}"#).is_err());
    }

    #[test]
    fn scripted_drag_session() {
        let (store, _clock) = test_store();
        let mut board = BoardController::new(store);

        let mut ids = Vec::new();
        for title in ["A", "B", "C"] {
            let outcome = BoardCommand::Create {
                activity: NewActivity::new(title),
            }
            .apply(&mut board)
            .unwrap();
            match outcome {
                CommandOutcome::Created { id } => ids.push(id),
                other => panic!("expected created outcome, got {other:?}"),
            }
        }

        let script = [
            BoardCommand::DragStart { id: ids[0].clone() },
            BoardCommand::DragEnd {
                target: Some(DropTarget::Card(ids[2].clone())),
            },
            BoardCommand::DragStart { id: ids[1].clone() },
            BoardCommand::DragOver {
                target: DropTarget::Column(ActivityStatus::Completed),
            },
            BoardCommand::DragEnd { target: None },
        ];
        let outcomes: Vec<_> = script
            .into_iter()
            .map(|command| command.apply(&mut board).unwrap())
            .collect();

        assert_eq!(
            outcomes,
            vec![
                CommandOutcome::Applied,
                CommandOutcome::Applied,
                CommandOutcome::Applied,
                CommandOutcome::Applied,
                CommandOutcome::Ignored,
            ]
        );
        let todo: Vec<_> = board
            .store()
            .column(ActivityStatus::Todo)
            .into_iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(todo, vec!["C", "A"]);
        assert_eq!(board.store().column(ActivityStatus::Completed)[0].title, "B");
    }

    #[test]
    fn missing_ids_are_ignored_not_errors() {
        let (store, _clock) = test_store();
        let mut board = BoardController::new(store);

        for command in [
            BoardCommand::Delete { id: "nope".into() },
            BoardCommand::Move {
                id: "nope".into(),
                status: ActivityStatus::Cancelled,
            },
            BoardCommand::Update {
                id: "nope".into(),
                changes: ActivityUpdate::default(),
            },
            BoardCommand::DragStart { id: "nope".into() },
        ] {
            assert_eq!(command.apply(&mut board).unwrap(), CommandOutcome::Ignored);
        }
        assert!(board.store().is_empty());
    }

    #[test]
    fn bad_reorder_surfaces_error() {
        let (store, _clock) = test_store();
        let mut board = BoardController::new(store);
        let err = BoardCommand::Reorder {
            status: ActivityStatus::Todo,
            from: 0,
            to: 1,
        }
        .apply(&mut board)
        .unwrap_err();
        assert!(matches!(err, StoreError::IndexOutOfRange { .. }));
    }
}
