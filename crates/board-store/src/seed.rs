//! Sample board used when `general.seed_sample_data` is on.

use board_core::entities::Activity;
use board_core::enums::{ActivityPriority, ActivityStatus};
use chrono::{DateTime, TimeZone, Utc};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// One activity per column, with fixed January 2024 timestamps.
#[must_use]
pub fn sample_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "act-00000001".into(),
            title: "Implement authentication".into(),
            description: "Build login and sign-up with input validation".into(),
            status: ActivityStatus::Todo,
            priority: ActivityPriority::High,
            created_at: day(2024, 1, 15),
            updated_at: day(2024, 1, 15),
        },
        Activity {
            id: "act-00000002".into(),
            title: "Dashboard design".into(),
            description: "Prototype and implement the main dashboard".into(),
            status: ActivityStatus::InProgress,
            priority: ActivityPriority::Medium,
            created_at: day(2024, 1, 16),
            updated_at: day(2024, 1, 16),
        },
        Activity {
            id: "act-00000003".into(),
            title: "Unit tests".into(),
            description: "Cover the critical components with tests".into(),
            status: ActivityStatus::Completed,
            priority: ActivityPriority::Medium,
            created_at: day(2024, 1, 10),
            updated_at: day(2024, 1, 14),
        },
        Activity {
            id: "act-00000004".into(),
            title: "Set up CI/CD".into(),
            description: "Configure the integration and automatic deploy pipeline".into(),
            status: ActivityStatus::Cancelled,
            priority: ActivityPriority::Low,
            created_at: day(2024, 1, 12),
            updated_at: day(2024, 1, 13),
        },
    ]
}
