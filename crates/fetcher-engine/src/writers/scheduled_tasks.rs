//! Scheduled tasks: one JSON file per task with its schedule embedded

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use fetcher_fs::{FileOps, sanitize};
use fetcher_model::ScheduledTaskGroup;

use crate::writers::write_json_logged;

/// Schedule fields that change on every execution. Keeping them would churn
/// the materialized files (and any Git history on top of them) without
/// carrying information, so they are stripped before serialization.
const VOLATILE_SCHEDULE_FIELDS: [&str; 11] = [
    "asap",
    "next_execution",
    "last_execution",
    "execution_time",
    "lock_expire",
    "lock_pid",
    "lock_ttl",
    "error_message",
    "last_error",
    "retries",
    "retry_interval",
];

/// Materialize the Scheduled tasks category into `dir`.
///
/// Each task is joined with its schedule on `schedule_id == schedule.id`;
/// the file is named after the schedule, not the task. Tasks without a
/// matching schedule are skipped.
pub fn write_files(ops: &FileOps, dir: &Path, group: &ScheduledTaskGroup) {
    for task in &group.scheduled_task {
        let schedule_id = task.int("schedule_id");
        let schedule = schedule_id.and_then(|id| {
            group
                .schedule
                .iter()
                .find(|schedule| schedule.int("id") == Some(id))
        });

        let Some(schedule) = schedule else {
            warn!(
                task_id = task.int("id").unwrap_or(-1),
                schedule_id = schedule_id.unwrap_or(-1),
                "scheduled task has no matching schedule, skipping"
            );
            continue;
        };

        let schedule = schedule.without(&VOLATILE_SCHEDULE_FIELDS);
        let name = match schedule.display_name("name") {
            Some(name) => name.to_string(),
            None => format!("Unnamed schedule (ID {})", schedule_id.unwrap_or(-1)),
        };

        let mut document = task.clone();
        document.insert("schedule", Value::Object(schedule.0));

        write_json_logged(ops, dir, &format!("{}.json", sanitize(&name)), &document);
    }
}
