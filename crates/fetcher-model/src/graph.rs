//! Per-category groups of the fetched payload
//!
//! Field names mirror the wire format produced by the fetcher script, so
//! the whole payload deserializes with serde directly.

use serde::Deserialize;

use crate::{Folder, Record};

/// Scripts: a folder hierarchy plus the scripts owned by its folders.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptGroup {
    pub script_folders: Vec<Folder>,
    pub scripts: Vec<Record>,
}

/// Triggers: a flat list, no folder hierarchy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerGroup {
    pub triggers: Vec<Record>,
}

/// Screens: a folder hierarchy plus the screen tables joined per screen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenGroup {
    pub screen_folders: Vec<Folder>,
    pub screen_definition: Vec<Record>,
    pub screen_definition_action: Vec<Record>,
    pub screen_definition_element: Vec<Record>,
    pub item_config: Vec<Record>,
    pub screen_definition_hidden: Vec<Record>,
    pub screen_definition_language: Vec<Record>,
}

/// ScreenChoosers: a flat list, no folder hierarchy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenChooserGroup {
    pub screen_choosers: Vec<Record>,
}

/// Scheduled tasks plus the schedule table they reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduledTaskGroup {
    pub scheduled_task: Vec<Record>,
    pub schedule: Vec<Record>,
}

/// Extra tables: a folder hierarchy, the tables, and their fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableGroup {
    pub extra_table_folders: Vec<Folder>,
    pub extra_tables: Vec<Record>,
    pub extra_fields: Vec<Record>,
}

/// One full fetched payload.
///
/// Every group is optional: the fetcher script only includes the groups the
/// tenant asked for, and older script versions never produce some of them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchedData {
    pub group_scripts: Option<ScriptGroup>,
    pub group_triggers: Option<TriggerGroup>,
    pub group_screens: Option<ScreenGroup>,
    pub group_screen_choosers: Option<ScreenChooserGroup>,
    pub group_scheduled_tasks: Option<ScheduledTaskGroup>,
    pub group_extra_tables: Option<TableGroup>,
}
