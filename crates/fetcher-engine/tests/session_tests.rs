use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

use fetcher_engine::MaterializationSession;
use fetcher_fs::FileOps;
use fetcher_model::{Category, FetchedData, Plan};

fn session() -> MaterializationSession {
    MaterializationSession::new(FileOps::with_sleep(Default::default(), Box::new(|_| {})))
}

fn payload() -> FetchedData {
    serde_json::from_value(json!({
        "group_scripts": {
            "script_folders": [
                {"id": 1, "parent_id": -1, "name": "A"},
                {"id": 2, "parent_id": 1, "name": "B"}
            ],
            "scripts": [
                {"id": 10, "hierarchy_id": 2, "description": "hi", "body": "print(1)"}
            ]
        },
        "group_triggers": {
            "triggers": [
                {"unique_identifier": 7, "description": "", "body": "t();"}
            ]
        },
        "group_screens": {
            "screen_folders": [],
            "screen_definition": [],
            "screen_definition_action": [],
            "screen_definition_element": [],
            "item_config": [],
            "screen_definition_hidden": [],
            "screen_definition_language": []
        },
        "group_screen_choosers": {"screen_choosers": []},
        "group_scheduled_tasks": {
            "scheduled_task": [
                {"id": 1, "schedule_id": 5, "task": "cleanup"}
            ],
            "schedule": [
                {"id": 5, "name": "Nightly"}
            ]
        },
        "group_extra_tables": {
            "extra_table_folders": [],
            "extra_tables": [],
            "extra_fields": []
        }
    }))
    .unwrap()
}

/// Every file under `root`, keyed by relative path.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_path_buf();
                out.insert(rel, fs::read(&path).unwrap());
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

#[test]
fn full_run_materializes_every_category() {
    let temp = TempDir::new().unwrap();
    let plan = Plan::new(temp.path());

    let report = session().run(&payload(), &plan).unwrap();

    assert!(report.success);
    assert_eq!(report.completed.len(), 6);
    assert!(report.errors.is_empty());

    assert_eq!(
        fs::read_to_string(temp.path().join("Scripts/A/B/hi.crmscript")).unwrap(),
        "print(1)"
    );
    assert!(
        temp.path()
            .join("Triggers/Unnamed trigger (ID 7).crmscript")
            .is_file()
    );
    assert!(temp.path().join("Screens").is_dir());
    assert!(temp.path().join("ScreenChoosers").is_dir());
    assert!(temp.path().join("Scheduled tasks/Nightly.json").is_file());
    assert!(temp.path().join("Tables/Contact.json").is_file());
}

#[test]
fn temp_directory_is_removed_after_a_clean_run() {
    let temp = TempDir::new().unwrap();
    let plan = Plan::new(temp.path());

    let report = session().run(&payload(), &plan).unwrap();

    assert!(report.success);
    assert!(!temp.path().join("temp").exists());
}

#[test]
fn rerun_produces_a_byte_identical_tree() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let data = payload();

    session().run(&data, &Plan::new(first.path())).unwrap();
    session().run(&data, &Plan::new(second.path())).unwrap();

    assert_eq!(snapshot(first.path()), snapshot(second.path()));
}

#[test]
fn rerun_over_existing_output_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let plan = Plan::new(temp.path());
    let data = payload();

    session().run(&data, &plan).unwrap();
    let first = snapshot(temp.path());

    session().run(&data, &plan).unwrap();
    assert_eq!(snapshot(temp.path()), first);
}

#[test]
fn stale_prior_content_is_discarded() {
    let temp = TempDir::new().unwrap();
    let plan = Plan::new(temp.path());

    let stale_dir = temp.path().join("Scripts/Obsolete");
    fs::create_dir_all(&stale_dir).unwrap();
    fs::write(stale_dir.join("old.crmscript"), "gone();").unwrap();

    let report = session().run(&payload(), &plan).unwrap();

    assert!(report.success);
    assert!(!stale_dir.exists());
    assert!(temp.path().join("Scripts/A/B/hi.crmscript").is_file());
}

#[test]
fn stale_temp_from_a_crashed_run_is_cleared_first() {
    let temp = TempDir::new().unwrap();
    let plan = Plan::new(temp.path());

    let leftover = temp.path().join("temp/Scripts");
    fs::create_dir_all(&leftover).unwrap();
    fs::write(leftover.join("crashed.crmscript"), "x").unwrap();

    let report = session().run(&payload(), &plan).unwrap();

    assert!(report.success);
    assert!(!temp.path().join("temp").exists());
}

#[test]
fn disabled_categories_are_left_untouched() {
    let temp = TempDir::new().unwrap();
    let mut plan = Plan::new(temp.path());
    plan.categories.triggers = false;

    let pre_existing = temp.path().join("Triggers");
    fs::create_dir_all(&pre_existing).unwrap();
    fs::write(pre_existing.join("keep.crmscript"), "keep();").unwrap();

    let report = session().run(&payload(), &plan).unwrap();

    assert!(report.success);
    assert_eq!(report.completed.len(), 5);
    assert!(!report.completed.contains(&Category::Triggers));
    assert_eq!(
        fs::read_to_string(pre_existing.join("keep.crmscript")).unwrap(),
        "keep();"
    );
}

#[test]
fn enabled_category_missing_from_payload_fails_that_category_only() {
    let temp = TempDir::new().unwrap();
    let plan = Plan::new(temp.path());

    let mut data = payload();
    data.group_screens = None;

    let report = session().run(&data, &plan).unwrap();

    assert!(!report.success);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].0, Category::Screens);
    // The other categories still ran.
    assert!(report.completed.contains(&Category::Scripts));
    assert!(temp.path().join("Scripts/A/B/hi.crmscript").is_file());
}

#[test]
fn missing_group_leaves_previous_output_in_place() {
    let temp = TempDir::new().unwrap();
    let plan = Plan::new(temp.path());

    let previous = temp.path().join("Screens");
    fs::create_dir_all(&previous).unwrap();
    fs::write(previous.join("marker.json"), "{}").unwrap();

    let mut data = payload();
    data.group_screens = None;

    let report = session().run(&data, &plan).unwrap();

    assert!(!report.success);
    // The failure happened before any backup move, so the old tree is intact.
    assert!(previous.join("marker.json").is_file());
}

#[test]
fn prior_output_is_backed_up_before_the_fresh_build() {
    use fetcher_engine::coordinator::replace_in_place;

    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let ops = FileOps::with_sleep(Default::default(), Box::new(|_| {}));

    let prior = root.join("Scripts");
    fs::create_dir_all(&prior).unwrap();
    fs::write(prior.join("previous.crmscript"), "old();").unwrap();

    let temp_dir = root.join("temp");
    fs::create_dir(&temp_dir).unwrap();

    let mut backup_seen_during_build = false;
    replace_in_place(
        &ops,
        Category::Scripts,
        root,
        &temp_dir,
        &["Scripts"],
        || {
            // While the fresh tree is being built, the prior content must
            // already be recoverable from the temp directory.
            backup_seen_during_build = temp_dir.join("Scripts/previous.crmscript").is_file();
        },
    )
    .unwrap();

    assert!(backup_seen_during_build);
    assert!(!temp_dir.join("Scripts").exists());
}

#[test]
fn backup_failure_reports_the_phase_and_keeps_prior_output() {
    use fetcher_engine::coordinator::replace_in_place;

    let outer = TempDir::new().unwrap();
    let root = outer.path();
    let ops = FileOps::with_sleep(Default::default(), Box::new(|_| {}));

    let prior = root.join("Scripts");
    fs::create_dir(&prior).unwrap();
    fs::write(prior.join("previous.crmscript"), "old();").unwrap();

    // A regular file squatting on the temp path makes the backup move fail:
    // the rename target is not a directory, and clearing it does not help.
    let temp_dir = root.join("temp");
    fs::write(&temp_dir, "not a directory").unwrap();

    let mut built = false;
    let result = replace_in_place(
        &ops,
        Category::Scripts,
        root,
        &temp_dir,
        &["Scripts"],
        || built = true,
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("backup"), "got: {err}");
    assert!(!built);
    // The prior tree was never deleted.
    assert!(prior.join("previous.crmscript").is_file());
}
