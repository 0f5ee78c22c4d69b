//! Screens: one folder per screen with script files and joined JSON tables

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use fetcher_fs::{FileOps, sanitize};
use fetcher_model::{Record, ScreenGroup};

use crate::hierarchy::build_tree;
use crate::writers::{write_file_logged, write_json_logged};

/// The four loading-script body fields of a screen, with the fixed file
/// name each one is written under.
const SCRIPT_FILES: [(&str, &str); 4] = [
    ("creation_script", "Creation script.crmscript"),
    ("load_script_body", "Loading script (before setFromCgi).crmscript"),
    (
        "load_post_cgi_script_body",
        "Loading script (after setFromCgi).crmscript",
    ),
    (
        "load_final_script_body",
        "Load script (run after everything else).crmscript",
    ),
];

/// Materialize the Screens category under `root`.
pub fn write_group(ops: &FileOps, root: &Path, group: &ScreenGroup) {
    build_tree(ops, root, &group.screen_folders, |dir, folder_id| {
        write_screens_in_folder(ops, dir, folder_id, group);
    });
}

fn write_screens_in_folder(ops: &FileOps, dir: &Path, folder_id: i64, group: &ScreenGroup) {
    for screen in group
        .screen_definition
        .iter()
        .filter(|sd| sd.int("hierarchy_id") == Some(folder_id))
    {
        write_screen(ops, dir, screen, group);
    }
}

fn write_screen(ops: &FileOps, dir: &Path, screen: &Record, group: &ScreenGroup) {
    let screen_id = screen.int("id").unwrap_or(-1);
    let name = match screen.display_name("name") {
        Some(name) => name.to_string(),
        None => format!("Unnamed screen (ID {screen_id})"),
    };

    let screen_dir = dir.join(sanitize(&format!("(Screen) {name}")));
    debug!(path = %screen_dir.display(), "creating screen folder");
    if let Err(e) = ops.create_dir(&screen_dir) {
        warn!(path = %screen_dir.display(), error = %e, "could not create screen folder");
    }

    // One .crmscript file per loading script, bytes verbatim.
    for (field, file_name) in SCRIPT_FILES {
        let body = screen.text(field).unwrap_or_default();
        write_file_logged(ops, &screen_dir, file_name, body.as_bytes());
    }

    write_buttons(ops, &screen_dir, screen_id, &group.screen_definition_action);

    // The screen table itself, minus the bodies that already went out as
    // separate files.
    let body_fields: Vec<&str> = SCRIPT_FILES.iter().map(|(field, _)| *field).collect();
    write_json_logged(
        ops,
        &screen_dir,
        "screen_definition.json",
        &screen.without(&body_fields),
    );

    write_elements(
        ops,
        &screen_dir,
        screen_id,
        &group.screen_definition_element,
        &group.item_config,
    );

    let hidden = rows_for_screen(&group.screen_definition_hidden, screen_id);
    write_json_logged(ops, &screen_dir, "screen_definition_hidden.json", &hidden);

    let language = rows_for_screen(&group.screen_definition_language, screen_id);
    write_json_logged(ops, &screen_dir, "screen_definition_language.json", &language);
}

fn write_buttons(ops: &FileOps, screen_dir: &Path, screen_id: i64, actions: &[Record]) {
    let buttons_dir = screen_dir.join("Buttons");
    if let Err(e) = ops.create_dir(&buttons_dir) {
        warn!(path = %buttons_dir.display(), error = %e, "could not create Buttons folder");
    }

    for button in rows_for_screen(actions, screen_id) {
        let name = match button.display_name("button") {
            Some(name) => sanitize(name),
            None => format!("Unnamed button (ID {})", button.int("id").unwrap_or(-1)),
        };
        let body = button.text("ejscript_body").unwrap_or_default();
        write_file_logged(ops, &buttons_dir, &format!("{name}.crmscript"), body.as_bytes());
    }
}

/// Elements of one screen, each with its item configs embedded under an
/// `item_config` key, joined on `item_id == element.id`.
fn write_elements(
    ops: &FileOps,
    screen_dir: &Path,
    screen_id: i64,
    elements: &[Record],
    item_configs: &[Record],
) {
    let joined: Vec<Record> = rows_for_screen(elements, screen_id)
        .into_iter()
        .map(|element| {
            let element_id = element.int("id");
            let configs: Vec<Value> = item_configs
                .iter()
                .filter(|ic| ic.int("item_id") == element_id && element_id.is_some())
                .map(|ic| Value::Object(ic.0.clone()))
                .collect();

            let mut out = element.clone();
            out.insert("item_config", Value::Array(configs));
            out
        })
        .collect();

    write_json_logged(ops, screen_dir, "screen_definition_element.json", &joined);
}

fn rows_for_screen(rows: &[Record], screen_id: i64) -> Vec<Record> {
    rows.iter()
        .filter(|row| row.int("screen_definition") == Some(screen_id))
        .cloned()
        .collect()
}
