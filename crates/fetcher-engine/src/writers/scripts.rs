//! Scripts: a folder hierarchy of body + metadata file pairs

use std::path::Path;

use fetcher_fs::FileOps;
use fetcher_model::{Record, ScriptGroup};

use crate::hierarchy::build_tree;
use crate::writers::{scripted_stem, write_scripted_entity};

/// Materialize the Scripts category under `root`.
pub fn write_group(ops: &FileOps, root: &Path, group: &ScriptGroup) {
    build_tree(ops, root, &group.script_folders, |dir, folder_id| {
        write_scripts_in_folder(ops, dir, folder_id, &group.scripts);
    });
}

fn write_scripts_in_folder(ops: &FileOps, dir: &Path, folder_id: i64, scripts: &[Record]) {
    for script in scripts
        .iter()
        .filter(|s| s.int("hierarchy_id") == Some(folder_id))
    {
        let stem = scripted_stem(script, "script", "id");
        write_scripted_entity(ops, dir, script, &stem);
    }
}
