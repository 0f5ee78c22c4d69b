//! Triggers: a flat list of body + metadata file pairs

use std::path::Path;

use fetcher_fs::FileOps;
use fetcher_model::Record;

use crate::writers::{scripted_stem, write_scripted_entity};

/// Materialize the Triggers category into `dir`.
pub fn write_files(ops: &FileOps, dir: &Path, triggers: &[Record]) {
    for trigger in triggers {
        // Triggers are often unnamed; the id-based fallback keeps them apart.
        let stem = scripted_stem(trigger, "trigger", "unique_identifier");
        write_scripted_entity(ops, dir, trigger, &stem);
    }
}
