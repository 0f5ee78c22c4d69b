//! ScreenChoosers: a flat list of body + metadata file pairs

use std::path::Path;

use fetcher_fs::FileOps;
use fetcher_model::Record;

use crate::writers::{scripted_stem, write_scripted_entity};

/// Materialize the ScreenChoosers category into `dir`.
pub fn write_files(ops: &FileOps, dir: &Path, screen_choosers: &[Record]) {
    for chooser in screen_choosers {
        let stem = scripted_stem(chooser, "ScreenChooser", "unique_identifier");
        write_scripted_entity(ops, dir, chooser, &stem);
    }
}
