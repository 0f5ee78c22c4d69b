//! Folder-tree reconstruction from flat id/parent-id records
//!
//! Folders arrive as a flat list; the tree shape is implied by each record
//! referencing its parent by id, with `-1` marking the root level. The walk
//! is depth-first and single-threaded, and input order decides the order of
//! siblings so reruns produce identical trees.

use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

use fetcher_fs::{FileOps, sanitize};
use fetcher_model::{Folder, ROOT_PARENT_ID};

/// Build a category's folder tree under `root` and write each folder's
/// entities via `leaf_writer`.
///
/// `leaf_writer` is called with a directory and the id of the folder that
/// owns it; root-level entities are written first with the sentinel id.
/// Folders whose parent id is never reached (dangling reference, self
/// reference, cycle) are skipped rather than raised: the remote source is
/// trusted to produce a tree, and a malformed payload should cost the
/// affected folders only, not the run. Skipped folders are logged.
pub fn build_tree<F>(ops: &FileOps, root: &Path, folders: &[Folder], mut leaf_writer: F)
where
    F: FnMut(&Path, i64),
{
    leaf_writer(root, ROOT_PARENT_ID);

    // Visited ids are scoped to this pass so same-named folders in
    // different branches each materialize.
    let mut visited = HashSet::with_capacity(folders.len());
    build_level(ops, root, folders, ROOT_PARENT_ID, &mut visited, &mut leaf_writer);

    let skipped = folders.len() - visited.len();
    if skipped > 0 {
        warn!(
            root = %root.display(),
            skipped,
            "folders with unreachable parents were not created"
        );
    }
}

fn build_level<F>(
    ops: &FileOps,
    dir: &Path,
    folders: &[Folder],
    parent_id: i64,
    visited: &mut HashSet<i64>,
    leaf_writer: &mut F,
) where
    F: FnMut(&Path, i64),
{
    for folder in folders.iter().filter(|f| f.parent_id == parent_id) {
        if !visited.insert(folder.id) {
            continue;
        }

        let path = dir.join(sanitize(&folder.name));
        if let Err(e) = ops.create_dir(&path) {
            // Descendants will fail to write and log individually.
            warn!(path = %path.display(), error = %e, "could not create folder");
        }

        leaf_writer(&path, folder.id);
        build_level(ops, &path, folders, folder.id, visited, leaf_writer);
    }
}
