//! Per-category entity writers
//!
//! One submodule per fetched category. All writers share the same failure
//! posture: a file that cannot be produced (write error, missing body,
//! missing join row) is logged and skipped, and its siblings still get
//! written.

pub mod scheduled_tasks;
pub mod screen_choosers;
pub mod screens;
pub mod scripts;
pub mod tables;
pub mod triggers;

use std::path::Path;

use serde::Serialize;
use tracing::warn;

use fetcher_fs::{FileOps, sanitize};
use fetcher_model::Record;

use crate::json;

/// Write one file, logging instead of propagating failure.
pub(crate) fn write_file_logged(ops: &FileOps, dir: &Path, file_name: &str, content: &[u8]) {
    let path = dir.join(file_name);
    if let Err(e) = ops.write_file(&path, content) {
        warn!(path = %path.display(), error = %e, "could not write file");
    }
}

/// Serialize a value as 4-space JSON and write it, logging failures.
pub(crate) fn write_json_logged<T: Serialize>(
    ops: &FileOps,
    dir: &Path,
    file_name: &str,
    value: &T,
) {
    match json::to_pretty_bytes(value) {
        Ok(bytes) => write_file_logged(ops, dir, file_name, &bytes),
        Err(e) => {
            warn!(dir = %dir.display(), file_name, error = %e, "could not serialize JSON");
        }
    }
}

/// File stem for a scripted entity: its sanitized description, or an
/// id-based fallback when the description is empty. Entities routinely
/// arrive unnamed.
pub(crate) fn scripted_stem(record: &Record, kind: &str, id_field: &str) -> String {
    match record.display_name("description") {
        Some(description) => sanitize(description),
        None => format!("Unnamed {kind} (ID {})", record.int(id_field).unwrap_or(-1)),
    }
}

/// Write a scripted entity's body and metadata files into `dir`.
///
/// The body goes out byte-verbatim as `<stem>.crmscript`; the metadata file
/// `<stem>.json` is the record with the body field stripped.
pub(crate) fn write_scripted_entity(ops: &FileOps, dir: &Path, record: &Record, stem: &str) {
    match record.text("body") {
        Some(body) => {
            write_file_logged(ops, dir, &format!("{stem}.crmscript"), body.as_bytes());
        }
        None => {
            warn!(dir = %dir.display(), stem, "entity has no body field, skipping script file");
        }
    }

    write_json_logged(ops, dir, &format!("{stem}.json"), &record.without(&["body"]));
}
