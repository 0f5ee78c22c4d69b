//! Extra tables: a folder hierarchy of per-table JSON files, plus the
//! built-in tables' extra fields at the category root

use std::path::Path;

use serde_json::json;

use fetcher_fs::{FileOps, sanitize};
use fetcher_model::{Record, TableGroup};

use crate::hierarchy::build_tree;
use crate::writers::write_json_logged;

/// Built-in tables, keyed by the domain code used in the extra_field table.
const DOMAINS: [(i64, &str); 8] = [
    (1, "Contact"),
    (2, "Company"),
    (4, "Request"),
    (8, "Message"),
    (32, "User"),
    (64, "Category"),
    (128, "FAQ entry"),
    (256, "FAQ category"),
];

/// Materialize the Tables category under `root`.
pub fn write_group(ops: &FileOps, root: &Path, group: &TableGroup) {
    build_tree(ops, root, &group.extra_table_folders, |dir, folder_id| {
        write_tables_in_folder(ops, dir, folder_id, group);
    });

    write_domain_files(ops, root, &group.extra_fields);
}

/// One JSON file per extra table, combining the table row with all extra
/// fields joined on `extra_table == table.id`.
fn write_tables_in_folder(ops: &FileOps, dir: &Path, folder_id: i64, group: &TableGroup) {
    for table in group
        .extra_tables
        .iter()
        .filter(|t| t.int("hierarchy_id") == Some(folder_id))
    {
        let table_id = table.int("id");
        let fields: Vec<&Record> = group
            .extra_fields
            .iter()
            .filter(|f| f.int("extra_table") == table_id && table_id.is_some())
            .collect();

        let document = json!({
            "extra_table": table,
            "extra_fields": fields,
        });

        let name = match table.display_name("name") {
            Some(name) => name.to_string(),
            None => format!("Unnamed table (ID {})", table_id.unwrap_or(-1)),
        };

        write_json_logged(ops, dir, &format!("{}.json", sanitize(&name)), &document);
    }
}

/// The built-in tables get one file each at the category root, holding the
/// extra fields whose domain code matches.
fn write_domain_files(ops: &FileOps, root: &Path, extra_fields: &[Record]) {
    for (code, table_name) in DOMAINS {
        let fields: Vec<&Record> = extra_fields
            .iter()
            .filter(|f| f.int("domain") == Some(code))
            .collect();

        let document = json!({ "extra_fields": fields });
        write_json_logged(ops, root, &format!("{table_name}.json"), &document);
    }
}
