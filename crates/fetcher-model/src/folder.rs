//! Folder records forming the fetched hierarchy

use serde::{Deserialize, Serialize};

/// Sentinel `parent_id` marking a folder (or entity owner) at the root of
/// its category. Not a valid folder id.
pub const ROOT_PARENT_ID: i64 = -1;

/// One node in a category's folder tree.
///
/// Ids are unique within one category's folder list; they are not unique
/// across categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub parent_id: i64,
    pub name: String,
}

impl Folder {
    pub fn is_root(&self) -> bool {
        self.parent_id == ROOT_PARENT_ID
    }
}
