//! Data model for the CRMScript Fetcher payload
//!
//! The fetch layer hands the engine one deserialized JSON payload per run.
//! Folder records are fully typed; leaf entities keep their dynamic field
//! maps because the field set varies per entity kind and the metadata files
//! must round-trip fields this crate has never heard of.

pub mod folder;
pub mod graph;
pub mod plan;
pub mod record;

pub use folder::{Folder, ROOT_PARENT_ID};
pub use graph::{
    FetchedData, ScheduledTaskGroup, ScreenChooserGroup, ScreenGroup, ScriptGroup, TableGroup,
    TriggerGroup,
};
pub use plan::{Category, CategoryToggles, Plan};
pub use record::Record;
