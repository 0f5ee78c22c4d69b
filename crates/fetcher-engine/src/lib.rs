//! Hierarchy materialization engine for CRMScript Fetcher
//!
//! Turns one fetched payload into an on-disk folder/file tree, replacing any
//! prior materialization of the same tree:
//!
//! - [`hierarchy`] rebuilds parent/child folder structure from flat
//!   id/parent-id records.
//! - [`writers`] emit the per-entity files for each category.
//! - [`coordinator`] makes the destructive replace-in-place safe with a
//!   backup/swap through a transient `temp` directory.
//! - [`session`] drives one full run across all enabled categories.
//!
//! ```text
//! fetch layer -> FetchedData -> MaterializationSession
//!                   -> per-category coordinator -> hierarchy -> writers -> FileOps
//! ```

pub mod coordinator;
pub mod error;
pub mod hierarchy;
pub mod json;
pub mod session;
pub mod writers;

pub use coordinator::Phase;
pub use error::{Error, Result};
pub use session::{MaterializationSession, SessionReport};
