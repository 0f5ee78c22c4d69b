//! Filesystem layer for CRMScript Fetcher
//!
//! Provides filesystem-safe name sanitization and the retrying directory
//! operations the materialization engine is built on.

pub mod error;
pub mod io;
pub mod ops;
pub mod path;
pub mod retry;

pub use error::{Error, Result};
pub use ops::FileOps;
pub use path::sanitize;
pub use retry::{RetryPolicy, SleepFn};
