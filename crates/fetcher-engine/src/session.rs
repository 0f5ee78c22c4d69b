//! Top-level driver for one materialization run

use serde::Serialize;
use tracing::{error, info, warn};

use fetcher_fs::FileOps;
use fetcher_model::{Category, FetchedData, Plan};

use crate::coordinator::replace_in_place;
use crate::writers::{scheduled_tasks, screen_choosers, screens, scripts, tables, triggers};
use crate::{Error, Result};

/// Outcome of one session: which categories committed and what failed.
///
/// `success` is true only if every enabled category committed. For failed
/// categories the backup of their previous output is retained under the
/// temp directory, so the target tree may be in a mixed state: fresh trees
/// for completed categories, recovery copies for failed ones.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub success: bool,
    pub completed: Vec<Category>,
    pub errors: Vec<(Category, String)>,
}

impl SessionReport {
    fn record(&mut self, category: Category, result: Result<()>) {
        match result {
            Ok(()) => self.completed.push(category),
            Err(e) => {
                error!(%category, error = %e, "category failed");
                self.success = false;
                self.errors.push((category, e.to_string()));
            }
        }
    }
}

/// Runs one full materialization of a fetched payload.
///
/// Holds no state between runs; the same session can be reused for
/// subsequent payloads. Categories run strictly sequentially in the order
/// of [`Category::ALL`]; one category's failure does not block the rest.
pub struct MaterializationSession {
    ops: FileOps,
}

impl Default for MaterializationSession {
    fn default() -> Self {
        Self::new(FileOps::default())
    }
}

impl MaterializationSession {
    pub fn new(ops: FileOps) -> Self {
        Self { ops }
    }

    /// Materialize every enabled category of `data` under the plan's target
    /// root.
    ///
    /// # Errors
    ///
    /// Returns an error only when the transient temp directory cannot be
    /// prepared; everything after that point is reported per category in
    /// the [`SessionReport`].
    pub fn run(&self, data: &FetchedData, plan: &Plan) -> Result<SessionReport> {
        let temp_dir = plan.temp_dir();

        // A stale temp directory means a previous run crashed mid-flight;
        // its contents were already re-fetched, so clear it out.
        info!(temp = %temp_dir.display(), "clearing stale temp directory");
        self.ops.remove_dir_tree(&temp_dir)?;
        self.ops.create_dir(&temp_dir)?;

        let mut report = SessionReport {
            success: true,
            completed: Vec::new(),
            errors: Vec::new(),
        };

        for category in Category::ALL {
            if !plan.categories.enabled(category) {
                continue;
            }
            let result = self.run_category(category, data, plan);
            report.record(category, result);
        }

        if report.success {
            self.ops.remove_dir_tree(&temp_dir)?;
        } else {
            warn!(
                temp = %temp_dir.display(),
                "keeping temp directory: it holds the backups of failed categories"
            );
        }

        Ok(report)
    }

    fn run_category(&self, category: Category, data: &FetchedData, plan: &Plan) -> Result<()> {
        let root = &plan.target_root;
        let temp = plan.temp_dir();
        let dirs = &[category.dir_name()];
        let dir = plan.category_dir(category);

        match category {
            Category::Scripts => {
                let group = data
                    .group_scripts
                    .as_ref()
                    .ok_or(Error::MissingGroup { category })?;
                replace_in_place(&self.ops, category, root, &temp, dirs, || {
                    scripts::write_group(&self.ops, &dir, group);
                })
            }
            Category::Triggers => {
                let group = data
                    .group_triggers
                    .as_ref()
                    .ok_or(Error::MissingGroup { category })?;
                replace_in_place(&self.ops, category, root, &temp, dirs, || {
                    triggers::write_files(&self.ops, &dir, &group.triggers);
                })
            }
            Category::Screens => {
                let group = data
                    .group_screens
                    .as_ref()
                    .ok_or(Error::MissingGroup { category })?;
                replace_in_place(&self.ops, category, root, &temp, dirs, || {
                    screens::write_group(&self.ops, &dir, group);
                })
            }
            Category::ScreenChoosers => {
                let group = data
                    .group_screen_choosers
                    .as_ref()
                    .ok_or(Error::MissingGroup { category })?;
                replace_in_place(&self.ops, category, root, &temp, dirs, || {
                    screen_choosers::write_files(&self.ops, &dir, &group.screen_choosers);
                })
            }
            Category::ScheduledTasks => {
                let group = data
                    .group_scheduled_tasks
                    .as_ref()
                    .ok_or(Error::MissingGroup { category })?;
                replace_in_place(&self.ops, category, root, &temp, dirs, || {
                    scheduled_tasks::write_files(&self.ops, &dir, group);
                })
            }
            Category::Tables => {
                let group = data
                    .group_extra_tables
                    .as_ref()
                    .ok_or(Error::MissingGroup { category })?;
                replace_in_place(&self.ops, category, root, &temp, dirs, || {
                    tables::write_group(&self.ops, &dir, group);
                })
            }
        }
    }
}
