//! Materialization plan: target root plus enabled categories

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One top-level kind of fetched content, each materialized as one root
/// output directory under the target root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Scripts,
    Triggers,
    Screens,
    ScreenChoosers,
    ScheduledTasks,
    Tables,
}

impl Category {
    /// All categories, in the fixed order a session runs them.
    pub const ALL: [Category; 6] = [
        Category::Scripts,
        Category::Triggers,
        Category::Screens,
        Category::ScreenChoosers,
        Category::ScheduledTasks,
        Category::Tables,
    ];

    /// Output directory name under the target root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Scripts => "Scripts",
            Self::Triggers => "Triggers",
            Self::Screens => "Screens",
            Self::ScreenChoosers => "ScreenChoosers",
            Self::ScheduledTasks => "Scheduled tasks",
            Self::Tables => "Tables",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Per-category enable flags. Everything is on by default; the tenant
/// config can switch individual categories off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryToggles {
    pub scripts: bool,
    pub triggers: bool,
    pub screens: bool,
    pub screen_choosers: bool,
    pub scheduled_tasks: bool,
    pub extra_tables: bool,
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self {
            scripts: true,
            triggers: true,
            screens: true,
            screen_choosers: true,
            scheduled_tasks: true,
            extra_tables: true,
        }
    }
}

impl CategoryToggles {
    pub fn enabled(&self, category: Category) -> bool {
        match category {
            Category::Scripts => self.scripts,
            Category::Triggers => self.triggers,
            Category::Screens => self.screens,
            Category::ScreenChoosers => self.screen_choosers,
            Category::ScheduledTasks => self.scheduled_tasks,
            Category::Tables => self.extra_tables,
        }
    }
}

/// What to materialize and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Directory the category trees are written under.
    pub target_root: PathBuf,
    /// Which categories to materialize.
    #[serde(default)]
    pub categories: CategoryToggles,
}

impl Plan {
    /// Plan with every category enabled.
    pub fn new(target_root: impl Into<PathBuf>) -> Self {
        Self {
            target_root: target_root.into(),
            categories: CategoryToggles::default(),
        }
    }

    /// The transient backup directory used during replace-in-place. The
    /// name must never collide with a category directory name.
    pub fn temp_dir(&self) -> PathBuf {
        self.target_root.join("temp")
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.target_root.join(category.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn temp_dir_does_not_collide_with_categories() {
        let plan = Plan::new("/tmp/out");
        let temp_name = plan.temp_dir();
        let temp_name = temp_name.file_name().unwrap();
        for category in Category::ALL {
            assert_ne!(temp_name.to_str().unwrap(), category.dir_name());
        }
    }

    #[test]
    fn toggles_default_to_all_enabled() {
        let toggles = CategoryToggles::default();
        for category in Category::ALL {
            assert!(toggles.enabled(category));
        }
    }

    #[test]
    fn toggles_deserialize_from_partial_toml() {
        let toggles: CategoryToggles = toml::from_str("screens = false").unwrap();
        assert!(!toggles.enabled(Category::Screens));
        assert!(toggles.enabled(Category::Scripts));
    }
}
