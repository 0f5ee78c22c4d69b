//! Tenant configuration file

use std::path::{Path, PathBuf};

use serde::Deserialize;

use fetcher_model::{CategoryToggles, Plan};

use crate::error::Result;

/// One tenant's materialization settings, loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantConfig {
    /// Directory the category trees are written under.
    pub local_directory: PathBuf,
    /// Which categories to materialize; defaults to all.
    #[serde(default)]
    pub fetch_options: CategoryToggles,
}

impl TenantConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn into_plan(self) -> Plan {
        Plan {
            target_root: self.local_directory,
            categories: self.fetch_options,
        }
    }
}
