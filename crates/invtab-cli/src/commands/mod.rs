//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use invtab_core::InvtabConfig;

/// Load configuration from an explicit path, or fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<InvtabConfig> {
    match config_path {
        Some(path) => Ok(InvtabConfig::from_file(Path::new(path))?),
        None => Ok(InvtabConfig::default()),
    }
}
