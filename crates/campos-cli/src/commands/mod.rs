//! Subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use campos_core::CamposConfig;

/// Load the config given with `--config`, else the default config file if it
/// exists, else built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CamposConfig> {
    if let Some(path) = config_path {
        return Ok(CamposConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(CamposConfig::from_file(&default_path)?)
    } else {
        Ok(CamposConfig::default())
    }
}
