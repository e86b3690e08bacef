use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kambas::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir().map(|dir| dir.join("kambas"));

    [exe_dir, cur_dir, cfg_dir].into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// Loads the configuration from `cfg_path` or from the first `kambas.toml`
/// found. Without any file, the defaults apply to the current directory.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let Some(config_path) = cfg_path.or_else(get_config_path) else {
        println!("No {} found. Using defaults in the current directory", CFG_FILE_NAME);
        return Ok(Config::default());
    };

    println!("Reading config from {}", config_path.display());
    let config = read_config(&config_path)?;

    let base_dir = config_path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .map_or_else(env::current_dir, Ok)
        .context("Could not find the configuration directory")?;

    Ok(config.relative_to(&base_dir))
}
