//! Resolve the directories `kitty-theme` reads from.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::{BaseDirs, ProjectDirs};

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "kitty-theme";
const APPLICATION: &str = "kitty-theme";

const CONFIG_DIR_ENV: &str = "KITTY_THEME_CONFIG_DIR";
/// kitty's own override for its configuration directory.
const KITTY_CONFIG_DIR_ENV: &str = "KITTY_CONFIG_DIRECTORY";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for kitty-theme"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value so that callers can
/// use shell defaults without worrying about trailing whitespace.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the directory holding this tool's `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Return kitty's configuration directory (where the theme links live).
pub fn get_kitty_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(KITTY_CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	let base = BaseDirs::new().ok_or_else(|| anyhow!("unable to determine the home directory"))?;
	Ok(base.config_dir().join("kitty"))
}

/// Return the user's home directory, used for `~` expansion.
pub fn get_home_dir() -> Option<PathBuf> {
	BaseDirs::new().map(|base| base.home_dir().to_path_buf())
}
