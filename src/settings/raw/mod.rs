use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use kitty_theme::EngineConfig;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod paths;
mod remote;

use paths::PathsSection;
use remote::RemoteSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    paths: PathsSection,
    remote: RemoteSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.paths.apply_cli_overrides(cli);
        self.remote.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            remote_socket: detect_source(
                cli.socket.is_some(),
                self.remote.socket.is_some(),
                "KITTY_THEME__REMOTE__SOCKET",
                "--socket",
                "remote.socket",
            ),
            remote_timeout: detect_source(
                cli.timeout_ms.is_some(),
                self.remote.timeout_ms.is_some(),
                "KITTY_THEME__REMOTE__TIMEOUT_MS",
                "--timeout-ms",
                "remote.timeout_ms",
            ),
        };

        let paths = self.paths.resolve()?;
        let (socket, timeout) = self.remote.resolve(&sources).map_err(Error::new)?;

        let config = ResolvedConfig {
            engine: EngineConfig {
                theme_dir: paths.theme_dir,
                conf_dir: paths.conf_dir,
                links: paths.links,
                socket,
                timeout,
            },
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
