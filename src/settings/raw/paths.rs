use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use kitty_theme::app_dirs;
use kitty_theme::links::LinkPaths;

use crate::cli::CliArgs;

use super::super::util::{anchor, expand_tilde};

const THEME_LINK: &str = "theme.conf";
const LIGHT_THEME_LINK: &str = "light-theme.conf";
const DARK_THEME_LINK: &str = "dark-theme.conf";

/// Locations of the theme directory and the three links, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PathsSection {
    pub(super) theme_dir: Option<PathBuf>,
    pub(super) conf_dir: Option<PathBuf>,
    pub(super) theme_link: Option<PathBuf>,
    pub(super) light_theme_link: Option<PathBuf>,
    pub(super) dark_theme_link: Option<PathBuf>,
}

/// Absolute paths derived from a [`PathsSection`].
#[derive(Debug)]
pub(super) struct ResolvedPaths {
    pub(super) theme_dir: PathBuf,
    pub(super) conf_dir: PathBuf,
    pub(super) links: LinkPaths,
}

impl PathsSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(dir) = cli.theme_dir.clone() {
            self.theme_dir = Some(dir);
        }
        if let Some(dir) = cli.conf_dir.clone() {
            self.conf_dir = Some(dir);
        }
    }

    /// Fill in kitty's defaults. `conf_dir` falls back to kitty's config
    /// directory, everything else is relative to it.
    pub(super) fn resolve(self) -> Result<ResolvedPaths> {
        let conf_dir = match self.conf_dir {
            Some(dir) => expand_tilde(dir),
            None => app_dirs::get_kitty_config_dir()?,
        };

        let theme_dir = anchor(
            self.theme_dir.unwrap_or_else(|| PathBuf::from("themes")),
            &conf_dir,
        );
        let link = |value: Option<PathBuf>, default: &str| {
            anchor(value.unwrap_or_else(|| PathBuf::from(default)), &conf_dir)
        };
        let links = LinkPaths {
            theme_link: link(self.theme_link, THEME_LINK),
            light_theme_link: link(self.light_theme_link, LIGHT_THEME_LINK),
            dark_theme_link: link(self.dark_theme_link, DARK_THEME_LINK),
        };

        Ok(ResolvedPaths {
            theme_dir,
            conf_dir,
            links,
        })
    }
}
