use std::path::PathBuf;
use std::time::Duration;

use crate::links::LinkPaths;
use crate::remote::SocketAddress;

/// Default time to wait for a terminal to answer a single command.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1500);

/// Everything the engine needs to know about the user's setup.
///
/// Built once per invocation and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
	pub theme_dir: PathBuf,
	pub conf_dir: PathBuf,
	pub links: LinkPaths,
	pub socket: SocketAddress,
	pub timeout: Duration,
}

impl EngineConfig {
	/// Configuration using kitty's conventional link names inside `conf_dir`.
	pub fn with_default_links(theme_dir: PathBuf, conf_dir: PathBuf, socket: SocketAddress) -> Self {
		let links = LinkPaths {
			theme_link: conf_dir.join("theme.conf"),
			light_theme_link: conf_dir.join("light-theme.conf"),
			dark_theme_link: conf_dir.join("dark-theme.conf"),
		};
		Self {
			theme_dir,
			conf_dir,
			links,
			socket,
			timeout: DEFAULT_TIMEOUT,
		}
	}
}
