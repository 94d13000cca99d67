use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) remote_socket: Option<SettingSource>,
	pub(crate) remote_timeout: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_socket(&self) -> SettingSource {
		self.remote_socket
			.clone()
			.unwrap_or(SettingSource::ConfigKey("remote.socket"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.remote_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("remote.timeout_ms"))
	}
}
