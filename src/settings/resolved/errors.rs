use thiserror::Error;

use super::SettingSource;

/// A setting that survived deserialization but cannot drive the engine.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_names_key_origin_and_value() {
		let err = ConfigError::invalid(
			"remote.socket",
			"pipe:x",
			SettingSource::ConfigKey("remote.socket"),
			"unsupported scheme",
		);
		assert_eq!(
			err.to_string(),
			"invalid value for remote.socket from configuration key `remote.socket`: \
			unsupported scheme (value: pipe:x)"
		);
	}
}
