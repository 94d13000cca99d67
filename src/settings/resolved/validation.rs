use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let engine = &config.engine;

	if engine.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"remote.timeout_ms",
			engine.timeout.as_millis().to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	let links = &engine.links;
	let distinct = links.theme_link != links.light_theme_link
		&& links.theme_link != links.dark_theme_link
		&& links.light_theme_link != links.dark_theme_link;
	if !distinct {
		return Err(ConfigError::invalid(
			"paths",
			links.theme_link.display().to_string(),
			SettingSource::ConfigKey("paths.theme_link"),
			"theme_link, light_theme_link and dark_theme_link must be different files",
		));
	}

	Ok(())
}
