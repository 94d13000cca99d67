use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	let engine = &config.engine;
	println!("Effective configuration:");
	println!("  Theme directory: {}", engine.theme_dir.display());
	println!("  kitty config directory: {}", engine.conf_dir.display());
	println!("  Active link: {}", engine.links.theme_link.display());
	println!("  Light link: {}", engine.links.light_theme_link.display());
	println!("  Dark link: {}", engine.links.dark_theme_link.display());
	println!("  Socket: {}", engine.socket);
	println!("  Timeout: {} ms", engine.timeout.as_millis());
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use kitty_theme::EngineConfig;
	use kitty_theme::remote::SocketAddress;

	use super::*;

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			engine: EngineConfig::with_default_links(
				PathBuf::from("/conf/themes"),
				PathBuf::from("/conf"),
				SocketAddress::Tcp("localhost:4711".into()),
			),
		};

		print_summary(&config);
	}
}
