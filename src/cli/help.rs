use std::fmt::Write;

use kitty_theme::app_dirs;

/// Setup guidance printed by `--help-config`.
pub(crate) fn config_help() -> String {
	let config_file = app_dirs::get_config_dir()
		.map(|dir| dir.join("config.toml").display().to_string())
		.unwrap_or_else(|_| "<config dir>/config.toml".to_string());

	let mut text = String::from("Setting up kitty-theme\n\n");
	let _ = writeln!(
		text,
		"1. Collect kitty theme files (*.conf) in one directory, for example\n   \
		 ~/.config/kitty/themes (https://github.com/dexpota/kitty-themes).\n"
	);
	let _ = writeln!(
		text,
		"2. Make kitty load the active theme by adding this line to kitty.conf:\n       \
		 include ./theme.conf\n"
	);
	let _ = writeln!(
		text,
		"3. For live updates, let kitty accept remote control on a socket:\n       \
		 allow_remote_control socket-only\n       \
		 listen_on unix:/tmp/kittysocket\n"
	);
	let _ = writeln!(
		text,
		"4. Inside kitty's config directory the theme links are:\n       \
		 light-theme.conf -> a light theme file\n       \
		 dark-theme.conf  -> a dark theme file\n       \
		 theme.conf       -> light-theme.conf or dark-theme.conf\n   \
		 They are created on the first --toggle, --setl or --setd if missing.\n"
	);
	let _ = writeln!(
		text,
		"5. Optionally write {config_file}\n   \
		 (or ./kitty-theme.toml, or pass --config FILE). Every key is optional:\n"
	);
	text.push_str(EXAMPLE_CONFIG);
	let _ = writeln!(
		text,
		"\nEnvironment variables override the file, for example\n   \
		 KITTY_THEME__REMOTE__SOCKET=unix:@kitty"
	);
	text
}

const EXAMPLE_CONFIG: &str = r#"    [paths]
    conf_dir = "~/.config/kitty"
    theme_dir = "themes"                # relative to conf_dir
    theme_link = "theme.conf"
    light_theme_link = "light-theme.conf"
    dark_theme_link = "dark-theme.conf"

    [remote]
    socket = "unix:/tmp/kittysocket"    # same value as kitty's listen_on
    timeout_ms = 1500
"#;
