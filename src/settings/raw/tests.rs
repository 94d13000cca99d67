use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use kitty_theme::remote::SocketAddress;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
    let cli = CliArgs::parse_from([
        "kitty-theme",
        "--theme-dir",
        "/themes",
        "--conf-dir",
        "/conf",
        "--socket",
        "tcp:localhost:4711",
        "--timeout-ms",
        "250",
    ]);

    let mut config = RawConfig::default();
    config.remote.socket = Some("unix:/tmp/other".into());
    config.apply_cli_overrides(&cli);

    assert_eq!(config.paths.theme_dir, Some(PathBuf::from("/themes")));
    assert_eq!(config.paths.conf_dir, Some(PathBuf::from("/conf")));
    assert_eq!(config.remote.socket.as_deref(), Some("tcp:localhost:4711"));
    assert_eq!(config.remote.timeout_ms, Some(250));
}

#[test]
fn defaults_are_relative_to_conf_dir() {
    let cli = CliArgs::parse_from(["kitty-theme", "--conf-dir", "/conf"]);
    let mut config = RawConfig::default();
    config.apply_cli_overrides(&cli);

    let resolved = config.resolve(&cli).expect("resolves");
    let engine = resolved.engine;

    assert_eq!(engine.theme_dir, PathBuf::from("/conf/themes"));
    assert_eq!(engine.links.theme_link, PathBuf::from("/conf/theme.conf"));
    assert_eq!(engine.links.light_theme_link, PathBuf::from("/conf/light-theme.conf"));
    assert_eq!(engine.links.dark_theme_link, PathBuf::from("/conf/dark-theme.conf"));
    assert_eq!(engine.socket, SocketAddress::Unix(PathBuf::from("/tmp/kittysocket")));
    assert_eq!(engine.timeout, Duration::from_millis(1500));
}

#[test]
fn custom_link_names_are_anchored() {
    let cli = CliArgs::parse_from(["kitty-theme", "--conf-dir", "/conf"]);
    let mut config = RawConfig::default();
    config.paths.dark_theme_link = Some(PathBuf::from("colors/night.conf"));
    config.paths.light_theme_link = Some(PathBuf::from("/elsewhere/day.conf"));
    config.apply_cli_overrides(&cli);

    let engine = config.resolve(&cli).expect("resolves").engine;

    assert_eq!(engine.links.dark_theme_link, PathBuf::from("/conf/colors/night.conf"));
    assert_eq!(engine.links.light_theme_link, PathBuf::from("/elsewhere/day.conf"));
}

#[test]
fn bad_socket_names_its_source() {
    let cli = CliArgs::parse_from(["kitty-theme", "--conf-dir", "/conf", "--socket", "pipe:x"]);
    let mut config = RawConfig::default();
    config.apply_cli_overrides(&cli);

    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("remote.socket"));
    assert!(message.contains("CLI flag `--socket`"));
}

#[test]
fn zero_timeout_is_rejected() {
    let cli = CliArgs::parse_from(["kitty-theme", "--conf-dir", "/conf", "--timeout-ms", "0"]);
    let mut config = RawConfig::default();
    config.apply_cli_overrides(&cli);

    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("remote.timeout_ms"));
    assert!(message.contains("value: 0"));
}
