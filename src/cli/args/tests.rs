use clap::{CommandFactory, FromArgMatches, Parser};
use kitty_theme::ThemeSlot;

use super::{Action, CliArgs, OutputFormat};

fn action_for(args: &[&str]) -> Action {
	CliArgs::try_parse_from(args)
		.expect("parses")
		.action()
		.expect("valid action")
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["kitty-theme"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert_eq!(parsed.action().expect("action"), Action::Show);
}

#[test]
fn set_flags_take_the_positional_theme() {
	assert_eq!(
		action_for(&["kitty-theme", "--setd", "Nord", "--activate", "--live"]),
		Action::Set {
			slot: ThemeSlot::Dark,
			theme: "Nord".into(),
			activate: true,
			live: true,
		}
	);
	assert_eq!(action_for(&["kitty-theme", "--setl", "Solarized Light"]).name(), "setl");
}

#[test]
fn live_modifies_toggle_and_stands_alone() {
	assert_eq!(
		action_for(&["kitty-theme", "-t", "-L"]),
		Action::Toggle { live: true }
	);
	assert_eq!(action_for(&["kitty-theme", "-L"]), Action::Live);
	assert_eq!(action_for(&["kitty-theme", "--test", "Nord"]), Action::Preview("Nord".into()));
	assert_eq!(action_for(&["kitty-theme", "--cycle"]), Action::Cycle);
	assert_eq!(action_for(&["kitty-theme", "-l"]), Action::List);
}

#[test]
fn theme_actions_require_a_name() {
	let args = CliArgs::try_parse_from(["kitty-theme", "--setl"]).expect("parses");
	assert!(args.action().is_err());
	let args = CliArgs::try_parse_from(["kitty-theme", "--test", "  "]).expect("parses");
	assert!(args.action().is_err());
}

#[test]
fn actions_are_mutually_exclusive() {
	assert!(CliArgs::try_parse_from(["kitty-theme", "--toggle", "--list"]).is_err());
	assert!(CliArgs::try_parse_from(["kitty-theme", "--setl", "--setd", "Nord"]).is_err());
}

#[test]
fn verbosity_counts_repeats() {
	let args = CliArgs::try_parse_from(["kitty-theme", "-vv"]).expect("parses");
	assert_eq!(args.verbose, 2);
}

#[test]
fn help_config_is_its_own_action() {
	assert_eq!(action_for(&["kitty-theme", "--help-config"]), Action::HelpConfig);
	assert_eq!(Action::HelpConfig.name(), "help-config");
	assert!(CliArgs::try_parse_from(["kitty-theme", "--help-config", "--toggle"]).is_err());
}
