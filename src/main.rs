mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{Action, OutputFormat, config_help, parse_cli, print_json, print_plain};
use kitty_theme::logging;
use settings::ResolvedConfig;
use workflow::{Outcome, ThemeWorkflow};

/// Exit status when the links were updated but a live update did not reach
/// every window.
const PARTIAL_FAILURE: u8 = 2;

fn main() -> Result<ExitCode> {
	let cli = parse_cli();
	let action = cli.action().unwrap_or_else(|err| err.exit());

	logging::initialize(logging::level_for(cli.verbose, cli.debug));

	// Setup guidance must work before any configuration exists.
	if action == Action::HelpConfig {
		print_outcome(cli.output, &Outcome::Help(config_help()))?;
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_action(cli.output, action, resolved)
}

/// Execute the workflow and print output in the chosen format.
fn run_action(format: OutputFormat, action: Action, settings: ResolvedConfig) -> Result<ExitCode> {
	let workflow = ThemeWorkflow::from_config(settings);
	let outcome = workflow.run(action)?;

	print_outcome(format, &outcome)?;

	if outcome.is_clean() {
		Ok(ExitCode::SUCCESS)
	} else {
		Ok(ExitCode::from(PARTIAL_FAILURE))
	}
}

fn print_outcome(format: OutputFormat, outcome: &Outcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}
	Ok(())
}
