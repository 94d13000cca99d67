use std::io::{self, BufRead, Write};

use anyhow::Result;
use kitty_theme::{
	Confirm, CycleStep, EngineError, StateError, SwitchResult, ThemeEngine, ThemeFile, ThemeSlot,
};
use log::{debug, info, warn};

use crate::cli::{Action, config_help};
use crate::settings::ResolvedConfig;

/// What a run produced, ready to be printed.
#[derive(Debug)]
pub(crate) enum Outcome {
	Help(String),
	Themes(Vec<ThemeFile>),
	Status(Status),
	Switch {
		action: &'static str,
		result: SwitchResult,
	},
}

impl Outcome {
	/// False when a live update failed for at least one target.
	pub(crate) fn is_clean(&self) -> bool {
		match self {
			Outcome::Switch { result, .. } => result.is_clean(),
			Outcome::Help(_) | Outcome::Themes(_) | Outcome::Status(_) => true,
		}
	}
}

/// Snapshot printed by `--show`.
#[derive(Debug)]
pub(crate) struct Status {
	/// `None` until the link chain has been created.
	pub(crate) active: Option<(ThemeSlot, ThemeFile)>,
	pub(crate) slots: Vec<(ThemeSlot, Option<ThemeFile>)>,
	pub(crate) reachable: bool,
}

/// Runs one [`Action`] against a [`ThemeEngine`].
pub(crate) struct ThemeWorkflow {
	engine: ThemeEngine,
}

impl ThemeWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self {
			engine: ThemeEngine::new(config.engine),
		}
	}

	#[cfg(test)]
	fn with_engine(engine: ThemeEngine) -> Self {
		Self { engine }
	}

	pub(crate) fn run(mut self, action: Action) -> Result<Outcome> {
		let name = action.name();
		info!("running {name}");
		let result = match action {
			Action::HelpConfig => return Ok(Outcome::Help(config_help())),
			Action::List => return Ok(Outcome::Themes(self.engine.list()?)),
			Action::Show => return Ok(Outcome::Status(self.status()?)),
			Action::Preview(theme) => self.engine.preview(&theme)?,
			Action::Cycle => self.engine.test_cycle(&mut StdinPrompt::default())?,
			Action::Toggle { live } => self.engine.toggle(live)?,
			Action::Set {
				slot,
				theme,
				activate,
				live,
			} => {
				let mut result = self.engine.set(slot, &theme, activate)?;
				if live {
					if result.active {
						self.engine.propagate(&mut result)?;
					} else {
						warn!("{slot} theme is not active; skipping live update");
					}
				}
				result
			}
			Action::Live => self.engine.live()?,
		};
		Ok(Outcome::Switch {
			action: name,
			result,
		})
	}

	fn status(&self) -> Result<Status> {
		let active = match self.engine.show() {
			Ok(result) => result.slot.zip(result.theme),
			Err(EngineError::State(StateError::Unconfigured { reason })) => {
				info!("no active theme: {reason}");
				None
			}
			Err(err) => return Err(err.into()),
		};
		let slots = self
			.engine
			.slots()
			.into_iter()
			.map(|(slot, target)| match target {
				Ok(theme) => (slot, Some(theme)),
				Err(err) => {
					if self.engine.config().links.slot_link(slot).symlink_metadata().is_ok() {
						warn!("{slot} slot: {err}");
					}
					(slot, None)
				}
			})
			.collect();

		Ok(Status {
			active,
			slots,
			reachable: self.engine.terminal_reachable(),
		})
	}
}

/// Asks on stderr and reads the answer from stdin: Enter continues, `q`
/// stops. End of input stops as well.
#[derive(Default)]
struct StdinPrompt;

impl Confirm for StdinPrompt {
	fn confirm(&mut self, theme: &ThemeFile, position: usize, total: usize) -> CycleStep {
		eprint!(
			"[{position}/{total}] {} - Enter for next, q to quit: ",
			theme.name()
		);
		if let Err(err) = io::stderr().flush() {
			debug!("failed to flush the prompt: {err}");
		}

		let mut answer = String::new();
		match io::stdin().lock().read_line(&mut answer) {
			Ok(0) | Err(_) => CycleStep::Cancel,
			Ok(_) => parse_answer(&answer),
		}
	}
}

fn parse_answer(answer: &str) -> CycleStep {
	match answer.trim() {
		"q" | "Q" | "quit" => CycleStep::Cancel,
		_ => CycleStep::Next,
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::os::unix::fs::symlink;

	use kitty_theme::EngineConfig;
	use kitty_theme::remote::SocketAddress;
	use tempfile::{TempDir, tempdir};

	use super::*;

	fn engine_in(dir: &TempDir) -> ThemeEngine {
		let themes = dir.path().join("themes");
		fs::create_dir(&themes).unwrap();
		for name in ["Dawn", "Dusk"] {
			fs::write(themes.join(format!("{name}.conf")), "background #101010\n").unwrap();
		}
		engine_in_existing(dir)
	}

	fn engine_in_existing(dir: &TempDir) -> ThemeEngine {
		let config = EngineConfig::with_default_links(
			dir.path().join("themes"),
			dir.path().to_path_buf(),
			SocketAddress::Unix(dir.path().join("no-kitty.sock")),
		);
		ThemeEngine::new(config)
	}

	#[test]
	fn answers_map_to_steps() {
		assert_eq!(parse_answer("\n"), CycleStep::Next);
		assert_eq!(parse_answer("q\n"), CycleStep::Cancel);
		assert_eq!(parse_answer(" quit "), CycleStep::Cancel);
	}

	#[test]
	fn help_config_needs_no_links() {
		let dir = tempdir().unwrap();
		let workflow = ThemeWorkflow::with_engine(engine_in(&dir));

		let outcome = workflow.run(Action::HelpConfig).unwrap();

		assert!(matches!(&outcome, Outcome::Help(text) if text.contains("[remote]")));
		assert!(fs::symlink_metadata(dir.path().join("theme.conf")).is_err());
	}

	#[test]
	fn show_before_setup_reports_nothing_active() {
		let dir = tempdir().unwrap();
		let workflow = ThemeWorkflow::with_engine(engine_in(&dir));

		let Outcome::Status(status) = workflow.run(Action::Show).unwrap() else {
			panic!("expected a status");
		};
		assert!(status.active.is_none());
		assert!(status.slots.iter().all(|(_, theme)| theme.is_none()));
		assert!(!status.reachable);
	}

	#[test]
	fn set_and_show_agree() {
		let dir = tempdir().unwrap();
		let workflow = ThemeWorkflow::with_engine(engine_in(&dir));
		let outcome = workflow
			.run(Action::Set {
				slot: ThemeSlot::Dark,
				theme: "Dusk".into(),
				activate: true,
				live: false,
			})
			.unwrap();
		assert!(outcome.is_clean());

		let workflow = ThemeWorkflow::with_engine(engine_in_existing(&dir));
		let Outcome::Status(status) = workflow.run(Action::Show).unwrap() else {
			panic!("expected a status");
		};
		let (slot, theme) = status.active.expect("active theme");
		assert_eq!(slot, ThemeSlot::Dark);
		assert_eq!(theme.name(), "Dusk");
	}

	#[test]
	fn live_toggle_without_terminal_is_not_clean() {
		let dir = tempdir().unwrap();
		let workflow = ThemeWorkflow::with_engine(engine_in(&dir));

		let outcome = workflow.run(Action::Toggle { live: true }).unwrap();

		assert!(!outcome.is_clean());
		assert!(fs::symlink_metadata(dir.path().join("theme.conf")).is_ok());
	}

	#[test]
	fn show_tolerates_a_dangling_slot() {
		let dir = tempdir().unwrap();
		let engine = engine_in(&dir);
		symlink(dir.path().join("gone.conf"), dir.path().join("light-theme.conf")).unwrap();

		let Outcome::Status(status) = ThemeWorkflow::with_engine(engine).run(Action::Show).unwrap()
		else {
			panic!("expected a status");
		};
		assert!(status.active.is_none());
		assert_eq!(status.slots[0], (ThemeSlot::Light, None));
	}
}
