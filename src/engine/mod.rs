//! Theme switching engine.
//!
//! Composes the catalog, the link manager and the remote control client into
//! the user facing operations. The link chain on disk is authoritative: live
//! propagation happens after a link change and its failures never undo it.

mod config;
mod cycle;
mod result;
mod select;

use log::{info, warn};

pub use config::{DEFAULT_TIMEOUT, EngineConfig};
pub use cycle::{Confirm, CycleStep};
pub use result::SwitchResult;
pub use select::{RandomSelector, ThemeSelector};

use crate::catalog;
use crate::error::{EngineError, StateError};
use crate::links::SymlinkStateManager;
use crate::remote::{Channel, RemoteControlClient, SocketChannel};
use crate::types::{ThemeFile, ThemeSlot};

/// Outcome of making sure the link chain exists.
#[derive(Debug, Default)]
struct ChainStatus {
	seeded: Vec<(ThemeSlot, ThemeFile)>,
	/// `theme_link` was missing and has just been pointed at the light slot.
	fresh: bool,
}

pub struct ThemeEngine {
	config: EngineConfig,
	links: SymlinkStateManager,
	remote: RemoteControlClient,
	selector: Box<dyn ThemeSelector>,
}

impl ThemeEngine {
	/// Engine talking to kitty over the configured socket, seeding randomly.
	pub fn new(config: EngineConfig) -> Self {
		let channel = SocketChannel::kitty(config.socket.clone(), config.timeout);
		Self::with_parts(config, Box::new(channel), Box::new(RandomSelector::new()))
	}

	pub fn with_parts(
		config: EngineConfig,
		channel: Box<dyn Channel>,
		selector: Box<dyn ThemeSelector>,
	) -> Self {
		Self {
			links: SymlinkStateManager::new(config.links.clone()),
			remote: RemoteControlClient::new(channel),
			config,
			selector,
		}
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	/// Available themes in file name order.
	pub fn list(&self) -> Result<Vec<ThemeFile>, EngineError> {
		Ok(catalog::list_themes(&self.config.theme_dir)?)
	}

	/// The active slot and the theme it resolves to.
	pub fn show(&self) -> Result<SwitchResult, EngineError> {
		let (slot, theme) = self.links.active_theme()?;
		Ok(SwitchResult::for_slot(slot, theme, true))
	}

	/// Theme each slot currently points at, if the slot link exists.
	pub fn slots(&self) -> Vec<(ThemeSlot, Result<ThemeFile, StateError>)> {
		ThemeSlot::ALL
			.into_iter()
			.map(|slot| (slot, self.links.slot_target(slot)))
			.collect()
	}

	/// Whether a terminal answers on the control channel.
	pub fn terminal_reachable(&self) -> bool {
		self.remote.ping()
	}

	/// Point `slot` at the named theme.
	///
	/// `theme_link` is repointed when `slot` is already active or when
	/// `activate` is requested.
	pub fn set(
		&mut self,
		slot: ThemeSlot,
		theme_name: &str,
		activate: bool,
	) -> Result<SwitchResult, EngineError> {
		let theme = catalog::find_theme(&self.config.theme_dir, theme_name)?;
		// A broken theme_link is reported before any link is touched.
		if self.links.active_link_exists() {
			self.links.resolve_current()?;
		}
		self.links.set_slot(slot, &theme)?;
		let status = self.ensure_chain()?;

		let current = self.links.resolve_current()?;
		let active = activate || current == slot;
		if active {
			self.links.activate(slot)?;
		}

		let mut result = SwitchResult::for_slot(slot, theme, active);
		result.seeded = status.seeded;
		Ok(result)
	}

	/// Switch to the other slot, optionally pushing its theme live.
	///
	/// On first run the chain is seeded and the light slot becomes active
	/// instead of flipping.
	pub fn toggle(&mut self, live: bool) -> Result<SwitchResult, EngineError> {
		let status = self.ensure_chain()?;
		let slot = if status.fresh {
			ThemeSlot::Light
		} else {
			self.links.toggle()?
		};
		let theme = self.links.slot_target(slot)?;
		info!("{slot} theme active: {}", theme.name());

		let mut result = SwitchResult::for_slot(slot, theme, true);
		result.seeded = status.seeded;
		if live {
			self.propagate(&mut result)?;
		}
		Ok(result)
	}

	/// Push the theme recorded in `result` to running terminals.
	///
	/// A closed channel is recorded on the result rather than returned.
	pub fn propagate(&self, result: &mut SwitchResult) -> Result<(), EngineError> {
		let Some(theme) = result.theme.as_ref() else {
			return Ok(());
		};
		match self.remote.apply_live(theme) {
			Ok(report) => result.live.push(report),
			Err(EngineError::Channel(err)) => {
				warn!("live update skipped: {err}");
				result.live_error = Some(err);
			}
			Err(err) => return Err(err),
		}
		Ok(())
	}

	/// Push the named theme to every running window without touching links.
	pub fn apply_live(&self, theme_name: &str) -> Result<SwitchResult, EngineError> {
		let theme = catalog::find_theme(&self.config.theme_dir, theme_name)?;
		let report = self.remote.apply_live(&theme)?;
		Ok(SwitchResult {
			theme: Some(theme),
			live: vec![report],
			..SwitchResult::default()
		})
	}

	/// Push the active theme to every running window.
	pub fn live(&self) -> Result<SwitchResult, EngineError> {
		let (slot, theme) = self.links.active_theme()?;
		let report = self.remote.apply_live(&theme)?;
		let mut result = SwitchResult::for_slot(slot, theme, true);
		result.live.push(report);
		Ok(result)
	}

	/// Try the named theme in the active window only.
	pub fn preview(&self, theme_name: &str) -> Result<SwitchResult, EngineError> {
		let theme = catalog::find_theme(&self.config.theme_dir, theme_name)?;
		let report = self.remote.preview(&theme)?;
		Ok(SwitchResult {
			theme: Some(theme),
			live: vec![report],
			..SwitchResult::default()
		})
	}

	/// Push every theme in turn, waiting for `confirm` between themes.
	///
	/// Never changes the link chain.
	pub fn test_cycle(&self, confirm: &mut dyn Confirm) -> Result<SwitchResult, EngineError> {
		let themes = self.list()?;
		let total = themes.len();
		let mut result = SwitchResult::default();

		for (index, theme) in themes.iter().enumerate() {
			result.live.push(self.remote.apply_live(theme)?);
			result.theme = Some(theme.clone());
			if confirm.confirm(theme, index + 1, total) == CycleStep::Cancel {
				info!("test cycle cancelled at {}", theme.name());
				result.cancelled = index + 1 < total;
				break;
			}
		}
		Ok(result)
	}

	/// Seed missing slot links and create `theme_link` if needed.
	///
	/// Existing slot links are never replaced.
	fn ensure_chain(&mut self) -> Result<ChainStatus, EngineError> {
		let missing: Vec<ThemeSlot> = ThemeSlot::ALL
			.into_iter()
			.filter(|slot| !self.links.slot_exists(*slot))
			.collect();

		let mut status = ChainStatus::default();
		if !missing.is_empty() {
			let themes = catalog::list_themes(&self.config.theme_dir)?;
			let mut picks = Vec::with_capacity(missing.len());
			for slot in missing {
				let theme = self.selector.select(slot, &themes).cloned().ok_or_else(|| {
					StateError::unconfigured(format!(
						"no themes in {} to seed the {slot} slot with",
						self.config.theme_dir.display()
					))
				})?;
				picks.push((slot, theme));
			}
			for (slot, theme) in picks {
				info!("seeding {slot} theme with {}", theme.name());
				self.links.set_slot(slot, &theme)?;
				status.seeded.push((slot, theme));
			}
		}

		if !self.links.active_link_exists() {
			self.links.activate(ThemeSlot::Light)?;
			status.fresh = true;
		}
		Ok(status)
	}
}
