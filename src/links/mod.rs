//! Ownership of the `theme_link -> slot link -> theme file` chain.
//!
//! kitty includes a fixed path (`theme_link`). That link always points at one
//! of the two slot links, and each slot link points at an actual theme file.
//! Every mutation goes through [`atomic::repoint`] so a link is replaced by a
//! rename and never disappears.

mod atomic;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

pub use atomic::{StagedLink, repoint};

use crate::error::StateError;
use crate::types::{ThemeFile, ThemeSlot};

/// Absolute locations of the three links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkPaths {
	pub theme_link: PathBuf,
	pub light_theme_link: PathBuf,
	pub dark_theme_link: PathBuf,
}

impl LinkPaths {
	pub fn slot_link(&self, slot: ThemeSlot) -> &Path {
		match slot {
			ThemeSlot::Light => &self.light_theme_link,
			ThemeSlot::Dark => &self.dark_theme_link,
		}
	}
}

/// What currently occupies a link path.
#[derive(Debug, PartialEq, Eq)]
enum LinkState {
	Missing,
	Symlink(PathBuf),
}

/// Reads and repoints the link chain.
#[derive(Clone, Debug)]
pub struct SymlinkStateManager {
	paths: LinkPaths,
}

impl SymlinkStateManager {
	pub fn new(paths: LinkPaths) -> Self {
		Self { paths }
	}

	pub fn paths(&self) -> &LinkPaths {
		&self.paths
	}

	/// Determine which slot `theme_link` currently points at.
	pub fn resolve_current(&self) -> Result<ThemeSlot, StateError> {
		let link = &self.paths.theme_link;
		let target = match inspect(link)? {
			LinkState::Missing => {
				return Err(StateError::unconfigured(format!(
					"{} does not exist",
					link.display()
				)));
			}
			LinkState::Symlink(target) => target,
		};

		ThemeSlot::ALL
			.into_iter()
			.find(|slot| same_location(&target, self.paths.slot_link(*slot)))
			.ok_or_else(|| {
				StateError::unconfigured(format!(
					"{} points at {} rather than a light or dark theme link",
					link.display(),
					target.display()
				))
			})
	}

	/// Point `slot`'s link at `theme`.
	pub fn set_slot(&self, slot: ThemeSlot, theme: &ThemeFile) -> Result<(), StateError> {
		let link = self.paths.slot_link(slot);
		if !fs::metadata(theme.path()).is_ok_and(|meta| meta.is_file()) {
			return Err(StateError::LinkConflict {
				path: theme.path().to_path_buf(),
			});
		}

		if let LinkState::Symlink(current) = inspect(link)?
			&& current == theme.path()
		{
			debug!("{slot} theme already set to {}", theme.name());
			return Ok(());
		}

		info!("setting {slot} theme to {}", theme.name());
		repoint(link, theme.path())
	}

	/// Point `theme_link` at `slot`'s link.
	pub fn activate(&self, slot: ThemeSlot) -> Result<(), StateError> {
		// The slot must reach a regular file before theme_link may point at it.
		self.slot_target(slot)?;
		let slot_link = self.paths.slot_link(slot);

		let link = &self.paths.theme_link;
		if let LinkState::Symlink(current) = inspect(link)?
			&& same_location(&current, slot_link)
		{
			debug!("{slot} theme already active");
			return Ok(());
		}

		info!("activating {slot} theme");
		repoint(link, slot_link)
	}

	/// Activate the slot opposite to the current one and return it.
	pub fn toggle(&self) -> Result<ThemeSlot, StateError> {
		let next = self.resolve_current()?.opposite();
		self.activate(next)?;
		Ok(next)
	}

	pub fn slot_exists(&self, slot: ThemeSlot) -> bool {
		fs::symlink_metadata(self.paths.slot_link(slot)).is_ok()
	}

	pub fn active_link_exists(&self) -> bool {
		fs::symlink_metadata(&self.paths.theme_link).is_ok()
	}

	/// Theme file `slot` resolves to.
	///
	/// A slot link whose target vanished or is not a regular file is reported
	/// as a conflict rather than repaired.
	pub fn slot_target(&self, slot: ThemeSlot) -> Result<ThemeFile, StateError> {
		let link = self.paths.slot_link(slot);
		match inspect(link)? {
			LinkState::Missing => Err(StateError::unconfigured(format!(
				"{} does not exist",
				link.display()
			))),
			LinkState::Symlink(target) => {
				if fs::metadata(link).is_ok_and(|meta| meta.is_file()) {
					Ok(ThemeFile::new(target))
				} else {
					Err(StateError::LinkConflict {
						path: link.to_path_buf(),
					})
				}
			}
		}
	}

	/// Active slot and the theme it resolves to.
	pub fn active_theme(&self) -> Result<(ThemeSlot, ThemeFile), StateError> {
		let slot = self.resolve_current()?;
		Ok((slot, self.slot_target(slot)?))
	}
}

/// Inspect a link path without following it. Relative targets are resolved
/// against the link's directory.
fn inspect(path: &Path) -> Result<LinkState, StateError> {
	match fs::symlink_metadata(path) {
		Ok(meta) if meta.file_type().is_symlink() => {
			let target = fs::read_link(path).map_err(|err| StateError::io(path, err))?;
			let target = match path.parent() {
				Some(parent) if target.is_relative() => parent.join(target),
				_ => target,
			};
			Ok(LinkState::Symlink(target))
		}
		Ok(_) => Err(StateError::LinkConflict {
			path: path.to_path_buf(),
		}),
		Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(LinkState::Missing),
		Err(err) => Err(StateError::io(path, err)),
	}
}

/// Compare two link locations without following the links themselves.
fn same_location(a: &Path, b: &Path) -> bool {
	if a == b {
		return true;
	}
	match (a.file_name(), b.file_name(), a.parent(), b.parent()) {
		(Some(name_a), Some(name_b), Some(dir_a), Some(dir_b)) if name_a == name_b => {
			match (fs::canonicalize(dir_a), fs::canonicalize(dir_b)) {
				(Ok(dir_a), Ok(dir_b)) => dir_a == dir_b,
				_ => false,
			}
		}
		_ => false,
	}
}
