use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use std::process;

use log::{debug, warn};
use rand::Rng;

use crate::error::StateError;

/// A replacement symlink created next to the link it will replace.
///
/// The original link is untouched until [`StagedLink::commit`] renames the
/// staged link over it. Dropping an uncommitted stage removes the temporary
/// link.
#[derive(Debug)]
pub struct StagedLink {
	staged: PathBuf,
	destination: PathBuf,
	committed: bool,
}

impl StagedLink {
	/// Create a temporary symlink pointing at `target` beside `destination`.
	pub fn create(destination: &Path, target: &Path) -> Result<Self, StateError> {
		let staged = staging_path(destination);
		debug!(
			"staging {} -> {} for {}",
			staged.display(),
			target.display(),
			destination.display()
		);
		symlink(target, &staged).map_err(|err| StateError::io(&staged, err))?;
		Ok(Self {
			staged,
			destination: destination.to_path_buf(),
			committed: false,
		})
	}

	pub fn staged_path(&self) -> &Path {
		&self.staged
	}

	/// Atomically move the staged link into place.
	pub fn commit(mut self) -> Result<(), StateError> {
		fs::rename(&self.staged, &self.destination)
			.map_err(|err| StateError::io(&self.destination, err))?;
		self.committed = true;
		Ok(())
	}
}

impl Drop for StagedLink {
	fn drop(&mut self) {
		if self.committed {
			return;
		}
		if let Err(err) = fs::remove_file(&self.staged)
			&& err.kind() != io::ErrorKind::NotFound
		{
			warn!(
				"failed to remove staged link {}: {err}",
				self.staged.display()
			);
		}
	}
}

/// Repoint `destination` at `target` with create-then-rename.
pub fn repoint(destination: &Path, target: &Path) -> Result<(), StateError> {
	StagedLink::create(destination, target)?.commit()
}

fn staging_path(destination: &Path) -> PathBuf {
	let name = destination
		.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_else(|| "link".to_string());
	let nonce: u32 = rand::thread_rng().r#gen();
	let staged = format!(".{name}.{}.{nonce:08x}.tmp", process::id());
	destination.with_file_name(staged)
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn repoint_replaces_existing_link() {
		let dir = tempdir().unwrap();
		let (a, b) = (dir.path().join("a.conf"), dir.path().join("b.conf"));
		fs::write(&a, "a").unwrap();
		fs::write(&b, "b").unwrap();
		let link = dir.path().join("theme.conf");

		repoint(&link, &a).unwrap();
		repoint(&link, &b).unwrap();

		assert_eq!(fs::read_link(&link).unwrap(), b);
		assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
	}

	#[test]
	fn uncommitted_stage_leaves_original_link_resolvable() {
		let dir = tempdir().unwrap();
		let (a, b) = (dir.path().join("a.conf"), dir.path().join("b.conf"));
		fs::write(&a, "a").unwrap();
		fs::write(&b, "b").unwrap();
		let link = dir.path().join("theme.conf");
		repoint(&link, &a).unwrap();

		let staged = StagedLink::create(&link, &b).unwrap();
		let staged_path = staged.staged_path().to_path_buf();
		// Simulated crash between create and rename.
		assert_eq!(fs::read_link(&link).unwrap(), a);
		assert_eq!(fs::read_to_string(&link).unwrap(), "a");
		assert_eq!(fs::read_link(&staged_path).unwrap(), b);

		drop(staged);
		assert!(fs::symlink_metadata(&staged_path).is_err());
		assert_eq!(fs::read_to_string(&link).unwrap(), "a");
	}
}
