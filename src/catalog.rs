//! Enumerate the theme files available in the configured theme directory.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::CatalogError;
use crate::types::ThemeFile;

const THEME_EXTENSION: &str = "conf";

/// List every theme in `theme_dir`, ordered by file name.
///
/// Entries that are not `.conf` files (or symlinks to one) are skipped. An
/// empty directory yields an empty list.
pub fn list_themes(theme_dir: &Path) -> Result<Vec<ThemeFile>, CatalogError> {
	debug!("looking for themes in {}", theme_dir.display());
	let not_found = || CatalogError::NotFound {
		path: theme_dir.to_path_buf(),
	};

	let entries = fs::read_dir(theme_dir).map_err(|_| not_found())?;
	let mut themes = Vec::new();
	for entry in entries {
		let entry = entry.map_err(|_| not_found())?;
		let path = entry.path();
		if path.extension().is_none_or(|ext| ext != THEME_EXTENSION) {
			continue;
		}
		// `metadata` follows symlinks so linked themes are listed too.
		match fs::metadata(&path) {
			Ok(meta) if meta.is_file() => themes.push(ThemeFile::new(path)),
			_ => debug!("skipping non-file entry {}", path.display()),
		}
	}

	themes.sort_by_key(ThemeFile::file_name);
	Ok(themes)
}

/// Look a theme up by display name.
pub fn find_theme(theme_dir: &Path, name: &str) -> Result<ThemeFile, CatalogError> {
	let name = name.strip_suffix(".conf").unwrap_or(name);
	list_themes(theme_dir)?
		.into_iter()
		.find(|theme| theme.name() == name)
		.ok_or_else(|| CatalogError::UnknownTheme {
			name: name.to_string(),
		})
}

#[cfg(test)]
mod tests {
	use std::os::unix::fs::symlink;

	use tempfile::tempdir;

	use super::*;

	#[test]
	fn themes_are_sorted_by_file_name() {
		let dir = tempdir().unwrap();
		for name in ["b.conf", "a.conf", "C.conf", "notes.txt"] {
			fs::write(dir.path().join(name), "").unwrap();
		}
		fs::create_dir(dir.path().join("nested.conf")).unwrap();

		let names: Vec<_> = list_themes(dir.path())
			.unwrap()
			.iter()
			.map(|theme| theme.name().to_string())
			.collect();
		assert_eq!(names, vec!["C", "a", "b"]);
	}

	#[test]
	fn empty_directory_is_not_an_error() {
		let dir = tempdir().unwrap();
		assert!(list_themes(dir.path()).unwrap().is_empty());
	}

	#[test]
	fn missing_directory_is_not_found() {
		let dir = tempdir().unwrap();
		let err = list_themes(&dir.path().join("missing")).unwrap_err();
		assert!(matches!(err, CatalogError::NotFound { .. }));
	}

	#[test]
	fn symlinked_themes_are_listed_but_dangling_ones_are_not() {
		let dir = tempdir().unwrap();
		let real = dir.path().join("real.conf");
		fs::write(&real, "").unwrap();
		symlink(&real, dir.path().join("alias.conf")).unwrap();
		symlink(dir.path().join("gone"), dir.path().join("dangling.conf")).unwrap();

		let names: Vec<_> = list_themes(dir.path())
			.unwrap()
			.iter()
			.map(|theme| theme.name().to_string())
			.collect();
		assert_eq!(names, vec!["alias", "real"]);
	}

	#[test]
	fn find_accepts_names_with_or_without_extension() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("Nord.conf"), "").unwrap();

		assert_eq!(find_theme(dir.path(), "Nord").unwrap().name(), "Nord");
		assert_eq!(find_theme(dir.path(), "Nord.conf").unwrap().name(), "Nord");
		assert!(matches!(
			find_theme(dir.path(), "Dracula"),
			Err(CatalogError::UnknownTheme { .. })
		));
	}
}
