use std::path::{Path, PathBuf};

/// A theme file discovered in the theme directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeFile {
	path: PathBuf,
	name: String,
}

impl ThemeFile {
	/// Build a theme from its path. The display name is the file stem.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let name = path
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.unwrap_or_default();
		Self { path, name }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Display name of the theme (`Solarized Dark` for `Solarized Dark.conf`).
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn file_name(&self) -> String {
		self.path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn name_is_the_file_stem() {
		let theme = ThemeFile::new("/themes/Gruvbox Dark.conf");
		assert_eq!(theme.name(), "Gruvbox Dark");
		assert_eq!(theme.file_name(), "Gruvbox Dark.conf");
	}
}
