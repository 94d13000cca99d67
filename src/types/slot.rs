use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The two roles a theme can occupy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ThemeSlot {
	Light,
	Dark,
}

impl ThemeSlot {
	pub const ALL: [ThemeSlot; 2] = [ThemeSlot::Light, ThemeSlot::Dark];

	/// Return the slot a toggle switches to.
	#[must_use]
	pub fn opposite(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

impl fmt::Display for ThemeSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme slot '{0}' (expected 'light' or 'dark')")]
pub struct ParseSlotError(String);

impl FromStr for ThemeSlot {
	type Err = ParseSlotError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			_ => Err(ParseSlotError(value.to_string())),
		}
	}
}
