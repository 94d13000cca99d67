//! Parse the color settings out of a kitty theme file.
//!
//! Theme files are line oriented `key value` pairs. Keys that are not colors
//! kitty can change at runtime are ignored. A line that names a color but
//! carries a bad value is skipped and recorded as a warning so one typo never
//! blocks the rest of the theme.

use std::fmt;
use std::fs;

use crate::error::CatalogError;
use crate::types::ThemeFile;

/// Color keys that also accept `none`.
const NULLABLE_KEYS: &[&str] = &[
	"selection_foreground",
	"selection_background",
	"cursor",
	"cursor_text_color",
	"active_border_color",
	"visual_bell_color",
	"tab_bar_background",
	"tab_bar_margin_color",
];

const COLOR_KEYS: &[&str] = &[
	"foreground",
	"background",
	"url_color",
	"inactive_border_color",
	"bell_border_color",
	"active_tab_foreground",
	"active_tab_background",
	"inactive_tab_foreground",
	"inactive_tab_background",
	"mark1_foreground",
	"mark1_background",
	"mark2_foreground",
	"mark2_background",
	"mark3_foreground",
	"mark3_background",
];

/// A 24-bit color, or `None` for settings that can be unset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorValue {
	Rgb(u32),
	None,
}

impl fmt::Display for ColorValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Rgb(rgb) => write!(f, "#{rgb:06x}"),
			Self::None => f.write_str("none"),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorDirective {
	pub key: String,
	pub value: ColorValue,
}

/// A theme line that was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectiveWarning {
	/// 1-based line number.
	pub line: usize,
	pub reason: String,
}

impl fmt::Display for DirectiveWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "line {}: {}", self.line, self.reason)
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorDirectives {
	pub directives: Vec<ColorDirective>,
	pub warnings: Vec<DirectiveWarning>,
}

impl ColorDirectives {
	/// Read and parse a theme file.
	pub fn load(theme: &ThemeFile) -> Result<Self, CatalogError> {
		let text = fs::read_to_string(theme.path()).map_err(|_| CatalogError::NotFound {
			path: theme.path().to_path_buf(),
		})?;
		Ok(Self::parse(&text))
	}

	pub fn parse(text: &str) -> Self {
		let mut parsed = Self::default();
		for (index, raw) in text.lines().enumerate() {
			let line = raw.trim();
			if line.is_empty() || line.starts_with('#') {
				continue;
			}

			let (key, value) = match line.split_once(char::is_whitespace) {
				Some((key, value)) => (key, value.trim()),
				None => (line, ""),
			};
			let nullable = NULLABLE_KEYS.contains(&key);
			if !nullable && !is_color_key(key) {
				continue;
			}

			match parse_value(key, value, nullable) {
				Ok(value) => parsed.directives.push(ColorDirective {
					key: key.to_string(),
					value,
				}),
				Err(reason) => parsed.warnings.push(DirectiveWarning {
					line: index + 1,
					reason,
				}),
			}
		}
		parsed
	}

	pub fn is_empty(&self) -> bool {
		self.directives.is_empty()
	}
}

fn is_color_key(key: &str) -> bool {
	if COLOR_KEYS.contains(&key) {
		return true;
	}
	key.strip_prefix("color")
		.filter(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
		.and_then(|index| index.parse::<u16>().ok())
		.is_some_and(|index| index <= 255)
}

fn parse_value(key: &str, value: &str, nullable: bool) -> Result<ColorValue, String> {
	if value.is_empty() {
		return Err(format!("'{key}' has no value"));
	}
	if nullable && value.eq_ignore_ascii_case("none") {
		return Ok(ColorValue::None);
	}
	// kitty draws the cursor text in the cell background color.
	if key == "cursor_text_color" && value.eq_ignore_ascii_case("background") {
		return Ok(ColorValue::None);
	}
	parse_hex(value)
		.map(ColorValue::Rgb)
		.ok_or_else(|| format!("'{value}' is not a valid color for '{key}'"))
}

fn parse_hex(value: &str) -> Option<u32> {
	let digits = value.strip_prefix('#')?;
	if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
		return None;
	}
	match digits.len() {
		6 => u32::from_str_radix(digits, 16).ok(),
		3 => {
			let short = u32::from_str_radix(digits, 16).ok()?;
			let (r, g, b) = ((short >> 8) & 0xf, (short >> 4) & 0xf, short & 0xf);
			Some((r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11)
		}
		_ => None,
	}
}
