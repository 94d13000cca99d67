use crate::error::ChannelError;
use crate::remote::LiveReport;
use crate::types::{ThemeFile, ThemeSlot};

/// What a single engine operation did.
#[derive(Debug, Default)]
pub struct SwitchResult {
	/// Slot that was updated or inspected.
	pub slot: Option<ThemeSlot>,
	/// Theme that slot now resolves to, or the theme that was pushed live.
	pub theme: Option<ThemeFile>,
	/// Whether `slot` is the active one once the operation finished.
	pub active: bool,
	/// Slots filled by first-run seeding during this call.
	pub seeded: Vec<(ThemeSlot, ThemeFile)>,
	/// Live deliveries, one per theme pushed.
	pub live: Vec<LiveReport>,
	/// Set when live propagation was requested but the channel was closed.
	/// The link change (if any) stands regardless.
	pub live_error: Option<ChannelError>,
	/// Whether a test cycle stopped before its last theme.
	pub cancelled: bool,
}

impl SwitchResult {
	pub(crate) fn for_slot(slot: ThemeSlot, theme: ThemeFile, active: bool) -> Self {
		Self {
			slot: Some(slot),
			theme: Some(theme),
			active,
			..Self::default()
		}
	}

	/// True when nothing that was attempted failed.
	pub fn is_clean(&self) -> bool {
		self.live_error.is_none() && self.live.iter().all(LiveReport::all_succeeded)
	}
}
