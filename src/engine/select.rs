use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{ThemeFile, ThemeSlot};

/// Picks the theme used to seed an empty slot on first run.
pub trait ThemeSelector {
	fn select<'a>(&mut self, slot: ThemeSlot, themes: &'a [ThemeFile]) -> Option<&'a ThemeFile>;
}

/// Uniformly random choice.
#[derive(Debug)]
pub struct RandomSelector<R = ThreadRng> {
	rng: R,
}

impl RandomSelector<ThreadRng> {
	pub fn new() -> Self {
		Self {
			rng: rand::thread_rng(),
		}
	}
}

impl Default for RandomSelector<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl RandomSelector<StdRng> {
	/// Deterministic selector for reproducible seeding.
	pub fn seeded(seed: u64) -> Self {
		Self {
			rng: StdRng::seed_from_u64(seed),
		}
	}
}

impl<R: Rng> ThemeSelector for RandomSelector<R> {
	fn select<'a>(&mut self, _slot: ThemeSlot, themes: &'a [ThemeFile]) -> Option<&'a ThemeFile> {
		themes.choose(&mut self.rng)
	}
}
