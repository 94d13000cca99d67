use crate::types::ThemeFile;

/// Answer to the prompt shown after each previewed theme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CycleStep {
	Next,
	Cancel,
}

/// Blocks until the user decides whether to keep cycling.
pub trait Confirm {
	/// `position` is 1-based.
	fn confirm(&mut self, theme: &ThemeFile, position: usize, total: usize) -> CycleStep;
}

impl<F> Confirm for F
where
	F: FnMut(&ThemeFile, usize, usize) -> CycleStep,
{
	fn confirm(&mut self, theme: &ThemeFile, position: usize, total: usize) -> CycleStep {
		self(theme, position, total)
	}
}
