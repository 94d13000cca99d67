//! Plain data types shared across the catalog, link manager and engine.

mod slot;
mod theme;

pub use slot::{ParseSlotError, ThemeSlot};
pub use theme::ThemeFile;
