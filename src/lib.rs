//! Core crate for switching kitty color themes.
//!
//! The root module re-exports the engine and the types it works with so the
//! binary (or any embedder) does not have to dig through the module hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod links;
pub mod logging;
pub mod remote;
pub mod types;

pub use engine::{Confirm, CycleStep, EngineConfig, SwitchResult, ThemeEngine};
pub use error::{CatalogError, ChannelError, EngineError, StateError};
pub use types::{ThemeFile, ThemeSlot};
