//! Configuration loading and resolution.
//!
//! `load` layers config files, environment variables and CLI flags, then
//! resolves them into the [`EngineConfig`](kitty_theme::EngineConfig) the
//! engine is built from.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
