//! Error types surfaced by the theme switching engine and its components.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the theme directory.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The theme directory is missing or cannot be read.
	#[error("theme directory {} does not exist or is not readable", path.display())]
	NotFound { path: PathBuf },

	/// No theme with the requested name exists in the theme directory.
	#[error("theme '{name}' does not exist (use --list to see available themes)")]
	UnknownTheme { name: String },
}

/// Failures while inspecting or mutating the symlink chain.
#[derive(Debug, Error)]
pub enum StateError {
	/// The link chain is not established and could not be seeded.
	#[error("theme links are not configured: {reason}")]
	Unconfigured { reason: String },

	/// A link path is occupied by something other than a usable symlink.
	#[error("{} is not a symlink to a regular file; refusing to overwrite it", path.display())]
	LinkConflict { path: PathBuf },

	/// The filesystem rejected a link operation.
	#[error("failed to update link {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl StateError {
	pub(crate) fn unconfigured(reason: impl Into<String>) -> Self {
		Self::Unconfigured {
			reason: reason.into(),
		}
	}

	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}

/// Failures talking to running terminals over the control channel.
#[derive(Debug, Error)]
pub enum ChannelError {
	/// The control socket could not be opened at all.
	#[error("control channel {address} is unavailable: {reason}")]
	Unavailable { address: String, reason: String },

	/// A target did not answer within the configured timeout.
	#[error("timed out waiting for the terminal to respond")]
	Timeout,

	/// A target answered but refused the command.
	#[error("terminal rejected the command: {message}")]
	Rejected { message: String },

	/// A target answered with something the codec could not understand.
	#[error("malformed response from terminal: {reason}")]
	Protocol { reason: String },
}

impl ChannelError {
	pub(crate) fn unavailable(address: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::Unavailable {
			address: address.into(),
			reason: reason.into(),
		}
	}

	pub(crate) fn protocol(reason: impl Into<String>) -> Self {
		Self::Protocol {
			reason: reason.into(),
		}
	}

	/// Short machine friendly label used in reports.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Unavailable { .. } => "unavailable",
			Self::Timeout => "timeout",
			Self::Rejected { .. } => "rejected",
			Self::Protocol { .. } => "protocol",
		}
	}
}

/// Any error the engine reports to its caller.
#[derive(Debug, Error)]
pub enum EngineError {
	#[error(transparent)]
	Catalog(#[from] CatalogError),

	#[error(transparent)]
	State(#[from] StateError),

	#[error(transparent)]
	Channel(#[from] ChannelError),
}
