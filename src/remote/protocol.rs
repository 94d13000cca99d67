use std::fmt;

use super::directives::ColorDirective;

/// A terminal window reachable through the control channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RemoteTarget {
	/// Whatever window the terminal considers active.
	Active,
	/// A window addressed by the id the terminal assigned to it.
	Window(u64),
}

impl fmt::Display for RemoteTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Active => f.write_str("active"),
			Self::Window(id) => write!(f, "window:{id}"),
		}
	}
}

/// Commands the client sends over a [`Connection`](super::Connection).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteCommand {
	/// No-op liveness probe.
	Ping,
	/// Ask the terminal which windows it has.
	ListTargets,
	/// Recolor one target.
	SetColors {
		target: RemoteTarget,
		colors: Vec<ColorDirective>,
	},
}

impl RemoteCommand {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Ping => "ping",
			Self::ListTargets => "list-targets",
			Self::SetColors { .. } => "set-colors",
		}
	}
}

/// Decoded answer to a single command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemoteResponse {
	pub ok: bool,
	pub message: Option<String>,
	/// Windows reported in answer to [`RemoteCommand::ListTargets`].
	pub targets: Vec<RemoteTarget>,
}

impl RemoteResponse {
	pub fn success() -> Self {
		Self {
			ok: true,
			..Self::default()
		}
	}

	pub fn failure(message: impl Into<String>) -> Self {
		Self {
			ok: false,
			message: Some(message.into()),
			targets: Vec::new(),
		}
	}

	pub fn with_targets(targets: Vec<RemoteTarget>) -> Self {
		Self {
			ok: true,
			message: None,
			targets,
		}
	}
}
