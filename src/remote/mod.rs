//! Push theme colors into running terminals through their control channel.

mod channel;
mod codec;
mod directives;
mod protocol;

use log::{debug, info, warn};

pub use channel::{Channel, Connection, SocketAddress, SocketChannel};
pub use codec::{KittyCodec, WireCodec};
pub use directives::{ColorDirective, ColorDirectives, ColorValue, DirectiveWarning};
pub use protocol::{RemoteCommand, RemoteResponse, RemoteTarget};

use crate::error::{ChannelError, EngineError};
use crate::types::ThemeFile;

/// Delivery result for a single target.
#[derive(Debug)]
pub struct TargetOutcome {
	pub target: RemoteTarget,
	pub error: Option<ChannelError>,
}

impl TargetOutcome {
	pub fn success(&self) -> bool {
		self.error.is_none()
	}
}

/// Result of pushing one theme to running terminals.
#[derive(Debug)]
pub struct LiveReport {
	pub theme: ThemeFile,
	/// Number of color directives sent to each target.
	pub applied: usize,
	pub warnings: Vec<DirectiveWarning>,
	pub outcomes: Vec<TargetOutcome>,
}

impl LiveReport {
	pub fn all_succeeded(&self) -> bool {
		self.outcomes.iter().all(TargetOutcome::success)
	}

	pub fn failures(&self) -> impl Iterator<Item = &TargetOutcome> {
		self.outcomes.iter().filter(|outcome| !outcome.success())
	}
}

/// Sends remote control commands over a [`Channel`].
pub struct RemoteControlClient {
	channel: Box<dyn Channel>,
}

impl RemoteControlClient {
	pub fn new(channel: Box<dyn Channel>) -> Self {
		Self { channel }
	}

	/// Whether any terminal answers on the channel. Never fails.
	pub fn ping(&self) -> bool {
		match self.round_trip(&RemoteCommand::Ping) {
			Ok(response) => response.ok,
			Err(err) => {
				debug!("ping to {} failed: {err}", self.channel.address());
				false
			}
		}
	}

	/// Recolor every window the terminal reports.
	///
	/// Each window gets its own connection and its own outcome; a failing
	/// window never stops delivery to the rest. Only a channel that cannot be
	/// opened (or refuses to list its windows) fails the whole call.
	pub fn apply_live(&self, theme: &ThemeFile) -> Result<LiveReport, EngineError> {
		let directives = load_directives(theme)?;
		let targets = self.list_targets()?;
		info!(
			"applying {} to {} terminal window(s)",
			theme.name(),
			targets.len()
		);

		let outcomes = targets
			.into_iter()
			.map(|target| self.deliver(target, &directives.directives))
			.collect();
		Ok(report(theme, directives, outcomes))
	}

	/// Recolor only the terminal's active window.
	pub fn preview(&self, theme: &ThemeFile) -> Result<LiveReport, EngineError> {
		let directives = load_directives(theme)?;
		let TargetOutcome { target, error } =
			self.deliver(RemoteTarget::Active, &directives.directives);
		match error {
			Some(err @ ChannelError::Unavailable { .. }) => Err(err.into()),
			error => Ok(report(theme, directives, vec![TargetOutcome { target, error }])),
		}
	}

	fn list_targets(&self) -> Result<Vec<RemoteTarget>, ChannelError> {
		let unavailable = |reason: String| ChannelError::unavailable(self.channel.address(), reason);
		match self.round_trip(&RemoteCommand::ListTargets) {
			Ok(response) if response.ok => Ok(response.targets),
			Ok(response) => Err(unavailable(
				response
					.message
					.unwrap_or_else(|| "terminal refused to list windows".to_string()),
			)),
			Err(err @ ChannelError::Unavailable { .. }) => Err(err),
			Err(err) => Err(unavailable(err.to_string())),
		}
	}

	fn deliver(&self, target: RemoteTarget, colors: &[ColorDirective]) -> TargetOutcome {
		let command = RemoteCommand::SetColors {
			target,
			colors: colors.to_vec(),
		};
		let error = match self.round_trip(&command) {
			Ok(response) if response.ok => None,
			Ok(response) => Some(ChannelError::Rejected {
				message: response
					.message
					.unwrap_or_else(|| "no reason given".to_string()),
			}),
			Err(err) => Some(err),
		};
		if let Some(err) = &error {
			warn!("failed to update {target}: {err}");
		}
		TargetOutcome { target, error }
	}

	fn round_trip(&self, command: &RemoteCommand) -> Result<RemoteResponse, ChannelError> {
		let mut connection = self.channel.connect()?;
		connection.send(command)?;
		connection.receive()
	}
}

fn load_directives(theme: &ThemeFile) -> Result<ColorDirectives, EngineError> {
	let directives = ColorDirectives::load(theme)?;
	for warning in &directives.warnings {
		warn!("{}: skipped {warning}", theme.file_name());
	}
	Ok(directives)
}

fn report(theme: &ThemeFile, directives: ColorDirectives, outcomes: Vec<TargetOutcome>) -> LiveReport {
	LiveReport {
		theme: theme.clone(),
		applied: directives.directives.len(),
		warnings: directives.warnings,
		outcomes,
	}
}

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod tests;
