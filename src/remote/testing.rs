//! In-memory channel used by the remote client and engine tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Channel, Connection, RemoteCommand, RemoteResponse, RemoteTarget};
use crate::error::ChannelError;

#[derive(Clone, Debug)]
pub(crate) enum Behavior {
	Accept,
	Timeout,
	Reject(&'static str),
}

/// Terminal double with a fixed set of windows and scripted answers.
#[derive(Clone, Default)]
pub(crate) struct ScriptedChannel {
	pub(crate) offline: bool,
	pub(crate) windows: Vec<u64>,
	pub(crate) behaviors: HashMap<u64, Behavior>,
	pub(crate) sent: Rc<RefCell<Vec<RemoteCommand>>>,
}

impl ScriptedChannel {
	pub(crate) fn with_windows(windows: &[u64]) -> Self {
		Self {
			windows: windows.to_vec(),
			..Self::default()
		}
	}

	pub(crate) fn offline() -> Self {
		Self {
			offline: true,
			..Self::default()
		}
	}

	pub(crate) fn behave(mut self, window: u64, behavior: Behavior) -> Self {
		self.behaviors.insert(window, behavior);
		self
	}

	/// Handle onto the commands every connection received.
	pub(crate) fn log(&self) -> Rc<RefCell<Vec<RemoteCommand>>> {
		Rc::clone(&self.sent)
	}
}

impl Channel for ScriptedChannel {
	fn address(&self) -> String {
		"unix:/scripted".to_string()
	}

	fn connect(&self) -> Result<Box<dyn Connection>, ChannelError> {
		if self.offline {
			return Err(ChannelError::unavailable(
				self.address(),
				"connection refused",
			));
		}
		Ok(Box::new(ScriptedConnection {
			channel: self.clone(),
			pending: None,
		}))
	}
}

struct ScriptedConnection {
	channel: ScriptedChannel,
	pending: Option<RemoteCommand>,
}

impl Connection for ScriptedConnection {
	fn send(&mut self, command: &RemoteCommand) -> Result<(), ChannelError> {
		self.channel.sent.borrow_mut().push(command.clone());
		self.pending = Some(command.clone());
		Ok(())
	}

	fn receive(&mut self) -> Result<RemoteResponse, ChannelError> {
		match self.pending.take() {
			Some(RemoteCommand::Ping) => Ok(RemoteResponse::success()),
			Some(RemoteCommand::ListTargets) => Ok(RemoteResponse::with_targets(
				self.channel
					.windows
					.iter()
					.copied()
					.map(RemoteTarget::Window)
					.collect(),
			)),
			Some(RemoteCommand::SetColors { target, .. }) => {
				let behavior = match target {
					RemoteTarget::Window(id) => self.channel.behaviors.get(&id).cloned(),
					RemoteTarget::Active => None,
				};
				match behavior.unwrap_or(Behavior::Accept) {
					Behavior::Accept => Ok(RemoteResponse::success()),
					Behavior::Timeout => Err(ChannelError::Timeout),
					Behavior::Reject(message) => Ok(RemoteResponse::failure(message)),
				}
			}
			None => Err(ChannelError::protocol("receive called before send")),
		}
	}
}
