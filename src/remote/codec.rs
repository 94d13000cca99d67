//! Wire encodings for the control channel.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::directives::ColorValue;
use super::protocol::{RemoteCommand, RemoteResponse, RemoteTarget};
use crate::error::ChannelError;

/// Translates commands to bytes and response frames back to values.
pub trait WireCodec: Send + Sync {
	fn encode(&self, command: &RemoteCommand) -> Result<Vec<u8>, ChannelError>;

	/// Length of the first complete response frame in `buffer`, if one has
	/// arrived yet.
	fn frame_len(&self, buffer: &[u8]) -> Option<usize>;

	/// Decode a complete frame received in answer to `command`.
	fn decode(&self, command: &RemoteCommand, frame: &[u8]) -> Result<RemoteResponse, ChannelError>;
}

const FRAME_PREFIX: &[u8] = b"\x1bP@kitty-cmd";
const FRAME_SUFFIX: &[u8] = b"\x1b\\";
const PROTOCOL_VERSION: [u32; 3] = [0, 26, 0];

/// kitty's remote control protocol: JSON wrapped in a DCS escape sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct KittyCodec;

#[derive(Serialize)]
struct Envelope<'a> {
	cmd: &'a str,
	version: [u32; 3],
	no_response: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	payload: Option<SetColorsPayload>,
}

#[derive(Serialize)]
struct SetColorsPayload {
	colors: BTreeMap<String, Option<u32>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	match_window: Option<String>,
	all: bool,
	configured: bool,
	reset: bool,
}

#[derive(Deserialize)]
struct ResponseEnvelope {
	ok: bool,
	#[serde(default)]
	data: Option<Value>,
	#[serde(default)]
	error: Option<String>,
}

impl WireCodec for KittyCodec {
	fn encode(&self, command: &RemoteCommand) -> Result<Vec<u8>, ChannelError> {
		let envelope = match command {
			RemoteCommand::Ping | RemoteCommand::ListTargets => Envelope {
				cmd: "ls",
				version: PROTOCOL_VERSION,
				no_response: false,
				payload: None,
			},
			RemoteCommand::SetColors { target, colors } => {
				let colors = colors
					.iter()
					.map(|directive| {
						let value = match directive.value {
							ColorValue::Rgb(rgb) => Some(rgb),
							ColorValue::None => None,
						};
						(directive.key.clone(), value)
					})
					.collect();
				let match_window = match target {
					RemoteTarget::Active => None,
					RemoteTarget::Window(id) => Some(format!("id:{id}")),
				};
				Envelope {
					cmd: "set-colors",
					version: PROTOCOL_VERSION,
					no_response: false,
					payload: Some(SetColorsPayload {
						colors,
						match_window,
						all: false,
						configured: false,
						reset: false,
					}),
				}
			}
		};

		let json = serde_json::to_vec(&envelope)
			.map_err(|err| ChannelError::protocol(format!("failed to encode command: {err}")))?;
		let mut frame = Vec::with_capacity(FRAME_PREFIX.len() + json.len() + FRAME_SUFFIX.len());
		frame.extend_from_slice(FRAME_PREFIX);
		frame.extend_from_slice(&json);
		frame.extend_from_slice(FRAME_SUFFIX);
		Ok(frame)
	}

	fn frame_len(&self, buffer: &[u8]) -> Option<usize> {
		let start = find(buffer, FRAME_PREFIX)?;
		let body = start + FRAME_PREFIX.len();
		let end = find(&buffer[body..], FRAME_SUFFIX)?;
		Some(body + end + FRAME_SUFFIX.len())
	}

	fn decode(&self, command: &RemoteCommand, frame: &[u8]) -> Result<RemoteResponse, ChannelError> {
		let start = find(frame, FRAME_PREFIX)
			.ok_or_else(|| ChannelError::protocol("response is missing the kitty-cmd prefix"))?;
		let body = &frame[start + FRAME_PREFIX.len()..];
		let body = body.strip_suffix(FRAME_SUFFIX).unwrap_or(body);

		let envelope: ResponseEnvelope = serde_json::from_slice(body)
			.map_err(|err| ChannelError::protocol(format!("invalid response JSON: {err}")))?;
		if !envelope.ok {
			return Ok(RemoteResponse::failure(
				envelope.error.unwrap_or_else(|| "unknown error".to_string()),
			));
		}

		let targets = match (command, envelope.data) {
			(RemoteCommand::ListTargets, Some(data)) => window_ids(data)?,
			(RemoteCommand::ListTargets, None) => {
				return Err(ChannelError::protocol("window listing carried no data"));
			}
			_ => Vec::new(),
		};
		Ok(RemoteResponse::with_targets(targets))
	}
}

/// Collect window ids from kitty's `ls` output (os windows, tabs, windows).
fn window_ids(data: Value) -> Result<Vec<RemoteTarget>, ChannelError> {
	let tree: Value = match data {
		Value::String(text) => serde_json::from_str(&text)
			.map_err(|err| ChannelError::protocol(format!("invalid window listing: {err}")))?,
		other => other,
	};

	let os_windows = tree
		.as_array()
		.ok_or_else(|| ChannelError::protocol("window listing is not a list"))?;
	let ids = os_windows
		.iter()
		.filter_map(|os_window| os_window.get("tabs")?.as_array())
		.flatten()
		.filter_map(|tab| tab.get("windows")?.as_array())
		.flatten()
		.filter_map(|window| window.get("id")?.as_u64())
		.map(RemoteTarget::Window)
		.collect();
	Ok(ids)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}
