//! Transport abstraction for talking to running terminals.

use std::fmt;
use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::trace;

use super::codec::{KittyCodec, WireCodec};
use super::protocol::{RemoteCommand, RemoteResponse};
use crate::error::ChannelError;

/// Largest response accepted before a frame terminator shows up.
const MAX_RESPONSE_LEN: usize = 4 * 1024 * 1024;

/// Something that can open connections to the terminal.
pub trait Channel {
	/// Human readable address used in error messages.
	fn address(&self) -> String;

	fn connect(&self) -> Result<Box<dyn Connection>, ChannelError>;
}

/// One open connection. A command is sent whole and answered once.
pub trait Connection {
	fn send(&mut self, command: &RemoteCommand) -> Result<(), ChannelError>;

	fn receive(&mut self) -> Result<RemoteResponse, ChannelError>;
}

/// Where the terminal listens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SocketAddress {
	Unix(PathBuf),
	/// Linux abstract namespace socket (`unix:@name`).
	Abstract(String),
	Tcp(String),
}

impl SocketAddress {
	/// Parse kitty's `--listen-on` syntax: `unix:/path`, `unix:@name` or
	/// `tcp:host:port`.
	pub fn parse(value: &str) -> Result<Self, ChannelError> {
		let value = value.trim();
		if let Some(rest) = value.strip_prefix("unix:") {
			if let Some(name) = rest.strip_prefix('@') {
				return Ok(Self::Abstract(name.to_string()));
			}
			if !rest.is_empty() {
				return Ok(Self::Unix(PathBuf::from(rest)));
			}
		}
		if let Some(rest) = value.strip_prefix("tcp:")
			&& !rest.is_empty()
		{
			return Ok(Self::Tcp(rest.to_string()));
		}
		Err(ChannelError::unavailable(
			value,
			"expected unix:/path, unix:@name or tcp:host:port",
		))
	}
}

impl fmt::Display for SocketAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unix(path) => write!(f, "unix:{}", path.display()),
			Self::Abstract(name) => write!(f, "unix:@{name}"),
			Self::Tcp(addr) => write!(f, "tcp:{addr}"),
		}
	}
}

/// [`Channel`] over a unix or tcp socket with a pluggable wire codec.
#[derive(Clone)]
pub struct SocketChannel {
	address: SocketAddress,
	timeout: Duration,
	codec: Arc<dyn WireCodec>,
}

impl SocketChannel {
	/// Channel speaking kitty's protocol.
	pub fn kitty(address: SocketAddress, timeout: Duration) -> Self {
		Self::with_codec(address, timeout, Arc::new(KittyCodec))
	}

	pub fn with_codec(address: SocketAddress, timeout: Duration, codec: Arc<dyn WireCodec>) -> Self {
		Self {
			address,
			timeout,
			codec,
		}
	}

	fn open(&self) -> io::Result<Stream> {
		let stream = match &self.address {
			SocketAddress::Unix(path) => Stream::Unix(UnixStream::connect(path)?),
			SocketAddress::Abstract(name) => Stream::Unix(connect_abstract(name)?),
			SocketAddress::Tcp(addr) => {
				let resolved = addr.to_socket_addrs()?.next().ok_or_else(|| {
					io::Error::new(io::ErrorKind::NotFound, "address did not resolve")
				})?;
				Stream::Tcp(TcpStream::connect_timeout(&resolved, self.timeout)?)
			}
		};
		stream.set_timeout(self.timeout)?;
		Ok(stream)
	}
}

impl Channel for SocketChannel {
	fn address(&self) -> String {
		self.address.to_string()
	}

	fn connect(&self) -> Result<Box<dyn Connection>, ChannelError> {
		let stream = self
			.open()
			.map_err(|err| ChannelError::unavailable(self.address(), err.to_string()))?;
		Ok(Box::new(SocketConnection {
			stream,
			codec: Arc::clone(&self.codec),
			timeout: self.timeout,
			deadline: None,
			pending: None,
			buffer: Vec::new(),
		}))
	}
}

#[cfg(target_os = "linux")]
fn connect_abstract(name: &str) -> io::Result<UnixStream> {
	use std::os::linux::net::SocketAddrExt;
	use std::os::unix::net::SocketAddr;

	let addr = SocketAddr::from_abstract_name(name.as_bytes())?;
	UnixStream::connect_addr(&addr)
}

#[cfg(not(target_os = "linux"))]
fn connect_abstract(_name: &str) -> io::Result<UnixStream> {
	Err(io::Error::new(
		io::ErrorKind::Unsupported,
		"abstract sockets are only available on Linux",
	))
}

enum Stream {
	Unix(UnixStream),
	Tcp(TcpStream),
}

impl Stream {
	fn set_read_timeout(&self, timeout: Duration) -> io::Result<()> {
		match self {
			Self::Unix(stream) => stream.set_read_timeout(Some(timeout)),
			Self::Tcp(stream) => stream.set_read_timeout(Some(timeout)),
		}
	}

	fn set_timeout(&self, timeout: Duration) -> io::Result<()> {
		match self {
			Self::Unix(stream) => {
				stream.set_read_timeout(Some(timeout))?;
				stream.set_write_timeout(Some(timeout))
			}
			Self::Tcp(stream) => {
				stream.set_read_timeout(Some(timeout))?;
				stream.set_write_timeout(Some(timeout))
			}
		}
	}
}

impl Read for Stream {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		match self {
			Self::Unix(stream) => stream.read(buf),
			Self::Tcp(stream) => stream.read(buf),
		}
	}
}

impl Write for Stream {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		match self {
			Self::Unix(stream) => stream.write(buf),
			Self::Tcp(stream) => stream.write(buf),
		}
	}

	fn flush(&mut self) -> io::Result<()> {
		match self {
			Self::Unix(stream) => stream.flush(),
			Self::Tcp(stream) => stream.flush(),
		}
	}
}

struct SocketConnection {
	stream: Stream,
	codec: Arc<dyn WireCodec>,
	timeout: Duration,
	/// Whole round trip must finish by this instant.
	deadline: Option<Instant>,
	pending: Option<RemoteCommand>,
	buffer: Vec<u8>,
}

impl Connection for SocketConnection {
	fn send(&mut self, command: &RemoteCommand) -> Result<(), ChannelError> {
		let bytes = self.codec.encode(command)?;
		self.deadline = Some(Instant::now() + self.timeout);
		trace!("sending {} ({} bytes)", command.name(), bytes.len());
		self.stream
			.write_all(&bytes)
			.and_then(|()| self.stream.flush())
			.map_err(io_error)?;
		self.pending = Some(command.clone());
		Ok(())
	}

	fn receive(&mut self) -> Result<RemoteResponse, ChannelError> {
		let command = self
			.pending
			.take()
			.ok_or_else(|| ChannelError::protocol("receive called before send"))?;
		let deadline = self
			.deadline
			.take()
			.unwrap_or_else(|| Instant::now() + self.timeout);

		let mut chunk = [0u8; 4096];
		loop {
			if let Some(len) = self.codec.frame_len(&self.buffer) {
				let frame: Vec<u8> = self.buffer.drain(..len).collect();
				return self.codec.decode(&command, &frame);
			}
			if self.buffer.len() > MAX_RESPONSE_LEN {
				return Err(ChannelError::protocol(format!(
					"response exceeded {MAX_RESPONSE_LEN} bytes without a frame terminator"
				)));
			}
			let remaining = deadline.saturating_duration_since(Instant::now());
			if remaining.is_zero() {
				return Err(ChannelError::Timeout);
			}
			self.stream.set_read_timeout(remaining).map_err(io_error)?;
			let read = self.stream.read(&mut chunk).map_err(io_error)?;
			if read == 0 {
				return Err(ChannelError::protocol(
					"connection closed before a response arrived",
				));
			}
			self.buffer.extend_from_slice(&chunk[..read]);
		}
	}
}

fn io_error(err: io::Error) -> ChannelError {
	match err.kind() {
		io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => ChannelError::Timeout,
		_ => ChannelError::protocol(err.to_string()),
	}
}
