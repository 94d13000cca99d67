use std::time::Duration;

use serde::Deserialize;

use kitty_theme::engine::DEFAULT_TIMEOUT;
use kitty_theme::remote::SocketAddress;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources};

/// Where kitty's `listen_on` usually points in a remote control setup.
const DEFAULT_SOCKET: &str = "unix:/tmp/kittysocket";

/// Remote control options as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RemoteSection {
    pub(super) socket: Option<String>,
    pub(super) timeout_ms: Option<u64>,
}

impl RemoteSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(socket) = cli.socket.clone() {
            self.socket = Some(socket);
        }
        if let Some(timeout) = cli.timeout_ms {
            self.timeout_ms = Some(timeout);
        }
    }

    pub(super) fn resolve(
        self,
        sources: &ConfigSources,
    ) -> Result<(SocketAddress, Duration), ConfigError> {
        let raw = self.socket.unwrap_or_else(|| DEFAULT_SOCKET.to_string());
        let socket = SocketAddress::parse(&raw).map_err(|_| {
            ConfigError::invalid(
                "remote.socket",
                raw.clone(),
                sources.source_for_socket(),
                "expected unix:/path, unix:@name or tcp:host:port",
            )
        })?;

        let timeout = self
            .timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok((socket, timeout))
    }
}
